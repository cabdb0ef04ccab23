//! Conversion between plain JSON field maps and Firestore REST typed values.

use chrono::DateTime;
use platform_host::{
    Collection, Document, FieldFilter, Fields, ListQuery, SortDirection, StoreError,
};
use serde_json::{json, Map, Value};

/// Encodes a plain JSON value as a Firestore typed value.
pub(crate) fn encode_value(value: &Value) -> Value {
    match value {
        Value::Null => json!({ "nullValue": null }),
        Value::Bool(b) => json!({ "booleanValue": b }),
        Value::Number(n) => match n.as_i64() {
            Some(i) => json!({ "integerValue": i.to_string() }),
            None => json!({ "doubleValue": n.as_f64().unwrap_or_default() }),
        },
        Value::String(s) => json!({ "stringValue": s }),
        Value::Array(items) => {
            if items.is_empty() {
                json!({ "arrayValue": {} })
            } else {
                let values: Vec<Value> = items.iter().map(encode_value).collect();
                json!({ "arrayValue": { "values": values } })
            }
        }
        Value::Object(map) => json!({ "mapValue": { "fields": encode_fields(map) } }),
    }
}

/// Encodes every field of a map.
pub(crate) fn encode_fields(fields: &Map<String, Value>) -> Map<String, Value> {
    fields
        .iter()
        .map(|(name, value)| (name.clone(), encode_value(value)))
        .collect()
}

/// How a commit write treats the target document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum WriteKind<'a> {
    /// Writes a new document; fails if one already exists.
    Create,
    /// Writes only `mask` on an existing document. Masked paths missing from the fields are
    /// deleted.
    Patch { mask: &'a [String] },
}

/// Body of a `documents:commit` request holding one write to document `name`.
///
/// Null fields are left out of the document so a patch mask deletes them. `stamps` are set
/// to the server's request time.
pub(crate) fn commit_body(
    name: &str,
    fields: &Fields,
    kind: WriteKind<'_>,
    stamps: &[&str],
) -> Value {
    let stored: Map<String, Value> = fields
        .iter()
        .filter(|(_, value)| !value.is_null())
        .map(|(field, value)| (field.clone(), encode_value(value)))
        .collect();
    let mut write = json!({ "update": { "name": name, "fields": stored } });
    match kind {
        WriteKind::Create => write["currentDocument"] = json!({ "exists": false }),
        WriteKind::Patch { mask } => {
            write["currentDocument"] = json!({ "exists": true });
            write["updateMask"] = json!({ "fieldPaths": mask });
        }
    }
    if !stamps.is_empty() {
        let transforms: Vec<Value> = stamps
            .iter()
            .map(|path| json!({ "fieldPath": path, "setToServerValue": "REQUEST_TIME" }))
            .collect();
        write["updateTransforms"] = Value::Array(transforms);
    }
    json!({ "writes": [write] })
}

/// Decodes a Firestore typed value into plain JSON. Timestamps become unix milliseconds.
pub(crate) fn decode_value(value: &Value) -> Value {
    let Some(object) = value.as_object() else {
        return Value::Null;
    };
    let Some((kind, inner)) = object.iter().next() else {
        return Value::Null;
    };
    match kind.as_str() {
        "nullValue" => Value::Null,
        "booleanValue" => Value::Bool(inner.as_bool().unwrap_or_default()),
        "integerValue" => inner
            .as_str()
            .and_then(|raw| raw.parse::<i64>().ok())
            .or_else(|| inner.as_i64())
            .map(Value::from)
            .unwrap_or(Value::Null),
        "doubleValue" => inner.as_f64().map(Value::from).unwrap_or(Value::Null),
        "timestampValue" => inner
            .as_str()
            .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
            .map(|time| Value::from(time.timestamp_millis()))
            .unwrap_or(Value::Null),
        "stringValue" | "referenceValue" | "bytesValue" => inner.clone(),
        "arrayValue" => Value::Array(
            inner
                .get("values")
                .and_then(Value::as_array)
                .map(|values| values.iter().map(decode_value).collect())
                .unwrap_or_default(),
        ),
        "mapValue" => Value::Object(
            inner
                .get("fields")
                .and_then(Value::as_object)
                .map(decode_fields)
                .unwrap_or_default(),
        ),
        "geoPointValue" => inner.clone(),
        _ => Value::Null,
    }
}

/// Decodes every field of a Firestore `fields` map.
pub(crate) fn decode_fields(fields: &Map<String, Value>) -> Fields {
    fields
        .iter()
        .map(|(name, value)| (name.clone(), decode_value(value)))
        .collect()
}

/// Extracts the trailing id segment of a document resource name.
pub(crate) fn document_id(name: &str) -> &str {
    name.rsplit('/').next().unwrap_or(name)
}

/// Decodes a Firestore document resource into a [`Document`].
pub(crate) fn decode_document(resource: &Value) -> Result<Document, StoreError> {
    let name = resource
        .get("name")
        .and_then(Value::as_str)
        .ok_or_else(|| StoreError::Transport("document without a name".to_string()))?;
    let fields = resource
        .get("fields")
        .and_then(Value::as_object)
        .map(decode_fields)
        .unwrap_or_default();
    Ok(Document::new(document_id(name), fields))
}

fn field_filter(filter: &FieldFilter) -> Value {
    json!({
        "fieldFilter": {
            "field": { "fieldPath": filter.field },
            "op": "EQUAL",
            "value": encode_value(&filter.value),
        }
    })
}

/// Builds a `runQuery` request body for `query` over `collection`.
pub(crate) fn structured_query(collection: Collection, query: &ListQuery) -> Value {
    let mut structured = Map::new();
    structured.insert(
        "from".to_string(),
        json!([{ "collectionId": collection.as_str() }]),
    );

    match query.filters.as_slice() {
        [] => {}
        [single] => {
            structured.insert("where".to_string(), field_filter(single));
        }
        many => {
            let filters: Vec<Value> = many.iter().map(field_filter).collect();
            structured.insert(
                "where".to_string(),
                json!({ "compositeFilter": { "op": "AND", "filters": filters } }),
            );
        }
    }

    if let Some(order) = &query.order_by {
        let direction = match order.direction {
            SortDirection::Ascending => "ASCENDING",
            SortDirection::Descending => "DESCENDING",
        };
        structured.insert(
            "orderBy".to_string(),
            json!([{ "field": { "fieldPath": order.field }, "direction": direction }]),
        );
    }

    if let Some(limit) = query.limit {
        structured.insert("limit".to_string(), json!(limit));
    }

    json!({ "structuredQuery": Value::Object(structured) })
}

/// Parses a `runQuery` response array. Entries without a document (read-time markers) are
/// skipped.
pub(crate) fn decode_run_query(body: &str) -> Result<Vec<Document>, StoreError> {
    let entries: Vec<Value> =
        serde_json::from_str(body).map_err(|err| StoreError::Transport(err.to_string()))?;
    entries
        .iter()
        .filter_map(|entry| entry.get("document"))
        .map(decode_document)
        .collect()
}

/// Extracts the `error.message` text from a Firestore error body, falling back to the raw body.
pub(crate) fn error_message(status: u16, body: &str) -> String {
    let message = serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("error")
                .and_then(|err| err.get("message"))
                .and_then(Value::as_str)
                .map(str::to_string)
        })
        .unwrap_or_else(|| body.trim().to_string());
    format!("HTTP {status}: {message}")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn scalar_values_encode_with_firestore_tags() {
        assert_eq!(encode_value(&json!(true)), json!({"booleanValue": true}));
        assert_eq!(encode_value(&json!(42)), json!({"integerValue": "42"}));
        assert_eq!(encode_value(&json!(1.5)), json!({"doubleValue": 1.5}));
        assert_eq!(encode_value(&json!("lụa")), json!({"stringValue": "lụa"}));
        assert_eq!(encode_value(&json!([])), json!({"arrayValue": {}}));
    }

    #[test]
    fn nested_values_decode_to_plain_json() {
        let typed = json!({
            "mapValue": {
                "fields": {
                    "imageUrls": {"arrayValue": {"values": [{"stringValue": "a"}, {"stringValue": "b"}]}},
                    "pricePerMeter": {"integerValue": "280000"},
                    "isActive": {"booleanValue": true},
                    "empty": {"arrayValue": {}}
                }
            }
        });
        assert_eq!(
            decode_value(&typed),
            json!({
                "imageUrls": ["a", "b"],
                "pricePerMeter": 280000,
                "isActive": true,
                "empty": []
            })
        );
    }

    #[test]
    fn timestamps_decode_to_unix_millis() {
        let typed = json!({"timestampValue": "2024-01-02T03:04:05.678Z"});
        assert_eq!(decode_value(&typed), json!(1_704_164_645_678_i64));
    }

    #[test]
    fn create_commit_sets_timestamps_on_the_server() {
        let mut fields = Fields::new();
        fields.insert("title".to_string(), json!("Sale"));
        let body = commit_body(
            "projects/p/databases/(default)/documents/banners/b1",
            &fields,
            WriteKind::Create,
            Collection::Banners.create_timestamps(),
        );
        assert_eq!(
            body,
            json!({
                "writes": [{
                    "update": {
                        "name": "projects/p/databases/(default)/documents/banners/b1",
                        "fields": {"title": {"stringValue": "Sale"}}
                    },
                    "currentDocument": {"exists": false},
                    "updateTransforms": [
                        {"fieldPath": "createdAt", "setToServerValue": "REQUEST_TIME"},
                        {"fieldPath": "updatedAt", "setToServerValue": "REQUEST_TIME"}
                    ]
                }]
            })
        );
    }

    #[test]
    fn patch_commit_masks_cleared_fields_without_writing_them() {
        let mut fields = Fields::new();
        fields.insert("name".to_string(), json!("Lụa"));
        fields.insert("fabricId".to_string(), Value::Null);
        let mask = vec!["fabricId".to_string(), "name".to_string()];
        let body = commit_body(
            "projects/p/databases/(default)/documents/products/p1",
            &fields,
            WriteKind::Patch { mask: &mask },
            &["updatedAt"],
        );
        let write = &body["writes"][0];
        assert_eq!(write["update"]["fields"], json!({"name": {"stringValue": "Lụa"}}));
        assert_eq!(write["updateMask"], json!({"fieldPaths": ["fabricId", "name"]}));
        assert_eq!(write["currentDocument"], json!({"exists": true}));
        assert_eq!(
            write["updateTransforms"],
            json!([{"fieldPath": "updatedAt", "setToServerValue": "REQUEST_TIME"}])
        );
    }

    #[test]
    fn structured_query_uses_composite_filter_for_multiple_conditions() {
        let query = ListQuery::new()
            .filter("isActive", true)
            .filter("category", "featured")
            .order_by("createdAt", SortDirection::Descending);
        let body = structured_query(Collection::Products, &query);
        assert_eq!(
            body["structuredQuery"]["from"],
            json!([{"collectionId": "products"}])
        );
        assert_eq!(
            body["structuredQuery"]["where"]["compositeFilter"]["filters"]
                .as_array()
                .map(Vec::len),
            Some(2)
        );
        assert_eq!(
            body["structuredQuery"]["orderBy"][0]["direction"],
            json!("DESCENDING")
        );
    }

    #[test]
    fn structured_query_single_filter_is_unwrapped() {
        let query = ListQuery::new().filter("slug", "vai-lua").limit(1);
        let body = structured_query(Collection::Products, &query);
        assert_eq!(
            body["structuredQuery"]["where"]["fieldFilter"]["value"],
            json!({"stringValue": "vai-lua"})
        );
        assert_eq!(body["structuredQuery"]["limit"], json!(1));
    }

    #[test]
    fn run_query_response_skips_read_time_entries() {
        let body = r#"[
            {"document": {"name": "projects/p/databases/(default)/documents/banners/abc",
                          "fields": {"title": {"stringValue": "Sale"}}},
             "readTime": "2024-01-01T00:00:00Z"},
            {"readTime": "2024-01-01T00:00:00Z"}
        ]"#;
        let documents = decode_run_query(body).expect("decode");
        assert_eq!(documents.len(), 1);
        assert_eq!(documents[0].id, "abc");
        assert_eq!(documents[0].field("title"), Some(&json!("Sale")));
    }

    #[test]
    fn error_message_prefers_structured_error_text() {
        let body = r#"{"error": {"code": 403, "message": "Missing or insufficient permissions."}}"#;
        assert_eq!(
            error_message(403, body),
            "HTTP 403: Missing or insufficient permissions."
        );
        assert_eq!(error_message(502, "bad gateway"), "HTTP 502: bad gateway");
    }
}
