//! Document-store contracts for catalog collections and an in-memory adapter.
//!
//! Documents are schemaless JSON field maps keyed by an opaque id. Filtering and ordering are the
//! store's job; callers describe what they want with a [`ListQuery`].

use std::{
    cell::RefCell, cmp::Ordering, collections::HashMap, future::Future, pin::Pin, rc::Rc,
};

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::time::next_monotonic_timestamp_ms;

/// Object-safe boxed future used by [`ContentStore`] async methods.
pub type ContentStoreFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Field map stored for one document.
pub type Fields = serde_json::Map<String, Value>;

/// Field assigned by the store when a document is created.
pub const CREATED_AT_FIELD: &str = "createdAt";
/// Field assigned by the store when a document is created or updated.
pub const UPDATED_AT_FIELD: &str = "updatedAt";

/// Remote collections known to the storefront.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Collection {
    /// Sellable products.
    Products,
    /// Fabric types referenced by products.
    Fabrics,
    /// Home-page promotional slides.
    Banners,
    /// Store contact details (a single document in practice).
    ContactInfo,
    /// Customer order inquiries.
    ContactMessages,
}

impl Collection {
    /// Every collection, in a stable order.
    pub const ALL: [Self; 5] = [
        Self::Products,
        Self::Fabrics,
        Self::Banners,
        Self::ContactInfo,
        Self::ContactMessages,
    ];

    /// Returns the remote collection name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Products => "products",
            Self::Fabrics => "fabrics",
            Self::Banners => "banners",
            Self::ContactInfo => "contactInfo",
            Self::ContactMessages => "contactMessages",
        }
    }

    /// Timestamp fields the store stamps when a document is created.
    pub const fn create_timestamps(self) -> &'static [&'static str] {
        match self {
            Self::Products | Self::Fabrics | Self::Banners => &[CREATED_AT_FIELD, UPDATED_AT_FIELD],
            Self::ContactMessages => &[CREATED_AT_FIELD],
            Self::ContactInfo => &[UPDATED_AT_FIELD],
        }
    }

    /// Timestamp fields the store stamps when a document is updated.
    ///
    /// Message status changes leave timestamps untouched.
    pub const fn update_timestamps(self) -> &'static [&'static str] {
        match self {
            Self::ContactMessages => &[],
            _ => &[UPDATED_AT_FIELD],
        }
    }
}

/// One stored document.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// Store-assigned opaque id.
    pub id: String,
    /// Stored field values.
    pub fields: Fields,
}

impl Document {
    /// Creates a document from an id and field map.
    pub fn new(id: impl Into<String>, fields: Fields) -> Self {
        Self {
            id: id.into(),
            fields,
        }
    }

    /// Returns a field value by name.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Decodes the document into a typed record, exposing the id as an `id` field.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Decode`] when the fields do not match `T`.
    pub fn decode<T: DeserializeOwned>(self) -> Result<T, StoreError> {
        let mut fields = self.fields;
        fields.insert("id".to_string(), Value::String(self.id.clone()));
        serde_json::from_value(Value::Object(fields)).map_err(|err| StoreError::Decode {
            id: self.id,
            message: err.to_string(),
        })
    }
}

/// Serializes a typed record into a field map, dropping `id` and null values.
///
/// # Errors
///
/// Returns [`StoreError::Encode`] when `value` does not serialize to a JSON object.
pub fn encode_fields<T: Serialize>(value: &T) -> Result<Fields, StoreError> {
    match serde_json::to_value(value) {
        Ok(Value::Object(mut fields)) => {
            fields.remove("id");
            fields.retain(|_, v| !v.is_null());
            Ok(fields)
        }
        Ok(other) => Err(StoreError::Encode(format!("expected object, got {other}"))),
        Err(err) => Err(StoreError::Encode(err.to_string())),
    }
}

/// Serializes a typed record into an update patch, dropping `id`.
///
/// Unlike [`encode_fields`], `None` fields stay in the patch as `null` so
/// [`ContentStore::update`] removes them from the stored document.
///
/// # Errors
///
/// Returns [`StoreError::Encode`] when `value` does not serialize to a JSON object.
pub fn encode_patch<T: Serialize>(value: &T) -> Result<Fields, StoreError> {
    match serde_json::to_value(value) {
        Ok(Value::Object(mut fields)) => {
            fields.remove("id");
            Ok(fields)
        }
        Ok(other) => Err(StoreError::Encode(format!("expected object, got {other}"))),
        Err(err) => Err(StoreError::Encode(err.to_string())),
    }
}

/// Sort direction for [`OrderBy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    /// Smallest first.
    Ascending,
    /// Largest first.
    Descending,
}

/// Single-field ordering applied by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderBy {
    /// Field to sort on. Documents missing the field are excluded.
    pub field: String,
    /// Sort direction.
    pub direction: SortDirection,
}

/// Equality filter on one field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldFilter {
    /// Field name.
    pub field: String,
    /// Required value.
    pub value: Value,
}

/// Query description passed to [`ContentStore::list`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListQuery {
    /// Equality filters, all of which must match.
    pub filters: Vec<FieldFilter>,
    /// Optional ordering.
    pub order_by: Option<OrderBy>,
    /// Optional maximum number of documents.
    pub limit: Option<usize>,
}

impl ListQuery {
    /// Returns an unfiltered, unordered query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an equality filter.
    pub fn filter(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.filters.push(FieldFilter {
            field: field.into(),
            value: value.into(),
        });
        self
    }

    /// Sets the ordering.
    pub fn order_by(mut self, field: impl Into<String>, direction: SortDirection) -> Self {
        self.order_by = Some(OrderBy {
            field: field.into(),
            direction,
        });
        self
    }

    /// Caps the number of returned documents.
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Returns whether a document satisfies every filter.
    pub fn matches(&self, document: &Document) -> bool {
        self.filters
            .iter()
            .all(|filter| document.field(&filter.field) == Some(&filter.value))
    }
}

/// Errors surfaced by [`ContentStore`] implementations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The addressed document does not exist.
    #[error("document `{id}` not found in `{collection}`")]
    NotFound {
        /// Collection name.
        collection: &'static str,
        /// Requested id.
        id: String,
    },
    /// Transport or remote-service failure.
    #[error("content store request failed: {0}")]
    Transport(String),
    /// Stored fields could not be decoded into the requested record.
    #[error("document `{id}` could not be decoded: {message}")]
    Decode {
        /// Offending document id.
        id: String,
        /// Decoder message.
        message: String,
    },
    /// A record could not be encoded into fields.
    #[error("record could not be encoded: {0}")]
    Encode(String),
    /// No store is configured for this build.
    #[error("content store unavailable")]
    Unavailable,
}

/// Host service for the remote document database.
pub trait ContentStore {
    /// Lists documents in `collection` matching `query`.
    fn list<'a>(
        &'a self,
        collection: Collection,
        query: &'a ListQuery,
    ) -> ContentStoreFuture<'a, Result<Vec<Document>, StoreError>>;

    /// Loads one document by id.
    fn get<'a>(
        &'a self,
        collection: Collection,
        id: &'a str,
    ) -> ContentStoreFuture<'a, Result<Option<Document>, StoreError>>;

    /// Creates a document and returns its store-assigned id.
    ///
    /// Creation timestamps follow [`Collection::create_timestamps`].
    fn create<'a>(
        &'a self,
        collection: Collection,
        fields: Fields,
    ) -> ContentStoreFuture<'a, Result<String, StoreError>>;

    /// Merges `patch` into an existing document. A `null` value removes that field.
    ///
    /// Update timestamps follow [`Collection::update_timestamps`].
    fn update<'a>(
        &'a self,
        collection: Collection,
        id: &'a str,
        patch: Fields,
    ) -> ContentStoreFuture<'a, Result<(), StoreError>>;

    /// Deletes a document. Deleting a missing id succeeds.
    fn delete<'a>(
        &'a self,
        collection: Collection,
        id: &'a str,
    ) -> ContentStoreFuture<'a, Result<(), StoreError>>;
}

/// Returns the first document whose `field` equals `value`.
///
/// # Errors
///
/// Propagates store failures.
pub async fn find_by_field<S: ContentStore + ?Sized>(
    store: &S,
    collection: Collection,
    field: &str,
    value: impl Into<Value>,
) -> Result<Option<Document>, StoreError> {
    let query = ListQuery::new().filter(field, value).limit(1);
    let mut documents = store.list(collection, &query).await?;
    Ok(if documents.is_empty() {
        None
    } else {
        Some(documents.swap_remove(0))
    })
}

#[derive(Debug, Clone, Copy, Default)]
/// Store that holds nothing and refuses writes.
pub struct NoopContentStore;

impl ContentStore for NoopContentStore {
    fn list<'a>(
        &'a self,
        _collection: Collection,
        _query: &'a ListQuery,
    ) -> ContentStoreFuture<'a, Result<Vec<Document>, StoreError>> {
        Box::pin(async { Ok(Vec::new()) })
    }

    fn get<'a>(
        &'a self,
        _collection: Collection,
        _id: &'a str,
    ) -> ContentStoreFuture<'a, Result<Option<Document>, StoreError>> {
        Box::pin(async { Ok(None) })
    }

    fn create<'a>(
        &'a self,
        _collection: Collection,
        _fields: Fields,
    ) -> ContentStoreFuture<'a, Result<String, StoreError>> {
        Box::pin(async { Err(StoreError::Unavailable) })
    }

    fn update<'a>(
        &'a self,
        _collection: Collection,
        _id: &'a str,
        _patch: Fields,
    ) -> ContentStoreFuture<'a, Result<(), StoreError>> {
        Box::pin(async { Err(StoreError::Unavailable) })
    }

    fn delete<'a>(
        &'a self,
        _collection: Collection,
        _id: &'a str,
    ) -> ContentStoreFuture<'a, Result<(), StoreError>> {
        Box::pin(async { Err(StoreError::Unavailable) })
    }
}

#[derive(Debug, Default)]
struct MemoryCollections {
    documents: HashMap<Collection, Vec<Document>>,
    next_id: u64,
    fail_reads: bool,
    fail_writes: bool,
}

#[derive(Debug, Clone, Default)]
/// In-memory document store with Firestore-like filter and ordering semantics.
///
/// Clones share the same underlying collections.
pub struct MemoryContentStore {
    inner: Rc<RefCell<MemoryCollections>>,
}

impl MemoryContentStore {
    /// Inserts documents as-is (no timestamps are added).
    pub fn seed(&self, collection: Collection, documents: impl IntoIterator<Item = Document>) {
        let mut inner = self.inner.borrow_mut();
        inner
            .documents
            .entry(collection)
            .or_default()
            .extend(documents);
    }

    /// Returns every document in `collection` in insertion order.
    pub fn snapshot(&self, collection: Collection) -> Vec<Document> {
        self.inner
            .borrow()
            .documents
            .get(&collection)
            .cloned()
            .unwrap_or_default()
    }

    /// Makes subsequent reads fail with a transport error.
    pub fn set_fail_reads(&self, fail: bool) {
        self.inner.borrow_mut().fail_reads = fail;
    }

    /// Makes subsequent writes fail with a transport error.
    pub fn set_fail_writes(&self, fail: bool) {
        self.inner.borrow_mut().fail_writes = fail;
    }

    fn check_reads(&self) -> Result<(), StoreError> {
        if self.inner.borrow().fail_reads {
            return Err(StoreError::Transport("memory store read failure".to_string()));
        }
        Ok(())
    }

    fn check_writes(&self) -> Result<(), StoreError> {
        if self.inner.borrow().fail_writes {
            return Err(StoreError::Transport(
                "memory store write failure".to_string(),
            ));
        }
        Ok(())
    }

    fn list_now(&self, collection: Collection, query: &ListQuery) -> Vec<Document> {
        let inner = self.inner.borrow();
        let mut matched: Vec<Document> = inner
            .documents
            .get(&collection)
            .map(|docs| docs.iter().filter(|doc| query.matches(doc)).cloned().collect())
            .unwrap_or_default();

        if let Some(order) = &query.order_by {
            matched.retain(|doc| doc.field(&order.field).is_some());
            matched.sort_by(|a, b| {
                let ordering = compare_values(
                    a.field(&order.field).unwrap_or(&Value::Null),
                    b.field(&order.field).unwrap_or(&Value::Null),
                );
                match order.direction {
                    SortDirection::Ascending => ordering,
                    SortDirection::Descending => ordering.reverse(),
                }
            });
        }

        if let Some(limit) = query.limit {
            matched.truncate(limit);
        }
        matched
    }
}

fn stamp(fields: &mut Fields, names: &[&str], now_ms: u64) {
    for name in names {
        fields.insert((*name).to_string(), Value::from(now_ms));
    }
}

fn compare_values(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Number(a), Value::Number(b)) => {
            let a = a.as_f64().unwrap_or_default();
            let b = b.as_f64().unwrap_or_default();
            a.partial_cmp(&b).unwrap_or(Ordering::Equal)
        }
        (Value::String(a), Value::String(b)) => a.cmp(b),
        (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
        _ => Ordering::Equal,
    }
}

impl ContentStore for MemoryContentStore {
    fn list<'a>(
        &'a self,
        collection: Collection,
        query: &'a ListQuery,
    ) -> ContentStoreFuture<'a, Result<Vec<Document>, StoreError>> {
        Box::pin(async move {
            self.check_reads()?;
            Ok(self.list_now(collection, query))
        })
    }

    fn get<'a>(
        &'a self,
        collection: Collection,
        id: &'a str,
    ) -> ContentStoreFuture<'a, Result<Option<Document>, StoreError>> {
        Box::pin(async move {
            self.check_reads()?;
            Ok(self
                .inner
                .borrow()
                .documents
                .get(&collection)
                .and_then(|docs| docs.iter().find(|doc| doc.id == id).cloned()))
        })
    }

    fn create<'a>(
        &'a self,
        collection: Collection,
        mut fields: Fields,
    ) -> ContentStoreFuture<'a, Result<String, StoreError>> {
        Box::pin(async move {
            self.check_writes()?;
            stamp(
                &mut fields,
                collection.create_timestamps(),
                next_monotonic_timestamp_ms(),
            );
            let mut inner = self.inner.borrow_mut();
            inner.next_id = inner.next_id.saturating_add(1);
            let id = format!("{}-{}", collection.as_str(), inner.next_id);
            inner
                .documents
                .entry(collection)
                .or_default()
                .push(Document::new(id.clone(), fields));
            Ok(id)
        })
    }

    fn update<'a>(
        &'a self,
        collection: Collection,
        id: &'a str,
        mut patch: Fields,
    ) -> ContentStoreFuture<'a, Result<(), StoreError>> {
        Box::pin(async move {
            self.check_writes()?;
            stamp(
                &mut patch,
                collection.update_timestamps(),
                next_monotonic_timestamp_ms(),
            );
            let mut inner = self.inner.borrow_mut();
            let document = inner
                .documents
                .get_mut(&collection)
                .and_then(|docs| docs.iter_mut().find(|doc| doc.id == id))
                .ok_or_else(|| StoreError::NotFound {
                    collection: collection.as_str(),
                    id: id.to_string(),
                })?;
            for (name, value) in patch {
                if value.is_null() {
                    document.fields.remove(&name);
                } else {
                    document.fields.insert(name, value);
                }
            }
            Ok(())
        })
    }

    fn delete<'a>(
        &'a self,
        collection: Collection,
        id: &'a str,
    ) -> ContentStoreFuture<'a, Result<(), StoreError>> {
        Box::pin(async move {
            self.check_writes()?;
            if let Some(docs) = self.inner.borrow_mut().documents.get_mut(&collection) {
                docs.retain(|doc| doc.id != id);
            }
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use serde_json::json;

    use super::*;

    fn fields(value: Value) -> Fields {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn list_applies_filters_order_and_limit() {
        let store = MemoryContentStore::default();
        store.seed(
            Collection::Banners,
            [
                Document::new("b1", fields(json!({"order": 3, "isActive": true}))),
                Document::new("b2", fields(json!({"order": 1, "isActive": true}))),
                Document::new("b3", fields(json!({"order": 2, "isActive": false}))),
                Document::new("b4", fields(json!({"isActive": true}))),
            ],
        );

        let query = ListQuery::new()
            .filter("isActive", true)
            .order_by("order", SortDirection::Ascending);
        let ids: Vec<String> = block_on(store.list(Collection::Banners, &query))
            .expect("list")
            .into_iter()
            .map(|doc| doc.id)
            .collect();
        assert_eq!(ids, vec!["b2".to_string(), "b1".to_string()]);

        let limited = ListQuery::new().limit(1);
        assert_eq!(
            block_on(store.list(Collection::Banners, &limited))
                .expect("list")
                .len(),
            1
        );
    }

    #[test]
    fn create_stamps_timestamps_per_collection() {
        let store = MemoryContentStore::default();
        let product_id =
            block_on(store.create(Collection::Products, fields(json!({"name": "Lụa"}))))
                .expect("create product");
        let message_id = block_on(
            store.create(Collection::ContactMessages, fields(json!({"status": "new"}))),
        )
        .expect("create message");

        let product = block_on(store.get(Collection::Products, &product_id))
            .expect("get")
            .expect("product exists");
        assert!(product.field(CREATED_AT_FIELD).is_some());
        assert!(product.field(UPDATED_AT_FIELD).is_some());

        let message = block_on(store.get(Collection::ContactMessages, &message_id))
            .expect("get")
            .expect("message exists");
        assert!(message.field(CREATED_AT_FIELD).is_some());
        assert!(message.field(UPDATED_AT_FIELD).is_none());
    }

    #[test]
    fn newest_first_ordering_follows_creation_order() {
        let store = MemoryContentStore::default();
        for name in ["first", "second", "third"] {
            block_on(store.create(Collection::Products, fields(json!({"name": name}))))
                .expect("create");
        }
        let query = ListQuery::new().order_by(CREATED_AT_FIELD, SortDirection::Descending);
        let names: Vec<Value> = block_on(store.list(Collection::Products, &query))
            .expect("list")
            .into_iter()
            .filter_map(|doc| doc.field("name").cloned())
            .collect();
        assert_eq!(names, vec![json!("third"), json!("second"), json!("first")]);
    }

    #[test]
    fn update_merges_and_reports_missing_documents() {
        let store = MemoryContentStore::default();
        let id = block_on(store.create(
            Collection::Banners,
            fields(json!({"title": "Old", "order": 1})),
        ))
        .expect("create");

        block_on(store.update(Collection::Banners, &id, fields(json!({"title": "New"}))))
            .expect("update");
        let doc = block_on(store.get(Collection::Banners, &id))
            .expect("get")
            .expect("exists");
        assert_eq!(doc.field("title"), Some(&json!("New")));
        assert_eq!(doc.field("order"), Some(&json!(1)));

        let err = block_on(store.update(Collection::Banners, "missing", Fields::new()))
            .expect_err("missing doc");
        assert_eq!(
            err,
            StoreError::NotFound {
                collection: "banners",
                id: "missing".to_string()
            }
        );
    }

    #[test]
    fn null_patch_values_remove_fields() {
        let store = MemoryContentStore::default();
        let id = block_on(store.create(
            Collection::Products,
            fields(json!({"name": "Lụa", "fabricId": "f1"})),
        ))
        .expect("create");

        block_on(store.update(
            Collection::Products,
            &id,
            fields(json!({"name": "Lụa tơ", "fabricId": null})),
        ))
        .expect("update");
        let doc = block_on(store.get(Collection::Products, &id))
            .expect("get")
            .expect("exists");
        assert_eq!(doc.field("name"), Some(&json!("Lụa tơ")));
        assert_eq!(doc.field("fabricId"), None);
    }

    #[test]
    fn encode_patch_keeps_cleared_fields_as_null() {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Record {
            id: String,
            fabric_id: Option<String>,
        }
        let record = Record {
            id: "p1".to_string(),
            fabric_id: None,
        };
        assert_eq!(
            Value::Object(encode_patch(&record).expect("patch")),
            json!({"fabricId": null})
        );
        assert_eq!(
            Value::Object(encode_fields(&record).expect("fields")),
            json!({})
        );
    }

    #[test]
    fn failure_toggles_surface_transport_errors() {
        let store = MemoryContentStore::default();
        store.set_fail_reads(true);
        assert!(matches!(
            block_on(store.list(Collection::Products, &ListQuery::new())),
            Err(StoreError::Transport(_))
        ));
        store.set_fail_writes(true);
        assert!(matches!(
            block_on(store.create(Collection::Products, Fields::new())),
            Err(StoreError::Transport(_))
        ));
    }

    #[test]
    fn find_by_field_returns_first_match() {
        let store = MemoryContentStore::default();
        store.seed(
            Collection::Products,
            [Document::new("p1", fields(json!({"slug": "vai-lua"})))],
        );
        let found = block_on(find_by_field(&store, Collection::Products, "slug", "vai-lua"))
            .expect("query");
        assert_eq!(found.map(|doc| doc.id), Some("p1".to_string()));
        let missing = block_on(find_by_field(&store, Collection::Products, "slug", "nope"))
            .expect("query");
        assert_eq!(missing, None);
    }

    #[test]
    fn decode_exposes_document_id() {
        #[derive(Debug, PartialEq, Deserialize)]
        struct Row {
            id: String,
            title: String,
        }

        let doc = Document::new("x1", fields(json!({"title": "Hello"})));
        assert_eq!(
            doc.decode::<Row>().expect("decode"),
            Row {
                id: "x1".to_string(),
                title: "Hello".to_string()
            }
        );
    }

    #[test]
    fn noop_store_reads_empty_and_refuses_writes() {
        let store = NoopContentStore;
        assert!(block_on(store.list(Collection::Fabrics, &ListQuery::new()))
            .expect("list")
            .is_empty());
        assert_eq!(
            block_on(store.delete(Collection::Fabrics, "x")),
            Err(StoreError::Unavailable)
        );
    }
}
