//! Catalog data access over a [`ContentStore`].
//!
//! Reads never fail: a store or decode error is logged and the call degrades to an empty list or
//! `None`, so callers cannot tell "empty" from "failed". Writes return [`CatalogError`] so admin
//! forms can report them.

use leptos::logging;
use platform_host::{
    encode_fields, encode_patch, find_by_field, Collection, ContentStore, Document, Fields, ListQuery,
    SortDirection, StoreError, CREATED_AT_FIELD,
};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::model::{
    Banner, ContactInfo, ContactMessage, Fabric, MessageStatus, Product, ProductCategory,
};

const ACTIVE_FIELD: &str = "isActive";
const SLUG_FIELD: &str = "slug";
const ORDER_FIELD: &str = "order";
const STATUS_FIELD: &str = "status";

/// Catalog write failures.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The store rejected or failed the write.
    #[error(transparent)]
    Store(#[from] StoreError),
    /// Another record of the same kind already uses this slug.
    #[error("slug `{0}` is already used")]
    SlugTaken(String),
}

fn decode_documents<T: DeserializeOwned>(documents: Vec<Document>, operation: &str) -> Vec<T> {
    documents
        .into_iter()
        .filter_map(|document| match document.decode() {
            Ok(record) => Some(record),
            Err(err) => {
                logging::warn!("{operation}: skipping document: {err}");
                None
            }
        })
        .collect()
}

async fn list_records<S, T>(
    store: &S,
    collection: Collection,
    query: ListQuery,
    operation: &str,
) -> Vec<T>
where
    S: ContentStore + ?Sized,
    T: DeserializeOwned,
{
    match store.list(collection, &query).await {
        Ok(documents) => decode_documents(documents, operation),
        Err(err) => {
            logging::warn!("{operation} failed: {err}");
            Vec::new()
        }
    }
}

fn decode_one<T: DeserializeOwned>(
    result: Result<Option<Document>, StoreError>,
    operation: &str,
) -> Option<T> {
    match result.and_then(|found| found.map(Document::decode).transpose()) {
        Ok(record) => record,
        Err(err) => {
            logging::warn!("{operation} failed: {err}");
            None
        }
    }
}

fn newest_first() -> ListQuery {
    ListQuery::new().order_by(CREATED_AT_FIELD, SortDirection::Descending)
}

fn record_fields<T: Serialize>(record: &T) -> Result<Fields, CatalogError> {
    Ok(encode_fields(record)?)
}

/// Update patch for a whole record; `None` fields are cleared in the store.
fn record_patch<T: Serialize>(record: &T) -> Result<Fields, CatalogError> {
    Ok(encode_patch(record)?)
}

// ---- products ----

/// Active products, newest first, optionally limited to one category.
pub async fn active_products<S: ContentStore + ?Sized>(
    store: &S,
    category: Option<ProductCategory>,
) -> Vec<Product> {
    let mut query = ListQuery::new().filter(ACTIVE_FIELD, true);
    if let Some(category) = category {
        query = query.filter("category", category.as_str());
    }
    let query = query.order_by(CREATED_AT_FIELD, SortDirection::Descending);
    list_records(store, Collection::Products, query, "active_products").await
}

/// Product addressed by its URL slug.
pub async fn product_by_slug<S: ContentStore + ?Sized>(store: &S, slug: &str) -> Option<Product> {
    decode_one(
        find_by_field(store, Collection::Products, SLUG_FIELD, slug).await,
        "product_by_slug",
    )
}

/// Product by store id.
pub async fn product_by_id<S: ContentStore + ?Sized>(store: &S, id: &str) -> Option<Product> {
    decode_one(store.get(Collection::Products, id).await, "product_by_id")
}

/// Every product including hidden ones, newest first.
pub async fn all_products<S: ContentStore + ?Sized>(store: &S) -> Vec<Product> {
    list_records(store, Collection::Products, newest_first(), "all_products").await
}

async fn ensure_slug_free<S: ContentStore + ?Sized>(
    store: &S,
    collection: Collection,
    slug: &str,
    own_id: Option<&str>,
) -> Result<(), CatalogError> {
    match find_by_field(store, collection, SLUG_FIELD, slug).await? {
        Some(existing) if Some(existing.id.as_str()) != own_id => {
            Err(CatalogError::SlugTaken(slug.to_string()))
        }
        _ => Ok(()),
    }
}

/// Creates a product and returns its id.
///
/// # Errors
///
/// Fails when the slug is taken or the store write fails.
pub async fn create_product<S: ContentStore + ?Sized>(
    store: &S,
    product: &Product,
) -> Result<String, CatalogError> {
    ensure_slug_free(store, Collection::Products, &product.slug, None).await?;
    Ok(store
        .create(Collection::Products, record_fields(product)?)
        .await?)
}

/// Overwrites the editable fields of product `id`.
///
/// # Errors
///
/// Fails when the slug belongs to another product, the product is missing, or the write fails.
pub async fn update_product<S: ContentStore + ?Sized>(
    store: &S,
    id: &str,
    product: &Product,
) -> Result<(), CatalogError> {
    ensure_slug_free(store, Collection::Products, &product.slug, Some(id)).await?;
    Ok(store
        .update(Collection::Products, id, record_patch(product)?)
        .await?)
}

/// Deletes product `id`.
///
/// # Errors
///
/// Propagates store failures.
pub async fn delete_product<S: ContentStore + ?Sized>(
    store: &S,
    id: &str,
) -> Result<(), CatalogError> {
    Ok(store.delete(Collection::Products, id).await?)
}

// ---- fabrics ----

/// Active fabric types, newest first.
pub async fn active_fabrics<S: ContentStore + ?Sized>(store: &S) -> Vec<Fabric> {
    let query = ListQuery::new()
        .filter(ACTIVE_FIELD, true)
        .order_by(CREATED_AT_FIELD, SortDirection::Descending);
    list_records(store, Collection::Fabrics, query, "active_fabrics").await
}

/// Fabric by store id.
pub async fn fabric_by_id<S: ContentStore + ?Sized>(store: &S, id: &str) -> Option<Fabric> {
    decode_one(store.get(Collection::Fabrics, id).await, "fabric_by_id")
}

/// Every fabric including hidden ones, newest first.
pub async fn all_fabrics<S: ContentStore + ?Sized>(store: &S) -> Vec<Fabric> {
    list_records(store, Collection::Fabrics, newest_first(), "all_fabrics").await
}

/// Creates a fabric and returns its id.
///
/// # Errors
///
/// Fails when the slug is taken or the store write fails.
pub async fn create_fabric<S: ContentStore + ?Sized>(
    store: &S,
    fabric: &Fabric,
) -> Result<String, CatalogError> {
    ensure_slug_free(store, Collection::Fabrics, &fabric.slug, None).await?;
    Ok(store
        .create(Collection::Fabrics, record_fields(fabric)?)
        .await?)
}

/// Overwrites the editable fields of fabric `id`.
///
/// # Errors
///
/// Fails when the slug belongs to another fabric, the fabric is missing, or the write fails.
pub async fn update_fabric<S: ContentStore + ?Sized>(
    store: &S,
    id: &str,
    fabric: &Fabric,
) -> Result<(), CatalogError> {
    ensure_slug_free(store, Collection::Fabrics, &fabric.slug, Some(id)).await?;
    Ok(store
        .update(Collection::Fabrics, id, record_patch(fabric)?)
        .await?)
}

/// Deletes fabric `id`.
///
/// # Errors
///
/// Propagates store failures.
pub async fn delete_fabric<S: ContentStore + ?Sized>(
    store: &S,
    id: &str,
) -> Result<(), CatalogError> {
    Ok(store.delete(Collection::Fabrics, id).await?)
}

// ---- banners ----

/// Active banners in display order. This is the home carousel's slide list.
pub async fn active_banners<S: ContentStore + ?Sized>(store: &S) -> Vec<Banner> {
    let query = ListQuery::new()
        .filter(ACTIVE_FIELD, true)
        .order_by(ORDER_FIELD, SortDirection::Ascending);
    list_records(store, Collection::Banners, query, "active_banners").await
}

/// Every banner including hidden ones, in display order.
pub async fn all_banners<S: ContentStore + ?Sized>(store: &S) -> Vec<Banner> {
    let query = ListQuery::new().order_by(ORDER_FIELD, SortDirection::Ascending);
    list_records(store, Collection::Banners, query, "all_banners").await
}

/// Banner by store id.
pub async fn banner_by_id<S: ContentStore + ?Sized>(store: &S, id: &str) -> Option<Banner> {
    decode_one(store.get(Collection::Banners, id).await, "banner_by_id")
}

/// Creates a banner and returns its id.
///
/// # Errors
///
/// Propagates store failures.
pub async fn create_banner<S: ContentStore + ?Sized>(
    store: &S,
    banner: &Banner,
) -> Result<String, CatalogError> {
    Ok(store
        .create(Collection::Banners, record_fields(banner)?)
        .await?)
}

/// Overwrites the editable fields of banner `id`.
///
/// # Errors
///
/// Fails when the banner is missing or the write fails.
pub async fn update_banner<S: ContentStore + ?Sized>(
    store: &S,
    id: &str,
    banner: &Banner,
) -> Result<(), CatalogError> {
    Ok(store
        .update(Collection::Banners, id, record_patch(banner)?)
        .await?)
}

/// Deletes banner `id`.
///
/// # Errors
///
/// Propagates store failures.
pub async fn delete_banner<S: ContentStore + ?Sized>(
    store: &S,
    id: &str,
) -> Result<(), CatalogError> {
    Ok(store.delete(Collection::Banners, id).await?)
}

// ---- contact info ----

/// The shop's saved contact details, if any.
pub async fn contact_info<S: ContentStore + ?Sized>(store: &S) -> Option<ContactInfo> {
    let query = ListQuery::new().limit(1);
    list_records(store, Collection::ContactInfo, query, "contact_info")
        .await
        .into_iter()
        .next()
}

/// Saves contact details, updating the existing document or creating the first one. Returns
/// the document id.
///
/// # Errors
///
/// Propagates store failures.
pub async fn save_contact_info<S: ContentStore + ?Sized>(
    store: &S,
    info: &ContactInfo,
) -> Result<String, CatalogError> {
    let existing_id = if info.id.is_empty() {
        store
            .list(Collection::ContactInfo, &ListQuery::new().limit(1))
            .await?
            .into_iter()
            .next()
            .map(|document| document.id)
    } else {
        Some(info.id.clone())
    };
    match existing_id {
        Some(id) => {
            store
                .update(Collection::ContactInfo, &id, record_patch(info)?)
                .await?;
            Ok(id)
        }
        None => Ok(store
            .create(Collection::ContactInfo, record_fields(info)?)
            .await?),
    }
}

// ---- contact messages ----

/// Stores a customer inquiry with status `new` and returns its id.
///
/// # Errors
///
/// Propagates store failures.
pub async fn save_contact_message<S: ContentStore + ?Sized>(
    store: &S,
    message: &ContactMessage,
) -> Result<String, CatalogError> {
    let mut fields = record_fields(message)?;
    fields.insert(
        STATUS_FIELD.to_string(),
        Value::from(MessageStatus::New.as_str()),
    );
    Ok(store.create(Collection::ContactMessages, fields).await?)
}

/// Customer messages, newest first, optionally limited to one status.
pub async fn contact_messages<S: ContentStore + ?Sized>(
    store: &S,
    status: Option<MessageStatus>,
) -> Vec<ContactMessage> {
    let mut query = ListQuery::new();
    if let Some(status) = status {
        query = query.filter(STATUS_FIELD, status.as_str());
    }
    let query = query.order_by(CREATED_AT_FIELD, SortDirection::Descending);
    list_records(store, Collection::ContactMessages, query, "contact_messages").await
}

/// Moves message `id` to `status`.
///
/// # Errors
///
/// Fails when the message is missing or the write fails.
pub async fn update_contact_message_status<S: ContentStore + ?Sized>(
    store: &S,
    id: &str,
    status: MessageStatus,
) -> Result<(), CatalogError> {
    let mut patch = Fields::new();
    patch.insert(STATUS_FIELD.to_string(), Value::from(status.as_str()));
    Ok(store
        .update(Collection::ContactMessages, id, patch)
        .await?)
}

/// Deletes message `id`.
///
/// # Errors
///
/// Propagates store failures.
pub async fn delete_contact_message<S: ContentStore + ?Sized>(
    store: &S,
    id: &str,
) -> Result<(), CatalogError> {
    Ok(store.delete(Collection::ContactMessages, id).await?)
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use platform_host::MemoryContentStore;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn doc(id: &str, value: Value) -> Document {
        Document::new(id, value.as_object().cloned().unwrap_or_default())
    }

    #[test]
    fn active_banners_skip_hidden_and_sort_by_order() {
        let store = MemoryContentStore::default();
        store.seed(
            Collection::Banners,
            vec![
                doc("b3", json!({"title": "C", "imageUrl": "c", "order": 3, "isActive": true})),
                doc("b1", json!({"title": "A", "imageUrl": "a", "order": 1, "isActive": true})),
                doc("bx", json!({"title": "X", "imageUrl": "x", "order": 2, "isActive": false})),
            ],
        );
        let titles: Vec<String> = block_on(active_banners(&store))
            .into_iter()
            .map(|b| b.title)
            .collect();
        assert_eq!(titles, vec!["A", "C"]);
        assert_eq!(block_on(all_banners(&store)).len(), 3);
    }

    #[test]
    fn read_failures_degrade_to_empty() {
        let store = MemoryContentStore::default();
        store.seed(
            Collection::Products,
            vec![doc("p1", json!({"name": "A", "slug": "a", "isActive": true, "createdAt": 1}))],
        );
        store.set_fail_reads(true);
        assert!(block_on(active_products(&store, None)).is_empty());
        assert_eq!(block_on(product_by_slug(&store, "a")), None);
        assert_eq!(block_on(contact_info(&store)), None);
    }

    #[test]
    fn undecodable_documents_are_skipped() {
        let store = MemoryContentStore::default();
        store.seed(
            Collection::Fabrics,
            vec![
                doc("f1", json!({"name": "Lụa", "slug": "lua", "isActive": true, "createdAt": 2})),
                doc("f2", json!({"name": 42, "isActive": true, "createdAt": 1})),
            ],
        );
        let fabrics = block_on(active_fabrics(&store));
        assert_eq!(fabrics.len(), 1);
        assert_eq!(fabrics[0].id, "f1");
    }

    #[test]
    fn duplicate_product_slug_is_rejected() {
        let store = MemoryContentStore::default();
        let product = Product {
            name: "Vải Kate".to_string(),
            slug: "vai-kate".to_string(),
            is_active: true,
            ..Product::default()
        };
        let id = block_on(create_product(&store, &product)).expect("create");
        assert_eq!(
            block_on(create_product(&store, &product)),
            Err(CatalogError::SlugTaken("vai-kate".to_string()))
        );
        block_on(update_product(&store, &id, &product)).expect("own slug is fine");
    }

    #[test]
    fn clearing_fabric_removes_it_from_stored_product() {
        let store = MemoryContentStore::default();
        let mut product = Product {
            name: "Lụa tơ tằm".to_string(),
            slug: "lua-to-tam".to_string(),
            fabric_id: Some("f1".to_string()),
            is_active: true,
            ..Product::default()
        };
        let id = block_on(create_product(&store, &product)).expect("create");
        assert_eq!(
            block_on(product_by_id(&store, &id)).and_then(|saved| saved.fabric_id),
            Some("f1".to_string())
        );

        product.fabric_id = None;
        block_on(update_product(&store, &id, &product)).expect("update");
        let saved = block_on(product_by_id(&store, &id)).expect("still stored");
        assert_eq!(saved.fabric_id, None);
        assert_eq!(saved.name, "Lụa tơ tằm");
        assert!(!store.snapshot(Collection::Products)[0]
            .fields
            .contains_key("fabricId"));
    }

    #[test]
    fn contact_info_saves_create_then_update() {
        let store = MemoryContentStore::default();
        let mut info = ContactInfo::fallback();
        let first = block_on(save_contact_info(&store, &info)).expect("create");
        info.phone = "0909".to_string();
        let second = block_on(save_contact_info(&store, &info)).expect("update");
        assert_eq!(first, second);
        assert_eq!(store.snapshot(Collection::ContactInfo).len(), 1);
        assert_eq!(
            block_on(contact_info(&store)).map(|saved| saved.phone),
            Some("0909".to_string())
        );
    }

    #[test]
    fn messages_are_saved_as_new_and_filter_by_status() {
        let store = MemoryContentStore::default();
        let message = ContactMessage {
            product_id: "p1".to_string(),
            customer_name: "Lan".to_string(),
            quantity: 3,
            status: MessageStatus::Completed,
            ..ContactMessage::default()
        };
        let id = block_on(save_contact_message(&store, &message)).expect("save");
        let fresh = block_on(contact_messages(&store, Some(MessageStatus::New)));
        assert_eq!(fresh.len(), 1);
        assert!(fresh[0].created_at.is_some());

        block_on(update_contact_message_status(&store, &id, MessageStatus::Contacted))
            .expect("status");
        assert!(block_on(contact_messages(&store, Some(MessageStatus::New))).is_empty());
        block_on(delete_contact_message(&store, &id)).expect("delete");
        assert!(block_on(contact_messages(&store, None)).is_empty());
    }

    #[test]
    fn write_failures_surface_as_store_errors() {
        let store = MemoryContentStore::default();
        store.set_fail_writes(true);
        let banner = Banner {
            title: "Sale".to_string(),
            image_url: "x".to_string(),
            order: 1,
            ..Banner::default()
        };
        assert!(matches!(
            block_on(create_banner(&store, &banner)),
            Err(CatalogError::Store(_))
        ));
    }
}
