//! Firestore REST-backed [`ContentStore`].

mod codec;

use platform_host::{
    Collection, ContentStore, ContentStoreFuture, Document, Fields, ListQuery, StoreError,
};
use serde::Deserialize;
use serde_json::Value;
use uuid::Uuid;

use self::codec::WriteKind;
use crate::bridge::{self, HttpMethod, HttpResponse};

const FIRESTORE_ORIGIN: &str = "https://firestore.googleapis.com/v1";

/// Connection settings for one Firestore database.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FirestoreConfig {
    /// Google Cloud project id.
    pub project_id: String,
    /// Web API key sent as the `key` query parameter.
    pub api_key: String,
    /// Database id, usually `(default)`.
    #[serde(default = "default_database")]
    pub database: String,
}

fn default_database() -> String {
    "(default)".to_string()
}

impl FirestoreConfig {
    fn database_path(&self) -> String {
        format!("projects/{}/databases/{}", self.project_id, self.database)
    }

    fn documents_root(&self) -> String {
        format!("{FIRESTORE_ORIGIN}/{}/documents", self.database_path())
    }

    fn key_param(&self) -> String {
        format!("key={}", urlencoding::encode(&self.api_key))
    }

    pub(crate) fn run_query_url(&self) -> String {
        format!("{}:runQuery?{}", self.documents_root(), self.key_param())
    }

    pub(crate) fn commit_url(&self) -> String {
        format!("{}:commit?{}", self.documents_root(), self.key_param())
    }

    pub(crate) fn document_url(&self, collection: Collection, id: &str) -> String {
        format!(
            "{}/{}/{}?{}",
            self.documents_root(),
            collection.as_str(),
            urlencoding::encode(id),
            self.key_param()
        )
    }

    /// Resource name used inside commit writes.
    pub(crate) fn document_name(&self, collection: Collection, id: &str) -> String {
        format!("{}/documents/{}/{id}", self.database_path(), collection.as_str())
    }
}

#[derive(Debug, Clone)]
/// Content store that talks to the Firestore REST API from the browser.
pub struct FirestoreContentStore {
    config: FirestoreConfig,
}

impl FirestoreContentStore {
    /// Creates a store for `config`.
    pub fn new(config: FirestoreConfig) -> Self {
        Self { config }
    }
}

fn transport(err: String) -> StoreError {
    StoreError::Transport(err)
}

fn ensure_success(response: &HttpResponse) -> Result<(), StoreError> {
    if response.is_success() {
        Ok(())
    } else {
        Err(StoreError::Transport(codec::error_message(
            response.status,
            &response.body,
        )))
    }
}

fn not_found(collection: Collection, id: &str) -> StoreError {
    StoreError::NotFound {
        collection: collection.as_str(),
        id: id.to_string(),
    }
}

/// Ids are single path segments; a `/` would address a nested document.
fn is_document_id(id: &str) -> bool {
    !id.is_empty() && !id.contains('/')
}

impl FirestoreContentStore {
    async fn commit(&self, body: Value) -> Result<HttpResponse, StoreError> {
        let body = body.to_string();
        bridge::send_json(HttpMethod::Post, &self.config.commit_url(), Some(&body))
            .await
            .map_err(transport)
    }
}

impl ContentStore for FirestoreContentStore {
    fn list<'a>(
        &'a self,
        collection: Collection,
        query: &'a ListQuery,
    ) -> ContentStoreFuture<'a, Result<Vec<Document>, StoreError>> {
        Box::pin(async move {
            let body = codec::structured_query(collection, query).to_string();
            let response = bridge::send_json(
                HttpMethod::Post,
                &self.config.run_query_url(),
                Some(&body),
            )
            .await
            .map_err(transport)?;
            ensure_success(&response)?;
            codec::decode_run_query(&response.body)
        })
    }

    fn get<'a>(
        &'a self,
        collection: Collection,
        id: &'a str,
    ) -> ContentStoreFuture<'a, Result<Option<Document>, StoreError>> {
        Box::pin(async move {
            if !is_document_id(id) {
                return Ok(None);
            }
            let response = bridge::send_json(
                HttpMethod::Get,
                &self.config.document_url(collection, id),
                None,
            )
            .await
            .map_err(transport)?;
            if response.status == 404 {
                return Ok(None);
            }
            ensure_success(&response)?;
            let resource: Value = serde_json::from_str(&response.body)
                .map_err(|err| StoreError::Transport(err.to_string()))?;
            codec::decode_document(&resource).map(Some)
        })
    }

    fn create<'a>(
        &'a self,
        collection: Collection,
        fields: Fields,
    ) -> ContentStoreFuture<'a, Result<String, StoreError>> {
        Box::pin(async move {
            let id = Uuid::new_v4().simple().to_string();
            let body = codec::commit_body(
                &self.config.document_name(collection, &id),
                &fields,
                WriteKind::Create,
                collection.create_timestamps(),
            );
            let response = self.commit(body).await?;
            ensure_success(&response)?;
            Ok(id)
        })
    }

    fn update<'a>(
        &'a self,
        collection: Collection,
        id: &'a str,
        patch: Fields,
    ) -> ContentStoreFuture<'a, Result<(), StoreError>> {
        Box::pin(async move {
            if !is_document_id(id) {
                return Err(not_found(collection, id));
            }
            let mask: Vec<String> = patch.keys().cloned().collect();
            let body = codec::commit_body(
                &self.config.document_name(collection, id),
                &patch,
                WriteKind::Patch { mask: &mask },
                collection.update_timestamps(),
            );
            let response = self.commit(body).await?;
            if response.status == 404 {
                return Err(not_found(collection, id));
            }
            ensure_success(&response)
        })
    }

    fn delete<'a>(
        &'a self,
        collection: Collection,
        id: &'a str,
    ) -> ContentStoreFuture<'a, Result<(), StoreError>> {
        Box::pin(async move {
            if !is_document_id(id) {
                return Ok(());
            }
            let response = bridge::send_json(
                HttpMethod::Delete,
                &self.config.document_url(collection, id),
                None,
            )
            .await
            .map_err(transport)?;
            ensure_success(&response)
        })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    fn config() -> FirestoreConfig {
        FirestoreConfig {
            project_id: "fabric-shop".to_string(),
            api_key: "k".to_string(),
            database: default_database(),
        }
    }

    #[test]
    fn urls_address_collections_and_documents() {
        let cfg = config();
        assert_eq!(
            cfg.run_query_url(),
            "https://firestore.googleapis.com/v1/projects/fabric-shop/databases/(default)/documents:runQuery?key=k"
        );
        assert_eq!(
            cfg.document_url(Collection::ContactInfo, "abc"),
            "https://firestore.googleapis.com/v1/projects/fabric-shop/databases/(default)/documents/contactInfo/abc?key=k"
        );
    }

    #[test]
    fn document_ids_and_key_are_percent_encoded() {
        let cfg = FirestoreConfig {
            api_key: "a&b=c".to_string(),
            ..config()
        };
        let url = cfg.document_url(Collection::Products, "x/y?z");
        assert!(url.ends_with("/documents/products/x%2Fy%3Fz?key=a%26b%3Dc"));
        assert!(cfg.commit_url().ends_with("/documents:commit?key=a%26b%3Dc"));
    }

    #[test]
    fn commit_writes_name_documents_by_resource_path() {
        assert_eq!(
            config().document_name(Collection::Banners, "b1"),
            "projects/fabric-shop/databases/(default)/documents/banners/b1"
        );
        assert!(is_document_id("b1"));
        assert!(!is_document_id("b1/nested/x"));
        assert!(!is_document_id(""));
    }

    #[test]
    fn nested_ids_never_reach_the_network() {
        let store = FirestoreContentStore::new(config());
        assert_eq!(block_on(store.get(Collection::Products, "a/b")), Ok(None));
        assert_eq!(
            block_on(store.update(Collection::Products, "a/b", Fields::new())),
            Err(StoreError::NotFound {
                collection: "products",
                id: "a/b".to_string()
            })
        );
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn native_builds_report_transport_errors() {
        let store = FirestoreContentStore::new(config());
        assert!(matches!(
            block_on(store.list(Collection::Products, &ListQuery::new())),
            Err(StoreError::Transport(_))
        ));
    }
}
