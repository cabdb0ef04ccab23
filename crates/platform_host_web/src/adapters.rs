use std::rc::Rc;

use platform_host::{
    AuthService, Collection, ContentStore, ContentStoreFuture, Document, Fields,
    HostCapabilities, HostServices, ListQuery, MediaUploadFuture, MediaUploadService,
    MemoryContentStore, MemoryMediaUploadService, StoreError, UploadFile, UploadedAsset,
};
use serde::Deserialize;

use crate::{
    CloudinaryConfig, CloudinaryUploadService, FirestoreConfig, FirestoreContentStore,
    WebAlertService, WebClientStateStore,
};

pub use platform_host::HostStrategy;

/// Returns the compile-time selected host strategy for the active build.
pub const fn selected_host_strategy() -> HostStrategy {
    #[cfg(feature = "offline-catalog")]
    {
        HostStrategy::Offline
    }

    #[cfg(not(feature = "offline-catalog"))]
    {
        HostStrategy::Browser
    }
}

/// Returns the selected host strategy as a stable string token.
pub fn host_strategy_name() -> &'static str {
    selected_host_strategy().as_str()
}

/// Remote endpoints used by the browser strategy.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WebHostSettings {
    /// Document database.
    pub firestore: FirestoreConfig,
    /// Media host.
    pub cloudinary: CloudinaryConfig,
}

/// Adapter enum that erases the concrete document store behind [`ContentStore`].
#[derive(Debug, Clone)]
pub enum ContentStoreAdapter {
    /// Firestore REST store.
    Browser(FirestoreContentStore),
    /// Seeded in-memory store.
    Offline(MemoryContentStore),
}

impl ContentStore for ContentStoreAdapter {
    fn list<'a>(
        &'a self,
        collection: Collection,
        query: &'a ListQuery,
    ) -> ContentStoreFuture<'a, Result<Vec<Document>, StoreError>> {
        match self {
            Self::Browser(store) => store.list(collection, query),
            Self::Offline(store) => store.list(collection, query),
        }
    }

    fn get<'a>(
        &'a self,
        collection: Collection,
        id: &'a str,
    ) -> ContentStoreFuture<'a, Result<Option<Document>, StoreError>> {
        match self {
            Self::Browser(store) => store.get(collection, id),
            Self::Offline(store) => store.get(collection, id),
        }
    }

    fn create<'a>(
        &'a self,
        collection: Collection,
        fields: Fields,
    ) -> ContentStoreFuture<'a, Result<String, StoreError>> {
        match self {
            Self::Browser(store) => store.create(collection, fields),
            Self::Offline(store) => store.create(collection, fields),
        }
    }

    fn update<'a>(
        &'a self,
        collection: Collection,
        id: &'a str,
        patch: Fields,
    ) -> ContentStoreFuture<'a, Result<(), StoreError>> {
        match self {
            Self::Browser(store) => store.update(collection, id, patch),
            Self::Offline(store) => store.update(collection, id, patch),
        }
    }

    fn delete<'a>(
        &'a self,
        collection: Collection,
        id: &'a str,
    ) -> ContentStoreFuture<'a, Result<(), StoreError>> {
        match self {
            Self::Browser(store) => store.delete(collection, id),
            Self::Offline(store) => store.delete(collection, id),
        }
    }
}

/// Adapter enum that erases the concrete media host behind [`MediaUploadService`].
#[derive(Debug, Clone)]
pub enum MediaUploadAdapter {
    /// Cloudinary unsigned uploads.
    Browser(CloudinaryUploadService),
    /// `memory://` URLs that live for the tab's lifetime.
    Offline(MemoryMediaUploadService),
}

impl MediaUploadService for MediaUploadAdapter {
    fn upload<'a>(
        &'a self,
        file: &'a UploadFile,
        folder: &'a str,
    ) -> MediaUploadFuture<'a, Result<UploadedAsset, String>> {
        match self {
            Self::Browser(service) => service.upload(file, folder),
            Self::Offline(service) => service.upload(file, folder),
        }
    }
}

/// Builds the document store for the selected strategy. `offline_seed` is only used offline.
pub fn content_store(
    settings: &WebHostSettings,
    offline_seed: Vec<(Collection, Vec<Document>)>,
) -> ContentStoreAdapter {
    match selected_host_strategy() {
        HostStrategy::Browser => {
            ContentStoreAdapter::Browser(FirestoreContentStore::new(settings.firestore.clone()))
        }
        HostStrategy::Offline => {
            let store = MemoryContentStore::default();
            for (collection, documents) in offline_seed {
                store.seed(collection, documents);
            }
            ContentStoreAdapter::Offline(store)
        }
    }
}

/// Builds the media upload service for the selected strategy.
pub fn media_upload_service(settings: &WebHostSettings) -> MediaUploadAdapter {
    match selected_host_strategy() {
        HostStrategy::Browser => {
            MediaUploadAdapter::Browser(CloudinaryUploadService::new(settings.cloudinary.clone()))
        }
        HostStrategy::Offline => MediaUploadAdapter::Offline(MemoryMediaUploadService::default()),
    }
}

/// Returns the capability snapshot for the selected strategy.
pub const fn host_capabilities() -> HostCapabilities {
    match selected_host_strategy() {
        HostStrategy::Browser => HostCapabilities::browser(),
        HostStrategy::Offline => HostCapabilities::offline(),
    }
}

/// Assembles the full host bundle handed to the storefront runtime.
pub fn build_host_services(
    settings: &WebHostSettings,
    auth: Rc<dyn AuthService>,
    offline_seed: Vec<(Collection, Vec<Document>)>,
) -> HostServices {
    HostServices {
        content: Rc::new(content_store(settings, offline_seed)),
        media: Rc::new(media_upload_service(settings)),
        client_state: Rc::new(WebClientStateStore),
        auth,
        alerts: Rc::new(WebAlertService),
        capabilities: host_capabilities(),
        host_strategy: selected_host_strategy(),
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use platform_host::{AdminCredentials, LocalAuthService};
    use serde_json::json;

    use super::*;

    fn settings() -> WebHostSettings {
        serde_json::from_value(json!({
            "firestore": {"project_id": "p", "api_key": "k"},
            "cloudinary": {"cloud_name": "c", "upload_preset": "u"}
        }))
        .expect("settings")
    }

    fn seed() -> Vec<(Collection, Vec<Document>)> {
        let mut fields = Fields::new();
        fields.insert("title".to_string(), json!("Welcome"));
        vec![(Collection::Banners, vec![Document::new("b1", fields)])]
    }

    #[test]
    fn settings_default_the_database_id() {
        assert_eq!(settings().firestore.database, "(default)");
    }

    #[cfg(not(feature = "offline-catalog"))]
    #[test]
    fn browser_strategy_uses_remote_adapters() {
        assert_eq!(host_strategy_name(), "browser");
        assert!(matches!(
            content_store(&settings(), seed()),
            ContentStoreAdapter::Browser(_)
        ));
        assert!(matches!(
            media_upload_service(&settings()),
            MediaUploadAdapter::Browser(_)
        ));
    }

    #[cfg(feature = "offline-catalog")]
    #[test]
    fn offline_strategy_seeds_memory_store() {
        let store = content_store(&settings(), seed());
        let banners =
            block_on(store.list(Collection::Banners, &ListQuery::new())).expect("list banners");
        assert_eq!(banners.len(), 1);
    }

    #[test]
    fn host_bundle_reports_selected_strategy() {
        let auth = Rc::new(LocalAuthService::new(
            AdminCredentials {
                username: "admin".to_string(),
                password: "pw".to_string(),
            },
            60_000,
        ));
        let services = build_host_services(&settings(), auth, seed());
        assert_eq!(services.host_strategy, selected_host_strategy());
        assert_eq!(
            block_on(services.client_state.load_raw("missing")).expect("load"),
            None
        );
    }
}
