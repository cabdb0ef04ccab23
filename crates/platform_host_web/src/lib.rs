//! Browser (`wasm32`) implementations of [`platform_host`] service contracts.
//!
//! This crate wires the storefront to its outside world: Firestore over REST for catalog
//! documents, Cloudinary unsigned uploads for images, `localStorage` for the admin session and
//! locale, and the native `alert`/`confirm` dialogs.
//!
//! All browser calls go through `bridge` (`bridge::interop` holds the wasm and native halves),
//! so adapters build and test natively.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Compile-time host-strategy selection and adapter factories.
pub mod adapters;
pub mod alerts;
mod bridge;
pub mod cloudinary;
pub mod firestore;
pub mod storage;

pub use adapters::{
    build_host_services, content_store, host_capabilities, host_strategy_name,
    media_upload_service, selected_host_strategy, ContentStoreAdapter, HostStrategy,
    MediaUploadAdapter, WebHostSettings,
};
pub use alerts::WebAlertService;
pub use cloudinary::{CloudinaryConfig, CloudinaryUploadService};
pub use firestore::{FirestoreConfig, FirestoreContentStore};
pub use storage::local_state::WebClientStateStore;
