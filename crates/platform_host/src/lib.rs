//! Typed host-service contracts shared by the storefront runtime and browser adapters.
//!
//! This crate is the boundary between storefront logic and the outside world: the remote
//! document store, the media host, client-persisted state, admin authentication, and blocking
//! dialogs. Concrete browser adapters live in `platform_host_web`; in-memory adapters live here
//! so runtime code can be tested natively.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod alerts;
pub mod auth;
pub mod content_store;
pub mod host;
pub mod media;
pub mod storage;
pub mod time;

pub use alerts::{AlertService, MemoryAlertService, NoopAlertService};
pub use auth::{
    AdminCredentials, AdminSession, AuthError, AuthFuture, AuthService, Clock, LocalAuthService,
};
pub use content_store::{
    encode_fields, encode_patch, find_by_field, Collection, ContentStore, ContentStoreFuture, Document,
    FieldFilter, Fields, ListQuery, MemoryContentStore, NoopContentStore, OrderBy, SortDirection,
    StoreError, CREATED_AT_FIELD, UPDATED_AT_FIELD,
};
pub use host::{CapabilityStatus, HostCapabilities, HostServices, HostStrategy};
pub use media::{
    MediaUploadFuture, MediaUploadService, MemoryMediaUploadService, NoopMediaUploadService,
    UploadFile, UploadedAsset,
};
pub use storage::client_state::{
    load_state_with, save_state_with, ClientStateFuture, ClientStateStore,
    MemoryClientStateStore, NoopClientStateStore, ADMIN_SESSION_KEY, LOCALE_KEY,
};
pub use time::{next_monotonic_timestamp_ms, unix_time_ms_now};
