//! Shared runtime for the fabric storefront and its admin back-office: catalog records and
//! queries, carousel and form state machines, image uploads, the admin session, and the Leptos
//! provider that hands host services to page crates.

pub mod carousel;
pub mod catalog;
pub mod components;
pub mod config;
pub mod format;
pub mod forms;
pub mod host;
pub mod i18n;
pub mod model;
pub mod request;
pub mod runtime_context;
pub mod search;
pub mod seed;
pub mod session;
pub mod slug;
pub mod upload;

pub use carousel::{reduce_carousel, CarouselAction, CarouselSettings, CarouselState};
pub use catalog::CatalogError;
pub use config::StorefrontConfig;
pub use i18n::{Locale, Phrase};
pub use model::*;
pub use runtime_context::{use_storefront, StorefrontContext, StorefrontProvider};
pub use session::{gate, GateDecision, SessionState};
