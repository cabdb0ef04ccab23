//! Host service bundle and capability models injected into the storefront runtime.

use std::rc::Rc;

use crate::{AlertService, AuthService, ClientStateStore, ContentStore, MediaUploadService};

/// Host strategy selected for the current build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostStrategy {
    /// Remote document database and media host reached over HTTP.
    Browser,
    /// In-memory catalog seeded from bundled data; nothing leaves the tab.
    Offline,
}

impl HostStrategy {
    /// Returns a stable string token for diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Browser => "browser",
            Self::Offline => "offline",
        }
    }
}

/// Availability of one optional capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapabilityStatus {
    /// Usable now.
    Available,
    /// Not supported by the active host.
    Unavailable,
}

impl CapabilityStatus {
    /// Returns whether the capability can be used immediately.
    pub const fn is_available(self) -> bool {
        matches!(self, Self::Available)
    }
}

/// Capability snapshot for UI branching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostCapabilities {
    /// Writes survive a page reload.
    pub durable_content: CapabilityStatus,
    /// Images can be sent to a media host.
    pub media_upload: CapabilityStatus,
}

impl HostCapabilities {
    /// Capabilities of the remote-backed browser host.
    pub const fn browser() -> Self {
        Self {
            durable_content: CapabilityStatus::Available,
            media_upload: CapabilityStatus::Available,
        }
    }

    /// Capabilities of the in-memory offline host.
    pub const fn offline() -> Self {
        Self {
            durable_content: CapabilityStatus::Unavailable,
            media_upload: CapabilityStatus::Available,
        }
    }
}

/// Host service bundle assembled by the entry layer and handed to the runtime.
#[derive(Clone)]
pub struct HostServices {
    /// Catalog document store.
    pub content: Rc<dyn ContentStore>,
    /// Image upload service.
    pub media: Rc<dyn MediaUploadService>,
    /// Client-persisted key/value state.
    pub client_state: Rc<dyn ClientStateStore>,
    /// Admin session issuer/validator.
    pub auth: Rc<dyn AuthService>,
    /// Blocking alert/confirm prompts.
    pub alerts: Rc<dyn AlertService>,
    /// Capability snapshot.
    pub capabilities: HostCapabilities,
    /// Strategy identifier for diagnostics.
    pub host_strategy: HostStrategy,
}

impl HostServices {
    /// Builds an all-in-memory bundle, used by tests and offline demos.
    pub fn in_memory(auth: Rc<dyn AuthService>) -> Self {
        Self {
            content: Rc::new(crate::MemoryContentStore::default()),
            media: Rc::new(crate::MemoryMediaUploadService::default()),
            client_state: Rc::new(crate::MemoryClientStateStore::default()),
            auth,
            alerts: Rc::new(crate::NoopAlertService),
            capabilities: HostCapabilities::offline(),
            host_strategy: HostStrategy::Offline,
        }
    }
}
