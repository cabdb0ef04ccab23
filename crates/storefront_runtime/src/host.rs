//! Host service access for storefront views.
//!
//! Views never reach for browser APIs directly: every remote read, upload, persisted value, and
//! dialog goes through the [`HostServices`] bundle the entry layer injected.

use std::rc::Rc;

use leptos::logging;
use platform_host::{
    load_state_with, save_state_with, AlertService, AuthService, ClientStateStore, ContentStore,
    HostCapabilities, HostServices, MediaUploadService, LOCALE_KEY,
};

use crate::i18n::Locale;

#[derive(Clone)]
/// Host service bundle shared through the storefront context.
pub struct StorefrontHostContext {
    services: HostServices,
}

impl StorefrontHostContext {
    /// Wraps the injected bundle.
    pub fn new(services: HostServices) -> Self {
        Self { services }
    }

    /// Returns the catalog document store.
    pub fn content_store(&self) -> Rc<dyn ContentStore> {
        self.services.content.clone()
    }

    /// Returns the image upload service.
    pub fn media_upload_service(&self) -> Rc<dyn MediaUploadService> {
        self.services.media.clone()
    }

    /// Returns the client-persisted key/value store.
    pub fn client_state_store(&self) -> Rc<dyn ClientStateStore> {
        self.services.client_state.clone()
    }

    /// Returns the admin session issuer.
    pub fn auth_service(&self) -> Rc<dyn AuthService> {
        self.services.auth.clone()
    }

    /// Returns the blocking dialog service.
    pub fn alert_service(&self) -> Rc<dyn AlertService> {
        self.services.alerts.clone()
    }

    /// Returns the capability snapshot.
    pub fn capabilities(&self) -> HostCapabilities {
        self.services.capabilities
    }

    /// Returns the stable name of the selected host strategy.
    pub fn host_strategy_name(&self) -> &'static str {
        self.services.host_strategy.as_str()
    }

    /// Loads the persisted UI language. Unreadable values are treated as unset.
    pub async fn load_locale(&self) -> Option<Locale> {
        match load_state_with::<_, Locale>(self.services.client_state.as_ref(), LOCALE_KEY).await {
            Ok(locale) => locale,
            Err(err) => {
                logging::warn!("failed to read locale preference: {err}");
                None
            }
        }
    }

    /// Persists the UI language.
    pub async fn persist_locale(&self, locale: Locale) {
        if let Err(err) =
            save_state_with(self.services.client_state.as_ref(), LOCALE_KEY, &locale).await
        {
            logging::warn!("failed to persist locale preference: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use platform_host::{AdminCredentials, LocalAuthService};

    use super::*;

    fn host() -> StorefrontHostContext {
        let auth = Rc::new(LocalAuthService::new(
            AdminCredentials {
                username: "admin".to_string(),
                password: "pw".to_string(),
            },
            60_000,
        ));
        StorefrontHostContext::new(HostServices::in_memory(auth))
    }

    #[test]
    fn locale_round_trips_through_client_state() {
        let host = host();
        assert_eq!(block_on(host.load_locale()), None);
        block_on(host.persist_locale(Locale::En));
        assert_eq!(block_on(host.load_locale()), Some(Locale::En));
    }

    #[test]
    fn garbage_locale_reads_as_unset() {
        let host = host();
        block_on(host.client_state_store().save_raw(LOCALE_KEY, "\"klingon\""))
            .expect("save raw");
        assert_eq!(block_on(host.load_locale()), None);
        assert_eq!(host.host_strategy_name(), "offline");
    }
}
