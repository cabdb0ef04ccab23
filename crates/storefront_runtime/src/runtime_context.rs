//! Provider and context wiring shared by storefront and admin pages.
//!
//! The provider owns the host bundle, the UI language and the admin session. It boots both from
//! client-persisted state once on mount.
#![allow(clippy::clone_on_copy)]

use leptos::*;
use platform_host::{AdminSession, AuthError, HostServices};

use crate::{
    config::StorefrontConfig,
    host::StorefrontHostContext,
    i18n::{Locale, Phrase},
    session::{self, SessionState},
};

#[derive(Clone, Copy)]
/// Leptos context for host services, locale and the admin session.
pub struct StorefrontContext {
    /// Host service bundle.
    pub host: StoredValue<StorefrontHostContext>,
    /// Compile-time storefront configuration.
    pub config: &'static StorefrontConfig,
    /// Active UI language.
    pub locale: RwSignal<Locale>,
    /// Admin session state.
    pub session: RwSignal<SessionState>,
}

impl StorefrontContext {
    /// Reactive copy for `phrase` in the active language.
    pub fn text(&self, phrase: Phrase) -> &'static str {
        phrase.text(self.locale.get())
    }

    /// Copy for `phrase` without subscribing, for event handlers.
    pub fn text_untracked(&self, phrase: Phrase) -> &'static str {
        phrase.text(self.locale.get_untracked())
    }

    /// Switches language and persists the choice.
    pub fn toggle_locale(&self) {
        let next = self.locale.get_untracked().toggled();
        self.locale.set(next);
        let host = self.host.get_value();
        spawn_local(async move {
            host.persist_locale(next).await;
        });
    }

    /// The validated admin session, if signed in.
    pub fn admin_session(&self) -> Option<AdminSession> {
        self.session.with(|state| state.session().cloned())
    }

    /// Exchanges credentials for a session. On success the session is persisted and published.
    ///
    /// # Errors
    ///
    /// Returns the auth service's rejection.
    pub async fn sign_in(self, username: String, password: String) -> Result<(), AuthError> {
        let host = self.host.get_value();
        let auth = host.auth_service();
        let client_state = host.client_state_store();
        let signed_in =
            session::sign_in(auth.as_ref(), client_state.as_ref(), &username, &password).await?;
        logging::log!("admin signed in as {}", signed_in.username);
        self.session.set(SessionState::SignedIn(signed_in));
        Ok(())
    }

    /// Forgets the session locally and in client state.
    pub fn sign_out(&self) {
        self.session.set(SessionState::SignedOut);
        let host = self.host.get_value();
        spawn_local(async move {
            session::sign_out(host.client_state_store().as_ref()).await;
        });
    }

    /// Re-validates the current session, signing out with a notice once it has expired.
    pub fn revalidate_session(&self) {
        let Some(current) = self.admin_session() else {
            return;
        };
        let runtime = *self;
        spawn_local(async move {
            let host = runtime.host.get_value();
            if let Err(err) = host.auth_service().validate(&current).await {
                logging::log!("admin session ended: {err}");
                runtime.sign_out();
                host.alert_service()
                    .alert(runtime.text_untracked(Phrase::SessionExpired));
            }
        });
    }
}

fn install_boot(runtime: StorefrontContext) {
    let host = runtime.host.get_value();
    spawn_local(async move {
        if let Some(locale) = host.load_locale().await {
            runtime.locale.set(locale);
        }
        let restored = session::restore_session(
            host.auth_service().as_ref(),
            host.client_state_store().as_ref(),
        )
        .await;
        runtime.session.set(restored);
    });
}

#[component]
/// Provides [`StorefrontContext`] to descendant pages and restores persisted state.
pub fn StorefrontProvider(
    /// Injected browser or offline host bundle assembled by the entry layer.
    host_services: HostServices,
    children: Children,
) -> impl IntoView {
    let config = StorefrontConfig::load();
    let runtime = StorefrontContext {
        host: store_value(StorefrontHostContext::new(host_services)),
        config,
        locale: create_rw_signal(config.locale.default),
        session: create_rw_signal(SessionState::Checking),
    };
    logging::log!(
        "storefront host strategy: {}",
        runtime.host.get_value().host_strategy_name()
    );

    provide_context(runtime.clone());
    install_boot(runtime);

    create_effect(move |_| {
        let lang = runtime.locale.get().as_str();
        if let Some(root) = document().document_element() {
            let _ = root.set_attribute("lang", lang);
        }
    });

    children().into_view()
}

/// Returns the current [`StorefrontContext`].
///
/// # Panics
///
/// Panics if called outside [`StorefrontProvider`].
pub fn use_storefront() -> StorefrontContext {
    use_context::<StorefrontContext>().expect("StorefrontContext not provided")
}
