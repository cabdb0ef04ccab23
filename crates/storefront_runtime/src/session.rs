//! Admin session lifecycle: restore on mount, sign in, sign out, and the route gate.

use leptos::logging;
use platform_host::{
    load_state_with, save_state_with, AdminSession, AuthError, AuthService, ClientStateStore,
    ADMIN_SESSION_KEY,
};

/// Path of the admin login page.
pub const ADMIN_LOGIN_PATH: &str = "/admin/login";
/// Landing page after signing in.
pub const ADMIN_HOME_PATH: &str = "/admin";

/// Admin session as seen by the UI.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    /// The persisted session has not been checked yet.
    #[default]
    Checking,
    /// No valid session.
    SignedOut,
    /// A validated session.
    SignedIn(AdminSession),
}

impl SessionState {
    /// The session, when signed in.
    pub fn session(&self) -> Option<&AdminSession> {
        match self {
            Self::SignedIn(session) => Some(session),
            _ => None,
        }
    }
}

/// What the admin layout should do for the current route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    /// Session check still running; show a placeholder.
    Wait,
    /// Render the requested page.
    Render,
    /// Send the visitor to the login page.
    RedirectToLogin,
    /// Already signed in on the login page; go to the dashboard.
    RedirectToDashboard,
}

/// Decides how the admin layout treats `path` in `state`.
pub fn gate(state: &SessionState, path: &str) -> GateDecision {
    let on_login = path.trim_end_matches('/') == ADMIN_LOGIN_PATH;
    match (state, on_login) {
        (SessionState::Checking, _) => GateDecision::Wait,
        (SessionState::SignedOut, true) => GateDecision::Render,
        (SessionState::SignedOut, false) => GateDecision::RedirectToLogin,
        (SessionState::SignedIn(_), true) => GateDecision::RedirectToDashboard,
        (SessionState::SignedIn(_), false) => GateDecision::Render,
    }
}

async fn forget<C: ClientStateStore + ?Sized>(client_state: &C) {
    if let Err(err) = client_state.remove(ADMIN_SESSION_KEY).await {
        logging::warn!("failed to clear admin session: {err}");
    }
}

/// Loads the persisted session and re-validates it. Invalid or expired sessions are removed.
pub async fn restore_session<A, C>(auth: &A, client_state: &C) -> SessionState
where
    A: AuthService + ?Sized,
    C: ClientStateStore + ?Sized,
{
    let stored = match load_state_with::<_, AdminSession>(client_state, ADMIN_SESSION_KEY).await {
        Ok(stored) => stored,
        Err(err) => {
            logging::warn!("failed to read admin session: {err}");
            forget(client_state).await;
            return SessionState::SignedOut;
        }
    };
    let Some(session) = stored else {
        return SessionState::SignedOut;
    };
    match auth.validate(&session).await {
        Ok(()) => SessionState::SignedIn(session),
        Err(err) => {
            logging::log!("discarding admin session: {err}");
            forget(client_state).await;
            SessionState::SignedOut
        }
    }
}

/// Exchanges credentials for a session and persists it.
///
/// A persistence failure is logged; the session still holds for the current tab.
///
/// # Errors
///
/// Returns the auth service's error for rejected credentials.
pub async fn sign_in<A, C>(
    auth: &A,
    client_state: &C,
    username: &str,
    password: &str,
) -> Result<AdminSession, AuthError>
where
    A: AuthService + ?Sized,
    C: ClientStateStore + ?Sized,
{
    let session = auth.sign_in(username, password).await?;
    if let Err(err) = save_state_with(client_state, ADMIN_SESSION_KEY, &session).await {
        logging::warn!("failed to persist admin session: {err}");
    }
    Ok(session)
}

/// Forgets the persisted session.
pub async fn sign_out<C: ClientStateStore + ?Sized>(client_state: &C) {
    forget(client_state).await;
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, rc::Rc};

    use futures::executor::block_on;
    use platform_host::{AdminCredentials, LocalAuthService, MemoryClientStateStore};
    use pretty_assertions::assert_eq;

    use super::*;

    fn auth(now: Rc<Cell<u64>>) -> LocalAuthService {
        LocalAuthService::new(
            AdminCredentials {
                username: "admin".to_string(),
                password: "secret".to_string(),
            },
            60_000,
        )
        .with_clock(Rc::new(move || now.get()))
    }

    #[test]
    fn signed_in_session_survives_reload_until_expiry() {
        let now = Rc::new(Cell::new(1_000));
        let auth = auth(now.clone());
        let client_state = MemoryClientStateStore::default();

        let session =
            block_on(sign_in(&auth, &client_state, "admin", "secret")).expect("sign in");
        assert_eq!(
            block_on(restore_session(&auth, &client_state)),
            SessionState::SignedIn(session)
        );

        now.set(61_000);
        assert_eq!(
            block_on(restore_session(&auth, &client_state)),
            SessionState::SignedOut
        );
        assert_eq!(
            block_on(client_state.load_raw(ADMIN_SESSION_KEY)).expect("load"),
            None
        );
    }

    #[test]
    fn bad_credentials_persist_nothing() {
        let auth = auth(Rc::new(Cell::new(0)));
        let client_state = MemoryClientStateStore::default();
        assert_eq!(
            block_on(sign_in(&auth, &client_state, "admin", "wrong")),
            Err(AuthError::InvalidCredentials)
        );
        assert_eq!(
            block_on(restore_session(&auth, &client_state)),
            SessionState::SignedOut
        );
    }

    #[test]
    fn corrupt_or_legacy_values_sign_out() {
        let auth = auth(Rc::new(Cell::new(0)));
        let client_state = MemoryClientStateStore::default();
        block_on(client_state.save_raw(ADMIN_SESSION_KEY, "true")).expect("save legacy flag");
        assert_eq!(
            block_on(restore_session(&auth, &client_state)),
            SessionState::SignedOut
        );
        assert_eq!(
            block_on(client_state.load_raw(ADMIN_SESSION_KEY)).expect("load"),
            None
        );
    }

    #[test]
    fn sign_out_clears_storage() {
        let auth = auth(Rc::new(Cell::new(0)));
        let client_state = MemoryClientStateStore::default();
        block_on(sign_in(&auth, &client_state, "admin", "secret")).expect("sign in");
        block_on(sign_out(&client_state));
        assert_eq!(
            block_on(restore_session(&auth, &client_state)),
            SessionState::SignedOut
        );
    }

    #[test]
    fn gate_routes_by_session_state() {
        let session = AdminSession {
            token: "t".to_string(),
            username: "admin".to_string(),
            issued_at_unix_ms: 0,
            expires_at_unix_ms: 10,
        };
        let signed_in = SessionState::SignedIn(session);
        assert_eq!(gate(&SessionState::Checking, "/admin"), GateDecision::Wait);
        assert_eq!(
            gate(&SessionState::SignedOut, "/admin/banners"),
            GateDecision::RedirectToLogin
        );
        assert_eq!(
            gate(&SessionState::SignedOut, "/admin/login/"),
            GateDecision::Render
        );
        assert_eq!(gate(&signed_in, "/admin/login"), GateDecision::RedirectToDashboard);
        assert_eq!(gate(&signed_in, "/admin/products/p1"), GateDecision::Render);
    }
}
