//! Admin session issuance and validation.
//!
//! A session is an explicit, expiring value object. It is issued by an [`AuthService`], persisted
//! by the caller under [`crate::ADMIN_SESSION_KEY`], and re-validated whenever the admin area
//! mounts.

use std::{future::Future, pin::Pin, rc::Rc};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::time::unix_time_ms_now;

/// Object-safe boxed future used by [`AuthService`] async methods.
pub type AuthFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Signed-in admin session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminSession {
    /// Opaque session token.
    pub token: String,
    /// Account the session was issued to.
    pub username: String,
    /// Issue time in unix milliseconds.
    pub issued_at_unix_ms: u64,
    /// Expiry time in unix milliseconds (exclusive).
    pub expires_at_unix_ms: u64,
}

impl AdminSession {
    /// Returns whether the session is expired at `now_ms`.
    pub fn is_expired_at(&self, now_ms: u64) -> bool {
        now_ms >= self.expires_at_unix_ms
    }

    /// Milliseconds left before expiry at `now_ms`.
    pub fn remaining_ms(&self, now_ms: u64) -> u64 {
        self.expires_at_unix_ms.saturating_sub(now_ms)
    }
}

/// Authentication failures.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Username or password did not match.
    #[error("invalid username or password")]
    InvalidCredentials,
    /// The session has passed its expiry.
    #[error("session expired")]
    Expired,
    /// The session was not issued by this service or has been revoked.
    #[error("session not recognized")]
    Unrecognized,
}

/// Host service that issues and checks admin sessions.
pub trait AuthService {
    /// Exchanges credentials for a fresh session.
    fn sign_in<'a>(
        &'a self,
        username: &'a str,
        password: &'a str,
    ) -> AuthFuture<'a, Result<AdminSession, AuthError>>;

    /// Checks that `session` is still valid.
    fn validate<'a>(&'a self, session: &'a AdminSession) -> AuthFuture<'a, Result<(), AuthError>>;
}

/// Account accepted by [`LocalAuthService`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminCredentials {
    /// Account name.
    pub username: String,
    /// Account password.
    pub password: String,
}

/// Clock used to stamp and check sessions.
pub type Clock = Rc<dyn Fn() -> u64>;

/// Client-side auth service over a single configured account.
///
/// Sessions validate against the configured username and the expiry time; tokens are random v4
/// UUIDs.
#[derive(Clone)]
pub struct LocalAuthService {
    credentials: AdminCredentials,
    ttl_ms: u64,
    clock: Clock,
}

impl LocalAuthService {
    /// Creates a service that issues sessions lasting `ttl_ms`.
    pub fn new(credentials: AdminCredentials, ttl_ms: u64) -> Self {
        Self {
            credentials,
            ttl_ms,
            clock: Rc::new(unix_time_ms_now),
        }
    }

    /// Replaces the wall clock, mainly for tests.
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }
}

impl AuthService for LocalAuthService {
    fn sign_in<'a>(
        &'a self,
        username: &'a str,
        password: &'a str,
    ) -> AuthFuture<'a, Result<AdminSession, AuthError>> {
        Box::pin(async move {
            if username.trim() != self.credentials.username
                || password != self.credentials.password
            {
                return Err(AuthError::InvalidCredentials);
            }
            let now = (self.clock)();
            Ok(AdminSession {
                token: uuid::Uuid::new_v4().to_string(),
                username: self.credentials.username.clone(),
                issued_at_unix_ms: now,
                expires_at_unix_ms: now.saturating_add(self.ttl_ms),
            })
        })
    }

    fn validate<'a>(&'a self, session: &'a AdminSession) -> AuthFuture<'a, Result<(), AuthError>> {
        Box::pin(async move {
            if session.username != self.credentials.username
                || session.token.is_empty()
                || session.issued_at_unix_ms > session.expires_at_unix_ms
            {
                return Err(AuthError::Unrecognized);
            }
            if session.is_expired_at((self.clock)()) {
                return Err(AuthError::Expired);
            }
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use futures::executor::block_on;

    use super::*;

    fn service(now: Rc<Cell<u64>>) -> LocalAuthService {
        LocalAuthService::new(
            AdminCredentials {
                username: "admin".to_string(),
                password: "secret".to_string(),
            },
            1_000,
        )
        .with_clock(Rc::new(move || now.get()))
    }

    #[test]
    fn sign_in_issues_expiring_session() {
        let now = Rc::new(Cell::new(5_000));
        let auth = service(now.clone());
        let session = block_on(auth.sign_in("admin", "secret")).expect("sign in");
        assert_eq!(session.username, "admin");
        assert_eq!(session.issued_at_unix_ms, 5_000);
        assert_eq!(session.expires_at_unix_ms, 6_000);
        assert!(!session.token.is_empty());
        block_on(auth.validate(&session)).expect("fresh session is valid");

        now.set(6_000);
        assert_eq!(block_on(auth.validate(&session)), Err(AuthError::Expired));
    }

    #[test]
    fn wrong_password_is_rejected() {
        let auth = service(Rc::new(Cell::new(0)));
        assert_eq!(
            block_on(auth.sign_in("admin", "nope")),
            Err(AuthError::InvalidCredentials)
        );
    }

    #[test]
    fn foreign_sessions_are_unrecognized() {
        let auth = service(Rc::new(Cell::new(0)));
        let forged = AdminSession {
            token: "t".to_string(),
            username: "someone".to_string(),
            issued_at_unix_ms: 0,
            expires_at_unix_ms: 10,
        };
        assert_eq!(block_on(auth.validate(&forged)), Err(AuthError::Unrecognized));
    }

    #[test]
    fn remaining_time_saturates() {
        let session = AdminSession {
            token: "t".to_string(),
            username: "admin".to_string(),
            issued_at_unix_ms: 0,
            expires_at_unix_ms: 100,
        };
        assert_eq!(session.remaining_ms(40), 60);
        assert_eq!(session.remaining_ms(400), 0);
    }
}
