//! Application Context
//!
//! The reactive session shared via Leptos Context API.
//! Login, logout and expiry are the only writers; views and the API client read.

use std::sync::Arc;

use leptos::prelude::*;

use crate::error::AppError;
use crate::guard::Role;
use crate::session::{validate_token, TokenStore};

fn now_unix() -> i64 {
    chrono::Utc::now().timestamp()
}

/// Session signals provided via context
#[derive(Clone, Copy)]
pub struct SessionContext {
    /// Current bearer token - read
    pub token: ReadSignal<Option<String>>,
    /// Current bearer token - write
    set_token: WriteSignal<Option<String>>,
    /// Role derived from the token
    pub role: Memo<Role>,
    /// Set when the server rejected the token; the shell redirects on it
    pub expired: ReadSignal<bool>,
    set_expired: WriteSignal<bool>,
    store: StoredValue<Arc<dyn TokenStore>>,
}

impl SessionContext {
    /// Build a session from whatever the store holds.
    ///
    /// A stored token that does not decode (or has expired) is cleared and the
    /// session starts anonymous.
    pub fn restore(store: Arc<dyn TokenStore>) -> Self {
        let initial = match store.get_token() {
            Some(token) => match validate_token(&token, now_unix()) {
                Ok(_) => Some(token),
                Err(e) => {
                    log::info!("Discarding stored session: {}", e);
                    store.clear_token();
                    None
                }
            },
            None => None,
        };

        let (token, set_token) = signal(initial);
        let (expired, set_expired) = signal(false);
        let role = Memo::new(move |_| token.with(|t| Role::from_token(t.as_deref(), now_unix())));

        Self {
            token,
            set_token,
            role,
            expired,
            set_expired,
            store: StoredValue::new(store),
        }
    }

    /// Token for request construction, without subscribing
    pub fn token_untracked(&self) -> Option<String> {
        self.token.get_untracked()
    }

    pub fn is_authenticated(&self) -> bool {
        self.role.get().is_authenticated()
    }

    /// Adopt a freshly issued token.
    ///
    /// Nothing observable changes unless the token decodes and is persisted.
    pub fn login(&self, token: &str) -> Result<Role, AppError> {
        let claims = validate_token(token, now_unix())?;
        self.store.with_value(|store| store.set_token(token))?;
        self.set_expired.set(false);
        self.set_token.set(Some(token.to_string()));

        let role = if claims.is_admin() { Role::Admin } else { Role::User };
        log::info!("Signed in as {:?}", role);
        Ok(role)
    }

    pub fn logout(&self) {
        self.store.with_value(|store| store.clear_token());
        self.set_token.set(None);
        self.set_expired.set(false);
        log::info!("Signed out");
    }

    /// The server answered 401: drop the session and flag the redirect
    pub fn expire(&self) {
        if self.token.get_untracked().is_none() && self.expired.get_untracked() {
            return;
        }
        self.store.with_value(|store| store.clear_token());
        self.set_token.set(None);
        self.set_expired.set(true);
        log::info!("Session expired");
    }

    pub fn clear_expired(&self) {
        self.set_expired.set(false);
    }
}

/// Get the session from context
pub fn use_session() -> SessionContext {
    expect_context::<SessionContext>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::tests::{make_token, MemoryTokenStore};

    fn with_owner(test: impl FnOnce()) {
        let owner = Owner::new();
        owner.set();
        test();
    }

    #[test]
    fn test_restore_drops_undecodable_token() {
        with_owner(|| {
            let store = Arc::new(MemoryTokenStore::default());
            store.set_token("not-a-jwt").unwrap();
            let session = SessionContext::restore(store.clone());
            assert_eq!(session.token_untracked(), None);
            assert_eq!(session.role.get_untracked(), Role::Anonymous);
            assert_eq!(store.get_token(), None);
        });
    }

    #[test]
    fn test_restore_keeps_valid_token() {
        with_owner(|| {
            let token = make_token(r#"{"is_admin":true,"exp":4102444800}"#);
            let store = Arc::new(MemoryTokenStore::default());
            store.set_token(&token).unwrap();
            let session = SessionContext::restore(store);
            assert_eq!(session.token_untracked(), Some(token));
            assert_eq!(session.role.get_untracked(), Role::Admin);
        });
    }

    #[test]
    fn test_login_rejects_bad_token_without_persisting() {
        with_owner(|| {
            let store = Arc::new(MemoryTokenStore::default());
            let session = SessionContext::restore(store.clone());
            assert!(session.login("garbage").is_err());
            assert_eq!(store.get_token(), None);
            assert_eq!(session.token_untracked(), None);
        });
    }

    #[test]
    fn test_login_then_logout() {
        with_owner(|| {
            let store = Arc::new(MemoryTokenStore::default());
            let session = SessionContext::restore(store.clone());
            let token = make_token(r#"{"is_admin":false}"#);

            assert_eq!(session.login(&token).unwrap(), Role::User);
            assert_eq!(store.get_token(), Some(token.clone()));
            assert_eq!(session.role.get_untracked(), Role::User);

            session.logout();
            assert_eq!(store.get_token(), None);
            assert_eq!(session.role.get_untracked(), Role::Anonymous);
            assert!(!session.expired.get_untracked());
        });
    }

    #[test]
    fn test_expire_clears_and_flags() {
        with_owner(|| {
            let store = Arc::new(MemoryTokenStore::default());
            let session = SessionContext::restore(store.clone());
            session.login(&make_token(r#"{"is_admin":true}"#)).unwrap();

            session.expire();
            assert_eq!(store.get_token(), None);
            assert!(session.expired.get_untracked());
            assert_eq!(session.role.get_untracked(), Role::Anonymous);

            session.clear_expired();
            assert!(!session.expired.get_untracked());
        });
    }
}
