//! Session Store
//!
//! Persisted bearer token plus local (unverified) claims decoding.
//! Signature checks are the backend's job; the client only needs the role flag.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use gloo_storage::{LocalStorage, Storage};
use serde::Deserialize;
use thiserror::Error;

use crate::error::DecodeError;

/// Local storage key holding the access token
pub const TOKEN_KEY: &str = "accessToken";
/// Keys older builds wrote; cleared on logout
pub const LEGACY_TOKEN_KEYS: &[&str] = &["authToken", "refreshToken"];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("could not persist session token: {0}")]
pub struct PersistError(pub String);

/// Where the bearer token lives between page loads
pub trait TokenStore: Send + Sync {
    fn get_token(&self) -> Option<String>;
    fn set_token(&self, token: &str) -> Result<(), PersistError>;
    fn clear_token(&self);
}

/// `window.localStorage`-backed store
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTokenStore;

impl TokenStore for BrowserTokenStore {
    fn get_token(&self) -> Option<String> {
        LocalStorage::get::<String>(TOKEN_KEY)
            .ok()
            .filter(|token| !token.trim().is_empty())
    }

    fn set_token(&self, token: &str) -> Result<(), PersistError> {
        LocalStorage::set(TOKEN_KEY, token).map_err(|e| PersistError(e.to_string()))
    }

    fn clear_token(&self) {
        LocalStorage::delete(TOKEN_KEY);
        for key in LEGACY_TOKEN_KEYS {
            LocalStorage::delete(key);
        }
    }
}

/// Claims the client cares about
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Claims {
    #[serde(default)]
    pub is_admin: Option<bool>,
    /// Expiry as unix seconds
    #[serde(default)]
    pub exp: Option<i64>,
}

impl Claims {
    pub fn is_admin(&self) -> bool {
        self.is_admin.unwrap_or(false)
    }

    pub fn is_expired(&self, now_unix: i64) -> bool {
        self.exp.is_some_and(|exp| exp <= now_unix)
    }
}

/// Decode the payload segment of a JWT without verifying it
pub fn decode_role(token: &str) -> Result<Claims, DecodeError> {
    let mut segments = token.trim().split('.');
    let (Some(_header), Some(payload), Some(_signature), None) =
        (segments.next(), segments.next(), segments.next(), segments.next())
    else {
        return Err(DecodeError::Malformed);
    };
    if payload.is_empty() {
        return Err(DecodeError::Malformed);
    }

    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|e| DecodeError::Encoding(e.to_string()))?;
    serde_json::from_slice::<Claims>(&bytes).map_err(|e| DecodeError::Claims(e.to_string()))
}

/// Decode and reject expired tokens
pub fn validate_token(token: &str, now_unix: i64) -> Result<Claims, DecodeError> {
    let claims = decode_role(token)?;
    if claims.is_expired(now_unix) {
        return Err(DecodeError::Expired);
    }
    Ok(claims)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::sync::Mutex;

    /// In-memory store for tests
    #[derive(Default)]
    pub struct MemoryTokenStore {
        pub token: Mutex<Option<String>>,
    }

    impl TokenStore for MemoryTokenStore {
        fn get_token(&self) -> Option<String> {
            self.token.lock().unwrap().clone()
        }

        fn set_token(&self, token: &str) -> Result<(), PersistError> {
            *self.token.lock().unwrap() = Some(token.to_string());
            Ok(())
        }

        fn clear_token(&self) {
            *self.token.lock().unwrap() = None;
        }
    }

    pub fn make_token(claims_json: &str) -> String {
        let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
        let payload = URL_SAFE_NO_PAD.encode(claims_json);
        format!("{header}.{payload}.c2lnbmF0dXJl")
    }

    #[test]
    fn test_decode_admin_flag() {
        let token = make_token(r#"{"token_type":"access","user_id":1,"is_admin":true,"exp":4102444800}"#);
        let claims = decode_role(&token).unwrap();
        assert!(claims.is_admin());
        assert!(!claims.is_expired(1_700_000_000));
    }

    #[test]
    fn test_missing_flag_is_not_admin() {
        let token = make_token(r#"{"user_id":7}"#);
        assert!(!decode_role(&token).unwrap().is_admin());
    }

    #[test]
    fn test_padded_payload_accepted() {
        let header = URL_SAFE_NO_PAD.encode("{}");
        let payload = base64::engine::general_purpose::URL_SAFE.encode(r#"{"is_admin":true}"#);
        assert!(payload.ends_with('='));
        let token = format!("{header}.{payload}.sig");
        assert!(decode_role(&token).unwrap().is_admin());
    }

    #[test]
    fn test_malformed_tokens() {
        assert_eq!(decode_role("not-a-token"), Err(DecodeError::Malformed));
        assert_eq!(decode_role("a..c"), Err(DecodeError::Malformed));
        assert_eq!(decode_role("a.b.c.d"), Err(DecodeError::Malformed));
        assert!(matches!(decode_role("a.!!!.c"), Err(DecodeError::Encoding(_))));
        let not_json = format!("a.{}.c", URL_SAFE_NO_PAD.encode("hello"));
        assert!(matches!(decode_role(&not_json), Err(DecodeError::Claims(_))));
    }

    #[test]
    fn test_expired_claims() {
        let claims = Claims { is_admin: Some(true), exp: Some(100) };
        assert!(claims.is_expired(100));
        assert!(!Claims::default().is_expired(i64::MAX));
    }

    #[test]
    fn test_validate_rejects_expired() {
        let token = make_token(r#"{"is_admin":false,"exp":1000}"#);
        assert_eq!(validate_token(&token, 999).map(|c| c.is_admin()), Ok(false));
        assert_eq!(validate_token(&token, 1000), Err(DecodeError::Expired));
    }

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemoryTokenStore::default();
        assert_eq!(store.get_token(), None);
        store.set_token("abc").unwrap();
        assert_eq!(store.get_token().as_deref(), Some("abc"));
        store.clear_token();
        assert_eq!(store.get_token(), None);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn browser_store_persists_and_clears_legacy_keys() {
        let store = BrowserTokenStore;
        LocalStorage::set("refreshToken", "old").unwrap();
        store.set_token("header.payload.sig").unwrap();
        assert_eq!(store.get_token().as_deref(), Some("header.payload.sig"));

        store.clear_token();
        assert_eq!(store.get_token(), None);
        assert!(LocalStorage::get::<String>("refreshToken").is_err());
    }
}
