//! View State
//!
//! The fetch lifecycle every routed view shares: `Idle -> Loading ->
//! {Success, Error}`, started once per mount, torn down with the view.

use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{cancellation_pair, use_api, ApiClient};
use crate::context::{use_session, SessionContext};
use crate::error::AppError;

#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    Idle,
    Loading,
    Success(T),
    Error(String),
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        FetchState::Idle
    }
}

impl<T> FetchState<T> {
    /// `Idle -> Loading`; returns false when a fetch already ran
    pub fn begin(&mut self) -> bool {
        if matches!(self, FetchState::Idle) {
            *self = FetchState::Loading;
            true
        } else {
            false
        }
    }

    /// Store the outcome of the fetch started by `begin`
    pub fn resolve(&mut self, outcome: Result<T, String>) {
        if !matches!(self, FetchState::Loading) {
            return;
        }
        *self = match outcome {
            Ok(value) => FetchState::Success(value),
            Err(message) => FetchState::Error(message),
        };
    }

    /// Hide an error banner without fetching again
    pub fn dismiss(&mut self) {
        if matches!(self, FetchState::Error(_)) {
            *self = FetchState::Idle;
        }
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            FetchState::Success(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FetchState::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    /// Local edit of loaded data (optimistic updates)
    pub fn update_value(&mut self, f: impl FnOnce(&mut T)) {
        if let FetchState::Success(value) = self {
            f(value);
        }
    }
}

/// What a finished request means for its view
#[derive(Debug, PartialEq)]
pub enum Settled<T> {
    /// The view is gone or the request was aborted: drop it silently
    Discard,
    /// The server rejected the session
    Expired,
    Done(Result<T, String>),
}

pub fn settle<T>(outcome: Result<T, AppError>, cancelled: bool) -> Settled<T> {
    if cancelled {
        return Settled::Discard;
    }
    match outcome {
        Ok(value) => Settled::Done(Ok(value)),
        Err(AppError::Cancelled) => Settled::Discard,
        Err(e) if e.is_unauthorized() => Settled::Expired,
        Err(e) => {
            log::warn!("Request failed: {}", e);
            Settled::Done(Err(e.user_message()))
        }
    }
}

/// Claim the view's single in-flight action slot for `id`.
///
/// Returns false while another action holds it; the caller then fires nothing.
pub fn claim_slot(slot: &mut Option<u32>, id: u32) -> bool {
    if slot.is_some() {
        return false;
    }
    *slot = Some(id);
    true
}

// ========================
// View Scope
// ========================

/// Per-view handle: a cancellable API client plus the session.
///
/// Must be created inside a component; its requests are aborted when that
/// component is cleaned up.
#[derive(Clone)]
pub struct ViewScope {
    pub api: ApiClient,
    session: SessionContext,
}

impl ViewScope {
    pub fn new() -> Self {
        let (handle, cancel) = cancellation_pair();
        on_cleanup(move || handle.cancel());
        Self::from_parts(use_api().scoped(cancel), use_session())
    }

    pub fn from_parts(api: ApiClient, session: SessionContext) -> Self {
        Self { api, session }
    }

    pub fn is_active(&self) -> bool {
        !self.api.is_cancelled()
    }

    /// Classify an outcome, expiring the session on 401.
    ///
    /// Returns `None` when there is nothing for the view to show.
    pub fn settle<T>(&self, outcome: Result<T, AppError>) -> Option<Result<T, String>> {
        match settle(outcome, self.api.is_cancelled()) {
            Settled::Discard => None,
            Settled::Expired => {
                self.session.expire();
                None
            }
            Settled::Done(result) => Some(result),
        }
    }

    /// Run `fut` and hand its settled result to `on_done`
    pub fn spawn<T, Fut>(&self, fut: Fut, on_done: impl FnOnce(Result<T, String>) + 'static)
    where
        T: 'static,
        Fut: Future<Output = Result<T, AppError>> + 'static,
    {
        let scope = self.clone();
        spawn_local(async move {
            let outcome = fut.await;
            if let Some(result) = scope.settle(outcome) {
                on_done(result);
            }
        });
    }
}

/// Fetch once on mount and expose the lifecycle as a signal
pub fn use_fetch<T, F, Fut>(fetch: F) -> RwSignal<FetchState<T>>
where
    T: Send + Sync + 'static,
    F: FnOnce(ApiClient) -> Fut + 'static,
    Fut: Future<Output = Result<T, AppError>> + 'static,
{
    let scope = ViewScope::new();
    let state = RwSignal::new(FetchState::Idle);
    state.update(|s| {
        s.begin();
    });

    scope.spawn(fetch(scope.api.clone()), move |result| {
        state.try_update(|s| s.resolve(result));
    });
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::config::{AppConfig, ConfigSource};
    use crate::session::tests::{make_token, MemoryTokenStore};
    use crate::session::TokenStore;

    #[test]
    fn test_begin_only_once() {
        let mut state: FetchState<u32> = FetchState::Idle;
        assert!(state.begin());
        assert!(!state.begin());
        state.resolve(Ok(3));
        assert!(!state.begin());
        assert_eq!(state.value(), Some(&3));
    }

    #[test]
    fn test_resolve_error_and_dismiss() {
        let mut state: FetchState<Vec<u32>> = FetchState::Idle;
        state.begin();
        state.resolve(Err("Failed to load tasks.".to_string()));
        assert_eq!(state.error(), Some("Failed to load tasks."));

        state.dismiss();
        assert_eq!(state, FetchState::Idle);
        // Dismissing must not restart the fetch
        assert!(!state.is_loading());
    }

    #[test]
    fn test_resolve_ignored_unless_loading() {
        let mut state: FetchState<u32> = FetchState::Idle;
        state.resolve(Ok(1));
        assert_eq!(state, FetchState::Idle);
    }

    #[test]
    fn test_dismiss_keeps_success() {
        let mut state = FetchState::Success(vec![1, 2]);
        state.dismiss();
        assert_eq!(state.value(), Some(&vec![1, 2]));
    }

    #[test]
    fn test_update_value_only_on_success() {
        let mut state = FetchState::Success(vec![1, 2, 3]);
        state.update_value(|v| v.retain(|n| *n != 2));
        assert_eq!(state.value(), Some(&vec![1, 3]));

        let mut loading: FetchState<Vec<u32>> = FetchState::Loading;
        loading.update_value(|v| v.clear());
        assert!(loading.is_loading());
    }

    #[test]
    fn test_settle_classification() {
        assert_eq!(settle(Ok(1), false), Settled::Done(Ok(1)));
        assert_eq!(settle(Ok(1), true), Settled::Discard);
        assert_eq!(settle::<u32>(Err(AppError::Cancelled), false), Settled::Discard);
        assert_eq!(
            settle::<u32>(Err(AppError::Api { status: 401, detail: "expired".into() }), false),
            Settled::Expired
        );
        assert_eq!(
            settle::<u32>(Err(AppError::Api { status: 500, detail: "boom".into() }), false),
            Settled::Done(Err("boom".to_string()))
        );
        assert_eq!(
            settle::<u32>(Err(AppError::Network("offline".into())), false),
            Settled::Done(Err(AppError::Network(String::new()).user_message()))
        );
    }

    #[test]
    fn test_claim_slot_blocks_second_action() {
        let mut slot = None;
        assert!(claim_slot(&mut slot, 4));
        assert!(!claim_slot(&mut slot, 4));
        assert!(!claim_slot(&mut slot, 9));
        assert_eq!(slot, Some(4));

        slot = None;
        assert!(claim_slot(&mut slot, 9));
    }

    #[test]
    fn test_parallel_fetch_fails_fast() {
        let outcome = futures::executor::block_on(futures::future::try_join(
            async { Ok::<_, AppError>(1) },
            async { Err::<u32, _>(AppError::Api { status: 403, detail: "no".into() }) },
        ));
        assert_eq!(settle(outcome, false), Settled::Done(Err("no".to_string())));
    }

    #[test]
    fn test_unauthorized_response_expires_session() {
        let owner = Owner::new();
        owner.set();

        let store = Arc::new(MemoryTokenStore::default());
        let session = SessionContext::restore(store.clone());
        session.login(&make_token(r#"{"is_admin":false}"#)).unwrap();
        let config = AppConfig::resolve(&ConfigSource::default(), &ConfigSource::default()).unwrap();
        let scope = ViewScope::from_parts(ApiClient::new(&config, session), session);

        let outcome = scope.settle::<u32>(Err(AppError::Api { status: 401, detail: "expired".into() }));
        assert_eq!(outcome, None);
        assert_eq!(store.get_token(), None);
        assert_eq!(session.token_untracked(), None);
        assert!(session.expired.get_untracked());
    }

    #[test]
    fn test_other_errors_keep_session() {
        let owner = Owner::new();
        owner.set();

        let store = Arc::new(MemoryTokenStore::default());
        let session = SessionContext::restore(store.clone());
        session.login(&make_token(r#"{"is_admin":true}"#)).unwrap();
        let config = AppConfig::resolve(&ConfigSource::default(), &ConfigSource::default()).unwrap();
        let scope = ViewScope::from_parts(ApiClient::new(&config, session), session);

        let outcome = scope.settle::<u32>(Err(AppError::Api { status: 403, detail: "no".into() }));
        assert_eq!(outcome, Some(Err("no".to_string())));
        assert!(store.get_token().is_some());
        assert!(!session.expired.get_untracked());
    }
}
