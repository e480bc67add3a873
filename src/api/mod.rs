//! REST API Client
//!
//! One configured client for the rewards backend, organized by domain.
//! Every request carries the session's bearer token when there is one, is
//! bounded by the configured timeout, and is aborted when its owning view
//! goes away.

mod auth;
mod tasks;
mod submissions;

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use futures::channel::oneshot;
use futures::future::{self, select, Either, FutureExt, Shared};
use futures::pin_mut;
use gloo_net::http::{Request, RequestBuilder};
use gloo_timers::future::TimeoutFuture;
use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::{AbortController, FormData};

use crate::config::AppConfig;
use crate::context::SessionContext;
use crate::error::{extract_detail, fallback_detail, network_error, AppError};

// Re-export all public items
pub use auth::*;
pub use tasks::*;
pub use submissions::*;

// ========================
// Cancellation
// ========================

/// Receiving half of a view's cancellation pair
#[derive(Clone)]
pub struct Cancellation {
    flag: Arc<AtomicBool>,
    signal: Shared<oneshot::Receiver<()>>,
}

/// Sending half, fired on view teardown
pub struct CancelHandle {
    flag: Arc<AtomicBool>,
    sender: Mutex<Option<oneshot::Sender<()>>>,
}

pub fn cancellation_pair() -> (CancelHandle, Cancellation) {
    let (sender, receiver) = oneshot::channel();
    let flag = Arc::new(AtomicBool::new(false));
    (
        CancelHandle { flag: flag.clone(), sender: Mutex::new(Some(sender)) },
        Cancellation { flag, signal: receiver.shared() },
    )
}

impl CancelHandle {
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::SeqCst);
        if let Ok(mut sender) = self.sender.lock() {
            if let Some(sender) = sender.take() {
                let _ = sender.send(());
            }
        }
    }
}

impl Cancellation {
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }

    /// Resolves once cancelled (or once the handle is dropped)
    pub async fn wait(&self) {
        let _ = self.signal.clone().await;
    }
}

// ========================
// Client
// ========================

enum Body {
    Empty,
    Json(String),
    Form(FormData),
}

#[derive(Clone)]
pub struct ApiClient {
    base_url: Arc<str>,
    timeout_ms: u32,
    session: SessionContext,
    cancel: Option<Cancellation>,
}

impl ApiClient {
    pub fn new(config: &AppConfig, session: SessionContext) -> Self {
        Self {
            base_url: Arc::from(config.api_base_url.as_str()),
            timeout_ms: config.request_timeout_ms,
            session,
            cancel: None,
        }
    }

    /// Copy of this client whose requests abort when `cancel` fires
    pub fn scoped(&self, cancel: Cancellation) -> Self {
        Self { cancel: Some(cancel), ..self.clone() }
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.as_ref().is_some_and(Cancellation::is_cancelled)
    }

    pub fn url(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        self.send("GET", path, Body::Empty).await
    }

    pub async fn post_json<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, AppError> {
        let json = serde_json::to_string(body).map_err(|e| AppError::InvalidResponse(e.to_string()))?;
        self.send("POST", path, Body::Json(json)).await
    }

    /// PATCH with an empty JSON object
    pub async fn patch<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        self.send("PATCH", path, Body::Json("{}".to_string())).await
    }

    pub async fn post_multipart<T: DeserializeOwned>(&self, path: &str, form: FormData) -> Result<T, AppError> {
        self.send("POST", path, Body::Form(form)).await
    }

    async fn send<T: DeserializeOwned>(&self, method: &'static str, path: &str, body: Body) -> Result<T, AppError> {
        if self.is_cancelled() {
            return Err(AppError::Cancelled);
        }

        let url = self.url(path);
        let controller = AbortController::new()
            .map_err(|_| AppError::Network("could not create abort controller".to_string()))?;
        let signal = controller.signal();

        let mut builder: RequestBuilder = match method {
            "POST" => Request::post(&url),
            "PATCH" => Request::patch(&url),
            _ => Request::get(&url),
        };
        builder = builder.abort_signal(Some(&signal));
        if let Some(value) = bearer_header(self.session.token_untracked().as_deref()) {
            builder = builder.header("Authorization", &value);
        }

        // Multipart bodies get their boundary header from the browser
        let request = match body {
            Body::Empty => builder.build(),
            Body::Json(json) => builder.header("Content-Type", "application/json").body(json),
            Body::Form(form) => builder.body(form),
        }
        .map_err(network_error)?;

        log::debug!("{} {}", method, url);

        let exchange = async move {
            let response = request.send().await?;
            let status = response.status();
            let text = response.text().await?;
            Ok::<_, gloo_net::Error>((status, text))
        };

        let (status, text) = self.bounded(exchange, &controller).await?;
        if !(200..300).contains(&status) {
            log::warn!("{} {} failed with status {}", method, url, status);
        }
        decode_response(status, &text)
    }

    /// Race a request against the timeout and the view's cancellation
    async fn bounded<F, T>(&self, exchange: F, controller: &AbortController) -> Result<T, AppError>
    where
        F: Future<Output = Result<T, gloo_net::Error>>,
    {
        let timeout = TimeoutFuture::new(self.timeout_ms);
        let cancelled = async {
            match &self.cancel {
                Some(cancel) => cancel.wait().await,
                None => future::pending::<()>().await,
            }
        };
        pin_mut!(exchange, timeout, cancelled);

        match select(exchange, select(timeout, cancelled)).await {
            Either::Left((result, _)) => result.map_err(network_error),
            Either::Right((Either::Left(_), _)) => {
                controller.abort();
                Err(AppError::Network(format!("request timed out after {} ms", self.timeout_ms)))
            }
            Either::Right((Either::Right(_), _)) => {
                controller.abort();
                Err(AppError::Cancelled)
            }
        }
    }
}

/// Get the shared API client from context
pub fn use_api() -> ApiClient {
    leptos::prelude::expect_context::<ApiClient>()
}

// ========================
// Response Handling
// ========================

/// `Authorization` value for a session token; public calls go without one
pub fn bearer_header(token: Option<&str>) -> Option<String> {
    token
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| format!("Bearer {}", token))
}

fn join_url(base: &str, path: &str) -> String {
    if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}

/// Parse a 2xx body or turn anything else into `AppError::Api`.
///
/// An empty 2xx body parses as JSON `null`.
pub fn decode_response<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, AppError> {
    if !(200..300).contains(&status) {
        let detail = extract_detail(body).unwrap_or_else(|| fallback_detail(status));
        return Err(AppError::Api { status, detail });
    }
    let body = if body.trim().is_empty() { "null" } else { body };
    serde_json::from_str(body).map_err(|e| AppError::InvalidResponse(e.to_string()))
}
