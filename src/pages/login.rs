//! Login Page
//!
//! Exchanges credentials for a token and hands it to the session.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::api::login;
use crate::components::Banner;
use crate::context::use_session;
use crate::error::{fallback_detail, AppError};
use crate::forms::{LoginDraft, Notice};
use crate::guard::Role;
use crate::view_state::ViewScope;

/// Where a fresh session lands
pub fn landing_path(role: Role) -> &'static str {
    match role {
        Role::Admin => "/dashboard",
        Role::User | Role::Anonymous => "/",
    }
}

/// Inline message for a failed login.
///
/// A 401 here means bad credentials, not an expired session.
pub fn login_failure_message(error: &AppError) -> String {
    match error {
        AppError::Api { status: status @ (400 | 401), detail } if *detail == fallback_detail(*status) => {
            "Invalid username or password.".to_string()
        }
        other => other.user_message(),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let scope = ViewScope::new();
    let session = use_session();
    let navigate = use_navigate();

    let draft = RwSignal::new(LoginDraft::default());
    let notice = RwSignal::new(None::<Notice>);
    let pending = RwSignal::new(false);

    // Landing here after a 401 redirect acknowledges it
    session.clear_expired();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let request = match draft.with_untracked(LoginDraft::to_request) {
            Ok(request) => request,
            Err(e) => {
                notice.set(Some(Notice::Error(e.user_message())));
                return;
            }
        };

        pending.set(true);
        notice.set(None);
        let scope = scope.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            let outcome = login(&scope.api, &request).await;
            if !scope.is_active() {
                return;
            }
            pending.set(false);
            match outcome.and_then(|response| session.login(&response.tokens.access)) {
                Ok(role) => navigate(landing_path(role), Default::default()),
                Err(AppError::Cancelled) => {}
                Err(e) => {
                    log::warn!("Login failed: {}", e);
                    notice.set(Some(Notice::Error(login_failure_message(&e))));
                }
            }
        });
    };

    view! {
        <section class="page auth-page">
            <form class="auth-form" on:submit=on_submit>
                <h2>"Login"</h2>
                <Banner notice=notice on_dismiss=Callback::new(move |_: ()| notice.set(None)) />

                <input
                    type="text"
                    placeholder="Username"
                    prop:value=move || draft.with(|d| d.username.clone())
                    on:input=move |ev| draft.update(|d| d.username = event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Password"
                    prop:value=move || draft.with(|d| d.password.clone())
                    on:input=move |ev| draft.update(|d| d.password = event_target_value(&ev))
                />
                <button type="submit" disabled=move || pending.get()>
                    {move || if pending.get() { "Logging in..." } else { "Login" }}
                </button>

                <p class="auth-switch">
                    "Don't have an account? " <A href="/signup">"Sign up"</A>
                </p>
            </form>
        </section>
    }
}
