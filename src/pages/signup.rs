//! Signup Page

use gloo_timers::future::TimeoutFuture;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use super::REDIRECT_DELAY_MS;
use crate::api::signup;
use crate::components::Banner;
use crate::forms::{Notice, SignupDraft};
use crate::view_state::ViewScope;

#[component]
pub fn SignupPage() -> impl IntoView {
    let scope = ViewScope::new();
    let navigate = use_navigate();

    let draft = RwSignal::new(SignupDraft::default());
    let notice = RwSignal::new(None::<Notice>);
    let pending = RwSignal::new(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let request = match draft.with_untracked(SignupDraft::to_request) {
            Ok(request) => request,
            Err(e) => {
                notice.set(Some(Notice::Error(e.user_message())));
                return;
            }
        };

        pending.set(true);
        notice.set(None);
        let api = scope.api.clone();
        let after = scope.clone();
        let navigate = navigate.clone();
        scope.spawn(async move { signup(&api, &request).await }, move |result| {
            pending.set(false);
            match result {
                Ok(()) => {
                    log::info!("Account created");
                    draft.set(SignupDraft::default());
                    notice.set(Some(Notice::Success("Signup successful! Please log in.".to_string())));
                    leptos::task::spawn_local(async move {
                        TimeoutFuture::new(REDIRECT_DELAY_MS).await;
                        if after.is_active() {
                            navigate("/login", Default::default());
                        }
                    });
                }
                Err(message) => notice.set(Some(Notice::Error(message))),
            }
        });
    };

    view! {
        <section class="page auth-page">
            <form class="auth-form" on:submit=on_submit>
                <h2>"Sign Up"</h2>
                <Banner notice=notice on_dismiss=Callback::new(move |_: ()| notice.set(None)) />

                <input
                    type="text"
                    placeholder="Enter your name"
                    prop:value=move || draft.with(|d| d.name.clone())
                    on:input=move |ev| draft.update(|d| d.name = event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder="Choose a username"
                    prop:value=move || draft.with(|d| d.username.clone())
                    on:input=move |ev| draft.update(|d| d.username = event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Create a password"
                    prop:value=move || draft.with(|d| d.password.clone())
                    on:input=move |ev| draft.update(|d| d.password = event_target_value(&ev))
                />
                <button type="submit" disabled=move || pending.get()>"Sign Up"</button>

                <p class="auth-switch">
                    "Already have an account? " <A href="/login">"Log in"</A>
                </p>
            </form>
        </section>
    }
}
