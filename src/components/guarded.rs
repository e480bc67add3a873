//! Route Guard Component
//!
//! Decides before rendering whether the current session may see a route.

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::context::use_session;
use crate::guard::{AccessDecision, RouteAccess};

/// Render `children` only when the session satisfies `access`.
///
/// Without a session the user is sent to `/login`; a signed-in non-admin on
/// an admin route gets an access-denied notice and no request is made.
#[component]
pub fn Guarded(access: RouteAccess, children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let decision = Memo::new(move |_| access.check(session.role.get()));

    move || match decision.get() {
        AccessDecision::Allow => children().into_any(),
        AccessDecision::RedirectToLogin => view! { <Redirect path="/login" /> }.into_any(),
        AccessDecision::Forbidden => view! {
            <div class="access-denied">
                <h2>"Access denied"</h2>
                <p>"This page is only available to administrators."</p>
            </div>
        }
        .into_any(),
    }
}
