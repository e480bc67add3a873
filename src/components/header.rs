//! Header Component
//!
//! Greets the signed-in user by name ("Hello Ana"). Falls back to
//! "Hello Guest" while the profile loads, without a session, or when the
//! lookup fails.

use leptos::prelude::*;

use crate::api::user_profile;
use crate::context::use_session;
use crate::view_state::ViewScope;

pub fn greeting(name: Option<&str>) -> String {
    format!("Hello {}", name.unwrap_or("Guest"))
}

#[component]
pub fn Header() -> impl IntoView {
    let session = use_session();
    let scope = ViewScope::new();
    let (display_name, set_display_name) = signal::<Option<String>>(None);

    // Refetch whenever the session changes (login, logout, expiry)
    Effect::new(move |_| {
        let token = session.token.get();
        set_display_name.set(None);
        if token.is_none() {
            return;
        }

        let api = scope.api.clone();
        scope.spawn(async move { user_profile(&api).await }, move |result| {
            // A later login may have replaced the token meanwhile
            if session.token.get_untracked() != token {
                return;
            }
            match result {
                Ok(profile) if !profile.name.trim().is_empty() => set_display_name.set(Some(profile.name)),
                Ok(_) => log::warn!("Profile response has no display name"),
                Err(message) => log::warn!("Failed to fetch user profile: {}", message),
            }
        });
    });

    view! {
        <header class="app-header">
            <h1>
                {move || display_name.with(|name| greeting(name.as_deref()))}
            </h1>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeting() {
        assert_eq!(greeting(Some("Ana")), "Hello Ana");
        assert_eq!(greeting(None), "Hello Guest");
    }
}
