//! Notice Banner Component
//!
//! Dismissible success/error line used by every page.

use leptos::prelude::*;

use crate::forms::Notice;

/// Banner for an optional notice; hidden when `notice` is `None`
#[component]
pub fn Banner(
    #[prop(into)] notice: Signal<Option<Notice>>,
    #[prop(into)] on_dismiss: Callback<()>,
) -> impl IntoView {
    move || {
        notice.get().map(|notice| {
            view! {
                <div class=notice.class() role="status">
                    <span class="notice-text">{notice.text().to_string()}</span>
                    <button
                        class="notice-dismiss"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            on_dismiss.run(());
                        }
                    >
                        "×"
                    </button>
                </div>
            }
        })
    }
}
