//! Image Preview Component
//!
//! Full-screen overlay for a screenshot; any click closes it.

use leptos::prelude::*;

#[component]
pub fn ImagePreview(
    #[prop(into)] url: Signal<Option<String>>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    move || {
        url.get().map(|src| {
            view! {
                <div class="image-preview-overlay" on:click=move |_| on_close.run(())>
                    <img class="image-preview" src=src alt="Screenshot preview" />
                </div>
            }
        })
    }
}
