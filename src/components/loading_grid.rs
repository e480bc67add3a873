//! Loading Grid Component

use leptos::prelude::*;

/// Placeholder cards shown while a list loads
#[component]
pub fn LoadingGrid(#[prop(default = 6)] count: usize) -> impl IntoView {
    view! {
        <div class="task-grid loading">
            {(0..count)
                .map(|_| {
                    view! {
                        <div class="task-card skeleton">
                            <div class="skeleton-line wide"></div>
                            <div class="skeleton-line"></div>
                            <div class="skeleton-line short"></div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
