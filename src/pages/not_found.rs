use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <section class="page not-found">
            <h2>"Page not found"</h2>
            <A href="/">"Go home"</A>
        </section>
    }
}
