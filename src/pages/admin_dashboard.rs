//! Admin Dashboard Page
//!
//! Task catalog for admins; each card opens that task's submissions.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::api::list_tasks;
use crate::components::{Banner, LoadingGrid};
use crate::forms::Notice;
use crate::view_state::{use_fetch, FetchState};

const PREVIEW_CHARS: usize = 50;

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let navigate = use_navigate();
    let state = use_fetch(|api| async move { list_tasks(&api).await });

    let error = Signal::derive(move || state.with(|s| s.error().map(|e| Notice::Error(e.to_string()))));

    view! {
        <section class="page admin-dashboard">
            <h2>"⚡ User Submissions"</h2>
            <Banner notice=error on_dismiss=Callback::new(move |_: ()| state.update(FetchState::dismiss)) />

            <h3>"📌 Task List"</h3>
            {move || match state.get() {
                FetchState::Loading => view! { <LoadingGrid count=3 /> }.into_any(),
                FetchState::Success(tasks) if tasks.is_empty() => {
                    view! { <p class="empty-state">"No tasks available."</p> }.into_any()
                }
                FetchState::Success(tasks) => {
                    let navigate = navigate.clone();
                    view! {
                        <div class="task-grid">
                            {tasks
                                .into_iter()
                                .map(|task| {
                                    let navigate = navigate.clone();
                                    let target = format!("/tasks/{}", task.id);
                                    let preview = task.preview(PREVIEW_CHARS);
                                    view! {
                                        <div class="task-card clickable" on:click=move |_| navigate(&target, Default::default())>
                                            <h4>{task.name}</h4>
                                            <p class="task-preview">{preview}</p>
                                            <p class="task-points">"⭐ Points: "{task.points}</p>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                    .into_any()
                }
                FetchState::Idle | FetchState::Error(_) => ().into_any(),
            }}
        </section>
    }
}
