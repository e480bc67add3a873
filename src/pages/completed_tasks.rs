//! Completed Tasks Page

use leptos::prelude::*;

use crate::api::completed_tasks;
use crate::components::LoadingGrid;
use crate::view_state::{use_fetch, FetchState};

#[component]
pub fn CompletedTasksPage() -> impl IntoView {
    let state = use_fetch(|api| async move { completed_tasks(&api).await });

    view! {
        <section class="page completed-tasks">
            <h2>"🎯 Completed Tasks"</h2>
            {move || match state.get() {
                FetchState::Idle => ().into_any(),
                FetchState::Loading => view! { <LoadingGrid count=3 /> }.into_any(),
                FetchState::Error(message) => view! { <p class="error-text">{message}</p> }.into_any(),
                FetchState::Success(tasks) if tasks.is_empty() => {
                    view! { <p class="empty-state">"No completed tasks yet."</p> }.into_any()
                }
                FetchState::Success(tasks) => view! {
                    <div class="task-grid">
                        {tasks
                            .into_iter()
                            .map(|task| {
                                let link = task.link();
                                view! {
                                    <div class="task-card">
                                        <h3>{task.name}</h3>
                                        <p>{task.description}</p>
                                        <p class="task-points">"⭐ Points: "{task.points}</p>
                                        {link.map(|href| view! {
                                            <a class="task-link" href=href target="_blank" rel="noopener noreferrer">
                                                "View App"
                                            </a>
                                        })}
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                }
                .into_any(),
            }}
        </section>
    }
}
