//! Profile Page
//!
//! Account details and completed tasks, fetched in parallel.

use futures::future::try_join;
use leptos::prelude::*;

use crate::api::{completed_tasks, user_profile};
use crate::view_state::{use_fetch, FetchState};

#[component]
pub fn ProfilePage() -> impl IntoView {
    // Both must succeed; the first failure wins
    let state = use_fetch(|api| async move { try_join(user_profile(&api), completed_tasks(&api)).await });

    view! {
        <section class="page profile-page">
            {move || match state.get() {
                FetchState::Idle => ().into_any(),
                FetchState::Loading => view! { <p class="loading-text">"Loading profile..."</p> }.into_any(),
                FetchState::Error(message) => view! { <p class="error-text">{message}</p> }.into_any(),
                FetchState::Success((profile, completed)) => {
                    let count = completed.len();
                    view! {
                        <div class="profile-card">
                            <h2>"User Profile"</h2>
                            <div class="profile-fields">
                                <p><span class="field-label">"Username: "</span>{placeholder(profile.username)}</p>
                                <p><span class="field-label">"Name: "</span>{placeholder(profile.name)}</p>
                                <p><span class="field-label">"Total Points Earned: "</span>{profile.total_points}</p>
                                <p><span class="field-label">"Total Tasks Completed: "</span>{count}</p>
                            </div>

                            <h3>"Completed Tasks"</h3>
                            {if completed.is_empty() {
                                view! { <p class="empty-state">"No completed tasks yet."</p> }.into_any()
                            } else {
                                view! {
                                    <ul class="completed-list">
                                        {completed
                                            .into_iter()
                                            .map(|task| view! {
                                                <li>
                                                    <p class="task-name">{task.name}</p>
                                                    <p class="task-points">"Points: "{task.points}</p>
                                                </li>
                                            })
                                            .collect_view()}
                                    </ul>
                                }
                                .into_any()
                            }}
                        </div>
                    }
                    .into_any()
                }
            }}
        </section>
    }
}

fn placeholder(value: String) -> String {
    if value.trim().is_empty() { "Not set".to_string() } else { value }
}
