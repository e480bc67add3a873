//! Home Page
//!
//! Public list of every task with its download link.

use leptos::prelude::*;

use crate::api::list_tasks;
use crate::components::{Banner, LoadingGrid};
use crate::forms::Notice;
use crate::view_state::{use_fetch, FetchState};

#[component]
pub fn HomePage() -> impl IntoView {
    let state = use_fetch(|api| async move { list_tasks(&api).await });

    let error = Signal::derive(move || state.with(|s| s.error().map(|e| Notice::Error(e.to_string()))));

    view! {
        <section class="page home-page">
            <h2>"Dashboard - Available Tasks"</h2>
            <Banner notice=error on_dismiss=Callback::new(move |_: ()| state.update(FetchState::dismiss)) />

            {move || match state.get() {
                FetchState::Loading => view! { <LoadingGrid count=3 /> }.into_any(),
                FetchState::Success(tasks) if tasks.is_empty() => {
                    view! { <p class="empty-state">"No tasks available."</p> }.into_any()
                }
                FetchState::Success(tasks) => view! {
                    <ul class="task-list">
                        {tasks
                            .into_iter()
                            .map(|task| {
                                let link = task.link();
                                view! {
                                    <li class="task-list-item">
                                        <h4>{task.name}</h4>
                                        <p>{task.description}</p>
                                        <p><strong>"Points: "</strong>{task.points}</p>
                                        {link.map(|href| view! {
                                            <a class="task-link" href=href target="_blank" rel="noopener noreferrer">
                                                "Download App"
                                            </a>
                                        })}
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                }
                .into_any(),
                FetchState::Idle | FetchState::Error(_) => ().into_any(),
            }}
        </section>
    }
}
