//! Add Task Page
//!
//! Admin form for a new catalog entry.

use gloo_timers::future::TimeoutFuture;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use super::REDIRECT_DELAY_MS;
use crate::api::create_task;
use crate::components::Banner;
use crate::forms::{Notice, TaskDraft};
use crate::view_state::ViewScope;

#[component]
pub fn AddTaskPage() -> impl IntoView {
    let scope = ViewScope::new();
    let navigate = use_navigate();

    let draft = RwSignal::new(TaskDraft::default());
    let notice = RwSignal::new(None::<Notice>);
    let pending = RwSignal::new(false);

    let submit_navigate = navigate.clone();
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let new_task = match draft.with_untracked(TaskDraft::to_new_task) {
            Ok(task) => task,
            Err(e) => {
                notice.set(Some(Notice::Error(e.user_message())));
                return;
            }
        };

        pending.set(true);
        notice.set(None);
        let api = scope.api.clone();
        let after = scope.clone();
        let navigate = submit_navigate.clone();
        scope.spawn(async move { create_task(&api, &new_task).await }, move |result| {
            pending.set(false);
            match result {
                Ok(task) => {
                    log::info!("Created task {}", task.id);
                    draft.set(TaskDraft::default());
                    notice.set(Some(Notice::Success("✅ Task added successfully!".to_string())));
                    spawn_local(async move {
                        TimeoutFuture::new(REDIRECT_DELAY_MS).await;
                        if after.is_active() {
                            navigate("/dashboard", Default::default());
                        }
                    });
                }
                Err(message) => notice.set(Some(Notice::Error(message))),
            }
        });
    };

    view! {
        <section class="page add-task-page">
            <div class="form-card">
                <h2>"Add New Task"</h2>
                <Banner notice=notice on_dismiss=Callback::new(move |_: ()| notice.set(None)) />

                <form class="task-form" on:submit=on_submit>
                    <label>
                        "Task Name"
                        <input
                            type="text"
                            prop:value=move || draft.with(|d| d.name.clone())
                            on:input=move |ev| draft.update(|d| d.name = event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Description"
                        <textarea
                            prop:value=move || draft.with(|d| d.description.clone())
                            on:input=move |ev| draft.update(|d| d.description = event_target_value(&ev))
                        ></textarea>
                    </label>
                    <label>
                        "Points"
                        <input
                            type="number"
                            min="0"
                            prop:value=move || draft.with(|d| d.points.clone())
                            on:input=move |ev| draft.update(|d| d.points = event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "App Link (optional)"
                        <input
                            type="url"
                            prop:value=move || draft.with(|d| d.app_link.clone())
                            on:input=move |ev| draft.update(|d| d.app_link = event_target_value(&ev))
                        />
                    </label>
                    <button type="submit" disabled=move || pending.get()>"➕ Add Task"</button>
                </form>

                <button class="back-button" on:click=move |_| navigate("/dashboard", Default::default())>
                    "← Back to Dashboard"
                </button>
            </div>
        </section>
    }
}
