//! Submit Tasks Page
//!
//! The caller's pending tasks as expandable cards. Each card takes one staged
//! screenshot; a successful upload removes the card locally.

use leptos::prelude::*;
use reactive_stores::Store;
use web_sys::File;

use crate::api::{pending_tasks, submit_screenshot};
use crate::components::{Banner, ScreenshotDrop};
use crate::forms::Notice;
use crate::models::Task;
use crate::staging::ScreenshotStage;
use crate::store::{store_expand, store_remove_task, PendingBoard, PendingBoardStoreFields};
use crate::view_state::{claim_slot, FetchState, ViewScope};

pub fn submitted_message(task_id: u32) -> String {
    format!("Submission for Task {} uploaded successfully!", task_id)
}

#[component]
pub fn SubmitTasksPage() -> impl IntoView {
    let scope = ViewScope::new();
    let board = Store::new(PendingBoard::default());
    let status = RwSignal::new(FetchState::<()>::Idle);
    let notice = RwSignal::new(None::<Notice>);
    // `File` is not Send
    let stage = RwSignal::new_local(ScreenshotStage::<File>::default());
    let submitting = RwSignal::new(None::<u32>);

    status.update(|s| {
        s.begin();
    });
    let api = scope.api.clone();
    scope.spawn(async move { pending_tasks(&api).await }, move |result| {
        let result = result.map(|tasks| {
            log::debug!("Loaded {} pending tasks", tasks.len());
            board.tasks().set(tasks);
        });
        status.try_update(|s| s.resolve(result));
    });

    let on_stage = Callback::new(move |(task_id, file): (u32, File)| {
        let name = file.name();
        let content_type = file.type_();
        match stage.try_update(|s| s.stage(task_id, &name, &content_type, file)) {
            Some(Ok(())) => {
                notice.set(None);
                store_expand(&board, task_id);
            }
            Some(Err(e)) => notice.set(Some(Notice::Error(e.user_message()))),
            None => {}
        }
    });

    let on_submit = Callback::new(move |task_id: u32| {
        // No staged file: validation error, no request
        let staged = match stage.with_untracked(|s| s.staged(task_id)) {
            Ok(staged) => staged,
            Err(e) => {
                notice.set(Some(Notice::Error(e.user_message())));
                return;
            }
        };
        if !submitting.try_update(|slot| claim_slot(slot, task_id)).unwrap_or(false) {
            return;
        }

        let api = scope.api.clone();
        scope.spawn(async move { submit_screenshot(&api, task_id, &staged.file).await }, move |result| {
            submitting.set(None);
            match result {
                Ok(()) => {
                    log::info!("Submitted screenshot for task {}", task_id);
                    notice.set(Some(Notice::Success(submitted_message(task_id))));
                    stage.update(|s| s.clear(task_id));
                    store_expand(&board, task_id);
                    store_remove_task(&board, task_id);
                }
                Err(message) => notice.set(Some(Notice::Error(message))),
            }
        });
    });

    let load_error = Signal::derive(move || status.with(|s| s.error().map(|e| Notice::Error(e.to_string()))));

    view! {
        <section class="page submit-tasks">
            <h2>"Pending Tasks"</h2>
            <Banner notice=load_error on_dismiss=Callback::new(move |_: ()| status.update(FetchState::dismiss)) />
            <Banner notice=notice on_dismiss=Callback::new(move |_: ()| notice.set(None)) />

            {move || {
                if status.with(FetchState::is_loading) {
                    return view! { <p class="loading-text">"Loading pending tasks..."</p> }.into_any();
                }
                if !status.with(|s| s.value().is_some()) {
                    return ().into_any();
                }
                if board.tasks().with(Vec::is_empty) {
                    return view! { <p class="empty-state">"No pending tasks available."</p> }.into_any();
                }
                view! {
                    <div class="pending-list">
                        <For
                            each=move || board.tasks().get()
                            key=|task| task.id
                            children=move |task| view! {
                                <PendingCard
                                    task=task
                                    board=board
                                    stage=stage
                                    submitting=submitting
                                    on_stage=on_stage
                                    on_submit=on_submit
                                />
                            }
                        />
                    </div>
                }
                .into_any()
            }}
        </section>
    }
}

#[component]
fn PendingCard(
    task: Task,
    board: Store<PendingBoard>,
    stage: RwSignal<ScreenshotStage<File>, LocalStorage>,
    submitting: RwSignal<Option<u32>>,
    on_stage: Callback<(u32, File)>,
    on_submit: Callback<u32>,
) -> impl IntoView {
    let id = task.id;
    let is_expanded = move || board.expanded().get() == Some(id);
    let staged_name = Signal::derive(move || stage.with(|s| s.staged_name(id)));
    let link = task.link();
    let description = task.description.clone();

    view! {
        <div class="pending-card" on:click=move |_| store_expand(&board, id)>
            <div class="pending-header">
                <div class="pending-title">
                    <div class="task-avatar">{task.initial()}</div>
                    <div>
                        <h3>{task.name.clone()}</h3>
                        <p class="detail-hint">"View in Detail"</p>
                    </div>
                </div>
                <span class="points-badge">{format!("{} POINTS", task.points)}</span>
            </div>

            <Show when=is_expanded>
                <div class="pending-body">
                    <p class="task-description">{description.clone()}</p>
                    {link.clone().map(|href| view! {
                        <a
                            class="task-link"
                            href=href
                            target="_blank"
                            rel="noopener noreferrer"
                            on:click=|ev| ev.stop_propagation()
                        >
                            "Visit App"
                        </a>
                    })}

                    <ScreenshotDrop
                        staged_name=staged_name
                        on_file=Callback::new(move |file: File| on_stage.run((id, file)))
                    />

                    <button
                        class="submit-button"
                        disabled=move || submitting.with(Option::is_some)
                        on:click=move |ev| {
                            ev.stop_propagation();
                            on_submit.run(id);
                        }
                    >
                        {move || if submitting.get() == Some(id) { "Uploading..." } else { "Submit Screenshot" }}
                    </button>
                </div>
            </Show>
        </div>
    }
}
