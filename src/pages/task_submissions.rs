//! Task Submissions Page
//!
//! Admin review table for one task: screenshot previews and verification.

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};
use reactive_stores::Store;

use crate::api::{list_for_task, verify};
use crate::components::{Banner, ImagePreview};
use crate::forms::Notice;
use crate::store::{store_mark_approved, ReviewBoard, ReviewBoardStoreFields};
use crate::view_state::{claim_slot, FetchState, ViewScope};

#[component]
pub fn TaskSubmissionsPage() -> impl IntoView {
    let params = use_params_map();
    let task_id = Memo::new(move |_| params.with(|p| p.get("task_id").and_then(|id| id.parse::<u32>().ok())));

    // Remount the table when the id changes so each task loads once
    move || match task_id.get() {
        Some(id) => view! { <ReviewTable task_id=id /> }.into_any(),
        None => view! { <p class="error-text">"Invalid task id."</p> }.into_any(),
    }
}

#[component]
fn ReviewTable(task_id: u32) -> impl IntoView {
    let scope = ViewScope::new();
    let navigate = use_navigate();
    let board = Store::new(ReviewBoard::default());
    let status = RwSignal::new(FetchState::<()>::Idle);
    let notice = RwSignal::new(None::<Notice>);
    let preview = RwSignal::new(None::<String>);
    let verifying = RwSignal::new(None::<u32>);

    status.update(|s| {
        s.begin();
    });
    let api = scope.api.clone();
    scope.spawn(async move { list_for_task(&api, task_id).await }, move |result| {
        let result = result.map(|submissions| {
            log::debug!("Loaded {} submissions for task {}", submissions.len(), task_id);
            board.submissions().set(submissions);
        });
        status.try_update(|s| s.resolve(result));
    });

    let on_verify = Callback::new(move |submission_id: u32| {
        // One verification at a time across the whole table
        if !verifying.try_update(|slot| claim_slot(slot, submission_id)).unwrap_or(false) {
            return;
        }
        let api = scope.api.clone();
        scope.spawn(async move { verify(&api, submission_id).await }, move |result| {
            verifying.set(None);
            match result {
                Ok(()) => {
                    store_mark_approved(&board, submission_id);
                    notice.set(Some(Notice::Success("✅ Submission verified successfully!".to_string())));
                }
                Err(message) => notice.set(Some(Notice::Error(message))),
            }
        });
    });

    let load_error = Signal::derive(move || status.with(|s| s.error().map(|e| Notice::Error(e.to_string()))));

    view! {
        <section class="page task-submissions">
            <h2>{format!("📄 Task Submissions (Task {})", task_id)}</h2>

            <Banner notice=load_error on_dismiss=Callback::new(move |_: ()| status.update(FetchState::dismiss)) />
            <Banner notice=notice on_dismiss=Callback::new(move |_: ()| notice.set(None)) />

            {move || {
                if status.with(FetchState::is_loading) {
                    return view! { <p class="loading-text">"Loading submissions..."</p> }.into_any();
                }
                if !status.with(|s| s.value().is_some()) {
                    return ().into_any();
                }
                if board.submissions().with(Vec::is_empty) {
                    return view! { <p class="empty-state">"No submissions available for this task."</p> }.into_any();
                }
                view! {
                    <table class="review-table">
                        <thead>
                            <tr>
                                <th>"👤 Username"</th>
                                <th>"✅ Approved"</th>
                                <th>"📸 Screenshot"</th>
                                <th>"🔍 Action"</th>
                            </tr>
                        </thead>
                        <tbody>
                            // Keyed on the flag too, so a verified row re-renders
                            <For
                                each=move || board.submissions().get()
                                key=|sub| (sub.id, sub.approved)
                                children=move |sub| {
                                    let id = sub.id;
                                    let approved = sub.approved;
                                    let username = sub.display_username().to_string();
                                    view! {
                                        <tr>
                                            <td>{username}</td>
                                            <td class=if approved { "approved yes" } else { "approved no" }>
                                                {if approved { "✅ Yes" } else { "❌ No" }}
                                            </td>
                                            <td>
                                                {match sub.screenshot_url.clone() {
                                                    Some(url) => {
                                                        let full = url.clone();
                                                        view! {
                                                            <img
                                                                class="screenshot-thumb"
                                                                src=url
                                                                alt="Submission Screenshot"
                                                                on:click=move |_| preview.set(Some(full.clone()))
                                                            />
                                                        }
                                                        .into_any()
                                                    }
                                                    None => view! { <span class="no-screenshot">"❌"</span> }.into_any(),
                                                }}
                                            </td>
                                            <td>
                                                <Show when=move || !approved>
                                                    <button
                                                        class="verify-button"
                                                        disabled=move || verifying.with(Option::is_some)
                                                        on:click=move |_| on_verify.run(id)
                                                    >
                                                        "✅ Verify"
                                                    </button>
                                                </Show>
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                }
                .into_any()
            }}

            <button class="back-button" on:click=move |_| navigate("/dashboard", Default::default())>
                "Back to Dashboard"
            </button>

            <ImagePreview url=preview on_close=Callback::new(move |_: ()| preview.set(None)) />
        </section>
    }
}
