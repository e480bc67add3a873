//! Page Stores
//!
//! Uses Leptos reactive_stores for fine-grained reactivity on the two lists
//! that change after loading: the pending-task board and the review table.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Submission, Task};

/// Pending tasks on the submit page
#[derive(Clone, Debug, Default, Store)]
pub struct PendingBoard {
    pub tasks: Vec<Task>,
    /// At most one task card is open
    pub expanded: Option<u32>,
}

/// Submissions for one task on the review page
#[derive(Clone, Debug, Default, Store)]
pub struct ReviewBoard {
    pub submissions: Vec<Submission>,
}

pub type PendingStore = Store<PendingBoard>;
pub type ReviewStore = Store<ReviewBoard>;

// ========================
// List Helpers
// ========================

/// Drop a task; true if it was present
pub fn remove_task(tasks: &mut Vec<Task>, task_id: u32) -> bool {
    let before = tasks.len();
    tasks.retain(|task| task.id != task_id);
    tasks.len() != before
}

/// Flip one submission to approved; never the other way
pub fn mark_approved(submissions: &mut [Submission], submission_id: u32) -> bool {
    match submissions.iter_mut().find(|sub| sub.id == submission_id) {
        Some(sub) if !sub.approved => {
            sub.approved = true;
            true
        }
        _ => false,
    }
}

// ========================
// Store Helper Functions
// ========================

/// Remove a submitted task from the pending board (local only)
pub fn store_remove_task(store: &PendingStore, task_id: u32) -> bool {
    remove_task(&mut store.tasks().write(), task_id)
}

pub fn store_expand(store: &PendingStore, task_id: u32) {
    if store.expanded().get_untracked() != Some(task_id) {
        store.expanded().set(Some(task_id));
    }
}

/// Mark a verified submission in the review table
pub fn store_mark_approved(store: &ReviewStore, submission_id: u32) -> bool {
    mark_approved(&mut store.submissions().write(), submission_id)
}
