//! Submission Endpoints
//!
//! Screenshot upload for users, listing and verification for admins.

use serde::de::IgnoredAny;
use web_sys::{File, FormData};

use super::ApiClient;
use crate::error::AppError;
use crate::models::Submission;

pub fn submissions_for_task_path(task_id: u32) -> String {
    format!("/submissions/task/{}/", task_id)
}

pub fn verify_path(submission_id: u32) -> String {
    format!("/submissions/verify/{}/", submission_id)
}

/// Upload `screenshot` as proof for `task_id`
pub async fn submit_screenshot(api: &ApiClient, task_id: u32, screenshot: &File) -> Result<(), AppError> {
    let form = FormData::new().map_err(|_| AppError::validation("Could not prepare the upload."))?;
    form.append_with_str("task", &task_id.to_string())
        .and_then(|_| form.append_with_blob_and_filename("screenshot", screenshot, &screenshot.name()))
        .map_err(|_| AppError::validation("Could not attach the screenshot."))?;

    api.post_multipart::<IgnoredAny>("/submissions/", form).await?;
    Ok(())
}

pub async fn list_for_task(api: &ApiClient, task_id: u32) -> Result<Vec<Submission>, AppError> {
    api.get(&submissions_for_task_path(task_id)).await
}

/// Approve a submission.
///
/// The server answers with a status message rather than the updated record,
/// so callers flip the flag locally on success.
pub async fn verify(api: &ApiClient, submission_id: u32) -> Result<(), AppError> {
    api.patch::<IgnoredAny>(&verify_path(submission_id)).await?;
    Ok(())
}
