//! Task Endpoints
//!
//! The task catalog plus the caller's pending and completed views of it.

use super::ApiClient;
use crate::error::AppError;
use crate::models::{NewTask, Task};

pub async fn list_tasks(api: &ApiClient) -> Result<Vec<Task>, AppError> {
    api.get("/app-tasks/").await
}

/// Admin only
pub async fn create_task(api: &ApiClient, task: &NewTask) -> Result<Task, AppError> {
    api.post_json("/app-tasks/", task).await
}

/// Tasks the caller has not submitted proof for yet
pub async fn pending_tasks(api: &ApiClient) -> Result<Vec<Task>, AppError> {
    api.get("/pending-tasks/").await
}

pub async fn completed_tasks(api: &ApiClient) -> Result<Vec<Task>, AppError> {
    api.get("/completed-tasks/").await
}
