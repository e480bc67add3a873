//! Frontend Models
//!
//! Data structures matching the rewards API payloads.
//! Fields the views can live without default instead of failing the whole response.

use serde::{Deserialize, Serialize};

/// Task data structure (matches backend `AppTask`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: u32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub points: i64,
    #[serde(default)]
    pub app_link: Option<String>,
}

impl Task {
    /// First character of the name, used as a card avatar
    pub fn initial(&self) -> String {
        self.name.chars().next().map(String::from).unwrap_or_else(|| "?".to_string())
    }

    /// Description preview for task cards
    pub fn preview(&self, max_chars: usize) -> String {
        let head: String = self.description.chars().take(max_chars).collect();
        format!("{head}...")
    }

    /// App link, if it is non-blank
    pub fn link(&self) -> Option<String> {
        self.app_link.as_ref().map(|link| link.trim()).filter(|link| !link.is_empty()).map(String::from)
    }
}

/// Submitting user as embedded in a submission
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubmissionUser {
    #[serde(default)]
    pub id: u32,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub points: i64,
    #[serde(default)]
    pub is_admin: bool,
}

/// Submission data structure (matches backend `SubmissionSerializer`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    pub id: u32,
    #[serde(default)]
    pub task: u32,
    #[serde(default)]
    pub task_name: Option<String>,
    #[serde(default)]
    pub user: SubmissionUser,
    #[serde(default)]
    pub screenshot: Option<String>,
    #[serde(default)]
    pub screenshot_url: Option<String>,
    #[serde(default)]
    pub approved: bool,
    #[serde(default)]
    pub submitted_at: Option<String>,
}

impl Submission {
    /// Username to show, with a placeholder for partial payloads
    pub fn display_username(&self) -> &str {
        if self.user.username.is_empty() { "Unknown user" } else { &self.user.username }
    }
}

/// Aggregate shown on the profile page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub total_points: i64,
}

/// Access/refresh pair issued at login
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TokenPair {
    pub access: String,
    #[serde(default)]
    pub refresh: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoginResponse {
    pub tokens: TokenPair,
    #[serde(default)]
    pub message: Option<String>,
}

// ========================
// Request Bodies
// ========================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignupRequest {
    pub name: String,
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewTask {
    pub name: String,
    pub description: String,
    pub points: i64,
    pub app_link: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submission_tolerates_partial_payload() {
        let raw = r#"{"id": 12, "task": 5, "approved": false}"#;
        let sub: Submission = serde_json::from_str(raw).unwrap();
        assert_eq!(sub.id, 12);
        assert_eq!(sub.display_username(), "Unknown user");
        assert!(sub.screenshot_url.is_none());
    }

    #[test]
    fn test_submission_full_payload() {
        let raw = r#"{
            "id": 12, "task": 5, "task_name": "Install App",
            "user": {"id": 3, "username": "ana", "name": "Ana", "points": 40, "is_admin": false},
            "screenshot": "/media/submissions/shot.png",
            "screenshot_url": "https://example.test/media/submissions/shot.png",
            "approved": true, "submitted_at": "2025-02-01T10:00:00Z"
        }"#;
        let sub: Submission = serde_json::from_str(raw).unwrap();
        assert_eq!(sub.display_username(), "ana");
        assert!(sub.approved);
    }

    #[test]
    fn test_task_preview_counts_chars() {
        let task = Task {
            id: 1,
            name: "Émoji app".to_string(),
            description: "ñ".repeat(60),
            points: 3,
            app_link: None,
        };
        assert_eq!(task.preview(50).chars().count(), 53);
        assert_eq!(task.initial(), "É");
    }

    #[test]
    fn test_negative_points_do_not_sink_the_list() {
        let tasks: Vec<Task> = crate::api::decode_response(
            200,
            r#"[{"id": 1, "points": 10}, {"id": 2, "points": -5}]"#,
        )
        .unwrap();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[1].points, -5);
    }

    #[test]
    fn test_task_blank_link_is_none() {
        let raw = r#"{"id": 1, "name": "A", "description": "d", "points": 1, "app_link": "  "}"#;
        let task: Task = serde_json::from_str(raw).unwrap();
        assert_eq!(task.link(), None);
    }

    #[test]
    fn test_login_response_reads_access_token() {
        let raw = r#"{"message": "Login successful", "tokens": {"refresh": "r", "access": "a"}, "user": {}}"#;
        let resp: LoginResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(resp.tokens.access, "a");
    }
}
