//! Form Drafts
//!
//! Field values for the login, signup and add-task forms and the light
//! client-side checks run before posting. The server validates the rest.

use crate::error::AppError;
use crate::models::{LoginRequest, NewTask, SignupRequest};

/// Banner text shown after a form action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
}

impl Notice {
    pub fn text(&self) -> &str {
        match self {
            Notice::Success(text) | Notice::Error(text) => text,
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            Notice::Success(_) => "notice notice-success",
            Notice::Error(_) => "notice notice-error",
        }
    }
}

/// Fail on the first blank field, naming it
pub fn require_fields(fields: &[(&str, &str)]) -> Result<(), AppError> {
    match fields.iter().find(|(_, value)| value.trim().is_empty()) {
        Some((label, _)) => Err(AppError::validation(format!("{} is required.", label))),
        None => Ok(()),
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginDraft {
    pub username: String,
    pub password: String,
}

impl LoginDraft {
    pub fn to_request(&self) -> Result<LoginRequest, AppError> {
        require_fields(&[("Username", &self.username), ("Password", &self.password)])?;
        Ok(LoginRequest {
            username: self.username.trim().to_string(),
            password: self.password.clone(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignupDraft {
    pub name: String,
    pub username: String,
    pub password: String,
}

impl SignupDraft {
    pub fn to_request(&self) -> Result<SignupRequest, AppError> {
        require_fields(&[
            ("Name", &self.name),
            ("Username", &self.username),
            ("Password", &self.password),
        ])?;
        Ok(SignupRequest {
            name: self.name.trim().to_string(),
            username: self.username.trim().to_string(),
            password: self.password.clone(),
        })
    }
}

/// Add-task form; `points` stays text until submit
#[derive(Debug, Clone, PartialEq)]
pub struct TaskDraft {
    pub name: String,
    pub description: String,
    pub points: String,
    pub app_link: String,
}

impl Default for TaskDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            points: "0".to_string(),
            app_link: String::new(),
        }
    }
}

impl TaskDraft {
    pub fn to_new_task(&self) -> Result<NewTask, AppError> {
        require_fields(&[
            ("Task name", &self.name),
            ("Description", &self.description),
            ("Points", &self.points),
        ])?;

        let points = self
            .points
            .trim()
            .parse::<i64>()
            .ok()
            .filter(|points| *points >= 0)
            .ok_or_else(|| AppError::validation("Points must be a whole number of zero or more."))?;

        let link = self.app_link.trim();
        let app_link = if link.is_empty() {
            None
        } else if link.starts_with("http://") || link.starts_with("https://") {
            Some(link.to_string())
        } else {
            return Err(AppError::validation("App link must start with http:// or https://."));
        };

        Ok(NewTask {
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            points,
            app_link,
        })
    }
}
