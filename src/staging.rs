//! Screenshot Staging
//!
//! Holds at most one staged screenshot per task until it is submitted.
//! Generic over the file handle so the rules run without a browser.

use std::collections::HashMap;

use leptos_filedrop::AcceptList;

use crate::error::AppError;

pub const IMAGE_TYPES: AcceptList = AcceptList(&["image/png", "image/jpeg", "image/gif", "image/webp"]);

#[derive(Debug, Clone, PartialEq)]
pub struct StagedFile<F> {
    pub name: String,
    pub content_type: String,
    pub file: F,
}

#[derive(Debug, Clone)]
pub struct ScreenshotStage<F> {
    staged: HashMap<u32, StagedFile<F>>,
}

impl<F> Default for ScreenshotStage<F> {
    fn default() -> Self {
        Self { staged: HashMap::new() }
    }
}

impl<F: Clone> ScreenshotStage<F> {
    /// Stage `file` for `task_id`, replacing anything staged before.
    ///
    /// Non-image files are rejected and leave the current stage untouched.
    pub fn stage(&mut self, task_id: u32, name: &str, content_type: &str, file: F) -> Result<(), AppError> {
        if !IMAGE_TYPES.accepts(content_type) {
            return Err(AppError::validation(format!(
                "{} is not a supported image. Use PNG, JPG, GIF or WEBP.",
                if name.is_empty() { "That file" } else { name }
            )));
        }
        self.staged.insert(
            task_id,
            StagedFile { name: name.to_string(), content_type: content_type.to_string(), file },
        );
        Ok(())
    }

    /// The file to submit for `task_id`, or the validation error to show
    pub fn staged(&self, task_id: u32) -> Result<StagedFile<F>, AppError> {
        self.staged
            .get(&task_id)
            .cloned()
            .ok_or_else(|| AppError::validation("Please upload a screenshot."))
    }

    pub fn staged_name(&self, task_id: u32) -> Option<String> {
        self.staged.get(&task_id).map(|staged| staged.name.clone())
    }

    pub fn clear(&mut self, task_id: u32) {
        self.staged.remove(&task_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_accepts_images() {
        let mut stage = ScreenshotStage::default();
        stage.stage(5, "shot.png", "image/png", 1u8).unwrap();
        stage.stage(6, "shot.webp", "image/webp", 2u8).unwrap();
        assert_eq!(stage.staged_name(5).as_deref(), Some("shot.png"));
        assert_eq!(stage.staged(6).unwrap().file, 2);
    }

    #[test]
    fn test_stage_rejects_non_images() {
        let mut stage = ScreenshotStage::default();
        stage.stage(5, "shot.png", "image/png", 1u8).unwrap();
        let err = stage.stage(5, "notes.pdf", "application/pdf", 2u8).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        // Earlier stage survives the rejected file
        assert_eq!(stage.staged(5).unwrap().file, 1);
    }

    #[test]
    fn test_one_file_per_task() {
        let mut stage = ScreenshotStage::default();
        stage.stage(5, "a.png", "image/png", 1u8).unwrap();
        stage.stage(5, "b.jpg", "image/jpeg", 2u8).unwrap();
        assert_eq!(stage.staged_name(5).as_deref(), Some("b.jpg"));
    }

    #[test]
    fn test_missing_stage_is_validation_error() {
        let stage: ScreenshotStage<u8> = ScreenshotStage::default();
        assert_eq!(stage.staged(5).unwrap_err(), AppError::Validation("Please upload a screenshot.".to_string()));
    }

    #[test]
    fn test_clear() {
        let mut stage = ScreenshotStage::default();
        stage.stage(5, "a.png", "image/png", 1u8).unwrap();
        stage.clear(5);
        assert!(stage.staged(5).is_err());
    }
}
