//! Exam center
//!
//! Decodes the multiple-choice quiz builder form. Quizzes are not stored yet;
//! the decoded draft is returned so the caller can report on it.

use campus_core::value_objects::{decode_questions, FormFields, QuizDraft};
use tracing::{info, instrument};

use super::error::{ServiceError, ServiceResult};

/// Exam center service
#[derive(Debug, Default, Clone, Copy)]
pub struct ExamCenterService;

impl ExamCenterService {
    pub fn new() -> Self {
        Self
    }

    /// Validate the header fields and decode the question list
    #[instrument(skip(self, fields))]
    pub fn submit(&self, fields: &FormFields) -> ServiceResult<QuizDraft> {
        let title = fields
            .get("exam_title")
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| ServiceError::validation("Exam Title is required."))?;

        let max_attempts = fields
            .get("max_attempts")
            .and_then(|v| v.trim().parse::<u32>().ok())
            .filter(|n| *n > 0)
            .ok_or_else(|| ServiceError::validation("Invalid max attempts."))?;

        let questions = decode_questions(fields);
        info!(title, max_attempts, questions = questions.len(), "Quiz decoded");

        Ok(QuizDraft {
            title: title.to_string(),
            max_attempts,
            questions,
        })
    }
}
