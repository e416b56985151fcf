//! Test fixtures and data generators

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Registration form
#[derive(Debug, Clone, Serialize)]
pub struct Registration {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl Registration {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            username: format!("student{suffix}"),
            email: format!("student{suffix}@example.com"),
            password: "TestPass123!".to_string(),
        }
    }
}

/// Exam-center form with `count` well-formed questions
pub fn quiz_form(title: &str, max_attempts: &str, count: usize) -> Vec<(String, String)> {
    let mut fields = vec![
        ("exam_title".to_string(), title.to_string()),
        ("max_attempts".to_string(), max_attempts.to_string()),
    ];
    for i in 0..count {
        fields.push((format!("questions[{i}][question]"), format!("Question {i}?")));
        for option in 1..=4 {
            fields.push((format!("questions[{i}][option{option}]"), format!("choice {option}")));
        }
        fields.push((format!("questions[{i}][answer]"), "choice 1".to_string()));
    }
    fields
}

/// A tiny PNG payload; contents are never decoded
pub const PNG_BYTES: &[u8] = b"\x89PNG\r\n\x1a\nnot-really-an-image";
