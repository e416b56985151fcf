//! Quiz form decoding
//!
//! The exam-center form submits questions as flat, bracketed field names:
//! `questions[0][question]`, `questions[0][option1]` .. `questions[0][option4]`,
//! `questions[0][answer]`, then index 1, 2, and so on.

use std::collections::HashMap;

use serde::Serialize;

/// Number of answer options every question carries
pub const OPTIONS_PER_QUESTION: usize = 4;

/// Flat view over a submitted form
///
/// Keeps the first value when a field name repeats.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields(HashMap<String, String>);

impl FormFields {
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut fields = HashMap::new();
        for (key, value) in pairs {
            fields.entry(key).or_insert(value);
        }
        Self(fields)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }
}

/// A multiple-choice question
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    pub question: String,
    pub options: [String; OPTIONS_PER_QUESTION],
    pub answer: String,
}

/// A quiz assembled from the exam-center form
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizDraft {
    pub title: String,
    pub max_attempts: u32,
    pub questions: Vec<Question>,
}

/// Rebuild the ordered question list from flat form fields
///
/// Indices must be contiguous from zero: decoding stops at the first index
/// without a `question` key, so a gap silently truncates the list. Missing
/// options and answers become empty strings.
pub fn decode_questions(fields: &FormFields) -> Vec<Question> {
    let mut questions = Vec::new();

    for index in 0.. {
        let Some(question) = fields.get(&field_name(index, "question")) else {
            break;
        };

        let options = std::array::from_fn(|slot| {
            fields
                .get(&field_name(index, &format!("option{}", slot + 1)))
                .unwrap_or_default()
                .to_string()
        });

        questions.push(Question {
            question: question.to_string(),
            options,
            answer: fields
                .get(&field_name(index, "answer"))
                .unwrap_or_default()
                .to_string(),
        });
    }

    questions
}

fn field_name(index: usize, part: &str) -> String {
    format!("questions[{index}][{part}]")
}
