//! Question-bank record types
//!
//! `RawQuestion` mirrors the JSON asset as scraped; `Question` is the
//! normalized, display-ready shape. The collection is loaded once and
//! read-only for the life of the process.

use serde::{Deserialize, Serialize};

/// One record as it appears in the question-bank asset.
///
/// Every field is defaulted: scraped records are uneven, and a missing
/// field must not fail the record. The loader substitutes defaults and
/// keeps going (a blank title becomes the placeholder at normalization).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawQuestion {
    pub title: String,
    pub question_html: String,
    pub tags: Vec<String>,
    pub link: String,
}

/// A normalized question, safe for direct display.
///
/// **INVARIANTS:** `title` is never empty (placeholder-backed);
/// `question_html` contains no `\begin{array}` block and no site-relative
/// asset prefix in `src` attributes. Math delimiters are preserved for the
/// external typesetting renderer. Immutable after normalization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub title: String,
    pub question_html: String,
    pub tags: Vec<String>,
    pub link: String,
}

/// In-memory question collection, read-only after load.
#[derive(Debug, Clone, Default)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    #[must_use]
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }
}
