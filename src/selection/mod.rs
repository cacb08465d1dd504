//! Question filtering and random selection
//!
//! Linear, case-insensitive filtering over the normalized collection plus
//! uniform random pick. Filtering works on bank indices so the collection
//! itself is never copied or reordered.

use rand::Rng;

use crate::bank::{Question, QuestionBank};

/// Case-insensitive filter over the normalized collection.
///
/// A question passes when its title contains the title query (if any) and
/// at least one input tag is a substring of one of its tags (if any tags
/// were given). An empty filter passes everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionFilter {
    title: Option<String>,
    tags: Vec<String>,
}

impl QuestionFilter {
    /// Build a filter from raw user input.
    ///
    /// The title query is trimmed; the tag input is split on commas with
    /// empties dropped. Both are lowercased here, once.
    #[must_use]
    pub fn from_input(title_input: &str, tag_input: &str) -> Self {
        let title = {
            let query = title_input.trim().to_lowercase();
            if query.is_empty() { None } else { Some(query) }
        };

        let tags = tag_input
            .split(',')
            .map(|tag| tag.trim().to_lowercase())
            .filter(|tag| !tag.is_empty())
            .collect();

        Self { title, tags }
    }

    /// Whether the filter constrains anything at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.tags.is_empty()
    }

    /// Whether one question passes the filter.
    #[must_use]
    pub fn matches(&self, question: &Question) -> bool {
        if let Some(query) = &self.title {
            if !question.title.to_lowercase().contains(query) {
                return false;
            }
        }

        if self.tags.is_empty() {
            return true;
        }

        self.tags.iter().any(|input_tag| {
            question
                .tags
                .iter()
                .any(|question_tag| question_tag.to_lowercase().contains(input_tag))
        })
    }
}

/// Indices of questions passing the filter, bank order preserved.
#[must_use]
pub fn filter_bank(bank: &QuestionBank, filter: &QuestionFilter) -> Vec<usize> {
    bank.iter()
        .enumerate()
        .filter(|(_, question)| filter.matches(question))
        .map(|(index, _)| index)
        .collect()
}

/// Uniform random pick from a candidate index list.
#[must_use]
pub fn random_pick(candidates: &[usize]) -> Option<usize> {
    if candidates.is_empty() {
        return None;
    }
    let slot = rand::rng().random_range(0..candidates.len());
    Some(candidates[slot])
}
