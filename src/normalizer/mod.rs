//! Content normalization pipeline
//!
//! Takes one raw question record as scraped and produces a record safe for
//! direct display: the title is backfilled when blank, relative asset
//! paths become absolute, and embedded LaTeX array blocks become real HTML
//! tables. The pipeline is pure and touches only its own input, so it can
//! run over the whole collection in any order or in parallel.

pub mod asset_paths;
pub mod latex_tables;

pub use asset_paths::rewrite_asset_paths;
pub use latex_tables::convert_latex_tables;

use crate::bank::{Question, RawQuestion};
use crate::utils::UNTITLED_PLACEHOLDER;

/// Trim a title, substituting the fixed placeholder when nothing remains.
///
/// Idempotent: normalizing an already-normalized title is a no-op.
#[must_use]
pub fn normalize_title(title: &str) -> String {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        UNTITLED_PLACEHOLDER.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Normalize one raw record into a display-ready [`Question`].
///
/// Asset-path rewriting runs before table conversion; the two patterns are
/// independent, but the pipeline order is fixed so behavior stays
/// reproducible.
#[must_use]
pub fn normalize_question(raw: RawQuestion) -> Question {
    let RawQuestion {
        title,
        question_html,
        tags,
        link,
    } = raw;

    Question {
        title: normalize_title(&title),
        question_html: convert_latex_tables(&rewrite_asset_paths(&question_html)),
        tags,
        link,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_trimmed() {
        assert_eq!(normalize_title("  Q1  "), "Q1");
    }

    #[test]
    fn test_blank_title_gets_placeholder() {
        assert_eq!(normalize_title(""), "Untitled Question");
        assert_eq!(normalize_title("   "), "Untitled Question");
    }

    #[test]
    fn test_title_idempotent() {
        for title in ["", "   ", "Q1", "  spaced  ", "Untitled Question"] {
            let once = normalize_title(title);
            assert_eq!(normalize_title(&once), once);
        }
    }

    #[test]
    fn test_full_pipeline() {
        let raw = RawQuestion {
            title: "  ".to_string(),
            question_html: r#"<img src="/upfiles/x.png">\begin{array}{c} 1 \end{array}"#
                .to_string(),
            tags: vec!["graphs".to_string()],
            link: "https://gateoverflow.in/q/1".to_string(),
        };
        let question = normalize_question(raw);
        assert_eq!(question.title, "Untitled Question");
        assert!(question.question_html.contains("https://gateoverflow.in/upfiles/x.png"));
        assert!(question.question_html.contains(r#"<table class="latex-table">"#));
        assert!(!question.question_html.contains(r"\begin{array}"));
        assert_eq!(question.tags, vec!["graphs".to_string()]);
        assert_eq!(question.link, "https://gateoverflow.in/q/1");
    }

    #[test]
    fn test_default_record_normalizes() {
        let question = normalize_question(RawQuestion::default());
        assert_eq!(question.title, "Untitled Question");
        assert_eq!(question.question_html, "");
        assert!(question.tags.is_empty());
    }
}
