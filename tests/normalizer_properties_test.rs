//! Property tests for the normalization pipeline
//!
//! Covers the contract-level properties: title normalization is
//! idempotent, both HTML transforms are total over arbitrary input, and
//! every well-formed array block is always converted away.

use proptest::prelude::*;
use quizdrill::{convert_latex_tables, normalize_title, rewrite_asset_paths};

proptest! {
    #[test]
    fn title_normalization_is_idempotent(title in ".*") {
        let once = normalize_title(&title);
        let twice = normalize_title(&once);
        prop_assert_eq!(twice, once);
    }

    #[test]
    fn normalized_titles_are_never_empty(title in ".*") {
        prop_assert!(!normalize_title(&title).trim().is_empty());
    }

    #[test]
    fn transforms_are_total(html in ".*") {
        // No input may panic either transform; both always return.
        let _ = convert_latex_tables(&html);
        let _ = rewrite_asset_paths(&html);
    }

    #[test]
    fn block_free_input_passes_through(html in "[a-zA-Z0-9 <>/=\"$^_.-]*") {
        // Alphabet excludes backslashes, so no array block can occur.
        prop_assert_eq!(convert_latex_tables(&html), html);
    }

    #[test]
    fn well_formed_blocks_always_convert(
        pre in "[a-zA-Z0-9 <>/]*",
        rows in proptest::collection::vec(
            proptest::collection::vec("[a-z0-9]{0,6}", 1..4),
            1..4,
        ),
        post in "[a-zA-Z0-9 <>/]*",
    ) {
        let body = rows
            .iter()
            .map(|cells| cells.join(" & "))
            .collect::<Vec<_>>()
            .join(" \\\\ ");
        let html = format!("{pre}\\begin{{array}}{{cc}}{body}\\end{{array}}{post}");

        let result = convert_latex_tables(&html);
        prop_assert!(!result.contains("\\begin{array}"), "array block should be converted away");
        prop_assert!(result.contains("<table class=\"latex-table\">"));
        prop_assert!(result.starts_with(&pre));
        prop_assert!(result.ends_with(&post));
    }
}
