//! Site-relative asset path rewriting.
//!
//! Raw question HTML references uploaded images with site-relative paths
//! (`src="/upfiles/..."`), which only resolve on the origin site. This
//! module rewrites them to absolute URLs with a literal substring
//! substitution — no HTML parse, so no other attribute or text content can
//! be altered.

use std::sync::LazyLock;

use crate::utils::{ASSET_ORIGIN, ASSET_PATH_PREFIX};

// The needle anchors on the attribute opening (`src="`) so a matching
// prefix in text content or another attribute is never rewritten.
static SRC_NEEDLE: LazyLock<String> =
    LazyLock::new(|| format!(r#"src="{ASSET_PATH_PREFIX}"#));

static SRC_REPLACEMENT: LazyLock<String> =
    LazyLock::new(|| format!(r#"src="{ASSET_ORIGIN}{ASSET_PATH_PREFIX}"#));

/// Rewrite every relative `src` asset path to an absolute one.
///
/// The remainder of each path is preserved verbatim; non-matching content
/// passes through unchanged. Total over all inputs.
#[must_use]
pub fn rewrite_asset_paths(html: &str) -> String {
    if !html.contains(SRC_NEEDLE.as_str()) {
        return html.to_string();
    }
    html.replace(SRC_NEEDLE.as_str(), SRC_REPLACEMENT.as_str())
}
