//! Shared configuration constants for quizdrill
//!
//! This module contains default values and fixed strings used throughout
//! the codebase to ensure consistency and avoid magic numbers.

/// Placeholder title for questions whose title is empty or whitespace-only
///
/// The question bank is scraped data; a fair number of records carry a
/// blank title. Normalization substitutes this fixed string so the UI
/// never renders an empty heading.
pub const UNTITLED_PLACEHOLDER: &str = "Untitled Question";

/// Relative path prefix used by `src` attributes in raw question HTML
///
/// Question bodies reference uploaded images with site-relative paths
/// (`src="/upfiles/..."`). Outside the origin site those paths resolve to
/// nothing, so normalization rewrites them against [`ASSET_ORIGIN`].
pub const ASSET_PATH_PREFIX: &str = "/upfiles";

/// Absolute origin that relative asset paths are rewritten against
pub const ASSET_ORIGIN: &str = "https://gateoverflow.in";

/// Class name attached to tables generated from LaTeX array blocks
///
/// Downstream styling hooks onto this class; it marks the table as
/// synthesized rather than authored.
pub const LATEX_TABLE_CLASS: &str = "latex-table";

/// Default practice session length: 10 minutes
pub const DEFAULT_SESSION_MINUTES: u64 = 10;

/// Default target question count: 5 questions
///
/// The session is complete when either the countdown expires or this many
/// questions have been advanced past.
pub const DEFAULT_TARGET_QUESTIONS: u32 = 5;
