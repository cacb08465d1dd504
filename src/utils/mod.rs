//! Shared utilities and constants

pub mod constants;
pub mod string_utils;

pub use constants::{
    ASSET_ORIGIN, ASSET_PATH_PREFIX, DEFAULT_SESSION_MINUTES, DEFAULT_TARGET_QUESTIONS,
    LATEX_TABLE_CLASS, UNTITLED_PLACEHOLDER,
};
pub use string_utils::safe_truncate_chars;
