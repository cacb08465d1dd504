//! Core configuration types for practice runs
//!
//! This module contains the main `DrillConfig` struct describing one
//! practice run: where the bank comes from and how the session is paced.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::bank::BankSource;
use crate::utils::{DEFAULT_SESSION_MINUTES, DEFAULT_TARGET_QUESTIONS};

/// Main configuration struct for a practice run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrillConfig {
    /// Where the question-bank asset is loaded from
    pub(crate) bank_source: BankSource,

    /// Session length in minutes.
    ///
    /// **INVARIANT:** At least 1 (validated in the builder).
    pub(crate) session_minutes: u64,

    /// Target question count for the session.
    ///
    /// **INVARIANT:** At least 1 (validated in the builder).
    pub(crate) target_questions: u32,
}

impl Default for DrillConfig {
    fn default() -> Self {
        Self {
            bank_source: BankSource::File(PathBuf::from("data/questions.json")),
            session_minutes: DEFAULT_SESSION_MINUTES,
            target_questions: DEFAULT_TARGET_QUESTIONS,
        }
    }
}

impl DrillConfig {
    /// Start a type-safe builder; `bank_source` is required before
    /// `build()` becomes available.
    #[must_use]
    pub fn builder() -> super::builder::DrillConfigBuilder<()> {
        super::builder::DrillConfigBuilder::default()
    }
}
