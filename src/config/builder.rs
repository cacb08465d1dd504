//! Type-safe builder for `DrillConfig` using the typestate pattern
//!
//! The builder requires a bank source at compile time; pacing fields are
//! optional with defaults and validated in `build()`.

use anyhow::{Result, anyhow};
use std::marker::PhantomData;

use super::types::DrillConfig;
use crate::bank::BankSource;
use crate::utils::{DEFAULT_SESSION_MINUTES, DEFAULT_TARGET_QUESTIONS};

// Type state for the builder
pub struct WithBankSource;

pub struct DrillConfigBuilder<State = ()> {
    pub(crate) bank_source: Option<BankSource>,
    pub(crate) session_minutes: u64,
    pub(crate) target_questions: u32,
    pub(crate) _phantom: PhantomData<State>,
}

impl Default for DrillConfigBuilder<()> {
    fn default() -> Self {
        Self {
            bank_source: None,
            session_minutes: DEFAULT_SESSION_MINUTES,
            target_questions: DEFAULT_TARGET_QUESTIONS,
            _phantom: PhantomData,
        }
    }
}

impl DrillConfigBuilder<()> {
    /// Set the required bank source, unlocking `build()`.
    #[must_use]
    pub fn bank_source(self, source: BankSource) -> DrillConfigBuilder<WithBankSource> {
        DrillConfigBuilder {
            bank_source: Some(source),
            session_minutes: self.session_minutes,
            target_questions: self.target_questions,
            _phantom: PhantomData,
        }
    }
}

impl<State> DrillConfigBuilder<State> {
    #[must_use]
    pub fn session_minutes(mut self, minutes: u64) -> Self {
        self.session_minutes = minutes;
        self
    }

    #[must_use]
    pub fn target_questions(mut self, target: u32) -> Self {
        self.target_questions = target;
        self
    }
}

impl DrillConfigBuilder<WithBankSource> {
    /// Validate and build the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error when the session length or target count is zero.
    pub fn build(self) -> Result<DrillConfig> {
        let bank_source = self
            .bank_source
            .ok_or_else(|| anyhow!("bank source not set"))?;

        if self.session_minutes == 0 {
            return Err(anyhow!("session length must be at least one minute"));
        }
        if self.target_questions == 0 {
            return Err(anyhow!("target question count must be at least one"));
        }

        Ok(DrillConfig {
            bank_source,
            session_minutes: self.session_minutes,
            target_questions: self.target_questions,
        })
    }
}
