//! Getter methods for `DrillConfig`

use super::types::DrillConfig;
use crate::bank::BankSource;

impl DrillConfig {
    #[must_use]
    pub fn bank_source(&self) -> &BankSource {
        &self.bank_source
    }

    #[must_use]
    pub fn session_minutes(&self) -> u64 {
        self.session_minutes
    }

    #[must_use]
    pub fn target_questions(&self) -> u32 {
        self.target_questions
    }
}
