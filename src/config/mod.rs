//! Configuration module for practice runs
//!
//! This module provides the `DrillConfig` struct and its type-safe builder
//! for configuring a practice run with validation and sensible defaults.

// Sub-modules
pub mod builder;
pub mod getters;
pub mod types;

// Re-exports for public API
pub use builder::{DrillConfigBuilder, WithBankSource};
pub use types::DrillConfig;
