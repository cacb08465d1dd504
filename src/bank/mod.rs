//! Question-bank model and loading
//!
//! This module provides the record types, the `QuestionBank` collection,
//! and the async loader that fetches, decodes, and normalizes the bank
//! asset once at startup.

pub mod errors;
pub mod loader;
pub mod types;

pub use errors::{BankError, BankResult};
pub use loader::{BankSource, load_bank};
pub use types::{Question, QuestionBank, RawQuestion};
