pub mod bank;
pub mod config;
pub mod normalizer;
pub mod selection;
pub mod session;
pub mod utils;

pub use bank::{BankError, BankResult, BankSource, Question, QuestionBank, RawQuestion, load_bank};
pub use config::DrillConfig;
pub use normalizer::{
    convert_latex_tables, normalize_question, normalize_title, rewrite_asset_paths,
};
pub use selection::{QuestionFilter, filter_bank, random_pick};
pub use session::{PracticeSession, SessionStatus};
