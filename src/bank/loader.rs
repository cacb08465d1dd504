//! Question-bank loading
//!
//! Loads the raw JSON asset from a file or over HTTP, decodes records
//! leniently (a malformed record is replaced by a default record, never
//! aborting the rest), and runs the normalization pass over the decoded
//! collection. Normalization is pure per record, so the pass is
//! data-parallel.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::errors::{BankError, BankResult};
use super::types::{Question, QuestionBank, RawQuestion};
use crate::normalizer::normalize_question;

/// Where the question-bank asset lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BankSource {
    /// Fetched over HTTP(S)
    Url(String),
    /// Read from the local filesystem
    File(PathBuf),
}

impl BankSource {
    /// Classify raw user input as a URL or a file path.
    ///
    /// Only `http`/`https` inputs become [`BankSource::Url`]; everything
    /// else — including strings that happen to parse as exotic URLs — is
    /// treated as a path.
    #[must_use]
    pub fn detect(input: &str) -> Self {
        match url::Url::parse(input) {
            Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => {
                Self::Url(input.to_string())
            }
            _ => Self::File(PathBuf::from(input)),
        }
    }
}

impl std::fmt::Display for BankSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Url(url) => write!(f, "{url}"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Load and normalize a question bank from its source.
///
/// An empty bank is not an error; the caller decides how to surface the
/// no-data state.
pub async fn load_bank(source: &BankSource) -> BankResult<QuestionBank> {
    let payload = match source {
        BankSource::Url(url) => fetch_payload(url).await?,
        BankSource::File(path) => {
            tokio::fs::read_to_string(path)
                .await
                .map_err(|source| BankError::Io {
                    path: path.clone(),
                    source,
                })?
        }
    };

    let records = parse_records(&payload)?;
    log::info!("loaded {} question records from {source}", records.len());

    Ok(QuestionBank::new(normalize_records(records)))
}

async fn fetch_payload(url: &str) -> BankResult<String> {
    let response = reqwest::get(url).await.map_err(|source| BankError::Http {
        url: url.to_string(),
        source,
    })?;
    let response = response
        .error_for_status()
        .map_err(|source| BankError::Http {
            url: url.to_string(),
            source,
        })?;
    response.text().await.map_err(|source| BankError::Http {
        url: url.to_string(),
        source,
    })
}

/// Decode the payload into raw records, one record at a time.
///
/// The payload must be a JSON array; within it, any record that fails to
/// decode is replaced by [`RawQuestion::default`] with a warning, so the
/// rest of the collection still loads.
fn parse_records(payload: &str) -> BankResult<Vec<RawQuestion>> {
    let values: Vec<serde_json::Value> = serde_json::from_str(payload)?;

    let records = values
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            serde_json::from_value(value).unwrap_or_else(|err| {
                log::warn!("question record {index} is malformed ({err}); using defaults");
                RawQuestion::default()
            })
        })
        .collect();

    Ok(records)
}

fn normalize_records(records: Vec<RawQuestion>) -> Vec<Question> {
    records.into_par_iter().map(normalize_question).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_url() {
        assert_eq!(
            BankSource::detect("https://example.com/data/questions.json"),
            BankSource::Url("https://example.com/data/questions.json".to_string())
        );
        assert_eq!(
            BankSource::detect("http://localhost:8080/bank.json"),
            BankSource::Url("http://localhost:8080/bank.json".to_string())
        );
    }

    #[test]
    fn test_detect_path() {
        assert_eq!(
            BankSource::detect("data/questions.json"),
            BankSource::File(PathBuf::from("data/questions.json"))
        );
        assert_eq!(
            BankSource::detect("/abs/questions.json"),
            BankSource::File(PathBuf::from("/abs/questions.json"))
        );
        // Windows-style drive letters parse as URL schemes; still a path.
        assert_eq!(
            BankSource::detect("C:/banks/questions.json"),
            BankSource::File(PathBuf::from("C:/banks/questions.json"))
        );
    }

    #[test]
    fn test_parse_records_lenient() {
        let payload = r#"[
            {"title": "Q1", "questionHtml": "<p>x</p>", "tags": ["a"], "link": "https://e.com/1"},
            {"title": 42},
            {"tags": ["b"]}
        ]"#;
        let records = parse_records(payload).expect("array payload parses");
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].title, "Q1");
        // Record 1 has a non-string title: whole record falls back to defaults.
        assert_eq!(records[1].title, "");
        // Record 2 merely omits fields: defaults fill the gaps.
        assert_eq!(records[2].tags, vec!["b".to_string()]);
    }

    #[test]
    fn test_parse_records_rejects_non_array() {
        assert!(parse_records(r#"{"title": "not an array"}"#).is_err());
        assert!(parse_records("not json").is_err());
    }

    #[test]
    fn test_normalize_records_keeps_every_record() {
        let records = vec![RawQuestion::default(), RawQuestion::default()];
        let questions = normalize_records(records);
        assert_eq!(questions.len(), 2);
        assert!(questions.iter().all(|q| q.title == "Untitled Question"));
    }
}
