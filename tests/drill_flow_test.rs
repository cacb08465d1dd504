//! Full drill flow: load, filter, run a session to completion

use quizdrill::{
    BankSource, PracticeSession, QuestionFilter, SessionStatus, filter_bank, load_bank,
    random_pick,
};
use std::io::Write;
use tempfile::NamedTempFile;

const BANK: &str = r#"[
  {"title": "Probability | Dice", "questionHtml": "<p>p1</p>", "tags": ["probability"], "link": "https://e.com/1"},
  {"title": "Probability | Coins", "questionHtml": "<p>p2</p>", "tags": ["probability"], "link": "https://e.com/2"},
  {"title": "Graphs | Cut vertices", "questionHtml": "<p>g1</p>", "tags": ["graphs"], "link": "https://e.com/3"}
]"#;

#[tokio::test]
async fn test_drill_to_target() {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(BANK.as_bytes()).expect("write bank");

    let bank = load_bank(&BankSource::File(file.path().to_path_buf()))
        .await
        .expect("bank loads");
    assert_eq!(bank.len(), 3);

    // Narrow the pool to probability questions.
    let filter = QuestionFilter::from_input("", "probability");
    let candidates = filter_bank(&bank, &filter);
    assert_eq!(candidates, vec![0, 1]);

    // Two-question session: draw and advance until the target is hit.
    let mut session = PracticeSession::new(1, 2);
    session.start();

    while session.solved() < session.target() {
        let index = random_pick(&candidates).expect("non-empty pool");
        let question = bank.get(index).expect("picked question exists");
        assert!(question.tags.iter().any(|t| t == "probability"));
        assert!(session.advance());
        session.tick();
    }

    // Target reached; completion is observed once the clock stops.
    assert_eq!(session.solved(), 2);
    while session.is_running() {
        session.tick();
    }
    assert_eq!(session.status(), SessionStatus::Complete);
}

#[tokio::test]
async fn test_filter_with_no_matches_yields_no_pick() {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(BANK.as_bytes()).expect("write bank");

    let bank = load_bank(&BankSource::File(file.path().to_path_buf()))
        .await
        .expect("bank loads");

    let filter = QuestionFilter::from_input("no such title", "");
    let candidates = filter_bank(&bank, &filter);
    assert!(candidates.is_empty());
    assert_eq!(random_pick(&candidates), None);
}
