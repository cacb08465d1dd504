// Practice-session CLI
//
// Loads a question bank from a file or URL, normalizes it once, then runs
// a timed drill on stdin: start the countdown, draw random questions,
// narrow the pool with title/tag filters. The HTML body is printed as-is;
// math typesetting is the display layer's concern.

use anyhow::{Context, Result, bail};
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};

use quizdrill::utils::safe_truncate_chars;
use quizdrill::{
    BankSource, DrillConfig, PracticeSession, Question, QuestionBank, QuestionFilter, filter_bank,
    load_bank, random_pick,
};

const USAGE: &str = "\
usage: quizdrill [BANK] [--minutes N] [--target N]

  BANK         question-bank JSON, as a file path or http(s) URL
               (default: data/questions.json)
  --minutes N  session length in minutes (default: 10)
  --target N   target question count (default: 5)";

fn parse_args() -> Result<DrillConfig> {
    let mut source: Option<BankSource> = None;
    let mut minutes: Option<u64> = None;
    let mut target: Option<u32> = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--minutes" => {
                let value = args.next().context("--minutes needs a value")?;
                minutes = Some(value.parse().context("--minutes must be a number")?);
            }
            "--target" => {
                let value = args.next().context("--target needs a value")?;
                target = Some(value.parse().context("--target must be a number")?);
            }
            "--help" | "-h" => {
                println!("{USAGE}");
                std::process::exit(0);
            }
            other if source.is_none() && !other.starts_with('-') => {
                source = Some(BankSource::detect(other));
            }
            other => bail!("unexpected argument: {other}\n{USAGE}"),
        }
    }

    let mut builder = DrillConfig::builder().bank_source(
        source.unwrap_or_else(|| BankSource::File("data/questions.json".into())),
    );
    if let Some(minutes) = minutes {
        builder = builder.session_minutes(minutes);
    }
    if let Some(target) = target {
        builder = builder.target_questions(target);
    }
    builder.build()
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let config = parse_args()?;
    let bank = load_bank(config.bank_source()).await?;
    println!(
        "Loaded {} questions from {}",
        bank.len(),
        config.bank_source()
    );
    if bank.is_empty() {
        println!("Nothing to practice: the bank is empty.");
        return Ok(());
    }

    run_drill(&bank, &config).await
}

async fn run_drill(bank: &QuestionBank, config: &DrillConfig) -> Result<()> {
    let mut session = PracticeSession::new(config.session_minutes(), config.target_questions());
    let mut filter = QuestionFilter::default();
    let mut candidates = filter_bank(bank, &filter);

    let mut ticker = tokio::time::interval(Duration::from_secs(1));
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    print_help();

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                if session.is_running() {
                    session.tick();
                    if !session.is_running() {
                        println!(
                            "\nTime is up. Solved {}/{}.",
                            session.solved(),
                            session.target()
                        );
                        print_prompt();
                    }
                }
            }
            line = lines.next_line() => {
                let Some(line) = line.context("reading stdin")? else {
                    break;
                };
                if !handle_command(line.trim(), bank, &mut session, &mut filter, &mut candidates) {
                    break;
                }
                print_prompt();
            }
        }
    }

    Ok(())
}

/// Dispatch one command line. Returns `false` to quit.
fn handle_command(
    line: &str,
    bank: &QuestionBank,
    session: &mut PracticeSession,
    filter: &mut QuestionFilter,
    candidates: &mut Vec<usize>,
) -> bool {
    let (command, rest) = match line.split_once(' ') {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };

    match command {
        "" => {}
        "start" => {
            session.start();
            println!(
                "Session started: {} on the clock, target {} questions.",
                session.clock(),
                session.target()
            );
            show_random(bank, candidates);
        }
        "next" | "n" => {
            if !session.is_running() {
                println!("Session is not running; type `start` first.");
            } else if candidates.is_empty() {
                println!("No questions match the current filter.");
            } else {
                session.advance();
                println!(
                    "[{}] solved {}/{}",
                    session.clock(),
                    session.solved(),
                    session.target()
                );
                show_random(bank, candidates);
            }
        }
        "reset" => {
            session.reset();
            println!("Session reset.");
        }
        "title" => {
            *filter = QuestionFilter::from_input(rest, "");
            *candidates = filter_bank(bank, filter);
            println!("{} questions match.", candidates.len());
        }
        "tags" => {
            *filter = QuestionFilter::from_input("", rest);
            *candidates = filter_bank(bank, filter);
            println!("{} questions match.", candidates.len());
        }
        "clear" => {
            *filter = QuestionFilter::default();
            *candidates = filter_bank(bank, filter);
            println!("Filter cleared; {} questions in the pool.", candidates.len());
        }
        "status" => {
            println!(
                "[{}] solved {}/{} | pool {} | {}",
                session.clock(),
                session.solved(),
                session.target(),
                candidates.len(),
                if session.is_complete() {
                    "session complete"
                } else if session.is_running() {
                    "running"
                } else {
                    "idle"
                }
            );
        }
        "help" | "?" => print_help(),
        "quit" | "q" | "exit" => {
            println!(
                "Bye. Solved {}/{}.",
                session.solved(),
                session.target()
            );
            return false;
        }
        other => println!("Unknown command `{other}`; type `help`."),
    }

    true
}

fn show_random(bank: &QuestionBank, candidates: &[usize]) {
    match random_pick(candidates).and_then(|index| bank.get(index)) {
        Some(question) => print_question(question),
        None => println!("No questions match the current filter."),
    }
}

fn print_question(question: &Question) {
    println!("\n=== {} ===", safe_truncate_chars(&question.title, 96));
    if !question.tags.is_empty() {
        println!("tags: {}", question.tags.join(", "));
    }
    if !question.link.is_empty() {
        println!("link: {}", question.link);
    }
    println!("{}\n", question.question_html);
}

fn print_help() {
    println!(
        "commands: start | next (n) | title <query> | tags <a,b> | clear | status | reset | quit"
    );
}

fn print_prompt() {
    use std::io::Write;
    print!("> ");
    let _ = std::io::stdout().flush();
}
