use anyhow::*;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::input::StdinInput;
use crate::output::{ConsoleOutput, Message, Output};
use crate::quiz::definition::QuizDefinition;
use crate::quiz::selection::{self, QuestionCount};
use crate::quiz::settings::Settings;
use crate::quiz::Quiz;

mod input;
mod output;
mod quiz;

#[derive(Parser, Debug)]
#[command(version, about = "Multiple choice quiz against the clock", long_about = None)]
struct Args {
    /// CSV file to load the questions from
    #[arg(short, long, default_value = "quiz.csv")]
    questions: PathBuf,

    /// Seconds allowed for each question
    #[arg(short, long)]
    time_limit: Option<u32>,

    /// How many questions to ask (`all` or one of the offered counts); asks interactively when omitted
    #[arg(short, long)]
    count: Option<QuestionCount>,

    /// Keep previous questions on screen
    #[arg(long)]
    no_clear: bool,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut settings = Settings::default();
    if let Some(time_limit) = args.time_limit {
        settings.time_limit_seconds = time_limit;
    }

    let definition = QuizDefinition::open(&args.questions)?;
    let available = definition.get_questions().len();

    let input = Arc::new(StdinInput);
    let output = ConsoleOutput::new(!args.no_clear);
    output.say(&Message::Welcome);

    let count = match args.count {
        Some(count) => count,
        None => match selection::prompt_count(
            input.as_ref(),
            &output,
            &settings.count_choices,
            available,
        )? {
            Some(count) => count,
            None => {
                info!("Input closed before a question count was chosen");
                return Ok(());
            }
        },
    };

    let quiz = Quiz::new(definition, settings, input, output);
    let report = quiz.run(count, &mut rand::thread_rng());
    info!("Quiz finished: {}/{}", report.score, report.total);
    Ok(())
}
