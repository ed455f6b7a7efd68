use crossterm::cursor::{MoveTo, MoveToPreviousLine, RestorePosition, SavePosition};
use crossterm::style::Print;
use crossterm::terminal::{Clear, ClearType};
use crossterm::{execute, queue};
use itertools::Itertools;
use std::cell::Cell;
use std::io::{self, Write};
use tracing::warn;

use crate::output::{Message, Output};
use crate::quiz::definition::Letter;

#[derive(Clone, Debug)]
pub struct ConsoleOutput {
    clear_screen: bool,
    // Whether the countdown line above the input line has been drawn yet.
    countdown_drawn: Cell<bool>,
}

fn countdown_line(seconds_left: u32) -> String {
    format!("⏳ Time left: {:02}s", seconds_left)
}

impl ConsoleOutput {
    pub fn new(clear_screen: bool) -> Self {
        ConsoleOutput {
            clear_screen,
            countdown_drawn: Cell::new(false),
        }
    }

    fn interpret_message(&self, message: &Message) -> String {
        use Message::*;
        match message {
            Welcome => "--- Welcome to the Ultimate Quiz Game! ---".into(),
            CountPrompt { choices, available } => {
                let choices = choices.iter().join(", ");
                format!(
                    "\nYou can choose to answer {}, or all ({}) questions.\nHow many questions would you like to answer? ({}/all): ",
                    choices,
                    available,
                    choices.replace(", ", "/")
                )
            }
            CountInvalidChoice => "Invalid choice. Please enter one of the listed numbers or 'all'.".into(),
            CountInvalidInput => "Invalid input. Please enter a number or the word 'all'.".into(),
            CountNotEnough { available } => format!(
                "Not enough questions available for your choice. Max is {}.",
                available
            ),
            QuizBegins => "\n--- Let's Begin The Quiz! ---".into(),
            QuestionHeader {
                number,
                total,
                score,
                asked,
            } => format!(
                "--- Question {} of {} ---\nCurrent Score: {}/{}",
                number, total, score, asked
            ),
            QuestionBegins(question) => {
                let options = Letter::ALL
                    .iter()
                    .map(|letter| format!("  {}. {}", letter, question.option(*letter)))
                    .join("\n");
                format!("{}\n{}", question.text, options)
            }
            AnswerPrompt => "Your choice (A, B, C, or D), then Enter:".into(),
            TimeUp => "--- Time's up! --- (press Enter to continue)".into(),
            InvalidInput(raw) => format!("Invalid input given: `{}`", raw),
            GuessCorrect => "\nCorrect! Excellent.".into(),
            GuessIncorrect(question) => format!(
                "\nWrong! The correct answer was {}. {}",
                question.answer,
                question.correct_text()
            ),
            QuizResults { score, total } => {
                let mut results = format!(
                    "--- Quiz Over! ---\nYou answered {} out of {} questions correctly.",
                    score, total
                );
                if *total > 0 {
                    let percentage = f64::from(*score) / *total as f64 * 100.0;
                    results += &format!("\nYour final score is {:.2}%", percentage);
                }
                results
            }
        }
    }
}

impl Output for ConsoleOutput {
    fn say(&self, message: &Message) {
        let text = self.interpret_message(message);
        let mut stdout = io::stdout();
        let written = match message {
            Message::CountPrompt { .. } => write!(stdout, "{}", text),
            _ => writeln!(stdout, "{}", text),
        };
        if let Err(e) = written.and_then(|_| stdout.flush()) {
            warn!("Could not write to console: {}", e);
        }
    }

    // The countdown gets its own line so that redrawing it leaves the
    // player's partially typed answer alone.
    fn countdown(&self, seconds_left: u32) {
        let line = countdown_line(seconds_left);
        let mut stdout = io::stdout();
        let drawn = if self.countdown_drawn.replace(true) {
            queue!(
                stdout,
                SavePosition,
                MoveToPreviousLine(1),
                Print(&line),
                Clear(ClearType::UntilNewLine),
                RestorePosition
            )
        } else {
            queue!(stdout, Print(&line), Print("\n"))
        };
        let result = drawn.and_then(|_| stdout.flush());
        if let Err(e) = result {
            warn!("Could not draw countdown: {}", e);
        }
    }

    fn end_countdown(&self) {
        self.countdown_drawn.set(false);
        let mut stdout = io::stdout();
        if let Err(e) = writeln!(stdout).and_then(|_| stdout.flush()) {
            warn!("Could not write to console: {}", e);
        }
    }

    fn clear(&self) {
        if !self.clear_screen {
            return;
        }
        if let Err(e) = execute!(io::stdout(), Clear(ClearType::All), MoveTo(0, 0)) {
            warn!("Could not clear screen: {}", e);
        }
    }
}
