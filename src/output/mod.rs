use crate::quiz::definition::Question;

pub mod console;
#[cfg(test)]
pub mod mock;

pub use console::ConsoleOutput;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Message {
    Welcome,
    CountPrompt {
        choices: Vec<usize>,
        available: usize,
    },
    CountInvalidChoice,
    CountInvalidInput,
    CountNotEnough {
        available: usize,
    },
    QuizBegins,
    QuestionHeader {
        number: usize,
        total: usize,
        score: u32,
        asked: usize,
    },
    QuestionBegins(Question),
    AnswerPrompt,
    TimeUp,
    InvalidInput(String),
    GuessCorrect,
    GuessIncorrect(Question),
    QuizResults {
        score: u32,
        total: usize,
    },
}

pub trait Output {
    fn say(&self, message: &Message);

    /// Redraws the countdown in place, without moving to a new line.
    fn countdown(&self, seconds_left: u32);

    /// Ends the countdown line.
    fn end_countdown(&self);

    fn clear(&self);
}
