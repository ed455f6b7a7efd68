use anyhow::Result;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::input::AnswerInput;
use crate::output::{Message, Output};


#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum QuestionCount {
    All,
    Exactly(usize),
}

impl QuestionCount {
    pub fn resolve(self, available: usize) -> usize {
        match self {
            QuestionCount::All => available,
            QuestionCount::Exactly(count) => count.min(available),
        }
    }
}

impl FromStr for QuestionCount {
    type Err = CountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();
        if s == "all" {
            return Ok(QuestionCount::All);
        }
        s.parse::<usize>()
            .map(QuestionCount::Exactly)
            .map_err(|_| CountError::NotANumber)
    }
}

impl fmt::Display for QuestionCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionCount::All => f.write_str("all"),
            QuestionCount::Exactly(count) => write!(f, "{}", count),
        }
    }
}

#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum CountError {
    #[error("expected a number or `all`")]
    NotANumber,
    #[error("{0} is not one of the offered choices")]
    NotOffered(usize),
    #[error("only {available} questions are available")]
    NotEnough { available: usize },
}

impl CountError {
    fn message(&self) -> Message {
        match self {
            CountError::NotANumber => Message::CountInvalidInput,
            CountError::NotOffered(_) => Message::CountInvalidChoice,
            CountError::NotEnough { available } => Message::CountNotEnough {
                available: *available,
            },
        }
    }
}

/// Validates a player's choice against the offered counts.
pub fn parse_choice(
    choice: &str,
    choices: &[usize],
    available: usize,
) -> Result<QuestionCount, CountError> {
    match choice.parse::<QuestionCount>()? {
        QuestionCount::All => Ok(QuestionCount::All),
        QuestionCount::Exactly(count) if !choices.contains(&count) => {
            Err(CountError::NotOffered(count))
        }
        QuestionCount::Exactly(count) if count > available => {
            Err(CountError::NotEnough { available })
        }
        count => Ok(count),
    }
}

/// Asks until the player picks a valid count. Returns `None` if input closes first.
pub fn prompt_count<I: AnswerInput, O: Output>(
    input: &I,
    output: &O,
    choices: &[usize],
    available: usize,
) -> Result<Option<QuestionCount>> {
    loop {
        output.say(&Message::CountPrompt {
            choices: choices.to_vec(),
            available,
        });
        let line = match input.read_line()? {
            Some(line) => line,
            None => return Ok(None),
        };
        match parse_choice(&line, choices, available) {
            Ok(count) => return Ok(Some(count)),
            Err(e) => output.say(&e.message()),
        }
    }
}
