use lazy_static::lazy_static;
use regex::Regex;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use unidecode::unidecode;

use super::DefinitionError;

lazy_static! {
    static ref FORBIDDEN_ANSWER_CHARACTERS_REGEX: Regex = Regex::new("[^a-z0-9]").unwrap();
}

fn sanitize(answer: &str) -> String {
    let answer = unidecode(answer);
    FORBIDDEN_ANSWER_CHARACTERS_REGEX
        .replace_all(&answer.to_lowercase(), "")
        .into()
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Letter {
    A,
    B,
    C,
    D,
}

impl Letter {
    pub const ALL: [Letter; 4] = [Letter::A, Letter::B, Letter::C, Letter::D];

    fn index(self) -> usize {
        match self {
            Letter::A => 0,
            Letter::B => 1,
            Letter::C => 2,
            Letter::D => 3,
        }
    }
}

impl FromStr for Letter {
    type Err = DefinitionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "A" => Ok(Letter::A),
            "B" => Ok(Letter::B),
            "C" => Ok(Letter::C),
            "D" => Ok(Letter::D),
            other => Err(DefinitionError::InvalidLetter(other.to_owned())),
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            Letter::A => "A",
            Letter::B => "B",
            Letter::C => "C",
            Letter::D => "D",
        };
        f.write_str(letter)
    }
}

/// One CSV row, as written by quiz authors.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct RawQuestion {
    pub question: String,
    pub option_a: String,
    pub option_b: String,
    pub option_c: String,
    pub option_d: String,
    pub answer: String,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Question {
    pub text: String,
    pub options: [String; 4],
    pub answer: Letter,
}

impl Question {
    pub fn option(&self, letter: Letter) -> &str {
        &self.options[letter.index()]
    }

    pub fn correct_text(&self) -> &str {
        self.option(self.answer)
    }

    pub fn is_correct(&self, letter: Letter) -> bool {
        self.answer == letter
    }
}

impl RawQuestion {
    pub fn is_blank(&self) -> bool {
        self.question.trim().is_empty()
    }

    // Authors either copy the correct option's text or write its letter.
    // Text wins so that an option literally called "B" still resolves.
    // Looser comparisons only apply when stricter ones found nothing.
    fn resolve_answer(&self, options: &[String; 4]) -> Result<Letter, DefinitionError> {
        let comparisons: [fn(&str, &str) -> bool; 3] = [
            |option, answer| option == answer,
            |option, answer| option.to_lowercase() == answer.to_lowercase(),
            |option, answer| {
                let answer = sanitize(answer);
                !answer.is_empty() && sanitize(option) == answer
            },
        ];
        for same_text in comparisons.iter() {
            let matching: Vec<Letter> = Letter::ALL
                .iter()
                .copied()
                .filter(|letter| same_text(&options[letter.index()], &self.answer))
                .collect();
            match matching.as_slice() {
                [] => continue,
                [letter] => return Ok(*letter),
                _ => {
                    return Err(DefinitionError::AmbiguousAnswer {
                        question: self.question.clone(),
                        answer: self.answer.clone(),
                    })
                }
            }
        }
        self.answer
            .parse::<Letter>()
            .map_err(|_| DefinitionError::UnresolvedAnswer {
                question: self.question.clone(),
                answer: self.answer.clone(),
            })
    }
}

impl std::convert::TryFrom<RawQuestion> for Question {
    type Error = DefinitionError;

    fn try_from(raw_question: RawQuestion) -> Result<Self, Self::Error> {
        let options = [
            raw_question.option_a.clone(),
            raw_question.option_b.clone(),
            raw_question.option_c.clone(),
            raw_question.option_d.clone(),
        ];
        let answer = raw_question.resolve_answer(&options)?;
        Ok(Question {
            text: raw_question.question,
            options,
            answer,
        })
    }
}
