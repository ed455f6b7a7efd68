use anyhow::*;
use std::convert::TryFrom;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use thiserror::Error;
use tracing::{info, warn};

pub mod question;

pub use question::{Letter, Question, RawQuestion};


#[derive(Debug, Error)]
pub enum DefinitionError {
    #[error("`{0}` is not one of A, B, C or D")]
    InvalidLetter(String),
    #[error("answer `{answer}` of question `{question}` matches no option")]
    UnresolvedAnswer { question: String, answer: String },
    #[error("answer `{answer}` of question `{question}` matches more than one option")]
    AmbiguousAnswer { question: String, answer: String },
    #[error("quiz file contains no questions")]
    Empty,
}

#[derive(Debug)]
pub struct QuizDefinition {
    questions: Vec<Question>,
}

impl QuizDefinition {
    pub fn open(source: &Path) -> Result<QuizDefinition> {
        let file = File::open(source)
            .with_context(|| format!("Could not open quiz file `{}`", source.display()))?;
        let definition = Self::from_reader(file)
            .with_context(|| format!("Could not read quiz file `{}`", source.display()))?;
        info!(
            "Loaded {} questions from {}",
            definition.questions.len(),
            source.display()
        );
        Ok(definition)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<QuizDefinition> {
        let mut questions = Vec::new();

        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        for (row, question) in csv_reader.deserialize().enumerate() {
            let raw_question: RawQuestion = question?;
            if raw_question.is_blank() {
                warn!("Skipping row {} without a question", row + 1);
                continue;
            }
            let question = Question::try_from(raw_question)
                .with_context(|| format!("Invalid question on row {}", row + 1))?;
            questions.push(question);
        }

        if questions.is_empty() {
            return Err(DefinitionError::Empty.into());
        }

        Ok(QuizDefinition { questions })
    }

    pub fn get_questions(&self) -> &Vec<Question> {
        &self.questions
    }
}
