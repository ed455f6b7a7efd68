use rand::Rng;
use std::sync::Arc;
use std::thread;
use tracing::{debug, info};

use self::definition::*;
use self::selection::QuestionCount;
use self::session::QuizSession;
use self::settings::Settings;
use self::timer::{AnswerResult, TimedAnswerCollector};
use crate::input::AnswerInput;
use crate::output::{Message, Output};

pub mod definition;
pub mod selection;
pub mod session;
pub mod settings;
pub mod timer;

#[cfg(test)]
mod tests;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct QuizReport {
    pub score: u32,
    pub total: usize,
}

pub struct Quiz<I, O> {
    definition: QuizDefinition,
    settings: Settings,
    collector: TimedAnswerCollector<I, O>,
    output: O,
}

impl<I: AnswerInput, O: Output + Clone> Quiz<I, O> {
    pub fn new(definition: QuizDefinition, settings: Settings, input: Arc<I>, output: O) -> Self {
        let collector = TimedAnswerCollector::new(input, output.clone(), settings.tick);
        Quiz {
            definition,
            settings,
            collector,
            output,
        }
    }

    pub fn run<R: Rng + ?Sized>(&self, count: QuestionCount, rng: &mut R) -> QuizReport {
        let questions = self.definition.get_questions();
        let mut session = QuizSession::start(questions.len(), count, rng);
        info!("Starting quiz with {} questions", session.total());

        self.output.say(&Message::QuizBegins);
        thread::sleep(self.settings.intro_pause);

        while let Some(index) = session.current_question() {
            let question = &questions[index];
            self.output.clear();
            self.output.say(&Message::QuestionHeader {
                number: session.question_number(),
                total: session.total(),
                score: session.score(),
                asked: session.asked_so_far(),
            });

            let is_correct = self.ask(question);
            session.record_answer(is_correct);
            thread::sleep(self.settings.feedback_pause);
        }

        self.output.clear();
        let report = QuizReport {
            score: session.score(),
            total: session.total(),
        };
        self.output.say(&Message::QuizResults {
            score: report.score,
            total: report.total,
        });
        report
    }

    fn ask(&self, question: &Question) -> bool {
        self.output.say(&Message::QuestionBegins(question.clone()));
        self.output.say(&Message::AnswerPrompt);

        let result = self.collector.collect(self.settings.time_limit_seconds);
        debug!("Answer result: {:?}", result);
        let is_correct = match &result {
            AnswerResult::Answered(letter) => question.is_correct(*letter),
            AnswerResult::Invalid(raw) => {
                self.output.say(&Message::InvalidInput(raw.clone()));
                false
            }
            AnswerResult::TimedOut => {
                self.output.say(&Message::TimeUp);
                false
            }
        };

        if is_correct {
            self.output.say(&Message::GuessCorrect);
        } else {
            self.output.say(&Message::GuessIncorrect(question.clone()));
        }
        is_correct
    }
}
