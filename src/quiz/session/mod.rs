use rand::seq::SliceRandom;
use rand::Rng;

use crate::quiz::selection::QuestionCount;


/// Progress through one run of the quiz.
#[derive(Clone, Debug)]
pub struct QuizSession {
    question_order: Vec<usize>,
    current: usize,
    score: u32,
}

impl QuizSession {
    /// Picks a random subset of `available` question indices. Requests for
    /// more questions than exist are clamped.
    pub fn start<R: Rng + ?Sized>(available: usize, count: QuestionCount, rng: &mut R) -> Self {
        let mut question_order: Vec<usize> = (0..available).collect();
        question_order.shuffle(rng);
        question_order.truncate(count.resolve(available));
        QuizSession {
            question_order,
            current: 0,
            score: 0,
        }
    }

    pub fn current_question(&self) -> Option<usize> {
        self.question_order.get(self.current).copied()
    }

    pub fn record_answer(&mut self, is_correct: bool) {
        if self.is_over() {
            return;
        }
        if is_correct {
            self.score += 1;
        }
        self.current += 1;
    }

    /// One-based number of the current question.
    pub fn question_number(&self) -> usize {
        self.current + 1
    }

    pub fn asked_so_far(&self) -> usize {
        self.current
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn total(&self) -> usize {
        self.question_order.len()
    }

    pub fn is_over(&self) -> bool {
        self.current >= self.question_order.len()
    }
}
