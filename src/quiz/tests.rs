use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;

use super::*;
use crate::input::mock::{GatedInput, ScriptedInput};
use crate::output::mock::{Entry, MockOutput};

struct ContextBuilder {
    rows: Vec<String>,
    settings: Settings,
}

impl ContextBuilder {
    fn new() -> Self {
        ContextBuilder {
            rows: vec![
                "Sky colour?,Green,Blue,Red,Black,Blue".to_owned(),
                "2 + 2?,3,4,5,22,4".to_owned(),
                "Largest planet?,Mars,Jupiter,Venus,Earth,B".to_owned(),
            ],
            settings: Settings {
                time_limit_seconds: 3,
                tick: Duration::from_millis(10),
                intro_pause: Duration::default(),
                feedback_pause: Duration::default(),
                count_choices: vec![1, 2],
            },
        }
    }

    fn build<I: AnswerInput>(self, input: I) -> Context<I> {
        let csv = format!(
            "question,option_a,option_b,option_c,option_d,answer\n{}\n",
            self.rows.join("\n")
        );
        let definition = QuizDefinition::from_reader(csv.as_bytes()).unwrap();
        let output = MockOutput::new();
        let quiz = Quiz::new(definition, self.settings, Arc::new(input), output.clone());
        Context { quiz, output }
    }
}

struct Context<I> {
    quiz: Quiz<I, MockOutput>,
    output: MockOutput,
}

impl<I: AnswerInput> Context<I> {
    fn run(&self, count: QuestionCount) -> QuizReport {
        self.quiz.run(count, &mut StdRng::seed_from_u64(7))
    }
}

#[test]
fn scores_correct_answers() {
    let input = ScriptedInput::new()
        .immediate("b")
        .immediate("B")
        .immediate(" b ");
    let ctx = ContextBuilder::new().build(input);

    let report = ctx.run(QuestionCount::All);

    assert_eq!(report, QuizReport { score: 3, total: 3 });
    let messages = ctx.output.flush();
    assert_eq!(
        messages.iter().filter(|m| **m == Message::GuessCorrect).count(),
        3
    );
    assert_eq!(
        messages.last(),
        Some(&Message::QuizResults { score: 3, total: 3 })
    );
}

#[test]
fn wrong_invalid_and_missing_answers_score_nothing() {
    let input = ScriptedInput::new().immediate("a").immediate("what");
    let ctx = ContextBuilder::new().build(input);

    let report = ctx.run(QuestionCount::All);

    assert_eq!(report, QuizReport { score: 0, total: 3 });
    let messages = ctx.output.flush();
    assert!(messages.contains(&Message::InvalidInput("WHAT".to_owned())));
    assert!(messages.contains(&Message::TimeUp));
    let reveals = messages
        .iter()
        .filter(|m| matches!(m, Message::GuessIncorrect(_)))
        .count();
    assert_eq!(reveals, 3);
}

#[test]
fn timed_out_question_reveals_answer() {
    let (input, _gates) = GatedInput::new(1);
    let ctx = ContextBuilder::new().build(input);

    let report = ctx.run(QuestionCount::Exactly(1));

    assert_eq!(report, QuizReport { score: 0, total: 1 });
    assert!(ctx.output.contains_message(&Message::TimeUp));
    let messages = ctx.output.flush();
    let asked = messages
        .iter()
        .find_map(|m| match m {
            Message::QuestionBegins(question) => Some(question.clone()),
            _ => None,
        })
        .unwrap();
    assert!(messages.contains(&Message::GuessIncorrect(asked)));
}

#[test]
fn headers_track_progress_and_score() {
    let input = ScriptedInput::new().immediate("b").immediate("a");
    let ctx = ContextBuilder::new().build(input);

    ctx.run(QuestionCount::Exactly(2));

    let headers: Vec<Message> = ctx
        .output
        .flush()
        .into_iter()
        .filter(|m| matches!(m, Message::QuestionHeader { .. }))
        .collect();
    assert_eq!(
        headers,
        vec![
            Message::QuestionHeader {
                number: 1,
                total: 2,
                score: 0,
                asked: 0
            },
            Message::QuestionHeader {
                number: 2,
                total: 2,
                score: 1,
                asked: 1
            },
        ]
    );
}

#[test]
fn clears_screen_before_each_question_and_results() {
    let input = ScriptedInput::new().immediate("b").immediate("b");
    let ctx = ContextBuilder::new().build(input);

    ctx.run(QuestionCount::Exactly(2));

    let clears = ctx
        .output
        .flush_entries()
        .into_iter()
        .filter(|e| *e == Entry::Clear)
        .count();
    assert_eq!(clears, 3);
}

#[test]
fn announces_quiz_start() {
    let ctx = ContextBuilder::new().build(ScriptedInput::new());
    ctx.run(QuestionCount::Exactly(1));
    assert_eq!(ctx.output.flush().first(), Some(&Message::QuizBegins));
}
