use anyhow::Result;
use std::sync::mpsc::{sync_channel, RecvTimeoutError, SyncSender};
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tracing::{debug, warn};

use crate::input::AnswerInput;
use crate::output::Output;
use crate::quiz::definition::Letter;


#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AnswerResult {
    Answered(Letter),
    /// Normalized text that is not one of the accepted letters.
    Invalid(String),
    TimedOut,
}

fn normalize(line: &str) -> String {
    line.trim().to_uppercase()
}

fn classify(raw: String) -> AnswerResult {
    match raw.parse::<Letter>() {
        Ok(letter) => AnswerResult::Answered(letter),
        Err(_) => AnswerResult::Invalid(raw),
    }
}

/// Waits for one answer while a countdown runs.
///
/// Every call spawns its own reader thread and its own single-slot channel.
/// When the countdown runs out the reader is detached. It may still be blocked
/// on the input, and whatever it reads later goes into a channel nobody
/// listens to anymore.
pub struct TimedAnswerCollector<I, O> {
    input: Arc<I>,
    output: O,
    tick: Duration,
}

impl<I: AnswerInput, O: Output> TimedAnswerCollector<I, O> {
    pub fn new(input: Arc<I>, output: O, tick: Duration) -> Self {
        TimedAnswerCollector {
            input,
            output,
            tick,
        }
    }

    /// Counts down from `time_limit_seconds` to zero inclusive, one tick per
    /// step, so a limit of zero still checks for an answer once.
    pub fn collect(&self, time_limit_seconds: u32) -> AnswerResult {
        let (sender, receiver) = sync_channel(1);
        if let Err(e) = self.spawn_reader(sender) {
            warn!("Could not start answer reader: {}", e);
            return AnswerResult::TimedOut;
        }

        for seconds_left in (0..=time_limit_seconds).rev() {
            self.output.countdown(seconds_left);
            match receiver.recv_timeout(self.tick) {
                Ok(Ok(Some(raw))) => {
                    self.output.end_countdown();
                    return classify(raw);
                }
                Ok(Ok(None)) => {
                    self.output.end_countdown();
                    warn!("Input stream closed while waiting for an answer");
                    return AnswerResult::TimedOut;
                }
                Ok(Err(e)) => {
                    self.output.end_countdown();
                    warn!("Could not read answer: {:#}", e);
                    return AnswerResult::TimedOut;
                }
                Err(RecvTimeoutError::Timeout) => continue,
                Err(RecvTimeoutError::Disconnected) => {
                    self.output.end_countdown();
                    warn!("Answer reader stopped without reporting");
                    return AnswerResult::TimedOut;
                }
            }
        }

        self.output.end_countdown();
        debug!("No answer after {}s, detaching reader", time_limit_seconds);
        AnswerResult::TimedOut
    }

    fn spawn_reader(&self, slot: SyncSender<Result<Option<String>>>) -> std::io::Result<()> {
        let input = self.input.clone();
        thread::Builder::new()
            .name("answer-reader".to_owned())
            .spawn(move || {
                let answer = input.read_line().map(|line| line.map(|l| normalize(&l)));
                // Fails once the collector has given up on this answer.
                if slot.try_send(answer).is_err() {
                    debug!("Discarding answer that arrived after the deadline");
                }
            })?;
        Ok(())
    }
}
