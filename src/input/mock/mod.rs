use anyhow::*;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::thread;
use std::time::Duration;

use crate::input::AnswerInput;

/// Replays lines, each one after its own delay. Once the script runs out
/// the stream reports itself closed.
#[derive(Default)]
pub struct ScriptedInput {
    script: Mutex<VecDeque<(Duration, String)>>,
}

impl ScriptedInput {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn line(self, delay: Duration, line: &str) -> Self {
        self.script.lock().push_back((delay, line.to_owned()));
        self
    }

    pub fn immediate(self, line: &str) -> Self {
        self.line(Duration::default(), line)
    }
}

impl AnswerInput for ScriptedInput {
    fn read_line(&self) -> Result<Option<String>> {
        let next = self.script.lock().pop_front();
        match next {
            Some((delay, line)) => {
                thread::sleep(delay);
                Ok(Some(line))
            }
            None => Ok(None),
        }
    }
}

/// Every read blocks until the test releases it through the matching `Gate`.
/// Reads are matched to gates in the order they start.
pub struct GatedInput {
    pending: Mutex<VecDeque<Receiver<Option<String>>>>,
}

pub struct Gate {
    sender: Sender<Option<String>>,
}

impl Gate {
    pub fn release(&self, line: &str) {
        self.sender.send(Some(line.to_owned())).ok();
    }

    pub fn close(&self) {
        self.sender.send(None).ok();
    }
}

impl GatedInput {
    pub fn new(reads: usize) -> (Self, Vec<Gate>) {
        let mut pending = VecDeque::new();
        let mut gates = Vec::new();
        for _ in 0..reads {
            let (sender, receiver) = channel();
            pending.push_back(receiver);
            gates.push(Gate { sender });
        }
        let input = GatedInput {
            pending: Mutex::new(pending),
        };
        (input, gates)
    }
}

impl AnswerInput for GatedInput {
    fn read_line(&self) -> Result<Option<String>> {
        let receiver = self
            .pending
            .lock()
            .pop_front()
            .context("No more gated reads")?;
        Ok(receiver.recv().unwrap_or(None))
    }
}

/// Fails every read, like a broken terminal.
pub struct BrokenInput;

impl AnswerInput for BrokenInput {
    fn read_line(&self) -> Result<Option<String>> {
        Err(anyhow!("input device unavailable"))
    }
}
