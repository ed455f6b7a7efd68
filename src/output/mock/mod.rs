use parking_lot::RwLock;
use std::sync::Arc;

use crate::output::{Message, Output};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Entry {
    Text(Message),
    Countdown(u32),
    CountdownEnd,
    Clear,
}

#[derive(Clone, Default)]
pub struct MockOutput {
    entries: Arc<RwLock<Vec<Entry>>>,
}

impl MockOutput {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn flush(&self) -> Vec<Message> {
        self.flush_entries()
            .into_iter()
            .filter_map(|entry| match entry {
                Entry::Text(message) => Some(message),
                _ => None,
            })
            .collect()
    }

    pub fn flush_entries(&self) -> Vec<Entry> {
        std::mem::replace(&mut *self.entries.write(), Vec::new())
    }

    pub fn contains_message(&self, message: &Message) -> bool {
        self.entries
            .read()
            .iter()
            .any(|entry| entry == &Entry::Text(message.clone()))
    }

    pub fn countdowns(&self) -> Vec<u32> {
        self.entries
            .read()
            .iter()
            .filter_map(|entry| match entry {
                Entry::Countdown(seconds_left) => Some(*seconds_left),
                _ => None,
            })
            .collect()
    }
}

impl Output for MockOutput {
    fn say(&self, message: &Message) {
        self.entries.write().push(Entry::Text(message.clone()));
    }

    fn countdown(&self, seconds_left: u32) {
        self.entries.write().push(Entry::Countdown(seconds_left));
    }

    fn end_countdown(&self) {
        self.entries.write().push(Entry::CountdownEnd);
    }

    fn clear(&self) {
        self.entries.write().push(Entry::Clear);
    }
}
