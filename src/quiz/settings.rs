use std::time::Duration;

#[derive(Clone, Debug)]
pub struct Settings {
    pub time_limit_seconds: u32,
    /// Length of one countdown step.
    pub tick: Duration,
    pub intro_pause: Duration,
    pub feedback_pause: Duration,
    pub count_choices: Vec<usize>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            time_limit_seconds: 15,
            tick: Duration::from_secs(1),
            intro_pause: Duration::from_secs(2),
            feedback_pause: Duration::from_secs(3),
            count_choices: vec![10, 15],
        }
    }
}
