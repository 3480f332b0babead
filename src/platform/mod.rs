//! Platform abstraction layer
//!
//! Handles the pieces that differ per host:
//! - Frame pacing (tick-to-rate)
//! - Input event sources

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use crate::input::InputEvent;

/// Holds a loop to a fixed tick rate
#[derive(Debug)]
pub struct FramePacer {
    period: Duration,
    next_deadline: Option<Instant>,
}

impl FramePacer {
    pub fn new(rate_hz: u32) -> Self {
        Self {
            period: Duration::from_secs(1) / rate_hz.max(1),
            next_deadline: None,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Time left until the next tick is due, measured from `now`.
    /// Falling more than a period behind resets the schedule instead of
    /// bursting to catch up.
    pub fn wait_time(&mut self, now: Instant) -> Duration {
        let deadline = match self.next_deadline {
            Some(d) if d + self.period >= now => d,
            _ => now,
        };
        self.next_deadline = Some(deadline + self.period);
        deadline.saturating_duration_since(now)
    }

    /// Sleep until the next tick is due
    pub fn tick(&mut self) {
        let wait = self.wait_time(Instant::now());
        if !wait.is_zero() {
            std::thread::sleep(wait);
        }
    }
}

/// A non-blocking source of input events
pub trait EventSource {
    /// Everything that arrived since the last poll
    fn poll(&mut self) -> Vec<InputEvent>;
}

/// Replays pre-recorded events, one batch per poll
#[derive(Debug, Default)]
pub struct ScriptedEvents {
    batches: VecDeque<Vec<InputEvent>>,
}

impl ScriptedEvents {
    pub fn new(batches: impl IntoIterator<Item = Vec<InputEvent>>) -> Self {
        Self {
            batches: batches.into_iter().collect(),
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.batches.is_empty()
    }
}

impl EventSource for ScriptedEvents {
    fn poll(&mut self) -> Vec<InputEvent> {
        self.batches.pop_front().unwrap_or_default()
    }
}
