// src/ticker.rs

//! Fixed-rate frame ticks.

use log::trace;
use std::time::{Duration, Instant};

/// Blocks the frame loop until the next tick.
pub trait Ticker {
    fn wait(&mut self);
}

/// Ticks at a fixed interval measured from the first wait.
///
/// Like a channel-based ticker that drops ticks for a slow receiver, a frame
/// that overruns does not cause a burst of catch-up ticks: the schedule
/// restarts from the late wake-up.
#[derive(Debug)]
pub struct FixedTicker {
    interval: Duration,
    next: Option<Instant>,
}

impl FixedTicker {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next: None,
        }
    }

    pub fn from_micros(micros: u64) -> Self {
        Self::new(Duration::from_micros(micros))
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Returns how long to sleep when woken at `now`, and advances the
    /// schedule past `now`.
    pub fn schedule(&mut self, now: Instant) -> Duration {
        let deadline = *self.next.get_or_insert(now + self.interval);
        let sleep = deadline.saturating_duration_since(now);
        let mut next = deadline + self.interval;
        if next <= now {
            next = now + self.interval;
        }
        self.next = Some(next);
        sleep
    }
}

impl Ticker for FixedTicker {
    fn wait(&mut self) {
        let sleep = self.schedule(Instant::now());
        trace!("FixedTicker: sleeping {:?}", sleep);
        if !sleep.is_zero() {
            std::thread::sleep(sleep);
        }
    }
}

/// Ticker that never blocks and counts its waits.
#[derive(Debug, Default)]
pub struct CountingTicker {
    ticks: usize,
}

impl CountingTicker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ticks(&self) -> usize {
        self.ticks
    }
}

impl Ticker for CountingTicker {
    fn wait(&mut self) {
        self.ticks += 1;
    }
}
