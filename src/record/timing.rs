// src/record/timing.rs

use chrono::{DateTime, Local, TimeDelta};

/// Wall-clock span of one child run. `end` stays empty until the child
/// has been reaped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimingSpan {
    start: DateTime<Local>,
    end: Option<DateTime<Local>>,
}

impl TimingSpan {
    pub fn start_now() -> Self {
        Self::start_at(Local::now())
    }

    pub fn start_at(start: DateTime<Local>) -> Self {
        Self { start, end: None }
    }

    pub fn finish_now(&mut self) {
        self.finish_at(Local::now());
    }

    pub fn finish_at(&mut self, end: DateTime<Local>) {
        self.end = Some(end);
    }

    pub fn start(&self) -> DateTime<Local> {
        self.start
    }

    pub fn end(&self) -> Option<DateTime<Local>> {
        self.end
    }

    /// Time between start and end, never negative (the wall clock may step
    /// backwards while the child runs).
    pub fn elapsed(&self) -> Option<TimeDelta> {
        self.end
            .map(|end| (end - self.start).max(TimeDelta::zero()))
    }
}

/// `HH:MM:SS.mmm` in local time.
pub fn format_clock(at: &DateTime<Local>) -> String {
    at.format("%H:%M:%S%.3f").to_string()
}

/// `H:MM:SS.mmm` with the hour right-aligned to two columns.
pub fn format_elapsed(elapsed: TimeDelta) -> String {
    let total_ms = elapsed.num_milliseconds().max(0);
    let ms = total_ms % 1000;
    let total_secs = total_ms / 1000;
    let secs = total_secs % 60;
    let mins = (total_secs / 60) % 60;
    let hours = total_secs / 3600;
    format!("{hours:2}:{mins:02}:{secs:02}.{ms:03}")
}
