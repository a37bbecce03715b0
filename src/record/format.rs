// src/record/format.rs

//! Text layout of one event line:
//!
//! ```text
//! <ppid>,<pid>: <HH:MM:SS.mmm> <H:MM:SS.mmm> (<level>) start   : <tail>/  <argv...>
//! <ppid>,<pid>: <HH:MM:SS.mmm> <H:MM:SS.mmm> (<level>) exit(<code>) : <tail>/  <argv...>
//! ```
//!
//! Pids are right-aligned to three columns. The elapsed column of a start
//! line is always zero.

use std::fmt::Write as _;

use chrono::TimeDelta;

use crate::record::event::{EventKind, EventRecord};
use crate::record::timing::{format_clock, format_elapsed};

/// Render a record to the exact bytes appended to the log, trailing
/// newline(s) included.
pub fn render(record: &EventRecord<'_>) -> String {
    let mut line = String::with_capacity(128);

    // Writing into a String cannot fail.
    let _ = write!(
        line,
        "{:3},{:3}: {} {} ({}) ",
        record.parent_pid,
        record.pid,
        format_clock(&record.emitted_at),
        format_elapsed(record.elapsed.unwrap_or_else(TimeDelta::zero)),
        record.nesting_level,
    );

    match record.kind {
        EventKind::Start => line.push_str("start   : "),
        EventKind::Exit(code) => {
            let _ = write!(line, "exit({code}) : ");
        }
    }

    line.push_str(record.cwd_tail);
    line.push_str("/  ");

    let args: Vec<_> = record
        .arguments
        .iter()
        .map(|a| a.to_string_lossy())
        .collect();
    line.push_str(&args.join(" "));

    line.push('\n');
    if record.closes_top_level_run() {
        line.push('\n');
    }

    line
}
