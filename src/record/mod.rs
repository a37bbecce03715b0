// src/record/mod.rs

//! Event records and the line-oriented log they are written to.
//!
//! - [`timing`] owns the start/end timestamps of one child run.
//! - [`event`] describes a single `start` or `exit(code)` transition.
//! - [`format`] renders a record to its text line.
//! - [`writer`] appends rendered lines to `LOG_PATH` (or stdout).

pub mod event;
pub mod format;
pub mod timing;
pub mod writer;

pub use event::{EventKind, EventRecord};
pub use format::render;
pub use timing::TimingSpan;
pub use writer::{AppendLog, RecordSink};
