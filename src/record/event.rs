// src/record/event.rs

use std::ffi::OsString;

use chrono::{DateTime, Local, TimeDelta};

use crate::context::InvocationContext;
use crate::record::timing::TimingSpan;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Start,
    Exit(i32),
}

/// One transition of a supervised child, ready to be rendered.
///
/// `pid` is the child's pid; `parent_pid` is the wrapper's own parent. A
/// nested wrapper therefore logs its enclosing tool's pid in the first
/// column, which is how the call tree links up in the log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRecord<'a> {
    pub parent_pid: u32,
    pub pid: u32,
    pub emitted_at: DateTime<Local>,
    pub elapsed: Option<TimeDelta>,
    pub nesting_level: u32,
    pub cwd_tail: &'a str,
    pub arguments: &'a [OsString],
    pub kind: EventKind,
}

impl<'a> EventRecord<'a> {
    /// Record emitted right after the child was created.
    pub fn start(ctx: &'a InvocationContext, pid: u32, span: &TimingSpan) -> Self {
        Self::new(ctx, pid, span.start(), None, EventKind::Start)
    }

    /// Record emitted after the child exited normally.
    ///
    /// Falls back to the start instant if the span was never finished.
    pub fn exit(ctx: &'a InvocationContext, pid: u32, span: &TimingSpan, code: i32) -> Self {
        let emitted_at = span.end().unwrap_or_else(|| span.start());
        let elapsed = Some(span.elapsed().unwrap_or_else(TimeDelta::zero));
        Self::new(ctx, pid, emitted_at, elapsed, EventKind::Exit(code))
    }

    fn new(
        ctx: &'a InvocationContext,
        pid: u32,
        emitted_at: DateTime<Local>,
        elapsed: Option<TimeDelta>,
        kind: EventKind,
    ) -> Self {
        Self {
            parent_pid: ctx.parent_pid(),
            pid,
            emitted_at,
            elapsed,
            nesting_level: ctx.nesting_level(),
            cwd_tail: ctx.cwd_tail(),
            arguments: ctx.arguments(),
            kind,
        }
    }

    /// Top-level exits get a blank line after them in the log.
    pub fn closes_top_level_run(&self) -> bool {
        self.nesting_level == 0 && matches!(self.kind, EventKind::Exit(_))
    }
}
