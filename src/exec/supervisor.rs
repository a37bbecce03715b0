// src/exec/supervisor.rs

//! Launch-then-supervise lifecycle of the wrapped tool.
//!
//! ```text
//! Created -> Running -> Exited(code)
//!                    -> Signaled(signal)
//!                    -> WaitFailed
//! ```
//!
//! The start record is written after the spawn succeeds and before the
//! blocking wait; the exit record only after a normal exit. Signal deaths,
//! failed waits and pid mismatches produce no record and surface as errors.
//!
//! A tool that cannot be executed is logged like any other failing run:
//! start, then `exit(127)` (126 if not executable), with pid 0 since no
//! child ever existed.

use tracing::{debug, info};

use crate::context::InvocationContext;
use crate::errors::{NestlogError, Result};

/// Pid logged for a child that could not be created.
const NO_CHILD_PID: u32 = 0;
use crate::exec::backend::{ChildStatus, LaunchPlan, ProcessBackend};
use crate::record::{EventRecord, RecordSink, TimingSpan, render};

/// Lifecycle state of the supervised child.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildState {
    Created,
    Running { pid: u32 },
    Exited { pid: u32, code: i32 },
    Signaled { pid: u32, signal: i32 },
    WaitFailed,
}

impl ChildState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, ChildState::Created | ChildState::Running { .. })
    }
}

pub struct Supervisor<'a, B, S> {
    ctx: &'a InvocationContext,
    backend: B,
    sink: S,
    state: ChildState,
}

impl<'a, B: ProcessBackend, S: RecordSink> Supervisor<'a, B, S> {
    pub fn new(ctx: &'a InvocationContext, backend: B, sink: S) -> Self {
        Self {
            ctx,
            backend,
            sink,
            state: ChildState::Created,
        }
    }

    pub fn state(&self) -> ChildState {
        self.state
    }

    /// Give back the backend and sink, e.g. to inspect them in tests.
    pub fn into_parts(self) -> (B, S) {
        (self.backend, self.sink)
    }

    /// Run the child to completion and return the exit code to mirror.
    pub fn run(&mut self) -> Result<i32> {
        let plan = LaunchPlan::from_context(self.ctx);
        let mut span = TimingSpan::start_now();

        let pid = match self.backend.spawn(&plan) {
            Ok(pid) => pid,
            Err(err @ NestlogError::Spawn { .. }) => {
                return Ok(self.record_exec_failure(&mut span, &err));
            }
            Err(err) => return Err(err),
        };
        self.state = ChildState::Running { pid };
        self.sink
            .write_record(&render(&EventRecord::start(self.ctx, pid, &span)));

        debug!(pid, level = self.ctx.nesting_level(), "waiting for child");
        let waited = self.backend.wait_any();
        span.finish_now();

        let reaped = match waited {
            Ok(reaped) => reaped,
            Err(err) => {
                self.state = ChildState::WaitFailed;
                return Err(err);
            }
        };

        if reaped.pid != pid as i32 {
            self.state = ChildState::WaitFailed;
            return Err(NestlogError::PidMismatch {
                expected: pid,
                actual: reaped.pid,
            });
        }

        match reaped.status {
            ChildStatus::Exited(code) => {
                self.state = ChildState::Exited { pid, code };
                self.sink
                    .write_record(&render(&EventRecord::exit(self.ctx, pid, &span, code)));
                info!(
                    pid,
                    exit_code = code,
                    level = self.ctx.nesting_level(),
                    elapsed_ms = span.elapsed().map(|d| d.num_milliseconds()),
                    "wrapped command exited"
                );
                Ok(code)
            }
            ChildStatus::Signaled { signal, name } => {
                self.state = ChildState::Signaled { pid, signal };
                Err(NestlogError::Signaled { signal, name })
            }
        }
    }

    fn record_exec_failure(&mut self, span: &mut TimingSpan, err: &NestlogError) -> i32 {
        let code = err.exit_code();
        info!(error = %err, exit_code = code, "wrapped command could not be executed");

        self.sink
            .write_record(&render(&EventRecord::start(self.ctx, NO_CHILD_PID, span)));
        span.finish_now();
        self.state = ChildState::Exited {
            pid: NO_CHILD_PID,
            code,
        };
        self.sink
            .write_record(&render(&EventRecord::exit(self.ctx, NO_CHILD_PID, span, code)));
        code
    }
}
