// src/exec/backend.rs

//! Pluggable process backend.
//!
//! The supervisor talks to a `ProcessBackend` instead of `std::process`
//! directly, so tests can script spawn results and exit statuses without
//! running anything.

use std::ffi::OsString;
use std::os::unix::process::CommandExt;
use std::process::Command;

use nix::errno::Errno;
use nix::sys::wait::{WaitStatus, wait};
use tracing::{debug, trace};

use crate::context::InvocationContext;
use crate::errors::{NestlogError, Result};

/// Everything needed to start the wrapped tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchPlan {
    /// Resolved through `PATH` like `execvp`.
    pub program: OsString,
    /// Passed through unchanged as the child's argument 0.
    pub argv0: OsString,
    pub args: Vec<OsString>,
    /// Set on the child only.
    pub exports: Vec<(OsString, OsString)>,
}

impl LaunchPlan {
    pub fn from_context(ctx: &InvocationContext) -> Self {
        let args = ctx.arguments().iter().skip(1).cloned().collect();
        let argv0 = ctx
            .arguments()
            .first()
            .cloned()
            .unwrap_or_else(|| ctx.wrapped_command().to_os_string());

        Self {
            program: ctx.wrapped_command().to_os_string(),
            argv0,
            args,
            exports: ctx.recursion().exports(),
        }
    }
}

/// How a reaped child ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChildStatus {
    Exited(i32),
    Signaled { signal: i32, name: String },
}

/// Result of one successful wait.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reaped {
    pub pid: i32,
    pub status: ChildStatus,
}

/// Trait abstracting process creation and reaping.
pub trait ProcessBackend {
    /// Start the child and return its pid.
    fn spawn(&mut self, plan: &LaunchPlan) -> Result<u32>;

    /// Block until any child terminates.
    fn wait_any(&mut self) -> Result<Reaped>;
}

/// Backend used in production.
#[derive(Debug, Default)]
pub struct RealProcessBackend;

impl ProcessBackend for RealProcessBackend {
    fn spawn(&mut self, plan: &LaunchPlan) -> Result<u32> {
        let mut cmd = Command::new(&plan.program);
        cmd.arg0(&plan.argv0).args(&plan.args);
        for (name, value) in &plan.exports {
            cmd.env(name, value);
        }

        let child = cmd.spawn().map_err(|source| NestlogError::Spawn {
            program: plan.program.to_string_lossy().into_owned(),
            source,
        })?;

        debug!(
            program = %plan.program.to_string_lossy(),
            pid = child.id(),
            "spawned wrapped command"
        );

        // Reaped through wait(2) below; the handle itself is not needed.
        Ok(child.id())
    }

    fn wait_any(&mut self) -> Result<Reaped> {
        loop {
            match wait() {
                Ok(WaitStatus::Exited(pid, code)) => {
                    return Ok(Reaped {
                        pid: pid.as_raw(),
                        status: ChildStatus::Exited(code),
                    });
                }
                Ok(WaitStatus::Signaled(pid, signal, _core_dumped)) => {
                    return Ok(Reaped {
                        pid: pid.as_raw(),
                        status: ChildStatus::Signaled {
                            signal: signal as i32,
                            name: signal.as_str().to_string(),
                        },
                    });
                }
                Ok(other) => {
                    return Err(NestlogError::Wait(format!("unexpected wait status {other:?}")));
                }
                Err(Errno::EINTR) => {
                    trace!("wait interrupted; retrying");
                }
                Err(errno) => return Err(NestlogError::Wait(errno.to_string())),
            }
        }
    }
}
