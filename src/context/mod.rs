// src/context/mod.rs

//! Per-process invocation context.
//!
//! - [`recursion`] resolves the nesting level and the exports for the child.
//! - [`identity`] queries pid/ppid/cwd and derives the short directory tail.
//!
//! [`InvocationContext`] is built once in `run` and passed by reference to
//! everything else. It never changes after construction.

pub mod identity;
pub mod recursion;

use std::ffi::{OsStr, OsString};
use std::path::Path;

pub use identity::{Identity, cwd_tail};
pub use recursion::RecursionState;

use crate::config::Settings;

/// Fallback program name when the wrapper was started with an empty argv.
const FALLBACK_ARGV0: &str = "nestlog";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationContext {
    recursion: RecursionState,
    self_pid: u32,
    parent_pid: u32,
    cwd_tail: String,
    arguments: Vec<OsString>,
    wrapped_command: OsString,
}

impl InvocationContext {
    /// `arguments` is the wrapper's full argv, argument 0 included.
    pub fn new(settings: &Settings, identity: Identity, arguments: Vec<OsString>) -> Self {
        let argv0 = arguments
            .first()
            .cloned()
            .unwrap_or_else(|| OsString::from(FALLBACK_ARGV0));
        let recursion = RecursionState::resolve(settings, &identity.cwd, &argv0);
        let cwd = identity.cwd.to_string_lossy();

        Self {
            recursion,
            self_pid: identity.pid,
            parent_pid: identity.ppid,
            cwd_tail: cwd_tail(&cwd).to_string(),
            arguments,
            wrapped_command: settings.wrapped_command.clone(),
        }
    }

    pub fn nesting_level(&self) -> u32 {
        self.recursion.level()
    }

    pub fn recursion(&self) -> &RecursionState {
        &self.recursion
    }

    pub fn self_pid(&self) -> u32 {
        self.self_pid
    }

    pub fn parent_pid(&self) -> u32 {
        self.parent_pid
    }

    pub fn cwd_tail(&self) -> &str {
        &self.cwd_tail
    }

    pub fn arguments(&self) -> &[OsString] {
        &self.arguments
    }

    /// Name used to prefix diagnostics.
    pub fn argv0(&self) -> &OsStr {
        self.arguments
            .first()
            .map(OsString::as_os_str)
            .unwrap_or(OsStr::new(FALLBACK_ARGV0))
    }

    pub fn wrapped_command(&self) -> &OsStr {
        &self.wrapped_command
    }

    pub fn log_path(&self) -> Option<&Path> {
        self.recursion.log_path()
    }
}
