// src/lib.rs

pub mod config;
pub mod context;
pub mod errors;
pub mod exec;
pub mod logging;
pub mod record;

use std::ffi::OsString;

use tracing::{debug, warn};

use crate::config::{EnvSnapshot, load_settings};
use crate::context::{Identity, InvocationContext};
use crate::errors::Result;
use crate::exec::{ProcessBackend, RealProcessBackend, Supervisor};
use crate::record::{AppendLog, RecordSink};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - settings from the environment snapshot
/// - the invocation context (level, pids, cwd tail, argv)
/// - the real process backend and the append-mode log file
///
/// Returns the exit code the wrapper should exit with.
pub fn run(argv: Vec<OsString>, env: &EnvSnapshot) -> Result<i32> {
    let ctx = build_context(argv, env);
    let sink = AppendLog::new(ctx.log_path().map(|p| p.to_path_buf()));
    run_with(&ctx, RealProcessBackend, sink)
}

/// Resolve the immutable context for this process.
pub fn build_context(argv: Vec<OsString>, env: &EnvSnapshot) -> InvocationContext {
    let settings = load_settings(env);
    let identity = Identity::query().unwrap_or_else(|err| {
        warn!(error = %err, "continuing without a working directory");
        Identity::without_cwd()
    });

    let ctx = InvocationContext::new(&settings, identity, argv);
    debug!(
        level = ctx.nesting_level(),
        pid = ctx.self_pid(),
        ppid = ctx.parent_pid(),
        cwd = ctx.cwd_tail(),
        log_path = ?ctx.log_path(),
        "resolved invocation context"
    );
    ctx
}

/// Supervise one child with the given backend and sink.
pub fn run_with<B, S>(ctx: &InvocationContext, backend: B, sink: S) -> Result<i32>
where
    B: ProcessBackend,
    S: RecordSink,
{
    Supervisor::new(ctx, backend, sink).run()
}
