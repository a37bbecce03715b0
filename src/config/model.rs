// src/config/model.rs

use std::ffi::OsString;
use std::path::PathBuf;

/// Destination file for event lines.
pub const LOG_PATH_VAR: &str = "LOG_PATH";
/// Name or path of the real tool to run.
pub const WRAPPED_COMMAND_VAR: &str = "WRAPPED_COMMAND";
/// Recursion depth handed from one wrapper generation to the next.
pub const NEST_LEVEL_VAR: &str = "NEST_LEVEL";
/// Diagnostic verbosity for the wrapper itself.
pub const TRACE_VAR: &str = "NESTLOG_TRACE";
/// Variable recursive makefiles use to re-invoke make.
pub const MAKE_VAR: &str = "MAKE";

pub const DEFAULT_WRAPPED_COMMAND: &str = "make";

/// Settings derived from the environment snapshot.
///
/// `nest_level` is `None` when `NEST_LEVEL` was absent (or unusable), which
/// marks this process as a top-level invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub log_path: Option<PathBuf>,
    pub wrapped_command: OsString,
    pub nest_level: Option<u32>,
    /// Whether a top-level run exports `MAKE=<argv0>` for its descendants.
    pub export_make_var: bool,
    /// `MAKE` was already set in the environment.
    pub make_var_present: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_path: None,
            wrapped_command: OsString::from(DEFAULT_WRAPPED_COMMAND),
            nest_level: None,
            export_make_var: cfg!(target_os = "macos"),
            make_var_present: false,
        }
    }
}
