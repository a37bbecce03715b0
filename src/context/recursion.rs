// src/context/recursion.rs

//! Recursion-depth propagation across wrapper generations.
//!
//! A wrapper at level `L` exports `NEST_LEVEL=L+1` to its child. If the child
//! is (eventually) another wrapper, it reads `L+1`; a missing variable means
//! level 0. Only the top-level wrapper resolves a relative `LOG_PATH` against
//! its working directory, and it re-exports the absolute form so every
//! descendant writes to the same file regardless of where it runs.

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::Settings;
use crate::config::model::{LOG_PATH_VAR, MAKE_VAR, NEST_LEVEL_VAR};

/// Recursion state resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecursionState {
    level: u32,
    log_path: Option<PathBuf>,
    log_path_rewritten: bool,
    make_export: Option<OsString>,
}

impl RecursionState {
    /// Resolve the state of this process.
    ///
    /// `cwd` is only consulted at level 0, for relative log paths.
    pub fn resolve(settings: &Settings, cwd: &Path, argv0: &OsStr) -> Self {
        let Some(level) = settings.nest_level else {
            let (log_path, log_path_rewritten) = match &settings.log_path {
                Some(path) => {
                    let absolute = absolutize(path, cwd);
                    let rewritten = absolute != *path;
                    (Some(absolute), rewritten)
                }
                None => (None, false),
            };

            let make_export = (settings.export_make_var && !settings.make_var_present)
                .then(|| argv0.to_os_string());

            debug!(?log_path, log_path_rewritten, "top-level invocation");

            return Self {
                level: 0,
                log_path,
                log_path_rewritten,
                make_export,
            };
        };

        Self {
            level,
            log_path: settings.log_path.clone(),
            log_path_rewritten: false,
            make_export: None,
        }
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn is_top_level(&self) -> bool {
        self.level == 0
    }

    /// Level a same-tool child will read.
    pub fn child_level(&self) -> u32 {
        self.level.saturating_add(1)
    }

    pub fn log_path(&self) -> Option<&Path> {
        self.log_path.as_deref()
    }

    /// Variables to set on the child, and only on the child.
    ///
    /// `NEST_LEVEL` is always present. `LOG_PATH` appears only when this
    /// process rewrote it, and `MAKE` only when a top-level run fills it in.
    pub fn exports(&self) -> Vec<(OsString, OsString)> {
        let mut out = vec![(
            OsString::from(NEST_LEVEL_VAR),
            OsString::from(self.child_level().to_string()),
        )];

        if self.log_path_rewritten {
            if let Some(path) = &self.log_path {
                out.push((OsString::from(LOG_PATH_VAR), path.clone().into_os_string()));
            }
        }

        if let Some(make) = &self.make_export {
            out.push((OsString::from(MAKE_VAR), make.clone()));
        }

        out
    }
}

/// Join a relative path onto `cwd`; absolute paths come back unchanged.
pub fn absolutize(path: &Path, cwd: &Path) -> PathBuf {
    if path.is_absolute() || cwd.as_os_str().is_empty() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}
