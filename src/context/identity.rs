// src/context/identity.rs

use std::path::PathBuf;

use crate::errors::{NestlogError, Result};

/// OS-reported identity of the current process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub pid: u32,
    pub ppid: u32,
    pub cwd: PathBuf,
}

impl Identity {
    pub fn query() -> Result<Self> {
        let cwd = std::env::current_dir().map_err(NestlogError::CurrentDir)?;
        Ok(Self {
            cwd,
            ..Self::without_cwd()
        })
    }

    /// Identity for a process whose working directory is gone.
    pub fn without_cwd() -> Self {
        Self {
            pid: std::process::id(),
            ppid: std::os::unix::process::parent_id(),
            cwd: PathBuf::new(),
        }
    }
}

/// Reduce a directory path to its last two segments for display.
///
/// `/home/user/proj` becomes `user/proj`. Paths with fewer than three
/// segments (`/`, `/a`, `/a/b`, `a`) and the empty string come back as is.
pub fn cwd_tail(path: &str) -> &str {
    let Some(last) = path.rfind('/').filter(|&i| i > 0) else {
        return path;
    };
    match path[..last].rfind('/') {
        Some(prev) if prev > 0 => &path[prev + 1..],
        _ => path,
    }
}
