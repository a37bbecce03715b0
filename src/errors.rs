// src/errors.rs

//! Crate-wide error type and the exit status each failure maps to.

use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum NestlogError {
    /// The wrapped executable could not be started at all.
    #[error("cannot execute '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("waiting for child failed: {0}")]
    Wait(String),

    #[error("pid {expected} {actual} unmatch")]
    PidMismatch { expected: u32, actual: i32 },

    #[error("child terminated by signal {signal} ({name})")]
    Signaled { signal: i32, name: String },

    #[error("cannot determine working directory: {0}")]
    CurrentDir(#[source] io::Error),
}

impl NestlogError {
    /// Exit status the wrapper reports for this failure.
    ///
    /// Exec failures follow the shell convention (127 not found, 126 not
    /// executable); everything else is a plain 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            NestlogError::Spawn { source, .. } => match source.kind() {
                io::ErrorKind::NotFound => 127,
                io::ErrorKind::PermissionDenied => 126,
                _ => 1,
            },
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, NestlogError>;
