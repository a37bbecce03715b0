// src/record/writer.rs

//! Appending rendered records to their destination.
//!
//! The log file is opened in append mode for each record and closed right
//! after, so the handle is never held across the wait for the child. Each
//! record goes out in a single `write_all` so concurrent wrappers sharing the
//! file rely on O_APPEND to keep short lines whole. Very long argument lists
//! can still interleave; nothing here coordinates writers.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::PathBuf;

use tracing::{debug, warn};

/// Where rendered records go.
///
/// Production uses [`AppendLog`]; tests can collect lines in memory.
pub trait RecordSink {
    /// Write one rendered record. Failures are absorbed by the sink.
    fn write_record(&mut self, text: &str);
}

/// Where a record actually ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    File,
    Stdout,
}

/// Appends to `path`, or to stdout when no path is configured or the file
/// cannot be opened.
#[derive(Debug, Clone, Default)]
pub struct AppendLog {
    path: Option<PathBuf>,
}

impl AppendLog {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }

    /// Write `text` to the file, or to `fallback` if there is no usable file.
    pub fn write_with_fallback<W: Write>(&self, text: &str, fallback: &mut W) -> Destination {
        if let Some(path) = &self.path {
            match OpenOptions::new().append(true).create(true).open(path) {
                Ok(mut file) => {
                    if let Err(e) = file.write_all(text.as_bytes()) {
                        warn!(path = %path.display(), error = %e, "failed to append log record");
                    }
                    return Destination::File;
                }
                Err(e) => {
                    debug!(
                        path = %path.display(),
                        error = %e,
                        "cannot open log file; writing record to stdout"
                    );
                }
            }
        }

        if let Err(e) = fallback.write_all(text.as_bytes()).and_then(|_| fallback.flush()) {
            warn!(error = %e, "failed to write log record to stdout");
        }
        Destination::Stdout
    }
}

impl RecordSink for AppendLog {
    fn write_record(&mut self, text: &str) {
        let stdout = io::stdout();
        let mut lock = stdout.lock();
        self.write_with_fallback(text, &mut lock);
    }
}
