use std::collections::VecDeque;
use std::io;
use std::sync::{Arc, Mutex};

use nestlog::errors::{NestlogError, Result};
use nestlog::exec::{ChildStatus, LaunchPlan, ProcessBackend, Reaped};
use nestlog::record::RecordSink;

/// A fake backend that:
/// - records every launch plan it was handed
/// - hands out pids from a counter
/// - answers waits with scripted statuses for the last spawned pid
/// - optionally fails every spawn the way a missing executable does.
pub struct FakeProcessBackend {
    next_pid: u32,
    spawn_error: Option<io::ErrorKind>,
    last_pid: Option<u32>,
    statuses: VecDeque<ChildStatus>,
    launched: Arc<Mutex<Vec<LaunchPlan>>>,
}

impl FakeProcessBackend {
    pub fn new(launched: Arc<Mutex<Vec<LaunchPlan>>>) -> Self {
        Self {
            next_pid: 4000,
            spawn_error: None,
            last_pid: None,
            statuses: VecDeque::new(),
            launched,
        }
    }

    /// Queue the status the next wait reports.
    pub fn then(mut self, status: ChildStatus) -> Self {
        self.statuses.push_back(status);
        self
    }

    /// Every spawn fails with `kind` after recording the plan.
    pub fn failing_spawn(mut self, kind: io::ErrorKind) -> Self {
        self.spawn_error = Some(kind);
        self
    }

    pub fn exiting_with(launched: Arc<Mutex<Vec<LaunchPlan>>>, code: i32) -> Self {
        Self::new(launched).then(ChildStatus::Exited(code))
    }
}

impl ProcessBackend for FakeProcessBackend {
    fn spawn(&mut self, plan: &LaunchPlan) -> Result<u32> {
        self.launched.lock().unwrap().push(plan.clone());
        if let Some(kind) = self.spawn_error {
            return Err(NestlogError::Spawn {
                program: plan.program.to_string_lossy().into_owned(),
                source: io::Error::from(kind),
            });
        }
        let pid = self.next_pid;
        self.next_pid += 1;
        self.last_pid = Some(pid);
        Ok(pid)
    }

    fn wait_any(&mut self) -> Result<Reaped> {
        let pid = self
            .last_pid
            .take()
            .ok_or_else(|| NestlogError::Wait("no child processes".into()))?;
        let status = self
            .statuses
            .pop_front()
            .ok_or_else(|| NestlogError::Wait("no scripted status".into()))?;
        Ok(Reaped {
            pid: pid as i32,
            status,
        })
    }
}

/// A sink that keeps rendered records in memory.
#[derive(Clone, Default)]
pub struct MemorySink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }

    /// Everything written, concatenated as it would appear in a file.
    pub fn contents(&self) -> String {
        self.lines.lock().unwrap().concat()
    }
}

impl RecordSink for MemorySink {
    fn write_record(&mut self, text: &str) {
        self.lines.lock().unwrap().push(text.to_string());
    }
}
