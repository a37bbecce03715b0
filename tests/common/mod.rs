#![allow(dead_code)]

use std::path::Path;
use std::process::{Command, Output};

use regex::Regex;

pub const BIN: &str = env!("CARGO_BIN_EXE_nestlog");

/// One parsed event line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine {
    pub ppid: u32,
    pub pid: u32,
    pub elapsed: String,
    pub level: u32,
    /// `None` for start lines.
    pub exit_code: Option<i32>,
    pub cwd_tail: String,
    pub args: String,
}

/// A `nestlog` command with `sh` as the wrapped tool and a clean
/// environment for the variables the wrapper reads.
pub fn nestlog(dir: &Path, log_path: &str, args: &[&str]) -> Command {
    let mut cmd = Command::new(BIN);
    cmd.current_dir(dir)
        .env_remove("NEST_LEVEL")
        .env_remove("MAKE")
        .env_remove("NESTLOG_TRACE")
        .env("WRAPPED_COMMAND", "sh")
        .env("LOG_PATH", log_path)
        .args(args);
    cmd
}

pub fn run(cmd: &mut Command) -> Output {
    cmd.output().expect("failed to run nestlog binary")
}

pub fn parse_log(contents: &str) -> Vec<LogLine> {
    let re = Regex::new(
        r"^\s*(\d+),\s*(\d+): \d\d:\d\d:\d\d\.\d{3} +(\d+:\d\d:\d\d\.\d{3}) \((\d+)\) (?:start  |exit\((-?\d+)\)) : (.*)/  (.*)$",
    )
    .unwrap();

    contents
        .lines()
        .filter(|l| !l.is_empty())
        .map(|l| {
            let caps = re
                .captures(l)
                .unwrap_or_else(|| panic!("unparseable log line: {l:?}"));
            LogLine {
                ppid: caps[1].parse().unwrap(),
                pid: caps[2].parse().unwrap(),
                elapsed: caps[3].to_string(),
                level: caps[4].parse().unwrap(),
                exit_code: caps.get(5).map(|m| m.as_str().parse().unwrap()),
                cwd_tail: caps[6].to_string(),
                args: caps[7].to_string(),
            }
        })
        .collect()
}

/// Elapsed column (`H:MM:SS.mmm`) in milliseconds.
pub fn elapsed_ms(elapsed: &str) -> u64 {
    let (h, rest) = elapsed.split_once(':').unwrap();
    let (m, rest) = rest.split_once(':').unwrap();
    let (s, ms) = rest.split_once('.').unwrap();
    let h: u64 = h.trim().parse().unwrap();
    let m: u64 = m.parse().unwrap();
    let s: u64 = s.parse().unwrap();
    let ms: u64 = ms.parse().unwrap();
    ((h * 60 + m) * 60 + s) * 1000 + ms
}
