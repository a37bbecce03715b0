// src/main.rs

use std::ffi::OsString;

use nestlog::config::EnvSnapshot;
use nestlog::{logging, run};

fn main() {
    let argv: Vec<OsString> = std::env::args_os().collect();
    let env = EnvSnapshot::capture();

    if let Err(err) = logging::init_logging(&env) {
        eprintln!("nestlog: {err}");
    }

    let invoked_as = argv
        .first()
        .map(|a| a.to_string_lossy().into_owned())
        .unwrap_or_else(|| "nestlog".to_string());

    match run(argv, &env) {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("nestlog {invoked_as}: {err}");
            std::process::exit(err.exit_code());
        }
    }
}
