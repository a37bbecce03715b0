use std::ffi::OsString;
use std::path::PathBuf;

use nestlog::config::{EnvSnapshot, load_settings};
use nestlog::context::{Identity, InvocationContext};

/// Builder for `EnvSnapshot` to simplify test setup.
#[derive(Default)]
pub struct EnvBuilder {
    vars: Vec<(OsString, OsString)>,
}

impl EnvBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn var(mut self, name: &str, value: &str) -> Self {
        self.vars.push((name.into(), value.into()));
        self
    }

    pub fn log_path(self, path: &str) -> Self {
        self.var("LOG_PATH", path)
    }

    pub fn nest_level(self, level: u32) -> Self {
        self.var("NEST_LEVEL", &level.to_string())
    }

    pub fn wrapped_command(self, cmd: &str) -> Self {
        self.var("WRAPPED_COMMAND", cmd)
    }

    pub fn build(self) -> EnvSnapshot {
        self.vars.into_iter().collect()
    }
}

/// Builder for `InvocationContext` with a fixed, fake identity.
pub struct ContextBuilder {
    env: EnvSnapshot,
    identity: Identity,
    argv: Vec<OsString>,
}

impl ContextBuilder {
    pub fn new() -> Self {
        Self {
            env: EnvSnapshot::default(),
            identity: Identity {
                pid: 1000,
                ppid: 999,
                cwd: PathBuf::from("/home/user/proj"),
            },
            argv: vec![OsString::from("make")],
        }
    }

    pub fn env(mut self, env: EnvSnapshot) -> Self {
        self.env = env;
        self
    }

    pub fn cwd(mut self, cwd: &str) -> Self {
        self.identity.cwd = PathBuf::from(cwd);
        self
    }

    pub fn argv(mut self, argv: &[&str]) -> Self {
        self.argv = argv.iter().map(OsString::from).collect();
        self
    }

    pub fn build(self) -> InvocationContext {
        let settings = load_settings(&self.env);
        InvocationContext::new(&settings, self.identity, self.argv)
    }
}

impl Default for ContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
