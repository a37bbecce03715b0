// src/config/env.rs

use std::collections::BTreeMap;
use std::ffi::{OsStr, OsString};

/// Point-in-time copy of the process environment.
///
/// Captured once at startup; nothing downstream reads `std::env` directly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvSnapshot {
    vars: BTreeMap<OsString, OsString>,
}

impl EnvSnapshot {
    /// Snapshot the current process environment.
    pub fn capture() -> Self {
        Self::from_iter(std::env::vars_os())
    }

    pub fn get(&self, name: &str) -> Option<&OsStr> {
        self.vars.get(OsStr::new(name)).map(OsString::as_os_str)
    }

    /// Value as UTF-8, if present and valid.
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(OsStr::to_str)
    }

    /// Value if present and non-empty.
    pub fn get_non_empty(&self, name: &str) -> Option<&OsStr> {
        self.get(name).filter(|v| !v.is_empty())
    }
}

impl<K, V> FromIterator<(K, V)> for EnvSnapshot
where
    K: Into<OsString>,
    V: Into<OsString>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
