// src/config/loader.rs

use std::path::PathBuf;

use tracing::warn;

use crate::config::env::EnvSnapshot;
use crate::config::model::{
    LOG_PATH_VAR, MAKE_VAR, NEST_LEVEL_VAR, Settings, WRAPPED_COMMAND_VAR,
};

/// Build [`Settings`] from an environment snapshot.
///
/// Empty values count as unset. A `NEST_LEVEL` that is not a non-negative
/// integer is ignored with a warning and the process behaves as top-level.
pub fn load_settings(env: &EnvSnapshot) -> Settings {
    let mut settings = Settings::default();

    if let Some(path) = env.get_non_empty(LOG_PATH_VAR) {
        settings.log_path = Some(PathBuf::from(path));
    }

    if let Some(cmd) = env.get_non_empty(WRAPPED_COMMAND_VAR) {
        settings.wrapped_command = cmd.to_os_string();
    }

    settings.nest_level = env.get(NEST_LEVEL_VAR).and_then(|raw| {
        let parsed = raw.to_str().and_then(parse_level);
        if parsed.is_none() {
            warn!(value = ?raw, "ignoring unusable {NEST_LEVEL_VAR}; treating as top-level");
        }
        parsed
    });

    settings.make_var_present = env.get(MAKE_VAR).is_some();

    settings
}

fn parse_level(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    fn env(pairs: &[(&str, &str)]) -> EnvSnapshot {
        pairs.iter().copied().collect()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let s = load_settings(&EnvSnapshot::default());
        assert_eq!(s.log_path, None);
        assert_eq!(s.wrapped_command, OsString::from("make"));
        assert_eq!(s.nest_level, None);
        assert!(!s.make_var_present);
    }

    #[test]
    fn reads_all_variables() {
        let s = load_settings(&env(&[
            ("LOG_PATH", "/tmp/build.log"),
            ("WRAPPED_COMMAND", "gmake"),
            ("NEST_LEVEL", "3"),
            ("MAKE", "make"),
        ]));
        assert_eq!(s.log_path, Some(PathBuf::from("/tmp/build.log")));
        assert_eq!(s.wrapped_command, OsString::from("gmake"));
        assert_eq!(s.nest_level, Some(3));
        assert!(s.make_var_present);
    }

    #[test]
    fn empty_values_count_as_unset() {
        let s = load_settings(&env(&[("LOG_PATH", ""), ("WRAPPED_COMMAND", "")]));
        assert_eq!(s.log_path, None);
        assert_eq!(s.wrapped_command, OsString::from("make"));
    }

    #[test]
    fn garbage_level_is_treated_as_absent() {
        assert_eq!(load_settings(&env(&[("NEST_LEVEL", "abc")])).nest_level, None);
        assert_eq!(load_settings(&env(&[("NEST_LEVEL", "-1")])).nest_level, None);
        assert_eq!(load_settings(&env(&[("NEST_LEVEL", " 2 ")])).nest_level, Some(2));
    }
}
