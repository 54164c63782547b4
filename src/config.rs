//! Runtime configuration from environment variables.

use std::path::PathBuf;

/// Directory name under the platform data dir.
const APP_DIR: &str = "tui-riddles";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Where the high-score record is kept.
    pub data_dir: PathBuf,
    /// Log file; `None` disables logging (the terminal is in raw mode).
    pub log_path: Option<PathBuf>,
    pub sound_enabled: bool,
    /// Keep scores in memory only.
    pub persist: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_path: None,
            sound_enabled: true,
            persist: true,
        }
    }
}

impl AppConfig {
    /// Create from `RIDDLES_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let data_dir = non_empty("RIDDLES_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(default_data_dir);
        let log_path = non_empty("RIDDLES_LOG_PATH").map(PathBuf::from);
        let sound_enabled = non_empty("RIDDLES_SOUND")
            .map(|s| !matches!(s.to_ascii_lowercase().as_str(), "0" | "false" | "off" | "no"))
            .unwrap_or(true);
        let persist = !non_empty("RIDDLES_NO_PERSIST")
            .map(|s| matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
            .unwrap_or(false);

        Self {
            data_dir,
            log_path,
            sound_enabled,
            persist,
        }
    }
}

/// `<platform data dir>/tui-riddles`, or `./.tui-riddles` when there is none.
pub fn default_data_dir() -> PathBuf {
    match dirs::data_dir() {
        Some(dir) => dir.join(APP_DIR),
        None => PathBuf::from(".").join(format!(".{APP_DIR}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = AppConfig::from_lookup(lookup(&[]));
        assert_eq!(config, AppConfig::default());
        assert!(config.sound_enabled);
        assert!(config.persist);
        assert!(config.log_path.is_none());
    }

    #[test]
    fn reads_overrides() {
        let config = AppConfig::from_lookup(lookup(&[
            ("RIDDLES_DATA_DIR", "/tmp/riddles"),
            ("RIDDLES_LOG_PATH", " /tmp/riddles.log "),
            ("RIDDLES_SOUND", "Off"),
            ("RIDDLES_NO_PERSIST", "1"),
        ]));
        assert_eq!(config.data_dir, PathBuf::from("/tmp/riddles"));
        assert_eq!(config.log_path, Some(PathBuf::from("/tmp/riddles.log")));
        assert!(!config.sound_enabled);
        assert!(!config.persist);
    }

    #[test]
    fn blank_values_fall_back() {
        let config = AppConfig::from_lookup(lookup(&[
            ("RIDDLES_LOG_PATH", "   "),
            ("RIDDLES_SOUND", "yes"),
            ("RIDDLES_NO_PERSIST", "0"),
        ]));
        assert!(config.log_path.is_none());
        assert!(config.sound_enabled);
        assert!(config.persist);
    }
}
