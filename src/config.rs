//! Board configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Colour palette for the terminal board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Red X, blue O, cyan active square.
    #[default]
    #[display("classic")]
    Classic,
    /// No colours; emphasis through bold, reverse video and underline only.
    #[display("mono")]
    Mono,
}

/// Settings for the board binary.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct BoardConfig {
    /// File the interactive board logs to.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    log_filter: String,

    /// Colour palette.
    #[serde(default)]
    theme: Theme,

    /// Whether the interactive board captures the mouse.
    #[serde(default = "default_mouse")]
    mouse: bool,
}

fn default_log_file() -> PathBuf {
    PathBuf::from("strictly_uttt.log")
}

fn default_log_filter() -> String {
    "info".to_string()
}

fn default_mouse() -> bool {
    true
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            log_file: default_log_file(),
            log_filter: default_log_filter(),
            theme: Theme::default(),
            mouse: default_mouse(),
        }
    }
}

impl BoardConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(theme = %config.theme, mouse = config.mouse, "Config loaded successfully");
        Ok(config)
    }

    /// Loads configuration from `path` if it exists, defaults otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the file exists but is not valid.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("No config file, using defaults");
            Ok(Self::default())
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(content.as_bytes()).expect("write");
        file
    }

    #[test]
    fn test_empty_file_gives_defaults() {
        let file = write_config("");
        let config = BoardConfig::from_file(file.path()).expect("valid");
        assert_eq!(config, BoardConfig::default());
        assert_eq!(config.log_file(), &PathBuf::from("strictly_uttt.log"));
        assert_eq!(config.log_filter(), "info");
        assert!(*config.mouse());
    }

    #[test]
    fn test_reads_all_fields() {
        let file = write_config(
            r#"
log_file = "board.log"
log_filter = "strictly_uttt=debug"
theme = "mono"
mouse = false
"#,
        );
        let config = BoardConfig::from_file(file.path()).expect("valid");
        assert_eq!(config.log_file(), &PathBuf::from("board.log"));
        assert_eq!(config.log_filter(), "strictly_uttt=debug");
        assert_eq!(*config.theme(), Theme::Mono);
        assert!(!*config.mouse());
    }

    #[test]
    fn test_unknown_theme_rejected() {
        let file = write_config(r#"theme = "neon""#);
        let err = BoardConfig::from_file(file.path()).expect_err("bad theme");
        assert!(err.message.contains("Failed to parse config"));
    }

    #[test]
    fn test_missing_file_falls_back() {
        let dir = tempfile::tempdir().expect("temp dir");
        let config = BoardConfig::load_or_default(dir.path().join("absent.toml")).expect("defaults");
        assert_eq!(config, BoardConfig::default());

        let err = BoardConfig::from_file(dir.path().join("absent.toml")).expect_err("missing");
        assert!(err.message.contains("Failed to read config file"));
    }
}
