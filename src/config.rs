//! Settings file support.
//!
//! Settings are stored in TOML. Every key is optional:
//!
//! ```toml
//! [prune]
//! dir = "node_modules"
//!
//! [output]
//! verbose = false
//! quiet = false
//! color = true
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the per-project settings file looked up in the current directory.
pub const LOCAL_CONFIG_FILE: &str = ".nmprunerc.toml";

/// Errors that can occur while loading settings.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Invalid configuration in {}: {reason}", .path.display())]
    Invalid { path: PathBuf, reason: String },

    #[error("IO error reading configuration {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Settings for a prune run, before command-line overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub prune: PruneSettings,

    #[serde(default)]
    pub output: OutputSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PruneSettings {
    /// Directory pruned when none is given on the command line.
    #[serde(default = "default_dir")]
    pub dir: PathBuf,
}

impl Default for PruneSettings {
    fn default() -> Self {
        Self { dir: default_dir() }
    }
}

fn default_dir() -> PathBuf {
    PathBuf::from("node_modules")
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputSettings {
    /// Log every removed path.
    #[serde(default)]
    pub verbose: bool,

    /// Suppress the summary.
    #[serde(default)]
    pub quiet: bool,

    #[serde(default = "default_color")]
    pub color: bool,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            verbose: false,
            quiet: false,
            color: default_color(),
        }
    }
}

fn default_color() -> bool {
    true
}

impl Settings {
    /// Load settings, falling back to defaults.
    ///
    /// Tried in this order:
    /// 1. `config_path`, if provided
    /// 2. `.nmprunerc.toml` in the current directory
    /// 3. `~/.config/nmprune/config.toml`
    /// 4. Built-in defaults
    ///
    /// # Errors
    ///
    /// Returns an error if a file is found (or explicitly named) but cannot be
    /// read or parsed.
    pub fn load(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = config_path {
            return Self::load_from_file(path);
        }

        let local_config = PathBuf::from(LOCAL_CONFIG_FILE);
        if local_config.exists() {
            return Self::load_from_file(&local_config);
        }

        if let Some(home_config) = home_config_path()
            && home_config.exists()
        {
            return Self::load_from_file(&home_config);
        }

        Ok(Self::default())
    }

    /// Load settings from a specific file.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::Invalid {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }
}

fn home_config_path() -> Option<PathBuf> {
    let home = std::env::var_os("HOME")?;
    Some(
        PathBuf::from(home)
            .join(".config")
            .join("nmprune")
            .join("config.toml"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("config.toml");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.prune.dir, PathBuf::from("node_modules"));
        assert!(!settings.output.verbose);
        assert!(!settings.output.quiet);
        assert!(settings.output.color);
    }

    #[test]
    fn test_load_full_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_config(
            &temp_dir,
            r#"
[prune]
dir = "vendor/js"

[output]
verbose = true
quiet = false
color = false
"#,
        );

        let settings = Settings::load(Some(&path)).unwrap();
        assert_eq!(settings.prune.dir, PathBuf::from("vendor/js"));
        assert!(settings.output.verbose);
        assert!(!settings.output.color);
    }

    #[test]
    fn test_missing_keys_use_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_config(&temp_dir, "[output]\nquiet = true\n");

        let settings = Settings::load_from_file(&path).unwrap();
        assert_eq!(settings.prune.dir, PathBuf::from("node_modules"));
        assert!(settings.output.quiet);
        assert!(settings.output.color);
    }

    #[test]
    fn test_empty_file_is_default() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_config(&temp_dir, "");

        assert_eq!(Settings::load_from_file(&path).unwrap(), Settings::default());
    }

    #[test]
    fn test_explicit_missing_file_errors() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nope.toml");

        let err = Settings::load(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(p) if p == path));
    }

    #[test]
    fn test_invalid_toml_errors() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_config(&temp_dir, "[output]\nverbose = \"loud\"\n");

        let err = Settings::load_from_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
        assert!(err.to_string().starts_with("Invalid configuration in"));
    }

    #[test]
    fn test_serializes_to_toml() {
        let settings = Settings::default();
        let text = toml::to_string(&settings).unwrap();
        assert!(text.contains("node_modules"));
    }
}
