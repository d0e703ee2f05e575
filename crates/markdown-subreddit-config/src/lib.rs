use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Recognizer {kind:?} is listed more than once")]
    DuplicateRecognizer { kind: RecognizerKind },
}

/// Built-in recognizers that can be enabled from the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecognizerKind {
    Subreddit,
}

/// How the CLI prints scan results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Toml,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Recognizers in priority order; earlier entries win ties.
    pub recognizers: Vec<RecognizerKind>,
    /// Maximum characters of text shown per item.
    pub preview_width: usize,
    pub output: OutputFormat,
    /// Only report lines that contain at least one element.
    pub elements_only: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            recognizers: vec![RecognizerKind::Subreddit],
            preview_width: 60,
            output: OutputFormat::Text,
            elements_only: false,
        }
    }
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;
        config.validate()?;

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/markdown-subreddit");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Rejects a recognizer list that names the same recognizer twice.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (i, kind) in self.recognizers.iter().enumerate() {
            if self.recognizers[..i].contains(kind) {
                return Err(ConfigError::DuplicateRecognizer { kind: *kind });
            }
        }
        Ok(())
    }
}
