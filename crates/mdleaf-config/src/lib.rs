//! Configuration management for mdleaf.
//!
//! Parses `mdleaf.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ```toml
//! [inline]
//! delimiters = [
//!   { marker = "`", kind = "code" },
//!   { marker = "**", kind = "bold" },
//!   { marker = "*", kind = "italic" },
//! ]
//!
//! [render]
//! wrap_tag = "p"
//! ```

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use mdleaf_inline::{Delimiter, InlineParser, SpanKind};
use serde::Deserialize;

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "mdleaf.toml";

/// CLI settings that override configuration file values.
///
/// Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override the tag wrapping each rendered paragraph.
    pub wrap_tag: Option<String>,
}

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Inline parsing configuration.
    pub inline: InlineConfig,
    /// Rendering configuration.
    pub render: RenderConfig,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Inline parsing configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct InlineConfig {
    /// Delimiters in application order.
    pub delimiters: Vec<DelimiterConfig>,
}

impl Default for InlineConfig {
    fn default() -> Self {
        let delimiters = InlineParser::new()
            .delimiters()
            .iter()
            .map(|d| DelimiterConfig {
                marker: d.marker().to_owned(),
                kind: d.kind().as_str().to_owned(),
            })
            .collect();
        Self { delimiters }
    }
}

/// One delimiter table entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DelimiterConfig {
    /// Literal marker, e.g. `**`.
    pub marker: String,
    /// Span kind name: `bold`, `italic` or `code`.
    pub kind: String,
}

/// Rendering configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Tag wrapping each paragraph, e.g. `p`. Unwrapped when absent.
    pub wrap_tag: Option<String>,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `mdleaf.toml` in current directory and parents,
    /// falling back to defaults.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the resulting configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) =
            std::env::current_dir().ok().and_then(|cwd| Self::discover_config(&cwd))
        {
            Self::load_from_file(&discovered)?
        } else {
            tracing::debug!("No {CONFIG_FILENAME} found, using defaults");
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(wrap_tag) = &settings.wrap_tag {
            self.render.wrap_tag = Some(wrap_tag.clone());
        }
    }

    /// Search for config file in `start` and its parents.
    fn discover_config(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        tracing::info!(path = %path.display(), "Loading configuration");

        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.delimiters()?;
        self.validate_render()?;
        Ok(())
    }

    /// Validate render configuration.
    fn validate_render(&self) -> Result<(), ConfigError> {
        if let Some(tag) = &self.render.wrap_tag {
            if tag.is_empty() {
                return Err(ConfigError::Validation(
                    "render.wrap_tag cannot be empty".to_owned(),
                ));
            }
            if !tag.chars().all(|c| c.is_ascii_alphanumeric()) {
                return Err(ConfigError::Validation(format!(
                    "render.wrap_tag must be alphanumeric, got {tag:?}"
                )));
            }
        }
        Ok(())
    }

    /// Resolve the delimiter table.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` for unknown kinds, empty or
    /// duplicated markers, and kinds that cannot be delimited.
    pub fn delimiters(&self) -> Result<Vec<Delimiter>, ConfigError> {
        let mut seen = HashSet::new();
        let mut delimiters = Vec::with_capacity(self.inline.delimiters.len());

        for (idx, entry) in self.inline.delimiters.iter().enumerate() {
            let field = format!("inline.delimiters[{idx}]");
            let kind: SpanKind = entry
                .kind
                .parse()
                .map_err(|e| ConfigError::Validation(format!("{field}.kind: {e}")))?;
            let delimiter = Delimiter::new(entry.marker.as_str(), kind)
                .map_err(|e| ConfigError::Validation(format!("{field}: {e}")))?;
            if !seen.insert(entry.marker.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "{field}.marker {:?} is defined more than once",
                    entry.marker
                )));
            }
            delimiters.push(delimiter);
        }

        Ok(delimiters)
    }

    /// Build an [`InlineParser`] from the delimiter table.
    ///
    /// # Errors
    ///
    /// See [`Config::delimiters`].
    pub fn inline_parser(&self) -> Result<InlineParser, ConfigError> {
        Ok(InlineParser::new().with_delimiters(self.delimiters()?))
    }
}
