//! Configuration management for sitenav.
//!
//! Parses `sitenav.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].

use std::path::{Path, PathBuf};

use serde::Deserialize;
use sitenav_tree::{DuplicatePolicy, LookupStrategy};

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "sitenav.toml";

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override dotted key of the page list in the site payload.
    pub pages_key: Option<String>,
    /// Override subtree lookup strategy.
    pub lookup: Option<LookupStrategy>,
    /// Override duplicate page policy.
    pub duplicates: Option<DuplicatePolicy>,
    /// Override HTML escaping.
    pub escape_html: Option<bool>,
}

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Which site pages feed the tree.
    pub site: SiteConfig,
    /// Tree building and lookup.
    pub tree: TreeConfig,
    /// Markup output.
    pub render: RenderConfig,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Site page selection.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Dotted key of the page list inside the site payload.
    pub pages_key: String,
    /// Page URLs never shown in navigation.
    pub exclude: Vec<String>,
    /// URL substrings marking index pages, which title their directory
    /// rather than appearing as pages.
    pub index_pages: Vec<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            pages_key: "site.html_pages".to_owned(),
            exclude: vec!["/404.html".to_owned(), "/search.html".to_owned()],
            index_pages: vec!["README.html".to_owned()],
        }
    }
}

/// Tree configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct TreeConfig {
    /// How page paths map to directories for the table of contents.
    pub lookup: LookupStrategy,
    /// What to do when two pages share a path.
    pub duplicates: DuplicatePolicy,
}

/// Render configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// HTML-escape titles and paths in the sidebar.
    pub escape_html: bool,
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
    /// Otherwise, searches for `sitenav.toml` in current directory and parents,
    /// falling back to defaults.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let start = std::env::current_dir().unwrap_or_default();
        Self::load_from(config_path, &start, cli_settings)
    }

    fn load_from(
        config_path: Option<&Path>,
        start: &Path,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config(start) {
            Self::load_from_file(&discovered)?
        } else {
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(pages_key) = &settings.pages_key {
            self.site.pages_key.clone_from(pages_key);
        }
        if let Some(lookup) = settings.lookup {
            self.tree.lookup = lookup;
        }
        if let Some(duplicates) = settings.duplicates {
            self.tree.duplicates = duplicates;
        }
        if let Some(escape_html) = settings.escape_html {
            self.render.escape_html = escape_html;
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
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;
        config.config_path = Some(path.to_path_buf());

        config.validate()?;
        tracing::debug!(path = %path.display(), "Loaded configuration");

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.site.pages_key.trim().is_empty() {
            return Err(ConfigError::Validation(
                "site.pages_key cannot be empty".to_owned(),
            ));
        }
        if self.site.pages_key.split('.').any(str::is_empty) {
            return Err(ConfigError::Validation(format!(
                "site.pages_key '{}' contains an empty segment",
                self.site.pages_key
            )));
        }
        if let Some(bad) = self.site.exclude.iter().find(|path| !path.starts_with('/')) {
            return Err(ConfigError::Validation(format!(
                "site.exclude entry '{bad}' must start with /"
            )));
        }
        if self.site.index_pages.iter().any(String::is_empty) {
            return Err(ConfigError::Validation(
                "site.index_pages entries cannot be empty".to_owned(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.site.pages_key, "site.html_pages");
        assert_eq!(config.site.exclude, ["/404.html", "/search.html"]);
        assert_eq!(config.site.index_pages, ["README.html"]);
        assert_eq!(config.tree.lookup, LookupStrategy::HtmlHeuristic);
        assert_eq!(config.tree.duplicates, DuplicatePolicy::Replace);
        assert!(!config.render.escape_html);
        assert!(config.config_path.is_none());
    }

    #[test]
    fn test_parse_minimal_config() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.site.pages_key, "site.html_pages");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
[site]
pages_key = "site.pages"
exclude = ["/404.html"]
index_pages = ["index.html"]

[tree]
lookup = "last-segment"
duplicates = "reject"

[render]
escape_html = true
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.site.pages_key, "site.pages");
        assert_eq!(config.site.exclude, ["/404.html"]);
        assert_eq!(config.site.index_pages, ["index.html"]);
        assert_eq!(config.tree.lookup, LookupStrategy::LastSegment);
        assert_eq!(config.tree.duplicates, DuplicatePolicy::Reject);
        assert!(config.render.escape_html);
    }

    #[test]
    fn test_parse_unknown_lookup_fails() {
        let result: Result<Config, _> = toml::from_str("[tree]\nlookup = \"guess\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_rejects_relative_exclude() {
        let toml = r#"
[site]
exclude = ["404.html"]
"#;
        let config: Config = toml::from_str(toml).unwrap();

        let err = config.validate().unwrap_err();

        assert!(
            matches!(err, ConfigError::Validation(_)),
            "Expected ConfigError::Validation, got {err:?}"
        );
        assert!(err.to_string().contains("404.html"));
    }

    #[test]
    fn test_validate_rejects_empty_pages_key() {
        let mut config = Config::default();
        config.site.pages_key = String::new();
        assert!(config.validate().is_err());

        config.site.pages_key = "site..pages".to_owned();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_index_marker() {
        let mut config = Config::default();
        config.site.index_pages = vec![String::new()];
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_apply_cli_settings_overrides_only_set_fields() {
        let mut config = Config::default();
        let overrides = CliSettings {
            lookup: Some(LookupStrategy::LastSegment),
            escape_html: Some(true),
            ..Default::default()
        };

        config.apply_cli_settings(&overrides);

        assert_eq!(config.tree.lookup, LookupStrategy::LastSegment);
        assert!(config.render.escape_html);
        assert_eq!(config.tree.duplicates, DuplicatePolicy::Replace); // Unchanged
        assert_eq!(config.site.pages_key, "site.html_pages"); // Unchanged
    }

    #[test]
    fn test_apply_cli_settings_pages_key_and_duplicates() {
        let mut config = Config::default();
        let overrides = CliSettings {
            pages_key: Some("pages".to_owned()),
            duplicates: Some(DuplicatePolicy::Reject),
            ..Default::default()
        };

        config.apply_cli_settings(&overrides);

        assert_eq!(config.site.pages_key, "pages");
        assert_eq!(config.tree.duplicates, DuplicatePolicy::Reject);
    }

    #[test]
    fn test_load_explicit_path_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");

        let err = Config::load(Some(missing.as_path()), None).unwrap_err();

        assert!(matches!(err, ConfigError::NotFound(ref p) if p == &missing));
    }

    #[test]
    fn test_load_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "[render]\nescape_html = true\n").unwrap();

        let config = Config::load(Some(path.as_path()), None).unwrap();

        assert!(config.render.escape_html);
        assert_eq!(config.config_path, Some(path));
    }

    #[test]
    fn test_load_explicit_path_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "[site\n").unwrap();

        let err = Config::load(Some(path.as_path()), None).unwrap_err();

        assert!(matches!(err, ConfigError::Parse(_)), "got {err:?}");
    }

    #[test]
    fn test_load_discovers_config_in_parent() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILENAME),
            "[tree]\nduplicates = \"reject\"\n",
        )
        .unwrap();
        let nested = dir.path().join("site/pages");
        std::fs::create_dir_all(&nested).unwrap();

        let config = Config::load_from(None, &nested, None).unwrap();

        assert_eq!(config.tree.duplicates, DuplicatePolicy::Reject);
        assert_eq!(config.config_path, Some(dir.path().join(CONFIG_FILENAME)));
    }

    #[test]
    fn test_load_applies_cli_settings_after_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[render]\nescape_html = true\n").unwrap();
        let overrides = CliSettings {
            escape_html: Some(false),
            ..Default::default()
        };

        let config = Config::load(Some(path.as_path()), Some(&overrides)).unwrap();

        assert!(!config.render.escape_html);
    }
}
