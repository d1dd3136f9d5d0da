//! Configuration for the Papyr CLI.
//!
//! Provides [`PapyrConfig`], loaded from TOML files, environment variables,
//! and defaults using the `confyg` crate.
//!
//! # Loading Priority
//!
//! 1. Explicit `--config <path>` flag
//! 2. `PAPYR_CONFIG` environment variable
//! 3. XDG default: `~/.config/papyr/config.toml`
//! 4. Built-in defaults

use confyg::{env, Confygery};
use papyr_core::{Error, Result};
use papyr_vector::EmbedField;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================================================
// Configuration structs
// ============================================================================

/// Main configuration for the Papyr CLI.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PapyrConfig {
    /// Ingestion settings.
    pub ingest: IngestConfig,

    /// Query settings.
    pub search: SearchConfig,

    /// arXiv endpoint settings.
    pub arxiv: ArxivConfig,

    /// Embedding settings.
    pub embed: EmbedConfig,
}

/// Ingestion configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IngestConfig {
    /// Per-category fetch limit.
    pub limit: usize,

    /// Paper field(s) to embed.
    pub field: EmbedField,
}

/// Query configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Default number of results.
    pub count: usize,
}

/// arXiv endpoint configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ArxivConfig {
    /// Export API base URL.
    pub base_url: String,

    /// HTTP request timeout in seconds.
    pub timeout_secs: u64,
}

/// Embedding configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbedConfig {
    /// Embedding dimension for the bundled deterministic provider.
    pub dimension: usize,
}

// ============================================================================
// Default implementations
// ============================================================================

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            limit: 100,
            field: EmbedField::default(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { count: 5 }
    }
}

impl Default for ArxivConfig {
    fn default() -> Self {
        Self {
            base_url: papyr_arxiv::DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }
}

impl Default for EmbedConfig {
    fn default() -> Self {
        Self { dimension: 384 }
    }
}

// ============================================================================
// Config loading
// ============================================================================

impl PapyrConfig {
    /// Load configuration from file, environment, and defaults.
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        let mut builder =
            Confygery::new().map_err(|e| Error::config(format!("config init: {e}")))?;

        if let Some(path) = Self::resolve_config_path(config_path) {
            if path.exists() {
                builder
                    .add_file(&path.to_string_lossy())
                    .map_err(|e| Error::config(format!("config file: {e}")))?;
            }
        }

        let mut env_opts = env::Options::with_top_level("PAPYR");
        env_opts.add_section("ingest");
        env_opts.add_section("search");
        env_opts.add_section("arxiv");
        env_opts.add_section("embed");
        builder
            .add_env(env_opts)
            .map_err(|e| Error::config(format!("config env: {e}")))?;

        let config: Self = builder
            .build()
            .map_err(|e| Error::config(format!("config build: {e}")))?;

        Ok(config)
    }

    /// Resolve the config file path from explicit flag, env var, or XDG default.
    pub fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(PathBuf::from(path));
        }

        if let Ok(path) = std::env::var("PAPYR_CONFIG") {
            return Some(PathBuf::from(path));
        }

        Self::default_config_path()
    }

    /// Return the XDG default config path.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("papyr").join("config.toml"))
    }

    /// Serialize this config to a pretty-printed TOML string.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PapyrConfig::default();
        assert_eq!(config.ingest.limit, 100);
        assert_eq!(config.ingest.field, EmbedField::TitleSummary);
        assert_eq!(config.search.count, 5);
        assert_eq!(config.arxiv.base_url, papyr_arxiv::DEFAULT_BASE_URL);
        assert_eq!(config.arxiv.timeout_secs, 30);
        assert_eq!(config.embed.dimension, 384);
    }

    #[test]
    fn test_toml_round_trip() {
        let config = PapyrConfig::default();
        let text = config.to_toml_string().unwrap();
        assert!(text.contains("[ingest]"));
        assert!(text.contains("[arxiv]"));

        let back: PapyrConfig = toml::from_str(&text).unwrap();
        assert_eq!(back.ingest.limit, config.ingest.limit);
        assert_eq!(back.search.count, config.search.count);
    }

    #[test]
    fn test_partial_file_gets_defaults() {
        let partial = r#"
            [ingest]
            limit = 25
        "#;
        let config: PapyrConfig = toml::from_str(partial).unwrap();
        assert_eq!(config.ingest.limit, 25);
        // Everything else falls back to defaults
        assert_eq!(config.search.count, 5);
        assert_eq!(config.embed.dimension, 384);
    }

    #[test]
    fn test_explicit_path_wins() {
        let path = PapyrConfig::resolve_config_path(Some("/tmp/custom.toml"));
        assert_eq!(path, Some(PathBuf::from("/tmp/custom.toml")));
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let config = PapyrConfig::load(Some("/nonexistent/papyr.toml")).unwrap();
        assert_eq!(config.ingest.limit, 100);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[search]\ncount = 9\n\n[embed]\ndimension = 64\n",
        )
        .unwrap();

        let config = PapyrConfig::load(Some(&path.to_string_lossy())).unwrap();
        assert_eq!(config.search.count, 9);
        assert_eq!(config.embed.dimension, 64);
        assert_eq!(config.ingest.limit, 100);
    }
}
