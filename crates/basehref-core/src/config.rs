//! Site configuration (`site.toml`).

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::base::BasePath;
use crate::href::LinkResolver;
use crate::link::LinkKind;

/// Deployment settings for a statically generated site.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Absolute origin the site is published at, e.g. `https://example.github.io/`
    #[serde(default, rename = "url", skip_serializing_if = "Option::is_none")]
    pub site: Option<String>,

    /// Sub-path the site is served under
    #[serde(default)]
    pub base: BasePath,
}

/// Configuration file structure.
#[derive(Debug, Deserialize, Default)]
struct ConfigFile {
    #[serde(default)]
    site: SiteConfig,
}

/// Errors that can occur while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {message}")]
    Read { path: String, message: String },

    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Site URL must start with http:// or https://: {0}")]
    InvalidSite(String),
}

impl SiteConfig {
    /// Parse configuration from TOML source.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile =
            toml::from_str(source).map_err(|e| ConfigError::Parse(e.to_string()))?;
        file.site.validate()?;
        Ok(file.site)
    }

    /// Load configuration from `path` if it exists.
    ///
    /// A missing file yields the defaults; a file that exists but is
    /// malformed is an error.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let config = Self::from_toml_str(&content)?;

        tracing::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Replace the base path.
    pub fn with_base(mut self, raw: &str) -> Self {
        self.base = BasePath::new(raw);
        self
    }

    /// Build the link resolver for this deployment.
    pub fn resolver(&self) -> LinkResolver {
        LinkResolver::new(self.base.clone())
    }

    /// Absolute URL for a root-relative `path`.
    ///
    /// Returns `None` when no site URL is configured or `path` is not
    /// root-relative.
    pub fn canonical_url(&self, path: &str) -> Option<String> {
        let site = self.site.as_deref()?;
        if LinkKind::parse(path) != LinkKind::SiteRoot {
            return None;
        }

        let href = self.resolver().href(path);
        Some(format!("{}{}", site.trim_end_matches('/'), href))
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if let Some(site) = &self.site {
            let scheme_ok = site.starts_with("https://") || site.starts_with("http://");
            let host = site.split_once("://").map(|(_, rest)| rest).unwrap_or("");
            if !scheme_ok || host.trim_matches('/').is_empty() {
                return Err(ConfigError::InvalidSite(site.clone()));
            }
        }
        Ok(())
    }
}
