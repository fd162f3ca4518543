//! Subcommand implementations.

use std::env;
use std::path::Path;

use anyhow::{Context, Result};
use basehref_core::SiteConfig;

pub mod config;
pub mod href;
pub mod init;
pub mod rewrite;

/// Environment variable overriding the configured base path.
pub const BASE_URL_ENV: &str = "BASE_URL";

/// Load the site configuration once for this process.
///
/// Precedence for the base path: `--base`, then `BASE_URL`, then the file.
pub fn load_site(path: &Path, base_flag: Option<&str>) -> Result<SiteConfig> {
    let site = SiteConfig::load(path)
        .with_context(|| format!("Failed to load {}", path.display()))?;

    let env_base = env::var(BASE_URL_ENV).ok();
    let site = apply_base_override(site, base_flag, env_base.as_deref());

    tracing::debug!("Using base path {}", site.base);
    Ok(site)
}

/// Apply `--base` or `BASE_URL` on top of the file configuration.
fn apply_base_override(site: SiteConfig, flag: Option<&str>, env_base: Option<&str>) -> SiteConfig {
    match flag.or(env_base) {
        Some(base) => {
            tracing::debug!("Base path overridden: {}", base);
            site.with_base(base)
        }
        None => site,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_file() -> SiteConfig {
        SiteConfig::from_toml_str("[site]\nbase = \"/blog\"").unwrap()
    }

    #[test]
    fn flag_beats_env() {
        let site = apply_base_override(from_file(), Some("/flag"), Some("/env"));
        assert_eq!(site.base.as_str(), "/flag/");
    }

    #[test]
    fn env_beats_file() {
        let site = apply_base_override(from_file(), None, Some("/env"));
        assert_eq!(site.base.as_str(), "/env/");
    }

    #[test]
    fn file_used_without_overrides() {
        let site = apply_base_override(from_file(), None, None);
        assert_eq!(site.base.as_str(), "/blog/");
    }

    #[test]
    fn empty_override_means_root() {
        let site = apply_base_override(from_file(), Some(""), None);
        assert!(site.base.is_root());
    }
}
