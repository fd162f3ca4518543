//! Write a starter configuration file.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Run the init command.
pub fn run(config_path: &Path, yes: bool) -> Result<()> {
    if config_path.exists() && !yes {
        tracing::warn!(
            "{} already exists. Use --yes to overwrite.",
            config_path.display()
        );
        return Ok(());
    }

    fs::write(config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    tracing::info!("Created {}", config_path.display());

    Ok(())
}

const DEFAULT_CONFIG: &str = r#"# basehref configuration

[site]
# Absolute URL the site is published at (used for canonical URLs)
url = "https://example.github.io/"

# Sub-path the site is served under; "/" for the domain root.
# Overridden by --base or the BASE_URL environment variable.
base = "/blog"
"#;
