//! Rewrite links in files on disk.

use std::path::PathBuf;

use anyhow::Result;
use basehref_core::SiteConfig;
use basehref_rewrite::{RewriteConfig, TreeRewriter};

/// Run the rewrite command.
pub fn run(site: &SiteConfig, input: PathBuf, output: Option<PathBuf>) -> Result<()> {
    tracing::info!("Rewriting links under base {}...", site.base);

    if site.base.is_root() {
        tracing::warn!("Base path is '/', links will not change");
    }

    let config = RewriteConfig { input, output };
    let destination = config.output.clone().unwrap_or_else(|| config.input.clone());

    let report = TreeRewriter::new(config, site.resolver()).run()?;

    tracing::info!(
        "Resolved {} links in {} documents ({} files copied) in {}ms",
        report.links,
        report.documents,
        report.copied,
        report.duration_ms
    );

    tracing::info!("Output: {}", destination.display());

    Ok(())
}
