//! Print the effective configuration.

use anyhow::Result;
use basehref_core::SiteConfig;

/// Run the config command.
pub fn run(site: &SiteConfig) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(site)?);
    Ok(())
}
