//! Resolve link paths from the command line.

use anyhow::Result;
use basehref_core::{LinkKind, SiteConfig};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct Resolution<'a> {
    input: &'a str,
    href: String,
    kind: LinkKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    canonical: Option<String>,
}

/// Run the href command.
pub fn run(site: &SiteConfig, paths: &[String], json: bool) -> Result<()> {
    let resolutions = resolve_all(site, paths);

    if json {
        println!("{}", serde_json::to_string_pretty(&resolutions)?);
    } else {
        for resolution in &resolutions {
            println!("{}", resolution.href);
        }
    }

    Ok(())
}

fn resolve_all<'a>(site: &SiteConfig, paths: &'a [String]) -> Vec<Resolution<'a>> {
    let resolver = site.resolver();

    paths
        .iter()
        .map(|path| Resolution {
            input: path,
            href: resolver.href(path),
            kind: LinkKind::parse(path),
            canonical: site.canonical_url(path),
        })
        .collect()
}
