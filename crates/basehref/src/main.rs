//! basehref CLI - resolve and rewrite links for sites deployed under a sub-path.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;

#[derive(Parser)]
#[command(name = "basehref")]
#[command(about = "Resolve root-relative links against a deployment base path")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to site.toml config file
    #[arg(short, long, default_value = "site.toml", global = true)]
    config: PathBuf,

    /// Override the configured base path (also read from BASE_URL)
    #[arg(long, global = true)]
    base: Option<String>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve link paths against the base path
    Href {
        /// Paths to resolve
        #[arg(required = true)]
        paths: Vec<String>,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Rewrite links in an HTML/Markdown file or a directory tree
    Rewrite {
        /// File or directory to rewrite
        input: PathBuf,

        /// Write results here instead of rewriting in place
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the effective configuration
    Config,

    /// Write a default site.toml
    Init {
        /// Overwrite an existing config file
        #[arg(short, long)]
        yes: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Href { paths, json } => {
            let site = commands::load_site(&cli.config, cli.base.as_deref())?;
            commands::href::run(&site, &paths, json)?;
        }
        Commands::Rewrite { input, output } => {
            let site = commands::load_site(&cli.config, cli.base.as_deref())?;
            commands::rewrite::run(&site, input, output)?;
        }
        Commands::Config => {
            let site = commands::load_site(&cli.config, cli.base.as_deref())?;
            commands::config::run(&site)?;
        }
        Commands::Init { yes } => {
            commands::init::run(&cli.config, yes)?;
        }
    }

    Ok(())
}
