//! Rewriting whole files and output directories.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use rayon::prelude::*;
use walkdir::WalkDir;

use basehref_core::LinkResolver;

use crate::document::{rewrite_document, DocumentKind};

/// Where to read from and write to.
#[derive(Debug, Clone)]
pub struct RewriteConfig {
    /// File or directory to rewrite
    pub input: PathBuf,

    /// Destination; `None` rewrites in place
    pub output: Option<PathBuf>,
}

/// Result of a rewrite run.
#[derive(Debug, Default)]
pub struct RewriteReport {
    /// Documents whose links were scanned
    pub documents: usize,

    /// Root-relative links resolved
    pub links: usize,

    /// Non-document files copied to the output
    pub copied: usize,

    /// Total time in milliseconds
    pub duration_ms: u64,
}

/// Errors that can occur while rewriting.
#[derive(Debug, thiserror::Error)]
pub enum RewriteError {
    #[error("Input not found: {0}")]
    NotFound(String),

    #[error("Failed to read {path}: {message}")]
    ReadError { path: String, message: String },

    #[error("Failed to write {path}: {message}")]
    WriteError { path: String, message: String },
}

/// What happened to a single file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    /// Document scanned; `links` root-relative links resolved
    Rewritten { links: usize },
    /// Non-document copied to the output
    Copied,
    /// Non-document rewritten in place, nothing to do
    Skipped,
}

/// Rewrites links in a file or a directory tree.
pub struct TreeRewriter {
    config: RewriteConfig,
    resolver: LinkResolver,
}

impl TreeRewriter {
    pub fn new(config: RewriteConfig, resolver: LinkResolver) -> Self {
        Self { config, resolver }
    }

    /// Run the rewrite.
    pub fn run(&self) -> Result<RewriteReport, RewriteError> {
        let start = Instant::now();
        let input = &self.config.input;

        if !input.exists() {
            return Err(RewriteError::NotFound(input.display().to_string()));
        }

        let files = if input.is_file() {
            vec![(input.clone(), self.file_target(input))]
        } else {
            self.discover_files(input)?
        };

        tracing::debug!("Rewriting {} files", files.len());

        let results: Vec<Result<FileOutcome, RewriteError>> = files
            .par_iter()
            .map(|(source, target)| rewrite_file(source, target, &self.resolver))
            .collect();

        let mut report = RewriteReport::default();
        for result in results {
            match result? {
                FileOutcome::Rewritten { links } => {
                    report.documents += 1;
                    report.links += links;
                }
                FileOutcome::Copied => report.copied += 1,
                FileOutcome::Skipped => {}
            }
        }

        report.duration_ms = start.elapsed().as_millis() as u64;
        Ok(report)
    }

    /// Destination for a single-file input.
    ///
    /// An existing output directory receives the file under its own name.
    fn file_target(&self, input: &Path) -> PathBuf {
        match &self.config.output {
            None => input.to_path_buf(),
            Some(out) if out.is_dir() => input
                .file_name()
                .map(|name| out.join(name))
                .unwrap_or_else(|| out.clone()),
            Some(out) => out.clone(),
        }
    }

    /// Pair every file under `root` with its destination.
    ///
    /// Paths are canonicalized so an output directory inside `root` is never
    /// walked, however either path was spelled.
    fn discover_files(&self, root: &Path) -> Result<Vec<(PathBuf, PathBuf)>, RewriteError> {
        let root = canonicalize(root)?;

        let output = match &self.config.output {
            Some(out) => {
                fs::create_dir_all(out).map_err(|e| write_error(out, e))?;
                Some(canonicalize(out)?)
            }
            None => None,
        };
        // output == input is an in-place rewrite
        let output = output.filter(|out| *out != root);

        let files = WalkDir::new(&root)
            .follow_links(true)
            .into_iter()
            .filter_entry(|e| !output.as_deref().is_some_and(|out| e.path().starts_with(out)))
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .map(|e| {
                let source = e.path().to_path_buf();
                let target = match &output {
                    Some(out) => out.join(source.strip_prefix(&root).unwrap_or(&source)),
                    None => source.clone(),
                };
                (source, target)
            })
            .collect();

        Ok(files)
    }
}

/// Rewrite a single file from `source` into `target`.
///
/// `source` and `target` may be the same path. Documents without any
/// root-relative links are not rewritten in place.
pub fn rewrite_file(
    source: &Path,
    target: &Path,
    resolver: &LinkResolver,
) -> Result<FileOutcome, RewriteError> {
    let in_place = source == target;
    let kind = DocumentKind::from_path(source);

    if kind == DocumentKind::Other {
        if in_place {
            return Ok(FileOutcome::Skipped);
        }
        ensure_parent(target)?;
        fs::copy(source, target).map_err(|e| write_error(target, e))?;
        return Ok(FileOutcome::Copied);
    }

    let content = fs::read_to_string(source).map_err(|e| RewriteError::ReadError {
        path: source.display().to_string(),
        message: e.to_string(),
    })?;

    let Some(rewritten) = rewrite_document(kind, &content, resolver) else {
        return Ok(FileOutcome::Skipped);
    };

    if !(in_place && rewritten.content == content) {
        ensure_parent(target)?;
        fs::write(target, &rewritten.content).map_err(|e| write_error(target, e))?;
    }

    if rewritten.links > 0 {
        tracing::debug!("{}: {} links", source.display(), rewritten.links);
    }

    Ok(FileOutcome::Rewritten {
        links: rewritten.links,
    })
}

fn ensure_parent(path: &Path) -> Result<(), RewriteError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| write_error(parent, e))?;
        }
    }
    Ok(())
}

fn canonicalize(path: &Path) -> Result<PathBuf, RewriteError> {
    fs::canonicalize(path).map_err(|e| RewriteError::ReadError {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

fn write_error(path: &Path, e: std::io::Error) -> RewriteError {
    RewriteError::WriteError {
        path: path.display().to_string(),
        message: e.to_string(),
    }
}
