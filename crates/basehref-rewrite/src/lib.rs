//! Apply base-path link resolution to rendered HTML and Markdown sources.
//!
//! Only the link values are touched; surrounding text is copied byte for
//! byte so rewritten files diff cleanly against their originals.

mod edit;

pub mod document;
pub mod html;
pub mod markdown;
pub mod tree;

pub use document::{rewrite_document, DocumentKind, Rewritten};
pub use html::rewrite_html;
pub use markdown::rewrite_markdown;
pub use tree::{rewrite_file, FileOutcome, RewriteConfig, RewriteError, RewriteReport, TreeRewriter};
