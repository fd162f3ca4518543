//! Document kinds and the result of rewriting one document.

use std::path::Path;

use basehref_core::LinkResolver;

use crate::html::rewrite_html;
use crate::markdown::rewrite_markdown;

/// How a file's links are located.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Html,
    Markdown,
    /// Not rewritten; copied as-is
    Other,
}

impl DocumentKind {
    /// Detect document kind from a file extension.
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match ext.as_deref() {
            Some("html" | "htm") => Self::Html,
            Some("md" | "mdx" | "markdown") => Self::Markdown,
            _ => Self::Other,
        }
    }
}

/// A document after link rewriting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewritten {
    /// Document text with links resolved
    pub content: String,

    /// Number of root-relative links resolved
    pub links: usize,
}

/// Rewrite `source` according to its kind.
///
/// Returns `None` for [`DocumentKind::Other`].
pub fn rewrite_document(
    kind: DocumentKind,
    source: &str,
    resolver: &LinkResolver,
) -> Option<Rewritten> {
    match kind {
        DocumentKind::Html => Some(rewrite_html(source, resolver)),
        DocumentKind::Markdown => Some(rewrite_markdown(source, resolver)),
        DocumentKind::Other => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use basehref_core::BasePath;

    #[test]
    fn detects_kind_from_extension() {
        assert_eq!(DocumentKind::from_path(Path::new("a/index.html")), DocumentKind::Html);
        assert_eq!(DocumentKind::from_path(Path::new("a/page.HTM")), DocumentKind::Html);
        assert_eq!(DocumentKind::from_path(Path::new("post.md")), DocumentKind::Markdown);
        assert_eq!(DocumentKind::from_path(Path::new("post.mdx")), DocumentKind::Markdown);
        assert_eq!(DocumentKind::from_path(Path::new("style.css")), DocumentKind::Other);
        assert_eq!(DocumentKind::from_path(Path::new("README")), DocumentKind::Other);
    }

    #[test]
    fn dispatches_on_kind() {
        let resolver = LinkResolver::new(BasePath::new("/blog"));

        let html = rewrite_document(DocumentKind::Html, r#"<a href="/x">"#, &resolver).unwrap();
        assert_eq!(html.content, r#"<a href="/blog/x">"#);

        let md = rewrite_document(DocumentKind::Markdown, "[x](/x)", &resolver).unwrap();
        assert_eq!(md.content, "[x](/blog/x)");

        assert!(rewrite_document(DocumentKind::Other, "/x", &resolver).is_none());
    }
}
