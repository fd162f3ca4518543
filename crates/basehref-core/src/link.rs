//! Syntactic link classification.

use serde::Serialize;

/// What a link string looks like, judged from its spelling alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LinkKind {
    /// Has a URI scheme (`https:`, `mailto:`, `tel:`, ...).
    External,
    /// Starts with `//`; the host comes from the link itself.
    ProtocolRelative,
    /// Pure anchor on the current page (`#section`).
    Fragment,
    /// Resolved against the domain root (`/about`).
    SiteRoot,
    /// Resolved against the current document (`./img.png`, `post`, `""`).
    Relative,
}

impl LinkKind {
    pub fn parse(link: &str) -> Self {
        if has_scheme(link) {
            Self::External
        } else if link.starts_with("//") {
            Self::ProtocolRelative
        } else if link.starts_with('#') {
            Self::Fragment
        } else if link.starts_with('/') {
            Self::SiteRoot
        } else {
            Self::Relative
        }
    }

    /// Whether the base path should be applied to links of this kind.
    #[inline]
    pub fn needs_base(self) -> bool {
        self == Self::SiteRoot
    }
}

/// `scheme ":"` where scheme is `ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`.
fn has_scheme(link: &str) -> bool {
    let Some(pos) = link.find(':') else {
        return false;
    };
    let scheme = &link[..pos];

    scheme.starts_with(|c: char| c.is_ascii_alphabetic())
        && scheme
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_external() {
        assert_eq!(LinkKind::parse("https://example.com"), LinkKind::External);
        assert_eq!(LinkKind::parse("mailto:user@example.com"), LinkKind::External);
        assert_eq!(LinkKind::parse("tel:+1234567890"), LinkKind::External);
        assert_eq!(LinkKind::parse("git+ssh://host/repo"), LinkKind::External);
    }

    #[test]
    fn colon_in_path_is_not_a_scheme() {
        assert_eq!(LinkKind::parse("/posts/a:b"), LinkKind::SiteRoot);
        assert_eq!(LinkKind::parse("./a:b"), LinkKind::Relative);
        assert_eq!(LinkKind::parse("1abc:x"), LinkKind::Relative);
        assert_eq!(LinkKind::parse(":x"), LinkKind::Relative);
    }

    #[test]
    fn parses_protocol_relative() {
        assert_eq!(
            LinkKind::parse("//cdn.example.com/lib.js"),
            LinkKind::ProtocolRelative
        );
    }

    #[test]
    fn parses_fragment() {
        assert_eq!(LinkKind::parse("#section"), LinkKind::Fragment);
        assert_eq!(LinkKind::parse("#"), LinkKind::Fragment);
    }

    #[test]
    fn parses_site_root() {
        assert_eq!(LinkKind::parse("/"), LinkKind::SiteRoot);
        assert_eq!(LinkKind::parse("/posts/hello"), LinkKind::SiteRoot);
        assert!(LinkKind::parse("/about").needs_base());
    }

    #[test]
    fn parses_relative() {
        assert_eq!(LinkKind::parse("./image.png"), LinkKind::Relative);
        assert_eq!(LinkKind::parse("../other"), LinkKind::Relative);
        assert_eq!(LinkKind::parse("posts/hello"), LinkKind::Relative);
        assert_eq!(LinkKind::parse(""), LinkKind::Relative);
        assert!(!LinkKind::parse("posts").needs_base());
    }
}
