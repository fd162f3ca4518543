//! Deployment base path.

use std::fmt;

use serde::{Deserialize, Serialize};

/// URL sub-path the site is served under, e.g. `/blog/`.
///
/// Always starts and ends with exactly one `/`. An empty configured value
/// and `/` both mean "deployed at the domain root".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct BasePath(String);

impl BasePath {
    /// Normalize a configured base path.
    ///
    /// `blog`, `/blog` and `/blog//` all become `/blog/`.
    pub fn new(raw: &str) -> Self {
        let inner = raw.trim_matches('/');

        if inner.is_empty() {
            Self::root()
        } else {
            Self(format!("/{inner}/"))
        }
    }

    /// Base path for a site deployed at the domain root.
    pub fn root() -> Self {
        Self("/".to_string())
    }

    /// Whether the site is deployed at the domain root.
    #[inline]
    pub fn is_root(&self) -> bool {
        self.0 == "/"
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for BasePath {
    fn default() -> Self {
        Self::root()
    }
}

impl From<String> for BasePath {
    fn from(raw: String) -> Self {
        Self::new(&raw)
    }
}

impl From<&str> for BasePath {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<BasePath> for String {
    fn from(base: BasePath) -> Self {
        base.0
    }
}

impl AsRef<str> for BasePath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BasePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adds_leading_and_trailing_slash() {
        assert_eq!(BasePath::new("/blog").as_str(), "/blog/");
        assert_eq!(BasePath::new("blog").as_str(), "/blog/");
        assert_eq!(BasePath::new("blog/").as_str(), "/blog/");
        assert_eq!(BasePath::new("/blog/").as_str(), "/blog/");
    }

    #[test]
    fn collapses_repeated_edge_slashes() {
        assert_eq!(BasePath::new("//blog//").as_str(), "/blog/");
    }

    #[test]
    fn keeps_nested_segments() {
        assert_eq!(BasePath::new("/docs/v2").as_str(), "/docs/v2/");
    }

    #[test]
    fn empty_and_slash_are_root() {
        assert!(BasePath::new("").is_root());
        assert!(BasePath::new("/").is_root());
        assert!(BasePath::default().is_root());
        assert!(!BasePath::new("/blog").is_root());
    }

    #[test]
    fn displays_normalized_value() {
        assert_eq!(BasePath::from("/blog").to_string(), "/blog/");
    }
}
