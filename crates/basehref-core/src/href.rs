//! Base-path aware link resolution.
//!
//! Root-relative links written in content (`/posts/foo`) point at the domain
//! root. When the site is deployed under a sub-path they have to be prefixed
//! with it, while every other link (relative, external, scheme-qualified,
//! fragments) must be left alone.
//!
//! | Input | Base `/blog` |
//! |-------|--------------|
//! | `/posts/foo` | `/blog/posts/foo` |
//! | `/` | `/blog/` |
//! | `posts/foo` | `posts/foo` |
//! | `https://example.com/x` | `https://example.com/x` |
//! | `""` | `""` |

use std::borrow::Cow;

use crate::base::BasePath;

/// Resolve the `href` an anchor should use for `path` under `base`.
///
/// A single leading `/` is replaced by the base path; anything that does not
/// start with `/` is returned unchanged.
pub fn href(path: &str, base: &BasePath) -> String {
    resolve(path, base).into_owned()
}

/// Borrowing form of [`href`]: pass-through inputs are not copied.
pub fn resolve<'a>(path: &'a str, base: &BasePath) -> Cow<'a, str> {
    match path.strip_prefix('/') {
        Some(rest) => {
            let mut out = String::with_capacity(base.as_str().len() + rest.len());
            out.push_str(base.as_str());
            out.push_str(rest);
            Cow::Owned(out)
        }
        None => Cow::Borrowed(path),
    }
}

/// Link resolver bound to one deployment base path.
///
/// Built once from configuration and shared by reference wherever links are
/// rendered or rewritten.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkResolver {
    base: BasePath,
}

impl LinkResolver {
    pub fn new(base: BasePath) -> Self {
        Self { base }
    }

    pub fn base(&self) -> &BasePath {
        &self.base
    }

    /// Resolve `path` into the string an anchor should use as its `href`.
    pub fn href(&self, path: &str) -> String {
        href(path, &self.base)
    }

    /// Resolve `path`, borrowing it when no prefix is needed.
    pub fn resolve<'a>(&self, path: &'a str) -> Cow<'a, str> {
        resolve(path, &self.base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn blog() -> LinkResolver {
        LinkResolver::new(BasePath::new("/blog"))
    }

    #[test]
    fn prefixes_root_relative_link() {
        assert_eq!(blog().href("/posts/my-post"), "/blog/posts/my-post");
    }

    #[test]
    fn root_link_keeps_trailing_slash() {
        assert_eq!(blog().href("/"), "/blog/");
    }

    #[test]
    fn passes_through_relative_link() {
        assert_eq!(blog().href("posts/my-post"), "posts/my-post");
        assert_eq!(blog().href("./posts/my-post"), "./posts/my-post");
        assert_eq!(blog().href("../index.html"), "../index.html");
    }

    #[test]
    fn passes_through_external_links() {
        assert_eq!(blog().href("https://example.com/x"), "https://example.com/x");
        assert_eq!(blog().href("mailto:me@example.com"), "mailto:me@example.com");
        assert_eq!(blog().href("#comments"), "#comments");
    }

    #[test]
    fn empty_input_is_unchanged() {
        assert_eq!(blog().href(""), "");
    }

    #[test]
    fn strips_exactly_one_leading_slash() {
        assert_eq!(blog().href("//cdn.example.com/a.js"), "/blog//cdn.example.com/a.js");
    }

    #[test]
    fn root_base_leaves_root_relative_links_as_written() {
        let resolver = LinkResolver::default();
        assert_eq!(resolver.href("/posts/a"), "/posts/a");
        assert_eq!(resolver.href("/"), "/");
    }

    #[test]
    fn resolving_twice_prefixes_twice() {
        let resolver = blog();
        let once = resolver.href("/x");
        let twice = resolver.href(&once);

        assert_eq!(once, "/blog/x");
        assert_eq!(twice, "/blog/blog/x");
        assert_ne!(once, twice);
    }

    #[test]
    fn non_slash_inputs_are_fixed_points() {
        let resolver = blog();
        let inputs = [
            "",
            " ",
            "a",
            "posts/",
            "./x",
            "../x",
            "?q=1",
            "#top",
            "https://host/blog/",
            "tel:+81-3-0000",
            "data:text/plain,hi",
            "\\windows\\path",
            "日本語/ページ",
            " /leading-space",
        ];

        for input in inputs {
            assert_eq!(resolver.href(input), input, "input {input:?}");
            assert!(matches!(resolver.resolve(input), Cow::Borrowed(_)));
        }
    }

    #[test]
    fn slash_inputs_are_base_plus_remainder() {
        let inputs = [
            "/",
            "//",
            "/a",
            "/a/b/c/",
            "/posts/my-post?x=1#frag",
            "/日本語/",
            "/ space",
            "/#top",
        ];

        for base in ["/blog", "", "/", "nested/deep/"] {
            let base = BasePath::new(base);
            let resolver = LinkResolver::new(base.clone());

            for input in inputs {
                let expected = format!("{}{}", base, &input[1..]);
                assert_eq!(resolver.href(input), expected, "input {input:?} base {base}");
            }
        }
    }

    #[test]
    fn free_function_matches_resolver() {
        let base = BasePath::new("/blog");
        assert_eq!(href("/a", &base), blog().href("/a"));
        assert_eq!(href("a", &base), blog().href("a"));
    }
}
