//! Link rewriting for HTML documents and fragments.
//!
//! Only attribute values inside start tags are considered. Comments and the
//! contents of `pre`, `code`, `script` and `style` elements are copied as-is.

use std::borrow::Cow;
use std::sync::OnceLock;

use regex::Regex;

use basehref_core::{LinkKind, LinkResolver};

use crate::document::Rewritten;
use crate::edit::{self, Edit};

/// Attributes whose value is a URL the browser resolves against the host.
const URL_ATTRIBUTES: [&str; 4] = ["href", "src", "action", "poster"];

/// Elements whose contents are literal text, not markup to rewrite.
const RAW_ELEMENTS: [&str; 4] = ["pre", "code", "script", "style"];

/// A comment, or a start tag with its name and attribute text.
fn tag_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"(?s)<!--.*?-->|<([A-Za-z][A-Za-z0-9:._-]*)((?:"[^"]*"|'[^']*'|[^'">])*)>"#)
            .expect("tag pattern is valid")
    })
}

/// One `name=value` attribute; the value is double, single or unquoted.
fn attribute_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"([^\s"'<>/=]+)\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'=<>`]+))"#)
            .expect("attribute pattern is valid")
    })
}

/// Result of scanning an HTML fragment.
#[derive(Debug, Default)]
pub(crate) struct Scan {
    pub edits: Vec<Edit>,

    /// Raw element opened in the fragment and not closed before its end
    pub open_raw: Option<&'static str>,
}

/// Rewrite URL attributes in an HTML document.
pub fn rewrite_html(source: &str, resolver: &LinkResolver) -> Rewritten {
    let scan = scan(source, resolver);
    let (content, links) = edit::apply(source, scan.edits);
    Rewritten { content, links }
}

/// Collect replacements for URL attributes of every start tag in `fragment`.
pub(crate) fn scan(fragment: &str, resolver: &LinkResolver) -> Scan {
    let mut result = Scan::default();
    let mut lower: Option<String> = None;
    let mut pos = 0;

    while let Some(caps) = tag_regex().captures_at(fragment, pos) {
        let Some(whole) = caps.get(0) else {
            break;
        };
        pos = whole.end();

        let (Some(name), Some(attrs)) = (caps.get(1), caps.get(2)) else {
            // comment
            continue;
        };

        result
            .edits
            .extend(attribute_edits(attrs.as_str(), resolver).map(|e| e.shifted(attrs.start())));

        let Some(raw) = raw_element(name.as_str()) else {
            continue;
        };
        if attrs.as_str().trim_end().ends_with('/') {
            continue;
        }

        let lower = lower.get_or_insert_with(|| fragment.to_ascii_lowercase());
        match lower[pos..].find(&format!("</{raw}")) {
            Some(close) => pos += close,
            None => {
                result.open_raw = Some(raw);
                break;
            }
        }
    }

    result
}

/// Whether `fragment` closes the raw element `raw`.
pub(crate) fn closes_raw(fragment: &str, raw: &str) -> bool {
    fragment
        .to_ascii_lowercase()
        .contains(&format!("</{raw}"))
}

fn raw_element(name: &str) -> Option<&'static str> {
    RAW_ELEMENTS
        .into_iter()
        .find(|raw| raw.eq_ignore_ascii_case(name))
}

/// Replacements for URL attributes in the attribute text of one tag.
fn attribute_edits<'a>(
    attrs: &'a str,
    resolver: &'a LinkResolver,
) -> impl Iterator<Item = Edit> + 'a {
    attribute_regex().captures_iter(attrs).filter_map(|caps| {
        let name = caps.get(1)?;
        if !URL_ATTRIBUTES
            .iter()
            .any(|attr| attr.eq_ignore_ascii_case(name.as_str()))
        {
            return None;
        }

        let value = caps.get(2).or_else(|| caps.get(3)).or_else(|| caps.get(4))?;
        if !LinkKind::parse(value.as_str()).needs_base() {
            return None;
        }

        match resolver.resolve(value.as_str()) {
            Cow::Owned(resolved) => Some(Edit::new(value.range(), resolved)),
            Cow::Borrowed(_) => None,
        }
    })
}
