//! Link rewriting for Markdown and MDX sources.
//!
//! The source is parsed only to locate link destinations; everything else is
//! copied byte for byte. Rewritten places:
//!
//! - inline link and image destinations: `[text](/posts/a)`, `![alt](/img.png)`
//! - reference definitions: `[a]: /posts/a`
//! - URL attributes inside raw HTML and JSX tags
//!
//! Code spans, fenced and indented code blocks, YAML frontmatter and the
//! contents of raw `pre`/`code`/`script`/`style` elements are left alone.

use std::borrow::Cow;
use std::ops::Range;

use pulldown_cmark::{Event, LinkType, Options, Parser, Tag, TagEnd};

use basehref_core::{LinkKind, LinkResolver};

use crate::document::Rewritten;
use crate::edit::{self, Edit};
use crate::html;

fn options() -> Options {
    Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_YAML_STYLE_METADATA_BLOCKS
}

/// Rewrite link destinations in a Markdown document.
pub fn rewrite_markdown(source: &str, resolver: &LinkResolver) -> Rewritten {
    let parser = Parser::new_ext(source, options());

    let definitions: Vec<(Range<usize>, String)> = parser
        .reference_definitions()
        .iter()
        .map(|(_, def)| (def.span.clone(), def.dest.to_string()))
        .collect();

    let mut edits = Vec::new();
    // raw element (`<code>`, `<pre>`, ...) opened by inline HTML in this paragraph
    let mut open_raw: Option<&'static str> = None;
    // lines of the HTML block being read, scanned as a whole at its end
    let mut html_block: Option<Range<usize>> = None;

    for (span, dest) in &definitions {
        if let Some(edit) = destination_edit(source, span.clone(), "]:", dest, resolver) {
            edits.push(edit);
        }
    }

    for (event, range) in parser.into_offset_iter() {
        match event {
            Event::Start(Tag::Link {
                link_type: LinkType::Inline,
                dest_url,
                ..
            })
            | Event::Start(Tag::Image {
                link_type: LinkType::Inline,
                dest_url,
                ..
            }) => {
                if open_raw.is_some() {
                    continue;
                }
                if let Some(edit) = destination_edit(source, range, "](", &dest_url, resolver) {
                    edits.push(edit);
                }
            }

            Event::Html(_) => {
                html_block = Some(match html_block.take() {
                    Some(block) => block.start..range.end,
                    None => range,
                });
            }

            Event::End(TagEnd::HtmlBlock) => {
                if let Some(block) = html_block.take() {
                    let scan = html::scan(&source[block.clone()], resolver);
                    edits.extend(scan.edits.into_iter().map(|e| e.shifted(block.start)));
                }
            }

            Event::InlineHtml(_) => {
                let fragment = &source[range.clone()];

                if let Some(raw) = open_raw {
                    if html::closes_raw(fragment, raw) {
                        open_raw = None;
                    }
                    continue;
                }

                let inline = html::scan(fragment, resolver);
                edits.extend(inline.edits.into_iter().map(|e| e.shifted(range.start)));
                open_raw = inline.open_raw;
            }

            Event::End(TagEnd::Paragraph) => open_raw = None,

            _ => {}
        }
    }

    let (content, links) = edit::apply(source, edits);
    Rewritten { content, links }
}

/// Build the replacement for a destination `dest` inside `source[span]`.
///
/// The destination is the text following `marker` (`](` for inline links,
/// `]:` for definitions), after optional whitespace and an optional `<`.
fn destination_edit(
    source: &str,
    span: Range<usize>,
    marker: &str,
    dest: &str,
    resolver: &LinkResolver,
) -> Option<Edit> {
    if !LinkKind::parse(dest).needs_base() {
        return None;
    }
    let Cow::Owned(resolved) = resolver.resolve(dest) else {
        return None;
    };

    let segment = source.get(span.clone())?;
    let Some(offset) = locate_destination(segment, marker, dest) else {
        tracing::debug!("Could not locate link destination {:?} at {:?}", dest, span);
        return None;
    };

    let start = span.start + offset;
    Some(Edit::new(start..start + dest.len(), resolved))
}

/// Byte offset of `dest` within `segment`, searching from the last `marker`.
fn locate_destination(segment: &str, marker: &str, dest: &str) -> Option<usize> {
    for (pos, _) in segment.rmatch_indices(marker) {
        let after = pos + marker.len();
        let rest = &segment[after..];
        let trimmed = rest.trim_start();
        let mut start = after + (rest.len() - trimmed.len());

        let candidate = match trimmed.strip_prefix('<') {
            Some(inner) => {
                start += 1;
                inner
            }
            None => trimmed,
        };

        let Some(tail) = candidate.strip_prefix(dest) else {
            continue;
        };
        let terminated = tail.is_empty()
            || tail.starts_with(|c: char| c.is_whitespace() || c == ')' || c == '>');
        if terminated {
            return Some(start);
        }
    }
    None
}
