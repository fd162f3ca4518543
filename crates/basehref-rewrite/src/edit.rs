//! Byte-range replacements over a source string.

use std::ops::Range;

/// Replace `range` of the source with `replacement`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Edit {
    pub range: Range<usize>,
    pub replacement: String,
}

impl Edit {
    pub fn new(range: Range<usize>, replacement: String) -> Self {
        Self { range, replacement }
    }

    pub fn shifted(mut self, offset: usize) -> Self {
        self.range = self.range.start + offset..self.range.end + offset;
        self
    }
}

/// Apply edits to `source`.
///
/// Edits are applied in source order. An edit overlapping one already
/// applied is dropped. Returns the new text and the number of edits applied.
pub(crate) fn apply(source: &str, mut edits: Vec<Edit>) -> (String, usize) {
    edits.sort_by_key(|e| (e.range.start, e.range.end));

    let mut out = String::with_capacity(source.len() + edits.len() * 8);
    let mut cursor = 0;
    let mut applied = 0;

    for edit in edits {
        if edit.range.start < cursor || edit.range.end > source.len() {
            tracing::debug!("Dropping overlapping edit at {:?}", edit.range);
            continue;
        }
        out.push_str(&source[cursor..edit.range.start]);
        out.push_str(&edit.replacement);
        cursor = edit.range.end;
        applied += 1;
    }

    out.push_str(&source[cursor..]);
    (out, applied)
}
