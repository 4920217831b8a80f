//! Math-delimiter scanner.
//!
//! Splits a content string into plain-text, inline-math (`$...$`), and
//! block-math (`$$...$$`) segments. The scan is left to right and non-greedy;
//! a doubled delimiter is never mis-split into two singles, and an
//! unterminated delimiter leaves the whole trailing span as plain text.

use serde::Serialize;

/// Math delimiter character.
const DELIMITER: &str = "$";

/// Block math delimiter (doubled).
const BLOCK_DELIMITER: &str = "$$";

/// The kind of a content segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentKind {
    Text,
    InlineMath,
    BlockMath,
}

/// One typed chunk of a content string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    pub kind: SegmentKind,
    /// Renderable payload. Block math has the outer `$$` removed and its
    /// escaping repaired; inline math keeps its `$` delimiters so the
    /// renderer can apply its own convention; plain text is passed through.
    pub text: String,
    /// The uncut span of the input this segment was produced from.
    /// Concatenating the sources of all segments in order reconstructs the
    /// normalized input exactly.
    pub source: String,
}

impl Segment {
    pub fn text(span: impl Into<String>) -> Self {
        let span = span.into();
        Self {
            kind: SegmentKind::Text,
            text: span.clone(),
            source: span,
        }
    }

    /// Inline math from its full `$...$` span, delimiters kept.
    pub fn inline_math(span: impl Into<String>) -> Self {
        let span = span.into();
        Self {
            kind: SegmentKind::InlineMath,
            text: span.clone(),
            source: span,
        }
    }

    /// Block math from its full `$$...$$` span; the payload is the inner
    /// content, trimmed and with its escaping repaired.
    pub fn block_math(span: impl Into<String>) -> Self {
        let span = span.into();
        let inner = &span[BLOCK_DELIMITER.len()..span.len() - BLOCK_DELIMITER.len()];
        Self {
            kind: SegmentKind::BlockMath,
            text: repair_escaping(inner.trim()),
            source: span,
        }
    }
}

/// Undo the double-escaping artifact common in upstream data entry:
/// doubled backslashes collapse to single, escaped underscores unescape.
fn repair_escaping(inner: &str) -> String {
    inner.replace("\\\\", "\\").replace("\\_", "_")
}

/// Splits an already-normalized string on math delimiters.
///
/// Empty plain-text runs (adjacent matches, leading/trailing delimiters) are
/// dropped rather than emitted as empty segments.
pub fn split_math(input: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut plain_start = 0;
    let mut cursor = 0;

    while let Some(offset) = input[cursor..].find(DELIMITER) {
        let start = cursor + offset;

        if input[start..].starts_with(BLOCK_DELIMITER) {
            // Block math; the doubled delimiter wins over two singles.
            let body_start = start + BLOCK_DELIMITER.len();
            match input[body_start..].find(BLOCK_DELIMITER) {
                Some(close) => {
                    let end = body_start + close + BLOCK_DELIMITER.len();
                    push_plain(&mut segments, &input[plain_start..start]);
                    segments.push(Segment::block_math(&input[start..end]));
                    plain_start = end;
                    cursor = end;
                }
                // Unterminated: the whole trailing span stays plain.
                None => break,
            }
        } else {
            let body_start = start + DELIMITER.len();
            match input[body_start..].find(DELIMITER) {
                Some(close) => {
                    let end = body_start + close + DELIMITER.len();
                    push_plain(&mut segments, &input[plain_start..start]);
                    segments.push(Segment::inline_math(&input[start..end]));
                    plain_start = end;
                    cursor = end;
                }
                None => break,
            }
        }
    }

    push_plain(&mut segments, &input[plain_start..]);
    segments
}

fn push_plain(segments: &mut Vec<Segment>, span: &str) {
    if !span.is_empty() {
        segments.push(Segment::text(span));
    }
}
