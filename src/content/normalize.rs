//! Line-break normalization for question text.
//!
//! Upstream data entry leaves two kinds of broken line breaks in content
//! strings: a literal two-character `\n` escape (spreadsheet exports) and a
//! `<br>` placeholder token. Both become real newlines before any math
//! detection runs.

/// Literal backslash-n left over from spreadsheet exports.
const ESCAPED_NEWLINE: &str = "\\n";

/// Placeholder token some sources use for an explicit line break.
const LINE_BREAK_TOKEN: &str = "<br>";

/// Replaces every escaped newline and line-break token with a real newline.
///
/// Purely textual substitution, applied once per content string.
pub fn normalize_line_breaks(content: &str) -> String {
    content
        .replace(ESCAPED_NEWLINE, "\n")
        .replace(LINE_BREAK_TOKEN, "\n")
}
