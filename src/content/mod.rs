//! Content segmentation for question text.
//!
//! Question content mixes prose with LaTeX-style math markup and arrives
//! with inconsistent line-break escaping. [`segment`] turns one content
//! string into an ordered sequence of typed [`Segment`]s ready for a
//! renderer: normalize line breaks first, then split on math delimiters.

mod normalize;
mod splitter;

pub use normalize::normalize_line_breaks;
pub use splitter::{split_math, Segment, SegmentKind};

/// Splits a content string into renderable segments.
///
/// Total over any input: there is no failure mode. An empty string yields an
/// empty sequence.
pub fn segment(content: &str) -> Vec<Segment> {
    split_math(&normalize_line_breaks(content))
}
