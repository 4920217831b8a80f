//! Filtering and sorting of loaded records.
//!
//! Pure functions of explicit inputs: the interactive shell owns whatever
//! selection state it likes and hands the resulting [`Criteria`] here.

use std::collections::BTreeSet;
use std::ops::RangeInclusive;

use crate::records::Record;

/// A filter selection: accepted topic codes, accepted section codes, and an
/// inclusive year range.
///
/// A record matches when all three dimensions match. An empty accepted-set
/// matches nothing on that dimension, not everything.
#[derive(Debug, Clone)]
pub struct Criteria {
    pub topics: BTreeSet<String>,
    pub sections: BTreeSet<String>,
    pub years: RangeInclusive<i32>,
}

impl Criteria {
    pub fn matches(&self, record: &Record) -> bool {
        self.topics.contains(&record.topic)
            && self.sections.contains(&record.section)
            && self.years.contains(&record.year)
    }
}

/// Primary sort key; the other two dimensions break ties, and year always
/// sorts newest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Year descending, then topic, then section.
    #[default]
    YearDesc,
    /// Topic, then section, then year descending.
    Topic,
    /// Section, then topic, then year descending.
    Section,
}

/// Returns the records matching the criteria, in load order.
pub fn filter(records: &[Record], criteria: &Criteria) -> Vec<Record> {
    records
        .iter()
        .filter(|record| criteria.matches(record))
        .cloned()
        .collect()
}

/// Sorts records by the given key (stable).
pub fn sort(records: &mut [Record], key: SortKey) {
    match key {
        SortKey::YearDesc => records.sort_by(|a, b| {
            b.year
                .cmp(&a.year)
                .then_with(|| a.topic.cmp(&b.topic))
                .then_with(|| a.section.cmp(&b.section))
        }),
        SortKey::Topic => records.sort_by(|a, b| {
            a.topic
                .cmp(&b.topic)
                .then_with(|| a.section.cmp(&b.section))
                .then_with(|| b.year.cmp(&a.year))
        }),
        SortKey::Section => records.sort_by(|a, b| {
            a.section
                .cmp(&b.section)
                .then_with(|| a.topic.cmp(&b.topic))
                .then_with(|| b.year.cmp(&a.year))
        }),
    }
}
