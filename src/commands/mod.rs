//! CLI command handlers and the argument structs they share.

pub mod config;
pub mod list;
pub mod show;

use std::collections::BTreeSet;
use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Args;

use qbank::filter::{Criteria, SortKey};
use qbank::records::{self, DirectorySource, Record, RecordSource};
use qbank::Config;

/// Where to load records from. Flags win over configured defaults.
#[derive(Debug, Args)]
pub struct SourceArgs {
    /// CSV table of text questions
    #[arg(long, value_name = "FILE", conflicts_with = "images")]
    pub table: Option<PathBuf>,

    /// Directory of filename-encoded question images
    #[arg(long, value_name = "DIR")]
    pub images: Option<PathBuf>,

    /// Companion solutions directory (with --images)
    #[arg(long, value_name = "DIR", requires = "images")]
    pub solutions: Option<PathBuf>,
}

impl SourceArgs {
    /// Resolves the record source from flags, falling back to configured
    /// defaults.
    pub fn resolve(&self, config: &Config) -> Result<RecordSource> {
        if let Some(table) = &self.table {
            return Ok(RecordSource::Table(table.clone()));
        }
        if let Some(images) = &self.images {
            return Ok(RecordSource::Directory(DirectorySource {
                images: images.clone(),
                solutions: self
                    .solutions
                    .clone()
                    .or_else(|| config.sources.solutions.clone()),
            }));
        }
        if let Some(table) = &config.sources.table {
            return Ok(RecordSource::Table(table.clone()));
        }
        if let Some(images) = &config.sources.images {
            return Ok(RecordSource::Directory(DirectorySource {
                images: images.clone(),
                solutions: config.sources.solutions.clone(),
            }));
        }
        bail!("no source given; pass --table or --images, or set one with `qbank config`")
    }
}

/// Filter and sort selection.
#[derive(Debug, Args)]
pub struct FilterArgs {
    /// Topic code to include (repeatable; default: all observed)
    #[arg(long = "topic", value_name = "CODE")]
    pub topics: Vec<String>,

    /// Section code to include (repeatable; default: all observed)
    #[arg(long = "section", value_name = "CODE")]
    pub sections: Vec<String>,

    /// Lower bound of the year range, inclusive (default: oldest observed)
    #[arg(long, value_name = "YEAR")]
    pub from: Option<i32>,

    /// Upper bound of the year range, inclusive (default: newest observed)
    #[arg(long, value_name = "YEAR")]
    pub until: Option<i32>,

    /// Sort order
    #[arg(long, value_enum, default_value_t = SortArg::Year)]
    pub sort: SortArg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum SortArg {
    /// Newest first, then topic, then section
    Year,
    /// Topic, then section, newest first
    Topic,
    /// Section, then topic, newest first
    Section,
}

impl From<SortArg> for SortKey {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Year => SortKey::YearDesc,
            SortArg::Topic => SortKey::Topic,
            SortArg::Section => SortKey::Section,
        }
    }
}

impl FilterArgs {
    /// Builds criteria against a loaded set.
    ///
    /// Omitted flags select every code (and the full year span) observed in
    /// the set - the all-boxes-ticked startup state of a filter panel. The
    /// core criteria still treat an explicit empty set as matching nothing.
    pub fn criteria(&self, records: &[Record]) -> Criteria {
        let topics: BTreeSet<String> = if self.topics.is_empty() {
            records.iter().map(|r| r.topic.clone()).collect()
        } else {
            self.topics.iter().cloned().collect()
        };
        let sections: BTreeSet<String> = if self.sections.is_empty() {
            records.iter().map(|r| r.section.clone()).collect()
        } else {
            self.sections.iter().cloned().collect()
        };
        let from = self
            .from
            .unwrap_or_else(|| records.iter().map(|r| r.year).min().unwrap_or(i32::MIN));
        let until = self
            .until
            .unwrap_or_else(|| records.iter().map(|r| r.year).max().unwrap_or(i32::MAX));
        Criteria {
            topics,
            sections,
            years: from..=until,
        }
    }
}

/// Load, filter, and sort in one step, shared by `list` and `show`.
pub fn select(source: &SourceArgs, filters: &FilterArgs, config: &Config) -> Result<Vec<Record>> {
    let source = source.resolve(config)?;
    let records = records::load(&source)?;
    let criteria = filters.criteria(&records);
    let mut matched = qbank::filter::filter(&records, &criteria);
    qbank::filter::sort(&mut matched, filters.sort.into());
    Ok(matched)
}
