//! Record loading from the three interchangeable source kinds.
//!
//! Fatal conditions (source missing, empty, malformed, missing column) abort
//! the load with a [`DataSourceError`]; per-record problems are logged and
//! the record is dropped. The two policies intentionally differ for bad year
//! values: a table with one non-integer year aborts, a directory with one
//! non-integer year filename just loses that file.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde_json::Value;
use tracing::{debug, warn};

use super::filename;
use super::{DataSourceError, Record};

/// A directory of filename-encoded question scans, with an optional
/// companion solutions directory.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    pub images: PathBuf,
    pub solutions: Option<PathBuf>,
}

/// The three interchangeable origins for record data.
#[derive(Debug, Clone)]
pub enum RecordSource {
    /// Entries already in memory as JSON field mappings.
    Inline(Vec<Value>),
    /// A CSV table with header `topic,section,year,content`.
    Table(PathBuf),
    /// A directory of `<topic>_<section>_<year>[_<code>].<ext>` images.
    Directory(DirectorySource),
}

/// Loads all records from a source.
///
/// The returned order is unspecified; filtering and sorting are the caller's
/// concern. Loading is a pure function of the source state, so results are
/// safe to cache by source identity.
pub fn load(source: &RecordSource) -> Result<Vec<Record>, DataSourceError> {
    match source {
        RecordSource::Inline(entries) => Ok(load_inline(entries)),
        RecordSource::Table(path) => load_table(path),
        RecordSource::Directory(dirs) => load_directory(dirs),
    }
}

/// Loads records from in-memory JSON field mappings.
///
/// Non-conforming entries are skipped with a diagnostic; this source has no
/// fatal conditions.
pub fn load_inline(entries: &[Value]) -> Vec<Record> {
    let mut records = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        match record_from_value(entry) {
            Ok(record) => records.push(record),
            Err(e) => warn!("skipping inline entry {}: {:#}", index, e),
        }
    }
    debug!(
        "loaded {} of {} inline entries",
        records.len(),
        entries.len()
    );
    records
}

/// Parse one inline entry.
fn record_from_value(value: &Value) -> Result<Record> {
    let entry = value.as_object().context("entry must be a JSON object")?;

    let topic = entry
        .get("topic")
        .and_then(Value::as_str)
        .context("missing 'topic' field")?;
    let section = entry
        .get("section")
        .and_then(Value::as_str)
        .context("missing 'section' field")?;
    let year = year_from_value(entry.get("year").context("missing 'year' field")?)?;
    let code = entry.get("code").and_then(Value::as_str).unwrap_or("");

    let content = entry.get("content").and_then(Value::as_str);
    let image = entry.get("image").and_then(Value::as_str);

    match (content, image) {
        (Some(content), None) => Ok(Record::text(topic, section, year, code, content)),
        (None, Some(image)) => {
            let solution = entry
                .get("solution")
                .and_then(Value::as_str)
                .map(PathBuf::from);
            Ok(Record::image(topic, section, year, code, image, solution))
        }
        (Some(_), Some(_)) => bail!("'content' and 'image' are mutually exclusive"),
        (None, None) => bail!("entry needs either 'content' or 'image'"),
    }
}

/// Coerce a JSON year value to an integer.
fn year_from_value(value: &Value) -> Result<i32> {
    match value {
        Value::Number(n) => {
            let year = n
                .as_i64()
                .with_context(|| format!("year {} is not an integer", n))?;
            i32::try_from(year).with_context(|| format!("year {} is out of range", year))
        }
        Value::String(s) => s
            .trim()
            .parse()
            .with_context(|| format!("year '{}' is not an integer", s)),
        other => bail!("year must be a number or numeric string, got {}", other),
    }
}

/// Positions of the required columns within a table header.
struct TableColumns {
    topic: usize,
    section: usize,
    year: usize,
    content: usize,
}

impl TableColumns {
    fn locate(path: &Path, headers: &csv::StringRecord) -> Result<Self, DataSourceError> {
        let find = |column: &str| {
            headers
                .iter()
                .position(|h| h == column)
                .ok_or_else(|| DataSourceError::MissingColumn {
                    path: path.to_path_buf(),
                    column: column.to_string(),
                })
        };
        Ok(Self {
            topic: find("topic")?,
            section: find("section")?,
            year: find("year")?,
            content: find("content")?,
        })
    }

    fn record_from_row(
        &self,
        path: &Path,
        row: &csv::StringRecord,
        line: usize,
    ) -> Result<Record, DataSourceError> {
        let field = |index: usize| row.get(index).unwrap_or("");
        let token = field(self.year);
        // One bad year value aborts the whole table load.
        let year: i32 = token.parse().map_err(|_| DataSourceError::Malformed {
            path: path.to_path_buf(),
            message: format!("line {}: year '{}' is not an integer", line, token),
        })?;
        Ok(Record::text(
            field(self.topic),
            field(self.section),
            year,
            "",
            field(self.content),
        ))
    }
}

/// Loads records from a delimited table file.
fn load_table(path: &Path) -> Result<Vec<Record>, DataSourceError> {
    if !path.is_file() {
        return Err(DataSourceError::NotFound {
            path: path.to_path_buf(),
        });
    }
    let raw = fs::read_to_string(path).map_err(|e| DataSourceError::Malformed {
        path: path.to_path_buf(),
        message: format!("unreadable: {}", e),
    })?;
    if raw.trim().is_empty() {
        return Err(DataSourceError::Empty {
            path: path.to_path_buf(),
        });
    }

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(raw.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| DataSourceError::Malformed {
            path: path.to_path_buf(),
            message: format!("header: {}", e),
        })?
        .clone();
    let columns = TableColumns::locate(path, &headers)?;

    let mut records = Vec::new();
    for (index, row) in reader.records().enumerate() {
        let line = index + 2; // header is line 1
        let row = row.map_err(|e| DataSourceError::Malformed {
            path: path.to_path_buf(),
            message: format!("line {}: {}", line, e),
        })?;
        records.push(columns.record_from_row(path, &row, line)?);
    }

    if records.is_empty() {
        return Err(DataSourceError::Empty {
            path: path.to_path_buf(),
        });
    }
    debug!("loaded {} records from {}", records.len(), path.display());
    Ok(records)
}

/// Loads records from a directory of filename-encoded question images.
fn load_directory(source: &DirectorySource) -> Result<Vec<Record>, DataSourceError> {
    let images = &source.images;
    if !images.is_dir() {
        return Err(DataSourceError::NotFound {
            path: images.clone(),
        });
    }

    let entries = fs::read_dir(images).map_err(|e| DataSourceError::Malformed {
        path: images.clone(),
        message: format!("unreadable: {}", e),
    })?;
    let mut image_files: Vec<PathBuf> = entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && filename::has_image_extension(path))
        .collect();
    image_files.sort();

    if image_files.is_empty() {
        return Err(DataSourceError::Empty {
            path: images.clone(),
        });
    }

    let solutions = solution_index(source.solutions.as_deref());

    let mut records = Vec::with_capacity(image_files.len());
    for path in image_files {
        let stem = match path.file_stem().and_then(|s| s.to_str()) {
            Some(stem) => stem,
            None => {
                warn!("skipping {}: non-UTF-8 filename", path.display());
                continue;
            }
        };
        match filename::parse_stem(stem) {
            Ok(parsed) => {
                let solution = filename::solution_stem(parsed.year, &parsed.code)
                    .and_then(|key| solutions.get(&key).cloned());
                records.push(Record::image(
                    parsed.topic,
                    parsed.section,
                    parsed.year,
                    parsed.code,
                    path,
                    solution,
                ));
            }
            Err(e) => warn!("skipping {}: {}", path.display(), e),
        }
    }
    debug!(
        "loaded {} records from {}",
        records.len(),
        images.display()
    );
    Ok(records)
}

/// Index of solution images keyed by filename stem.
///
/// An absent or unreadable solutions directory is not fatal; records simply
/// get no solution path.
fn solution_index(dir: Option<&Path>) -> HashMap<String, PathBuf> {
    let mut index = HashMap::new();
    let Some(dir) = dir else {
        return index;
    };
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            warn!("solutions directory {} unavailable: {}", dir.display(), e);
            return index;
        }
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if !path.is_file() || !filename::has_image_extension(&path) {
            continue;
        }
        if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
            index.insert(stem.to_string(), path);
        }
    }
    index
}
