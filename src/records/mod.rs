//! Question records and the loaders that produce them.
//!
//! A [`Record`] is one filterable unit of displayable content, tagged with
//! topic, section, year, and an optional code. Records come from one of three
//! interchangeable sources (see [`RecordSource`]); once loaded they are
//! immutable, and loading the same source state twice yields the same set.

mod error;
pub mod filename;
mod loader;

pub use error::DataSourceError;
pub use loader::{load, load_inline, DirectorySource, RecordSource};

use std::path::{Path, PathBuf};

use serde::Serialize;

/// The content carried by a record: either inline text or an image scan.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RecordBody {
    /// Inline text, possibly containing `$...$` / `$$...$$` math markup.
    Text { content: String },
    /// A scanned question image, with an optional companion solution image.
    Image {
        path: PathBuf,
        #[serde(skip_serializing_if = "Option::is_none")]
        solution: Option<PathBuf>,
    },
}

/// One question record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    /// Short topic code; display label resolved via the config lookup table.
    pub topic: String,
    /// Short section code (e.g. short answer vs long answer).
    pub section: String,
    /// Provenance year.
    pub year: i32,
    /// Free-form discriminator for records sharing topic/section/year.
    /// Empty when the source carries none.
    pub code: String,
    pub body: RecordBody,
}

impl Record {
    pub fn text(
        topic: impl Into<String>,
        section: impl Into<String>,
        year: i32,
        code: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            topic: topic.into(),
            section: section.into(),
            year,
            code: code.into(),
            body: RecordBody::Text {
                content: content.into(),
            },
        }
    }

    pub fn image(
        topic: impl Into<String>,
        section: impl Into<String>,
        year: i32,
        code: impl Into<String>,
        path: impl Into<PathBuf>,
        solution: Option<PathBuf>,
    ) -> Self {
        Self {
            topic: topic.into(),
            section: section.into(),
            year,
            code: code.into(),
            body: RecordBody::Image {
                path: path.into(),
                solution,
            },
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self.body, RecordBody::Text { .. })
    }

    /// Inline text content, if this is a text record.
    pub fn content(&self) -> Option<&str> {
        match &self.body {
            RecordBody::Text { content } => Some(content),
            RecordBody::Image { .. } => None,
        }
    }

    /// Question image path, if this is an image record.
    pub fn image_path(&self) -> Option<&Path> {
        match &self.body {
            RecordBody::Image { path, .. } => Some(path),
            RecordBody::Text { .. } => None,
        }
    }

    /// Companion solution image path, if one was found.
    pub fn solution_path(&self) -> Option<&Path> {
        match &self.body {
            RecordBody::Image { solution, .. } => solution.as_deref(),
            RecordBody::Text { .. } => None,
        }
    }
}
