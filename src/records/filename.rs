//! Filename-encoded record metadata.
//!
//! Question scans are dropped into a directory as
//! `<topic>_<section>_<year>[_<code>].<ext>`; this module parses that
//! convention back into structured fields.

use std::path::Path;

/// Image extensions recognized by the directory source (matched
/// case-insensitively).
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp"];

/// Field delimiter inside an encoded stem.
const FIELD_DELIMITER: char = '_';

/// Metadata fields decoded from a filename stem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedName {
    pub topic: String,
    pub section: String,
    pub year: i32,
    /// Empty when the stem carries only three fields.
    pub code: String,
}

/// Errors from decoding a single stem.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("expected at least 3 '_'-separated fields, got {count}")]
    TooFewFields { count: usize },

    #[error("year field '{token}' is not an integer")]
    InvalidYear { token: String },
}

/// Returns true if the path has a recognized image extension.
pub fn has_image_extension(path: &Path) -> bool {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => {
            let lower = ext.to_ascii_lowercase();
            IMAGE_EXTENSIONS.contains(&lower.as_str())
        }
        None => false,
    }
}

/// Decodes a filename stem (extension already stripped) into its fields.
///
/// Stems with three fields get an empty `code`; fields beyond the fourth are
/// ignored.
pub fn parse_stem(stem: &str) -> Result<ParsedName, ParseError> {
    let fields: Vec<&str> = stem.split(FIELD_DELIMITER).collect();

    if fields.len() < 3 {
        return Err(ParseError::TooFewFields {
            count: fields.len(),
        });
    }

    let year: i32 = fields[2].parse().map_err(|_| ParseError::InvalidYear {
        token: fields[2].to_string(),
    })?;

    Ok(ParsedName {
        topic: fields[0].to_string(),
        section: fields[1].to_string(),
        year,
        code: fields.get(3).unwrap_or(&"").to_string(),
    })
}

/// Stem of a companion solution image for the given record fields.
///
/// Solutions are keyed by `{year}_{code}`; records without a code have no
/// solution lookup.
pub fn solution_stem(year: i32, code: &str) -> Option<String> {
    if code.is_empty() {
        return None;
    }
    Some(format!("{}{}{}", year, FIELD_DELIMITER, code))
}
