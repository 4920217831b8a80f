//! qbank - past-paper question bank.
//!
//! Loads tagged question records from one of three interchangeable sources
//! (an inline list, a CSV table, or a directory of filename-encoded image
//! scans), filters and sorts them, and splits text content into renderable
//! plain/inline-math/block-math segments. The `qbank` binary is a thin CLI
//! shell over these modules.

pub mod config;
pub mod content;
pub mod filter;
pub mod records;

pub use config::Config;

/// Human-readable version string.
///
/// Dev builds carry the git commit hash and build date; builds with the
/// `release` feature get the clean crate version.
pub fn version() -> String {
    let base = env!("CARGO_PKG_VERSION");
    match option_env!("VERGEN_GIT_SHA") {
        Some(sha) if sha != "unknown" => {
            let short = &sha[..sha.len().min(7)];
            format!("{} ({} {})", base, short, env!("QBANK_BUILD_DATE"))
        }
        _ => base.to_string(),
    }
}
