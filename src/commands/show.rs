//! Show command handler.
//!
//! Same selection as `list`, but renders each record's content: text
//! questions go through the segmenter (block math on its own indented
//! lines), image questions print their scan and solution paths.

use anyhow::Result;
use clap::Args;

use qbank::content::{self, SegmentKind};
use qbank::records::Record;
use qbank::Config;

use super::{select, FilterArgs, SourceArgs};

#[derive(Debug, Args)]
pub struct ShowArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    #[command(flatten)]
    pub filters: FilterArgs,
}

#[cfg(not(tarpaulin_include))]
pub fn handle_show(args: ShowArgs) -> Result<()> {
    let config = Config::load()?;
    let matched = select(&args.source, &args.filters, &config)?;

    if matched.is_empty() {
        println!("No questions matched the current filters.");
        return Ok(());
    }

    for (index, record) in matched.iter().enumerate() {
        if index > 0 {
            println!();
        }
        print_header(record, &config);
        match record.content() {
            Some(content) => print_segments(content),
            None => print_image_paths(record),
        }
    }
    Ok(())
}

fn print_header(record: &Record, config: &Config) {
    let code = if record.code.is_empty() {
        String::new()
    } else {
        format!(" [{}]", record.code)
    };
    println!(
        "--- {} | {} | {}{} ---",
        config.labels.topic(&record.topic),
        config.labels.section(&record.section),
        record.year,
        code
    );
}

fn print_segments(content: &str) {
    for segment in content::segment(content) {
        match segment.kind {
            // Inline math keeps its delimiters, so both flow with the prose
            SegmentKind::Text | SegmentKind::InlineMath => print!("{}", segment.text),
            SegmentKind::BlockMath => {
                println!();
                for line in segment.text.lines() {
                    println!("    {}", line);
                }
            }
        }
    }
    println!();
}

fn print_image_paths(record: &Record) {
    if let Some(path) = record.image_path() {
        println!("image: {}", path.display());
    }
    match record.solution_path() {
        Some(path) => println!("solution: {}", path.display()),
        None => println!("solution: (none)"),
    }
}
