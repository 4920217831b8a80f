//! List command handler.

use anyhow::Result;
use clap::Args;

use qbank::Config;

use super::{select, FilterArgs, SourceArgs};

#[derive(Debug, Args)]
pub struct ListArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    #[command(flatten)]
    pub filters: FilterArgs,

    /// Emit records as JSON instead of the text listing
    #[arg(long)]
    pub json: bool,
}

#[cfg(not(tarpaulin_include))]
pub fn handle_list(args: ListArgs) -> Result<()> {
    let config = Config::load()?;
    let matched = select(&args.source, &args.filters, &config)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&matched)?);
        return Ok(());
    }

    if matched.is_empty() {
        println!("No questions matched the current filters.");
        return Ok(());
    }

    println!("Found {} question(s):", matched.len());
    for record in &matched {
        let kind = if record.is_text() { "text" } else { "image" };
        let code = if record.code.is_empty() {
            String::new()
        } else {
            format!("  [{}]", record.code)
        };
        println!(
            "  {}  {}  |  {}  |  {}{}",
            record.year,
            kind,
            config.labels.topic(&record.topic),
            config.labels.section(&record.section),
            code
        );
    }
    Ok(())
}
