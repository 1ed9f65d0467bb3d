//! Main entry point for the zipout CLI application.
//!
//! This binary reads captured zip/unzip output from a file or stdin and
//! prints the parsed result: a listing table (or JSON) for file listings,
//! or the extracted version string for banner output.

use anyhow::{Context, Result, bail};
use clap::Parser;
use std::io::Read;

use zipout::{ArchiveEntry, Cli, OutputParser};

/// Application entry point.
///
/// Parses command-line arguments, reads the captured tool output and
/// dispatches to the listing or version-banner handler.
fn main() -> Result<()> {
    let cli = Cli::parse();

    let raw = read_input(&cli)?;
    let parser = OutputParser::with_date_format(&cli.date_format);

    if cli.inflator {
        return print_version(parser.parse_inflator_version(&raw), "inflator");
    }
    if cli.deflator {
        return print_version(parser.parse_deflator_version(&raw), "deflator");
    }

    let entries = parser.parse_file_listing(&raw)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        print_listing(&entries);
    }

    Ok(())
}

/// Read the whole captured output, from the named file or from stdin.
fn read_input(cli: &Cli) -> Result<String> {
    if cli.reads_stdin() {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read stdin")?;
        Ok(buf)
    } else {
        let path = cli.file.as_deref().unwrap_or_default();
        std::fs::read_to_string(path).with_context(|| format!("failed to read '{path}'"))
    }
}

/// Print an extracted version string, or fail when the banner was too short
/// to carry one.
fn print_version(version: Option<String>, tool: &str) -> Result<()> {
    match version {
        Some(v) => {
            println!("{v}");
            Ok(())
        }
        None => bail!("no version found in {tool} banner output"),
    }
}

/// Print parsed entries as a table with a summary line.
///
/// Directories are counted separately and excluded from the byte total,
/// matching how the listing tools themselves summarize.
fn print_listing(entries: &[ArchiveEntry]) {
    println!("{:>10}  {:>16}  Name", "Size", "Modified");
    println!("{}", "-".repeat(50));

    let mut total_size = 0u64;
    let mut file_count = 0usize;
    let mut dir_count = 0usize;

    for entry in entries {
        println!(
            "{:>10}  {:>16}  {}",
            entry.size,
            entry.mtime.format("%Y-%m-%d %H:%M"),
            entry.location
        );

        if entry.is_dir {
            dir_count += 1;
        } else {
            total_size += entry.size;
            file_count += 1;
        }
    }

    println!("{}", "-".repeat(50));
    println!("{total_size:>10}  {file_count} files, {dir_count} directories");
}
