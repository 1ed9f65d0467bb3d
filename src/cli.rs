use clap::Parser;

use crate::parse::DEFAULT_DATE_FORMAT;

#[derive(Parser, Debug)]
#[command(name = "zipout")]
#[command(version)]
#[command(about = "Parse zip/unzip command-line output into structured data", long_about = None)]
#[command(after_help = "Examples:\n  \
  unzip -l data.zip | zipout             parse a listing from a pipe\n  \
  zipout --json listing.txt              emit parsed entries as JSON\n  \
  unzip -v | zipout --inflator           extract the unzip version string\n  \
  zip -h | zipout --deflator             extract the zip version string")]
pub struct Cli {
    /// Captured tool output to parse ("-" or absent: read stdin)
    #[arg(value_name = "FILE")]
    pub file: Option<String>,

    /// Parse version banner of the inflator (unzip-side) tool
    #[arg(long, conflicts_with = "deflator")]
    pub inflator: bool,

    /// Parse version banner of the deflator (zip-side) tool
    #[arg(long)]
    pub deflator: bool,

    /// First-attempt date format for listing timestamps
    #[arg(long, value_name = "FMT", default_value = DEFAULT_DATE_FORMAT)]
    pub date_format: String,

    /// Emit listing entries as a JSON array
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    pub fn reads_stdin(&self) -> bool {
        matches!(self.file.as_deref(), None | Some("-"))
    }
}
