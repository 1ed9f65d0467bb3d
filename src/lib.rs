//! # zipout
//!
//! Parse zip/unzip command-line output into structured archive entries.
//!
//! This library turns the captured stdout of archive tools into typed data:
//! file-listing output becomes a sequence of [`ArchiveEntry`] records (path,
//! size, modification time, directory flag), and version-banner output
//! yields the tool's version string. It performs no I/O and runs no
//! processes; callers capture the tool output and hand it over as text.
//!
//! ## Features
//!
//! - Listing lines parsed into path, size, timestamp and directory flag
//! - Timestamp fallback chain covering the field orders different tool
//!   versions and locales emit
//! - Version extraction from both inflator (unzip) and deflator (zip)
//!   banners
//! - Unrecognizable timestamps surface as a distinct error instead of being
//!   silently defaulted
//!
//! ## Example
//!
//! ```
//! use zipout::OutputParser;
//!
//! fn main() -> Result<(), zipout::ParseError> {
//!     let parser = OutputParser::new();
//!
//!     // Text captured from the listing command of an archive tool
//!     let entries = parser.parse_file_listing(
//!         "785  2012-10-24 10:39  docs/readme.txt\n0  2012-10-24 10:40  docs/\n",
//!     )?;
//!     for entry in &entries {
//!         println!("{} ({} bytes)", entry.location, entry.size);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod parse;

pub use cli::Cli;
pub use parse::{ArchiveEntry, DEFAULT_DATE_FORMAT, OutputParser, ParseError};
