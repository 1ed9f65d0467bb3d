//! Parsing of zip/unzip command-line output.
//!
//! This module turns captured tool output into typed data. It knows about
//! two kinds of text: file-listing output (one entry per line with size,
//! timestamp and path) and the version banners the tools print.
//!
//! ## Architecture
//!
//! The module is organized into three components:
//!
//! - [`entry`]: the [`ArchiveEntry`] record produced for each listing line
//! - [`error`]: the [`ParseError`] type for escalated parse failures
//! - [`parser`]: the [`OutputParser`] holding the line pattern and the
//!   date-format fallback chain
//!
//! ## Input assumptions
//!
//! The input is the already-captured standard output of an external tool,
//! supplied as one in-memory string. Listing lines look like:
//!
//! ```text
//! 785  2012-10-24 10:39  some/file.txt
//! ```
//!
//! The same listing tool reports dates in different field orders across
//! versions and locales, so timestamp interpretation runs through an ordered
//! chain of formats rather than a single one.
//!
//! ## Limitations
//!
//! - No process execution; callers capture the tool output themselves
//! - A path containing whitespace followed by a date-shaped substring is
//!   ambiguous; the greedy trailing match wins

mod entry;
mod error;
mod parser;

pub use entry::ArchiveEntry;
pub use error::ParseError;
pub use parser::{DEFAULT_DATE_FORMAT, OutputParser};
