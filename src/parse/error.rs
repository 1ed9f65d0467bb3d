use thiserror::Error;

/// Errors surfaced by the output parsers.
///
/// Most malformed input is absorbed: listing lines that don't look like
/// entries are skipped, and short version banners yield `None`. The one
/// escalated case is a line that matched the entry pattern but carries a
/// timestamp no format in the fallback chain accepts — defaulting the date
/// there would hide real tool-compatibility problems.
#[derive(Debug, Error)]
pub enum ParseError {
    /// A listing line matched the entry pattern but its timestamp token is
    /// in no recognized format.
    #[error("unrecognized timestamp '{token}' in listing line '{line}'")]
    DateParse { token: String, line: String },
}
