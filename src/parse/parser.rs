//! Line-level parsing of listing and version-banner text.
//!
//! ## Parsing strategy
//!
//! Listing output is handled one line at a time:
//! 1. Split the captured text on newlines, dropping blank lines
//! 2. Match each line against the size / timestamp / path pattern
//! 3. Resolve the timestamp through an ordered chain of date formats
//! 4. Lines that don't look like entries (headers, summaries) are skipped
//!
//! Version banners are positional: the deflator prints its version on the
//! first line, the inflator prints its own name first and the version line
//! second. Both cases take the second space-separated token of the relevant
//! line.

use chrono::NaiveDateTime;
use regex::Regex;

use super::entry::ArchiveEntry;
use super::error::ParseError;

/// Date format tried first when interpreting listing timestamps
/// (`2012-10-24 10:39`).
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Pattern for one listing entry: a run of digits (size, possibly empty),
/// a numeric date/time token, and the rest of the line as the path.
///
/// The path capture is greedy, so a path containing whitespace survives
/// intact; the flip side is that a path containing a date-shaped substring
/// is resolved in favor of the longest trailing match.
const LISTING_LINE: &str = r"(\d*)\s+([0-9]+-[0-9]+-[0-9]+\s+[0-9]+:[0-9]+)\s+(.*)";

/// Alternative timestamp field orders seen across tool versions and locales,
/// tried after the configured preferred format: time-first, US month-first,
/// and day-first as the last resort.
const FALLBACK_DATE_FORMATS: &[&str] = &["%H:%M %Y-%m-%d", "%m-%d-%Y %H:%M", "%d-%m-%Y %H:%M"];

/// Parser for the textual output of zip/unzip command-line tools.
///
/// The instance is immutable after construction: it holds the compiled
/// listing-line pattern and the preferred date format, nothing else. All
/// per-call state is local, so a shared instance is safe to use from
/// multiple threads.
///
/// ## Example
///
/// ```
/// use zipout::OutputParser;
///
/// let parser = OutputParser::new();
/// let entries = parser.parse_file_listing("785  2012-10-24 10:39  file.txt\n")?;
/// assert_eq!(entries[0].size, 785);
/// assert_eq!(entries[0].location, "file.txt");
/// # Ok::<(), zipout::ParseError>(())
/// ```
pub struct OutputParser {
    /// First-attempt `chrono` format for listing timestamps
    date_format: String,
    /// Compiled entry pattern, built once at construction
    listing_line: Regex,
}

impl OutputParser {
    /// Create a parser using [`DEFAULT_DATE_FORMAT`] as the first-attempt
    /// timestamp format.
    pub fn new() -> Self {
        Self::with_date_format(DEFAULT_DATE_FORMAT)
    }

    /// Create a parser with a custom first-attempt timestamp format.
    ///
    /// Use this when the listing tool in the caller's environment reports
    /// dates in a known non-default order; the fallback chain still runs
    /// after the configured format.
    ///
    /// # Arguments
    ///
    /// * `date_format` - a `chrono` format string, e.g. `"%Y-%m-%d %H:%M"`
    pub fn with_date_format(date_format: impl Into<String>) -> Self {
        Self {
            date_format: date_format.into(),
            listing_line: Regex::new(LISTING_LINE).expect("listing pattern is valid"),
        }
    }

    /// Parse file-listing output into one [`ArchiveEntry`] per entry line.
    ///
    /// Blank lines and lines that don't match the entry pattern (headers,
    /// separators, summary lines) contribute nothing. Entries come back in
    /// the same order as their source lines.
    ///
    /// # Arguments
    ///
    /// * `output` - the complete captured stdout of the listing command
    ///
    /// # Returns
    ///
    /// All recognized entries, possibly empty.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::DateParse`] when a line matches the entry
    /// pattern but its timestamp is in no recognized format. That case is
    /// never silently dropped or defaulted: it signals a tool-version or
    /// locale skew the caller needs to know about.
    pub fn parse_file_listing(&self, output: &str) -> Result<Vec<ArchiveEntry>, ParseError> {
        let mut entries = Vec::new();

        for line in output.split('\n').filter(|l| !l.is_empty()) {
            // 785  2012-10-24 10:39  file
            let Some(caps) = self.listing_line.captures(line) else {
                continue;
            };

            let size_field = &caps[1];
            let date_field = &caps[2];
            let location = caps[3].to_string();

            let mtime = self
                .parse_mtime(date_field)
                .ok_or_else(|| ParseError::DateParse {
                    token: date_field.to_string(),
                    line: line.to_string(),
                })?;

            // The pattern only admits digits here; an empty field means the
            // tool printed no size for this entry.
            let size = size_field.parse::<u64>().unwrap_or(0);
            let is_dir = location.ends_with('/');

            entries.push(ArchiveEntry {
                location,
                size,
                mtime,
                is_dir,
            });
        }

        Ok(entries)
    }

    /// Extract the inflator (unzip-side) version from its banner output.
    ///
    /// The inflator prints its name on the first line and the version line
    /// second, so this inspects line two and takes its second
    /// space-separated token.
    ///
    /// # Returns
    ///
    /// The version token, or `None` when the banner has no second line or
    /// that line has fewer than two tokens. Absence is not an error;
    /// callers that require a version decide what to do about it.
    pub fn parse_inflator_version(&self, output: &str) -> Option<String> {
        let line = output.splitn(3, '\n').filter(|l| !l.is_empty()).nth(1)?;
        version_token(line)
    }

    /// Extract the deflator (zip-side) version from its banner output.
    ///
    /// The deflator's version line comes first, so this takes the second
    /// space-separated token of line one. Same absence rule as
    /// [`parse_inflator_version`](Self::parse_inflator_version).
    pub fn parse_deflator_version(&self, output: &str) -> Option<String> {
        let line = output.splitn(2, '\n').find(|l| !l.is_empty())?;
        version_token(line)
    }

    /// Run a timestamp token through the format chain: the configured
    /// preferred format first, then [`FALLBACK_DATE_FORMATS`] in order.
    fn parse_mtime(&self, token: &str) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(token, &self.date_format)
            .ok()
            .or_else(|| {
                FALLBACK_DATE_FORMATS
                    .iter()
                    .find_map(|fmt| NaiveDateTime::parse_from_str(token, fmt).ok())
            })
    }
}

impl Default for OutputParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Second space-separated token of a banner line, if the line has at least
/// two of its first three chunks.
fn version_token(line: &str) -> Option<String> {
    let mut chunks = line.splitn(3, ' ');
    chunks.next()?;
    chunks.next().map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn dt(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, 0)
            .unwrap()
    }

    #[test]
    fn parses_well_formed_listing_line() {
        let parser = OutputParser::new();
        let entries = parser
            .parse_file_listing("785  2012-10-24 10:39  file.txt\n")
            .unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].location, "file.txt");
        assert_eq!(entries[0].size, 785);
        assert_eq!(entries[0].mtime, dt(2012, 10, 24, 10, 39));
        assert!(!entries[0].is_dir);
    }

    #[test]
    fn trailing_slash_marks_directory() {
        let parser = OutputParser::new();
        let entries = parser
            .parse_file_listing("0  2012-10-24 10:39  docs/\n")
            .unwrap();

        assert_eq!(entries[0].location, "docs/");
        assert!(entries[0].is_dir);
    }

    #[test]
    fn skips_blank_and_non_entry_lines_preserving_order() {
        let parser = OutputParser::new();
        let output = "\
Archive:  test.zip
  Length      Date    Time    Name
---------  ---------- -----   ----
785  2012-10-24 10:39  a.txt

12  2012-10-25 11:40  b/
---------                     -------
";
        let entries = parser.parse_file_listing(output).unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].location, "a.txt");
        assert_eq!(entries[1].location, "b/");
    }

    #[test]
    fn empty_size_field_parses_as_zero() {
        let parser = OutputParser::new();
        let entries = parser
            .parse_file_listing("  2012-10-24 10:39  file.txt\n")
            .unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].size, 0);
        assert_eq!(entries[0].location, "file.txt");
    }

    #[test]
    fn time_first_timestamp_falls_back() {
        // Exercises the chain directly: the structural line pattern only
        // admits date-then-time tokens, but the chain itself accepts the
        // time-first order.
        let parser = OutputParser::new();

        assert_eq!(
            parser.parse_mtime("10:39 2012-10-24"),
            Some(dt(2012, 10, 24, 10, 39))
        );
    }

    #[test]
    fn month_first_timestamp_falls_back() {
        let parser = OutputParser::new();
        let entries = parser
            .parse_file_listing("785  10-24-2012 10:39  file.txt\n")
            .unwrap();

        assert_eq!(entries[0].mtime, dt(2012, 10, 24, 10, 39));
    }

    #[test]
    fn day_first_timestamp_is_last_resort() {
        let parser = OutputParser::new();
        let entries = parser
            .parse_file_listing("785  24-10-2012 10:39  file.txt\n")
            .unwrap();

        assert_eq!(entries[0].mtime, dt(2012, 10, 24, 10, 39));
    }

    #[test]
    fn configured_format_wins_first() {
        let parser = OutputParser::with_date_format("%Y-%d-%m %H:%M");
        let entries = parser
            .parse_file_listing("785  2012-24-10 10:39  file.txt\n")
            .unwrap();

        assert_eq!(entries[0].mtime, dt(2012, 10, 24, 10, 39));
    }

    #[test]
    fn unparseable_timestamp_is_a_hard_error() {
        let parser = OutputParser::new();
        // Matches the entry pattern but no calendar accepts month zero.
        let err = parser
            .parse_file_listing("785  0000-00-00 00:00  file.txt\n")
            .unwrap_err();

        match err {
            ParseError::DateParse { token, line } => {
                assert_eq!(token, "0000-00-00 00:00");
                assert!(line.contains("file.txt"));
            }
        }
    }

    #[test]
    fn greedy_path_keeps_embedded_spaces_and_date_shapes() {
        let parser = OutputParser::new();
        let entries = parser
            .parse_file_listing("785  2012-10-24 10:39  my docs 2013-01-01 11:11 backup/\n")
            .unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].location, "my docs 2013-01-01 11:11 backup/");
        assert_eq!(entries[0].mtime, dt(2012, 10, 24, 10, 39));
        assert!(entries[0].is_dir);
    }

    #[test]
    fn reparsing_yields_equal_results() {
        let parser = OutputParser::new();
        let output = "785  2012-10-24 10:39  a.txt\n12  2012-10-25 11:40  b/\n";

        let first = parser.parse_file_listing(output).unwrap();
        let second = parser.parse_file_listing(output).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn inflator_version_from_second_line() {
        let parser = OutputParser::new();
        let version = parser.parse_inflator_version("Tool\nToolName 1.2.3 extra stuff\n");

        assert_eq!(version.as_deref(), Some("1.2.3"));
    }

    #[test]
    fn inflator_version_absent_without_second_line() {
        let parser = OutputParser::new();

        assert_eq!(parser.parse_inflator_version("ToolName only\n"), None);
    }

    #[test]
    fn inflator_version_absent_with_single_token_line() {
        let parser = OutputParser::new();

        assert_eq!(parser.parse_inflator_version("Tool\nToolName\n"), None);
    }

    #[test]
    fn deflator_version_from_first_line() {
        let parser = OutputParser::new();
        let version = parser.parse_deflator_version("ToolName 4.5.6 extra\nrest of banner\n");

        assert_eq!(version.as_deref(), Some("4.5.6"));
    }

    #[test]
    fn deflator_version_absent_with_single_token_line() {
        let parser = OutputParser::new();

        assert_eq!(parser.parse_deflator_version("ToolName\nrest\n"), None);
    }

    #[test]
    fn deflator_version_absent_on_empty_output() {
        let parser = OutputParser::new();

        assert_eq!(parser.parse_deflator_version(""), None);
    }
}
