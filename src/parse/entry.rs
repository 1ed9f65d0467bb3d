use chrono::NaiveDateTime;
use serde::Serialize;

/// One parsed record from archive listing output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArchiveEntry {
    /// Path as reported by the tool; directories keep their trailing `/`
    pub location: String,
    /// Size in bytes; 0 when the tool printed an empty size field
    pub size: u64,
    /// Modification timestamp, resolved through the date fallback chain
    pub mtime: NaiveDateTime,
    /// True exactly when `location` ends with `/`
    pub is_dir: bool,
}
