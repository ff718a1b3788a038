//! Timestamp-derived filename stems.

/// Returns a filename stem from the current local time, with millisecond
/// precision: `YYYY-MM-DD_HH.MM.SS.mmm`.
///
/// Dots rather than colons keep the stem portable across filesystems.
///
/// # Examples
///
/// ```rust
/// let stem = traffic_output::timestamp::timestamp_stem();
/// assert_eq!(stem.len(), "2022-12-03_14.03.22.123".len());
/// ```
pub fn timestamp_stem() -> String {
    chrono::Local::now()
        .format("%Y-%m-%d_%H.%M.%S.%3f")
        .to_string()
}
