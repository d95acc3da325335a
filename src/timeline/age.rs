//! Compact age labels for frame entries.

/// Seconds in one hour.
const SECS_PER_HOUR: i64 = 3600;

/// Format elapsed seconds as a compact age label.
///
/// Under an hour the label is whole minutes (`"42m"`). From one hour on it
/// is `"{h}h {mm}m"` with minutes zero-padded to two digits, so labels of the
/// same hour count share a width in a monospaced column.
///
/// Negative input is treated as zero.
///
/// # Examples
///
/// ```
/// use threadreplay::timeline::format_age;
///
/// assert_eq!(format_age(0), "0m");
/// assert_eq!(format_age(3599), "59m");
/// assert_eq!(format_age(3600), "1h 00m");
/// assert_eq!(format_age(4200), "1h 10m");
/// ```
pub fn format_age(seconds: i64) -> String {
    let seconds = seconds.max(0);
    if seconds < SECS_PER_HOUR {
        return format!("{}m", seconds / 60);
    }
    let total_minutes = seconds / 60;
    format!("{}h {:02}m", total_minutes / 60, total_minutes % 60)
}
