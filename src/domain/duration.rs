//! Elapsed-time rendering for task content

/// Renders a number of seconds as `H:MM:SS`
///
/// Hours are not padded and never roll over into days; minutes and seconds
/// are always two digits.
///
/// # Examples
///
/// ```
/// use course_tasks::domain::duration::format_duration;
///
/// assert_eq!(format_duration(0), "0:00:00");
/// assert_eq!(format_duration(3661), "1:01:01");
/// ```
pub fn format_duration(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;
    format!("{hours}:{minutes:02}:{secs:02}")
}
