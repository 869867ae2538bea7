use std::time::Duration;

/// Width of every progress bar the CLI renders.
pub const BAR_WIDTH: usize = 50;

const COMPLETE: char = '=';
const INCOMPLETE: char = ' ';

/// Renders a fixed-width textual bar for `value` out of `total`.
///
/// The complete portion is drawn with `=`, the rest with spaces, rounded to
/// the nearest column. A zero `total` renders an all-incomplete bar.
pub fn render_bar(value: u64, total: u64, width: usize) -> String {
    let complete = if total == 0 {
        0
    } else {
        let ratio = value as f64 / total as f64;
        ((ratio * width as f64).round() as usize).min(width)
    };

    let mut bar = String::with_capacity(width);
    for _ in 0..complete {
        bar.push(COMPLETE);
    }
    for _ in complete..width {
        bar.push(INCOMPLETE);
    }
    bar
}

/// Formats a duration as MM:SS or HH:MM:SS
pub fn format_duration(duration: Duration) -> String {
    let total_secs = duration.as_secs();
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;

    if hours > 0 {
        format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{:02}:{:02}", minutes, seconds)
    }
}

/// Formats a duration in a compact form (e.g., "3:45" instead of "03:45")
pub fn format_duration_compact(duration: Duration) -> String {
    let total_secs = duration.as_secs();
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{}:{:02}", minutes, seconds)
    }
}
