//! Rendering of elapsed seconds for the view layer

use stopwatch_types::ClockFormat;

pub const START_LABEL: &str = "Start";
pub const STOP_LABEL: &str = "Stop";

/// Format elapsed seconds as `HH:mm:ss`.
///
/// `MinuteHours` reproduces a date built from `hours = s / 60` and
/// `minutes = s % 60`: the hours slot advances once per minute of running
/// and wraps at 24, the seconds slot is always `00`.
pub fn format_clock(elapsed_secs: u64, format: ClockFormat) -> String {
    match format {
        ClockFormat::MinuteHours => {
            let hours = (elapsed_secs / 60) % 24;
            let minutes = elapsed_secs % 60;
            format!("{:02}:{:02}:00", hours, minutes)
        }
        ClockFormat::Elapsed => {
            let hours = elapsed_secs / 3600;
            let minutes = (elapsed_secs / 60) % 60;
            let seconds = elapsed_secs % 60;
            format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
        }
    }
}

/// Caption of the start/stop control
pub fn button_label(running: bool) -> &'static str {
    if running { STOP_LABEL } else { START_LABEL }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_representation() {
        assert_eq!(format_clock(0, ClockFormat::MinuteHours), "00:00:00");
        assert_eq!(format_clock(0, ClockFormat::Elapsed), "00:00:00");
    }

    #[test]
    fn test_minute_hours_rollover() {
        assert_eq!(format_clock(5, ClockFormat::MinuteHours), "00:05:00");
        assert_eq!(format_clock(59, ClockFormat::MinuteHours), "00:59:00");
        assert_eq!(format_clock(60, ClockFormat::MinuteHours), "01:00:00");
        assert_eq!(format_clock(75, ClockFormat::MinuteHours), "01:15:00");
        // 24 hour slots wrap like the date they come from
        assert_eq!(format_clock(24 * 60, ClockFormat::MinuteHours), "00:00:00");
        assert_eq!(format_clock(25 * 60 + 7, ClockFormat::MinuteHours), "01:07:00");
    }

    #[test]
    fn test_elapsed_format() {
        assert_eq!(format_clock(59, ClockFormat::Elapsed), "00:00:59");
        assert_eq!(format_clock(75, ClockFormat::Elapsed), "00:01:15");
        assert_eq!(format_clock(3661, ClockFormat::Elapsed), "01:01:01");
        assert_eq!(format_clock(100 * 3600, ClockFormat::Elapsed), "100:00:00");
    }

    #[test]
    fn test_button_label() {
        assert_eq!(button_label(false), "Start");
        assert_eq!(button_label(true), "Stop");
    }
}
