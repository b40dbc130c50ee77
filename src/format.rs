//! Display formatting for forecast table rows
//!
//! Pure functions; no failure modes. A timestamp that does not parse is
//! returned unchanged rather than guessed at.

use chrono::NaiveDateTime;

/// Timestamp layout used by the forecast service (local time, no zone)
const TIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Format a local datetime string as a 12-hour clock with AM/PM suffix.
///
/// Hours 0 and 12 both display as "12"; minutes are always two digits;
/// hours 0-11 are AM and 12-23 are PM.
#[must_use]
pub fn format_time(timestamp: &str) -> String {
    let parsed = NaiveDateTime::parse_from_str(timestamp, TIME_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%dT%H:%M:%S"));

    match parsed {
        Ok(datetime) => datetime.format("%-I:%M %p").to_string(),
        Err(_) => timestamp.to_string(),
    }
}

/// Format a temperature as integer-rounded degrees (half rounds away from
/// zero), for table display.
#[must_use]
pub fn format_temperature(temperature_f: f64) -> String {
    format!("{}", temperature_f.round())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("2024-03-01T00:00", "12:00 AM")]
    #[case("2024-03-01T13:05", "1:05 PM")]
    #[case("2024-03-01T23:59", "11:59 PM")]
    #[case("2024-03-01T12:00", "12:00 PM")]
    #[case("2024-03-01T11:59", "11:59 AM")]
    #[case("2024-03-01T09:07", "9:07 AM")]
    fn formats_twelve_hour_clock(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(format_time(input), expected);
    }

    #[test]
    fn test_accepts_seconds_suffix() {
        assert_eq!(format_time("2024-03-01T13:05:00"), "1:05 PM");
    }

    #[test]
    fn test_malformed_timestamp_passes_through() {
        assert_eq!(format_time("not-a-timestamp"), "not-a-timestamp");
    }

    #[rstest]
    #[case(74.5, "75")]
    #[case(74.4, "74")]
    #[case(-0.2, "-0")]
    #[case(32.0, "32")]
    fn rounds_temperature_for_display(#[case] input: f64, #[case] expected: &str) {
        assert_eq!(format_temperature(input), expected);
    }
}
