// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Human-readable formatting of playback positions and durations.

use std::time::Duration;

const SECS_PER_HOUR: u64 = 3600;
const SECS_PER_MINUTE: u64 = 60;

/// Formats a duration in seconds into a clock-style string.
///
/// Durations under an hour are rendered as `MM:SS`, longer ones as
/// `HH:MM:SS`. Every component is padded to at least two digits, so an hour
/// count above 99 keeps its natural width.
///
/// Any fractional part is truncated rather than rounded. Negative and NaN
/// inputs are clamped to zero.
///
/// # Arguments
///
/// * `seconds` - The elapsed time or duration to format.
///
/// # Examples
///
/// ```
/// use playback_store::format_time;
///
/// assert_eq!(format_time(65.0), "01:05");
/// assert_eq!(format_time(3605.0), "01:00:05");
/// assert_eq!(format_time(59.9), "00:59");
/// ```
pub fn format_time(seconds: f64) -> String {
    format_secs(whole_seconds(seconds))
}

/// Formats a whole number of seconds, see [`format_time`].
pub fn format_secs(total_seconds: u64) -> String {
    let hours = total_seconds / SECS_PER_HOUR;
    let mins = (total_seconds % SECS_PER_HOUR) / SECS_PER_MINUTE;
    let secs = total_seconds % SECS_PER_MINUTE;

    if hours == 0 {
        format!("{:02}:{:02}", mins, secs)
    } else {
        format!("{:02}:{:02}:{:02}", hours, mins, secs)
    }
}

/// Formats a [`Duration`], dropping any sub-second part.
pub fn format_duration(duration: Duration) -> String {
    format_secs(duration.as_secs())
}

fn whole_seconds(seconds: f64) -> u64 {
    if seconds.is_nan() || seconds <= 0.0 {
        return 0;
    }

    // Saturates at u64::MAX for infinite input
    seconds.trunc() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_minutes_and_seconds() {
        assert_eq!(format_time(0.0), "00:00");
    }

    #[test]
    fn under_an_hour_omits_hours() {
        assert_eq!(format_time(5.0), "00:05");
        assert_eq!(format_time(65.0), "01:05");
        assert_eq!(format_time(3599.0), "59:59");
    }

    #[test]
    fn an_hour_or_more_includes_hours() {
        assert_eq!(format_time(3600.0), "01:00:00");
        assert_eq!(format_time(3605.0), "01:00:05");
        assert_eq!(format_time(86399.0), "23:59:59");
    }

    #[test]
    fn hours_grow_past_two_digits() {
        assert_eq!(format_time(360000.0), "100:00:00");
        assert_eq!(format_secs(1_000 * 3600 + 61), "1000:01:01");
    }

    #[test]
    fn fractions_are_truncated_not_rounded() {
        assert_eq!(format_time(59.9), "00:59");
        assert_eq!(format_time(3599.999), "59:59");
        assert_eq!(format_time(0.5), "00:00");
    }

    #[test]
    fn negative_and_nan_clamp_to_zero() {
        assert_eq!(format_time(-1.0), "00:00");
        assert_eq!(format_time(-3605.0), "00:00");
        assert_eq!(format_time(f64::NAN), "00:00");
    }

    #[test]
    fn durations_drop_sub_second_part() {
        assert_eq!(format_duration(Duration::from_millis(65_999)), "01:05");
        assert_eq!(format_duration(Duration::from_secs(7322)), "02:02:02");
    }
}
