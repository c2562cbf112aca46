//! Display helpers for distances and walking durations.

/// Formats a distance for display: meters below 1 km, otherwise
/// kilometers with one decimal place.
pub fn format_distance(meters: f64) -> String {
    if meters < 1000.0 {
        format!("{} m", meters.round() as i64)
    } else {
        format!("{:.1} km", meters / 1000.0)
    }
}

/// Formats a walking duration for display, rounded to the minute.
pub fn format_duration(seconds: f64) -> String {
    let minutes = (seconds / 60.0).round() as i64;
    if minutes < 60 {
        return format!("{} min", minutes);
    }
    let hours = minutes / 60;
    let remaining = minutes % 60;
    format!("{}h {}min", hours, remaining)
}

#[cfg(test)]
mod format_tests {
    use super::*;

    #[test]
    fn ut_format_distance() {
        assert_eq!(format_distance(650.0), "650 m");
        assert_eq!(format_distance(999.4), "999 m");
        assert_eq!(format_distance(1000.0), "1.0 km");
        assert_eq!(format_distance(6500.0), "6.5 km");
    }

    #[test]
    fn ut_format_duration() {
        assert_eq!(format_duration(90.0), "2 min");
        assert_eq!(format_duration(720.0), "12 min");
        assert_eq!(format_duration(3900.0), "1h 5min");
    }
}
