//! Display formatting for cell values.

use chrono::{DateTime, Utc};

const UNITS: [&str; 9] = ["Bytes", "KB", "MB", "GB", "TB", "PB", "EB", "ZB", "YB"];

/// Human-readable byte size with up to two decimals: `1200000` → `1.14 MB`.
pub fn format_bytes(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    let fixed = format!("{value:.2}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    format!("{trimmed} {}", UNITS[unit])
}

/// Date only: `Oct 26, 2023`.
pub fn format_date(at: &DateTime<Utc>) -> String {
    at.format("%b %-d, %Y").to_string()
}

/// Date and time: `Oct 26, 2023, 10:00:00 AM`.
pub fn format_date_time(at: &DateTime<Utc>) -> String {
    at.format("%b %-d, %Y, %-I:%M:%S %p").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn bytes() {
        assert_eq!(format_bytes(0), "0 Bytes");
        assert_eq!(format_bytes(1200000), "1.14 MB");
        assert_eq!(format_bytes(102400), "100 KB");
        assert_eq!(format_bytes(8000), "7.81 KB");
        assert_eq!(format_bytes(52428800), "50 MB");
        assert_eq!(format_bytes(512), "512 Bytes");
    }

    #[test]
    fn dates() {
        let at = Utc.with_ymd_and_hms(2023, 10, 26, 10, 0, 0).unwrap();
        assert_eq!(format_date(&at), "Oct 26, 2023");
        assert_eq!(format_date_time(&at), "Oct 26, 2023, 10:00:00 AM");
    }
}
