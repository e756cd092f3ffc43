use chrono::{Datelike, NaiveDate};

/// `DD-MM-YYYY`, empty for no date.
pub fn format_date(date: Option<NaiveDate>) -> String {
    match date {
        Some(d) => format!("{:02}-{:02}-{}", d.day(), d.month(), d.year()),
        None => String::new(),
    }
}

/// Value format of a `<input type="date">`.
pub fn iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// `HH:MM[:SS]` to a 12-hour clock, `"14:05:00"` -> `"2:05 PM"`.
///
/// Input that does not start with an hour is returned empty.
pub fn format_time(time: &str) -> String {
    let mut parts = time.split(':');
    let Some(hours) = parts.next().and_then(|h| h.trim().parse::<u32>().ok()) else {
        return String::new();
    };
    let minutes = parts.next().unwrap_or("00");
    let suffix = if hours >= 12 { "PM" } else { "AM" };
    let hours = match hours % 12 {
        0 => 12,
        h => h,
    };
    format!("{hours}:{minutes} {suffix}")
}

pub fn format_fare(currency: &str, amount: f64) -> String {
    format!("{currency}{amount:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_is_day_first() {
        let d = NaiveDate::from_ymd_opt(2026, 3, 7).unwrap();
        assert_eq!(format_date(Some(d)), "07-03-2026");
        assert_eq!(format_date(None), "");
        assert_eq!(iso_date(d), "2026-03-07");
    }

    #[test]
    fn time_uses_twelve_hour_clock() {
        assert_eq!(format_time("00:15:00"), "12:15 AM");
        assert_eq!(format_time("09:30:00"), "9:30 AM");
        assert_eq!(format_time("12:00:00"), "12:00 PM");
        assert_eq!(format_time("23:45"), "11:45 PM");
        assert_eq!(format_time(""), "");
    }

    #[test]
    fn fare_has_two_decimals() {
        assert_eq!(format_fare("₹", 1000.0), "₹1000.00");
        assert_eq!(format_fare("₹", 0.0), "₹0.00");
    }
}
