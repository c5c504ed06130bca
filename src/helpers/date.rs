//! Date helper functions

use chrono::{DateTime, Datelike, Utc};

use crate::content::{parse_date, Lang};

const EN_MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const TR_MONTHS: [&str; 12] = [
    "Ocak", "Şubat", "Mart", "Nisan", "Mayıs", "Haziran", "Temmuz", "Ağustos", "Eylül", "Ekim",
    "Kasım", "Aralık",
];

/// Format a post date for display in the given language
///
/// # Examples
/// ```ignore
/// format_date("2025-01-10", Lang::En) // -> Some("January 10, 2025")
/// format_date("2025-01-10", Lang::Tr) // -> Some("10 Ocak 2025")
/// ```
pub fn format_date(date: &str, lang: Lang) -> Option<String> {
    parse_date(date).map(|dt| format_datetime(&dt, lang))
}

/// Format a parsed date: `MMMM d, yyyy` in English, `d MMMM yyyy` in Turkish
pub fn format_datetime(date: &DateTime<Utc>, lang: Lang) -> String {
    let month = date.month0() as usize;
    match lang {
        Lang::En => format!("{} {}, {}", EN_MONTHS[month], date.day(), date.year()),
        Lang::Tr => format!("{} {} {}", date.day(), TR_MONTHS[month], date.year()),
    }
}

/// Format a date as `YYYY-MM-DD` for sitemaps
pub fn date_w3c(date: &DateTime<Utc>) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_english() {
        assert_eq!(
            format_date("2025-01-10", Lang::En).as_deref(),
            Some("January 10, 2025")
        );
        assert_eq!(
            format_date("2024-12-15", Lang::En).as_deref(),
            Some("December 15, 2024")
        );
    }

    #[test]
    fn test_format_turkish() {
        assert_eq!(
            format_date("2025-01-10", Lang::Tr).as_deref(),
            Some("10 Ocak 2025")
        );
        assert_eq!(
            format_date("2024-12-15", Lang::Tr).as_deref(),
            Some("15 Aralık 2024")
        );
    }

    #[test]
    fn test_unparseable_date() {
        assert_eq!(format_date("soon", Lang::En), None);
    }

    #[test]
    fn test_date_w3c() {
        let dt = parse_date("2024-02-03T10:00:00Z").unwrap();
        assert_eq!(date_w3c(&dt), "2024-02-03");
    }
}
