//! Post models

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::Serialize;

use super::Lang;

/// Validated metadata of a post
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostFrontmatter {
    pub title: String,
    pub description: String,

    /// Publication date as authored
    pub date: String,

    /// Canonical `/{lang}/{slug}/` permalink
    pub permalink: String,

    /// Language of the directory the post was read from
    pub lang: Lang,
}

impl PostFrontmatter {
    /// The publication date interpreted as a point in time, if it parses
    pub fn published_at(&self) -> Option<DateTime<Utc>> {
        parse_date(&self.date)
    }
}

/// A post together with its directory slug and body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostData {
    pub frontmatter: PostFrontmatter,
    pub slug: String,

    /// Document body following the front-matter
    pub content: String,
}

/// A (language, slug) pair identifying one publishable post page
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct PostParams {
    pub lang: Lang,
    pub slug: String,
}

impl PostParams {
    pub fn new(lang: Lang, slug: impl Into<String>) -> Self {
        Self {
            lang,
            slug: slug.into(),
        }
    }
}

/// Parse an ISO-like date string.
///
/// Date-only values are midnight UTC, as are date-times without an offset.
/// A browser would read an offset-less date-time in local time instead, so two
/// posts on the same day written in different styles can order differently
/// than they would client-side. Add an offset when the time of day matters.
pub fn parse_date(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    let datetime_formats = [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
    ];
    for fmt in datetime_formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.and_utc());
        }
    }

    for fmt in ["%Y-%m-%d", "%Y/%m/%d"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return d.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_date_only() {
        let dt = parse_date("2025-01-10").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2025, 1, 10, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_datetime_variants() {
        let expected = Utc.with_ymd_and_hms(2024, 12, 15, 10, 30, 0).unwrap();
        assert_eq!(parse_date("2024-12-15T10:30:00Z"), Some(expected));
        assert_eq!(parse_date("2024-12-15T13:30:00+03:00"), Some(expected));
        assert_eq!(parse_date("2024-12-15 10:30:00"), Some(expected));
        assert_eq!(parse_date("2024-12-15T10:30"), Some(expected));
    }

    #[test]
    fn test_offsetless_datetime_is_utc() {
        // midnight UTC date vs a same-day time without offset
        let date_only = parse_date("2024-12-15").unwrap();
        let local_style = parse_date("2024-12-15T01:00").unwrap();
        assert_eq!(
            local_style,
            Utc.with_ymd_and_hms(2024, 12, 15, 1, 0, 0).unwrap()
        );
        assert!(local_style > date_only);
    }

    #[test]
    fn test_parse_invalid_date() {
        assert_eq!(parse_date("someday"), None);
        assert_eq!(parse_date("2025-13-40"), None);
    }

    #[test]
    fn test_published_at() {
        let fm = PostFrontmatter {
            title: "t".into(),
            description: "d".into(),
            date: "2025-01-01".into(),
            permalink: "/en/t/".into(),
            lang: Lang::En,
        };
        assert_eq!(
            fm.published_at(),
            Some(Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap())
        );
    }
}
