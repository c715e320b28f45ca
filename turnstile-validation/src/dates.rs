// Date parsing helpers for the date checks
//
// Layouts are chrono strftime strings. A layout may describe a zoned
// datetime, a naive datetime, a bare date, or a bare time; parsing tries
// those interpretations in that order and accepts the first that fits.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

/// Layouts `Check::Date` tries after RFC 3339 and RFC 2822.
pub(crate) const DEFAULT_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",    // ISO-ish datetime
    "%Y-%m-%dT%H:%M:%S",    // ISO datetime without an offset
    "%Y-%m-%d",             // bare date
    "%a %b %e %H:%M:%S %Y", // asctime
    "%b %e %H:%M:%S",       // timestamp
    "%H:%M:%S",             // bare time
    "%I:%M%p",              // kitchen clock
];

pub(crate) fn parse_with(value: &str, format: &str) -> bool {
    DateTime::parse_from_str(value, format).is_ok()
        || NaiveDateTime::parse_from_str(value, format).is_ok()
        || NaiveDate::parse_from_str(value, format).is_ok()
        || NaiveTime::parse_from_str(value, format).is_ok()
}

pub(crate) fn rfc3339(value: &str) -> bool {
    DateTime::parse_from_rfc3339(value).is_ok()
}

/// RFC 2822 covers the RFC 1123 and RFC 822 shapes, including the obsolete
/// named zones (`GMT`, `EST`, ...) chrono cannot parse through `%Z`.
pub(crate) fn rfc2822(value: &str) -> bool {
    DateTime::parse_from_rfc2822(value).is_ok()
}

/// `ctime(3)`-style stamp with an optional uppercase zone token between the
/// clock and the year: `Mon Oct 18 10:10:10 UTC 1993`.
pub(crate) fn unix_date(value: &str) -> bool {
    let tokens: Vec<&str> = value.split_whitespace().collect();
    let without_zone = match tokens.as_slice() {
        [_, _, _, _, _] => tokens.join(" "),
        [wday, mon, day, clock, zone, year]
            if zone.chars().all(|c| c.is_ascii_uppercase()) =>
        {
            [*wday, *mon, *day, *clock, *year].join(" ")
        }
        _ => return false,
    };

    NaiveDateTime::parse_from_str(&without_zone, "%a %b %d %H:%M:%S %Y").is_ok()
}

/// First-match scan over the default layouts plus any caller-supplied ones.
pub(crate) fn parse_any(value: &str, custom: &[String]) -> bool {
    if rfc3339(value) || rfc2822(value) {
        return true;
    }
    if DEFAULT_FORMATS.iter().any(|format| parse_with(value, format)) {
        return true;
    }
    custom.iter().any(|format| parse_with(value, format))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_tiers() {
        assert!(parse_with("1993-10-18T10:10:10+01:00", "%Y-%m-%dT%H:%M:%S%:z"));
        assert!(parse_with("1993-10-18 10:10:10", "%Y-%m-%d %H:%M:%S"));
        assert!(parse_with("1993-10-18", "%Y-%m-%d"));
        assert!(parse_with("10:10:10", "%H:%M:%S"));
        assert!(!parse_with("1993-10-18", "%H:%M:%S"));
    }

    #[test]
    fn test_rfc2822_accepts_named_zones() {
        assert!(rfc2822("Mon, 18 Oct 1993 10:10:10 GMT"));
        assert!(rfc2822("Mon, 18 Oct 1993 10:10:10 +0200"));
        assert!(!rfc2822("18/10/1993"));
    }

    #[test]
    fn test_unix_date() {
        assert!(unix_date("Mon Oct 18 10:10:10 UTC 1993"));
        assert!(unix_date("Mon Oct 18 10:10:10 1993"));
        assert!(!unix_date("Mon Oct 18 10:10:10 +0200 1993"));
        assert!(!unix_date("18 Oct 1993"));
    }

    #[test]
    fn test_parse_any_defaults() {
        assert!(parse_any("1993-10-18T10:10:10-02:00", &[]));
        assert!(parse_any("3:04PM", &[]));
        assert!(!parse_any("2016/02/29", &[]));
    }

    #[test]
    fn test_parse_any_custom_formats() {
        let custom = vec!["%Y/%m/%d".to_string()];
        assert!(parse_any("2016/02/29", &custom));
        assert!(!parse_any("2015/02/29", &custom));
    }
}
