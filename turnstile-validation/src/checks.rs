// Built-in checks
//
// Each check reads the field's raw string value through the request view and
// answers with a failure reason naming the field. A misconfigured check (a
// missing regex pattern, a missing date format) reports on the same reason
// channel as a failing value; callers depend on that wire-visible behavior.

use crate::{dates, mx, Options, RequestView};
use once_cell::sync::Lazy;
use regex::Regex;
use std::time::Duration;

// Character classes mirror the original catalog: a value fails when it
// contains a disallowed character, so the empty string passes.
static NON_ALPHA: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-zA-Z]").unwrap());

static NON_ALPHANUMERIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-zA-Z0-9]").unwrap());

static EMAIL_SHAPE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+$").unwrap());

const DEFAULT_MX_TIMEOUT_SECS: i64 = 5;

/// Result of running one check: `Err` carries the failure reason.
pub type CheckResult = Result<(), String>;

/// The closed catalog of checks a rule can reference.
///
/// All checks are pure functions of the request view, field name, and
/// options, except [`Check::MxEmail`], which performs one bounded DNS lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    /// The field is present in the parameter set. Its value may still be
    /// empty; combine with other checks to constrain it.
    Required,
    /// Only letters (`[a-zA-Z]`); the empty string passes.
    Alpha,
    /// Only letters and digits; the empty string passes.
    Alphanumeric,
    /// Parses as a base-10 integer (sign and digits only).
    Integer,
    /// Exactly one of `true`, `false`, `1`, `0`. Request values arrive as
    /// strings, so a boolean has to be inferred.
    Boolean,
    /// Character count at most `length` (default 0).
    MaxLength,
    /// Character count at least `length` (default 0).
    MinLength,
    /// Value matches the `pattern` option.
    Regex,
    /// Value does not match the `pattern` option.
    NotRegex,
    /// One `@`, no whitespace, something on both sides.
    Email,
    /// [`Check::Email`] plus at least one MX record on the domain, resolved
    /// within `timeout` seconds (default 5). Smarter than shape alone: a
    /// domain with mail exchangers is likely to receive mail.
    MxEmail,
    /// Value parses against the strftime layout in the `format` option.
    DateFormat,
    /// RFC 3339 timestamp.
    Rfc3339,
    /// RFC 1123 timestamp (parsed as RFC 2822, its modern superset).
    Rfc1123,
    /// RFC 822 timestamp (parsed as RFC 2822, its modern superset).
    Rfc822,
    /// `ctime(3)`-style stamp, e.g. `Mon Oct 18 10:10:10 UTC 1993`.
    UnixDate,
    /// Value parses against any of a catalog of common layouts, plus any
    /// layouts in the `formats` option. Stops at the first match.
    Date,
}

impl Check {
    /// Run the check against one field of the request.
    pub fn run(&self, view: &dyn RequestView, field: &str, options: &Options) -> CheckResult {
        match self {
            Check::Required => required(view, field),
            Check::Alpha => alpha(view.field(field), field),
            Check::Alphanumeric => alphanumeric(view.field(field), field),
            Check::Integer => integer(view.field(field), field),
            Check::Boolean => boolean(view.field(field), field),
            Check::MaxLength => max_length(view.field(field), field, options),
            Check::MinLength => min_length(view.field(field), field, options),
            Check::Regex => regex_match(view.field(field), field, options, false),
            Check::NotRegex => regex_match(view.field(field), field, options, true),
            Check::Email => email(view.field(field), field),
            Check::MxEmail => mx_email(view.field(field), field, options),
            Check::DateFormat => date_format(view.field(field), field, options),
            Check::Rfc3339 => rfc3339(view.field(field), field),
            Check::Rfc1123 => rfc2822(view.field(field), field, "RFC 1123"),
            Check::Rfc822 => rfc2822(view.field(field), field, "RFC 822"),
            Check::UnixDate => unix_date(view.field(field), field),
            Check::Date => date(view.field(field), field, options),
        }
    }
}

fn required(view: &dyn RequestView, field: &str) -> CheckResult {
    if view.has_field(field) {
        Ok(())
    } else {
        Err(format!("{} is required", field))
    }
}

fn alpha(value: &str, field: &str) -> CheckResult {
    if NON_ALPHA.is_match(value) {
        Err(format!(
            "{} must only contain alphabetical characters",
            field
        ))
    } else {
        Ok(())
    }
}

fn alphanumeric(value: &str, field: &str) -> CheckResult {
    if NON_ALPHANUMERIC.is_match(value) {
        Err(format!(
            "{} must only contain alphanumeric characters",
            field
        ))
    } else {
        Ok(())
    }
}

fn integer(value: &str, field: &str) -> CheckResult {
    if value.parse::<i64>().is_ok() {
        Ok(())
    } else {
        Err(format!("{} must be an integer", field))
    }
}

fn boolean(value: &str, field: &str) -> CheckResult {
    match value {
        "true" | "false" | "1" | "0" => Ok(()),
        _ => Err(format!("{} must be a boolean value", field)),
    }
}

fn max_length(value: &str, field: &str, options: &Options) -> CheckResult {
    let max = options.int("length").unwrap_or(0);
    if value.chars().count() as i64 > max {
        Err(format!(
            "{} cannot be longer than {} characters",
            field, max
        ))
    } else {
        Ok(())
    }
}

fn min_length(value: &str, field: &str, options: &Options) -> CheckResult {
    let min = options.int("length").unwrap_or(0);
    if (value.chars().count() as i64) < min {
        Err(format!("{} must be longer than {} characters", field, min))
    } else {
        Ok(())
    }
}

fn regex_match(value: &str, field: &str, options: &Options, negate: bool) -> CheckResult {
    let unable = || format!("unable to create regex to validate {} parameter", field);

    let pattern = match options.str("pattern") {
        Some(pattern) => pattern,
        None => return Err(unable()),
    };
    let regex = match Regex::new(pattern) {
        Ok(regex) => regex,
        Err(_) => return Err(unable()),
    };

    match (regex.is_match(value), negate) {
        (true, false) | (false, true) => Ok(()),
        (false, false) => Err(format!("{} did not match regex `{}`", field, pattern)),
        (true, true) => Err(format!("{} must not match regex `{}`", field, pattern)),
    }
}

fn email(value: &str, field: &str) -> CheckResult {
    if value.matches('@').count() == 1 && EMAIL_SHAPE.is_match(value) {
        Ok(())
    } else {
        Err(format!("{} is not a valid email address", field))
    }
}

fn mx_email(value: &str, field: &str, options: &Options) -> CheckResult {
    email(value, field)?;

    let timeout = options
        .int("timeout")
        .unwrap_or(DEFAULT_MX_TIMEOUT_SECS)
        .max(0) as u64;
    let domain = value.rsplit('@').next().unwrap_or(value);

    match mx::lookup(domain, Duration::from_secs(timeout)) {
        Ok(0) => Err(format!("no MX records exist for {}", field)),
        Ok(_) => Ok(()),
        Err(_) => Err(format!("the host {} is not a valid email provider", domain)),
    }
}

fn date_format(value: &str, field: &str, options: &Options) -> CheckResult {
    let format = match options.str("format") {
        Some(format) => format,
        None => {
            return Err(format!(
                "unable to create date format to validate {} parameter",
                field
            ))
        }
    };

    if dates::parse_with(value, format) {
        Ok(())
    } else {
        Err(format!(
            "{} does not satisfy date format {}",
            field, format
        ))
    }
}

fn rfc3339(value: &str, field: &str) -> CheckResult {
    if dates::rfc3339(value) {
        Ok(())
    } else {
        Err(format!("{} does not satisfy the RFC 3339 date format", field))
    }
}

fn rfc2822(value: &str, field: &str, name: &str) -> CheckResult {
    if dates::rfc2822(value) {
        Ok(())
    } else {
        Err(format!("{} does not satisfy the {} date format", field, name))
    }
}

fn unix_date(value: &str, field: &str) -> CheckResult {
    if dates::unix_date(value) {
        Ok(())
    } else {
        Err(format!("{} does not satisfy the Unix date format", field))
    }
}

fn date(value: &str, field: &str, options: &Options) -> CheckResult {
    let custom = if options.contains("formats") {
        match options.list("formats") {
            Some(formats) => formats,
            None => {
                return Err(format!(
                    "unable to create date format to validate {} parameter",
                    field
                ))
            }
        }
    } else {
        &[]
    };

    if dates::parse_any(value, custom) {
        Ok(())
    } else {
        Err(format!("{} does not satisfy any date format", field))
    }
}
