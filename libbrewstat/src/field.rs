use std::fmt;
use std::str::FromStr;

use errors::*;

/// `MissingFieldPolicy` decides what a mapper does with a record whose metric field is empty.
///
/// A field that is present but does not parse as a number is always dropped, regardless of the
/// policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MissingFieldPolicy {
    /// The record contributes nothing to the dimension.
    Drop,
    /// The record contributes a value of `0.0`.
    DefaultZero,
}

impl fmt::Display for MissingFieldPolicy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            MissingFieldPolicy::Drop => write!(f, "drop"),
            MissingFieldPolicy::DefaultZero => write!(f, "default_zero"),
        }
    }
}

impl FromStr for MissingFieldPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "drop" => Ok(MissingFieldPolicy::Drop),
            "default_zero" | "default-zero" => Ok(MissingFieldPolicy::DefaultZero),
            _ => Err(format!(
                "Unknown missing field policy '{}', expected 'drop' or 'default_zero'",
                s
            ).into()),
        }
    }
}

/// Parses a metric field, applying `policy` when the field is empty.
///
/// Returns `None` when the record should be dropped. Values which parse to infinity or NaN
/// (`inf`, `NaN`, `1e999`) count as malformed.
pub fn parse_metric(raw: &str, policy: MissingFieldPolicy) -> Option<f64> {
    if raw.is_empty() {
        return match policy {
            MissingFieldPolicy::Drop => None,
            MissingFieldPolicy::DefaultZero => Some(0.0),
        };
    }
    raw.trim()
        .parse::<f64>()
        .ok()
        .and_then(|value| if value.is_finite() { Some(value) } else { None })
}

/// Returns true if `raw` is a sign-less decimal string: ASCII digits with at most one `.`.
pub fn looks_numeric(raw: &str) -> bool {
    let digits = raw.replacen('.', "", 1);
    !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
}

/// Parses `raw` only if it passes `looks_numeric`.
pub fn parse_strict(raw: &str) -> Option<f64> {
    if looks_numeric(raw) {
        raw.parse::<f64>().ok()
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn policy_from_str() {
        assert_eq!(MissingFieldPolicy::Drop, "drop".parse().unwrap());
        assert_eq!(
            MissingFieldPolicy::DefaultZero,
            "default_zero".parse().unwrap()
        );
        assert_eq!(
            MissingFieldPolicy::DefaultZero,
            "default-zero".parse().unwrap()
        );
        assert!("zero".parse::<MissingFieldPolicy>().is_err());
    }

    #[test]
    fn policy_display_round_trips() {
        for policy in &[MissingFieldPolicy::Drop, MissingFieldPolicy::DefaultZero] {
            assert_eq!(*policy, policy.to_string().parse().unwrap());
        }
    }

    #[test]
    fn parse_metric_empty_field() {
        assert_eq!(None, parse_metric("", MissingFieldPolicy::Drop));
        assert_eq!(Some(0.0), parse_metric("", MissingFieldPolicy::DefaultZero));
    }

    #[test]
    fn parse_metric_garbage_is_dropped_under_any_policy() {
        assert_eq!(None, parse_metric("bad", MissingFieldPolicy::Drop));
        assert_eq!(None, parse_metric("bad", MissingFieldPolicy::DefaultZero));
        assert_eq!(None, parse_metric("  ", MissingFieldPolicy::DefaultZero));
    }

    #[test]
    fn parse_metric_drops_non_finite_values() {
        for raw in &["inf", "-inf", "infinity", "NaN", "1e999"] {
            assert_eq!(None, parse_metric(raw, MissingFieldPolicy::Drop));
            assert_eq!(None, parse_metric(raw, MissingFieldPolicy::DefaultZero));
        }
    }

    #[test]
    fn parse_metric_accepts_surrounding_whitespace() {
        assert_eq!(Some(4.25), parse_metric(" 4.25 ", MissingFieldPolicy::Drop));
        assert_eq!(Some(-1.0), parse_metric("-1", MissingFieldPolicy::Drop));
    }

    #[test]
    fn looks_numeric_checks() {
        assert!(looks_numeric("40"));
        assert!(looks_numeric("0.05"));
        assert!(looks_numeric("5."));
        assert!(looks_numeric(".5"));

        assert!(!looks_numeric(""));
        assert!(!looks_numeric("."));
        assert!(!looks_numeric("1.2.3"));
        assert!(!looks_numeric("-4"));
        assert!(!looks_numeric("+4"));
        assert!(!looks_numeric("1e5"));
        assert!(!looks_numeric(" 4"));
        assert!(!looks_numeric("n/a"));
    }

    #[test]
    fn parse_strict_values() {
        assert_eq!(Some(0.05), parse_strict("0.05"));
        assert_eq!(Some(5.0), parse_strict("5."));
        assert_eq!(None, parse_strict("-0.05"));
    }
}
