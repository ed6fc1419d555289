//! Validation of `A.B.C.D/P` CIDR literals.
//!
//! Provides a predicate for the strict grammar, and a parser that tells
//! malformed text ([`CalcError::Format`]) apart from well-formed text with an
//! out-of-range number ([`CalcError::Range`]).

use crate::error::{CalcError, RangeComponent};
use crate::models::{Octets, MAX_LENGTH};
use regex::Regex;
use std::sync::OnceLock;

/// Octets 0-255 and prefix 0-32, no leading zeros, nothing around it.
static CIDR_REGEX: OnceLock<Regex> = OnceLock::new();

/// Same shape as [`CIDR_REGEX`] but any 1-3 digit number, for range reporting.
static CIDR_SHAPE_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_cidr_regex() -> &'static Regex {
    CIDR_REGEX.get_or_init(|| {
        let octet = r"(?:25[0-5]|2[0-4][0-9]|1[0-9][0-9]|[1-9][0-9]|[0-9])";
        Regex::new(&format!(
            r"^(?:{octet}\.){{3}}{octet}/(?:3[0-2]|[1-2][0-9]|[0-9])$"
        ))
        .expect("Invalid Regex")
    })
}

fn get_cidr_shape_regex() -> &'static Regex {
    CIDR_SHAPE_REGEX.get_or_init(|| {
        let num = r"(0|[1-9][0-9]{0,2})";
        Regex::new(&format!(r"^{num}\.{num}\.{num}\.{num}/{num}$")).expect("Invalid Regex")
    })
}

/// Where a piece of user input stands. Empty input has not been validated yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationState {
    Empty,
    Valid,
    Invalid,
}

/// True when `text` is exactly a `A.B.C.D/P` literal with in-range numbers.
pub fn is_valid_cidr_literal(text: &str) -> bool {
    get_cidr_regex().is_match(text)
}

/// Like [`is_valid_cidr_literal`] but fails with [`CalcError::Format`].
pub fn validate_cidr_literal(text: &str) -> Result<(), CalcError> {
    if is_valid_cidr_literal(text) {
        Ok(())
    } else {
        log::debug!("validate_cidr_literal rejected '{text}'");
        Err(CalcError::format(text))
    }
}

pub fn validation_state(text: &str) -> ValidationState {
    if text.is_empty() {
        ValidationState::Empty
    } else if is_valid_cidr_literal(text) {
        ValidationState::Valid
    } else {
        ValidationState::Invalid
    }
}

/// Split a literal into its octets and prefix length.
///
/// Text that is not four dotted numbers and a `/` number is a format error.
/// A number outside its domain is a range error naming that component.
pub fn parse_cidr_literal(text: &str) -> Result<([u8; 4], u8), CalcError> {
    let caps = get_cidr_shape_regex()
        .captures(text)
        .ok_or_else(|| CalcError::format(text))?;

    // at most 3 digits, always fits
    let num = |i: usize| -> i64 { caps[i].parse().unwrap_or(i64::MAX) };

    let octets = Octets::from_raw([num(1), num(2), num(3), num(4)])?;
    let prefix = num(5);
    if prefix > MAX_LENGTH as i64 {
        return Err(RangeComponent::Prefix(prefix).into());
    }
    log::trace!("parse_cidr_literal('{text}') -> {octets}/{prefix}");
    Ok((octets.octets(), prefix as u8))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_valid() {
        for s in [
            "192.168.0.5/24",
            "0.0.0.0/0",
            "255.255.255.255/32",
            "10.0.0.1/8",
            "1.2.3.4/9",
            "100.64.0.0/10",
            "249.250.199.200/31",
        ] {
            assert!(is_valid_cidr_literal(s), "{s} should be valid");
        }
    }

    #[test]
    fn test_rejects_invalid() {
        for s in [
            "999.1.1.1/24",
            "256.0.0.0/8",
            "1.1.1.1/33",
            "1.1.1.1",
            "1.1.1/24",
            "1.1.1.1.1/24",
            "01.1.1.1/24",
            "1.1.1.1/024",
            "1.1.1.1/",
            " 1.1.1.1/24",
            "1.1.1.1/24 ",
            "x1.1.1.1/24",
            "1.1.1.1/24x",
            "a.b.c.d/e",
            "1.1.1.1/2/4",
            "1..1.1/24",
        ] {
            assert!(!is_valid_cidr_literal(s), "{s} should be invalid");
        }
    }

    #[test]
    fn test_validate_format_error() {
        assert!(validate_cidr_literal("10.0.0.1/8").is_ok());
        let e = validate_cidr_literal("999.1.1.1/24").unwrap_err();
        assert!(e.is_format_error());
    }

    #[test]
    fn test_validation_state() {
        assert_eq!(validation_state(""), ValidationState::Empty);
        assert_eq!(validation_state("10.0.0.0/8"), ValidationState::Valid);
        assert_eq!(validation_state("10.0.0.0/"), ValidationState::Invalid);
    }

    #[test]
    fn test_parse_cidr_literal() {
        assert_eq!(
            parse_cidr_literal("192.168.0.5/24").unwrap(),
            ([192, 168, 0, 5], 24)
        );
        assert_eq!(
            parse_cidr_literal("1.1.1.1/33").unwrap_err(),
            CalcError::Range(RangeComponent::Prefix(33))
        );
        assert_eq!(
            parse_cidr_literal("999.1.1.1/24").unwrap_err(),
            CalcError::Range(RangeComponent::Octet {
                index: 0,
                value: 999
            })
        );
        assert!(parse_cidr_literal("1.1.1/24").unwrap_err().is_format_error());
        assert!(parse_cidr_literal("01.1.1.1/24").unwrap_err().is_format_error());
        assert!(parse_cidr_literal("").unwrap_err().is_format_error());
    }
}
