//! Error types for validation and address calculation.
//!
//! Two kinds of failure exist:
//! - [`CalcError::Format`] - input text is not a `A.B.C.D/P` literal
//! - [`CalcError::Range`] - a numeric component is outside its domain

use thiserror::Error;

/// The component that was out of range when building a calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeComponent {
    /// Address octet at `index` (0 = most significant) had `value`.
    Octet { index: usize, value: i64 },
    /// Prefix length was not in 0..=32.
    Prefix(i64),
    /// Mask octets were not one of the 33 canonical masks.
    Mask([u8; 4]),
}

impl std::fmt::Display for RangeComponent {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            RangeComponent::Octet { index, value } => {
                write!(f, "octet out of range: octet {index} = {value}")
            }
            RangeComponent::Prefix(value) => write!(f, "prefix out of range: /{value}"),
            RangeComponent::Mask(m) => write!(
                f,
                "not a valid subnet mask: {}.{}.{}.{}",
                m[0], m[1], m[2], m[3]
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    #[error("invalid input: '{input}' is not a valid A.B.C.D/P address")]
    Format { input: String },

    #[error("{0}")]
    Range(RangeComponent),
}

impl CalcError {
    pub fn format(input: &str) -> Self {
        CalcError::Format {
            input: input.to_string(),
        }
    }

    pub fn is_format_error(&self) -> bool {
        matches!(self, CalcError::Format { .. })
    }

    pub fn is_range_error(&self) -> bool {
        matches!(self, CalcError::Range(_))
    }
}

impl From<RangeComponent> for CalcError {
    fn from(component: RangeComponent) -> Self {
        CalcError::Range(component)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_messages_name_component() {
        let e = CalcError::from(RangeComponent::Octet {
            index: 2,
            value: 300,
        });
        assert_eq!(e.to_string(), "octet out of range: octet 2 = 300");
        assert!(e.is_range_error());

        let e = CalcError::from(RangeComponent::Prefix(33));
        assert_eq!(e.to_string(), "prefix out of range: /33");

        let e = CalcError::from(RangeComponent::Mask([255, 0, 255, 0]));
        assert_eq!(e.to_string(), "not a valid subnet mask: 255.0.255.0");
    }

    #[test]
    fn test_format_error() {
        let e = CalcError::format("999.1.1.1/24");
        assert!(e.is_format_error());
        assert!(!e.is_range_error());
        assert!(e.to_string().contains("999.1.1.1/24"));
    }
}
