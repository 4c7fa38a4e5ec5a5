//! # Property Table
//!
//! Explicit name-to-field mapping used by generic configuration tooling.
//! Property names are the camelCase names published to configuration files
//! and serialized documents.

use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

// =============================================================================
// FIELD
// =============================================================================

/// A property of [`RootFinderConfig`](crate::RootFinderConfig).
///
/// ## Example
///
/// ```rust
/// use root_finder::Field;
///
/// let field: Field = "maximumSteps".parse().unwrap();
/// assert_eq!(field, Field::MaximumSteps);
/// assert_eq!(field.name(), "maximumSteps");
/// assert!("stepCount".parse::<Field>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// `absoluteTolerance`, a positive `f64`.
    AbsoluteTolerance,
    /// `relativeTolerance`, a positive `f64`.
    RelativeTolerance,
    /// `maximumSteps`, a positive integer.
    MaximumSteps,
}

impl Field {
    /// All fields in declaration order.
    pub const ALL: [Field; 3] = [
        Field::AbsoluteTolerance,
        Field::RelativeTolerance,
        Field::MaximumSteps,
    ];

    /// Published property name.
    pub const fn name(self) -> &'static str {
        match self {
            Field::AbsoluteTolerance => "absoluteTolerance",
            Field::RelativeTolerance => "relativeTolerance",
            Field::MaximumSteps => "maximumSteps",
        }
    }

    /// Looks up a field by its published property name.
    pub fn lookup(name: &str) -> Result<Self, ConfigError> {
        Field::ALL
            .into_iter()
            .find(|field| field.name() == name)
            .ok_or_else(|| ConfigError::NotFound {
                name: name.to_string(),
            })
    }
}

impl FromStr for Field {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::lookup(s)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// FIELD VALUE
// =============================================================================

/// Dynamically typed property value returned by name-based access.
///
/// Tolerances are reported as [`FieldValue::Float`] and the step limit as
/// [`FieldValue::Integer`]. The integer variant is signed so that rejected
/// negative inputs can be reported as given.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue {
    /// Floating-point value.
    Float(f64),
    /// Integer value.
    Integer(i64),
}

impl FieldValue {
    /// Returns the value as `f64` if it is a float.
    pub fn as_f64(self) -> Option<f64> {
        match self {
            FieldValue::Float(value) => Some(value),
            FieldValue::Integer(_) => None,
        }
    }

    /// Returns the value as `i64` if it is an integer.
    pub fn as_i64(self) -> Option<i64> {
        match self {
            FieldValue::Integer(value) => Some(value),
            FieldValue::Float(_) => None,
        }
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Float(value)
    }
}

impl From<u32> for FieldValue {
    fn from(value: u32) -> Self {
        FieldValue::Integer(i64::from(value))
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Integer(value)
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Float(value) => write!(f, "{value}"),
            FieldValue::Integer(value) => write!(f, "{value}"),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_names_round_trip_through_lookup() {
        for field in Field::ALL {
            assert_eq!(Field::lookup(field.name()), Ok(field));
            assert_eq!(field.to_string(), field.name());
        }
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let err = Field::lookup("AbsoluteTolerance").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert!(Field::lookup("absolute_tolerance").is_err());
        assert!(Field::lookup("").is_err());
    }

    #[test]
    fn test_declaration_order() {
        let names: Vec<_> = Field::ALL.iter().map(|f| f.name()).collect();
        assert_eq!(
            names,
            ["absoluteTolerance", "relativeTolerance", "maximumSteps"]
        );
    }

    #[test]
    fn test_field_value_accessors() {
        assert_eq!(FieldValue::from(0.5).as_f64(), Some(0.5));
        assert_eq!(FieldValue::from(0.5).as_i64(), None);
        assert_eq!(FieldValue::from(12_u32).as_i64(), Some(12));
        assert_eq!(FieldValue::from(-3_i64).as_f64(), None);
        assert_eq!(FieldValue::Integer(-3).to_string(), "-3");
    }
}
