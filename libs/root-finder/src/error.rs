//! # Error Types
//!
//! Errors raised while constructing or editing a root finder configuration.
//!
//! ## Error Policy
//!
//! - Invalid values are rejected at the point of assignment
//! - No default is ever substituted for a rejected value
//! - Every error names the property it concerns

use thiserror::Error;

use crate::field::{Field, FieldValue};

// =============================================================================
// ERROR KIND
// =============================================================================

/// Coarse classification of a [`ConfigError`].
///
/// Generic configuration tooling usually only needs to know whether a
/// property was unknown or whether its value was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A value was refused: out of range, unparsable or of the wrong type.
    InvalidArgument,
    /// A property name did not match any field.
    NotFound,
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur while building a [`RootFinderConfig`](crate::RootFinderConfig).
///
/// ## Example
///
/// ```rust
/// use root_finder::{ConfigError, ErrorKind, Field, RootFinderConfig};
///
/// let err = RootFinderConfig::new(0.0, 1e-9, 1000).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::InvalidArgument);
/// assert_eq!(err.field(), Some(Field::AbsoluteTolerance));
/// assert!(matches!(err, ConfigError::NotPositive { .. }));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The value is zero, negative or NaN.
    #[error("Invalid argument: '{field}' must be greater than zero, got {value}")]
    NotPositive {
        /// Property that was being assigned
        field: Field,
        /// Rejected value
        value: FieldValue,
    },

    /// Text could not be parsed as the property's type.
    #[error("Invalid argument: '{field}' cannot be parsed from {input:?}: {reason}")]
    Unparsable {
        /// Property that was being assigned
        field: Field,
        /// Raw text that failed to parse
        input: String,
        /// Parser message
        reason: String,
    },

    /// A typed value of the wrong kind was supplied for the property.
    #[error("Invalid argument: '{field}' does not accept {value}")]
    TypeMismatch {
        /// Property that was being assigned
        field: Field,
        /// Rejected value
        value: FieldValue,
    },

    /// A properties line was not of the form `name = value`.
    #[error("Invalid argument: line {line} is not a 'name = value' pair: {content:?}")]
    Syntax {
        /// 1-based line number
        line: usize,
        /// Offending line, trimmed
        content: String,
    },

    /// No property has the requested name.
    #[error("Unknown property: {name}")]
    NotFound {
        /// Name that was looked up
        name: String,
    },
}

impl ConfigError {
    /// Returns the coarse kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ConfigError::NotFound { .. } => ErrorKind::NotFound,
            ConfigError::NotPositive { .. }
            | ConfigError::Unparsable { .. }
            | ConfigError::TypeMismatch { .. }
            | ConfigError::Syntax { .. } => ErrorKind::InvalidArgument,
        }
    }

    /// Returns the property this error concerns, if it names one.
    pub fn field(&self) -> Option<Field> {
        match self {
            ConfigError::NotPositive { field, .. }
            | ConfigError::Unparsable { field, .. }
            | ConfigError::TypeMismatch { field, .. } => Some(*field),
            ConfigError::Syntax { .. } | ConfigError::NotFound { .. } => None,
        }
    }
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

// =============================================================================
// TESTS
// =============================================================================
