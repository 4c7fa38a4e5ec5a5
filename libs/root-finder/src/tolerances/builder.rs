//! Mutable builder for [`RootFinderConfig`].

use std::fmt;

use config::constants::{
    DEFAULT_ABSOLUTE_TOLERANCE, DEFAULT_MAXIMUM_STEPS, DEFAULT_RELATIVE_TOLERANCE,
};
use serde::{Deserialize, Serialize};

use super::{check_steps, check_tolerance, field_value, write_fields, RootFinderConfig};
use crate::error::{ConfigError, ConfigResult};
use crate::field::{Field, FieldValue};

/// Builder for [`RootFinderConfig`].
///
/// A new builder starts from the default constants. Every setter validates
/// its argument and leaves the current value untouched when it refuses one,
/// so the builder never holds an invalid field. [`build`](Self::build) can be
/// called any number of times.
///
/// # Examples
/// ```
/// use root_finder::RootFinderConfig;
///
/// let mut builder = RootFinderConfig::builder();
/// builder.relative_tolerance(1e-6)?.maximum_steps(250)?;
/// let cfg = builder.build()?;
/// assert_eq!(cfg.absolute_tolerance(), 1e-9);
/// assert_eq!(cfg.relative_tolerance(), 1e-6);
/// assert_eq!(cfg.maximum_steps(), 250);
/// # Ok::<(), root_finder::ConfigError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "BuilderFields")]
pub struct RootFinderConfigBuilder {
    pub(super) absolute_tolerance: f64,
    pub(super) relative_tolerance: f64,
    pub(super) maximum_steps: u32,
}

impl RootFinderConfigBuilder {
    /// Creates a builder holding the default constants.
    pub fn new() -> Self {
        Self {
            absolute_tolerance: DEFAULT_ABSOLUTE_TOLERANCE,
            relative_tolerance: DEFAULT_RELATIVE_TOLERANCE,
            maximum_steps: DEFAULT_MAXIMUM_STEPS,
        }
    }

    /// Sets the absolute tolerance for the root finder.
    pub fn absolute_tolerance(&mut self, value: f64) -> ConfigResult<&mut Self> {
        self.absolute_tolerance = check_tolerance(Field::AbsoluteTolerance, value)?;
        Ok(self)
    }

    /// Sets the relative tolerance for the root finder.
    pub fn relative_tolerance(&mut self, value: f64) -> ConfigResult<&mut Self> {
        self.relative_tolerance = check_tolerance(Field::RelativeTolerance, value)?;
        Ok(self)
    }

    /// Sets the maximum number of steps for the root finder.
    pub fn maximum_steps(&mut self, value: u32) -> ConfigResult<&mut Self> {
        self.maximum_steps = check_steps(value)?;
        Ok(self)
    }

    /// Returns the current value of `field`.
    pub fn value(&self, field: Field) -> FieldValue {
        field_value(
            field,
            self.absolute_tolerance,
            self.relative_tolerance,
            self.maximum_steps,
        )
    }

    /// Returns the current value of the property called `name`.
    pub fn get(&self, name: &str) -> ConfigResult<FieldValue> {
        Field::lookup(name).map(|field| self.value(field))
    }

    /// Sets `field` from an already typed value.
    ///
    /// Tolerances take [`FieldValue::Float`] and the step limit takes
    /// [`FieldValue::Integer`]; anything else is a type mismatch.
    pub fn set_field(&mut self, field: Field, value: FieldValue) -> ConfigResult<&mut Self> {
        match (field, value) {
            (Field::AbsoluteTolerance, FieldValue::Float(v)) => self.absolute_tolerance(v),
            (Field::RelativeTolerance, FieldValue::Float(v)) => self.relative_tolerance(v),
            (Field::MaximumSteps, FieldValue::Integer(v)) => self.maximum_steps(steps_from_i64(v)?),
            (field, value) => Err(ConfigError::TypeMismatch { field, value }),
        }
    }

    /// Sets the property called `name` from an already typed value.
    ///
    /// # Examples
    /// ```
    /// use root_finder::{ErrorKind, FieldValue, RootFinderConfig};
    ///
    /// let mut builder = RootFinderConfig::builder();
    /// builder.set("maximumSteps", FieldValue::Integer(40))?;
    /// assert_eq!(builder.build()?.maximum_steps(), 40);
    ///
    /// let err = builder.set("maximumSteps", FieldValue::Float(40.0)).unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    /// # Ok::<(), root_finder::ConfigError>(())
    /// ```
    pub fn set(&mut self, name: &str, value: FieldValue) -> ConfigResult<&mut Self> {
        let field = Field::lookup(name)?;
        self.set_field(field, value)
    }

    /// Parses `text` and sets the property called `name`.
    ///
    /// Surrounding whitespace is ignored. Tolerances accept any `f64`
    /// literal; the step limit accepts a decimal integer.
    ///
    /// # Examples
    /// ```
    /// use root_finder::{ErrorKind, RootFinderConfig};
    ///
    /// let mut builder = RootFinderConfig::builder();
    /// builder.set_from_str("absoluteTolerance", " 2.5e-8 ")?;
    /// assert_eq!(builder.build()?.absolute_tolerance(), 2.5e-8);
    ///
    /// let err = builder.set_from_str("maximumSteps", "lots").unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    /// # Ok::<(), root_finder::ConfigError>(())
    /// ```
    pub fn set_from_str(&mut self, name: &str, text: &str) -> ConfigResult<&mut Self> {
        let field = Field::lookup(name)?;
        let text = text.trim();
        let value = match field {
            Field::AbsoluteTolerance | Field::RelativeTolerance => text
                .parse::<f64>()
                .map(FieldValue::Float)
                .map_err(|e| unparsable(field, text, e))?,
            Field::MaximumSteps => text
                .parse::<i64>()
                .map(FieldValue::Integer)
                .map_err(|e| unparsable(field, text, e))?,
        };
        self.set_field(field, value)
    }

    /// Validates all fields and returns the finished configuration.
    ///
    /// Setters already validate; every field is checked again here so a
    /// config can never be produced from unchecked values.
    pub fn build(&self) -> ConfigResult<RootFinderConfig> {
        RootFinderConfig::new(
            self.absolute_tolerance,
            self.relative_tolerance,
            self.maximum_steps,
        )
    }
}

impl Default for RootFinderConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&RootFinderConfig> for RootFinderConfigBuilder {
    fn from(config: &RootFinderConfig) -> Self {
        Self {
            absolute_tolerance: config.absolute_tolerance,
            relative_tolerance: config.relative_tolerance,
            maximum_steps: config.maximum_steps,
        }
    }
}

impl From<RootFinderConfig> for RootFinderConfigBuilder {
    fn from(config: RootFinderConfig) -> Self {
        Self::from(&config)
    }
}

impl fmt::Display for RootFinderConfigBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RootFinderConfig.Builder")?;
        write_fields(
            f,
            self.absolute_tolerance,
            self.relative_tolerance,
            self.maximum_steps,
        )
    }
}

/// Unchecked document shape; converted through the setters.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
struct BuilderFields {
    absolute_tolerance: f64,
    relative_tolerance: f64,
    maximum_steps: u32,
}

impl Default for BuilderFields {
    fn default() -> Self {
        Self {
            absolute_tolerance: DEFAULT_ABSOLUTE_TOLERANCE,
            relative_tolerance: DEFAULT_RELATIVE_TOLERANCE,
            maximum_steps: DEFAULT_MAXIMUM_STEPS,
        }
    }
}

impl TryFrom<BuilderFields> for RootFinderConfigBuilder {
    type Error = ConfigError;

    fn try_from(fields: BuilderFields) -> Result<Self, Self::Error> {
        let mut builder = Self::new();
        builder
            .absolute_tolerance(fields.absolute_tolerance)?
            .relative_tolerance(fields.relative_tolerance)?
            .maximum_steps(fields.maximum_steps)?;
        Ok(builder)
    }
}

fn steps_from_i64(value: i64) -> ConfigResult<u32> {
    if value <= 0 {
        return Err(ConfigError::NotPositive {
            field: Field::MaximumSteps,
            value: FieldValue::Integer(value),
        });
    }
    u32::try_from(value).map_err(|e| unparsable(Field::MaximumSteps, &value.to_string(), e))
}

fn unparsable(field: Field, input: &str, reason: impl fmt::Display) -> ConfigError {
    ConfigError::Unparsable {
        field,
        input: input.to_string(),
        reason: reason.to_string(),
    }
}
