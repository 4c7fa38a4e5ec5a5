//! Validated tolerance settings handed to the root finder.
//!
//! [`RootFinderConfig`] is immutable and can only be obtained through a
//! validating path, so every live instance satisfies:
//!
//! - `absolute_tolerance > 0`
//! - `relative_tolerance > 0`
//! - `maximum_steps > 0`

mod builder;

pub use builder::RootFinderConfigBuilder;

use std::fmt;
use std::hash::{Hash, Hasher};

use config::constants::{
    DEFAULT_ABSOLUTE_TOLERANCE, DEFAULT_MAXIMUM_STEPS, DEFAULT_RELATIVE_TOLERANCE,
};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};
use crate::field::{Field, FieldValue};

static STANDARD: RootFinderConfig = RootFinderConfig {
    absolute_tolerance: DEFAULT_ABSOLUTE_TOLERANCE,
    relative_tolerance: DEFAULT_RELATIVE_TOLERANCE,
    maximum_steps: DEFAULT_MAXIMUM_STEPS,
};

/// Configuration for the root finder used when calibrating curves.
///
/// # Examples
/// ```
/// use root_finder::RootFinderConfig;
///
/// let cfg = RootFinderConfig::new(1e-6, 1e-6, 500).unwrap();
/// assert_eq!(cfg.maximum_steps(), 500);
/// assert_eq!(
///     cfg.to_string(),
///     "RootFinderConfig{absoluteTolerance=1e-6, relativeTolerance=1e-6, maximumSteps=500}"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RootFinderConfigBuilder")]
pub struct RootFinderConfig {
    absolute_tolerance: f64,
    relative_tolerance: f64,
    maximum_steps: u32,
}

impl RootFinderConfig {
    /// Builds a configuration, rejecting any value that is not strictly
    /// positive.
    ///
    /// Fields are checked in declaration order and the first failure is
    /// returned.
    ///
    /// # Examples
    /// ```
    /// use root_finder::{Field, RootFinderConfig};
    ///
    /// let err = RootFinderConfig::new(0.0, 1e-9, 1000).unwrap_err();
    /// assert_eq!(err.field(), Some(Field::AbsoluteTolerance));
    /// ```
    pub fn new(
        absolute_tolerance: f64,
        relative_tolerance: f64,
        maximum_steps: u32,
    ) -> ConfigResult<Self> {
        Ok(Self {
            absolute_tolerance: check_tolerance(Field::AbsoluteTolerance, absolute_tolerance)?,
            relative_tolerance: check_tolerance(Field::RelativeTolerance, relative_tolerance)?,
            maximum_steps: check_steps(maximum_steps)?,
        })
    }

    /// Returns the shared standard configuration built from the
    /// `DEFAULT_*` constants.
    ///
    /// # Examples
    /// ```
    /// use root_finder::{RootFinderConfig, DEFAULT_MAXIMUM_STEPS};
    /// assert_eq!(RootFinderConfig::standard().maximum_steps(), DEFAULT_MAXIMUM_STEPS);
    /// ```
    pub fn standard() -> &'static RootFinderConfig {
        &STANDARD
    }

    /// Returns a builder seeded with the default constants.
    pub fn builder() -> RootFinderConfigBuilder {
        RootFinderConfigBuilder::new()
    }

    /// Returns a builder seeded with this configuration's values.
    ///
    /// # Examples
    /// ```
    /// use root_finder::RootFinderConfig;
    ///
    /// let base = RootFinderConfig::new(1e-6, 1e-6, 500).unwrap();
    /// let tighter = base.to_builder().absolute_tolerance(1e-12)?.build()?;
    /// assert_eq!(tighter.absolute_tolerance(), 1e-12);
    /// assert_eq!(tighter.maximum_steps(), 500);
    /// # Ok::<(), root_finder::ConfigError>(())
    /// ```
    pub fn to_builder(&self) -> RootFinderConfigBuilder {
        RootFinderConfigBuilder::from(self)
    }

    /// The absolute tolerance for the root finder.
    pub fn absolute_tolerance(&self) -> f64 {
        self.absolute_tolerance
    }

    /// The relative tolerance for the root finder.
    pub fn relative_tolerance(&self) -> f64 {
        self.relative_tolerance
    }

    /// The maximum number of steps for the root finder.
    pub fn maximum_steps(&self) -> u32 {
        self.maximum_steps
    }

    /// Returns the value of `field`.
    pub fn value(&self, field: Field) -> FieldValue {
        field_value(
            field,
            self.absolute_tolerance,
            self.relative_tolerance,
            self.maximum_steps,
        )
    }

    /// Returns the value of the property called `name`.
    ///
    /// # Examples
    /// ```
    /// use root_finder::{ErrorKind, FieldValue, RootFinderConfig};
    ///
    /// let cfg = RootFinderConfig::standard();
    /// assert_eq!(cfg.get("maximumSteps"), Ok(FieldValue::Integer(1000)));
    /// assert_eq!(cfg.get("steps").unwrap_err().kind(), ErrorKind::NotFound);
    /// ```
    pub fn get(&self, name: &str) -> ConfigResult<FieldValue> {
        Field::lookup(name).map(|field| self.value(field))
    }

    /// Property names in declaration order.
    pub fn property_names() -> impl Iterator<Item = &'static str> {
        Field::ALL.into_iter().map(Field::name)
    }
}

impl Default for RootFinderConfig {
    fn default() -> Self {
        STANDARD
    }
}

impl TryFrom<RootFinderConfigBuilder> for RootFinderConfig {
    type Error = ConfigError;

    fn try_from(builder: RootFinderConfigBuilder) -> Result<Self, Self::Error> {
        builder.build()
    }
}

// Validation rejects NaN and both zeros, so bitwise hashing agrees with `==`.
impl Eq for RootFinderConfig {}

impl Hash for RootFinderConfig {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.absolute_tolerance.to_bits().hash(state);
        self.relative_tolerance.to_bits().hash(state);
        self.maximum_steps.hash(state);
    }
}

impl fmt::Display for RootFinderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RootFinderConfig")?;
        write_fields(
            f,
            self.absolute_tolerance,
            self.relative_tolerance,
            self.maximum_steps,
        )
    }
}

// =============================================================================
// VALIDATION
// =============================================================================

fn check_tolerance(field: Field, value: f64) -> ConfigResult<f64> {
    // NaN fails the comparison and is rejected along with non-positive values
    if value > 0.0 {
        Ok(value)
    } else {
        Err(ConfigError::NotPositive {
            field,
            value: FieldValue::Float(value),
        })
    }
}

fn check_steps(value: u32) -> ConfigResult<u32> {
    if value > 0 {
        Ok(value)
    } else {
        Err(ConfigError::NotPositive {
            field: Field::MaximumSteps,
            value: FieldValue::from(value),
        })
    }
}

fn field_value(
    field: Field,
    absolute_tolerance: f64,
    relative_tolerance: f64,
    maximum_steps: u32,
) -> FieldValue {
    match field {
        Field::AbsoluteTolerance => FieldValue::Float(absolute_tolerance),
        Field::RelativeTolerance => FieldValue::Float(relative_tolerance),
        Field::MaximumSteps => FieldValue::from(maximum_steps),
    }
}

fn write_fields(
    f: &mut fmt::Formatter<'_>,
    absolute_tolerance: f64,
    relative_tolerance: f64,
    maximum_steps: u32,
) -> fmt::Result {
    write!(
        f,
        "{{{}={absolute_tolerance:e}, {}={relative_tolerance:e}, {}={maximum_steps}}}",
        Field::AbsoluteTolerance,
        Field::RelativeTolerance,
        Field::MaximumSteps,
    )
}
