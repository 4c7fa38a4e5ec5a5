//! # Properties Loader
//!
//! Reads a root finder configuration from `name = value` text:
//!
//! ```text
//! # tighter tolerances for short-end curves
//! absoluteTolerance = 1e-12
//! maximumSteps = 2500
//! ```
//!
//! Properties not mentioned keep their defaults. Blank lines and lines
//! starting with `#` or `!` are skipped.

use std::str::FromStr;

use tracing::trace;

use crate::error::{ConfigError, ConfigResult};
use crate::tolerances::{RootFinderConfig, RootFinderConfigBuilder};

impl RootFinderConfigBuilder {
    /// Applies every property in `text` to this builder.
    ///
    /// Stops at the first bad line. Properties applied before it stay
    /// applied.
    pub fn apply_properties(&mut self, text: &str) -> ConfigResult<&mut Self> {
        for (index, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
                continue;
            }
            let (name, value) = line.split_once('=').ok_or_else(|| ConfigError::Syntax {
                line: index + 1,
                content: line.to_string(),
            })?;
            let name = name.trim();
            self.set_from_str(name, value)?;
            trace!(
                line = index + 1,
                property = name,
                value = value.trim(),
                "applied root finder property"
            );
        }
        Ok(self)
    }
}

impl RootFinderConfig {
    /// Builds a configuration from `name = value` text on top of the defaults.
    ///
    /// # Examples
    /// ```
    /// use root_finder::RootFinderConfig;
    ///
    /// let cfg = RootFinderConfig::from_properties(
    ///     "# calibration overrides\nrelativeTolerance = 1e-7\nmaximumSteps = 200\n",
    /// )?;
    /// assert_eq!(cfg.absolute_tolerance(), 1e-9);
    /// assert_eq!(cfg.relative_tolerance(), 1e-7);
    /// assert_eq!(cfg.maximum_steps(), 200);
    /// # Ok::<(), root_finder::ConfigError>(())
    /// ```
    pub fn from_properties(text: &str) -> ConfigResult<Self> {
        RootFinderConfigBuilder::new().apply_properties(text)?.build()
    }
}

impl FromStr for RootFinderConfig {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RootFinderConfig::from_properties(s)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::field::Field;

    #[test]
    fn test_empty_text_gives_standard() {
        let cfg = RootFinderConfig::from_properties("").unwrap();
        assert_eq!(&cfg, RootFinderConfig::standard());

        let cfg: RootFinderConfig = "\n  # nothing here\n! nor here\n".parse().unwrap();
        assert_eq!(&cfg, RootFinderConfig::standard());
    }

    #[test]
    fn test_all_properties() {
        let text = "absoluteTolerance=1e-6\n  relativeTolerance =  2e-6  \nmaximumSteps= 500\n";
        let cfg = RootFinderConfig::from_properties(text).unwrap();
        assert_eq!(cfg, RootFinderConfig::new(1e-6, 2e-6, 500).unwrap());
    }

    #[test]
    fn test_later_lines_override_earlier() {
        let cfg =
            RootFinderConfig::from_properties("maximumSteps = 10\nmaximumSteps = 20").unwrap();
        assert_eq!(cfg.maximum_steps(), 20);
    }

    #[test]
    fn test_missing_separator_reports_line() {
        let err = RootFinderConfig::from_properties("# header\n\nmaximumSteps 20").unwrap_err();
        assert_eq!(
            err,
            ConfigError::Syntax {
                line: 3,
                content: "maximumSteps 20".to_string()
            }
        );
    }

    #[test]
    fn test_unknown_property_is_not_found() {
        let err = RootFinderConfig::from_properties("tolerance = 1e-9").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_invalid_value_is_rejected() {
        let err = RootFinderConfig::from_properties("relativeTolerance = -1e-9").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert_eq!(err.field(), Some(Field::RelativeTolerance));
    }

    #[test]
    fn test_partial_application_on_builder() {
        let mut builder = RootFinderConfigBuilder::new();
        let result = builder.apply_properties("maximumSteps = 7\nabsoluteTolerance = 0");
        assert!(result.is_err());
        let cfg = builder.build().unwrap();
        assert_eq!(cfg.maximum_steps(), 7);
        assert_eq!(cfg.absolute_tolerance(), 1e-9);
    }
}
