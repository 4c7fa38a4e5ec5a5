//! # Root Finder Configuration
//!
//! Tolerance settings for the root finder used when calibrating curves.
//! The calibration engine picks a [`RootFinderConfig`] (usually
//! [`RootFinderConfig::standard`]) and hands it to the solver; this crate
//! only guarantees that whatever it hands over is valid.
//!
//! ## Architecture
//!
//! ```text
//! DEFAULT_* constants ──► RootFinderConfigBuilder ──build()──► RootFinderConfig
//!                           ▲        ▲        ▲
//!                 setters ──┘        │        └── serde documents
//!                      set_from_str / properties text
//! ```
//!
//! ## Example
//!
//! ```rust
//! use root_finder::{Field, RootFinderConfig};
//!
//! let cfg = RootFinderConfig::new(1e-6, 1e-6, 500)?;
//! assert_eq!(cfg.absolute_tolerance(), 1e-6);
//!
//! // Copy-and-modify goes through a builder seeded from the original
//! let longer = cfg.to_builder().maximum_steps(5000)?.build()?;
//! assert_eq!(longer.relative_tolerance(), 1e-6);
//!
//! // Zero is not a valid tolerance
//! let err = RootFinderConfig::new(0.0, 1e-9, 1000).unwrap_err();
//! assert_eq!(err.field(), Some(Field::AbsoluteTolerance));
//! # Ok::<(), root_finder::ConfigError>(())
//! ```

pub mod error;
pub mod field;
mod properties;
pub mod tolerances;

// Re-export public API
pub use config::constants::{
    DEFAULT_ABSOLUTE_TOLERANCE, DEFAULT_MAXIMUM_STEPS, DEFAULT_RELATIVE_TOLERANCE,
};
pub use error::{ConfigError, ConfigResult, ErrorKind};
pub use field::{Field, FieldValue};
pub use tolerances::{RootFinderConfig, RootFinderConfigBuilder};
