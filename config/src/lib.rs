//! # Config Crate
//!
//! Centralized default constants for the root finder that curve
//! calibration hands its tolerances to. Every crate that needs the
//! default tolerances or step limit reads them from here so the values
//! are defined exactly once.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{
//!     DEFAULT_ABSOLUTE_TOLERANCE, DEFAULT_MAXIMUM_STEPS, DEFAULT_RELATIVE_TOLERANCE,
//! };
//!
//! // A residual below the absolute tolerance counts as converged
//! let residual: f64 = 1e-12;
//! assert!(residual.abs() < DEFAULT_ABSOLUTE_TOLERANCE);
//!
//! // Relative tolerance scales with the magnitude of the root
//! let root = 250.0_f64;
//! let scaled = DEFAULT_RELATIVE_TOLERANCE * root.abs();
//! assert!(scaled > DEFAULT_RELATIVE_TOLERANCE);
//!
//! assert_eq!(DEFAULT_MAXIMUM_STEPS, 1000);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All defaults defined once, used everywhere
//! - **Strictly Positive**: Every default is a valid solver setting on its own
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
