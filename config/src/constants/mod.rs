//! Default root finder settings shared across the calibration workspace.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

// =============================================================================
// TOLERANCE CONSTANTS
// =============================================================================

/// Default absolute tolerance for the root finder.
///
/// A candidate root is accepted once the step (or residual) falls below
/// this absolute bound.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_ABSOLUTE_TOLERANCE;
/// assert!(DEFAULT_ABSOLUTE_TOLERANCE > 0.0);
/// assert!(DEFAULT_ABSOLUTE_TOLERANCE < 1.0e-6);
/// ```
pub const DEFAULT_ABSOLUTE_TOLERANCE: f64 = 1e-9;

/// Default relative tolerance for the root finder.
///
/// Scaled by the magnitude of the current estimate, so large roots are not
/// held to an unreachable absolute bound.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_RELATIVE_TOLERANCE;
/// let root = 1.0e4_f64;
/// assert!(DEFAULT_RELATIVE_TOLERANCE * root.abs() < 1.0e-4);
/// ```
pub const DEFAULT_RELATIVE_TOLERANCE: f64 = 1e-9;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Default maximum number of iterations the root finder may take.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_MAXIMUM_STEPS;
/// let steps_taken = 37;
/// assert!(steps_taken < DEFAULT_MAXIMUM_STEPS);
/// ```
pub const DEFAULT_MAXIMUM_STEPS: u32 = 1000;
