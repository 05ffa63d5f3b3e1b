//! # Solver settings
use serde::{Deserialize, Serialize};

use crate::data::linear_program::error::ConfigurationError;

/// Maximum number of pivots the solve loop attempts.
pub const MAX_ITERATIONS: usize = 30;
/// A pivot is refused once more than this many pivots were applied.
pub const EFFORT_CUTOFF: usize = 20;
/// Absolute tolerance used when reading the solution off the final tableau.
pub const TOLERANCE: f64 = 1e-9;

/// Limits and tolerances for a single solve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// The loop stops after this many pivots, optimal or not.
    pub max_iterations: usize,
    /// Stricter than `max_iterations`: when the pivot count exceeds this value, the next pivot
    /// aborts the solve.
    pub effort_cutoff: usize,
    /// Entries within this distance of `0` or `1` count as exactly `0` or `1` during extraction.
    pub tolerance: f64,
}

impl SolverConfig {
    /// Default limits, but values have to be exactly `0` or `1` during extraction.
    pub fn exact() -> Self {
        Self { tolerance: 0f64, ..Self::default() }
    }

    /// Check the settings before a solve.
    ///
    /// # Errors
    ///
    /// If the tolerance is negative or not finite. Such a tolerance would make every comparison
    /// during extraction fail.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.tolerance.is_finite() && self.tolerance >= 0f64 {
            Ok(())
        } else {
            Err(ConfigurationError::Tolerance { value: self.tolerance })
        }
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_iterations: MAX_ITERATIONS,
            effort_cutoff: EFFORT_CUTOFF,
            tolerance: TOLERANCE,
        }
    }
}
