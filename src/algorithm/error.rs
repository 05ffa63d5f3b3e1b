//! # Reasons a solve stops without a solution
//!
//! These are terminal for a solve. The public entry points collapse all of them into a single
//! "no solution" outcome; `solve_detailed` keeps them apart.
use std::error::Error;
use std::fmt;

/// Why the simplex iterations stopped before an optimal tableau was reached.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SolveError {
    /// The pivot rule found no column with a positive score.
    ///
    /// The problem is infeasible or unbounded, as far as the pivot rule can tell.
    NoFeasiblePivot {
        /// Number of the iteration that couldn't be performed.
        iteration: usize,
    },
    /// The iteration limits were reached.
    EffortExceeded {
        /// Number of pivots that were applied.
        iterations: usize,
    },
    /// The selected pivot element is zero.
    DegeneratePivot {
        #[allow(missing_docs)]
        row: usize,
        #[allow(missing_docs)]
        column: usize,
    },
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SolveError::NoFeasiblePivot { iteration } => write!(
                f,
                "No pivot available in iteration {}, the problem is infeasible or unbounded",
                iteration,
            ),
            SolveError::EffortExceeded { iterations } => write!(
                f,
                "Iteration limit exceeded after {} pivots",
                iterations,
            ),
            SolveError::DegeneratePivot { row, column } => write!(
                f,
                "Pivot element at row {}, column {} is zero",
                row, column,
            ),
        }
    }
}

impl Error for SolveError {}
