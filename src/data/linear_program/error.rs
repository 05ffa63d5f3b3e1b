//! # Malformed problems
//!
//! Problems whose shape doesn't allow a tableau to be built are rejected before any computation
//! starts.
use std::error::Error;
use std::fmt;

/// A `ConfigurationError` describes why a problem can't be turned into a tableau.
///
/// This `Error` is not returned when the problem is infeasible or unbounded. It is meant only for
/// descriptions of problems, or solver settings, that are inconsistent in themselves.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    /// There are no constraint rows.
    NoConstraints,
    /// There are no decision variables.
    NoVariables,
    /// A constraint row doesn't have one coefficient for every decision variable.
    RowLength {
        /// Index of the offending row.
        row: usize,
        /// Number of decision variables.
        expected: usize,
        /// Number of coefficients in the row.
        found: usize,
    },
    /// The objective function doesn't have one coefficient for every decision variable.
    ObjectiveLength {
        /// Number of decision variables, as determined by the first row.
        expected: usize,
        /// Number of objective coefficients.
        found: usize,
    },
    /// A coefficient or right-hand side is infinite or not a number.
    ///
    /// `row` is `None` for the objective function. `column` is `None` for a right-hand side.
    NonFinite {
        #[allow(missing_docs)]
        row: Option<usize>,
        #[allow(missing_docs)]
        column: Option<usize>,
    },
    /// An edit referred to a row that doesn't exist.
    RowIndex {
        #[allow(missing_docs)]
        index: usize,
        #[allow(missing_docs)]
        nr_rows: usize,
    },
    /// An edit referred to a variable that doesn't exist.
    VariableIndex {
        #[allow(missing_docs)]
        index: usize,
        #[allow(missing_docs)]
        nr_variables: usize,
    },
    /// The extraction tolerance is negative or not finite.
    Tolerance {
        #[allow(missing_docs)]
        value: f64,
    },
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConfigurationError::NoConstraints => write!(f, "The problem has no constraint rows"),
            ConfigurationError::NoVariables => write!(f, "The problem has no decision variables"),
            ConfigurationError::RowLength { row, expected, found } => write!(
                f,
                "Constraint row {} has {} coefficients, expected {}",
                row, found, expected,
            ),
            ConfigurationError::ObjectiveLength { expected, found } => write!(
                f,
                "The objective function has {} coefficients, expected {}",
                found, expected,
            ),
            ConfigurationError::NonFinite { row, column } => {
                let location = match row {
                    Some(row) => format!("constraint row {}", row),
                    None => "the objective function".to_string(),
                };
                match column {
                    Some(column) => write!(f, "Coefficient {} of {} is not finite", column, location),
                    None => write!(f, "The right-hand side of {} is not finite", location),
                }
            },
            ConfigurationError::RowIndex { index, nr_rows } => write!(
                f,
                "There is no constraint row {}, the problem has {} rows",
                index, nr_rows,
            ),
            ConfigurationError::VariableIndex { index, nr_variables } => write!(
                f,
                "There is no variable {}, the problem has {} variables",
                index, nr_variables,
            ),
            ConfigurationError::Tolerance { value } => write!(
                f,
                "The tolerance should be a finite, nonnegative number, found {}",
                value,
            ),
        }
    }
}

impl Error for ConfigurationError {}
