//! # Problems as the caller edits them
//!
//! A `Problem` is a plain value. Every edit produces a new, independent `Problem`, so that a
//! front end can keep its history without worrying about aliasing. Nothing is checked while
//! editing; the shape is validated once a problem gets solved.
use serde::{Deserialize, Serialize};

use crate::algorithm::{self, SolveOutput};
use crate::algorithm::config::SolverConfig;
use crate::algorithm::error::SolveError;
use crate::algorithm::strategy::pivot_rule::PivotRule;
use crate::data::linear_program::elements::ConstraintType;
use crate::data::linear_program::error::ConfigurationError;
use crate::data::number_types::Element;

/// A single linear constraint over the decision variables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstraintRow<F> {
    /// One coefficient per decision variable.
    pub values: Vec<F>,
    /// Direction of the (in)equality.
    pub operation: ConstraintType,
    /// Right-hand side.
    pub constraint: F,
}

impl<F> ConstraintRow<F> {
    /// Create a new constraint row.
    pub fn new(values: Vec<F>, operation: ConstraintType, constraint: F) -> Self {
        Self { values, operation, constraint }
    }
}

/// A maximization problem with nonnegative variables.
///
/// The order of the rows is the order in which slack columns get allocated in the tableau.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Problem<F> {
    rows: Vec<ConstraintRow<F>>,
    objective: Vec<F>,
}

impl<F: Element> Problem<F> {
    /// Create a new problem from its rows and objective coefficients.
    ///
    /// The shape is not checked; see `validate`.
    pub fn new(rows: Vec<ConstraintRow<F>>, objective: Vec<F>) -> Self {
        Self { rows, objective }
    }

    /// The constraint rows, in order.
    pub fn rows(&self) -> &[ConstraintRow<F>] {
        &self.rows
    }

    /// The objective coefficients, one per decision variable.
    pub fn objective(&self) -> &[F] {
        &self.objective
    }

    /// Number of decision variables, as determined by the first row.
    ///
    /// Without rows, the length of the objective function is used.
    pub fn nr_variables(&self) -> usize {
        self.rows.first().map_or(self.objective.len(), |row| row.values.len())
    }

    /// Number of constraint rows.
    pub fn nr_constraints(&self) -> usize {
        self.rows.len()
    }

    /// Check that a tableau can be built for this problem.
    ///
    /// # Errors
    ///
    /// A `ConfigurationError` describing the first inconsistency found.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        validate(&self.rows, &self.objective)
    }

    /// Add a decision variable with an objective coefficient and row coefficients of zero.
    #[must_use]
    pub fn with_variable(&self) -> Self {
        let mut objective = self.objective.clone();
        objective.push(F::zero());
        let rows = self.rows.iter()
            .map(|row| {
                let mut values = row.values.clone();
                values.push(F::zero());
                ConstraintRow { values, ..row.clone() }
            })
            .collect();

        Self { rows, objective }
    }

    /// Remove the last decision variable from the objective function and from every row.
    ///
    /// Does nothing if there are no variables.
    #[must_use]
    pub fn without_variable(&self) -> Self {
        let Some(new_len) = self.nr_variables().checked_sub(1) else {
            return self.clone();
        };

        let objective = self.objective[..new_len].to_vec();
        let rows = self.rows.iter()
            .map(|row| {
                let mut values = row.values.clone();
                values.truncate(new_len);
                ConstraintRow { values, ..row.clone() }
            })
            .collect();

        Self { rows, objective }
    }

    /// Add a `<=` row with all coefficients and the right-hand side equal to zero.
    #[must_use]
    pub fn with_constraint(&self) -> Self {
        let mut rows = self.rows.clone();
        rows.push(ConstraintRow::new(
            vec![F::zero(); self.nr_variables()],
            ConstraintType::default(),
            F::zero(),
        ));

        Self { rows, objective: self.objective.clone() }
    }

    /// Remove the last constraint row, if any.
    #[must_use]
    pub fn without_constraint(&self) -> Self {
        let mut rows = self.rows.clone();
        rows.pop();

        Self { rows, objective: self.objective.clone() }
    }

    /// Replace a constraint row.
    ///
    /// # Errors
    ///
    /// If there is no row at `index`.
    pub fn with_row(&self, index: usize, row: ConstraintRow<F>) -> Result<Self, ConfigurationError> {
        if index >= self.rows.len() {
            return Err(ConfigurationError::RowIndex { index, nr_rows: self.rows.len() });
        }

        let mut rows = self.rows.clone();
        rows[index] = row;

        Ok(Self { rows, objective: self.objective.clone() })
    }

    /// Replace a single objective coefficient.
    ///
    /// # Errors
    ///
    /// If there is no variable at `index`.
    pub fn with_objective_coefficient(&self, index: usize, value: F) -> Result<Self, ConfigurationError> {
        if index >= self.objective.len() {
            return Err(ConfigurationError::VariableIndex { index, nr_variables: self.objective.len() });
        }

        let mut objective = self.objective.clone();
        objective[index] = value;

        Ok(Self { rows: self.rows.clone(), objective })
    }

    /// Value of the objective function at a point.
    ///
    /// Missing values count as zero, superfluous values are ignored.
    pub fn objective_value(&self, values: &[F]) -> F {
        self.objective.iter()
            .zip(values)
            .fold(F::zero(), |total, (&coefficient, &value)| total + coefficient * value)
    }

    /// Solve with the default pivot rule and settings.
    ///
    /// # Errors
    ///
    /// If the problem is malformed. Infeasibility is not an error, see `SolveOutput`.
    pub fn solve(&self) -> Result<SolveOutput<F>, ConfigurationError> {
        algorithm::solve(&self.rows, &self.objective)
    }

    /// Solve with a specific pivot rule and settings.
    ///
    /// # Errors
    ///
    /// If the problem is malformed.
    pub fn solve_with<PR: PivotRule>(&self, config: &SolverConfig) -> Result<SolveOutput<F>, ConfigurationError> {
        algorithm::solve_with::<_, PR>(&self.rows, &self.objective, config)
    }

    /// Solve, keeping the reason for a missing solution.
    ///
    /// # Errors
    ///
    /// The outer error is a malformed problem, the inner one a solve that didn't reach an optimum.
    pub fn solve_detailed<PR: PivotRule>(
        &self,
        config: &SolverConfig,
    ) -> Result<Result<SolveOutput<F>, SolveError>, ConfigurationError> {
        algorithm::solve_detailed::<_, PR>(&self.rows, &self.objective, config)
    }
}

/// The problem a new session starts with.
impl Default for Problem<f64> {
    fn default() -> Self {
        Self::new(
            vec![
                ConstraintRow::new(vec![-1f64, 3f64, 2f64], ConstraintType::Less, 6f64),
                ConstraintRow::new(vec![2f64, 4f64, 2f64], ConstraintType::Less, 8f64),
                ConstraintRow::new(vec![3f64, 2f64, -1f64], ConstraintType::Less, 4f64),
            ],
            vec![1f64, 1f64, 1f64],
        )
    }
}

/// Check that rows and objective coefficients describe a rectangular problem.
///
/// The number of decision variables is determined by the first row.
///
/// # Errors
///
/// A `ConfigurationError` describing the first inconsistency found.
pub fn validate<F: Element>(rows: &[ConstraintRow<F>], objective: &[F]) -> Result<(), ConfigurationError> {
    let first = rows.first().ok_or(ConfigurationError::NoConstraints)?;
    let expected = first.values.len();
    if expected == 0 {
        return Err(ConfigurationError::NoVariables);
    }

    for (row, constraint_row) in rows.iter().enumerate() {
        if constraint_row.values.len() != expected {
            return Err(ConfigurationError::RowLength { row, expected, found: constraint_row.values.len() });
        }
    }
    if objective.len() != expected {
        return Err(ConfigurationError::ObjectiveLength { expected, found: objective.len() });
    }

    for (row, constraint_row) in rows.iter().enumerate() {
        if let Some(column) = constraint_row.values.iter().position(|value| !value.is_finite()) {
            return Err(ConfigurationError::NonFinite { row: Some(row), column: Some(column) });
        }
        if !constraint_row.constraint.is_finite() {
            return Err(ConfigurationError::NonFinite { row: Some(row), column: None });
        }
    }
    if let Some(column) = objective.iter().position(|value| !value.is_finite()) {
        return Err(ConfigurationError::NonFinite { row: None, column: Some(column) });
    }

    Ok(())
}
