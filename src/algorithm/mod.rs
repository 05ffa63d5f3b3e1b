//! # Algorithms
//!
//! Solving a problem happens in a fixed order: the tableau is compiled, pivots are applied until
//! the tableau is optimal, and the solution is read off the final tableau. A snapshot of the
//! tableau is recorded before the first pivot and after every pivot.
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::algorithm::config::SolverConfig;
use crate::algorithm::error::SolveError;
use crate::algorithm::strategy::pivot_rule::{MaxScaledRatio, PivotRule};
use crate::algorithm::tableau::Tableau;
use crate::data::linear_program::error::ConfigurationError;
use crate::data::linear_program::problem::{validate, ConstraintRow};
use crate::data::linear_program::solution::Solution;
use crate::data::number_types::{from_f64, Element};

pub mod config;
pub mod error;
pub mod extract;
pub mod logic;
pub mod strategy;
pub mod tableau;

/// Snapshot of the tableau after a number of pivots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Iteration<F> {
    /// Number of pivots applied, `0` for the initial tableau.
    #[serde(rename = "iterationNum")]
    pub number: usize,
    /// Value of the pivot element before its row was normalized, `0` for the initial tableau.
    pub pivot: F,
    /// All values, objective row and right-hand side column included.
    pub matrix: Vec<Vec<F>>,
}

impl<F: Element> Iteration<F> {
    /// Snapshot of a tableau before any pivot.
    pub fn initial(tableau: &Tableau<F>) -> Self {
        Self::new(0, F::zero(), tableau)
    }

    /// Snapshot of a tableau after a pivot.
    pub fn new(number: usize, pivot: F, tableau: &Tableau<F>) -> Self {
        Self { number, pivot, matrix: tableau.to_matrix() }
    }
}

/// Everything a solve produces.
///
/// Either there is a solution and a trace starting at the initial tableau, or there is neither.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolveOutput<F> {
    /// Values at the optimum, if one was reached.
    pub solution: Option<Solution<F>>,
    /// Snapshots in the order they were taken. Empty if there is no solution.
    pub iterations: Vec<Iteration<F>>,
}

impl<F> SolveOutput<F> {
    /// The outcome of an infeasible, unbounded or aborted solve.
    pub fn no_solution() -> Self {
        Self { solution: None, iterations: Vec::new() }
    }

    /// Whether an optimum was reached.
    pub fn is_solved(&self) -> bool {
        self.solution.is_some()
    }
}

/// Maximize an objective subject to constraint rows, with the default pivot rule and settings.
///
/// # Arguments
///
/// * `rows`: Constraints, each with one coefficient per decision variable.
/// * `objective`: One coefficient per decision variable.
///
/// # Errors
///
/// If the rows and objective don't describe a rectangular problem. A problem without solution is
/// not an error, see `SolveOutput::no_solution`.
pub fn solve<F: Element>(
    rows: &[ConstraintRow<F>],
    objective: &[F],
) -> Result<SolveOutput<F>, ConfigurationError> {
    solve_with::<_, MaxScaledRatio>(rows, objective, &SolverConfig::default())
}

/// Maximize with a specific pivot rule and settings.
///
/// # Errors
///
/// If the rows and objective don't describe a rectangular problem, or if the tolerance in
/// `config` is negative or not finite.
pub fn solve_with<F: Element, PR: PivotRule>(
    rows: &[ConstraintRow<F>],
    objective: &[F],
    config: &SolverConfig,
) -> Result<SolveOutput<F>, ConfigurationError> {
    let output = solve_detailed::<_, PR>(rows, objective, config)?
        .unwrap_or_else(|_| SolveOutput::no_solution());

    Ok(output)
}

/// Maximize, keeping the reason why no solution was found.
///
/// # Errors
///
/// The outer error means the problem or the settings are malformed and nothing was computed. The
/// inner error means that the iterations stopped before reaching an optimum; no trace is kept in
/// that case.
pub fn solve_detailed<F: Element, PR: PivotRule>(
    rows: &[ConstraintRow<F>],
    objective: &[F],
    config: &SolverConfig,
) -> Result<Result<SolveOutput<F>, SolveError>, ConfigurationError> {
    validate(rows, objective)?;
    config.validate()?;

    let mut tableau = Tableau::new(rows, objective);
    debug!(
        component = "simplex",
        operation = "compile",
        rule = PR::NAME,
        constraints = tableau.nr_rows(),
        decision_variables = tableau.nr_decision_variables(),
        slack_variables = tableau.nr_slack_variables(),
        "Compiled tableau"
    );
    trace!("\n{}", tableau);

    let result = logic::primal::<_, PR>(&mut tableau, config).map(|iterations| {
        let values = extract::extract(&tableau, from_f64(config.tolerance));
        let solution = Solution::new(values, objective);
        debug!(
            component = "simplex",
            operation = "solve",
            status = "optimal",
            iterations = iterations.len() - 1,
            objective_value = %solution.objective_value,
            "Reached an optimal tableau"
        );

        SolveOutput { solution: Some(solution), iterations }
    });

    match &result {
        Err(error) if matches!(error, SolveError::DegeneratePivot { .. }) => warn!(
            component = "simplex",
            operation = "solve",
            status = "no_solution",
            rule = PR::NAME,
            %error,
            "Pivot rule selected a zero pivot element"
        ),
        Err(error) => debug!(
            component = "simplex",
            operation = "solve",
            status = "no_solution",
            %error,
            "Stopped without a solution"
        ),
        Ok(_) => {},
    }

    Ok(result)
}
