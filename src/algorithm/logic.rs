//! # High-level Simplex logic
//!
//! The loop that pivots until the tableau is optimal, recording a snapshot after every pivot.
use tracing::{debug, trace};

use crate::algorithm::config::SolverConfig;
use crate::algorithm::error::SolveError;
use crate::algorithm::Iteration;
use crate::algorithm::strategy::pivot_rule::PivotRule;
use crate::algorithm::tableau::Tableau;
use crate::data::number_types::Element;

/// Pivot until the tableau is optimal.
///
/// The first snapshot is the tableau as it was passed in, with a pivot value of zero. Every
/// applied pivot adds one snapshot.
///
/// # Arguments
///
/// * `tableau`: Initial tableau. Is optimal when this function returns `Ok`.
/// * `config`: Iteration limits.
///
/// # Return value
///
/// All snapshots, in order.
///
/// # Errors
///
/// When no pivot can be found, when the iteration limits are reached or when a pivot element is
/// zero. Snapshots recorded up to that point are dropped.
pub(crate) fn primal<F: Element, PR: PivotRule>(
    tableau: &mut Tableau<F>,
    config: &SolverConfig,
) -> Result<Vec<Iteration<F>>, SolveError> {
    let mut rule = PR::new();
    let mut iterations = vec![Iteration::initial(tableau)];

    let mut count = 0;
    while !tableau.is_optimal() && count < config.max_iterations {
        let pivot = rule.select_pivot(tableau)
            .ok_or(SolveError::NoFeasiblePivot { iteration: count + 1 })?;

        if count > config.effort_cutoff {
            return Err(SolveError::EffortExceeded { iterations: count });
        }

        let pivot_value = tableau.row_reduce(pivot)?;
        count += 1;

        debug!(
            component = "simplex",
            operation = "pivot",
            rule = PR::NAME,
            iteration = count,
            row = pivot.row,
            column = pivot.column,
            pivot = %pivot_value,
            objective_value = %tableau.objective_function_value(),
            "Applied pivot"
        );
        trace!("\n{}", tableau);

        iterations.push(Iteration::new(count, pivot_value, tableau));
    }

    if tableau.is_optimal() {
        Ok(iterations)
    } else {
        Err(SolveError::EffortExceeded { iterations: count })
    }
}
