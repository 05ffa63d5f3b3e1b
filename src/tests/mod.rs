//! # Scenarios that require a look inside the crate.
//!
//! Convention for function names:
//!
//! * `fn problem()`
//! * `fn tableau_form()`
//! * `fn tableau_after_*_pivot()`
//! * `fn iterations()`
use approx::assert_abs_diff_eq;

use crate::algorithm::Iteration;
use crate::algorithm::tableau::Tableau;


/// Tolerance when comparing computed tableaus with their fixtures.
const EPSILON: f64 = 1e-12;

/// Compare two matrices element by element.
pub fn assert_matrix_eq(computed: &[Vec<f64>], expected: &[Vec<f64>]) {
    assert_eq!(computed.len(), expected.len());
    for (computed_row, expected_row) in computed.iter().zip(expected) {
        assert_eq!(computed_row.len(), expected_row.len());
        for (computed_value, expected_value) in computed_row.iter().zip(expected_row) {
            assert_abs_diff_eq!(computed_value, expected_value, epsilon = EPSILON);
        }
    }
}

/// Compare two tableaus element by element.
pub fn assert_tableau_eq(computed: &Tableau<f64>, expected: &Tableau<f64>) {
    assert_eq!(computed.nr_decision_variables(), expected.nr_decision_variables());
    assert_matrix_eq(&computed.to_matrix(), &expected.to_matrix());
}

/// Compare two traces snapshot by snapshot.
pub fn assert_iterations_eq(computed: &[Iteration<f64>], expected: &[Iteration<f64>]) {
    assert_eq!(computed.len(), expected.len());
    for (computed_iteration, expected_iteration) in computed.iter().zip(expected) {
        assert_eq!(computed_iteration.number, expected_iteration.number);
        assert_abs_diff_eq!(computed_iteration.pivot, expected_iteration.pivot, epsilon = EPSILON);
        assert_matrix_eq(&computed_iteration.matrix, &expected_iteration.matrix);
    }
}
