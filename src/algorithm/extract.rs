//! # Reading the solution off a tableau
//!
//! A decision variable is basic when its column holds a single `1` and zeros everywhere else, the
//! objective row included. Its value is the right-hand side of the row holding that `1`. All other
//! decision variables are zero.
use crate::algorithm::tableau::Tableau;
use crate::data::number_types::Element;

/// Values of the decision variables at the basic solution of a tableau.
///
/// Rows are scanned in order, up to the number of decision variables (which reaches the objective
/// row only when there are more variables than constraints). In each row, the first basic column
/// with a `1` in that row takes the row's right-hand side, and the scan moves on to the next row.
///
/// # Arguments
///
/// * `tableau`: Typically an optimal tableau.
/// * `tolerance`: Absolute distance within which a value counts as `0` or `1`. A tolerance of zero
/// means exact comparison.
///
/// # Return value
///
/// One value per decision variable.
pub fn extract<F: Element>(tableau: &Tableau<F>, tolerance: F) -> Vec<F> {
    let nr_variables = tableau.nr_decision_variables();
    let is_basic = (0..nr_variables)
        .map(|column| is_basic_column(tableau, column, tolerance))
        .collect::<Vec<_>>();

    let mut values = vec![F::zero(); nr_variables];
    for row in 0..nr_variables.min(tableau.nr_rows() + 1) {
        let found = (0..nr_variables)
            .find(|&column| is_basic[column] && is_one(tableau.get(row, column), tolerance));
        if let Some(column) = found {
            values[column] = tableau.right_hand_side(row);
        }
    }

    values
}

/// Whether a column is a unit column: exactly one `1`, all other entries `0`.
fn is_basic_column<F: Element>(tableau: &Tableau<F>, column: usize, tolerance: F) -> bool {
    let mut nr_ones = 0;
    for value in tableau.column(column) {
        if is_one(value, tolerance) {
            nr_ones += 1;
        } else if !value.abs_diff_eq(&F::zero(), tolerance) {
            return false;
        }
    }

    nr_ones == 1
}

fn is_one<F: Element>(value: F, tolerance: F) -> bool {
    value.abs_diff_eq(&F::one(), tolerance)
}
