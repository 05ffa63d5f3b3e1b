//! # Pivot rules
//!
//! Strategies for selecting the entering column and the leaving row in one go.
use itertools::iproduct;

use crate::algorithm::tableau::{Pivot, Tableau};
use crate::data::number_types::Element;

/// Deciding how to pivot.
///
/// During the Simplex method, one needs to decide how to move from basic solution to basic
/// solution. The pivot rule describes that behavior. The rules in this module select the row
/// together with the column, so that the recorded trace is fully determined by the rule.
pub trait PivotRule {
    /// Name used when logging.
    const NAME: &'static str;

    /// Create a new instance.
    fn new() -> Self;

    /// Select the next pivot element.
    ///
    /// # Return value
    ///
    /// A pivot with a strictly positive value, or `None` if the rule can't find a pivot.
    fn select_pivot<F: Element>(&mut self, tableau: &Tableau<F>) -> Option<Pivot>;
}

/// Pivot on the column that promises the largest objective increase.
///
/// For every column, the leaving row is the one with the smallest positive ratio
/// `b[i] / a[i][j]` among the rows with `a[i][j] > 0`. The column is scored by multiplying that
/// ratio with its objective row coefficient. The column with the largest positive score wins.
///
/// This is not the textbook rule (which picks the largest objective coefficient). Rows with a
/// zero ratio are never selected, and all ties go to the lowest index. Traces depend on these
/// details, so they are kept as they are.
pub struct MaxScaledRatio;

impl PivotRule for MaxScaledRatio {
    const NAME: &'static str = "max-scaled-ratio";

    fn new() -> Self {
        Self
    }

    fn select_pivot<F: Element>(&mut self, tableau: &Tableau<F>) -> Option<Pivot> {
        let costs = tableau.objective_row();

        let mut max_score = F::zero();
        let mut selected = None;
        for column in 0..tableau.nr_columns() {
            let Some((row, ratio)) = min_positive_ratio(tableau, column) else {
                continue;
            };

            let score = costs[column] * ratio;
            if score > max_score {
                max_score = score;
                selected = Some(Pivot { row, column });
            }
        }

        selected
    }
}

/// Ratio between the right-hand side and a column entry, zero for entries that are not positive.
fn ratio<F: Element>(tableau: &Tableau<F>, row: usize, column: usize) -> F {
    let value = tableau.get(row, column);
    if value > F::zero() {
        tableau.right_hand_side(row) / value
    } else {
        F::zero()
    }
}

/// Row with the smallest strictly positive ratio in a column, first row on ties.
fn min_positive_ratio<F: Element>(tableau: &Tableau<F>, column: usize) -> Option<(usize, F)> {
    let mut min_ratio = F::infinity();
    let mut min_row = None;
    for row in 0..tableau.nr_rows() {
        let ratio = ratio(tableau, row, column);
        if ratio > F::zero() && ratio < min_ratio {
            min_ratio = ratio;
            min_row = Some(row);
        }
    }

    min_row.map(|row| (row, min_ratio))
}

/// Pivot on the smallest ratio over all profitable columns.
///
/// Columns with a positive objective row coefficient are scanned in order, and within each
/// column the rows with a positive entry. The element with the strictly smallest ratio
/// `b[i] / a[i][j]` is selected, the first one found on ties. The sign of the ratio is not
/// checked.
pub struct SmallestRatio;

impl PivotRule for SmallestRatio {
    const NAME: &'static str = "smallest-ratio";

    fn new() -> Self {
        Self
    }

    fn select_pivot<F: Element>(&mut self, tableau: &Tableau<F>) -> Option<Pivot> {
        let costs = tableau.objective_row();

        let mut min_ratio = F::infinity();
        let mut selected = None;
        for (column, row) in iproduct!(0..tableau.nr_columns(), 0..tableau.nr_rows()) {
            let value = tableau.get(row, column);
            if costs[column] <= F::zero() || value <= F::zero() {
                continue;
            }

            let ratio = tableau.right_hand_side(row) / value;
            if ratio < min_ratio {
                min_ratio = ratio;
                selected = Some(Pivot { row, column });
            }
        }

        selected
    }
}
