//! # Dense simplex tableau
//!
//! The tableau is stored row by row. Row `i < nr_rows()` belongs to constraint `i`, the last row
//! holds the objective coefficients. The last column is the right-hand side ("resource vector").
//! Columns are the decision variables, followed by one slack column for every `<=` or `>=`
//! constraint in the order those constraints appear.
use std::fmt::{Display, Formatter, Result as FormatResult};
use std::iter;

use itertools::Itertools;

use crate::algorithm::error::SolveError;
use crate::data::linear_program::error::ConfigurationError;
use crate::data::linear_program::problem::{validate, ConstraintRow};
use crate::data::number_types::Element;

/// Location of a pivot element.
///
/// Always refers to a constraint row and a non right-hand side column.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Pivot {
    #[allow(missing_docs)]
    pub row: usize,
    #[allow(missing_docs)]
    pub column: usize,
}

/// Simplex tableau with all values stored explicitly.
///
/// Is rectangular at all times.
#[derive(Debug, Clone, PartialEq)]
pub struct Tableau<F> {
    /// `nr_rows() + 1` rows, each of length `nr_columns() + 1`.
    matrix: Vec<Vec<F>>,
    nr_decision_variables: usize,
}

impl<F: Element> Tableau<F> {
    /// Build the initial tableau of a problem.
    ///
    /// # Errors
    ///
    /// If the rows and objective coefficients don't describe a rectangular problem.
    pub fn compile(rows: &[ConstraintRow<F>], objective: &[F]) -> Result<Self, ConfigurationError> {
        validate(rows, objective)?;

        Ok(Self::new(rows, objective))
    }

    /// Build the initial tableau of a problem that has already been validated.
    ///
    /// Constraint coefficients are copied as they are, a slack column gets a `1` for `<=` rows
    /// and a `-1` for `>=` rows. The objective row starts with the objective coefficients and is
    /// zero elsewhere.
    pub(crate) fn new(rows: &[ConstraintRow<F>], objective: &[F]) -> Self {
        debug_assert!(validate(rows, objective).is_ok());

        let nr_decision_variables = objective.len();
        let nr_slack_variables = rows.iter().filter(|row| row.operation.has_slack()).count();
        let width = nr_decision_variables + nr_slack_variables + 1;

        let mut next_slack_column = nr_decision_variables;
        let mut matrix = Vec::with_capacity(rows.len() + 1);
        for row in rows {
            let mut new_row = vec![F::zero(); width];
            new_row[..nr_decision_variables].copy_from_slice(&row.values);
            if let Some(coefficient) = row.operation.slack_coefficient() {
                new_row[next_slack_column] = coefficient;
                next_slack_column += 1;
            }
            new_row[width - 1] = row.constraint;
            matrix.push(new_row);
        }
        debug_assert_eq!(next_slack_column, width - 1);

        matrix.push(
            objective.iter().copied()
                .chain(iter::repeat(F::zero()).take(nr_slack_variables + 1))
                .collect()
        );

        Self { matrix, nr_decision_variables }
    }

    /// Wrap an existing matrix, which includes the objective row and right-hand side column.
    #[cfg(test)]
    pub(crate) fn from_matrix(matrix: Vec<Vec<F>>, nr_decision_variables: usize) -> Self {
        debug_assert!(matrix.len() >= 2);
        debug_assert!(matrix.iter().map(Vec::len).all_equal());
        debug_assert!(nr_decision_variables < matrix[0].len());

        Self { matrix, nr_decision_variables }
    }

    /// Number of constraint rows, the objective row not included.
    pub fn nr_rows(&self) -> usize {
        self.matrix.len() - 1
    }

    /// Number of variable columns, the right-hand side not included.
    pub fn nr_columns(&self) -> usize {
        self.matrix[0].len() - 1
    }

    /// Number of columns that belong to the variables of the original problem.
    pub fn nr_decision_variables(&self) -> usize {
        self.nr_decision_variables
    }

    /// Number of slack and surplus columns.
    pub fn nr_slack_variables(&self) -> usize {
        self.nr_columns() - self.nr_decision_variables
    }

    /// Value at a row and column.
    ///
    /// Row `nr_rows()` is the objective row, column `nr_columns()` the right-hand side.
    pub fn get(&self, row: usize, column: usize) -> F {
        debug_assert!(row <= self.nr_rows());
        debug_assert!(column <= self.nr_columns());

        self.matrix[row][column]
    }

    /// Right-hand side of a row, the objective row being row `nr_rows()`.
    pub fn right_hand_side(&self, row: usize) -> F {
        self.get(row, self.nr_columns())
    }

    /// The current objective row, including its right-hand side.
    pub fn objective_row(&self) -> &[F] {
        &self.matrix[self.nr_rows()]
    }

    /// All values in a column, from the first constraint row down to the objective row.
    pub fn column(&self, column: usize) -> impl Iterator<Item = F> + '_ {
        debug_assert!(column <= self.nr_columns());

        self.matrix.iter().map(move |row| row[column])
    }

    /// Value of the objective function at the current basic solution.
    pub fn objective_function_value(&self) -> F {
        -self.right_hand_side(self.nr_rows())
    }

    /// Whether no entry of the objective row is positive.
    ///
    /// The right-hand side of the objective row is part of the test.
    pub fn is_optimal(&self) -> bool {
        self.objective_row().iter().all(|&value| value <= F::zero())
    }

    /// Apply a single pivot operation.
    ///
    /// The pivot row gets divided by the pivot value, after which the pivot column is eliminated
    /// from all other rows, the objective row included.
    ///
    /// # Return value
    ///
    /// The value of the pivot element before the row was normalized.
    ///
    /// # Errors
    ///
    /// If the pivot element is zero. Pivot rules never select such an element.
    pub fn row_reduce(&mut self, pivot: Pivot) -> Result<F, SolveError> {
        let Pivot { row: pivot_row, column: pivot_column } = pivot;
        debug_assert!(pivot_row < self.nr_rows());
        debug_assert!(pivot_column < self.nr_columns());

        let pivot_value = self.matrix[pivot_row][pivot_column];
        if pivot_value.is_zero() {
            return Err(SolveError::DegeneratePivot { row: pivot_row, column: pivot_column });
        }

        for value in &mut self.matrix[pivot_row] {
            *value = *value / pivot_value;
        }

        let normalized = self.matrix[pivot_row].clone();
        for (i, row) in self.matrix.iter_mut().enumerate() {
            if i == pivot_row {
                continue;
            }

            let factor = row[pivot_column];
            for (value, &pivot_row_value) in row.iter_mut().zip(&normalized) {
                *value = *value - factor * pivot_row_value;
            }
        }

        Ok(pivot_value)
    }

    /// Copy of all values, objective row and right-hand side included.
    pub fn to_matrix(&self) -> Vec<Vec<F>> {
        self.matrix.clone()
    }
}

/// Width of a value column when printed.
const COLUMN_WIDTH: usize = 10;
/// Digits after the decimal point when printed.
const PRECISION: usize = 3;
/// Header of the right-hand side column.
pub(crate) const RIGHT_HAND_SIDE_LABEL: &str = "resource vector";

/// Write a tableau matrix as a table.
///
/// Variable columns are labeled `x1` through `xK`, the last column is the right-hand side. The
/// objective row is separated from the constraint rows. Nothing is written for a matrix without
/// columns, and empty rows are skipped.
pub(crate) fn write_matrix<F: Element>(f: &mut Formatter, matrix: &[Vec<F>]) -> FormatResult {
    let Some(nr_columns) = matrix.first().and_then(|first| first.len().checked_sub(1)) else {
        return Ok(());
    };
    let last_width = RIGHT_HAND_SIDE_LABEL.len();

    let header = (1..=nr_columns)
        .map(|j| format!("{0:^width$}", format!("x{}", j), width = COLUMN_WIDTH))
        .join("");
    writeln!(f, "{}|{:^width$}", header, RIGHT_HAND_SIDE_LABEL, width = last_width)?;
    let separator = "-".repeat(nr_columns * COLUMN_WIDTH + 1 + last_width);
    writeln!(f, "{}", separator)?;

    for (i, row) in matrix.iter().enumerate() {
        if i + 1 == matrix.len() {
            writeln!(f, "{}", separator)?;
        }
        let Some((rhs, values)) = row.split_last() else {
            continue;
        };
        for &value in values {
            // Adding zero turns a negative zero into a positive one
            write!(f, "{0:^width$.precision$}", value + F::zero(), width = COLUMN_WIDTH, precision = PRECISION)?;
        }
        writeln!(f, "|{0:^width$.precision$}", *rhs + F::zero(), width = last_width, precision = PRECISION)?;
    }

    Ok(())
}

impl<F: Element> Display for Tableau<F> {
    fn fmt(&self, f: &mut Formatter) -> FormatResult {
        write_matrix(f, &self.matrix)
    }
}

#[cfg(test)]
mod test {
    use crate::algorithm::error::SolveError;
    use crate::algorithm::tableau::{write_matrix, Pivot, Tableau};
    use crate::data::linear_program::elements::ConstraintType;
    use crate::data::linear_program::error::ConfigurationError;
    use crate::data::linear_program::problem::ConstraintRow;
    use crate::tests::problem_1;

    fn row(values: Vec<f64>, operation: ConstraintType, constraint: f64) -> ConstraintRow<f64> {
        ConstraintRow::new(values, operation, constraint)
    }

    #[test]
    fn compile_less() {
        let problem = problem_1::problem();
        let tableau = Tableau::compile(problem.rows(), problem.objective()).unwrap();
        assert_eq!(tableau, problem_1::tableau_form());

        assert_eq!(tableau.nr_rows(), 3);
        assert_eq!(tableau.nr_columns(), 6);
        assert_eq!(tableau.nr_decision_variables(), 3);
        assert_eq!(tableau.nr_slack_variables(), 3);
        // The slack block is the identity
        for i in 0..3 {
            for j in 0..3 {
                assert_eq!(tableau.get(i, 3 + j), if i == j { 1f64 } else { 0f64 });
            }
        }
    }

    #[test]
    fn compile_greater() {
        let rows = vec![
            row(vec![1f64, 2f64], ConstraintType::Greater, 3f64),
            row(vec![4f64, 5f64], ConstraintType::Greater, 6f64),
        ];
        let tableau = Tableau::compile(&rows, &[1f64, 1f64]).unwrap();
        assert_eq!(tableau.to_matrix(), vec![
            vec![1f64, 2f64, -1f64, 0f64, 3f64],
            vec![4f64, 5f64, 0f64, -1f64, 6f64],
            vec![1f64, 1f64, 0f64, 0f64, 0f64],
        ]);
    }

    #[test]
    fn compile_mixed() {
        let rows = vec![
            row(vec![1f64, 2f64], ConstraintType::Less, 4f64),
            row(vec![1f64, 1f64], ConstraintType::Equal, 2f64),
            row(vec![3f64, 1f64], ConstraintType::Greater, 1f64),
        ];
        let tableau = Tableau::compile(&rows, &[2f64, 3f64]).unwrap();
        assert_eq!(tableau.nr_slack_variables(), 2);
        assert_eq!(tableau.to_matrix(), vec![
            vec![1f64, 2f64, 1f64, 0f64, 4f64],
            vec![1f64, 1f64, 0f64, 0f64, 2f64],
            vec![3f64, 1f64, 0f64, -1f64, 1f64],
            vec![2f64, 3f64, 0f64, 0f64, 0f64],
        ]);
    }

    #[test]
    fn compile_rejects_malformed() {
        let rows = vec![row(vec![1f64, 2f64], ConstraintType::Less, 4f64)];
        assert_eq!(
            Tableau::compile(&rows, &[1f64]),
            Err(ConfigurationError::ObjectiveLength { expected: 2, found: 1 }),
        );
        assert_eq!(Tableau::<f64>::compile(&[], &[]), Err(ConfigurationError::NoConstraints));
    }

    #[test]
    fn accessors() {
        let tableau = problem_1::tableau_form();
        assert_eq!(tableau.right_hand_side(1), 8f64);
        assert_eq!(tableau.objective_row(), &[1f64, 1f64, 1f64, 0f64, 0f64, 0f64, 0f64]);
        assert_eq!(tableau.column(1).collect::<Vec<_>>(), vec![3f64, 4f64, 2f64, 1f64]);
        assert_eq!(tableau.objective_function_value(), 0f64);
        assert!(!tableau.is_optimal());
    }

    #[test]
    fn row_reduce() {
        let mut tableau = problem_1::tableau_form();
        let pivot_value = tableau.row_reduce(Pivot { row: 0, column: 2 }).unwrap();
        assert_eq!(pivot_value, 2f64);
        assert_eq!(tableau, problem_1::tableau_after_first_pivot());
        assert_eq!(tableau.objective_function_value(), 3f64);
    }

    #[test]
    fn row_reduce_zero_pivot() {
        let mut tableau = problem_1::tableau_form();
        assert_eq!(
            tableau.row_reduce(Pivot { row: 0, column: 4 }),
            Err(SolveError::DegeneratePivot { row: 0, column: 4 }),
        );
        // Nothing was changed
        assert_eq!(tableau, problem_1::tableau_form());
    }

    #[test]
    fn optimality_includes_right_hand_side() {
        let tableau = Tableau::from_matrix(vec![
            vec![1f64, 1f64, 2f64],
            vec![0f64, -1f64, 1f64],
        ], 1);
        assert!(!tableau.is_optimal());

        let tableau = Tableau::from_matrix(vec![
            vec![1f64, 1f64, 2f64],
            vec![0f64, -1f64, -1f64],
        ], 1);
        assert!(tableau.is_optimal());
    }

    #[test]
    fn display() {
        let tableau = Tableau::from_matrix(vec![
            vec![1f64, -0f64, 2f64],
            vec![0.5f64, 0f64, -1f64],
        ], 1);
        let separator = "-".repeat(2 * 10 + 1 + 15);
        let expected = format!(
            "{}\n{}\n{}\n{}\n{}\n",
            "    x1        x2    |resource vector",
            separator,
            "  1.000     0.000   |     2.000     ",
            separator,
            "  0.500     0.000   |    -1.000     ",
        );
        assert_eq!(tableau.to_string(), expected);
    }

    #[test]
    fn display_without_columns() {
        struct Matrix(Vec<Vec<f64>>);
        impl std::fmt::Display for Matrix {
            fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                write_matrix(f, &self.0)
            }
        }

        assert_eq!(Matrix(vec![]).to_string(), "");
        assert_eq!(Matrix(vec![vec![]]).to_string(), "");

        // A ragged matrix still renders the rows that have values
        let text = Matrix(vec![vec![1f64, 2f64], vec![]]).to_string();
        assert!(text.contains("  1.000   |     2.000     \n"));
        assert_eq!(text.lines().count(), 4);
    }
}
