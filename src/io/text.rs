//! # Plain text rendering of a solve
//!
//! Snapshots are printed as tables with the columns labeled `x1` through `xK` and the
//! right-hand side labeled "resource vector". Slack columns are numbered after the decision
//! variables.
use std::fmt::{Display, Formatter, Result as FormatResult};

use crate::algorithm::{Iteration, SolveOutput};
use crate::algorithm::tableau::write_matrix;
use crate::data::number_types::Element;

impl<F: Element> Display for Iteration<F> {
    fn fmt(&self, f: &mut Formatter) -> FormatResult {
        if self.number == 0 {
            writeln!(f, "Initial tableau")?;
        } else {
            writeln!(f, "Iteration {} (pivot {})", self.number, self.pivot)?;
        }
        write_matrix(f, &self.matrix)
    }
}

impl<F: Element> Display for SolveOutput<F> {
    fn fmt(&self, f: &mut Formatter) -> FormatResult {
        for iteration in &self.iterations {
            writeln!(f, "{}", iteration)?;
        }

        match &self.solution {
            Some(solution) => writeln!(f, "Solution:\n{}", solution),
            None => writeln!(f, "No solution: the problem is infeasible, unbounded or took too many iterations"),
        }
    }
}
