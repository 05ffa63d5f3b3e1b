//! # A dense tableau simplex solver
//!
//! Maximizes a linear objective subject to `<=`, `>=` and `=` constraints over nonnegative
//! variables. Every pivot is recorded as a snapshot of the full tableau, such that the solve can
//! be shown step by step.
//!
//! Constraints of type `>=` and `=` don't get artificial variables, so problems that need a first
//! phase to find a feasible basis may be reported as having no solution.
#![warn(missing_docs)]

pub mod algorithm;
pub mod data;
pub mod io;

pub use crate::algorithm::{solve, solve_with, Iteration, SolveOutput};
pub use crate::data::linear_program::elements::ConstraintType;
pub use crate::data::linear_program::problem::{ConstraintRow, Problem};

#[cfg(test)]
mod tests;
