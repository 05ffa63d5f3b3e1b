//! # Representation of solutions
//!
//! Once the tableau is optimal, the values of the decision variables are read off of it. Slack
//! variables are not part of the solution.
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::data::number_types::Element;

/// Values of the decision variables at the optimum, together with the objective value there.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Solution<F> {
    /// Value of the objective function for this solution.
    pub objective_value: F,
    /// One value per decision variable, in the order of the objective coefficients.
    pub values: Vec<F>,
}

impl<F: Element> Solution<F> {
    /// Create a new `Solution`, computing the objective value from the coefficients.
    ///
    /// # Arguments
    ///
    /// * `values`: Value for each decision variable.
    /// * `objective`: Objective coefficients, same length as `values`.
    pub fn new(values: Vec<F>, objective: &[F]) -> Self {
        debug_assert_eq!(values.len(), objective.len());

        let objective_value = values.iter()
            .zip(objective)
            .fold(F::zero(), |total, (&value, &coefficient)| total + coefficient * value);

        Self { objective_value, values }
    }

    /// Variable names, one based, paired with their values.
    pub fn named_values(&self) -> impl Iterator<Item = (String, F)> + '_ {
        self.values.iter()
            .enumerate()
            .map(|(j, &value)| (format!("x{}", j + 1), value))
    }
}

impl<F: Element> fmt::Display for Solution<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (name, value) in self.named_values() {
            writeln!(f, "{} = {}", name, value)?;
        }
        write!(f, "f(x) = {}", self.objective_value)
    }
}
