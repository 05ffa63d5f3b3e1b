//! # Building blocks to describe linear programs.
use std::fmt;
use std::ops::Neg;
use std::str::FromStr;

use num_traits::One;
use serde::{Deserialize, Serialize};

/// A `Constraint` is a type of (in)equality.
#[allow(missing_docs)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum ConstraintType {
    #[serde(rename = "=")]
    Equal,
    #[serde(rename = ">=")]
    Greater,
    #[serde(rename = "<=")]
    Less,
}

impl ConstraintType {
    /// Coefficient of the slack or surplus variable that turns this constraint into an equality.
    ///
    /// # Return value
    ///
    /// `+1` for a `<=` constraint, `-1` for a `>=` constraint and `None` for an equality, which
    /// doesn't get a slack column in the tableau.
    #[must_use]
    pub fn slack_coefficient<F: One + Neg<Output = F>>(self) -> Option<F> {
        match self {
            ConstraintType::Less => Some(F::one()),
            ConstraintType::Greater => Some(-F::one()),
            ConstraintType::Equal => None,
        }
    }

    /// Whether a slack column gets allocated for this constraint.
    pub fn has_slack(self) -> bool {
        self != ConstraintType::Equal
    }

    /// The operator as it is written in a constraint.
    pub fn symbol(self) -> &'static str {
        match self {
            ConstraintType::Equal => "=",
            ConstraintType::Greater => ">=",
            ConstraintType::Less => "<=",
        }
    }
}

/// New rows are `<=` rows.
impl Default for ConstraintType {
    fn default() -> Self {
        ConstraintType::Less
    }
}

impl fmt::Display for ConstraintType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for ConstraintType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "=" | "==" => Ok(ConstraintType::Equal),
            ">=" => Ok(ConstraintType::Greater),
            "<=" => Ok(ConstraintType::Less),
            other => Err(format!("Unknown constraint operator \"{}\", expected one of <=, >=, =", other)),
        }
    }
}
