//! # Linear programs
//!
//! A problem is a list of constraint rows together with the coefficients of the objective function
//! that is to be maximized. All variables are nonnegative.
pub mod elements;
pub mod error;
pub mod problem;
pub mod solution;
