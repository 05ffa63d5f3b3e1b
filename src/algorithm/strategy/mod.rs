//! # Strategies
//!
//! Decisions that can be made in more than one way while iterating.
pub mod pivot_rule;
