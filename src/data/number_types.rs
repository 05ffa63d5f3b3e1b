//! # Number types
//!
//! The tableau is dense and small, so plain floating point numbers are used throughout. All
//! algorithms are generic over the `Element` bound, which both `f32` and `f64` satisfy.
use std::fmt::{Debug, Display};

use approx::AbsDiffEq;
use num_traits::Float;

/// Numbers that can live in a tableau.
///
/// Comparisons against `0` and `1` during extraction go through `AbsDiffEq`, so that a tolerance
/// can be applied.
pub trait Element: Float + AbsDiffEq<Epsilon = Self> + Debug + Display + 'static {}

impl<T> Element for T
where
    T: Float + AbsDiffEq<Epsilon = T> + Debug + Display + 'static,
{}

/// Convert an `f64` setting (like a tolerance) into the element type.
///
/// Falls back to zero when the value can't be represented, which turns tolerant comparisons into
/// exact ones.
pub(crate) fn from_f64<F: Element>(value: f64) -> F {
    F::from(value).unwrap_or_else(F::zero)
}
