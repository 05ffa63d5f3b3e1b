//! # Data structures
//!
//! Linear program descriptions as the caller edits them and the number types they are made of.
pub mod linear_program;
pub mod number_types;
