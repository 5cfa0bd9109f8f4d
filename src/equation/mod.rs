//! Candidate equation representation.
//!
//! An [`Equation`] is one candidate solution: a [`Form`] from the fixed
//! catalog plus a vector of real coefficients. It exposes evaluation with
//! an output floor, a scalar fitness score against the built-in target
//! table, and the two genetic operators (mutation, crossover) used by the
//! [`evolver`](crate::evolver).
//!
//! # Key Types
//!
//! - [`Form`]: The closed catalog of parametric shapes
//! - [`Coefficient`]: An explicit unset-or-value slot
//! - [`Equation`]: Form + coefficients, immutable after construction
//!
//! Randomness is threaded through [`rand::Rng`] parameters on every
//! stochastic operation.

mod coefficient;
mod form;
mod types;

pub use coefficient::{Coefficient, COEFFICIENT_MAX, COEFFICIENT_MIN};
pub use form::Form;
pub use types::{Equation, EquationError, MIN_OUTPUT, MUTATION_RATE, TARGET_VALUES};
