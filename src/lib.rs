//! Symbolic regression by evolutionary search.
//!
//! Searches a small catalog of parametric equation forms (quadratic,
//! exponential, cubic, Fourier-like) for coefficient values whose outputs
//! at a fixed set of sample points match target values as closely as
//! possible.
//!
//! # Components
//!
//! - [`equation`]: Candidate solution representation — a fixed functional
//!   form plus a vector of real coefficients, with evaluation, fitness
//!   scoring, and the genetic operators (mutation, crossover).
//! - [`evolver`]: The genetic-algorithm loop — owns a population of
//!   equations, drives generations of ranking and reproduction, and
//!   returns the best candidate found.
//! - [`random`]: Seeded RNG construction for reproducible runs.
//!
//! # Example
//!
//! ```
//! use symreg::evolver::{Evolver, EvolverConfig};
//!
//! let config = EvolverConfig::default()
//!     .with_population_size(50)
//!     .with_generations(100)
//!     .with_seed(42);
//! let best = Evolver::with_config(config).run();
//! println!("{} (fitness {})", best, best.fitness());
//! ```
//!
//! All randomness flows through an explicit [`rand::Rng`] parameter (or a
//! configured seed), so evolutionary runs are fully reproducible.

pub mod equation;
pub mod evolver;
pub mod random;
