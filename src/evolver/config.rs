//! Evolver configuration.
//!
//! [`EvolverConfig`] holds the parameters that control the evolutionary
//! loop.

use thiserror::Error;

/// Early-stop bound: a candidate whose fitness drops below this ends the
/// run immediately.
pub const DEFAULT_FITNESS_THRESHOLD: f64 = 0.01;

/// Invalid [`EvolverConfig`] parameters.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Fewer than two individuals leaves nothing to sample parents from.
    #[error("population_size must be at least 2, got {0}")]
    PopulationTooSmall(usize),

    /// The early-stop bound must be a finite, non-negative fitness.
    #[error("fitness_threshold must be finite and non-negative, got {0}")]
    InvalidFitnessThreshold(f64),
}

/// Configuration for the [`Evolver`](crate::evolver::Evolver).
///
/// # Defaults
///
/// ```
/// use symreg::evolver::EvolverConfig;
///
/// let config = EvolverConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.generations, 500);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use symreg::evolver::EvolverConfig;
///
/// let config = EvolverConfig::default()
///     .with_population_size(200)
///     .with_generations(1000)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvolverConfig {
    /// Number of individuals in the population. At least 2.
    pub population_size: usize,

    /// Maximum number of generations before the run stops.
    ///
    /// May be 0, in which case the best member of the initial random
    /// population is returned directly.
    pub generations: usize,

    /// Early-stop bound: the run ends as soon as the best individual's
    /// fitness drops below this value.
    pub fitness_threshold: f64,

    /// Random seed for reproducibility. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for EvolverConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            generations: 500,
            fitness_threshold: DEFAULT_FITNESS_THRESHOLD,
            seed: None,
        }
    }
}

impl EvolverConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the maximum number of generations.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the early-stop fitness bound.
    pub fn with_fitness_threshold(mut self, threshold: f64) -> Self {
        self.fitness_threshold = threshold;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] describing the first invalid parameter.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size < 2 {
            return Err(ConfigError::PopulationTooSmall(self.population_size));
        }
        if !self.fitness_threshold.is_finite() || self.fitness_threshold < 0.0 {
            return Err(ConfigError::InvalidFitnessThreshold(self.fitness_threshold));
        }
        Ok(())
    }
}
