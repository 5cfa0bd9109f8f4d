//! The evolutionary loop.
//!
//! [`Evolver`] drives the complete search: initialization → ranking →
//! survivor selection → reproduction, generation after generation, until
//! the early-stop fitness bound is reached or the generation budget runs
//! out.

use super::config::EvolverConfig;
use crate::equation::Equation;
use crate::random::create_rng;
use rand::Rng;
use std::cmp::Ordering;

/// Executes the genetic search over equation candidates.
///
/// # Usage
///
/// ```
/// use symreg::evolver::{Evolver, EvolverConfig};
///
/// let config = EvolverConfig::default()
///     .with_population_size(40)
///     .with_generations(100)
///     .with_seed(42);
/// let best = Evolver::with_config(config).run();
/// assert!(best.fitness().is_finite());
/// ```
#[derive(Debug, Clone)]
pub struct Evolver {
    config: EvolverConfig,
}

impl Evolver {
    /// Creates an evolver with the given population size and generation
    /// budget, all other parameters at their defaults.
    pub fn new(population_size: usize, generations: usize) -> Self {
        Self::with_config(
            EvolverConfig::default()
                .with_population_size(population_size)
                .with_generations(generations),
        )
    }

    /// Creates an evolver from a full configuration.
    pub fn with_config(config: EvolverConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &EvolverConfig {
        &self.config
    }

    /// Runs the search and returns the best equation found.
    ///
    /// Seeds an RNG from the configuration (or from entropy when no seed
    /// is set) and delegates to [`run_with_rng`](Self::run_with_rng).
    ///
    /// # Panics
    ///
    /// Panics if the configuration is invalid (call
    /// [`EvolverConfig::validate`] first for a descriptive error).
    pub fn run(&self) -> Equation {
        let mut rng = match self.config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };
        self.run_with_rng(&mut rng)
    }

    /// Runs the search against a caller-supplied random source.
    ///
    /// One generation ranks the population ascending by fitness, stops if
    /// the best candidate beats the fitness threshold, otherwise keeps the
    /// top half as survivors and refills to full size with offspring:
    /// two parents drawn uniformly (with replacement) from the survivors,
    /// crossed over, then mutated. After the generation budget is spent,
    /// the minimum-fitness member of the final population is returned.
    ///
    /// # Panics
    ///
    /// Panics if the configuration is invalid.
    pub fn run_with_rng<R: Rng>(&self, rng: &mut R) -> Equation {
        self.config.validate().expect("invalid EvolverConfig");

        let size = self.config.population_size;
        let mut population: Vec<Equation> = (0..size).map(|_| Equation::random(rng)).collect();

        for _ in 0..self.config.generations {
            // Rank ascending. The sort is stable, so equal-fitness
            // candidates keep their original order within a run.
            let mut ranked: Vec<(Equation, f64)> = population
                .into_iter()
                .map(|eq| {
                    let fitness = eq.fitness();
                    (eq, fitness)
                })
                .collect();
            ranked.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal));

            if ranked[0].1 < self.config.fitness_threshold {
                return ranked.swap_remove(0).0;
            }

            // The top half survives unchanged and seeds the next
            // generation; the best candidate is therefore never lost.
            let mut next_gen: Vec<Equation> = ranked
                .into_iter()
                .take(size / 2)
                .map(|(eq, _)| eq)
                .collect();
            let survivor_count = next_gen.len();

            while next_gen.len() < size {
                let p1 = rng.random_range(0..survivor_count);
                let p2 = rng.random_range(0..survivor_count);
                let child = next_gen[p1].crossover(&next_gen[p2], rng).mutate(rng);
                next_gen.push(child);
            }

            population = next_gen;
        }

        population
            .into_iter()
            .map(|eq| {
                let fitness = eq.fitness();
                (eq, fitness)
            })
            .min_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal))
            .map(|(eq, _)| eq)
            .expect("population must not be empty")
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_sets_size_and_budget() {
        let evolver = Evolver::new(20, 30);
        assert_eq!(evolver.config().population_size, 20);
        assert_eq!(evolver.config().generations, 30);
    }

    #[test]
    fn test_run_returns_well_formed_equation() {
        let config = EvolverConfig::default()
            .with_population_size(30)
            .with_generations(50)
            .with_seed(42);
        let best = Evolver::with_config(config).run();

        assert_eq!(best.coefficients().len(), best.form().arity());
        assert!(best.coefficients().iter().all(|c| c.is_set()));
        assert!(best.fitness() >= 0.0);
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let config = EvolverConfig::default()
            .with_population_size(30)
            .with_generations(40)
            .with_seed(7);
        let a = Evolver::with_config(config.clone()).run();
        let b = Evolver::with_config(config).run();
        assert_eq!(a, b);
    }

    #[test]
    fn test_zero_generations_returns_initial_best() {
        let config = EvolverConfig::default()
            .with_population_size(20)
            .with_generations(0)
            .with_seed(42);
        let best = Evolver::with_config(config).run();

        // Rebuild the initial population from the same seed; the result
        // must be its minimum-fitness member.
        let mut rng = create_rng(42);
        let expected = (0..20)
            .map(|_| Equation::random(&mut rng))
            .map(|eq| {
                let fitness = eq.fitness();
                (eq, fitness)
            })
            .min_by(|a, b| a.1.partial_cmp(&b.1).unwrap())
            .unwrap()
            .0;
        assert_eq!(best, expected);
    }

    #[test]
    fn test_early_stop_returns_before_budget_is_spent() {
        // With the threshold above any reachable fitness, the first
        // ranking already satisfies it: the run must return the initial
        // population's best without breeding a single generation.
        let base = EvolverConfig::default()
            .with_population_size(20)
            .with_seed(42)
            .with_fitness_threshold(f64::MAX);

        let stopped = Evolver::with_config(base.clone().with_generations(1_000_000)).run();
        let initial_best = Evolver::with_config(base.with_generations(0)).run();

        assert_eq!(stopped, initial_best);
        assert!(stopped.fitness() < f64::MAX);
    }

    #[test]
    fn test_longer_runs_never_do_worse() {
        // Survivors carry the incumbent best into every generation, so
        // extending the budget can only improve the result. Both runs
        // share the same seed and draw an identical stream prefix.
        let base = EvolverConfig::default()
            .with_population_size(30)
            .with_seed(11);

        let short = Evolver::with_config(base.clone().with_generations(10)).run();
        let long = Evolver::with_config(base.with_generations(100)).run();

        assert!(long.fitness() <= short.fitness());
    }

    #[test]
    fn test_run_improves_on_initial_population() {
        let base = EvolverConfig::default()
            .with_population_size(40)
            .with_seed(3);

        let initial_best = Evolver::with_config(base.clone().with_generations(0)).run();
        let evolved = Evolver::with_config(base.with_generations(200)).run();

        assert!(evolved.fitness() <= initial_best.fitness());
    }

    #[test]
    fn test_odd_population_size() {
        let config = EvolverConfig::default()
            .with_population_size(9)
            .with_generations(20)
            .with_seed(42);
        let best = Evolver::with_config(config).run();
        assert!(best.fitness() >= 0.0);
    }

    #[test]
    fn test_minimum_population_size() {
        let config = EvolverConfig::default()
            .with_population_size(2)
            .with_generations(10)
            .with_seed(42);
        let best = Evolver::with_config(config).run();
        assert!(best.fitness() >= 0.0);
    }

    #[test]
    #[should_panic(expected = "invalid EvolverConfig")]
    fn test_run_panics_on_invalid_config() {
        Evolver::new(1, 10).run();
    }

    #[test]
    fn test_injected_rng_matches_seeded_run() {
        let config = EvolverConfig::default()
            .with_population_size(20)
            .with_generations(30)
            .with_seed(42);
        let evolver = Evolver::with_config(config);

        let from_seed = evolver.run();
        let mut rng = create_rng(42);
        let from_rng = evolver.run_with_rng(&mut rng);

        assert_eq!(from_seed, from_rng);
    }
}
