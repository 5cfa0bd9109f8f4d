//! The candidate equation: a form plus its coefficient vector.
//!
//! `Equation` is a standalone value with no awareness of the population.
//! The genetic operators return new instances; nothing mutates in place.

use super::coefficient::{random_coefficient, Coefficient};
use super::form::Form;
use rand::Rng;
use std::fmt;
use thiserror::Error;

/// Sample inputs paired with the outputs the search tries to reproduce.
///
/// Every fitness evaluation scores a candidate against this table.
pub const TARGET_VALUES: [(f64, f64); 4] = [
    (0.0, 0.0),
    (0.91, 90.0),
    (0.46, 26.0),
    (0.37, 12.2),
];

/// Per-coefficient probability that mutation perturbs the value.
pub const MUTATION_RATE: f64 = 0.05;

/// Floor applied to every evaluation result.
///
/// Keeps outputs strictly positive so fitness and any downstream
/// logarithmic use never see a non-positive value.
pub const MIN_OUTPUT: f64 = 0.0001;

/// Fitness penalty per target pair whose output is negative.
const NEGATIVE_OUTPUT_PENALTY: f64 = 1000.0;

/// Construction errors for [`Equation`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EquationError {
    /// The coefficient vector's length does not match the form's arity.
    #[error("{form} form expects {expected} coefficients, got {actual}")]
    ArityMismatch {
        form: Form,
        expected: usize,
        actual: usize,
    },
}

/// One candidate solution: a fixed [`Form`] and its coefficients.
///
/// The coefficient vector always has exactly `form.arity()` slots.
/// Slots may be [`Coefficient::Unset`] only when built through
/// [`partial`](Equation::partial); the genetic operators resolve unset
/// slots with fresh random draws as they go.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Equation {
    form: Form,
    coefficients: Vec<Coefficient>,
}

impl Equation {
    /// Builds an equation from a form and fully concrete coefficients.
    ///
    /// # Errors
    ///
    /// Returns [`EquationError::ArityMismatch`] when `coefficients.len()`
    /// differs from the form's arity. The vector is never truncated or
    /// padded.
    pub fn new(form: Form, coefficients: Vec<f64>) -> Result<Self, EquationError> {
        Self::partial(
            form,
            coefficients.into_iter().map(Coefficient::Value).collect(),
        )
    }

    /// Builds an equation whose slots may be left unset.
    ///
    /// Unset slots are resolved to fresh random draws the first time
    /// [`mutate`](Self::mutate) or [`crossover`](Self::crossover) touches
    /// them.
    ///
    /// # Errors
    ///
    /// Returns [`EquationError::ArityMismatch`] when the slot count
    /// differs from the form's arity.
    pub fn partial(form: Form, coefficients: Vec<Coefficient>) -> Result<Self, EquationError> {
        if coefficients.len() != form.arity() {
            return Err(EquationError::ArityMismatch {
                form,
                expected: form.arity(),
                actual: coefficients.len(),
            });
        }
        Ok(Self { form, coefficients })
    }

    /// Creates a random equation: a form sampled uniformly from the
    /// catalog and every coefficient drawn uniformly from the initial
    /// range.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        let form = Form::sample(rng);
        let coefficients = (0..form.arity())
            .map(|_| Coefficient::Value(random_coefficient(rng)))
            .collect();
        Self { form, coefficients }
    }

    /// The equation's form.
    pub fn form(&self) -> Form {
        self.form
    }

    /// The coefficient slots, in order.
    pub fn coefficients(&self) -> &[Coefficient] {
        &self.coefficients
    }

    /// Evaluates the equation at `x`, flooring the result at
    /// [`MIN_OUTPUT`].
    ///
    /// Never panics for any real `x`: negative arguments to the
    /// exponential and trigonometric forms are ordinary inputs, and any
    /// result below the floor (negative, zero, or NaN from an overflowed
    /// intermediate term) collapses to [`MIN_OUTPUT`]. An unset slot
    /// enters the arithmetic as NaN, which the floor absorbs as well.
    pub fn evaluate(&self, x: f64) -> f64 {
        let mut values = [0.0; 5];
        for (value, slot) in values.iter_mut().zip(&self.coefficients) {
            *value = slot.get().unwrap_or(f64::NAN);
        }
        let raw = self.form.apply(x, &values[..self.coefficients.len()]);
        raw.max(MIN_OUTPUT)
    }

    /// Scores the equation against [`TARGET_VALUES`]. Lower is better;
    /// 0 is a perfect fit.
    ///
    /// The score is the sum of absolute deviations from the expected
    /// outputs, plus 1000 per target pair whose output is negative.
    /// [`evaluate`](Self::evaluate) floors at [`MIN_OUTPUT`], so the
    /// penalty cannot fire post-floor; the term stays part of the
    /// scoring definition.
    pub fn fitness(&self) -> f64 {
        let mut total_error = 0.0;
        let mut penalty = 0.0;

        for &(input, expected) in TARGET_VALUES.iter() {
            let actual = self.evaluate(input);
            total_error += (actual - expected).abs();
            if actual < 0.0 {
                penalty += 1.0;
            }
        }

        total_error + penalty * NEGATIVE_OUTPUT_PENALTY
    }

    /// Produces a mutated copy with the same form and length.
    ///
    /// Each slot is resolved (unset slots get a fresh draw from the
    /// initial range), then independently perturbed by Uniform(-1, 1)
    /// with probability [`MUTATION_RATE`].
    pub fn mutate<R: Rng>(&self, rng: &mut R) -> Equation {
        let coefficients = self
            .coefficients
            .iter()
            .map(|&slot| {
                let base = slot.resolve(rng);
                let value = if rng.random_range(0.0..1.0) < MUTATION_RATE {
                    base + rng.random_range(-1.0..1.0)
                } else {
                    base
                };
                Coefficient::Value(value)
            })
            .collect();
        Equation {
            form: self.form,
            coefficients,
        }
    }

    /// Produces a child by uniform crossover, keeping `self`'s form.
    ///
    /// Slots pair positionally over `self`'s length; each position takes
    /// `self`'s slot with probability 0.5, else `other`'s. The chosen
    /// slot is resolved, so an unset slot (including positions where
    /// `other` is shorter) contributes a fresh draw. The evolutionary
    /// loop only crosses parents of the same form.
    pub fn crossover<R: Rng>(&self, other: &Equation, rng: &mut R) -> Equation {
        let coefficients = self
            .coefficients
            .iter()
            .enumerate()
            .map(|(i, &own)| {
                let theirs = other
                    .coefficients
                    .get(i)
                    .copied()
                    .unwrap_or(Coefficient::Unset);
                let picked = if rng.random_bool(0.5) { own } else { theirs };
                Coefficient::Value(picked.resolve(rng))
            })
            .collect();
        Equation {
            form: self.form,
            coefficients,
        }
    }
}

/// Renders a coefficient slot; values keep their shortest round-trip
/// representation (`1.0`, not `1`), unset slots print as `?`.
struct Slot(Coefficient);

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Coefficient::Value(v) => write!(f, "{v:?}"),
            Coefficient::Unset => f.write_str("?"),
        }
    }
}

impl fmt::Display for Equation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = |i: usize| Slot(self.coefficients[i]);
        match self.form {
            Form::Quadratic => write!(f, "y = {} + {}x + {}x^2", c(0), c(1), c(2)),
            Form::Exponential => write!(f, "y = {} * e^({}x)", c(0), c(1)),
            Form::Cubic => write!(
                f,
                "y = {} + {}x + {}x^2 + {}x^3",
                c(0),
                c(1),
                c(2),
                c(3)
            ),
            Form::Fourier => write!(
                f,
                "y = {} + {}sin({}x) + {}cos({}x)",
                c(0),
                c(1),
                c(2),
                c(3),
                c(4)
            ),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================


#[cfg(test)]
mod prop_tests {
    use super::*;
    use proptest::prelude::*;

    fn arb_form() -> impl Strategy<Value = Form> {
        prop_oneof![
            Just(Form::Quadratic),
            Just(Form::Exponential),
            Just(Form::Cubic),
            Just(Form::Fourier),
        ]
    }

    fn arb_equation() -> impl Strategy<Value = Equation> {
        arb_form().prop_flat_map(|form| {
            proptest::collection::vec(-100.0f64..100.0, form.arity())
                .prop_map(move |coefficients| Equation::new(form, coefficients).unwrap())
        })
    }

    proptest! {
        #[test]
        fn evaluate_respects_floor(eq in arb_equation(), x in -50.0f64..50.0) {
            prop_assert!(eq.evaluate(x) >= MIN_OUTPUT);
        }

        #[test]
        fn fitness_is_non_negative(eq in arb_equation()) {
            prop_assert!(eq.fitness() >= 0.0);
        }

        #[test]
        fn mutate_preserves_shape(eq in arb_equation(), seed in any::<u64>()) {
            let mut rng = crate::random::create_rng(seed);
            let mutated = eq.mutate(&mut rng);
            prop_assert_eq!(mutated.form(), eq.form());
            prop_assert_eq!(mutated.coefficients().len(), eq.coefficients().len());
        }

        #[test]
        fn crossover_preserves_self_shape(
            a in arb_equation(),
            b in arb_equation(),
            seed in any::<u64>(),
        ) {
            let mut rng = crate::random::create_rng(seed);
            let child = a.crossover(&b, &mut rng);
            prop_assert_eq!(child.form(), a.form());
            prop_assert_eq!(child.coefficients().len(), a.coefficients().len());
        }
    }
}
