//! Coefficient slots.
//!
//! A coefficient is either a concrete value or an explicitly unset slot.
//! Unset slots are resolved to a fresh random draw only inside the genetic
//! operators, never silently anywhere else.

use rand::Rng;

/// Lower bound of the initial coefficient range.
pub const COEFFICIENT_MIN: f64 = -5.0;

/// Upper bound of the initial coefficient range.
pub const COEFFICIENT_MAX: f64 = 5.0;

/// One coefficient slot of an equation: a concrete value or unset.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Coefficient {
    /// No value yet; resolves to a fresh random draw when an operator
    /// needs it.
    Unset,
    /// A concrete value.
    Value(f64),
}

impl Coefficient {
    /// Returns the held value, if any.
    pub fn get(self) -> Option<f64> {
        match self {
            Coefficient::Unset => None,
            Coefficient::Value(v) => Some(v),
        }
    }

    /// Whether this slot holds a value.
    pub fn is_set(self) -> bool {
        matches!(self, Coefficient::Value(_))
    }

    /// Returns the held value, or a fresh draw from the initial range
    /// ([`COEFFICIENT_MIN`] to [`COEFFICIENT_MAX`]) if unset.
    pub fn resolve<R: Rng>(self, rng: &mut R) -> f64 {
        match self {
            Coefficient::Unset => random_coefficient(rng),
            Coefficient::Value(v) => v,
        }
    }
}

impl From<f64> for Coefficient {
    fn from(value: f64) -> Self {
        Coefficient::Value(value)
    }
}

/// Draws a coefficient uniformly from the initial range.
pub(crate) fn random_coefficient<R: Rng>(rng: &mut R) -> f64 {
    rng.random_range(COEFFICIENT_MIN..COEFFICIENT_MAX)
}
