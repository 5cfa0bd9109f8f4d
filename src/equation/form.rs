//! The fixed catalog of candidate equation forms.
//!
//! Each form is a parametric function shape with a defined coefficient
//! count. The catalog is closed: search only ever tunes coefficients,
//! never invents new structure.

use rand::Rng;
use std::fmt;

/// A parametric function shape.
///
/// Every variant pairs an evaluation rule with its arity, the number of
/// coefficients the rule consumes:
///
/// | variant | arity | y(x) |
/// |---|---|---|
/// | `Quadratic` | 3 | c0 + c1·x + c2·x² |
/// | `Exponential` | 2 | c0·e^(c1·x) |
/// | `Cubic` | 4 | c0 + c1·x + c2·x² + c3·x³ |
/// | `Fourier` | 5 | c0 + c1·sin(c2·x) + c3·cos(c4·x) |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Form {
    /// c0 + c1·x + c2·x²
    Quadratic,
    /// c0·e^(c1·x)
    Exponential,
    /// c0 + c1·x + c2·x² + c3·x³
    Cubic,
    /// c0 + c1·sin(c2·x) + c3·cos(c4·x)
    Fourier,
}

impl Form {
    /// Every form, in catalog order.
    pub const CATALOG: [Form; 4] = [
        Form::Quadratic,
        Form::Exponential,
        Form::Cubic,
        Form::Fourier,
    ];

    /// Number of coefficients this form consumes.
    pub fn arity(self) -> usize {
        match self {
            Form::Quadratic => 3,
            Form::Exponential => 2,
            Form::Cubic => 4,
            Form::Fourier => 5,
        }
    }

    /// The form's display name.
    pub fn name(self) -> &'static str {
        match self {
            Form::Quadratic => "Quadratic",
            Form::Exponential => "Exponential",
            Form::Cubic => "Cubic",
            Form::Fourier => "Fourier",
        }
    }

    /// Evaluates the raw function at `x`.
    ///
    /// Pure arithmetic, no output floor; callers that need the floored
    /// value go through [`Equation::evaluate`](crate::equation::Equation::evaluate).
    ///
    /// # Panics
    ///
    /// Panics if `coefficients` is shorter than [`arity`](Self::arity).
    pub fn apply(self, x: f64, coefficients: &[f64]) -> f64 {
        let c = coefficients;
        match self {
            Form::Quadratic => c[0] + c[1] * x + c[2] * x * x,
            Form::Exponential => c[0] * (c[1] * x).exp(),
            Form::Cubic => c[0] + c[1] * x + c[2] * x * x + c[3] * x * x * x,
            Form::Fourier => c[0] + c[1] * (c[2] * x).sin() + c[3] * (c[4] * x).cos(),
        }
    }

    /// Picks a form uniformly at random from the catalog.
    pub fn sample<R: Rng>(rng: &mut R) -> Form {
        Form::CATALOG[rng.random_range(0..Form::CATALOG.len())]
    }
}

impl fmt::Display for Form {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
