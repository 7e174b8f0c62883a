use num::Float;
use serde::Serialize;

use crate::error::{FuzzyError, Result};

/// Parametric membership function shapes.
///
/// The checked constructors (`triangular`, `gaussian`, ...) enforce each
/// shape's parameter preconditions. Building a variant directly skips those
/// checks and the result is only meaningful for well-formed parameters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MembershipFn<F> {
    /// Rises from 0 at `a` to 1 at `b` and falls back to 0 at `c`.
    Triangular { a: F, b: F, c: F },
    /// Rises from 0 at `a` to 1 at `b`, stays at 1 until `c` and falls to 0 at `d`.
    Trapezoidal { a: F, b: F, c: F, d: F },
    Gaussian { mean: F, sigma: F },
    /// Generalized bell: `a` is the width, `b` the slope and `c` the center.
    Bell { a: F, b: F, c: F },
    /// `a` controls slope and direction, `c` is the inflection point.
    Sigmoid { a: F, c: F },
}

fn check_finite<F: Float>(function: &'static str, params: &[F]) -> Result<()> {
    if params.iter().all(|p| p.is_finite()) {
        Ok(())
    } else {
        Err(FuzzyError::InvalidParameters {
            function,
            reason: "parameters must be finite".into(),
        })
    }
}

fn invalid(function: &'static str, reason: &str) -> FuzzyError {
    FuzzyError::InvalidParameters {
        function,
        reason: reason.into(),
    }
}

impl<F: Float> MembershipFn<F> {
    pub fn triangular(a: F, b: F, c: F) -> Result<Self> {
        check_finite("triangular", &[a, b, c])?;

        if !(a < b && b < c) {
            return Err(invalid("triangular", "expected a < b < c"));
        }

        Ok(Self::Triangular { a, b, c })
    }

    pub fn trapezoidal(a: F, b: F, c: F, d: F) -> Result<Self> {
        check_finite("trapezoidal", &[a, b, c, d])?;

        if !(a < b && b <= c && c < d) {
            return Err(invalid("trapezoidal", "expected a < b <= c < d"));
        }

        Ok(Self::Trapezoidal { a, b, c, d })
    }

    pub fn gaussian(mean: F, sigma: F) -> Result<Self> {
        check_finite("gaussian", &[mean, sigma])?;

        if sigma <= F::zero() {
            return Err(invalid("gaussian", "sigma must be positive"));
        }

        Ok(Self::Gaussian { mean, sigma })
    }

    /// A negative `b` makes the curve undefined at `x == c`; avoiding that is up to the caller.
    pub fn bell(a: F, b: F, c: F) -> Result<Self> {
        check_finite("bell", &[a, b, c])?;

        if a == F::zero() {
            return Err(invalid("bell", "width a must be non-zero"));
        }

        Ok(Self::Bell { a, b, c })
    }

    pub fn sigmoid(a: F, c: F) -> Result<Self> {
        check_finite("sigmoid", &[a, c])?;

        Ok(Self::Sigmoid { a, c })
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Triangular { .. } => "triangular",
            Self::Trapezoidal { .. } => "trapezoidal",
            Self::Gaussian { .. } => "gaussian",
            Self::Bell { .. } => "bell",
            Self::Sigmoid { .. } => "sigmoid",
        }
    }

    /// Membership degree of a single sample.
    pub fn call(&self, x: F) -> F {
        let zero = F::zero();
        let one = F::one();
        let two = one + one;

        match *self {
            Self::Triangular { a, b, c } => F::max(zero, F::min((x - a) / (b - a), (c - x) / (c - b))),
            Self::Trapezoidal { a, b, c, d } => F::max(zero, F::min(F::min((x - a) / (b - a), one), (d - x) / (d - c))),
            Self::Gaussian { mean, sigma } => F::exp(-(x - mean).powi(2) / (two * sigma.powi(2))),
            Self::Bell { a, b, c } => one / (one + F::abs((x - c) / a).powf(two * b)),
            Self::Sigmoid { a, c } => one / (one + F::exp(-a * (x - c))),
        }
    }

    /// Membership degrees of every sample in `domain`, element by element.
    pub fn eval(&self, domain: &[F]) -> Vec<F> {
        domain.iter().map(|&x| self.call(x)).collect()
    }
}
