//! Empirical load-strain polynomials.

use uom::{
    ConstZero,
    si::{f64::Force, force::newton},
};

/// Number of coefficients in a usable (degree-4) polynomial.
pub(super) const COEFFICIENT_COUNT: usize = 5;

/// Polynomials are fit against strain in percent.
const PERCENT: f64 = 100.0;

/// A polynomial giving load as a function of strain.
///
/// Coefficient `i` multiplies `x^i` where `x = strain * 100`.
#[derive(Debug, Clone, Copy)]
pub(super) struct Polynomial<'a> {
    coefficients: &'a [Force],
}

impl<'a> Polynomial<'a> {
    pub(super) fn new(coefficients: &'a [Force]) -> Self {
        Self { coefficients }
    }

    /// Evaluates the load at `strain`.
    pub(super) fn load(&self, strain: f64) -> Force {
        let x = strain * PERCENT;
        self.coefficients
            .iter()
            .rev()
            .fold(Force::ZERO, |acc, &c| acc * x + c)
    }

    /// Evaluates `dLoad/dStrain` at `strain`.
    pub(super) fn slope(&self, strain: f64) -> Force {
        let x = strain * PERCENT;
        let dx = self
            .coefficients
            .iter()
            .enumerate()
            .skip(1)
            .rev()
            .fold(Force::ZERO, |acc, (i, &c)| acc * x + c * i as f64);
        dx * PERCENT
    }

    /// Returns the smallest slope on the closed strain interval `[lower, upper]`.
    ///
    /// The slope of a degree-4 polynomial is a cubic, so its extremes are at the
    /// interval ends or where the quadratic second derivative is zero.
    /// Higher-order coefficients are ignored.
    pub(super) fn min_slope(&self, lower: f64, upper: f64) -> Force {
        let coefficient = |i: usize| {
            self.coefficients
                .get(i)
                .map_or(0.0, |c| c.get::<newton>())
        };

        // Second derivative in x: a*x^2 + b*x + c.
        let a = 12.0 * coefficient(4);
        let b = 6.0 * coefficient(3);
        let c = 2.0 * coefficient(2);

        let mut roots = [None, None];
        if a == 0.0 {
            if b != 0.0 {
                roots[0] = Some(-c / b);
            }
        } else {
            let discriminant = b * b - 4.0 * a * c;
            if discriminant >= 0.0 {
                let sqrt = discriminant.sqrt();
                roots = [Some((-b - sqrt) / (2.0 * a)), Some((-b + sqrt) / (2.0 * a))];
            }
        }

        roots
            .into_iter()
            .flatten()
            .map(|x| x / PERCENT)
            .filter(|strain| lower < *strain && *strain < upper)
            .chain([lower, upper])
            .map(|strain| self.slope(strain))
            .fold(Force::new::<newton>(f64::INFINITY), |min, slope| {
                if slope < min { slope } else { min }
            })
    }
}
