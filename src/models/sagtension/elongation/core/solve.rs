//! Inversion of a polynomial for the strain at a target load.
//!
//! Point Start, Point End and the polynomial branch of `strain(load)` all go
//! through [`strain_at_load`] or [`strain_at_load_within`].

use std::convert::Infallible;

use twine_core::{EquationProblem, Model};
use twine_solvers::equation::bisection;
use uom::{
    ConstZero,
    si::{f64::Force, force::newton},
};

use crate::support::constraint::StrictlyPositive;

use super::{ElongationConfig, ElongationError, polynomial::Polynomial};

/// Polynomial load as a model of strain.
struct PolynomialLoad<'a> {
    polynomial: Polynomial<'a>,
}

impl Model for PolynomialLoad<'_> {
    type Input = f64;
    type Output = Force;
    type Error = Infallible;

    fn call(&self, strain: &f64) -> Result<Force, Infallible> {
        Ok(self.polynomial.load(*strain))
    }
}

/// Residual `load - target`, in newtons.
struct TargetLoad {
    target: Force,
}

impl EquationProblem<1> for TargetLoad {
    type Input = f64;
    type Output = Force;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<f64, Infallible> {
        Ok(x[0])
    }

    fn residuals(&self, _strain: &f64, load: &Force) -> Result<[f64; 1], Infallible> {
        Ok([(*load - self.target).get::<newton>()])
    }
}

/// Finds the lowest strain at which the polynomial reaches `target`.
///
/// Scans up from zero strain in steps of `config.scan_step` and bisects the
/// first step where the load crosses the target.
///
/// # Errors
///
/// Returns [`ElongationError::NoBracket`] if the load is already above the
/// target at zero strain or never reaches it below `config.max_strain`.
pub(super) fn strain_at_load(
    polynomial: Polynomial<'_>,
    target: Force,
    config: &ElongationConfig,
) -> Result<f64, ElongationError> {
    let step = StrictlyPositive::new(config.scan_step)
        .map_err(ElongationError::InvalidScanStep)?
        .into_inner();

    let no_bracket = ElongationError::NoBracket {
        target,
        max_strain: config.max_strain,
    };

    let mut lower = 0.0;
    let residual = polynomial.load(lower) - target;
    if residual == Force::ZERO {
        return Ok(lower);
    }
    if residual > Force::ZERO {
        return Err(no_bracket);
    }

    while lower < config.max_strain {
        let upper = (lower + step).min(config.max_strain);
        if polynomial.load(upper) >= target {
            return strain_at_load_within(polynomial, target, [lower, upper], config);
        }
        lower = upper;
    }

    Err(no_bracket)
}

/// Finds the strain in `[lower, upper]` at which the polynomial reaches `target`.
///
/// Targets at or beyond the load at either end resolve to that end, so a
/// target that sits on a boundary within solver tolerance never fails to
/// bracket.
pub(super) fn strain_at_load_within(
    polynomial: Polynomial<'_>,
    target: Force,
    [lower, upper]: [f64; 2],
    config: &ElongationConfig,
) -> Result<f64, ElongationError> {
    if polynomial.load(lower) >= target {
        return Ok(lower);
    }
    if polynomial.load(upper) <= target {
        return Ok(upper);
    }

    let model = PolynomialLoad { polynomial };
    let problem = TargetLoad { target };

    let solution = bisection::solve(
        &model,
        &problem,
        [lower, upper],
        &config.bisection(),
        |event: &bisection::Event<'_, _, _>| {
            tracing::trace!(strain = event.x(), "bisecting polynomial strain");
            None
        },
    )?;

    if solution.status != bisection::Status::Converged {
        return Err(ElongationError::MaxIters {
            residual: Force::new::<newton>(solution.residual),
            iters: solution.iters,
        });
    }

    Ok(solution.x)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::force::pound_force;

    fn lbf(values: &[f64]) -> Vec<Force> {
        values.iter().map(|&v| Force::new::<pound_force>(v)).collect()
    }

    #[test]
    fn linear_polynomial_root() {
        // Load = 1000 * x (percent), so 250 lbf is at 0.25 percent.
        let coefficients = lbf(&[0.0, 1000.0]);
        let polynomial = Polynomial::new(&coefficients);

        let strain = strain_at_load(
            polynomial,
            Force::new::<pound_force>(250.0),
            &ElongationConfig::default(),
        )
        .expect("root should be bracketed");

        assert_relative_eq!(strain, 0.0025, epsilon = 1e-10);
    }

    #[test]
    fn picks_the_lowest_crossing() {
        // Rises to ~201 lbf, dips to ~77 lbf, then rises again.
        let coefficients = lbf(&[0.0, 1000.0, -1500.0, 600.0]);
        let polynomial = Polynomial::new(&coefficients);

        let target = Force::new::<pound_force>(150.0);
        let strain = strain_at_load(polynomial, target, &ElongationConfig::default())
            .expect("root should be bracketed");

        assert!(strain < 0.0046, "found a later crossing at {strain}");
        assert_relative_eq!(
            polynomial.load(strain).get::<pound_force>(),
            150.0,
            epsilon = 1e-6
        );
    }

    #[test]
    fn zero_strain_root() {
        let coefficients = lbf(&[0.0, 1000.0]);
        let strain = strain_at_load(
            Polynomial::new(&coefficients),
            Force::ZERO,
            &ElongationConfig::default(),
        )
        .expect("zero load is at zero strain");
        assert_eq!(strain, 0.0);
    }

    #[test]
    fn unreachable_target() {
        let coefficients = lbf(&[0.0, 1000.0]);
        let polynomial = Polynomial::new(&coefficients);
        let config = ElongationConfig::default();

        // Above the load at the largest scanned strain.
        let result = strain_at_load(polynomial, Force::new::<pound_force>(1e9), &config);
        assert!(matches!(result, Err(ElongationError::NoBracket { .. })));

        // Below the load at zero strain.
        let result = strain_at_load(polynomial, Force::new::<pound_force>(-1.0), &config);
        assert!(matches!(result, Err(ElongationError::NoBracket { .. })));
    }

    #[test]
    fn rejects_non_positive_scan_step() {
        let coefficients = lbf(&[0.0, 1000.0]);
        let config = ElongationConfig {
            scan_step: 0.0,
            ..ElongationConfig::default()
        };

        let result = strain_at_load(
            Polynomial::new(&coefficients),
            Force::new::<pound_force>(250.0),
            &config,
        );
        assert!(matches!(result, Err(ElongationError::InvalidScanStep(_))));
    }

    #[test]
    fn clamps_to_bracket_ends() {
        let coefficients = lbf(&[0.0, 1000.0]);
        let polynomial = Polynomial::new(&coefficients);
        let config = ElongationConfig::default();

        let at_lower = strain_at_load_within(
            polynomial,
            Force::new::<pound_force>(50.0),
            [0.001, 0.002],
            &config,
        )
        .expect("clamped");
        assert_eq!(at_lower, 0.001);

        let at_upper = strain_at_load_within(
            polynomial,
            Force::new::<pound_force>(250.0),
            [0.001, 0.002],
            &config,
        )
        .expect("clamped");
        assert_eq!(at_upper, 0.002);
    }

    #[test]
    fn iteration_cap_is_an_error() {
        let coefficients = lbf(&[0.0, 1000.0]);
        let config = ElongationConfig {
            max_iters: 2,
            ..ElongationConfig::default()
        };

        let result = strain_at_load_within(
            Polynomial::new(&coefficients),
            Force::new::<pound_force>(123.456),
            [0.0, 0.01],
            &config,
        );
        assert!(matches!(result, Err(ElongationError::MaxIters { .. })));
    }
}
