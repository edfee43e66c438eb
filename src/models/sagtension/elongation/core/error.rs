use thiserror::Error;
use twine_solvers::equation::bisection;
use uom::si::f64::Force;

use crate::support::constraint::ConstraintError;

/// Identifies one of a component's elastic moduli.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modulus {
    Compression,
    Tension,
}

/// Errors that can occur while evaluating an elongation model.
///
/// Invalid component data is not an error here; it is reported by
/// [`ElongationModel::validate`](super::ElongationModel::validate).
/// These errors mean a query could not produce a number at all.
#[derive(Debug, Error)]
pub enum ElongationError {
    /// No cable component has been assigned to the model.
    #[error("no cable component assigned")]
    MissingComponent,

    /// The temperature or reference temperature has not been set.
    #[error("temperature and reference temperature must both be set")]
    MissingTemperature,

    /// A linear region cannot be inverted because its modulus is not positive.
    #[error("{0:?} modulus must be strictly positive")]
    ZeroModulus(Modulus),

    /// The solver configuration cannot be used.
    #[error("invalid scan step: {0}")]
    InvalidScanStep(#[source] ConstraintError),

    /// The polynomial never reaches the target load within the scanned strains.
    #[error("polynomial does not reach {target:?} below strain {max_strain}")]
    NoBracket {
        /// Load that was searched for.
        target: Force,

        /// Largest strain scanned.
        max_strain: f64,
    },

    /// The bisection solver encountered an error.
    #[error("bisection solver error")]
    Bisection(#[from] bisection::Error),

    /// The solver reached the iteration limit without converging.
    #[error("solver hit iteration limit: residual={residual:?}")]
    MaxIters {
        /// Best load residual achieved.
        residual: Force,

        /// Iteration count performed by the solver.
        iters: usize,
    },
}
