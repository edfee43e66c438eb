use twine_solvers::equation::bisection;
use uom::si::{f64::Force, force::newton};

/// Solver configuration for the elongation model's polynomial inversions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElongationConfig {
    /// Maximum iteration count for each bisection solve.
    pub max_iters: usize,

    /// Absolute tolerance for the strain search variable.
    pub strain_tol: f64,

    /// Absolute tolerance for the load residual (polynomial load - target).
    pub load_tol: Force,

    /// Strain increment used to bracket a boundary point, scanning up from zero.
    pub scan_step: f64,

    /// Largest strain scanned when bracketing a boundary point.
    pub max_strain: f64,
}

impl Default for ElongationConfig {
    fn default() -> Self {
        Self {
            max_iters: 100,
            strain_tol: 1e-12,
            load_tol: Force::new::<newton>(1e-9),
            scan_step: 1e-4,
            max_strain: 0.1,
        }
    }
}

impl ElongationConfig {
    /// Converts this configuration into a bisection solver configuration.
    pub(super) fn bisection(&self) -> bisection::Config {
        bisection::Config {
            max_iters: self.max_iters,
            x_abs_tol: self.strain_tol,
            x_rel_tol: 0.0,
            residual_tol: self.load_tol.get::<newton>(),
        }
    }
}
