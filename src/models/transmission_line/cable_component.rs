use uom::si::f64::Force;

use crate::support::units::ThermalExpansionCoefficient;

/// Selects which empirical polynomial governs a component's nonlinear region.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PolynomialType {
    /// Long-term creep curve.
    Creep,
    /// Short-term load-strain (stress-strain) curve.
    #[default]
    LoadStrain,
}

/// Mechanical properties of one cable component (the core or the shell).
///
/// Polynomial coefficients are loads: coefficient `i` multiplies `x^i`, where
/// `x` is the strain in percent (`strain * 100`). A usable component has
/// exactly five coefficients per polynomial, which
/// [`ElongationModel::validate`] checks.
///
/// Moduli are loads per unit strain, i.e. the elastic modulus already
/// multiplied by the component's area.
///
/// [`ElongationModel::validate`]: crate::models::sagtension::ElongationModel::validate
#[derive(Debug, Clone, PartialEq)]
pub struct CableComponent {
    /// Linear thermal expansion coefficient.
    pub thermal_expansion_coefficient: ThermalExpansionCoefficient,

    /// Creep polynomial coefficients, lowest order first.
    pub creep_coefficients: Vec<Force>,

    /// Load-strain polynomial coefficients, lowest order first.
    pub load_strain_coefficients: Vec<Force>,

    /// Highest load for which the creep polynomial is valid.
    pub creep_limit: Force,

    /// Highest load for which the load-strain polynomial is valid.
    pub load_strain_limit: Force,

    /// Load per unit strain under compression.
    pub compression_modulus: Force,

    /// Load per unit strain under elastic tension.
    pub tension_modulus: Force,
}

impl CableComponent {
    /// Returns the coefficients of the selected polynomial.
    #[must_use]
    pub fn coefficients(&self, polynomial: PolynomialType) -> &[Force] {
        match polynomial {
            PolynomialType::Creep => &self.creep_coefficients,
            PolynomialType::LoadStrain => &self.load_strain_coefficients,
        }
    }

    /// Returns the load limit of the selected polynomial.
    #[must_use]
    pub fn limit(&self, polynomial: PolynomialType) -> Force {
        match polynomial {
            PolynomialType::Creep => self.creep_limit,
            PolynomialType::LoadStrain => self.load_strain_limit,
        }
    }
}
