use uom::si::{
    f64::{Force, ThermodynamicTemperature},
    force::pound_force,
    thermodynamic_temperature::degree_fahrenheit,
};

use crate::{
    models::transmission_line::{CableComponent, PolynomialType},
    support::units::per_degree_fahrenheit,
};

use super::ElongationModel;

/// Physical area of the reference shell, in.^2.
const AREA: f64 = 0.7264;

pub(crate) fn lbf(value: f64) -> Force {
    Force::new::<pound_force>(value)
}

pub(crate) fn fahrenheit(value: f64) -> ThermodynamicTemperature {
    ThermodynamicTemperature::new::<degree_fahrenheit>(value)
}

fn area_scaled(coefficients: [f64; 5]) -> Vec<Force> {
    coefficients.iter().map(|c| lbf(c * AREA)).collect()
}

/// Aluminum shell of a reference ACSR cable, polynomials scaled by its area.
pub(crate) fn shell() -> CableComponent {
    CableComponent {
        thermal_expansion_coefficient: per_degree_fahrenheit(0.000_012_8),
        creep_coefficients: area_scaled([-544.8, 21426.8, -18842.2, 5495.0, 0.0]),
        load_strain_coefficients: area_scaled([-1213.0, 44308.1, -14004.4, -37618.0, 30676.0]),
        creep_limit: lbf(7535.0 * AREA),
        load_strain_limit: lbf(20252.0 * AREA),
        compression_modulus: lbf(1500.0 * AREA * 100.0),
        tension_modulus: lbf(64000.0 * AREA * 100.0),
    }
}

/// A model of `component` stretched to 5000 lbf at the 70 °F reference.
pub(crate) fn stretched(component: &CableComponent) -> ElongationModel<'_> {
    let mut model = ElongationModel::new();
    model.set_component(component);
    model.set_stretch_load(lbf(5000.0));
    model.set_temperature(fahrenheit(70.0));
    model.set_temperature_reference(fahrenheit(70.0));
    model.set_polynomial_type(PolynomialType::LoadStrain);
    model
}
