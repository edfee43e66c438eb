use uom::{ConstZero, si::f64::Force};

use crate::{
    models::transmission_line::CableComponent,
    support::{constraint::NonNegative, units::per_degree_fahrenheit, validation::ValidationReport},
};

use super::{
    ElongationModel,
    polynomial::{COEFFICIENT_COUNT, Polynomial},
};

const TITLE: &str = "SAG TENSION CABLE COMPONENT";

/// Magnitude bound on the thermal expansion coefficient, per °F.
const THERMAL_COEFFICIENT_BOUND_F: f64 = 0.005;

impl ElongationModel<'_> {
    /// Checks that the model's configuration can be evaluated.
    ///
    /// Errors are reported for a missing component, a thermal expansion
    /// coefficient outside of ±0.005 /°F, polynomials without exactly five
    /// coefficients, negative polynomial limits, negative moduli, and a
    /// negative stretch load.
    ///
    /// With `include_warnings`, a structurally valid model is also checked for
    /// a polynomial region whose slope goes negative. That only adds warnings
    /// and never makes the report invalid.
    #[must_use]
    pub fn validate(&self, include_warnings: bool) -> ValidationReport {
        let mut report = ValidationReport::new();

        let Some(component) = self.component else {
            report.error(TITLE, "Invalid base component");
            return report;
        };

        let bound = per_degree_fahrenheit(THERMAL_COEFFICIENT_BOUND_F);
        let alpha = component.thermal_expansion_coefficient;
        if alpha.is_nan() || alpha <= -bound || bound <= alpha {
            report.error(TITLE, "Invalid thermal expansion coefficient");
        }

        if component.creep_coefficients.len() != COEFFICIENT_COUNT {
            report.error(TITLE, "Invalid creep coefficients");
        }

        if component.load_strain_coefficients.len() != COEFFICIENT_COUNT {
            report.error(TITLE, "Invalid load-strain coefficients");
        }

        if NonNegative::new(component.creep_limit).is_err() {
            report.error(TITLE, "Invalid creep polynomial limit");
        }

        if NonNegative::new(component.load_strain_limit).is_err() {
            report.error(TITLE, "Invalid load-strain polynomial limit");
        }

        if NonNegative::new(component.compression_modulus).is_err() {
            report.error(TITLE, "Invalid compression modulus");
        }

        if NonNegative::new(component.tension_modulus).is_err() {
            report.error(TITLE, "Invalid tension modulus");
        }

        if NonNegative::new(self.stretch_load).is_err() {
            report.error(TITLE, "Invalid stretch load");
        }

        if include_warnings && report.is_valid() {
            self.warn_on_negative_slope(component, &mut report);
        }

        report
    }

    fn warn_on_negative_slope(&self, component: &CableComponent, report: &mut ValidationReport) {
        let boundaries = match self.boundaries() {
            Ok(boundaries) => boundaries,
            Err(error) => {
                report.warning(
                    TITLE,
                    format!("Unable to solve polynomial region boundaries: {error}"),
                );
                return;
            }
        };

        let (start, end) = (boundaries.start.strain, boundaries.end.strain);
        if start > end {
            return;
        }

        let polynomial = Polynomial::new(component.coefficients(self.polynomial_type));
        if polynomial.min_slope(start, end) < Force::ZERO {
            report.warning(TITLE, "Polynomial slope is negative in the polynomial region");
        }
    }
}
