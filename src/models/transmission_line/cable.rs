use uom::si::f64::{Force, Length, ThermodynamicTemperature};

use crate::support::{
    constraint::{NonNegative, StrictlyPositive},
    units::LinearForce,
    validation::ValidationReport,
};

use super::CableComponent;

const TITLE: &str = "CABLE";

/// A stranded cable made of a core and a shell component.
///
/// Component properties were measured at
/// [`temperature_properties_components`](Self::temperature_properties_components),
/// which serves as the reference temperature for thermal strain.
#[derive(Debug, Clone, PartialEq)]
pub struct Cable {
    pub name: String,
    pub diameter: Length,
    pub weight_unit: LinearForce,
    pub strength_rated: Force,
    pub temperature_properties_components: ThermodynamicTemperature,
    pub component_core: CableComponent,
    pub component_shell: CableComponent,
}

impl Cable {
    /// Checks the geometric and weight fields of the cable.
    ///
    /// Component properties are checked by the sag-tension models that use
    /// them, see [`SagTensionCable::validate`].
    ///
    /// [`SagTensionCable::validate`]: crate::models::sagtension::SagTensionCable::validate
    #[must_use]
    pub fn validate(&self, _include_warnings: bool) -> ValidationReport {
        let mut report = ValidationReport::new();

        if StrictlyPositive::new(self.diameter).is_err() {
            report.error(TITLE, "Invalid diameter");
        }

        if NonNegative::new(self.weight_unit).is_err() {
            report.error(TITLE, "Invalid unit weight");
        }

        report
    }
}
