//! A cable prepared for sag-tension calculations.

use uom::si::{
    f64::{Force, Length, ThermodynamicTemperature},
    thermodynamic_temperature::degree_fahrenheit,
};

use crate::{
    models::transmission_line::{Cable, CableComponent},
    support::{constraint::NonNegative, validation::ValidationReport},
};

use super::ElongationModel;

const TITLE: &str = "SAG TENSION CABLE";

/// Sag-tension view of a [`Cable`] record.
///
/// Each component is exposed as an [`ElongationModel`] whose reference
/// temperature is the temperature the component properties were measured at.
#[derive(Debug, Clone, Copy)]
pub struct SagTensionCable<'a> {
    cable: &'a Cable,
}

impl<'a> SagTensionCable<'a> {
    #[must_use]
    pub fn new(cable: &'a Cable) -> Self {
        Self { cable }
    }

    #[must_use]
    pub fn cable(&self) -> &'a Cable {
        self.cable
    }

    #[must_use]
    pub fn diameter(&self) -> Length {
        self.cable.diameter
    }

    #[must_use]
    pub fn strength_rated(&self) -> Force {
        self.cable.strength_rated
    }

    #[must_use]
    pub fn temperature_properties_components(&self) -> ThermodynamicTemperature {
        self.cable.temperature_properties_components
    }

    /// Returns an elongation model of the core component.
    #[must_use]
    pub fn core(&self) -> ElongationModel<'a> {
        self.component(&self.cable.component_core)
    }

    /// Returns an elongation model of the shell component.
    #[must_use]
    pub fn shell(&self) -> ElongationModel<'a> {
        self.component(&self.cable.component_shell)
    }

    /// Validates the cable record and both of its components.
    ///
    /// Messages from the cable come first, then the core, then the shell.
    #[must_use]
    pub fn validate(&self, include_warnings: bool) -> ValidationReport {
        let mut report = ValidationReport::new();
        report.extend(self.cable.validate(include_warnings));

        if NonNegative::new(self.cable.strength_rated).is_err() {
            report.error(TITLE, "Invalid rated strength");
        }

        let temperature = self
            .cable
            .temperature_properties_components
            .get::<degree_fahrenheit>();
        if temperature.is_nan() || temperature < 0.0 {
            report.error(TITLE, "Invalid component properties temperature");
        }

        report.extend(self.core().validate(include_warnings));
        report.extend(self.shell().validate(include_warnings));

        report
    }

    fn component(&self, component: &'a CableComponent) -> ElongationModel<'a> {
        let mut model = ElongationModel::new();
        model.set_component(component);
        model.set_temperature_reference(self.cable.temperature_properties_components);
        model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::length::{foot, inch};

    use crate::models::sagtension::elongation::core::test_support::{fahrenheit, lbf, shell};

    fn acsr() -> Cable {
        let mut core = shell();
        core.load_strain_limit = lbf(10_000.0);
        core.creep_limit = lbf(5_000.0);

        Cable {
            name: "ACSR 795 kcmil 26/7 DRAKE".to_owned(),
            diameter: Length::new::<inch>(1.108),
            weight_unit: lbf(1.094) / Length::new::<foot>(1.0),
            strength_rated: lbf(31_500.0),
            temperature_properties_components: fahrenheit(70.0),
            component_core: core,
            component_shell: shell(),
        }
    }

    #[test]
    fn components_share_the_reference_temperature() {
        let cable = acsr();
        let sagtension = SagTensionCable::new(&cable);

        for mut model in [sagtension.core(), sagtension.shell()] {
            assert_eq!(model.temperature_reference(), Some(fahrenheit(70.0)));

            model.set_temperature(fahrenheit(212.0));
            assert_relative_eq!(
                model.strain_thermal().expect("thermal"),
                0.001_817_6,
                epsilon = 1e-10
            );
        }
    }

    #[test]
    fn components_borrow_the_cable_record() {
        let cable = acsr();
        let sagtension = SagTensionCable::new(&cable);

        assert!(std::ptr::eq(
            sagtension.core().component().expect("core"),
            &cable.component_core
        ));
        assert!(std::ptr::eq(
            sagtension.shell().component().expect("shell"),
            &cable.component_shell
        ));
    }

    #[test]
    fn validate_reference_cable() {
        let cable = acsr();
        let report = SagTensionCable::new(&cable).validate(true);

        assert!(report.is_valid());
        assert!(report.messages().is_empty());
    }

    #[test]
    fn validate_folds_messages_in_order() {
        let mut cable = acsr();
        cable.diameter = Length::new::<inch>(0.0);
        cable.strength_rated = lbf(-1.0);
        cable.temperature_properties_components = fahrenheit(-10.0);
        cable.component_core.tension_modulus = lbf(-1.0);
        cable.component_shell.creep_limit = lbf(-1.0);

        let report = SagTensionCable::new(&cable).validate(false);
        assert!(!report.is_valid());

        let messages: Vec<_> = report
            .messages()
            .iter()
            .map(|message| (message.title.as_str(), message.description.as_str()))
            .collect();
        assert_eq!(
            messages,
            [
                ("CABLE", "Invalid diameter"),
                ("SAG TENSION CABLE", "Invalid rated strength"),
                ("SAG TENSION CABLE", "Invalid component properties temperature"),
                ("SAG TENSION CABLE COMPONENT", "Invalid tension modulus"),
                ("SAG TENSION CABLE COMPONENT", "Invalid creep polynomial limit"),
            ]
        );
    }
}
