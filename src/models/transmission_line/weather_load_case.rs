use uom::si::{
    f64::{Length, MassDensity, Pressure, ThermodynamicTemperature},
    thermodynamic_temperature::degree_fahrenheit,
};

use crate::support::{constraint::NonNegative, validation::ValidationReport};

const TITLE: &str = "WEATHER LOAD CASE";

/// Lowest cable temperature accepted by [`WeatherLoadCase::validate`], in °F.
const MIN_CABLE_TEMPERATURE_F: f64 = -50.0;

/// Ice, wind and temperature conditions applied to a cable.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherLoadCase {
    pub description: String,
    pub density_ice: MassDensity,
    pub pressure_wind: Pressure,
    pub temperature_cable: ThermodynamicTemperature,
    pub thickness_ice: Length,
}

impl WeatherLoadCase {
    /// Checks each field against its physical bounds.
    ///
    /// There are no warning-level checks, so `include_warnings` is accepted
    /// only for symmetry with the other validators.
    #[must_use]
    pub fn validate(&self, _include_warnings: bool) -> ValidationReport {
        let mut report = ValidationReport::new();

        if NonNegative::new(self.density_ice).is_err() {
            report.error(TITLE, "Invalid ice density");
        }

        if NonNegative::new(self.pressure_wind).is_err() {
            report.error(TITLE, "Invalid wind pressure");
        }

        if self.temperature_cable.get::<degree_fahrenheit>() < MIN_CABLE_TEMPERATURE_F {
            report.error(TITLE, "Invalid cable temperature");
        }

        if NonNegative::new(self.thickness_ice).is_err() {
            report.error(TITLE, "Invalid ice thickness");
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{
        length::inch, mass_density::pound_per_cubic_foot, pressure::pound_force_per_square_foot,
    };

    fn heavy_ice() -> WeatherLoadCase {
        WeatherLoadCase {
            description: "NESC heavy".to_owned(),
            density_ice: MassDensity::new::<pound_per_cubic_foot>(57.3),
            pressure_wind: Pressure::new::<pound_force_per_square_foot>(4.0),
            temperature_cable: ThermodynamicTemperature::new::<degree_fahrenheit>(0.0),
            thickness_ice: Length::new::<inch>(0.5),
        }
    }

    #[test]
    fn heavy_ice_is_valid() {
        let report = heavy_ice().validate(true);
        assert!(report.is_valid());
        assert!(report.messages().is_empty());
    }

    #[test]
    fn reports_every_bad_field_in_order() {
        let case = WeatherLoadCase {
            density_ice: MassDensity::new::<pound_per_cubic_foot>(-1.0),
            pressure_wind: Pressure::new::<pound_force_per_square_foot>(-4.0),
            temperature_cable: ThermodynamicTemperature::new::<degree_fahrenheit>(-60.0),
            thickness_ice: Length::new::<inch>(-0.5),
            ..heavy_ice()
        };

        let report = case.validate(false);
        assert!(!report.is_valid());

        let descriptions: Vec<_> = report
            .messages()
            .iter()
            .map(|message| message.description.as_str())
            .collect();
        assert_eq!(
            descriptions,
            [
                "Invalid ice density",
                "Invalid wind pressure",
                "Invalid cable temperature",
                "Invalid ice thickness",
            ]
        );
        assert!(report.messages().iter().all(|m| m.title == TITLE));
    }

    #[test]
    fn cable_temperature_boundary() {
        let case = WeatherLoadCase {
            temperature_cable: ThermodynamicTemperature::new::<degree_fahrenheit>(-50.0),
            ..heavy_ice()
        };
        assert!(case.validate(false).is_valid());
    }
}
