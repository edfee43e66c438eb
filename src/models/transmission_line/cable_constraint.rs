use uom::si::{f64::Force, force::pound_force};

use crate::support::{constraint::NonNegative, validation::ValidationReport};

use super::WeatherLoadCase;

const TITLE: &str = "CABLE CONSTRAINT";

/// Range of limits, in lbf, outside of which a limit is probably a unit mistake.
const TYPICAL_LIMIT_LBF: [f64; 2] = [100.0, 100_000.0];

/// A tension limit that a cable must satisfy under a weather case.
#[derive(Debug, Clone, PartialEq)]
pub struct CableConstraint {
    pub case_weather: WeatherLoadCase,
    pub limit: Force,
}

impl CableConstraint {
    /// Validates the weather case and the limit.
    ///
    /// With `include_warnings`, a limit outside of 100 to 100,000 lbf is
    /// reported as a warning.
    #[must_use]
    pub fn validate(&self, include_warnings: bool) -> ValidationReport {
        let mut report = ValidationReport::new();

        report.extend(self.case_weather.validate(include_warnings));

        if NonNegative::new(self.limit).is_err() {
            report.error(TITLE, "Invalid limit");
        } else if include_warnings {
            let [low, high] = TYPICAL_LIMIT_LBF;
            let limit = self.limit.get::<pound_force>();
            if !(low..=high).contains(&limit) {
                report.warning(TITLE, "Limit is outside of the typical range");
            }
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{
        f64::{Length, MassDensity, Pressure, ThermodynamicTemperature},
        length::inch,
        mass_density::pound_per_cubic_foot,
        pressure::pound_force_per_square_foot,
        thermodynamic_temperature::degree_fahrenheit,
    };

    use crate::support::validation::Severity;

    fn constraint(limit_lbf: f64) -> CableConstraint {
        CableConstraint {
            case_weather: WeatherLoadCase {
                description: "NESC heavy".to_owned(),
                density_ice: MassDensity::new::<pound_per_cubic_foot>(57.3),
                pressure_wind: Pressure::new::<pound_force_per_square_foot>(4.0),
                temperature_cable: ThermodynamicTemperature::new::<degree_fahrenheit>(0.0),
                thickness_ice: Length::new::<inch>(0.5),
            },
            limit: Force::new::<pound_force>(limit_lbf),
        }
    }

    #[test]
    fn typical_limit_is_valid() {
        let report = constraint(5_000.0).validate(true);
        assert!(report.is_valid());
        assert!(report.messages().is_empty());
    }

    #[test]
    fn negative_limit_is_an_error() {
        let report = constraint(-1.0).validate(true);
        assert!(!report.is_valid());
        assert_eq!(report.messages().len(), 1);
        assert_eq!(report.messages()[0].description, "Invalid limit");
    }

    #[test]
    fn unusual_limit_only_warns() {
        let quiet = constraint(50.0).validate(false);
        assert!(quiet.messages().is_empty());

        for limit in [50.0, 150_000.0] {
            let report = constraint(limit).validate(true);
            assert!(report.is_valid());
            assert_eq!(report.messages().len(), 1);
            assert_eq!(report.messages()[0].severity, Severity::Warning);
        }
    }

    #[test]
    fn weather_messages_come_first() {
        let mut constraint = constraint(-1.0);
        constraint.case_weather.thickness_ice = Length::new::<inch>(-1.0);

        let report = constraint.validate(false);
        let titles: Vec<_> = report.messages().iter().map(|m| m.title.as_str()).collect();
        assert_eq!(titles, ["WEATHER LOAD CASE", "CABLE CONSTRAINT"]);
    }
}
