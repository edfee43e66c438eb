//! Extensions to [`uom`] for cable modeling.
//!
//! [`uom`] covers forces, lengths and temperatures directly. This module adds
//! the few quantities a cable record needs that [`uom`] doesn't name, plus a
//! way to take the difference of two absolute temperatures.
//!
//! ## Thermal strain
//!
//! A linear thermal expansion coefficient times a temperature interval is a
//! dimensionless strain:
//!
//! ```
//! use twine_sagtension::support::units::{TemperatureDifference, per_degree_fahrenheit};
//! use uom::si::{f64::ThermodynamicTemperature, ratio::ratio, thermodynamic_temperature::degree_fahrenheit};
//!
//! let alpha = per_degree_fahrenheit(0.0000128);
//! let hot = ThermodynamicTemperature::new::<degree_fahrenheit>(212.0);
//! let reference = ThermodynamicTemperature::new::<degree_fahrenheit>(70.0);
//!
//! let strain = (alpha * hot.minus(reference)).get::<ratio>();
//! assert!((strain - 0.0018176).abs() < 1e-12);
//! ```

mod quantities;
mod temperature_difference;

pub use quantities::{
    LinearForce, ThermalExpansionCoefficient, per_degree_celsius, per_degree_fahrenheit,
};
pub use temperature_difference::TemperatureDifference;
