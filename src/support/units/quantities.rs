use uom::{
    si::{
        ISQ, Quantity, SI,
        f64::{Ratio, TemperatureInterval},
        ratio::ratio,
        temperature_interval::{
            degree_celsius as delta_celsius, degree_fahrenheit as delta_fahrenheit,
        },
    },
    typenum::{N1, N2, P1, Z0},
};

/// Linear thermal expansion coefficient, 1/K in SI.
pub type ThermalExpansionCoefficient = Quantity<ISQ<Z0, Z0, Z0, Z0, N1, Z0, Z0>, SI<f64>, f64>;

/// Force per unit length, N/m in SI.
///
/// Used for the unit weight of a cable.
pub type LinearForce = Quantity<ISQ<Z0, P1, N2, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Creates a thermal expansion coefficient from a value given per degree Fahrenheit.
#[must_use]
pub fn per_degree_fahrenheit(value: f64) -> ThermalExpansionCoefficient {
    Ratio::new::<ratio>(value) / TemperatureInterval::new::<delta_fahrenheit>(1.0)
}

/// Creates a thermal expansion coefficient from a value given per degree Celsius.
#[must_use]
pub fn per_degree_celsius(value: f64) -> ThermalExpansionCoefficient {
    Ratio::new::<ratio>(value) / TemperatureInterval::new::<delta_celsius>(1.0)
}
