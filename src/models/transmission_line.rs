//! Transmission-line records.
//!
//! These records are owned by the caller and only read by the models in
//! [`sagtension`](crate::models::sagtension). Each record can check its own
//! fields with a `validate(include_warnings)` method returning a
//! [`ValidationReport`](crate::support::validation::ValidationReport).

mod cable;
mod cable_component;
mod cable_constraint;
mod weather_load_case;

pub use cable::Cable;
pub use cable_component::{CableComponent, PolynomialType};
pub use cable_constraint::CableConstraint;
pub use weather_load_case::WeatherLoadCase;
