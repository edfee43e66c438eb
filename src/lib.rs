//! # Twine Sag-Tension
//!
//! Cable elongation models for transmission-line sag-tension calculations,
//! built on [Twine](https://github.com/isentropic-dev/twine).
//!
//! ## Crate layout
//!
//! - [`models`]: Cable records and the models that operate on them.
//! - [`support`]: Supporting utilities used by models.
//!
//! ## Units
//!
//! Physical quantities are [`uom`] quantities, so a component may be described
//! in pounds and degrees Fahrenheit and queried in newtons and kelvin.
//! Strain is the one exception: it is a plain `f64` ratio
//! (change in length / original length).
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.

pub mod models;
pub mod support;
