//! Sag-tension cable models.
//!
//! [`ElongationModel`] describes how one cable component stretches under load
//! and temperature. [`SagTensionCable`] binds a [`Cable`] record and hands out
//! elongation models for its core and shell.
//!
//! [`Cable`]: crate::models::transmission_line::Cable

pub mod cable;
pub mod elongation;

pub use cable::SagTensionCable;
pub use elongation::{
    ElongationConfig, ElongationError, ElongationModel, LoadModel, Modulus, Point, Region,
    StrainModel,
};
