//! Public models.
//!
//! # Organization
//!
//! - [`transmission_line`]: Plain records describing cables, weather cases and
//!   design constraints, with field-level validation.
//! - [`sagtension`]: Models that operate on those records for sag-tension
//!   calculations, starting with the cable component elongation model.
//!
//! # Model structure
//!
//! Each model lives in its own module and contains an internal `core` submodule
//! where the actual computation and domain logic lives. The
//! [`twine_core::Model`] implementations are thin adapters that delegate to the
//! core API.

pub mod sagtension;
pub mod transmission_line;
