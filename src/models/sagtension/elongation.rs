//! Cable component elongation models.
//!
//! [`ElongationModel`] holds a component's configuration and answers queries
//! directly. [`LoadModel`] and [`StrainModel`] expose its two directions as
//! [`twine_core::Model`]s so they can be composed with solvers and observers.
//! The computational core is in the internal [`core`] module.

pub(crate) mod core;

pub use self::core::{ElongationConfig, ElongationError, ElongationModel, Modulus, Point, Region};

use twine_core::Model;
use uom::si::f64::Force;

/// Load on a component as a model of its strain.
#[derive(Debug, Clone, Copy)]
pub struct LoadModel<'m, 'a> {
    elongation: &'m ElongationModel<'a>,
}

impl Model for LoadModel<'_, '_> {
    type Input = f64;
    type Output = Force;
    type Error = ElongationError;

    fn call(&self, strain: &f64) -> Result<Force, ElongationError> {
        self.elongation.load(*strain)
    }
}

/// Strain of a component as a model of its load.
#[derive(Debug, Clone, Copy)]
pub struct StrainModel<'m, 'a> {
    elongation: &'m ElongationModel<'a>,
}

impl Model for StrainModel<'_, '_> {
    type Input = Force;
    type Output = f64;
    type Error = ElongationError;

    fn call(&self, load: &Force) -> Result<f64, ElongationError> {
        self.elongation.strain(*load)
    }
}

impl<'a> ElongationModel<'a> {
    /// Borrows this model as a strain-to-load [`Model`].
    #[must_use]
    pub fn load_model(&self) -> LoadModel<'_, 'a> {
        LoadModel { elongation: self }
    }

    /// Borrows this model as a load-to-strain [`Model`].
    #[must_use]
    pub fn strain_model(&self) -> StrainModel<'_, 'a> {
        StrainModel { elongation: self }
    }
}
