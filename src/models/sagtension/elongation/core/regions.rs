//! Region boundaries of the elongation curve.

use uom::{
    ConstZero,
    si::{f64::Force, ratio::ratio},
};

use crate::{
    models::transmission_line::{CableComponent, PolynomialType},
    support::constraint::StrictlyPositive,
};

use super::{
    ElongationConfig, ElongationError, Modulus,
    polynomial::Polynomial,
    solve::strain_at_load,
};

/// A (strain, load) point on the elongation curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub strain: f64,
    pub load: Force,
}

/// The four regions of the elongation curve, in order of increasing strain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    /// Below [Point Unloaded](super::ElongationModel::point_unloaded), governed
    /// by the compression modulus.
    Compression,

    /// Elastic unload/reload line from Point Unloaded up to
    /// [Point Start](super::ElongationModel::point_polynomial_start), governed
    /// by the tension modulus.
    TensionLinear,

    /// The active polynomial, from Point Start through
    /// [Point End](super::ElongationModel::point_polynomial_end).
    Polynomial,

    /// Beyond Point End, a tension-modulus line continuing from it.
    Extrapolation,
}

/// Points separating the regions, derived from a model's configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Boundaries {
    pub(super) unloaded: Point,
    pub(super) start: Point,
    pub(super) end: Point,
}

impl Boundaries {
    /// Solves the boundary points for a component stretched to `stretch_load`.
    ///
    /// Point Start normally lies on the polynomial. If the stretch load is above
    /// the load at Point End, it lies on the extrapolation line instead and the
    /// polynomial region is empty.
    pub(super) fn solve(
        component: &CableComponent,
        polynomial_type: PolynomialType,
        stretch_load: Force,
        config: &ElongationConfig,
    ) -> Result<Self, ElongationError> {
        let polynomial = Polynomial::new(component.coefficients(polynomial_type));
        let tension = StrictlyPositive::new(component.tension_modulus)
            .map_err(|_| ElongationError::ZeroModulus(Modulus::Tension))?
            .into_inner();

        let end_strain = strain_at_load(polynomial, component.limit(polynomial_type), config)?;
        let end = Point {
            strain: end_strain,
            load: polynomial.load(end_strain),
        };

        let start_strain = if stretch_load <= end.load {
            strain_at_load(polynomial, stretch_load, config)?
        } else {
            end.strain + ((stretch_load - end.load) / tension).get::<ratio>()
        };
        let start = Point {
            strain: start_strain,
            load: stretch_load,
        };

        let unloaded = Point {
            strain: start.strain - (stretch_load / tension).get::<ratio>(),
            load: Force::ZERO,
        };

        Ok(Self {
            unloaded,
            start,
            end,
        })
    }

    /// Returns the region containing `strain`.
    pub(super) fn region_of_strain(&self, strain: f64) -> Region {
        if strain < self.unloaded.strain {
            Region::Compression
        } else if strain < self.start.strain {
            Region::TensionLinear
        } else if strain <= self.end.strain {
            Region::Polynomial
        } else {
            Region::Extrapolation
        }
    }

    /// Returns the region whose load range contains `load`.
    pub(super) fn region_of_load(&self, load: Force) -> Region {
        if load < self.unloaded.load {
            Region::Compression
        } else if load < self.start.load {
            Region::TensionLinear
        } else if load <= self.end.load {
            Region::Polynomial
        } else {
            Region::Extrapolation
        }
    }

    /// Returns Point Unloaded, Point Start and Point End, in that order.
    pub(super) fn points(&self) -> [Point; 3] {
        [self.unloaded, self.start, self.end]
    }
}
