//! Stress-strain behavior of a single cable component.
//!
//! The strain axis is split into four regions at three boundary points:
//!
//! | Region           | Strain range                  | Load                                   |
//! |------------------|-------------------------------|----------------------------------------|
//! | Compression      | `strain < x_unloaded`         | `E_c * (strain - x_unloaded)`          |
//! | Tension-linear   | `x_unloaded <= strain < x_start` | `E_t * (strain - x_unloaded)`       |
//! | Polynomial       | `x_start <= strain <= x_end`  | active polynomial at `strain * 100`    |
//! | Extrapolation    | `strain > x_end`              | `Load(x_end) + E_t * (strain - x_end)` |
//!
//! Point Start is where the polynomial carries the stretch load, Point End is
//! where it reaches its configured limit, and Point Unloaded is where the
//! tension-linear line through Point Start reaches zero load.

mod config;
mod error;
mod polynomial;
mod regions;
mod solve;
mod validate;

#[cfg(test)]
pub(crate) mod test_support;

pub use config::ElongationConfig;
pub use error::{ElongationError, Modulus};
pub use regions::{Point, Region};

use std::sync::OnceLock;

use uom::{
    ConstZero,
    si::{
        f64::{Force, ThermodynamicTemperature},
        ratio::ratio,
    },
};

use crate::{
    models::transmission_line::{CableComponent, PolynomialType},
    support::{constraint::StrictlyPositive, units::TemperatureDifference},
};

use polynomial::Polynomial;
use regions::Boundaries;
use solve::strain_at_load_within;

/// Elongation model for one cable component.
///
/// The model borrows its [`CableComponent`], so the record must outlive it.
/// It starts out empty and is configured with setters; every setter discards
/// the cached region boundaries, which are solved again on the next query.
///
/// Queries take `&self` and the boundary cache is a [`OnceLock`], so a
/// configured model can be shared across threads for read-only queries.
///
/// # Example
///
/// ```
/// use twine_sagtension::models::{
///     sagtension::ElongationModel,
///     transmission_line::{CableComponent, PolynomialType},
/// };
/// use twine_sagtension::support::units::per_degree_fahrenheit;
/// use uom::si::{f64::Force, force::pound_force};
///
/// let lbf = |v: f64| Force::new::<pound_force>(v);
/// let component = CableComponent {
///     thermal_expansion_coefficient: per_degree_fahrenheit(0.0000128),
///     creep_coefficients: [-395.7, 15564.0, -13687.0, 3991.6, 0.0].map(lbf).to_vec(),
///     load_strain_coefficients: [-881.1, 32185.4, -10172.8, -27325.7, 22283.0].map(lbf).to_vec(),
///     creep_limit: lbf(5473.4),
///     load_strain_limit: lbf(14711.1),
///     compression_modulus: lbf(108_960.0),
///     tension_modulus: lbf(4_648_960.0),
/// };
///
/// let mut model = ElongationModel::new();
/// model.set_component(&component);
/// model.set_polynomial_type(PolynomialType::LoadStrain);
/// model.set_stretch_load(lbf(5000.0));
///
/// let load = model.load(0.003)?;
/// let strain = model.strain(load)?;
/// assert!((strain - 0.003).abs() < 1e-9);
/// # Ok::<(), twine_sagtension::models::sagtension::ElongationError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ElongationModel<'a> {
    component: Option<&'a CableComponent>,
    stretch_load: Force,
    temperature: Option<ThermodynamicTemperature>,
    temperature_reference: Option<ThermodynamicTemperature>,
    polynomial_type: PolynomialType,
    config: ElongationConfig,
    boundaries: OnceLock<Boundaries>,
}

impl Default for ElongationModel<'_> {
    fn default() -> Self {
        Self {
            component: None,
            stretch_load: Force::ZERO,
            temperature: None,
            temperature_reference: None,
            polynomial_type: PolynomialType::default(),
            config: ElongationConfig::default(),
            boundaries: OnceLock::new(),
        }
    }
}

impl<'a> ElongationModel<'a> {
    /// Creates an unconfigured model.
    ///
    /// The stretch load starts at zero (a never-stretched cable) and the
    /// load-strain polynomial is active.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the assigned cable component, if any.
    #[must_use]
    pub fn component(&self) -> Option<&'a CableComponent> {
        self.component
    }

    /// Returns the highest load previously applied to the component.
    #[must_use]
    pub fn stretch_load(&self) -> Force {
        self.stretch_load
    }

    /// Returns the component temperature, if set.
    #[must_use]
    pub fn temperature(&self) -> Option<ThermodynamicTemperature> {
        self.temperature
    }

    /// Returns the temperature at which thermal strain is zero, if set.
    #[must_use]
    pub fn temperature_reference(&self) -> Option<ThermodynamicTemperature> {
        self.temperature_reference
    }

    /// Returns which polynomial governs the polynomial region.
    #[must_use]
    pub fn polynomial_type(&self) -> PolynomialType {
        self.polynomial_type
    }

    /// Returns the solver configuration.
    #[must_use]
    pub fn config(&self) -> &ElongationConfig {
        &self.config
    }

    /// Assigns the component whose properties the model reads.
    pub fn set_component(&mut self, component: &'a CableComponent) {
        self.component = Some(component);
        self.invalidate();
    }

    /// Sets the highest load previously applied to the component.
    ///
    /// This fixes where the tension-linear unload/reload line meets the
    /// polynomial.
    pub fn set_stretch_load(&mut self, stretch_load: Force) {
        self.stretch_load = stretch_load;
        self.invalidate();
    }

    pub fn set_temperature(&mut self, temperature: ThermodynamicTemperature) {
        self.temperature = Some(temperature);
        self.invalidate();
    }

    pub fn set_temperature_reference(&mut self, temperature: ThermodynamicTemperature) {
        self.temperature_reference = Some(temperature);
        self.invalidate();
    }

    pub fn set_polynomial_type(&mut self, polynomial_type: PolynomialType) {
        self.polynomial_type = polynomial_type;
        self.invalidate();
    }

    pub fn set_config(&mut self, config: ElongationConfig) {
        self.config = config;
        self.invalidate();
    }

    /// Returns the load at `strain`.
    ///
    /// # Errors
    ///
    /// Returns an [`ElongationError`] if no component is assigned or the
    /// region boundaries cannot be solved.
    pub fn load(&self, strain: f64) -> Result<Force, ElongationError> {
        let component = self.require_component()?;
        let boundaries = self.boundaries()?;
        let unloaded = boundaries.unloaded.strain;

        Ok(match boundaries.region_of_strain(strain) {
            Region::Compression => component.compression_modulus * (strain - unloaded),
            Region::TensionLinear => component.tension_modulus * (strain - unloaded),
            Region::Polynomial => self.polynomial(component).load(strain),
            Region::Extrapolation => {
                let end = boundaries.end;
                end.load + component.tension_modulus * (strain - end.strain)
            }
        })
    }

    /// Returns the strain at which the component carries `load`.
    ///
    /// This is the inverse of [`load`](Self::load).
    ///
    /// # Errors
    ///
    /// Returns an [`ElongationError`] if no component is assigned, the
    /// boundaries cannot be solved, the governing modulus is not positive, or
    /// the polynomial inversion does not converge.
    pub fn strain(&self, load: Force) -> Result<f64, ElongationError> {
        let component = self.require_component()?;
        let boundaries = self.boundaries()?;

        match boundaries.region_of_load(load) {
            Region::Compression => {
                let modulus = positive(component.compression_modulus, Modulus::Compression)?;
                Ok(boundaries.unloaded.strain + (load / modulus).get::<ratio>())
            }
            Region::TensionLinear => {
                let modulus = positive(component.tension_modulus, Modulus::Tension)?;
                Ok(boundaries.unloaded.strain + (load / modulus).get::<ratio>())
            }
            Region::Polynomial => strain_at_load_within(
                self.polynomial(component),
                load,
                [boundaries.start.strain, boundaries.end.strain],
                &self.config,
            ),
            Region::Extrapolation => {
                let modulus = positive(component.tension_modulus, Modulus::Tension)?;
                let end = boundaries.end;
                Ok(end.strain + ((load - end.load) / modulus).get::<ratio>())
            }
        }
    }

    /// Returns `dLoad/dStrain` at `strain`.
    ///
    /// # Errors
    ///
    /// Returns an [`ElongationError`] if no component is assigned or the
    /// region boundaries cannot be solved.
    pub fn slope(&self, strain: f64) -> Result<Force, ElongationError> {
        let component = self.require_component()?;

        Ok(match self.region(strain)? {
            Region::Compression => component.compression_modulus,
            Region::TensionLinear | Region::Extrapolation => component.tension_modulus,
            Region::Polynomial => self.polynomial(component).slope(strain),
        })
    }

    /// Returns the region containing `strain`.
    ///
    /// # Errors
    ///
    /// Returns an [`ElongationError`] if the region boundaries cannot be solved.
    pub fn region(&self, strain: f64) -> Result<Region, ElongationError> {
        Ok(self.boundaries()?.region_of_strain(strain))
    }

    /// Returns the strain caused by heating from the reference temperature.
    ///
    /// Thermal strain is independent of load. Callers add it to the
    /// mechanical strain to get the total elongation.
    ///
    /// # Errors
    ///
    /// Returns an [`ElongationError`] if no component is assigned or either
    /// temperature is unset.
    pub fn strain_thermal(&self) -> Result<f64, ElongationError> {
        let component = self.require_component()?;
        let (Some(temperature), Some(reference)) = (self.temperature, self.temperature_reference)
        else {
            return Err(ElongationError::MissingTemperature);
        };

        let delta = temperature.minus(reference);
        Ok((component.thermal_expansion_coefficient * delta).get::<ratio>())
    }

    /// Returns the point where the tension-linear region reaches zero load.
    ///
    /// # Errors
    ///
    /// Returns an [`ElongationError`] if the region boundaries cannot be solved.
    pub fn point_unloaded(&self) -> Result<Point, ElongationError> {
        Ok(self.boundaries()?.unloaded)
    }

    /// Returns the point where the active polynomial carries the stretch load.
    ///
    /// # Errors
    ///
    /// Returns an [`ElongationError`] if the region boundaries cannot be solved.
    pub fn point_polynomial_start(&self) -> Result<Point, ElongationError> {
        Ok(self.boundaries()?.start)
    }

    /// Returns the point where the active polynomial reaches its load limit.
    ///
    /// # Errors
    ///
    /// Returns an [`ElongationError`] if the region boundaries cannot be solved.
    pub fn point_polynomial_end(&self) -> Result<Point, ElongationError> {
        Ok(self.boundaries()?.end)
    }

    /// Returns Point Unloaded, Point Start and Point End, in that order.
    ///
    /// # Errors
    ///
    /// Returns an [`ElongationError`] if the region boundaries cannot be solved.
    pub fn points_regions(&self) -> Result<[Point; 3], ElongationError> {
        Ok(self.boundaries()?.points())
    }

    fn require_component(&self) -> Result<&'a CableComponent, ElongationError> {
        self.component.ok_or(ElongationError::MissingComponent)
    }

    fn polynomial(&self, component: &'a CableComponent) -> Polynomial<'a> {
        Polynomial::new(component.coefficients(self.polynomial_type))
    }

    /// Returns the cached boundaries, solving them on first use.
    fn boundaries(&self) -> Result<&Boundaries, ElongationError> {
        if let Some(boundaries) = self.boundaries.get() {
            return Ok(boundaries);
        }

        let component = self.require_component()?;
        let boundaries = Boundaries::solve(
            component,
            self.polynomial_type,
            self.stretch_load,
            &self.config,
        )?;

        tracing::debug!(
            polynomial = ?self.polynomial_type,
            unloaded = boundaries.unloaded.strain,
            start = boundaries.start.strain,
            end = boundaries.end.strain,
            "solved elongation region boundaries"
        );

        Ok(self.boundaries.get_or_init(|| boundaries))
    }

    fn invalidate(&mut self) {
        self.boundaries = OnceLock::new();
    }
}

fn positive(modulus: Force, which: Modulus) -> Result<Force, ElongationError> {
    StrictlyPositive::new(modulus)
        .map(|modulus| modulus.into_inner())
        .map_err(|_| ElongationError::ZeroModulus(which))
}
