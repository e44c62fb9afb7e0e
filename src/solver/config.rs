//! Flux sweep configuration.

use log::trace;

use crate::equations::IdealGas;
use crate::error::{FluxError, Result};
use crate::reconstruction::ReconstructionMethod;

/// Parameters of a flux sweep.
///
/// Passed explicitly to every sweep; nothing is read from global state.
///
/// # Example
/// ```
/// use grmhd_flux::reconstruction::ReconstructionMethod;
/// use grmhd_flux::solver::FluxConfig;
///
/// let config = FluxConfig::from_params("monocentral", 4.0 / 3.0).unwrap();
/// assert_eq!(config.reconstruction, ReconstructionMethod::MonotonizedCentral);
/// assert_eq!(config.required_ghost_zones(), 2);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FluxConfig {
    /// Reconstruction scheme for the primitive variables
    pub reconstruction: ReconstructionMethod,
    /// Adiabatic index Γ of the ideal-gas equation of state
    pub gamma: f64,
}

impl Default for FluxConfig {
    fn default() -> Self {
        Self {
            reconstruction: ReconstructionMethod::Godunov,
            gamma: 5.0 / 3.0,
        }
    }
}

impl FluxConfig {
    /// Create a configuration with the given scheme and Γ, without validating.
    pub fn new(reconstruction: ReconstructionMethod, gamma: f64) -> Self {
        Self {
            reconstruction,
            gamma,
        }
    }

    /// Build from string-valued parameters and validate.
    pub fn from_params(reconstruction: &str, gamma: f64) -> Result<Self> {
        let config = Self::new(reconstruction.parse()?, gamma);
        config.validate()?;
        trace!("Resolved flux configuration: {config:?}");
        Ok(config)
    }

    /// Set the reconstruction scheme.
    pub fn with_reconstruction(mut self, reconstruction: ReconstructionMethod) -> Self {
        self.reconstruction = reconstruction;
        self
    }

    /// Set the adiabatic index.
    pub fn with_gamma(mut self, gamma: f64) -> Self {
        self.gamma = gamma;
        self
    }

    /// Reject Γ ≤ 1 or non-finite Γ.
    pub fn validate(&self) -> Result<()> {
        IdealGas::try_new(self.gamma).map(|_| ())
    }

    /// Ideal-gas equation of state for this configuration.
    pub fn eos(&self) -> Result<IdealGas> {
        IdealGas::try_new(self.gamma)
    }

    /// Ghost zones needed along every swept direction.
    pub fn required_ghost_zones(&self) -> usize {
        self.reconstruction.required_ghost_zones()
    }
}
