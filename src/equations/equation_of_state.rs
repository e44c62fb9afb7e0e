//! Equation of state closing the GRMHD system.
//!
//! The flux kernel needs the pressure, the sound speed and the specific
//! enthalpy as functions of rest-mass density ρ and specific internal
//! energy ε. Units are geometric (c = 1), so c_s² is dimensionless and
//! must stay below one for a causal fluid.
//!
//! # References
//!
//! - Rezzolla & Zanotti (2013): Relativistic Hydrodynamics, §2.4.
//! - Font (2008): Numerical hydrodynamics and magnetohydrodynamics in
//!   general relativity, Living Rev. Relativ. 11, 7.

use crate::error::{FluxError, Result};

/// Thermodynamic closure p(ρ, ε).
pub trait EquationOfState: Send + Sync {
    /// Pressure p(ρ, ε).
    fn pressure(&self, rho: f64, eps: f64) -> f64;

    /// Squared sound speed c_s²(ρ, ε).
    fn sound_speed_squared(&self, rho: f64, eps: f64) -> f64;

    /// Specific enthalpy h = 1 + ε + p/ρ.
    #[inline]
    fn enthalpy(&self, rho: f64, eps: f64) -> f64 {
        1.0 + eps + self.pressure(rho, eps) / rho
    }

    /// Human-readable name for logging.
    fn name(&self) -> &'static str;
}

/// Ideal gas (Γ-law): p = (Γ − 1) ρ ε.
///
/// # Example
/// ```
/// use grmhd_flux::equations::{EquationOfState, IdealGas};
///
/// let eos = IdealGas::new(5.0 / 3.0);
/// let eps = eos.specific_internal_energy(1.0, 1.0);
/// assert!((eps - 1.5).abs() < 1e-12);
/// assert!((eos.pressure(1.0, eps) - 1.0).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IdealGas {
    /// Adiabatic index Γ
    pub gamma: f64,
}

impl IdealGas {
    /// Create an ideal gas without validating Γ.
    pub const fn new(gamma: f64) -> Self {
        Self { gamma }
    }

    /// Create an ideal gas, rejecting Γ ≤ 1 and non-finite values.
    pub fn try_new(gamma: f64) -> Result<Self> {
        if gamma.is_finite() && gamma > 1.0 {
            Ok(Self { gamma })
        } else {
            Err(FluxError::InvalidAdiabaticIndex(gamma))
        }
    }

    /// ε such that p(ρ, ε) = `press`.
    pub fn specific_internal_energy(&self, rho: f64, press: f64) -> f64 {
        press / (rho * (self.gamma - 1.0))
    }
}

impl Default for IdealGas {
    fn default() -> Self {
        Self::new(5.0 / 3.0)
    }
}

impl EquationOfState for IdealGas {
    #[inline(always)]
    fn pressure(&self, rho: f64, eps: f64) -> f64 {
        eps * rho * (self.gamma - 1.0)
    }

    /// c_s² = (Γ − 1) ε / (ε + 1/Γ), independent of ρ.
    #[inline(always)]
    fn sound_speed_squared(&self, _rho: f64, eps: f64) -> f64 {
        (self.gamma - 1.0) * eps / (eps + 1.0 / self.gamma)
    }

    fn name(&self) -> &'static str {
        "ideal-gas"
    }
}
