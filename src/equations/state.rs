//! Primitive and conserved GRMHD state vectors.
//!
//! Primitive variables (ρ, vⁱ, ε, Bⁱ) are what the reconstruction operates
//! on. Conserved variables are densitized by √γ:
//!
//! - D̃ = √γ ρ W
//! - S̃ᵢ momentum density
//! - τ̃ energy density minus rest mass
//! - B̃ⁱ = √γ Bⁱ

use std::ops::{Add, Mul, Sub};

use crate::error::{FluxError, Result};
use crate::metric::Metric3;

/// Primitive fluid and magnetic variables at one point.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PrimitiveState {
    /// Rest-mass density ρ
    pub rho: f64,
    /// Eulerian 3-velocity vⁱ
    pub vel: [f64; 3],
    /// Specific internal energy ε
    pub eps: f64,
    /// Eulerian magnetic field Bⁱ
    pub bvec: [f64; 3],
}

impl PrimitiveState {
    /// Create a new primitive state.
    #[inline(always)]
    pub const fn new(rho: f64, vel: [f64; 3], eps: f64, bvec: [f64; 3]) -> Self {
        Self {
            rho,
            vel,
            eps,
            bvec,
        }
    }

    /// Fluid at rest without magnetic field.
    pub const fn at_rest(rho: f64, eps: f64) -> Self {
        Self::new(rho, [0.0; 3], eps, [0.0; 3])
    }

    /// Replace the velocity.
    pub const fn with_velocity(mut self, vel: [f64; 3]) -> Self {
        self.vel = vel;
        self
    }

    /// Replace the magnetic field.
    pub const fn with_magnetic_field(mut self, bvec: [f64; 3]) -> Self {
        self.bvec = bvec;
        self
    }

    /// Check that the state is admissible in the metric `gamma`.
    ///
    /// The flux kernel does not call this: it lets NaN propagate from
    /// unphysical states. Use it where a hard failure is preferable.
    pub fn validate(&self, gamma: &Metric3) -> Result<()> {
        let mut values = [self.rho, self.eps]
            .into_iter()
            .chain(self.vel)
            .chain(self.bvec);
        if values.any(|x| !x.is_finite()) {
            return Err(FluxError::UnphysicalState(format!(
                "non-finite component in {self:?}"
            )));
        }
        if self.rho <= 0.0 {
            return Err(FluxError::UnphysicalState(format!(
                "non-positive density rho = {}",
                self.rho
            )));
        }
        if self.eps < 0.0 {
            return Err(FluxError::UnphysicalState(format!(
                "negative specific internal energy eps = {}",
                self.eps
            )));
        }
        let v2 = gamma.norm_squared(self.vel);
        if v2 >= 1.0 {
            return Err(FluxError::UnphysicalState(format!(
                "superluminal velocity v^2 = {v2}"
            )));
        }
        Ok(())
    }
}

/// Densitized conserved variables (D̃, S̃ᵢ, τ̃, B̃ⁱ).
///
/// Also used for fluxes of these variables, which have the same layout.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ConservedState {
    /// Conserved density D̃
    pub dens: f64,
    /// Momentum S̃ᵢ (covariant)
    pub mom: [f64; 3],
    /// Energy τ̃
    pub tau: f64,
    /// Densitized magnetic field B̃ⁱ
    pub btilde: [f64; 3],
}

impl ConservedState {
    /// Number of conserved variables.
    pub const N_VARS: usize = 8;

    /// Variable names in [`ConservedState::to_array`] order.
    pub const NAMES: [&'static str; 8] =
        ["dens", "momx", "momy", "momz", "tau", "Bx", "By", "Bz"];

    /// Create a new conserved state.
    #[inline(always)]
    pub const fn new(dens: f64, mom: [f64; 3], tau: f64, btilde: [f64; 3]) -> Self {
        Self {
            dens,
            mom,
            tau,
            btilde,
        }
    }

    /// Create a zero state.
    #[inline(always)]
    pub const fn zero() -> Self {
        Self::new(0.0, [0.0; 3], 0.0, [0.0; 3])
    }

    /// Convert to array [dens, momx, momy, momz, tau, Bx, By, Bz].
    #[inline(always)]
    pub const fn to_array(&self) -> [f64; 8] {
        [
            self.dens,
            self.mom[0],
            self.mom[1],
            self.mom[2],
            self.tau,
            self.btilde[0],
            self.btilde[1],
            self.btilde[2],
        ]
    }

    /// Create from array [dens, momx, momy, momz, tau, Bx, By, Bz].
    #[inline(always)]
    pub const fn from_array(a: [f64; 8]) -> Self {
        Self::new(a[0], [a[1], a[2], a[3]], a[4], [a[5], a[6], a[7]])
    }

    /// Whether every component is finite.
    pub fn is_finite(&self) -> bool {
        self.to_array().iter().all(|x| x.is_finite())
    }

    /// Maximum absolute component.
    pub fn max_abs(&self) -> f64 {
        self.to_array().iter().fold(0.0_f64, |acc, x| acc.max(x.abs()))
    }

    fn zip_with(self, other: Self, f: impl Fn(f64, f64) -> f64) -> Self {
        let a = self.to_array();
        let b = other.to_array();
        Self::from_array(std::array::from_fn(|n| f(a[n], b[n])))
    }
}

impl Add for ConservedState {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        self.zip_with(other, |a, b| a + b)
    }
}

impl Sub for ConservedState {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        self.zip_with(other, |a, b| a - b)
    }
}

impl Mul<f64> for ConservedState {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        Self::from_array(self.to_array().map(|x| x * scalar))
    }
}

impl Mul<ConservedState> for f64 {
    type Output = ConservedState;

    fn mul(self, state: ConservedState) -> ConservedState {
        state * self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_array_round_trip() {
        let u = ConservedState::new(1.0, [2.0, 3.0, 4.0], 5.0, [6.0, 7.0, 8.0]);
        assert_eq!(u.to_array(), [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
        assert_eq!(ConservedState::from_array(u.to_array()), u);
    }

    #[test]
    fn test_arithmetic() {
        let a = ConservedState::new(1.0, [1.0, 2.0, 3.0], 4.0, [0.5, 0.0, -0.5]);
        let b = ConservedState::new(2.0, [0.0, 1.0, 0.0], 1.0, [0.5, 1.0, 0.5]);

        let sum = a + b;
        assert_eq!(sum.dens, 3.0);
        assert_eq!(sum.btilde, [1.0, 1.0, 0.0]);

        let diff = a - b;
        assert_eq!(diff.mom, [1.0, 1.0, 3.0]);

        assert_eq!(2.0 * a, a * 2.0);
        assert_eq!((0.5 * (a + a)), a);
    }

    #[test]
    fn test_is_finite_and_max_abs() {
        let mut u = ConservedState::new(1.0, [-3.0, 0.0, 0.0], 2.0, [0.0; 3]);
        assert!(u.is_finite());
        assert_eq!(u.max_abs(), 3.0);

        u.tau = f64::NAN;
        assert!(!u.is_finite());
    }

    #[test]
    fn test_validate() {
        let g = Metric3::identity();
        assert!(PrimitiveState::at_rest(1.0, 1.5).validate(&g).is_ok());

        let vacuum = PrimitiveState::at_rest(0.0, 1.5);
        assert!(matches!(
            vacuum.validate(&g),
            Err(FluxError::UnphysicalState(_))
        ));

        let superluminal = PrimitiveState::at_rest(1.0, 1.5).with_velocity([0.8, 0.7, 0.0]);
        assert!(superluminal.validate(&g).is_err());

        // Same coordinate velocity is subluminal in a compressed metric
        let compressed = Metric3::diagonal(0.25, 0.25, 0.25);
        assert!(superluminal.validate(&compressed).is_ok());

        let nan = PrimitiveState::at_rest(1.0, f64::NAN);
        assert!(nan.validate(&g).is_err());
    }
}
