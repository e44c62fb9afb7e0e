//! Magnetosonic characteristic speed estimates.
//!
//! The fast magnetosonic speeds along d are the roots of a quadratic
//! a₂λ² + a₁λ + a₀ = 0 built from the side state and the metric:
//!
//! ```text
//! a₀ = (b² + c_s²hρ)(β² − α²γ^{dd}) − (c_s² − 1) hρ (β − αv^d)² W²
//! a₁ = 2β(b² + c_s²hρ) − 2(c_s² − 1) hρ (β − αv^d) W²
//! a₂ = b² + hρ(c_s² + W² − c_s²W²)
//! ```
//!
//! with β = β^d. Roots are returned divided by the lapse. A negative
//! discriminant, which arises only from round-off or unphysical input, is
//! clamped to zero so both roots collapse to −a₁/(2a₂α).
//!
//! In flat space at rest the two roots are the special-relativistic sound
//! speeds (v ± c_s)/(1 ± v c_s).

use crate::equations::FaceSide;
use crate::metric::MetricGeometry;
use crate::types::{Direction, FacePair};

/// Coefficients of the characteristic quadratic a₂λ² + a₁λ + a₀.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QuadraticCoefficients {
    pub a0: f64,
    pub a1: f64,
    pub a2: f64,
}

impl QuadraticCoefficients {
    /// Build the coefficients for one side of a face.
    pub fn new(side: &FaceSide, geom: &MetricGeometry, dir: Direction) -> Self {
        let d = dir.index();
        let alpha = geom.alpha();
        let beta = geom.beta(dir);
        let u = geom.inverse.diagonal_component(dir);

        let rho = side.primitive.rho;
        let vel = side.primitive.vel[d];
        let derived = &side.derived;
        let cs2 = derived.cs2;
        let h_rho = derived.enthalpy * rho;
        let w2 = derived.w_lorentz * derived.w_lorentz;

        let inertia = derived.bsq + cs2 * h_rho;
        let drift = beta - alpha * vel;

        Self {
            a0: inertia * (beta * beta - alpha * alpha * u) - (cs2 - 1.0) * h_rho * drift * drift * w2,
            a1: 2.0 * beta * inertia - 2.0 * (cs2 - 1.0) * h_rho * drift * w2,
            a2: derived.bsq + h_rho * (cs2 + w2 - cs2 * w2),
        }
    }

    /// a₁² − 4a₂a₀, clamped to be non-negative.
    ///
    /// NaN is passed through unchanged.
    #[inline]
    pub fn discriminant(&self) -> f64 {
        let disc = self.a1 * self.a1 - 4.0 * self.a2 * self.a0;
        if disc < 0.0 { 0.0 } else { disc }
    }

    /// The two roots (−a₁ ± √Δ)/(2a₂), larger first.
    #[inline]
    pub fn roots(&self) -> [f64; 2] {
        let sqrt_disc = self.discriminant().sqrt();
        let inv_2a2 = 0.5 / self.a2;
        [
            (-self.a1 + sqrt_disc) * inv_2a2,
            (-self.a1 - sqrt_disc) * inv_2a2,
        ]
    }
}

/// The two characteristic speeds of one side.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CharacteristicSpeeds {
    /// Root with +√Δ
    pub plus: f64,
    /// Root with −√Δ
    pub minus: f64,
}

impl CharacteristicSpeeds {
    /// Largest absolute speed, NaN if either speed is NaN.
    #[inline]
    pub fn max_abs(&self) -> f64 {
        nan_max(self.plus.abs(), self.minus.abs())
    }
}

/// Speeds of one side, divided by the lapse.
pub fn characteristic_speeds(
    side: &FaceSide,
    geom: &MetricGeometry,
    dir: Direction,
) -> CharacteristicSpeeds {
    let [plus, minus] = QuadraticCoefficients::new(side, geom, dir).roots();
    let inv_alpha = 1.0 / geom.alpha();
    CharacteristicSpeeds {
        plus: plus * inv_alpha,
        minus: minus * inv_alpha,
    }
}

/// Maximum absolute speed over both sides of a face, never below zero.
///
/// Unlike `f64::max`, a NaN speed on either side makes the result NaN, so
/// unphysical states are not silently hidden behind the other side.
pub fn max_characteristic_speed(speeds: &FacePair<CharacteristicSpeeds>) -> f64 {
    speeds
        .iter()
        .map(CharacteristicSpeeds::max_abs)
        .fold(0.0, nan_max)
}

#[inline(always)]
fn nan_max(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.max(b)
    }
}
