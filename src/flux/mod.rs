//! Numerical fluxes at cell faces.
//!
//! Provides the pieces of the local Lax-Friedrichs flux:
//! - Characteristic speeds from the fast magnetosonic quadratic
//! - Scalar and vector Lax-Friedrichs blends
//! - [`compute_face_flux`], which combines them at a single face
//!
//! All functions here operate on one face and never fail; the sweep over a
//! grid lives in [`crate::solver`].

mod characteristic;
mod face;
mod lax_friedrichs;

pub use characteristic::{
    CharacteristicSpeeds, QuadraticCoefficients, characteristic_speeds, max_characteristic_speed,
};
pub use face::{FaceFlux, compute_face_flux};
pub use lax_friedrichs::{lax_friedrichs, lax_friedrichs_flux};
