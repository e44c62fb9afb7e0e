//! GRMHD equations: thermodynamics, state vectors and analytic fluxes.
//!
//! The system evolved is the ideal GRMHD system in conservation form
//!
//! ∂ₜU + ∂ᵢFⁱ(U) = S(U)
//!
//! with the conserved vector U = (D̃, S̃ᵢ, τ̃, B̃ⁱ). This module provides the
//! pointwise pieces needed at a face: the closure p(ρ, ε), the map from
//! primitives to U, and the physical flux Fᵈ.

mod equation_of_state;
mod grmhd;
mod state;

pub use equation_of_state::{EquationOfState, IdealGas};
pub use grmhd::{DerivedState, FaceSide, analytic_flux, primitive_to_conserved};
pub use state::{ConservedState, PrimitiveState};
