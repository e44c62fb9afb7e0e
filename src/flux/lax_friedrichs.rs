//! Local Lax-Friedrichs (Rusanov) flux.
//!
//! F* = ½ [(F⁻ + F⁺) − c_max (U⁺ − U⁻)]
//!
//! where c_max bounds the characteristic speeds on both sides of the face.

use crate::equations::{ConservedState, FaceSide};
use crate::types::{Direction, FacePair};

/// Scalar Lax-Friedrichs blend of one conserved variable.
///
/// # Arguments
/// * `flux` - Physical flux on the minus and plus side
/// * `cons` - Conserved variable on the minus and plus side
/// * `charmax` - Maximum characteristic speed at the face
#[inline(always)]
pub fn lax_friedrichs(flux: FacePair<f64>, cons: FacePair<f64>, charmax: f64) -> f64 {
    0.5 * (flux.sum() - charmax * cons.jump())
}

/// Lax-Friedrichs flux of every conserved variable across a face normal to `dir`.
///
/// The flux of B̃ along `dir` is set to exactly zero: the normal field
/// component is not advected through its own face.
pub fn lax_friedrichs_flux(sides: &FacePair<FaceSide>, charmax: f64, dir: Direction) -> ConservedState {
    let f_minus = sides.minus.flux.to_array();
    let f_plus = sides.plus.flux.to_array();
    let u_minus = sides.minus.conserved.to_array();
    let u_plus = sides.plus.conserved.to_array();

    let mut flux = ConservedState::from_array(std::array::from_fn(|n| {
        lax_friedrichs(
            FacePair::new(f_minus[n], f_plus[n]),
            FacePair::new(u_minus[n], u_plus[n]),
            charmax,
        )
    }));
    flux.btilde[dir.index()] = 0.0;
    flux
}
