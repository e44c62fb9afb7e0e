//! Complete numerical flux at a single face.

use crate::equations::{ConservedState, EquationOfState, FaceSide, PrimitiveState};
use crate::metric::{AdmMetric, MetricGeometry};
use crate::types::{Direction, FacePair};

use super::{characteristic_speeds, lax_friedrichs_flux, max_characteristic_speed};

/// Numerical flux and the speed used for its dissipation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaceFlux {
    /// Lax-Friedrichs flux of the eight conserved variables
    pub flux: ConservedState,
    /// Maximum characteristic speed over both sides
    pub charmax: f64,
}

impl FaceFlux {
    /// Whether the flux and the speed are finite.
    pub fn is_finite(&self) -> bool {
        self.charmax.is_finite() && self.flux.is_finite()
    }
}

/// Numerical flux across a face normal to `dir`.
///
/// # Arguments
/// * `prims` - Reconstructed primitive states on both sides
/// * `adm` - Metric averaged onto the face
/// * `dir` - Face normal
/// * `eos` - Equation of state
///
/// The computation is infallible: unphysical input yields non-finite
/// output rather than an error.
///
/// # Example
/// ```
/// use grmhd_flux::equations::{IdealGas, PrimitiveState};
/// use grmhd_flux::flux::compute_face_flux;
/// use grmhd_flux::metric::AdmMetric;
/// use grmhd_flux::types::{Direction, FacePair};
///
/// let state = PrimitiveState::at_rest(1.0, 1.5);
/// let face = compute_face_flux(
///     &FacePair::uniform(state),
///     &AdmMetric::flat(),
///     Direction::X,
///     &IdealGas::new(5.0 / 3.0),
/// );
///
/// // Only pressure acts across the face of a static fluid
/// assert!((face.flux.mom[0] - 1.0).abs() < 1e-12);
/// assert_eq!(face.flux.dens, 0.0);
/// ```
pub fn compute_face_flux<E>(
    prims: &FacePair<PrimitiveState>,
    adm: &AdmMetric,
    dir: Direction,
    eos: &E,
) -> FaceFlux
where
    E: EquationOfState + ?Sized,
{
    let geom = MetricGeometry::new(*adm);
    let sides = prims.map(|prim| FaceSide::new(prim, &geom, eos, dir));
    let speeds = sides.as_ref().map(|side| characteristic_speeds(side, &geom, dir));
    let charmax = max_characteristic_speed(&speeds);

    FaceFlux {
        flux: lax_friedrichs_flux(&sides, charmax, dir),
        charmax,
    }
}
