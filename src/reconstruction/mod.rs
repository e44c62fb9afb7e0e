//! Reconstruction of cell-centred primitives onto faces.
//!
//! Each face receives two values per field: one extrapolated from the cell
//! on its negative side and one from the cell on its positive side. The
//! stencil width determines how many ghost zones the sweep needs.
//!
//! | Method       | Order | Ghost zones |
//! |--------------|-------|-------------|
//! | Godunov      | 1     | 1           |
//! | minmod       | 2     | 2           |
//! | monocentral  | 2     | 2           |
//! | ppm          | 3     | 3           |

mod stencil;

use std::fmt;
use std::str::FromStr;

use crate::error::FluxError;
use crate::grid::GridFunction;
use crate::types::{Direction, FacePair, GridIndex};

pub use stencil::{StencilReconstructor, mc_limiter, minmod_limiter, ppm, tvd_linear};

/// Reconstruction scheme selector.
///
/// # Example
/// ```
/// use grmhd_flux::reconstruction::ReconstructionMethod;
///
/// let method: ReconstructionMethod = "PPM".parse().unwrap();
/// assert_eq!(method, ReconstructionMethod::Ppm);
/// assert_eq!(method.required_ghost_zones(), 3);
/// assert!("weno".parse::<ReconstructionMethod>().is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ReconstructionMethod {
    /// Piecewise constant
    #[default]
    Godunov,
    /// Piecewise linear with minmod slope limiter
    Minmod,
    /// Piecewise linear with monotonized-central slope limiter
    MonotonizedCentral,
    /// Piecewise parabolic (Colella & Woodward 1984)
    Ppm,
}

impl ReconstructionMethod {
    /// Every method, in order of increasing stencil width.
    pub const ALL: [ReconstructionMethod; 4] = [
        ReconstructionMethod::Godunov,
        ReconstructionMethod::Minmod,
        ReconstructionMethod::MonotonizedCentral,
        ReconstructionMethod::Ppm,
    ];

    /// Ghost zones needed along the sweep direction.
    pub const fn required_ghost_zones(self) -> usize {
        match self {
            ReconstructionMethod::Godunov => 1,
            ReconstructionMethod::Minmod | ReconstructionMethod::MonotonizedCentral => 2,
            ReconstructionMethod::Ppm => 3,
        }
    }

    /// Canonical parameter name.
    pub const fn name(self) -> &'static str {
        match self {
            ReconstructionMethod::Godunov => "Godunov",
            ReconstructionMethod::Minmod => "minmod",
            ReconstructionMethod::MonotonizedCentral => "monocentral",
            ReconstructionMethod::Ppm => "ppm",
        }
    }
}

impl fmt::Display for ReconstructionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ReconstructionMethod {
    type Err = FluxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|method| method.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| FluxError::UnknownReconstruction(s.to_string()))
    }
}

/// Operator producing minus/plus face values of a cell-centred field.
pub trait Reconstructor: Send + Sync {
    /// Reconstruct `field` at the face `face` normal to `dir`.
    ///
    /// The caller guarantees that the layout has at least
    /// [`ReconstructionMethod::required_ghost_zones`] ghosts along `dir`.
    fn reconstruct(
        &self,
        field: &GridFunction,
        face: GridIndex,
        method: ReconstructionMethod,
        dir: Direction,
    ) -> FacePair<f64>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(
            "godunov".parse::<ReconstructionMethod>(),
            Ok(ReconstructionMethod::Godunov)
        );
        assert_eq!(
            "MINMOD".parse::<ReconstructionMethod>(),
            Ok(ReconstructionMethod::Minmod)
        );
        assert_eq!(
            " MonoCentral ".parse::<ReconstructionMethod>(),
            Ok(ReconstructionMethod::MonotonizedCentral)
        );
        assert_eq!(
            "ppm".parse::<ReconstructionMethod>(),
            Ok(ReconstructionMethod::Ppm)
        );
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            "weno5".parse::<ReconstructionMethod>(),
            Err(FluxError::UnknownReconstruction("weno5".into()))
        );
        assert!("".parse::<ReconstructionMethod>().is_err());
    }

    #[test]
    fn test_display_round_trips() {
        for method in ReconstructionMethod::ALL {
            assert_eq!(method.to_string().parse::<ReconstructionMethod>(), Ok(method));
        }
    }

    #[test]
    fn test_ghost_requirements() {
        let ghosts: Vec<usize> = ReconstructionMethod::ALL
            .iter()
            .map(|m| m.required_ghost_zones())
            .collect();
        assert_eq!(ghosts, vec![1, 2, 2, 3]);
    }
}
