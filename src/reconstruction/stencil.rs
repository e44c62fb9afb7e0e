//! One-dimensional reconstruction stencils.
//!
//! Stencil arrays are indexed relative to the face: for a face f the
//! arrays hold cells f−n..f+n−1, so the minus cell is at `n − 1` and the
//! plus cell at `n`.

use crate::grid::GridFunction;
use crate::types::{Direction, FacePair, GridIndex};

use super::{ReconstructionMethod, Reconstructor};

/// Minmod slope limiter.
///
/// Returns the smaller slope if both have the same sign, zero otherwise.
#[inline]
pub fn minmod_limiter(a: f64, b: f64) -> f64 {
    if a > 0.0 && b > 0.0 {
        a.min(b)
    } else if a < 0.0 && b < 0.0 {
        a.max(b)
    } else {
        0.0
    }
}

/// Monotonized-central slope limiter (van Leer 1977).
///
/// minmod(2a, 2b, (a + b)/2)
#[inline]
pub fn mc_limiter(a: f64, b: f64) -> f64 {
    if a * b <= 0.0 {
        return 0.0;
    }
    let slope = (2.0 * a.abs()).min(2.0 * b.abs()).min(0.5 * (a + b).abs());
    slope.copysign(a)
}

/// Limited piecewise-linear reconstruction.
///
/// # Arguments
/// * `u` - Cells f−2, f−1, f, f+1
/// * `limiter` - Slope limiter applied to the backward and forward differences
pub fn tvd_linear<L>(u: [f64; 4], limiter: L) -> FacePair<f64>
where
    L: Fn(f64, f64) -> f64,
{
    let slope_minus = limiter(u[1] - u[0], u[2] - u[1]);
    let slope_plus = limiter(u[2] - u[1], u[3] - u[2]);
    FacePair::new(u[1] + 0.5 * slope_minus, u[2] - 0.5 * slope_plus)
}

/// Fourth-order interface value between cells `u[1]` and `u[2]`, limited
/// to the range of those two cells.
#[inline]
fn ppm_interface(u: [f64; 4]) -> f64 {
    let value = 7.0 / 12.0 * (u[1] + u[2]) - 1.0 / 12.0 * (u[0] + u[3]);
    value.clamp(u[1].min(u[2]), u[1].max(u[2]))
}

/// Colella-Woodward monotonicity constraint on the parabola of one cell.
///
/// Returns the constrained (left, right) interface values.
fn ppm_monotonize(left: f64, mean: f64, right: f64) -> (f64, f64) {
    if (right - mean) * (mean - left) <= 0.0 {
        return (mean, mean);
    }
    let diff = right - left;
    let curvature = diff * (mean - 0.5 * (left + right));
    let bound = diff * diff / 6.0;
    if curvature > bound {
        (3.0 * mean - 2.0 * right, right)
    } else if -bound > curvature {
        (left, 3.0 * mean - 2.0 * left)
    } else {
        (left, right)
    }
}

/// Piecewise parabolic reconstruction (Colella & Woodward 1984).
///
/// # Arguments
/// * `u` - Cells f−3..f+2
pub fn ppm(u: [f64; 6]) -> FacePair<f64> {
    // Interfaces f−1, f, f+1 in terms of the face index
    let left_of_minus = ppm_interface([u[0], u[1], u[2], u[3]]);
    let at_face = ppm_interface([u[1], u[2], u[3], u[4]]);
    let right_of_plus = ppm_interface([u[2], u[3], u[4], u[5]]);

    let (_, minus) = ppm_monotonize(left_of_minus, u[2], at_face);
    let (plus, _) = ppm_monotonize(at_face, u[3], right_of_plus);
    FacePair::new(minus, plus)
}

/// Reconstructor reading stencils directly from a [`GridFunction`].
#[derive(Clone, Copy, Debug, Default)]
pub struct StencilReconstructor;

impl StencilReconstructor {
    #[inline(always)]
    fn gather<const N: usize>(field: &GridFunction, face: GridIndex, dir: Direction) -> [f64; N] {
        let first = -((N / 2) as isize);
        std::array::from_fn(|n| field.get(face.shifted(dir, first + n as isize)))
    }
}

impl Reconstructor for StencilReconstructor {
    fn reconstruct(
        &self,
        field: &GridFunction,
        face: GridIndex,
        method: ReconstructionMethod,
        dir: Direction,
    ) -> FacePair<f64> {
        match method {
            ReconstructionMethod::Godunov => {
                FacePair::from_array(Self::gather::<2>(field, face, dir))
            }
            ReconstructionMethod::Minmod => {
                tvd_linear(Self::gather(field, face, dir), minmod_limiter)
            }
            ReconstructionMethod::MonotonizedCentral => {
                tvd_linear(Self::gather(field, face, dir), mc_limiter)
            }
            ReconstructionMethod::Ppm => ppm(Self::gather(field, face, dir)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{Centering, GridLayout};

    const TOL: f64 = 1e-12;

    #[test]
    fn test_limiters() {
        assert_eq!(minmod_limiter(1.0, 2.0), 1.0);
        assert_eq!(minmod_limiter(-1.0, -0.5), -0.5);
        assert_eq!(minmod_limiter(1.0, -1.0), 0.0);

        assert_eq!(mc_limiter(1.0, 1.0), 1.0);
        // 2 * 0.5 bounds the slope
        assert_eq!(mc_limiter(0.5, 3.0), 1.0);
        assert_eq!(mc_limiter(-1.0, -2.0), -1.5);
        assert_eq!(mc_limiter(1.0, 0.0), 0.0);
    }

    #[test]
    fn test_constant_data_is_preserved() {
        for method in ReconstructionMethod::ALL {
            let layout = GridLayout::uniform(6, 3);
            let field = GridFunction::constant("rho", Centering::Cell, &layout, 1.25);
            for dir in Direction::ALL {
                let face = GridIndex::new(5, 5, 5);
                let pair = StencilReconstructor.reconstruct(&field, face, method, dir);
                assert_eq!(pair, FacePair::uniform(1.25), "{method} along {dir}");
            }
        }
    }

    #[test]
    fn test_linear_data_is_exact_above_first_order() {
        let layout = GridLayout::uniform(6, 3);
        let field = GridFunction::from_fn("u", Centering::Cell, &layout, |_, x| 2.0 + 0.5 * x[1]);
        let face = GridIndex::new(4, 5, 4);
        let x_face = layout.coordinates(Centering::Face(Direction::Y), face)[1];
        let exact = 2.0 + 0.5 * x_face;

        for method in [
            ReconstructionMethod::Minmod,
            ReconstructionMethod::MonotonizedCentral,
            ReconstructionMethod::Ppm,
        ] {
            let pair = StencilReconstructor.reconstruct(&field, face, method, Direction::Y);
            assert!((pair.minus - exact).abs() < TOL, "{method}: {pair}");
            assert!((pair.plus - exact).abs() < TOL, "{method}: {pair}");
        }

        let godunov =
            StencilReconstructor.reconstruct(&field, face, ReconstructionMethod::Godunov, Direction::Y);
        assert!((godunov.minus - (exact - 0.25)).abs() < TOL);
        assert!((godunov.plus - (exact + 0.25)).abs() < TOL);
    }

    #[test]
    fn test_step_does_not_overshoot() {
        let step = [2.0, 2.0, 2.0, 1.0, 1.0, 1.0];

        let linear = [step[1], step[2], step[3], step[4]];
        for pair in [
            tvd_linear(linear, minmod_limiter),
            tvd_linear(linear, mc_limiter),
            ppm(step),
        ] {
            assert_eq!(pair, FacePair::new(2.0, 1.0));
        }
    }

    #[test]
    fn test_ppm_flattens_extremum() {
        // Local maximum in the minus cell: the parabola collapses to its mean
        let u = [0.0, 1.0, 3.0, 1.0, 0.0, 0.0];
        let pair = ppm(u);
        assert_eq!(pair.minus, 3.0);
    }

    #[test]
    fn test_gather_centres_on_face() {
        let layout = GridLayout::new([8, 1, 1], [3, 1, 1]);
        let field = GridFunction::from_fn("i", Centering::Cell, &layout, |idx, _| idx.i as f64);
        let stencil: [f64; 6] = StencilReconstructor::gather(&field, GridIndex::new(5, 1, 1), Direction::X);
        assert_eq!(stencil, [2.0, 3.0, 4.0, 5.0, 6.0, 7.0]);
    }
}
