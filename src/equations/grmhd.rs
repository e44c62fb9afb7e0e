//! Ideal GRMHD in the Valencia formulation.
//!
//! Converts reconstructed primitive variables at a face into conserved
//! variables and evaluates the physical flux along a sweep direction d:
//!
//! ```text
//! F(D̃)  = D̃ ṽ^d
//! F(S̃ᵢ) = S̃ᵢ ṽ^d + δᵢᵈ α√γ (p + b²/2) − α√γ (B^d/W) bᵢ
//! F(τ̃)  = τ̃ ṽ^d + α√γ (p + b²/2) v^d − (α b⁰) α√γ (B^d/W)
//! F(B̃ʲ) = B̃ʲ ṽ^d − B̃^d ṽʲ
//! ```
//!
//! with the coordinate velocity ṽⁱ = α vⁱ − βⁱ. The induction flux is
//! antisymmetric in (j, d), so the component along the sweep vanishes.
//!
//! Reference: Giacomazzo & Rezzolla (2007), Class. Quantum Grav. 24, S235.

use crate::metric::{MetricGeometry, dot};
use crate::types::Direction;

use super::{ConservedState, EquationOfState, PrimitiveState};

/// Auxiliary quantities derived from a primitive state and the metric.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DerivedState {
    /// Gas pressure p
    pub press: f64,
    /// Squared sound speed c_s²
    pub cs2: f64,
    /// Specific enthalpy h
    pub enthalpy: f64,
    /// Lorentz factor W
    pub w_lorentz: f64,
    /// Covariant velocity vᵢ
    pub vlow: [f64; 3],
    /// Covariant Eulerian magnetic field Bᵢ
    pub blow: [f64; 3],
    /// B² = Bⁱ Bᵢ
    pub b2: f64,
    /// α b⁰ = W Bⁱ vᵢ
    pub alpha_b0: f64,
    /// Covariant comoving magnetic field bᵢ
    pub bcomov_low: [f64; 3],
    /// b² = (B² + (α b⁰)²) / W²
    pub bsq: f64,
    /// Coordinate velocity ṽⁱ = α vⁱ − βⁱ
    pub vtilde: [f64; 3],
}

impl DerivedState {
    /// Evaluate the auxiliary quantities.
    ///
    /// ρ = 0 or vᵢvⁱ ≥ 1 produce non-finite values; no floor is applied.
    pub fn compute<E>(prim: &PrimitiveState, geom: &MetricGeometry, eos: &E) -> Self
    where
        E: EquationOfState + ?Sized,
    {
        let gamma = geom.gamma();
        let alpha = geom.alpha();
        let beta = geom.adm.beta;

        let vlow = gamma.contract(prim.vel);
        let w_lorentz = 1.0 / (1.0 - dot(vlow, prim.vel)).sqrt();

        let press = eos.pressure(prim.rho, prim.eps);
        let cs2 = eos.sound_speed_squared(prim.rho, prim.eps);
        let enthalpy = eos.enthalpy(prim.rho, prim.eps);

        let blow = gamma.contract(prim.bvec);
        let b2 = dot(prim.bvec, blow);

        // Comoving field; the identity B² = W² b² − (α b⁰)² is assumed by
        // the energy density below and has not been cross-checked.
        let alpha_b0 = w_lorentz * dot(prim.bvec, vlow);
        let bcomov_low = std::array::from_fn(|a| blow[a] / w_lorentz + alpha_b0 * vlow[a]);
        let bsq = (b2 + alpha_b0 * alpha_b0) / (w_lorentz * w_lorentz);

        let vtilde = std::array::from_fn(|a| alpha * prim.vel[a] - beta[a]);

        Self {
            press,
            cs2,
            enthalpy,
            w_lorentz,
            vlow,
            blow,
            b2,
            alpha_b0,
            bcomov_low,
            bsq,
            vtilde,
        }
    }

    /// Total pressure p + b²/2.
    #[inline(always)]
    pub fn total_pressure(&self) -> f64 {
        self.press + 0.5 * self.bsq
    }
}

/// Densitized conserved variables from primitives.
pub fn primitive_to_conserved(
    prim: &PrimitiveState,
    derived: &DerivedState,
    geom: &MetricGeometry,
) -> ConservedState {
    let sqrt_g = geom.sqrt_det;
    let w = derived.w_lorentz;

    let dens = sqrt_g * prim.rho * w;
    let dens_h_w = dens * derived.enthalpy * w;
    // √γ (ρ h W² + b² W²) written via (α b⁰)² + B²
    let inertia = dens_h_w + sqrt_g * (derived.alpha_b0 * derived.alpha_b0 + derived.b2);

    let mom = std::array::from_fn(|i| {
        inertia * derived.vlow[i] - sqrt_g * derived.alpha_b0 * derived.bcomov_low[i]
    });
    let tau = dens_h_w - dens - sqrt_g * derived.total_pressure() + sqrt_g * derived.b2;
    let btilde = prim.bvec.map(|b| sqrt_g * b);

    ConservedState::new(dens, mom, tau, btilde)
}

/// Physical flux of every conserved variable along `dir`.
pub fn analytic_flux(
    prim: &PrimitiveState,
    derived: &DerivedState,
    cons: &ConservedState,
    geom: &MetricGeometry,
    dir: Direction,
) -> ConservedState {
    let d = dir.index();
    let alpha = geom.alpha();
    let sqrt_g = geom.sqrt_det;
    let vt = derived.vtilde[d];

    let alp_ptot = alpha * sqrt_g * derived.total_pressure();
    let alp_b_over_w = alpha * sqrt_g * prim.bvec[d] / derived.w_lorentz;

    let dens = cons.dens * vt;
    let mom = std::array::from_fn(|i| {
        cons.mom[i] * vt + dir.indicator(i) * alp_ptot - alp_b_over_w * derived.bcomov_low[i]
    });
    let tau = cons.tau * vt + alp_ptot * prim.vel[d] - derived.alpha_b0 * alp_b_over_w;
    let btilde =
        std::array::from_fn(|j| cons.btilde[j] * derived.vtilde[d] - cons.btilde[d] * derived.vtilde[j]);

    ConservedState::new(dens, mom, tau, btilde)
}

/// Everything known about one side of a face.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaceSide {
    pub primitive: PrimitiveState,
    pub derived: DerivedState,
    pub conserved: ConservedState,
    /// Physical flux along the sweep direction
    pub flux: ConservedState,
}

impl FaceSide {
    /// Evaluate derived, conserved and flux quantities for one side.
    pub fn new<E>(prim: PrimitiveState, geom: &MetricGeometry, eos: &E, dir: Direction) -> Self
    where
        E: EquationOfState + ?Sized,
    {
        let derived = DerivedState::compute(&prim, geom, eos);
        let conserved = primitive_to_conserved(&prim, &derived, geom);
        let flux = analytic_flux(&prim, &derived, &conserved, geom, dir);
        Self {
            primitive: prim,
            derived,
            conserved,
            flux,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equations::IdealGas;
    use crate::metric::{AdmMetric, Metric3};
    use approx::assert_relative_eq;

    const TOL: f64 = 1e-12;

    fn flat() -> MetricGeometry {
        MetricGeometry::new(AdmMetric::flat())
    }

    fn curved() -> MetricGeometry {
        MetricGeometry::new(AdmMetric::new(
            0.8,
            [0.1, -0.05, 0.02],
            Metric3::new(1.3, 0.1, -0.05, 1.1, 0.08, 0.9),
        ))
    }

    #[test]
    fn test_static_flat_hydro() {
        let eos = IdealGas::new(5.0 / 3.0);
        let prim = PrimitiveState::at_rest(1.0, 1.5);
        let side = FaceSide::new(prim, &flat(), &eos, Direction::X);

        assert_eq!(side.derived.w_lorentz, 1.0);
        assert!((side.derived.press - 1.0).abs() < TOL);
        assert!((side.conserved.dens - 1.0).abs() < TOL);
        // tau = rho * eps at rest
        assert!((side.conserved.tau - 1.5).abs() < TOL);

        assert_eq!(side.flux.dens, 0.0);
        assert!((side.flux.mom[0] - 1.0).abs() < TOL);
        assert_eq!(side.flux.mom[1], 0.0);
        assert_eq!(side.flux.mom[2], 0.0);
        assert_eq!(side.flux.tau, 0.0);
    }

    #[test]
    fn test_flat_space_reduces_to_special_relativistic_euler() {
        let eos = IdealGas::new(4.0 / 3.0);
        let (rho, eps) = (1.2, 0.8);
        let v = [0.3, -0.2, 0.1];
        let prim = PrimitiveState::new(rho, v, eps, [0.0; 3]);
        let geom = flat();

        let p = eos.pressure(rho, eps);
        let h = eos.enthalpy(rho, eps);
        let w = 1.0 / (1.0 - (v[0] * v[0] + v[1] * v[1] + v[2] * v[2])).sqrt();

        for dir in Direction::ALL {
            let d = dir.index();
            let side = FaceSide::new(prim, &geom, &eos, dir);
            let u = side.conserved;
            let f = side.flux;

            assert_relative_eq!(u.dens, rho * w, epsilon = TOL);
            assert_relative_eq!(u.tau, rho * h * w * w - p - rho * w, epsilon = TOL);
            assert_relative_eq!(f.dens, rho * w * v[d], epsilon = TOL);
            assert_relative_eq!(f.tau, (u.tau + p) * v[d], epsilon = TOL);
            for i in 0..3 {
                let s_i = rho * h * w * w * v[i];
                assert_relative_eq!(u.mom[i], s_i, epsilon = TOL);
                let delta = if i == d { p } else { 0.0 };
                assert_relative_eq!(f.mom[i], s_i * v[d] + delta, epsilon = TOL);
            }
            assert_eq!(f.btilde, [0.0; 3]);
        }
    }

    #[test]
    fn test_magnetic_pressure_at_rest() {
        let eos = IdealGas::new(5.0 / 3.0);
        let (rho, eps, by) = (1.0, 1.5, 0.6);
        let prim = PrimitiveState::at_rest(rho, eps).with_magnetic_field([0.0, by, 0.0]);
        let side = FaceSide::new(prim, &flat(), &eos, Direction::X);

        assert_eq!(side.derived.alpha_b0, 0.0);
        assert!((side.derived.bsq - by * by).abs() < TOL);
        // tau = rho eps + B²/2
        assert!((side.conserved.tau - (rho * eps + 0.5 * by * by)).abs() < TOL);
        // Normal momentum flux: p + B²/2
        assert!((side.flux.mom[0] - (1.0 + 0.5 * by * by)).abs() < TOL);
        // Field along y does not exert tension normal to an x-face
        assert_eq!(side.flux.mom[1], 0.0);

        // Along y the same field line contributes p + b²/2 − B_y b_y
        let side_y = FaceSide::new(prim, &flat(), &eos, Direction::Y);
        assert!((side_y.flux.mom[1] - (1.0 + 0.5 * by * by - by * by)).abs() < TOL);
    }

    #[test]
    fn test_induction_flux_matches_electric_field_table() {
        let eos = IdealGas::new(5.0 / 3.0);
        let prim = PrimitiveState::new(1.1, [0.2, -0.3, 0.15], 0.9, [0.4, -0.25, 0.7]);
        let geom = curved();

        for dir in Direction::ALL {
            let side = FaceSide::new(prim, &geom, &eos, dir);
            let bt = side.conserved.btilde;
            let vt = side.derived.vtilde;
            let (ix, iy, iz) = (
                dir.indicator(0),
                dir.indicator(1),
                dir.indicator(2),
            );

            // Cyclic components B̃ᵃṽᵇ − B̃ᵇṽᵃ
            let e_z = bt[0] * vt[1] - bt[1] * vt[0];
            let e_y = bt[2] * vt[0] - bt[0] * vt[2];
            let e_x = bt[1] * vt[2] - bt[2] * vt[1];

            let expected = [iy * e_z - iz * e_y, -ix * e_z + iz * e_x, ix * e_y - iy * e_x];
            for j in 0..3 {
                assert!(
                    (side.flux.btilde[j] - expected[j]).abs() < TOL,
                    "dir {dir}, component {j}"
                );
            }
            assert_eq!(side.flux.btilde[dir.index()], 0.0);
        }
    }

    #[test]
    fn test_cyclic_permutation_of_axes() {
        // Rotating the state x→y→z must rotate the fluxes the same way.
        let eos = IdealGas::new(5.0 / 3.0);
        let geom = flat();
        let rot = |a: [f64; 3]| [a[2], a[0], a[1]];

        let prim = PrimitiveState::new(1.0, [0.3, 0.1, -0.2], 1.2, [0.5, 0.2, -0.1]);
        let rotated = PrimitiveState::new(prim.rho, rot(prim.vel), prim.eps, rot(prim.bvec));

        for dir in Direction::ALL {
            let f = FaceSide::new(prim, &geom, &eos, dir).flux;
            let g = FaceSide::new(rotated, &geom, &eos, dir.next()).flux;

            assert_relative_eq!(g.dens, f.dens, epsilon = TOL);
            assert_relative_eq!(g.tau, f.tau, epsilon = TOL);
            for (a, b) in rot(f.mom).iter().zip(g.mom) {
                assert_relative_eq!(*a, b, epsilon = TOL);
            }
            for (a, b) in rot(f.btilde).iter().zip(g.btilde) {
                assert_relative_eq!(*a, b, epsilon = TOL);
            }
        }
    }

    #[test]
    fn test_densitization() {
        let eos = IdealGas::new(5.0 / 3.0);
        let geom = MetricGeometry::new(AdmMetric::new(1.0, [0.0; 3], Metric3::diagonal(4.0, 4.0, 4.0)));
        let prim = PrimitiveState::at_rest(1.0, 1.5).with_magnetic_field([0.1, 0.2, 0.3]);
        let side = FaceSide::new(prim, &geom, &eos, Direction::Z);

        assert!((geom.sqrt_det - 8.0).abs() < TOL);
        assert!((side.conserved.dens - 8.0).abs() < TOL);
        assert_eq!(side.conserved.btilde, [0.8, 1.6, 2.4]);
    }

    #[test]
    fn test_shift_advects_at_rest_fluid() {
        // A shift βˣ moves the coordinates, so a static fluid has ṽˣ = −βˣ.
        let eos = IdealGas::new(5.0 / 3.0);
        let geom = MetricGeometry::new(AdmMetric::new(1.0, [0.2, 0.0, 0.0], Metric3::identity()));
        let side = FaceSide::new(PrimitiveState::at_rest(2.0, 1.0), &geom, &eos, Direction::X);

        assert!((side.derived.vtilde[0] + 0.2).abs() < TOL);
        assert!((side.flux.dens + 0.2 * side.conserved.dens).abs() < TOL);
    }

    #[test]
    fn test_unphysical_states_give_nan() {
        let eos = IdealGas::new(5.0 / 3.0);

        let vacuum = FaceSide::new(PrimitiveState::at_rest(0.0, 1.0), &flat(), &eos, Direction::X);
        assert!(!vacuum.derived.enthalpy.is_finite());

        let superluminal = PrimitiveState::at_rest(1.0, 1.0).with_velocity([1.2, 0.0, 0.0]);
        let side = FaceSide::new(superluminal, &flat(), &eos, Direction::X);
        assert!(side.derived.w_lorentz.is_nan());
        assert!(!side.flux.is_finite());
    }
}
