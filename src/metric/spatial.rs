//! Spatial metric algebra.

use crate::error::{FluxError, Result};
use crate::types::Direction;

/// Symmetric 3×3 tensor stored by its six independent components.
///
/// Used both for the lower spatial metric γᵢⱼ and its inverse γ^{ij}.
///
/// # Example
///
/// ```
/// use grmhd_flux::metric::Metric3;
///
/// let g = Metric3::diagonal(4.0, 1.0, 1.0);
/// assert!((g.determinant() - 4.0).abs() < 1e-14);
///
/// let inv = g.inverse();
/// assert!((inv.xx - 0.25).abs() < 1e-14);
///
/// // Lowering then raising is the identity
/// let v = [0.1, 0.2, 0.3];
/// let back = inv.contract(g.contract(v));
/// assert!((back[0] - v[0]).abs() < 1e-14);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Metric3 {
    pub xx: f64,
    pub xy: f64,
    pub xz: f64,
    pub yy: f64,
    pub yz: f64,
    pub zz: f64,
}

impl Metric3 {
    /// Create from the six independent components.
    #[inline(always)]
    pub const fn new(xx: f64, xy: f64, xz: f64, yy: f64, yz: f64, zz: f64) -> Self {
        Self {
            xx,
            xy,
            xz,
            yy,
            yz,
            zz,
        }
    }

    /// Flat metric δᵢⱼ.
    pub const fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, 0.0, 1.0)
    }

    /// Diagonal metric.
    pub const fn diagonal(xx: f64, yy: f64, zz: f64) -> Self {
        Self::new(xx, 0.0, 0.0, yy, 0.0, zz)
    }

    /// Components in storage order [xx, xy, xz, yy, yz, zz].
    #[inline(always)]
    pub const fn to_array(self) -> [f64; 6] {
        [self.xx, self.xy, self.xz, self.yy, self.yz, self.zz]
    }

    /// Create from storage order [xx, xy, xz, yy, yz, zz].
    #[inline(always)]
    pub const fn from_array([xx, xy, xz, yy, yz, zz]: [f64; 6]) -> Self {
        Self::new(xx, xy, xz, yy, yz, zz)
    }

    /// Component (a, b) of the full symmetric matrix.
    #[inline(always)]
    pub fn component(&self, a: usize, b: usize) -> f64 {
        match (a.min(b), a.max(b)) {
            (0, 0) => self.xx,
            (0, 1) => self.xy,
            (0, 2) => self.xz,
            (1, 1) => self.yy,
            (1, 2) => self.yz,
            _ => self.zz,
        }
    }

    /// Diagonal component along `dir`.
    #[inline(always)]
    pub fn diagonal_component(&self, dir: Direction) -> f64 {
        match dir {
            Direction::X => self.xx,
            Direction::Y => self.yy,
            Direction::Z => self.zz,
        }
    }

    /// Determinant by cofactor expansion.
    #[inline]
    pub fn determinant(&self) -> f64 {
        -self.xz * self.xz * self.yy + 2.0 * self.xy * self.xz * self.yz
            - self.xx * self.yz * self.yz
            - self.xy * self.xy * self.zz
            + self.xx * self.yy * self.zz
    }

    /// Determinant, rejecting metrics that are not positive definite.
    ///
    /// Only the determinant is checked, which is the condition the flux
    /// kernel depends on (√γ).
    pub fn checked_determinant(&self) -> Result<f64> {
        let det = self.determinant();
        if det > 0.0 {
            Ok(det)
        } else {
            Err(FluxError::NonPositiveDeterminant(det))
        }
    }

    /// Inverse given a precomputed determinant.
    #[inline]
    pub fn inverse_with_determinant(&self, det: f64) -> Self {
        let inv_det = 1.0 / det;
        Self {
            xx: (-self.yz * self.yz + self.yy * self.zz) * inv_det,
            xy: (self.xz * self.yz - self.xy * self.zz) * inv_det,
            xz: (-self.xz * self.yy + self.xy * self.yz) * inv_det,
            yy: (-self.xz * self.xz + self.xx * self.zz) * inv_det,
            yz: (self.xy * self.xz - self.xx * self.yz) * inv_det,
            zz: (-self.xy * self.xy + self.xx * self.yy) * inv_det,
        }
    }

    /// Inverse metric.
    pub fn inverse(&self) -> Self {
        self.inverse_with_determinant(self.determinant())
    }

    /// Matrix-vector product Mᵢⱼ vʲ.
    ///
    /// With the lower metric this lowers an index, with the inverse metric
    /// it raises one.
    #[inline(always)]
    pub fn contract(&self, v: [f64; 3]) -> [f64; 3] {
        [
            self.xx * v[0] + self.xy * v[1] + self.xz * v[2],
            self.xy * v[0] + self.yy * v[1] + self.yz * v[2],
            self.xz * v[0] + self.yz * v[1] + self.zz * v[2],
        ]
    }

    /// Quadratic form vⁱ Mᵢⱼ vʲ.
    #[inline(always)]
    pub fn norm_squared(&self, v: [f64; 3]) -> f64 {
        dot(self.contract(v), v)
    }
}

impl Default for Metric3 {
    fn default() -> Self {
        Self::identity()
    }
}

/// Euclidean dot product of two 3-vectors.
#[inline(always)]
pub(crate) fn dot(a: [f64; 3], b: [f64; 3]) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

/// Lapse, shift and spatial metric at one point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AdmMetric {
    /// Lapse α
    pub alpha: f64,
    /// Shift βⁱ
    pub beta: [f64; 3],
    /// Spatial metric γᵢⱼ
    pub gamma: Metric3,
}

impl AdmMetric {
    /// Create from lapse, shift and spatial metric.
    pub const fn new(alpha: f64, beta: [f64; 3], gamma: Metric3) -> Self {
        Self { alpha, beta, gamma }
    }

    /// Minkowski spacetime in Cartesian coordinates.
    pub const fn flat() -> Self {
        Self::new(1.0, [0.0; 3], Metric3::identity())
    }

    /// The ten components as [α, βˣ, βʸ, βᶻ, γxx, γxy, γxz, γyy, γyz, γzz].
    pub fn to_array(&self) -> [f64; 10] {
        let g = self.gamma.to_array();
        [
            self.alpha,
            self.beta[0],
            self.beta[1],
            self.beta[2],
            g[0],
            g[1],
            g[2],
            g[3],
            g[4],
            g[5],
        ]
    }

    /// Inverse of [`AdmMetric::to_array`].
    pub fn from_array(a: [f64; 10]) -> Self {
        Self::new(
            a[0],
            [a[1], a[2], a[3]],
            Metric3::new(a[4], a[5], a[6], a[7], a[8], a[9]),
        )
    }
}

impl Default for AdmMetric {
    fn default() -> Self {
        Self::flat()
    }
}

/// Metric with the derived quantities the flux kernel needs.
///
/// Computed once per face (or vertex) and shared by both sides.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MetricGeometry {
    /// Lapse, shift and lower metric
    pub adm: AdmMetric,
    /// det γ
    pub det: f64,
    /// √det γ
    pub sqrt_det: f64,
    /// Inverse metric γ^{ij}
    pub inverse: Metric3,
}

impl MetricGeometry {
    /// Derive determinant and inverse.
    ///
    /// A non-positive determinant yields NaN in `sqrt_det`, which propagates
    /// into every flux computed with this geometry.
    #[inline]
    pub fn new(adm: AdmMetric) -> Self {
        let det = adm.gamma.determinant();
        Self {
            adm,
            det,
            sqrt_det: det.sqrt(),
            inverse: adm.gamma.inverse_with_determinant(det),
        }
    }

    /// Like [`MetricGeometry::new`], but rejects degenerate metrics.
    pub fn checked(adm: AdmMetric) -> Result<Self> {
        adm.gamma.checked_determinant()?;
        Ok(Self::new(adm))
    }

    /// Lapse α.
    #[inline(always)]
    pub fn alpha(&self) -> f64 {
        self.adm.alpha
    }

    /// Shift component along `dir`.
    #[inline(always)]
    pub fn beta(&self, dir: Direction) -> f64 {
        self.adm.beta[dir.index()]
    }

    /// Lower spatial metric.
    #[inline(always)]
    pub fn gamma(&self) -> &Metric3 {
        &self.adm.gamma
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-12;

    fn sample_metric() -> Metric3 {
        // Symmetric positive definite, all off-diagonals non-zero
        Metric3::new(2.0, 0.3, -0.2, 1.5, 0.1, 1.2)
    }

    fn full(m: &Metric3) -> [[f64; 3]; 3] {
        std::array::from_fn(|a| std::array::from_fn(|b| m.component(a, b)))
    }

    #[test]
    fn test_identity_determinant_and_inverse() {
        let g = Metric3::identity();
        assert_eq!(g.determinant(), 1.0);
        assert_eq!(g.inverse(), Metric3::identity());
    }

    #[test]
    fn test_determinant_matches_rule_of_sarrus() {
        let m = full(&sample_metric());
        let sarrus = m[0][0] * m[1][1] * m[2][2]
            + m[0][1] * m[1][2] * m[2][0]
            + m[0][2] * m[1][0] * m[2][1]
            - m[0][2] * m[1][1] * m[2][0]
            - m[0][0] * m[1][2] * m[2][1]
            - m[0][1] * m[1][0] * m[2][2];

        assert!((sample_metric().determinant() - sarrus).abs() < TOL);
    }

    #[test]
    fn test_inverse_times_metric_is_identity() {
        let g = sample_metric();
        let a = full(&g);
        let b = full(&g.inverse());

        for i in 0..3 {
            for j in 0..3 {
                let product: f64 = (0..3).map(|k| a[i][k] * b[k][j]).sum();
                let expected = if i == j { 1.0 } else { 0.0 };
                assert!(
                    (product - expected).abs() < TOL,
                    "(g g^-1)[{i}][{j}] = {product}"
                );
            }
        }
    }

    #[test]
    fn test_checked_determinant_rejects_degenerate() {
        assert!(Metric3::identity().checked_determinant().is_ok());

        let negative = Metric3::diagonal(1.0, -1.0, 1.0);
        assert_eq!(
            negative.checked_determinant(),
            Err(FluxError::NonPositiveDeterminant(-1.0))
        );

        let singular = Metric3::diagonal(1.0, 0.0, 1.0);
        assert!(singular.checked_determinant().is_err());
        assert!(MetricGeometry::checked(AdmMetric::new(1.0, [0.0; 3], singular)).is_err());
    }

    #[test]
    fn test_geometry_of_negative_determinant_is_nan() {
        let adm = AdmMetric::new(1.0, [0.0; 3], Metric3::diagonal(1.0, -1.0, 1.0));
        let geom = MetricGeometry::new(adm);
        assert!(geom.sqrt_det.is_nan());
    }

    #[test]
    fn test_contract_and_norm() {
        let g = Metric3::diagonal(4.0, 1.0, 9.0);
        assert_eq!(g.contract([1.0, 2.0, 3.0]), [4.0, 2.0, 27.0]);
        assert_eq!(g.norm_squared([1.0, 2.0, 3.0]), 4.0 + 4.0 + 81.0);
    }

    #[test]
    fn test_adm_array_round_trip() {
        let adm = AdmMetric::new(0.8, [0.1, 0.2, 0.3], sample_metric());
        assert_eq!(AdmMetric::from_array(adm.to_array()), adm);
    }
}
