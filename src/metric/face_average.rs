//! Averaging of vertex-centred metric quantities onto faces.
//!
//! A face normal to `d` is cell-centred in the two orthogonal directions,
//! so its value is the mean of the 2×2 vertices spanning it. Along `d` the
//! face already coincides with a vertex plane and no averaging is needed:
//!
//! ```text
//!   face (i, j, k) normal to x averages vertices
//!   (i, j, k), (i, j+1, k), (i, j, k+1), (i, j+1, k+1)
//! ```

use crate::error::Result;
use crate::grid::{Centering, GridFunction, GridLayout};
use crate::types::{Direction, GridIndex};

use super::{AdmMetric, Metric3};

/// Borrowed vertex-centred ADM fields.
#[derive(Clone, Copy, Debug)]
pub struct MetricFields<'a> {
    /// γxx, γxy, γxz, γyy, γyz, γzz
    pub gamma: [&'a GridFunction; 6],
    /// Lapse α
    pub alpha: &'a GridFunction,
    /// Shift βˣ, βʸ, βᶻ
    pub beta: [&'a GridFunction; 3],
}

impl<'a> MetricFields<'a> {
    /// ADM variables at a single vertex.
    #[inline]
    pub fn at_vertex(&self, idx: GridIndex) -> AdmMetric {
        AdmMetric::new(
            self.alpha.get(idx),
            self.beta.map(|f| f.get(idx)),
            Metric3::from_array(self.gamma.map(|f| f.get(idx))),
        )
    }

    /// Check that every field is vertex-centred on `layout`.
    pub fn check(&self, layout: &GridLayout) -> Result<()> {
        for field in self.iter() {
            field.check(Centering::Vertex, layout)?;
        }
        Ok(())
    }

    fn iter(&self) -> impl Iterator<Item = &'a GridFunction> {
        self.gamma
            .into_iter()
            .chain(std::iter::once(self.alpha))
            .chain(self.beta)
    }
}

/// Average the ADM variables onto the face at `face` normal to `dir`.
///
/// Returns the mean of the four vertices lying in the face plane.
pub fn face_average(fields: &MetricFields<'_>, face: GridIndex, dir: Direction) -> AdmMetric {
    let [e1, e2] = dir.orthogonal();
    let mut sum = [0.0; 10];
    for d2 in 0..2 {
        for d1 in 0..2 {
            let vertex = face.shifted(e1, d1).shifted(e2, d2);
            let sample = fields.at_vertex(vertex).to_array();
            for (acc, value) in sum.iter_mut().zip(sample) {
                *acc += value;
            }
        }
    }
    AdmMetric::from_array(sum.map(|s| s / 4.0))
}

/// Owned vertex-centred ADM fields.
///
/// Convenience storage for callers that do not manage the metric fields
/// themselves (tests, benchmarks, standalone drivers).
#[derive(Clone, Debug)]
pub struct MetricStorage {
    /// γxx, γxy, γxz, γyy, γyz, γzz
    pub gamma: [GridFunction; 6],
    /// Lapse α
    pub alpha: GridFunction,
    /// Shift βⁱ
    pub beta: [GridFunction; 3],
}

impl MetricStorage {
    const GAMMA_NAMES: [&'static str; 6] = ["gxx", "gxy", "gxz", "gyy", "gyz", "gzz"];
    const BETA_NAMES: [&'static str; 3] = ["betax", "betay", "betaz"];

    /// Fill every vertex (ghosts included) from a function of position.
    pub fn from_fn<F>(layout: &GridLayout, f: F) -> Self
    where
        F: Fn([f64; 3]) -> AdmMetric,
    {
        let component = |name: &str, n: usize| {
            GridFunction::from_fn(name, Centering::Vertex, layout, |_, x| f(x).to_array()[n])
        };
        Self {
            alpha: component("alp", 0),
            beta: std::array::from_fn(|a| component(Self::BETA_NAMES[a], 1 + a)),
            gamma: std::array::from_fn(|c| component(Self::GAMMA_NAMES[c], 4 + c)),
        }
    }

    /// The same metric at every vertex.
    pub fn uniform(layout: &GridLayout, adm: AdmMetric) -> Self {
        Self::from_fn(layout, |_| adm)
    }

    /// Minkowski spacetime.
    pub fn flat(layout: &GridLayout) -> Self {
        Self::uniform(layout, AdmMetric::flat())
    }

    /// Borrow as [`MetricFields`].
    pub fn fields(&self) -> MetricFields<'_> {
        MetricFields {
            gamma: self.gamma.each_ref(),
            alpha: &self.alpha,
            beta: self.beta.each_ref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-12;

    /// Metric whose components are linear in position.
    fn linear_metric(x: [f64; 3]) -> AdmMetric {
        AdmMetric::new(
            1.0 + 0.1 * x[0] + 0.2 * x[1] + 0.3 * x[2],
            [0.01 * x[0], 0.02 * x[1], 0.03 * x[2]],
            Metric3::new(
                2.0 + 0.1 * x[1],
                0.05 * x[2],
                0.0,
                1.5 + 0.1 * x[0],
                0.02 * x[0],
                1.0 + 0.1 * x[2],
            ),
        )
    }

    #[test]
    fn test_uniform_metric_is_preserved() {
        let layout = GridLayout::uniform(4, 1);
        let adm = AdmMetric::new(0.7, [0.1, -0.2, 0.3], Metric3::diagonal(2.0, 3.0, 4.0));
        let storage = MetricStorage::uniform(&layout, adm);

        for dir in Direction::ALL {
            let avg = face_average(&storage.fields(), GridIndex::new(2, 2, 2), dir);
            for (a, b) in avg.to_array().iter().zip(adm.to_array()) {
                assert!((a - b).abs() < TOL);
            }
        }
    }

    #[test]
    fn test_linear_metric_gives_face_centre_value() {
        // For linear data the 4-point average is exact at the face centre.
        let layout = GridLayout::uniform(4, 2);
        let storage = MetricStorage::from_fn(&layout, linear_metric);
        let face = GridIndex::new(3, 4, 2);

        for dir in Direction::ALL {
            let avg = face_average(&storage.fields(), face, dir);
            let x = layout.coordinates(Centering::Face(dir), face);
            let exact = linear_metric(x);
            for (a, b) in avg.to_array().iter().zip(exact.to_array()) {
                assert!((a - b).abs() < TOL, "dir {dir}: {a} vs {b}");
            }
        }
    }

    #[test]
    fn test_no_averaging_along_sweep_direction() {
        // Lapse varying only along x: an x-face must see the vertex value,
        // not the mean with its x-neighbour.
        let layout = GridLayout::uniform(4, 1);
        let storage = MetricStorage::from_fn(&layout, |x| {
            AdmMetric::new(1.0 + x[0], [0.0; 3], Metric3::identity())
        });
        let face = GridIndex::new(2, 2, 2);

        let avg_x = face_average(&storage.fields(), face, Direction::X);
        assert!((avg_x.alpha - 2.0).abs() < TOL);

        let avg_y = face_average(&storage.fields(), face, Direction::Y);
        assert!((avg_y.alpha - 2.5).abs() < TOL);
    }

    #[test]
    fn test_check_rejects_cell_centred_metric() {
        let layout = GridLayout::uniform(4, 1);
        let mut storage = MetricStorage::flat(&layout);
        storage.alpha = GridFunction::constant("alp", Centering::Cell, &layout, 1.0);

        assert!(storage.fields().check(&layout).is_err());
        assert!(MetricStorage::flat(&layout).fields().check(&layout).is_ok());
    }
}
