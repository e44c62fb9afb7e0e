//! Auxiliary fields for the vector potential evolution.
//!
//! With the magnetic field evolved through its vector potential Aᵢ (on
//! cell edges) and the generalized Lorenz gauge scalar Ψ (on vertices),
//! the right-hand sides need, at every vertex,
//!
//! ```text
//! Fⁱ  = α √γ γ^{ij} Aⱼ
//! Fβⁱ = βⁱ Ψ
//! G   = α Ψ / √γ − βⁱ Aᵢ
//! ```
//!
//! The edge-centred Aᵢ is first averaged to vertices along its own edge
//! direction, which needs one ghost zone on every axis.

use crate::error::{FluxError, Result};
use crate::grid::{Centering, GridFunction, GridLayout};
use crate::metric::{AdmMetric, MetricFields, MetricGeometry, dot};
use crate::types::{Direction, GridIndex};

/// Inputs of the auxiliary kernel.
#[derive(Clone, Copy, Debug)]
pub struct VectorPotentialInputs<'a> {
    pub layout: &'a GridLayout,
    /// Aₓ, Aᵧ, A_z on x-, y- and z-edges
    pub potential: [&'a GridFunction; 3],
    /// Gauge scalar Ψ on vertices
    pub psi: &'a GridFunction,
    /// Vertex-centred ADM variables
    pub metric: MetricFields<'a>,
}

impl<'a> VectorPotentialInputs<'a> {
    /// Number of ghost zones the edge-to-vertex average reads into.
    pub const REQUIRED_GHOST_ZONES: usize = 1;

    pub fn new(
        layout: &'a GridLayout,
        potential: [&'a GridFunction; 3],
        psi: &'a GridFunction,
        metric: MetricFields<'a>,
    ) -> Self {
        Self {
            layout,
            potential,
            psi,
            metric,
        }
    }

    /// Check ghost widths and staggering.
    pub fn check(&self) -> Result<()> {
        for dir in Direction::ALL {
            let available = self.layout.ghost_zones(dir);
            if available < Self::REQUIRED_GHOST_ZONES {
                return Err(FluxError::insufficient_ghosts(
                    "vector potential averaging",
                    dir,
                    Self::REQUIRED_GHOST_ZONES,
                    available,
                ));
            }
        }
        for (dir, field) in Direction::ALL.into_iter().zip(self.potential) {
            field.check(Centering::Edge(dir), self.layout)?;
        }
        self.psi.check(Centering::Vertex, self.layout)?;
        self.metric.check(self.layout)
    }

    #[inline]
    fn aux_at(&self, vertex: GridIndex) -> AuxPoint {
        let a_low = Direction::ALL.map(|dir| edge_to_vertex(self.potential[dir.index()], vertex, dir));
        vector_potential_aux_point(&self.metric.at_vertex(vertex), a_low, self.psi.get(vertex))
    }
}

/// Average an edge-centred component onto the vertex `vertex`.
///
/// The two edges parallel to `dir` that meet at the vertex are
/// `vertex − e_dir` and `vertex`.
#[inline]
pub fn edge_to_vertex(field: &GridFunction, vertex: GridIndex, dir: Direction) -> f64 {
    0.5 * (field.get(vertex.shifted(dir, -1)) + field.get(vertex))
}

/// Auxiliary values at one vertex.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AuxPoint {
    /// Fⁱ = α √γ Aⁱ
    pub f: [f64; 3],
    /// Fβⁱ = βⁱ Ψ
    pub fbeta: [f64; 3],
    /// G = α Ψ / √γ − βⁱ Aᵢ
    pub g: f64,
}

/// Evaluate the auxiliary quantities from vertex values.
pub fn vector_potential_aux_point(adm: &AdmMetric, a_low: [f64; 3], psi: f64) -> AuxPoint {
    let geom = MetricGeometry::new(*adm);
    let alpha = geom.alpha();
    let a_up = geom.inverse.contract(a_low);
    let alpha_sqrt_g = alpha * geom.sqrt_det;

    AuxPoint {
        f: a_up.map(|a| alpha_sqrt_g * a),
        fbeta: adm.beta.map(|b| b * psi),
        g: alpha * psi / geom.sqrt_det - dot(adm.beta, a_low),
    }
}

/// The seven vertex-centred auxiliary output fields.
#[derive(Clone, Debug)]
pub struct VectorPotentialFields {
    /// Fˣ, Fʸ, Fᶻ
    pub f: [GridFunction; 3],
    /// Fβˣ, Fβʸ, Fβᶻ
    pub fbeta: [GridFunction; 3],
    /// G
    pub g: GridFunction,
}

impl VectorPotentialFields {
    pub fn new(layout: &GridLayout) -> Self {
        let field = |name: String| GridFunction::new(name, Centering::Vertex, layout);
        Self {
            f: Direction::ALL.map(|dir| field(format!("F{dir}"))),
            fbeta: Direction::ALL.map(|dir| field(format!("Fbeta{dir}"))),
            g: field("G".to_string()),
        }
    }

    /// Values at a vertex.
    pub fn get(&self, idx: GridIndex) -> AuxPoint {
        AuxPoint {
            f: std::array::from_fn(|a| self.f[a].get(idx)),
            fbeta: std::array::from_fn(|a| self.fbeta[a].get(idx)),
            g: self.g.get(idx),
        }
    }

    /// Store values at a vertex.
    pub fn set(&mut self, idx: GridIndex, point: &AuxPoint) {
        for a in 0..3 {
            self.f[a].set(idx, point.f[a]);
            self.fbeta[a].set(idx, point.fbeta[a]);
        }
        self.g.set(idx, point.g);
    }

    /// Check that every field is vertex-centred on `layout`.
    pub fn check(&self, layout: &GridLayout) -> Result<()> {
        self.f
            .iter()
            .chain(&self.fbeta)
            .chain(std::iter::once(&self.g))
            .try_for_each(|field| field.check(Centering::Vertex, layout))
    }
}

/// Fill the auxiliary fields at every interior vertex.
pub fn compute_vector_potential_aux(
    inputs: &VectorPotentialInputs<'_>,
    out: &mut VectorPotentialFields,
) -> Result<()> {
    inputs.check()?;
    out.check(inputs.layout)?;

    let mut points = 0;
    for vertex in inputs.layout.interior_points(Centering::Vertex) {
        out.set(vertex, &inputs.aux_at(vertex));
        points += 1;
    }
    log::debug!("Vector potential auxiliaries computed at {points} vertices");
    Ok(())
}

/// Parallel version of [`compute_vector_potential_aux`].
#[cfg(feature = "parallel")]
pub fn compute_vector_potential_aux_parallel(
    inputs: &VectorPotentialInputs<'_>,
    out: &mut VectorPotentialFields,
) -> Result<()> {
    use rayon::prelude::*;

    inputs.check()?;
    out.check(inputs.layout)?;

    let vertices: Vec<GridIndex> = inputs
        .layout
        .interior_points(Centering::Vertex)
        .collect();
    let results: Vec<AuxPoint> = vertices.par_iter().map(|&v| inputs.aux_at(v)).collect();
    for (&vertex, point) in vertices.iter().zip(&results) {
        out.set(vertex, point);
    }
    log::debug!(
        "Vector potential auxiliaries computed at {} vertices",
        vertices.len()
    );
    Ok(())
}
