//! Directional flux sweeps over a grid patch.
//!
//! A sweep along d visits every interior face normal to d, reconstructs
//! the primitives from both adjacent cells, averages the metric onto the
//! face and stores the Lax-Friedrichs flux of the eight conserved
//! variables:
//!
//! ```text
//!   cell I−e_d  |  cell I
//!        minus  |  plus
//!            face I
//! ```
//!
//! All preconditions (ghost width, centering, shapes, Γ) are checked
//! before the first face is written, so an `Err` leaves the output
//! untouched.

use crate::equations::EquationOfState;
use crate::error::{FluxError, Result};
use crate::flux::{FaceFlux, compute_face_flux};
use crate::grid::{Centering, GridLayout};
use crate::metric::{MetricFields, face_average};
use crate::reconstruction::{ReconstructionMethod, Reconstructor, StencilReconstructor};
use crate::types::{Direction, GridIndex};

use super::{FluxConfig, FluxFields, PrimitiveFields, SweepReport};

/// Everything a flux sweep reads.
#[derive(Clone, Copy, Debug)]
pub struct FluxInputs<'a> {
    /// Patch layout shared by all fields
    pub layout: &'a GridLayout,
    /// Cell-centred primitives
    pub primitives: PrimitiveFields<'a>,
    /// Vertex-centred ADM variables
    pub metric: MetricFields<'a>,
}

impl<'a> FluxInputs<'a> {
    pub fn new(
        layout: &'a GridLayout,
        primitives: PrimitiveFields<'a>,
        metric: MetricFields<'a>,
    ) -> Self {
        Self {
            layout,
            primitives,
            metric,
        }
    }

    /// Check the inputs for a sweep along `dir` with `method`.
    pub fn check(&self, method: ReconstructionMethod, dir: Direction) -> Result<()> {
        let required = method.required_ghost_zones();
        let available = self.layout.ghost_zones(dir);
        if available < required {
            return Err(FluxError::insufficient_ghosts(
                format!("{method} reconstruction"),
                dir,
                required,
                available,
            ));
        }
        self.primitives.check(self.layout)?;
        self.metric.check(self.layout)
    }

    #[inline]
    fn face_flux<E, R>(
        &self,
        face: GridIndex,
        method: ReconstructionMethod,
        dir: Direction,
        eos: &E,
        reconstructor: &R,
    ) -> FaceFlux
    where
        E: EquationOfState + ?Sized,
        R: Reconstructor + ?Sized,
    {
        let prims = self.primitives.reconstruct(reconstructor, face, method, dir);
        let adm = face_average(&self.metric, face, dir);
        compute_face_flux(&prims, &adm, dir, eos)
    }
}

fn check_sweep(
    inputs: &FluxInputs<'_>,
    method: ReconstructionMethod,
    dir: Direction,
    out: &FluxFields,
) -> Result<()> {
    inputs.check(method, dir)?;
    out.check(dir, inputs.layout)
}

fn log_report(report: &SweepReport) {
    log::debug!("{report}");
    if let Some(face) = report.last_non_finite {
        log::warn!(
            "{}-sweep produced {} non-finite face fluxes, last at {face}",
            report.direction,
            report.non_finite
        );
    }
}

/// Flux sweep with an explicit equation of state and reconstructor.
///
/// # Arguments
/// * `inputs` - Primitive and metric fields
/// * `method` - Reconstruction scheme
/// * `dir` - Sweep direction
/// * `eos` - Equation of state
/// * `reconstructor` - Reconstruction operator
/// * `out` - Flux fields on the faces normal to `dir`
///
/// # Returns
/// A [`SweepReport`] counting faces with non-finite output.
pub fn compute_fluxes_with<E, R>(
    inputs: &FluxInputs<'_>,
    method: ReconstructionMethod,
    dir: Direction,
    eos: &E,
    reconstructor: &R,
    out: &mut FluxFields,
) -> Result<SweepReport>
where
    E: EquationOfState + ?Sized,
    R: Reconstructor + ?Sized,
{
    check_sweep(inputs, method, dir, out)?;

    let mut report = SweepReport::new(dir);
    for face in inputs.layout.interior_points(Centering::Face(dir)) {
        let result = inputs.face_flux(face, method, dir, eos, reconstructor);
        report.record(face, result.is_finite());
        out.set(face, &result.flux);
    }

    log_report(&report);
    Ok(report)
}

/// Flux sweep along `dir` with the ideal gas and stencils from `config`.
///
/// # Example
/// ```
/// use grmhd_flux::equations::PrimitiveState;
/// use grmhd_flux::grid::GridLayout;
/// use grmhd_flux::metric::MetricStorage;
/// use grmhd_flux::solver::{FluxConfig, FluxFields, FluxInputs, PrimitiveStorage, compute_fluxes};
/// use grmhd_flux::types::Direction;
///
/// let layout = GridLayout::uniform(4, 1);
/// let prims = PrimitiveStorage::uniform(&layout, PrimitiveState::at_rest(1.0, 1.5));
/// let metric = MetricStorage::flat(&layout);
/// let inputs = FluxInputs::new(&layout, prims.fields(), metric.fields());
///
/// let mut out = FluxFields::new(&layout, Direction::X);
/// let report = compute_fluxes(&inputs, &FluxConfig::default(), Direction::X, &mut out).unwrap();
///
/// assert!(report.is_clean());
/// assert_eq!(report.faces, 5 * 4 * 4);
/// ```
pub fn compute_fluxes(
    inputs: &FluxInputs<'_>,
    config: &FluxConfig,
    dir: Direction,
    out: &mut FluxFields,
) -> Result<SweepReport> {
    let eos = config.eos()?;
    compute_fluxes_with(
        inputs,
        config.reconstruction,
        dir,
        &eos,
        &StencilReconstructor,
        out,
    )
}

/// Fluxes and reports of all three directions.
#[derive(Clone, Debug)]
pub struct SweepOutput {
    /// Flux fields indexed by [`Direction::index`]
    pub fluxes: [FluxFields; 3],
    /// Reports indexed by [`Direction::index`]
    pub reports: [SweepReport; 3],
}

impl SweepOutput {
    /// Flux fields of one direction.
    pub fn fluxes(&self, dir: Direction) -> &FluxFields {
        &self.fluxes[dir.index()]
    }

    /// Total number of faces with non-finite output.
    pub fn non_finite(&self) -> usize {
        self.reports.iter().map(|r| r.non_finite).sum()
    }
}

/// Sweep all three directions into freshly allocated flux fields.
///
/// Every direction is validated before any flux is computed.
pub fn compute_all_fluxes(inputs: &FluxInputs<'_>, config: &FluxConfig) -> Result<SweepOutput> {
    let eos = config.eos()?;
    for dir in Direction::ALL {
        inputs.check(config.reconstruction, dir)?;
    }

    let mut fluxes = Direction::ALL.map(|dir| FluxFields::new(inputs.layout, dir));
    let mut reports = Direction::ALL.map(SweepReport::new);
    for (dir, (out, report)) in Direction::ALL
        .into_iter()
        .zip(fluxes.iter_mut().zip(reports.iter_mut()))
    {
        *report = compute_fluxes_with(
            inputs,
            config.reconstruction,
            dir,
            &eos,
            &StencilReconstructor,
            out,
        )?;
    }

    Ok(SweepOutput { fluxes, reports })
}

/// Parallel version of [`compute_fluxes_with`].
///
/// Faces are evaluated concurrently and written serially, so the output
/// and the report are identical to the serial sweep.
#[cfg(feature = "parallel")]
pub fn compute_fluxes_parallel_with<E, R>(
    inputs: &FluxInputs<'_>,
    method: ReconstructionMethod,
    dir: Direction,
    eos: &E,
    reconstructor: &R,
    out: &mut FluxFields,
) -> Result<SweepReport>
where
    E: EquationOfState + ?Sized,
    R: Reconstructor + ?Sized,
{
    use rayon::prelude::*;

    check_sweep(inputs, method, dir, out)?;

    let faces: Vec<GridIndex> = inputs
        .layout
        .interior_points(Centering::Face(dir))
        .collect();
    let results: Vec<FaceFlux> = faces
        .par_iter()
        .map(|&face| inputs.face_flux(face, method, dir, eos, reconstructor))
        .collect();

    let mut report = SweepReport::new(dir);
    for (&face, result) in faces.iter().zip(&results) {
        report.record(face, result.is_finite());
        out.set(face, &result.flux);
    }

    log_report(&report);
    Ok(report)
}

/// Parallel version of [`compute_fluxes`].
#[cfg(feature = "parallel")]
pub fn compute_fluxes_parallel(
    inputs: &FluxInputs<'_>,
    config: &FluxConfig,
    dir: Direction,
    out: &mut FluxFields,
) -> Result<SweepReport> {
    let eos = config.eos()?;
    compute_fluxes_parallel_with(
        inputs,
        config.reconstruction,
        dir,
        &eos,
        &StencilReconstructor,
        out,
    )
}
