//! # grmhd-flux
//!
//! Numerical fluxes for ideal general-relativistic magnetohydrodynamics on
//! structured, vertex/cell-staggered grids.
//!
//! This crate provides the building blocks of a finite-volume flux
//! computation in the Valencia formulation:
//! - Grid layout with ghost zones and staggered field storage
//! - Spatial metric algebra and face averaging of the ADM variables
//! - Primitive-to-conserved conversion and analytic GRMHD fluxes
//! - Reconstruction (Godunov, minmod, monotonized central, PPM)
//! - Fast magnetosonic speed estimates and the local Lax-Friedrichs flux
//! - Directional flux sweeps and vector potential auxiliary fields
//!
//! # Example
//!
//! ```
//! use grmhd_flux::{
//!     Direction, FluxConfig, FluxFields, FluxInputs, GridLayout, MetricStorage,
//!     PrimitiveState, PrimitiveStorage, compute_fluxes,
//! };
//!
//! let layout = GridLayout::uniform(8, 2);
//! let prims = PrimitiveStorage::uniform(&layout, PrimitiveState::at_rest(1.0, 1.5));
//! let metric = MetricStorage::flat(&layout);
//! let inputs = FluxInputs::new(&layout, prims.fields(), metric.fields());
//!
//! let config = FluxConfig::from_params("minmod", 5.0 / 3.0).unwrap();
//! let mut fluxes = FluxFields::new(&layout, Direction::Y);
//! let report = compute_fluxes(&inputs, &config, Direction::Y, &mut fluxes).unwrap();
//! assert!(report.is_clean());
//! ```

pub mod equations;
pub mod error;
pub mod flux;
pub mod grid;
pub mod metric;
pub mod reconstruction;
pub mod solver;
pub mod types;

// Re-export main types for convenience
pub use equations::{ConservedState, EquationOfState, IdealGas, PrimitiveState};
pub use error::{FluxError, Result};
pub use flux::{FaceFlux, compute_face_flux};
pub use grid::{Centering, GridFunction, GridLayout};
pub use metric::{AdmMetric, Metric3, MetricFields, MetricGeometry, MetricStorage};
pub use reconstruction::{ReconstructionMethod, Reconstructor, StencilReconstructor};
pub use solver::{
    FluxConfig, FluxFields, FluxInputs, PrimitiveFields, PrimitiveStorage, SweepOutput,
    SweepReport, VectorPotentialFields, VectorPotentialInputs, compute_all_fluxes,
    compute_fluxes, compute_vector_potential_aux,
};
pub use types::{Direction, FacePair, GridIndex};

#[cfg(feature = "parallel")]
pub use solver::{compute_fluxes_parallel, compute_vector_potential_aux_parallel};
