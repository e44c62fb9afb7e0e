//! Grid-level drivers.
//!
//! - [`compute_fluxes`]: Lax-Friedrichs fluxes on every interior face of one direction
//! - [`compute_all_fluxes`]: the same for all three directions
//! - [`compute_vector_potential_aux`]: auxiliary fields of the vector potential
//!
//! With the `parallel` feature, `*_parallel` variants distribute the
//! pointwise work with rayon and produce identical output.

mod config;
mod diagnostics;
mod fields;
mod sweep;
mod vector_potential;

pub use config::FluxConfig;
pub use diagnostics::SweepReport;
pub use fields::{FluxFields, PrimitiveFields, PrimitiveStorage};
pub use sweep::{
    FluxInputs, SweepOutput, compute_all_fluxes, compute_fluxes, compute_fluxes_with,
};
pub use vector_potential::{
    AuxPoint, VectorPotentialFields, VectorPotentialInputs, compute_vector_potential_aux,
    edge_to_vertex, vector_potential_aux_point,
};

#[cfg(feature = "parallel")]
pub use sweep::{compute_fluxes_parallel, compute_fluxes_parallel_with};
#[cfg(feature = "parallel")]
pub use vector_potential::compute_vector_potential_aux_parallel;
