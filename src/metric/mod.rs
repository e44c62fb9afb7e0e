//! 3+1 spacetime metric quantities.
//!
//! The spacetime enters the flux computation through the ADM variables:
//! lapse α, shift βⁱ and the spatial metric γᵢⱼ. All of them live on grid
//! vertices and are averaged onto faces before use.
//!
//! - [`Metric3`]: symmetric spatial metric with closed-form determinant and inverse
//! - [`AdmMetric`]: lapse, shift and spatial metric at one point
//! - [`MetricGeometry`]: an [`AdmMetric`] together with √γ and γ^{ij}
//! - [`MetricFields`]: the ten vertex-centred input fields
//! - [`face_average`]: second-order face values from vertex data

mod face_average;
mod spatial;

pub use face_average::{MetricFields, MetricStorage, face_average};
pub use spatial::{AdmMetric, Metric3, MetricGeometry};

pub(crate) use spatial::dot;
