//! Error types for flux computations.
//!
//! Only configuration and precondition failures are reported as errors.
//! The per-face kernel itself never fails: unphysical reconstructed states
//! propagate as IEEE not-a-number and are counted in the
//! [`SweepReport`](crate::solver::SweepReport) of the sweep that produced them.

use thiserror::Error;

use crate::grid::Centering;
use crate::types::Direction;

/// Errors that can occur while configuring or running a flux sweep.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FluxError {
    /// Reconstruction method name not recognized.
    #[error(
        "Unknown reconstruction method: \"{0}\" (expected one of Godunov, minmod, monocentral, ppm)"
    )]
    UnknownReconstruction(String),

    /// Adiabatic index must be finite and strictly greater than one.
    #[error("Invalid adiabatic index: {0} (must be finite and > 1)")]
    InvalidAdiabaticIndex(f64),

    /// The grid does not carry enough ghost zones for the requested stencil.
    #[error(
        "Insufficient ghost zones along {direction}: {operation} needs {required}, grid has {available}"
    )]
    InsufficientGhostZones {
        operation: String,
        direction: Direction,
        required: usize,
        available: usize,
    },

    /// A field was passed with the wrong staggering.
    #[error("Field '{field}' is {actual}-centred, expected {expected}-centred")]
    CenteringMismatch {
        field: String,
        expected: Centering,
        actual: Centering,
    },

    /// A field does not match the grid layout.
    #[error("Field '{field}' has shape {actual:?}, expected {expected:?}")]
    ShapeMismatch {
        field: String,
        expected: [usize; 3],
        actual: [usize; 3],
    },

    /// Spatial metric is not positive definite.
    #[error("Non-positive spatial metric determinant: {0}")]
    NonPositiveDeterminant(f64),

    /// Primitive state outside the physically admissible region.
    #[error("Unphysical primitive state: {0}")]
    UnphysicalState(String),
}

impl FluxError {
    /// Create an insufficient ghost zone error.
    pub fn insufficient_ghosts(
        operation: impl Into<String>,
        direction: Direction,
        required: usize,
        available: usize,
    ) -> Self {
        Self::InsufficientGhostZones {
            operation: operation.into(),
            direction,
            required,
            available,
        }
    }

    /// Create a centering mismatch error.
    pub fn centering_mismatch(field: impl Into<String>, expected: Centering, actual: Centering) -> Self {
        Self::CenteringMismatch {
            field: field.into(),
            expected,
            actual,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, FluxError>;
