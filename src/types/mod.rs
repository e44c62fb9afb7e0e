//! Strongly-typed domain types for safer APIs.
//!
//! This module provides small value types that make the direction-generic
//! flux code self-documenting:
//!
//! - [`Direction`]: the sweep axis, with indicator arithmetic for axis terms
//! - [`FacePair`]: the minus (left) / plus (right) values at a face
//! - [`GridIndex`]: a 3D integer grid index with unit-vector offsets
//!
//! # Example
//!
//! ```
//! use grmhd_flux::types::{Direction, FacePair, GridIndex};
//!
//! let face = GridIndex::new(4, 2, 2);
//! let left_cell = face.shifted(Direction::X, -1);
//! assert_eq!(left_cell, GridIndex::new(3, 2, 2));
//!
//! let rho = FacePair::new(2.0, 1.0);
//! assert_eq!(rho.jump(), -1.0);
//! assert_eq!(Direction::Z.next(), Direction::X);
//! ```

mod direction;
mod indices;
mod sides;

pub use direction::Direction;
pub use indices::GridIndex;
pub use sides::FacePair;
