//! Structured grid layout and field storage.
//!
//! A single rectangular patch with ghost zones. Every scalar field is
//! sampled with one of four centerings:
//!
//! | Centering   | staggering (x, y, z)            |
//! |-------------|---------------------------------|
//! | `Cell`      | (1, 1, 1)                       |
//! | `Vertex`    | (0, 0, 0)                       |
//! | `Face(d)`   | (1, 1, 1) with component d = 0  |
//! | `Edge(d)`   | (0, 0, 0) with component d = 1  |
//!
//! A staggering of 1 means the samples sit at cell centres along that axis,
//! 0 means they sit on cell boundaries. Cell `i` lies between vertices `i`
//! and `i + 1`, so all centerings share one index space.

mod field;
mod layout;

pub use field::GridFunction;
pub use layout::{Centering, GridLayout};
