//! Per-sweep diagnostics.

use std::fmt;

use crate::types::{Direction, GridIndex};

/// Summary of one directional sweep.
///
/// Faces whose flux or characteristic speed is not finite are counted but
/// not repaired; the caller decides whether to abort, floor or continue.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SweepReport {
    /// Sweep direction
    pub direction: Direction,
    /// Number of faces computed
    pub faces: usize,
    /// Number of faces with non-finite output
    pub non_finite: usize,
    /// Last face (in iteration order) with non-finite output
    pub last_non_finite: Option<GridIndex>,
}

impl SweepReport {
    /// Empty report for a sweep along `direction`.
    pub fn new(direction: Direction) -> Self {
        Self {
            direction,
            faces: 0,
            non_finite: 0,
            last_non_finite: None,
        }
    }

    /// Record one computed face.
    #[inline]
    pub fn record(&mut self, face: GridIndex, finite: bool) {
        self.faces += 1;
        if !finite {
            self.non_finite += 1;
            self.last_non_finite = Some(face);
        }
    }

    /// Whether every face produced finite output.
    pub fn is_clean(&self) -> bool {
        self.non_finite == 0
    }
}

impl fmt::Display for SweepReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-sweep: {} faces", self.direction, self.faces)?;
        if let Some(face) = self.last_non_finite {
            write!(f, ", {} non-finite (last at {face})", self.non_finite)?;
        }
        Ok(())
    }
}
