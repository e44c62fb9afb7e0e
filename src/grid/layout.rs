//! Grid layout: extents, ghost zones, interior iteration and coordinates.

use std::fmt;
use std::ops::Range;

use crate::types::{Direction, GridIndex};

/// Staggering of a grid function.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Centering {
    /// Cell centres
    Cell,
    /// Cell corners
    Vertex,
    /// Faces normal to the given axis
    Face(Direction),
    /// Edges parallel to the given axis
    Edge(Direction),
}

impl Centering {
    /// Staggering per axis: 1 = cell-centred, 0 = vertex-centred.
    pub fn staggering(self) -> [usize; 3] {
        match self {
            Centering::Cell => [1, 1, 1],
            Centering::Vertex => [0, 0, 0],
            Centering::Face(dir) => {
                let mut s = [1, 1, 1];
                s[dir.index()] = 0;
                s
            }
            Centering::Edge(dir) => {
                let mut s = [0, 0, 0];
                s[dir.index()] = 1;
                s
            }
        }
    }
}

impl fmt::Display for Centering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Centering::Cell => f.write_str("cell"),
            Centering::Vertex => f.write_str("vertex"),
            Centering::Face(dir) => write!(f, "{dir}-face"),
            Centering::Edge(dir) => write!(f, "{dir}-edge"),
        }
    }
}

/// Layout of a single structured patch.
///
/// Along each axis the patch has `cells` interior cells surrounded by
/// `ghosts` ghost cells on both sides. Vertex index `ghosts` sits at the
/// physical coordinate `origin`.
///
/// # Example
///
/// ```
/// use grmhd_flux::grid::{Centering, GridLayout};
/// use grmhd_flux::types::Direction;
///
/// let layout = GridLayout::new([8, 4, 4], [2, 2, 2]);
///
/// assert_eq!(layout.shape(Centering::Cell), [12, 8, 8]);
/// assert_eq!(layout.shape(Centering::Vertex), [13, 9, 9]);
/// assert_eq!(layout.shape(Centering::Face(Direction::X)), [13, 8, 8]);
///
/// // 9 x-faces per row, 4 x 4 rows
/// assert_eq!(layout.n_interior(Centering::Face(Direction::X)), 9 * 4 * 4);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct GridLayout {
    cells: [usize; 3],
    ghosts: [usize; 3],
    origin: [f64; 3],
    spacing: [f64; 3],
}

impl GridLayout {
    /// Create a layout with unit spacing and origin at zero.
    pub fn new(cells: [usize; 3], ghosts: [usize; 3]) -> Self {
        Self {
            cells,
            ghosts,
            origin: [0.0; 3],
            spacing: [1.0; 3],
        }
    }

    /// Cubic layout with the same cell count and ghost width on every axis.
    pub fn uniform(cells: usize, ghosts: usize) -> Self {
        Self::new([cells; 3], [ghosts; 3])
    }

    /// Set the physical coordinate of the first interior vertex.
    pub fn with_origin(mut self, origin: [f64; 3]) -> Self {
        self.origin = origin;
        self
    }

    /// Set the grid spacing.
    pub fn with_spacing(mut self, spacing: [f64; 3]) -> Self {
        self.spacing = spacing;
        self
    }

    /// Map the interior cells onto `[lower, upper]` along every axis.
    pub fn with_bounds(self, lower: [f64; 3], upper: [f64; 3]) -> Self {
        let cells = self.cells;
        let spacing = std::array::from_fn(|a| (upper[a] - lower[a]) / cells[a] as f64);
        self.with_origin(lower).with_spacing(spacing)
    }

    /// Number of interior cells per axis.
    pub fn cells(&self) -> [usize; 3] {
        self.cells
    }

    /// Ghost width per axis.
    pub fn ghosts(&self) -> [usize; 3] {
        self.ghosts
    }

    /// Ghost width along `dir`.
    pub fn ghost_zones(&self, dir: Direction) -> usize {
        self.ghosts[dir.index()]
    }

    /// Grid spacing per axis.
    pub fn spacing(&self) -> [f64; 3] {
        self.spacing
    }

    /// Number of stored points per axis, ghosts included.
    pub fn shape(&self, centering: Centering) -> [usize; 3] {
        let s = centering.staggering();
        std::array::from_fn(|a| self.cells[a] + 2 * self.ghosts[a] + 1 - s[a])
    }

    /// Total number of stored points.
    pub fn len(&self, centering: Centering) -> usize {
        self.shape(centering).iter().product()
    }

    /// Range of interior indices along `axis`.
    ///
    /// For vertex-staggered axes this includes both boundary vertices.
    pub fn interior_range(&self, centering: Centering, axis: Direction) -> Range<usize> {
        let a = axis.index();
        let s = centering.staggering()[a];
        let start = self.ghosts[a];
        start..start + self.cells[a] + 1 - s
    }

    /// Number of interior points.
    pub fn n_interior(&self, centering: Centering) -> usize {
        Direction::ALL
            .iter()
            .map(|&d| self.interior_range(centering, d).len())
            .product()
    }

    /// Iterate over interior points, x fastest.
    pub fn interior_points(&self, centering: Centering) -> impl Iterator<Item = GridIndex> + '_ {
        let ri = self.interior_range(centering, Direction::X);
        let rj = self.interior_range(centering, Direction::Y);
        let rk = self.interior_range(centering, Direction::Z);
        rk.flat_map(move |k| {
            let ri = ri.clone();
            rj.clone()
                .flat_map(move |j| ri.clone().map(move |i| GridIndex::new(i, j, k)))
        })
    }

    /// Whether `idx` addresses a stored point of this centering.
    pub fn contains(&self, centering: Centering, idx: GridIndex) -> bool {
        let shape = self.shape(centering);
        idx.i < shape[0] && idx.j < shape[1] && idx.k < shape[2]
    }

    /// Physical coordinates of a point.
    pub fn coordinates(&self, centering: Centering, idx: GridIndex) -> [f64; 3] {
        let s = centering.staggering();
        let ijk = idx.to_array();
        std::array::from_fn(|a| {
            let offset = ijk[a] as f64 - self.ghosts[a] as f64 + 0.5 * s[a] as f64;
            self.origin[a] + offset * self.spacing[a]
        })
    }
}
