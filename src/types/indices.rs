//! Structured grid index.

use std::fmt;

use super::Direction;

/// Integer index of a point on a structured 3D grid.
///
/// The same index space is shared by every centering: cell `i` lies
/// between vertices `i` and `i + 1` along each axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GridIndex {
    /// Index along x
    pub i: usize,
    /// Index along y
    pub j: usize,
    /// Index along z
    pub k: usize,
}

impl GridIndex {
    /// Create a new index.
    #[inline(always)]
    pub const fn new(i: usize, j: usize, k: usize) -> Self {
        Self { i, j, k }
    }

    /// Create from array [i, j, k].
    #[inline(always)]
    pub const fn from_array([i, j, k]: [usize; 3]) -> Self {
        Self { i, j, k }
    }

    /// Convert to array [i, j, k].
    #[inline(always)]
    pub const fn to_array(self) -> [usize; 3] {
        [self.i, self.j, self.k]
    }

    /// Component along `dir`.
    #[inline(always)]
    pub const fn component(self, dir: Direction) -> usize {
        match dir {
            Direction::X => self.i,
            Direction::Y => self.j,
            Direction::Z => self.k,
        }
    }

    /// Offset by `delta` unit vectors along `dir`.
    ///
    /// The caller is responsible for staying inside the grid; sweeps check
    /// their stencil width against the ghost zones before iterating.
    #[inline(always)]
    pub const fn shifted(self, dir: Direction, delta: isize) -> Self {
        match dir {
            Direction::X => Self::new(self.i.wrapping_add_signed(delta), self.j, self.k),
            Direction::Y => Self::new(self.i, self.j.wrapping_add_signed(delta), self.k),
            Direction::Z => Self::new(self.i, self.j, self.k.wrapping_add_signed(delta)),
        }
    }

    /// Offset by an arbitrary integer vector.
    #[inline(always)]
    pub const fn offset(self, delta: [isize; 3]) -> Self {
        Self::new(
            self.i.wrapping_add_signed(delta[0]),
            self.j.wrapping_add_signed(delta[1]),
            self.k.wrapping_add_signed(delta[2]),
        )
    }
}

impl fmt::Display for GridIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.i, self.j, self.k)
    }
}

impl From<[usize; 3]> for GridIndex {
    #[inline]
    fn from(arr: [usize; 3]) -> Self {
        Self::from_array(arr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shifted() {
        let p = GridIndex::new(3, 4, 5);
        assert_eq!(p.shifted(Direction::X, -1), GridIndex::new(2, 4, 5));
        assert_eq!(p.shifted(Direction::Y, 2), GridIndex::new(3, 6, 5));
        assert_eq!(p.shifted(Direction::Z, 0), p);
        assert_eq!(p.shifted(Direction::Z, 1).shifted(Direction::Z, -1), p);
    }

    #[test]
    fn test_offset_matches_unit_vectors() {
        let p = GridIndex::new(3, 4, 5);
        for dir in Direction::ALL {
            assert_eq!(p.offset(dir.unit()), p.shifted(dir, 1));
        }
    }

    #[test]
    fn test_component() {
        let p = GridIndex::new(7, 8, 9);
        assert_eq!(p.component(Direction::X), 7);
        assert_eq!(p.component(Direction::Y), 8);
        assert_eq!(p.component(Direction::Z), 9);
        assert_eq!(p.to_string(), "(7, 8, 9)");
    }
}
