//! Sweep direction.

use std::fmt;

/// Spatial axis along which a flux sweep is performed.
///
/// All direction-dependent terms of the flux formulas are written with
/// [`Direction::indicator`], so a single implementation serves all three
/// sweeps.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Direction {
    /// x-axis (index 0)
    X,
    /// y-axis (index 1)
    Y,
    /// z-axis (index 2)
    Z,
}

impl Direction {
    /// All directions in sweep order.
    pub const ALL: [Direction; 3] = [Direction::X, Direction::Y, Direction::Z];

    /// Axis index (0, 1, 2).
    #[inline(always)]
    pub const fn index(self) -> usize {
        match self {
            Direction::X => 0,
            Direction::Y => 1,
            Direction::Z => 2,
        }
    }

    /// Direction from an axis index.
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Direction::X),
            1 => Some(Direction::Y),
            2 => Some(Direction::Z),
            _ => None,
        }
    }

    /// 1.0 if `axis` is this direction, 0.0 otherwise.
    #[inline(always)]
    pub fn indicator(self, axis: usize) -> f64 {
        if self.index() == axis { 1.0 } else { 0.0 }
    }

    /// Cyclic successor x → y → z → x.
    pub const fn next(self) -> Self {
        match self {
            Direction::X => Direction::Y,
            Direction::Y => Direction::Z,
            Direction::Z => Direction::X,
        }
    }

    /// The two axes orthogonal to this one, in cyclic order.
    pub const fn orthogonal(self) -> [Direction; 2] {
        [self.next(), self.next().next()]
    }

    /// Unit offset vector along this axis.
    pub const fn unit(self) -> [isize; 3] {
        match self {
            Direction::X => [1, 0, 0],
            Direction::Y => [0, 1, 0],
            Direction::Z => [0, 0, 1],
        }
    }

    /// Lower-case axis name.
    pub const fn name(self) -> &'static str {
        match self {
            Direction::X => "x",
            Direction::Y => "y",
            Direction::Z => "z",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<Direction> for usize {
    #[inline]
    fn from(dir: Direction) -> usize {
        dir.index()
    }
}
