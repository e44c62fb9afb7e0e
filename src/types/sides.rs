//! Minus/plus face pairs with named fields.
//!
//! Every reconstructed or derived quantity at a face exists twice: once
//! from the cell on the negative side of the face ("minus", index 0) and
//! once from the cell on the positive side ("plus", index 1). Using named
//! fields avoids the `[0]`/`[1]` index conventions.

use std::fmt;

/// Values on the minus (left) and plus (right) side of a face.
///
/// # Example
///
/// ```
/// use grmhd_flux::types::FacePair;
///
/// let eps = FacePair::new(1.5_f64, 1.5);
/// let rho = FacePair::new(2.0, 1.0);
/// let press = rho.zip(eps, |r, e| r * e * (5.0 / 3.0 - 1.0));
///
/// assert!((press.minus - 2.0).abs() < 1e-12);
/// assert!((press.plus - 1.0).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FacePair<T> {
    /// Value reconstructed from the cell on the negative side
    pub minus: T,
    /// Value reconstructed from the cell on the positive side
    pub plus: T,
}

impl<T> FacePair<T> {
    /// Create a pair from minus and plus values.
    #[inline(always)]
    pub const fn new(minus: T, plus: T) -> Self {
        Self { minus, plus }
    }

    /// Same value on both sides.
    pub fn uniform(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            minus: value.clone(),
            plus: value,
        }
    }

    /// Map a function over both sides.
    #[inline]
    pub fn map<U, F>(self, mut f: F) -> FacePair<U>
    where
        F: FnMut(T) -> U,
    {
        FacePair {
            minus: f(self.minus),
            plus: f(self.plus),
        }
    }

    /// Combine two pairs side by side.
    #[inline]
    pub fn zip<U, V, F>(self, other: FacePair<U>, mut f: F) -> FacePair<V>
    where
        F: FnMut(T, U) -> V,
    {
        FacePair {
            minus: f(self.minus, other.minus),
            plus: f(self.plus, other.plus),
        }
    }

    /// Borrow both sides.
    pub fn as_ref(&self) -> FacePair<&T> {
        FacePair {
            minus: &self.minus,
            plus: &self.plus,
        }
    }

    /// Exchange the minus and plus sides.
    pub fn swap(self) -> Self {
        Self {
            minus: self.plus,
            plus: self.minus,
        }
    }

    /// Get a side by index (0 = minus, 1 = plus).
    pub fn get(&self, index: usize) -> Option<&T> {
        match index {
            0 => Some(&self.minus),
            1 => Some(&self.plus),
            _ => None,
        }
    }

    /// Convert to array [minus, plus].
    pub fn to_array(self) -> [T; 2] {
        [self.minus, self.plus]
    }

    /// Create from array [minus, plus].
    pub fn from_array([minus, plus]: [T; 2]) -> Self {
        Self { minus, plus }
    }

    /// Iterate over sides in order: minus, plus.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        [&self.minus, &self.plus].into_iter()
    }
}

impl FacePair<f64> {
    /// Jump across the face, plus − minus.
    #[inline(always)]
    pub fn jump(&self) -> f64 {
        self.plus - self.minus
    }

    /// Sum of both sides.
    #[inline(always)]
    pub fn sum(&self) -> f64 {
        self.minus + self.plus
    }
}

impl<T: fmt::Display> fmt::Display for FacePair<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(-: {}, +: {})", self.minus, self.plus)
    }
}

impl<T> From<[T; 2]> for FacePair<T> {
    fn from(arr: [T; 2]) -> Self {
        Self::from_array(arr)
    }
}
