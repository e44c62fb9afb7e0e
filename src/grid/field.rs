//! Named scalar grid functions.

use crate::error::{FluxError, Result};
use crate::types::GridIndex;

use super::{Centering, GridLayout};

/// A named scalar field sampled on every stored point of one centering.
///
/// Storage is x-fastest: `data[i + nx * (j + ny * k)]`.
#[derive(Clone, Debug, PartialEq)]
pub struct GridFunction {
    name: String,
    centering: Centering,
    shape: [usize; 3],
    /// Point values, ghosts included
    pub data: Vec<f64>,
}

impl GridFunction {
    /// Create a zero-initialized field.
    pub fn new(name: impl Into<String>, centering: Centering, layout: &GridLayout) -> Self {
        let shape = layout.shape(centering);
        Self {
            name: name.into(),
            centering,
            shape,
            data: vec![0.0; shape.iter().product()],
        }
    }

    /// Create a field with every point (ghosts included) set to `value`.
    pub fn constant(
        name: impl Into<String>,
        centering: Centering,
        layout: &GridLayout,
        value: f64,
    ) -> Self {
        let mut field = Self::new(name, centering, layout);
        field.fill(value);
        field
    }

    /// Create a field from a function of index and physical coordinates.
    ///
    /// Ghost points are filled too, so the function is evaluated outside
    /// the physical domain.
    pub fn from_fn<F>(
        name: impl Into<String>,
        centering: Centering,
        layout: &GridLayout,
        mut f: F,
    ) -> Self
    where
        F: FnMut(GridIndex, [f64; 3]) -> f64,
    {
        let mut field = Self::new(name, centering, layout);
        let [nx, ny, nz] = field.shape;
        for k in 0..nz {
            for j in 0..ny {
                for i in 0..nx {
                    let idx = GridIndex::new(i, j, k);
                    let value = f(idx, layout.coordinates(centering, idx));
                    field.set(idx, value);
                }
            }
        }
        field
    }

    /// Field name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Field centering.
    pub fn centering(&self) -> Centering {
        self.centering
    }

    /// Number of stored points per axis.
    pub fn shape(&self) -> [usize; 3] {
        self.shape
    }

    #[inline(always)]
    fn offset(&self, idx: GridIndex) -> usize {
        idx.i + self.shape[0] * (idx.j + self.shape[1] * idx.k)
    }

    /// Value at a grid point.
    ///
    /// # Panics
    /// If `idx` lies outside the stored points.
    #[inline(always)]
    pub fn get(&self, idx: GridIndex) -> f64 {
        self.data[self.offset(idx)]
    }

    /// Set the value at a grid point.
    #[inline(always)]
    pub fn set(&mut self, idx: GridIndex, value: f64) {
        let offset = self.offset(idx);
        self.data[offset] = value;
    }

    /// Set every point to `value`.
    pub fn fill(&mut self, value: f64) {
        self.data.fill(value);
    }

    /// Maximum absolute value over all stored points.
    pub fn max_abs(&self) -> f64 {
        self.data.iter().fold(0.0_f64, |acc, &x| acc.max(x.abs()))
    }

    /// Maximum absolute value over the interior points of `layout`.
    pub fn max_abs_interior(&self, layout: &GridLayout) -> f64 {
        layout
            .interior_points(self.centering)
            .fold(0.0_f64, |acc, idx| acc.max(self.get(idx).abs()))
    }

    /// Check that this field has the expected centering and matches `layout`.
    pub fn check(&self, expected: Centering, layout: &GridLayout) -> Result<()> {
        if self.centering != expected {
            return Err(FluxError::centering_mismatch(
                &self.name,
                expected,
                self.centering,
            ));
        }
        let expected_shape = layout.shape(expected);
        if self.shape != expected_shape {
            return Err(FluxError::ShapeMismatch {
                field: self.name.clone(),
                expected: expected_shape,
                actual: self.shape,
            });
        }
        Ok(())
    }
}
