//! The [`ScalarField`] grid container and the [`VelocityField`] pair.

use crate::error::FieldError;

/// A two-dimensional grid of `f64` values in row-major order.
///
/// The fundamental container of the library: the level-set function, each
/// velocity component, the normal-speed coefficient, and every derivative
/// grid are all `ScalarField`s. Coordinates are `(row, col)` with
/// `0 <= row < rows` and `0 <= col < cols`; x runs along columns, y along
/// rows.
///
/// # Examples
///
/// ```
/// use isofront_core::ScalarField;
///
/// let ramp = ScalarField::from_fn(4, 4, |_r, c| c as f64).unwrap();
/// assert_eq!(ramp.shape(), (4, 4));
/// assert_eq!(ramp.get(2, 3), 3.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ScalarField {
    rows: u32,
    cols: u32,
    data: Vec<f64>,
}

impl ScalarField {
    /// Maximum dimension size: indices use `i32` internally, so each axis must fit.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    fn check_dims(rows: u32, cols: u32) -> Result<(), FieldError> {
        if rows == 0 || cols == 0 {
            return Err(FieldError::EmptyField);
        }
        if rows > Self::MAX_DIM {
            return Err(FieldError::DimensionTooLarge {
                name: "rows",
                value: rows,
                max: Self::MAX_DIM,
            });
        }
        if cols > Self::MAX_DIM {
            return Err(FieldError::DimensionTooLarge {
                name: "cols",
                value: cols,
                max: Self::MAX_DIM,
            });
        }
        Ok(())
    }

    /// Create a field of zeros.
    pub fn zeros(rows: u32, cols: u32) -> Result<Self, FieldError> {
        Self::filled(rows, cols, 0.0)
    }

    /// Create a field with every cell set to `value`.
    pub fn filled(rows: u32, cols: u32, value: f64) -> Result<Self, FieldError> {
        Self::check_dims(rows, cols)?;
        Ok(Self {
            rows,
            cols,
            data: vec![value; rows as usize * cols as usize],
        })
    }

    /// Create a field from a generator called with `(row, col)` for every cell.
    pub fn from_fn(
        rows: u32,
        cols: u32,
        mut f: impl FnMut(u32, u32) -> f64,
    ) -> Result<Self, FieldError> {
        Self::check_dims(rows, cols)?;
        let mut data = Vec::with_capacity(rows as usize * cols as usize);
        for r in 0..rows {
            for c in 0..cols {
                data.push(f(r, c));
            }
        }
        Ok(Self { rows, cols, data })
    }

    /// Create a field from row-major backing data.
    ///
    /// Returns `Err(FieldError::LengthMismatch)` if `data.len() != rows * cols`.
    pub fn from_vec(rows: u32, cols: u32, data: Vec<f64>) -> Result<Self, FieldError> {
        Self::check_dims(rows, cols)?;
        let expected = rows as usize * cols as usize;
        if data.len() != expected {
            return Err(FieldError::LengthMismatch {
                expected,
                got: data.len(),
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// Number of rows.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Shape as `(rows, cols)`.
    pub fn shape(&self) -> (u32, u32) {
        (self.rows, self.cols)
    }

    /// Total cell count.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always `false` — construction rejects empty grids.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Flat row-major index of `(row, col)`.
    #[inline]
    pub fn idx(&self, row: u32, col: u32) -> usize {
        row as usize * self.cols as usize + col as usize
    }

    /// Value at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is out of bounds.
    #[inline]
    pub fn get(&self, row: u32, col: u32) -> f64 {
        self.data[self.idx(row, col)]
    }

    /// Set the value at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is out of bounds.
    #[inline]
    pub fn set(&mut self, row: u32, col: u32, value: f64) {
        let i = self.idx(row, col);
        self.data[i] = value;
    }

    /// Row-major view of the backing data.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Mutable row-major view of the backing data.
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Whether `other` has the same `(rows, cols)` shape.
    pub fn same_shape(&self, other: &Self) -> bool {
        self.rows == other.rows && self.cols == other.cols
    }

    /// Maximum absolute cell value. Returns 0.0 for an all-zero field.
    pub fn max_abs(&self) -> f64 {
        self.data.iter().fold(0.0_f64, |m, &v| m.max(v.abs()))
    }
}

/// An advection velocity field: same-shape x- and y-component grids.
///
/// Read-only to the evolution core. The x-component acts along columns,
/// the y-component along rows.
#[derive(Clone, Debug, PartialEq)]
pub struct VelocityField {
    x: ScalarField,
    y: ScalarField,
}

impl VelocityField {
    /// Pair two component grids, rejecting a shape mismatch.
    pub fn new(x: ScalarField, y: ScalarField) -> Result<Self, FieldError> {
        if !x.same_shape(&y) {
            return Err(FieldError::ShapeMismatch {
                what: "velocity y-component",
                expected: x.shape(),
                got: y.shape(),
            });
        }
        Ok(Self { x, y })
    }

    /// An all-zero velocity field (no advection).
    pub fn zero(rows: u32, cols: u32) -> Result<Self, FieldError> {
        Ok(Self {
            x: ScalarField::zeros(rows, cols)?,
            y: ScalarField::zeros(rows, cols)?,
        })
    }

    /// The x-component grid.
    pub fn x(&self) -> &ScalarField {
        &self.x
    }

    /// The y-component grid.
    pub fn y(&self) -> &ScalarField {
        &self.y
    }

    /// Shape as `(rows, cols)`.
    pub fn shape(&self) -> (u32, u32) {
        self.x.shape()
    }
}
