//! Shaped sample buffers.
//!
//! A [`Field`] is a flat, row-major buffer tagged with an n-dimensional
//! shape. The mapper consumes a `Field<Complex64>` and produces a
//! `Field<[f64; 3]>` of the same shape; the trailing RGB channel axis is
//! carried by the element type, see [`Field::rgb_shape`].
//!
//! # Example
//!
//! ```rust
//! use domcol_core::Field;
//!
//! let f = Field::new(vec![2, 3], vec![0.0_f64; 6]).unwrap();
//! assert_eq!(f.shape(), &[2, 3]);
//! assert_eq!(f.len(), 6);
//!
//! let doubled = f.map(|v| v * 2.0);
//! assert_eq!(doubled.shape(), &[2, 3]);
//! ```

use crate::{Error, Result};

/// Flat buffer with an n-dimensional shape.
#[derive(Debug, Clone, PartialEq)]
pub struct Field<T> {
    shape: Vec<usize>,
    data: Vec<T>,
}

impl<T> Field<T> {
    /// Creates a field from a shape and row-major data.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ShapeMismatch`] if `data.len()` differs from the
    /// product of `shape`. An empty shape describes a single scalar.
    pub fn new(shape: Vec<usize>, data: Vec<T>) -> Result<Self> {
        let expected = shape.iter().product::<usize>();
        if expected != data.len() {
            return Err(Error::ShapeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self { shape, data })
    }

    /// Shape of the field.
    #[inline]
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the field holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Row-major element slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Element at a multi-dimensional index, or `None` if out of bounds.
    pub fn get(&self, index: &[usize]) -> Option<&T> {
        if index.len() != self.shape.len() {
            return None;
        }
        let mut flat = 0;
        for (&i, &n) in index.iter().zip(&self.shape) {
            if i >= n {
                return None;
            }
            flat = flat * n + i;
        }
        self.data.get(flat)
    }

    /// Applies `f` to every element, keeping the shape.
    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Field<U> {
        Field {
            shape: self.shape.clone(),
            data: self.data.iter().map(f).collect(),
        }
    }

    /// Replaces the data of this field with an equally long buffer.
    pub fn with_data<U>(&self, data: Vec<U>) -> Result<Field<U>> {
        Field::new(self.shape.clone(), data)
    }
}

impl Field<[f64; 3]> {
    /// Shape including the trailing channel axis: `shape + [3]`.
    pub fn rgb_shape(&self) -> Vec<usize> {
        let mut s = self.shape.clone();
        s.push(3);
        s
    }

    /// Flattens to `shape + [3]` row-major floats.
    pub fn to_flat(&self) -> Vec<f64> {
        self.data.iter().flatten().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_mismatch() {
        let err = Field::new(vec![2, 2], vec![1, 2, 3]).unwrap_err();
        assert_eq!(err, Error::ShapeMismatch { expected: 4, actual: 3 });
    }

    #[test]
    fn test_scalar_shape() {
        let f = Field::new(vec![], vec![7]).unwrap();
        assert_eq!(f.get(&[]), Some(&7));
    }

    #[test]
    fn test_row_major_get() {
        let f = Field::new(vec![2, 3], (0..6).collect()).unwrap();
        assert_eq!(f.get(&[0, 2]), Some(&2));
        assert_eq!(f.get(&[1, 0]), Some(&3));
        assert_eq!(f.get(&[2, 0]), None);
        assert_eq!(f.get(&[0]), None);
    }

    #[test]
    fn test_rgb_shape() {
        let f = Field::new(vec![1, 2], vec![[0.0, 0.5, 1.0], [1.0, 1.0, 1.0]]).unwrap();
        assert_eq!(f.rgb_shape(), vec![1, 2, 3]);
        assert_eq!(f.to_flat(), vec![0.0, 0.5, 1.0, 1.0, 1.0, 1.0]);
    }
}
