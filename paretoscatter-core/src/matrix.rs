//! Point matrix: `n` samples of `m` objective values

use crate::error::{Error, Result};
use ndarray::{Array2, ArrayView1, Axis};
use serde::{Deserialize, Serialize};

/// An `n x m` matrix of points, one row per sample and one column per objective.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointMatrix {
    data: Array2<f64>,
}

impl PointMatrix {
    /// Wrap an existing array
    pub fn new(data: Array2<f64>) -> Self {
        Self { data }
    }

    /// Build a matrix from equally sized rows.
    ///
    /// Fails with [`Error::ShapeMismatch`] when the rows are ragged.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self> {
        let ncols = rows.first().map_or(0, Vec::len);
        if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != ncols) {
            return Err(Error::ShapeMismatch(format!(
                "row {} has {} values, expected {}",
                i,
                row.len(),
                ncols
            )));
        }

        let flat: Vec<f64> = rows.iter().flatten().copied().collect();
        let data = Array2::from_shape_vec((rows.len(), ncols), flat)?;
        Ok(Self { data })
    }

    /// Number of points (rows)
    pub fn nrows(&self) -> usize {
        self.data.nrows()
    }

    /// Number of dimensions (columns)
    pub fn ncols(&self) -> usize {
        self.data.ncols()
    }

    /// Check if the matrix holds no points
    pub fn is_empty(&self) -> bool {
        self.data.nrows() == 0
    }

    /// Borrow column `index`.
    ///
    /// Fails with [`Error::IndexOutOfBounds`] instead of panicking when the
    /// column does not exist.
    pub fn column(&self, index: usize) -> Result<ArrayView1<'_, f64>> {
        if index >= self.ncols() {
            return Err(Error::IndexOutOfBounds {
                index,
                len: self.ncols(),
            });
        }
        Ok(self.data.index_axis(Axis(1), index))
    }

    /// Copy column `index` into a contiguous vector
    pub fn column_vec(&self, index: usize) -> Result<Vec<f64>> {
        Ok(self.column(index)?.to_vec())
    }

    /// Access the underlying array
    pub fn as_array(&self) -> &Array2<f64> {
        &self.data
    }

    pub fn into_inner(self) -> Array2<f64> {
        self.data
    }
}

impl From<Array2<f64>> for PointMatrix {
    fn from(data: Array2<f64>) -> Self {
        Self::new(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_from_rows() {
        let m = PointMatrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]]).unwrap();
        assert_eq!(m.nrows(), 3);
        assert_eq!(m.ncols(), 2);
        assert_eq!(m.column_vec(1).unwrap(), vec![2.0, 4.0, 6.0]);
    }

    #[test]
    fn test_from_rows_ragged() {
        let result = PointMatrix::from_rows(&[vec![1.0, 2.0], vec![3.0]]);
        assert!(matches!(result, Err(Error::ShapeMismatch(_))));
    }

    #[test]
    fn test_from_rows_empty() {
        let m = PointMatrix::from_rows(&[]).unwrap();
        assert!(m.is_empty());
        assert_eq!(m.ncols(), 0);
    }

    #[test]
    fn test_column_out_of_bounds() {
        let m = PointMatrix::new(array![[0.0, 1.0, 2.0]]);
        match m.column(3) {
            Err(Error::IndexOutOfBounds { index, len }) => {
                assert_eq!(index, 3);
                assert_eq!(len, 3);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
