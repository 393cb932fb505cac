//! Sparse feature vectors.

use serde::{Deserialize, Serialize};

/// A sparse vector stored as parallel, index-sorted `indices`/`values`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SparseVector {
    indices: Vec<usize>,
    values: Vec<f64>,
}

impl SparseVector {
    /// Build a sparse vector from `(index, value)` pairs sorted by index.
    ///
    /// Zero values are dropped.
    pub fn from_sorted_pairs<I: IntoIterator<Item = (usize, f64)>>(pairs: I) -> Self {
        let mut indices = Vec::new();
        let mut values = Vec::new();
        for (index, value) in pairs {
            debug_assert!(indices.last().is_none_or(|&last| last < index));
            if value != 0.0 {
                indices.push(index);
                values.push(value);
            }
        }
        SparseVector { indices, values }
    }

    /// Number of stored (non-zero) entries.
    pub fn nnz(&self) -> usize {
        self.indices.len()
    }

    /// Whether the vector has no non-zero entry.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Iterate over `(index, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.indices.iter().copied().zip(self.values.iter().copied())
    }

    /// Value at `index`, zero when not stored.
    pub fn get(&self, index: usize) -> f64 {
        self.indices
            .binary_search(&index)
            .map(|pos| self.values[pos])
            .unwrap_or(0.0)
    }

    /// Dot product with a dense vector. Indices past its end count as zero.
    pub fn dot(&self, dense: &[f64]) -> f64 {
        self.iter()
            .filter_map(|(i, v)| dense.get(i).map(|w| w * v))
            .sum()
    }

    /// Squared Euclidean norm.
    pub fn norm_squared(&self) -> f64 {
        self.values.iter().map(|v| v * v).sum()
    }

    /// `dense += alpha * self`.
    pub fn axpy(&self, alpha: f64, dense: &mut [f64]) {
        for (i, v) in self.iter() {
            if let Some(slot) = dense.get_mut(i) {
                *slot += alpha * v;
            }
        }
    }

    /// Scale every stored value by `factor`.
    pub fn scale(&mut self, factor: f64) {
        for v in &mut self.values {
            *v *= factor;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sparse_ops() {
        let v = SparseVector::from_sorted_pairs(vec![(0, 1.0), (2, 0.0), (3, 2.0)]);
        assert_eq!(v.nnz(), 2);
        assert_eq!(v.get(3), 2.0);
        assert_eq!(v.get(2), 0.0);
        assert_eq!(v.dot(&[1.0, 5.0, 5.0, 0.5]), 2.0);
        assert_eq!(v.norm_squared(), 5.0);

        let mut dense = vec![0.0; 4];
        v.axpy(2.0, &mut dense);
        assert_eq!(dense, vec![2.0, 0.0, 0.0, 4.0]);
    }

    #[test]
    fn test_scale() {
        let mut v = SparseVector::from_sorted_pairs(vec![(1, 3.0), (4, 4.0)]);
        v.scale(0.2);
        assert!((v.norm_squared() - 1.0).abs() < 1e-12);
    }
}
