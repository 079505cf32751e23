// matrix.rs - Symmetric distance matrix with ordered labels

use std::convert::Infallible;
use rayon::prelude::*;
use serde::Serialize;

/// Square, symmetric, zero-diagonal distance table.
///
/// `labels[i]` names row and column `i`. The only way to build one is
/// [`DistanceMatrix::from_upper_triangle`], which evaluates each `i < j`
/// pair once and mirrors it into `[j][i]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistanceMatrix<T> {
    labels: Vec<String>,
    values: Vec<Vec<T>>,
}

impl<T> DistanceMatrix<T>
where
    T: Copy + Default + Send,
{
    /// Build a matrix by evaluating `distance(i, j)` for every `i < j`.
    ///
    /// Pairs are evaluated in parallel; the first error in row-major pair
    /// order is not guaranteed, so callers needing a deterministic error
    /// should validate before building. Any error discards the whole matrix.
    pub fn from_upper_triangle<F, E>(labels: Vec<String>, distance: F) -> Result<Self, E>
    where
        F: Fn(usize, usize) -> Result<T, E> + Sync,
        E: Send,
    {
        let n = labels.len();
        let distance = &distance;

        let upper_triangle: Vec<(usize, usize, T)> = (0..n)
            .into_par_iter()
            .flat_map(|i| {
                (i + 1..n)
                    .into_par_iter()
                    .map(move |j| distance(i, j).map(|d| (i, j, d)))
            })
            .collect::<Result<Vec<_>, E>>()?;

        // Diagonal keeps its default (zero) value
        let mut values = vec![vec![T::default(); n]; n];
        for (i, j, d) in upper_triangle {
            values[i][j] = d;
            values[j][i] = d;
        }

        Ok(Self { labels, values })
    }

    /// Infallible variant of [`DistanceMatrix::from_upper_triangle`]
    pub fn from_fn<F>(labels: Vec<String>, distance: F) -> Self
    where
        F: Fn(usize, usize) -> T + Sync,
    {
        match Self::from_upper_triangle(labels, |i, j| Ok::<T, Infallible>(distance(i, j))) {
            Ok(matrix) => matrix,
            Err(never) => match never {},
        }
    }
}

impl<T: Copy> DistanceMatrix<T> {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn get(&self, i: usize, j: usize) -> Option<T> {
        self.values.get(i)?.get(j).copied()
    }

    /// Distance between two sequences looked up by identifier
    pub fn get_by_label(&self, first: &str, second: &str) -> Option<T> {
        let i = self.labels.iter().position(|l| l == first)?;
        let j = self.labels.iter().position(|l| l == second)?;
        self.get(i, j)
    }

    pub fn rows(&self) -> &[Vec<T>] {
        &self.values
    }

    pub fn row(&self, i: usize) -> Option<&[T]> {
        self.values.get(i).map(Vec::as_slice)
    }

    /// Upper triangle without the diagonal, flattened row-major (`N(N-1)/2` values)
    pub fn condensed(&self) -> Vec<T> {
        let n = self.len();
        let mut condensed = Vec::with_capacity(n * n.saturating_sub(1) / 2);
        for i in 0..n {
            condensed.extend_from_slice(&self.values[i][i + 1..]);
        }
        condensed
    }

    /// `(matrix, labels)` pair as consumed by clustering tools
    pub fn into_parts(self) -> (Vec<Vec<T>>, Vec<String>) {
        (self.values, self.labels)
    }
}

impl<T: Copy + PartialOrd> DistanceMatrix<T> {
    /// Largest off-diagonal distance, `None` below two sequences
    pub fn max_value(&self) -> Option<T> {
        self.condensed()
            .into_iter()
            .fold(None, |acc, d| match acc {
                Some(m) if m >= d => Some(m),
                _ => Some(d),
            })
    }
}
