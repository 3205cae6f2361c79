//! Dense integer distance matrix.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A dense n×n matrix of non-negative integer edge weights in row-major order.
///
/// Entry `(i, j)` is the cost of travelling directly from `i` to `j`. The
/// matrix is validated on construction and read-only afterwards.
///
/// # Examples
///
/// ```
/// use u_tour::distance::DistanceMatrix;
///
/// let dm = DistanceMatrix::from_rows(&[
///     vec![0, 29, 20],
///     vec![29, 0, 15],
///     vec![20, 15, 0],
/// ])
/// .expect("valid matrix");
/// assert_eq!(dm.get(0, 2), 20);
/// assert_eq!(dm.size(), 3);
/// assert!(dm.is_symmetric());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<RawWeight>>", into = "Vec<Vec<u64>>")]
pub struct DistanceMatrix {
    data: Vec<u64>,
    size: usize,
}

impl DistanceMatrix {
    /// Builds a matrix from explicit rows.
    ///
    /// Fails if there are no rows, if any row length differs from the number
    /// of rows, or if any weight is negative.
    pub fn from_rows(rows: &[Vec<i64>]) -> Result<Self> {
        Self::collect_rows(rows, |&w| RawWeight::Signed(w))
    }

    fn collect_rows<T>(rows: &[Vec<T>], raw: impl Fn(&T) -> RawWeight) -> Result<Self> {
        let size = rows.len();
        if size == 0 {
            return Err(Error::EmptyMatrix);
        }

        let mut data = Vec::with_capacity(size * size);
        for (row, values) in rows.iter().enumerate() {
            if values.len() != size {
                return Err(Error::NotSquare {
                    row,
                    expected: size,
                    found: values.len(),
                });
            }
            for (col, value) in values.iter().enumerate() {
                data.push(raw(value).to_weight(row, col)?);
            }
        }
        Ok(Self { data, size })
    }

    /// Creates a matrix from row-major data holding `size * size` weights.
    pub fn from_data(size: usize, data: Vec<u64>) -> Result<Self> {
        if size == 0 {
            return Err(Error::EmptyMatrix);
        }
        let expected = size.checked_mul(size).ok_or(Error::DimensionMismatch {
            expected: usize::MAX,
            found: data.len(),
        })?;
        if data.len() != expected {
            return Err(Error::DimensionMismatch {
                expected,
                found: data.len(),
            });
        }
        Ok(Self { data, size })
    }

    /// Generates a symmetric matrix with a zero diagonal and off-diagonal
    /// weights drawn uniformly from `1..=max_weight`.
    ///
    /// `size` and `max_weight` are clamped to at least 1. Fails with
    /// [`Error::TooLarge`] if `size * size` weights cannot be allocated.
    pub fn random_symmetric<R: Rng>(size: usize, max_weight: u64, rng: &mut R) -> Result<Self> {
        let size = size.max(1);
        let max_weight = max_weight.max(1);
        let cells = size.checked_mul(size).ok_or(Error::TooLarge { size })?;
        let mut data = Vec::new();
        data.try_reserve_exact(cells)
            .map_err(|_| Error::TooLarge { size })?;
        data.resize(cells, 0);

        for i in 0..size {
            for j in (i + 1)..size {
                let w = rng.random_range(1..=max_weight);
                data[i * size + j] = w;
                data[j * size + i] = w;
            }
        }
        Ok(Self { data, size })
    }

    /// Returns the weight of the edge `from → to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> u64 {
        self.data[from * self.size + to]
    }

    /// Number of vertices.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if `(i, j) == (j, i)` for every pair.
    pub fn is_symmetric(&self) -> bool {
        (0..self.size).all(|i| ((i + 1)..self.size).all(|j| self.get(i, j) == self.get(j, i)))
    }

    /// Returns the unvisited vertex closest to `from`, with its distance.
    ///
    /// Vertices are scanned in ascending index order and only a strictly
    /// smaller weight replaces the current pick, so ties go to the lowest
    /// index. Returns `None` when every vertex is visited.
    ///
    /// # Panics
    ///
    /// Panics if `from` is out of bounds.
    pub fn nearest_unvisited(&self, from: usize, visited: &[bool]) -> Option<(usize, u64)> {
        let row = &self.data[from * self.size..(from + 1) * self.size];
        let mut best: Option<(usize, u64)> = None;
        for (j, (&d, &seen)) in row.iter().zip(visited).enumerate() {
            if seen {
                continue;
            }
            match best {
                Some((_, min)) if d >= min => {}
                _ => best = Some((j, d)),
            }
        }
        best
    }

    /// Sums the weights along consecutive vertex pairs of `path`.
    ///
    /// A closed circuit must repeat its first vertex at the end for the
    /// closing edge to be counted.
    pub fn circuit_weight(&self, path: &[usize]) -> Result<u64> {
        if let Some(&vertex) = path.iter().find(|&&v| v >= self.size) {
            return Err(Error::VertexOutOfRange {
                vertex,
                size: self.size,
            });
        }
        path.windows(2).try_fold(0u64, |acc, w| {
            acc.checked_add(self.get(w[0], w[1]))
                .ok_or(Error::WeightOverflow)
        })
    }

    /// Returns the matrix as a vector of rows.
    pub fn to_rows(&self) -> Vec<Vec<u64>> {
        self.data.chunks(self.size).map(<[u64]>::to_vec).collect()
    }
}

/// A weight as it appears in serialized input: non-negative values up to
/// `u64::MAX`, or a signed value that is rejected if negative.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(untagged)]
enum RawWeight {
    Unsigned(u64),
    Signed(i64),
}

impl RawWeight {
    fn to_weight(self, from: usize, to: usize) -> Result<u64> {
        match self {
            Self::Unsigned(w) => Ok(w),
            Self::Signed(weight) => {
                u64::try_from(weight).map_err(|_| Error::NegativeWeight { from, to, weight })
            }
        }
    }
}

impl TryFrom<Vec<Vec<RawWeight>>> for DistanceMatrix {
    type Error = Error;

    fn try_from(rows: Vec<Vec<RawWeight>>) -> Result<Self> {
        Self::collect_rows(&rows, |&w| w)
    }
}

impl From<DistanceMatrix> for Vec<Vec<u64>> {
    fn from(dm: DistanceMatrix) -> Self {
        dm.to_rows()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sample() -> DistanceMatrix {
        DistanceMatrix::from_rows(&[
            vec![0, 29, 20, 21],
            vec![29, 0, 15, 17],
            vec![20, 15, 0, 28],
            vec![21, 17, 28, 0],
        ])
        .expect("valid")
    }

    #[test]
    fn test_from_rows() {
        let dm = sample();
        assert_eq!(dm.size(), 4);
        assert_eq!(dm.get(0, 1), 29);
        assert_eq!(dm.get(3, 2), 28);
        assert_eq!(dm.get(2, 2), 0);
    }

    #[test]
    fn test_from_rows_empty() {
        assert_eq!(DistanceMatrix::from_rows(&[]), Err(Error::EmptyMatrix));
    }

    #[test]
    fn test_from_rows_ragged() {
        let err = DistanceMatrix::from_rows(&[vec![0, 1], vec![1]]).unwrap_err();
        assert_eq!(
            err,
            Error::NotSquare {
                row: 1,
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn test_from_rows_wide() {
        let err = DistanceMatrix::from_rows(&[vec![0, 1, 2], vec![1, 0, 3]]).unwrap_err();
        assert!(matches!(err, Error::NotSquare { row: 0, .. }));
    }

    #[test]
    fn test_from_rows_negative() {
        let err = DistanceMatrix::from_rows(&[vec![0, -4], vec![4, 0]]).unwrap_err();
        assert_eq!(
            err,
            Error::NegativeWeight {
                from: 0,
                to: 1,
                weight: -4
            }
        );
    }

    #[test]
    fn test_from_data() {
        let dm = DistanceMatrix::from_data(2, vec![0, 5, 5, 0]).expect("valid");
        assert_eq!(dm.get(0, 1), 5);
        assert_eq!(dm.get(1, 0), 5);
    }

    #[test]
    fn test_from_data_invalid_size() {
        assert_eq!(
            DistanceMatrix::from_data(2, vec![0, 1, 2]),
            Err(Error::DimensionMismatch {
                expected: 4,
                found: 3
            })
        );
        assert_eq!(DistanceMatrix::from_data(0, vec![]), Err(Error::EmptyMatrix));
    }

    #[test]
    fn test_asymmetric_matrix() {
        let dm = DistanceMatrix::from_data(2, vec![0, 10, 15, 0]).expect("valid");
        assert!(!dm.is_symmetric());
        assert!(sample().is_symmetric());
    }

    #[test]
    fn test_nearest_unvisited() {
        let dm = sample();
        let mut visited = vec![true, false, false, false];
        assert_eq!(dm.nearest_unvisited(0, &visited), Some((2, 20)));
        visited[2] = true;
        assert_eq!(dm.nearest_unvisited(0, &visited), Some((3, 21)));
        assert_eq!(dm.nearest_unvisited(0, &[true; 4]), None);
    }

    #[test]
    fn test_nearest_unvisited_tie_takes_lowest_index() {
        let dm = DistanceMatrix::from_rows(&[
            vec![0, 7, 7, 7],
            vec![7, 0, 1, 1],
            vec![7, 1, 0, 1],
            vec![7, 1, 1, 0],
        ])
        .expect("valid");
        assert_eq!(dm.nearest_unvisited(0, &[true, false, false, false]), Some((1, 7)));
        assert_eq!(dm.nearest_unvisited(1, &[true, true, false, false]), Some((2, 1)));
    }

    #[test]
    fn test_circuit_weight() {
        let dm = sample();
        assert_eq!(dm.circuit_weight(&[0, 2, 1, 3, 0]), Ok(73));
        assert_eq!(dm.circuit_weight(&[0]), Ok(0));
        assert_eq!(
            dm.circuit_weight(&[0, 4]),
            Err(Error::VertexOutOfRange { vertex: 4, size: 4 })
        );
    }

    #[test]
    fn test_circuit_weight_overflow() {
        let dm = DistanceMatrix::from_data(2, vec![0, u64::MAX, 1, 0]).expect("valid");
        assert_eq!(dm.circuit_weight(&[0, 1, 0]), Err(Error::WeightOverflow));
    }

    #[test]
    fn test_random_symmetric() {
        let mut rng = StdRng::seed_from_u64(42);
        let dm = DistanceMatrix::random_symmetric(6, 50, &mut rng).expect("small");
        assert_eq!(dm.size(), 6);
        assert!(dm.is_symmetric());
        for i in 0..6 {
            assert_eq!(dm.get(i, i), 0);
            for j in 0..6 {
                if i != j {
                    assert!((1..=50).contains(&dm.get(i, j)));
                }
            }
        }
    }

    #[test]
    fn test_serde_validates() {
        let dm: DistanceMatrix = serde_json::from_str("[[0,3],[3,0]]").expect("valid json");
        assert_eq!(dm.get(1, 0), 3);
        assert_eq!(serde_json::to_string(&dm).expect("serialize"), "[[0,3],[3,0]]");
        assert!(serde_json::from_str::<DistanceMatrix>("[[0,-3],[3,0]]").is_err());
        assert!(serde_json::from_str::<DistanceMatrix>("[[0,3]]").is_err());
        assert!(serde_json::from_str::<DistanceMatrix>("[]").is_err());
        assert!(serde_json::from_str::<DistanceMatrix>("[[0,1.5],[1,0]]").is_err());
    }

    #[test]
    fn test_serde_round_trip_large_weights() {
        let dm = DistanceMatrix::from_data(2, vec![0, u64::MAX, 1, 0]).expect("valid");
        let json = serde_json::to_string(&dm).expect("serialize");
        assert_eq!(json, "[[0,18446744073709551615],[1,0]]");
        let back: DistanceMatrix = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, dm);
        assert_eq!(back.get(0, 1), u64::MAX);
    }

    #[test]
    fn test_serde_negative_weight_reported() {
        let err = serde_json::from_str::<DistanceMatrix>("[[0,-2],[3,0]]").unwrap_err();
        assert!(err.to_string().contains("negative edge weight -2 from 0 to 1"));
    }

    #[test]
    fn test_random_symmetric_too_large() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            DistanceMatrix::random_symmetric(usize::MAX, 10, &mut rng),
            Err(Error::TooLarge { size: usize::MAX })
        );
        let huge = 1usize << (usize::BITS / 2);
        assert_eq!(
            DistanceMatrix::random_symmetric(huge - 1, 10, &mut rng),
            Err(Error::TooLarge { size: huge - 1 })
        );
    }
}
