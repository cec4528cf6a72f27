//! Global minimum cut of an undirected weighted graph (Stoer–Wagner).
//!
//! The graph is a dense `n×n` weight matrix, `matrix[i][j]` being the weight of
//! the edge between vertex `i` and vertex `j` (zero for no edge). Runs in
//! `O(n^3)` time and `O(n^2)` memory, which suits graphs of a few thousand
//! vertices at most.

use std::{error, fmt::Display, ops::Add};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidInput {
    TooFewVertices(usize),
    NonSquareRow { row: usize, len: usize, n: usize },
    NegativeWeight { row: usize, col: usize },
    WeightOverflow,
}

impl Display for InvalidInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidInput::TooFewVertices(n) => write!(
                f,
                "Expect at least 2 vertices to cut a graph, given {}.",
                n
            ),
            InvalidInput::NonSquareRow { row, len, n } => write!(
                f,
                "Expect {} weight(s) in each row of a {}x{} matrix, but row {} has {}.",
                n, n, n, row, len
            ),
            InvalidInput::NegativeWeight { row, col } => write!(
                f,
                "Weight at ({}, {}) is negative or not a number, expect non-negative weights.",
                row, col
            ),
            InvalidInput::WeightOverflow => write!(
                f,
                "The sum of all weights doesn't fit in the weight type, expect a wider one."
            ),
        }
    }
}

impl error::Error for InvalidInput {}

/// Edge weight of the graph. `Self::default()` is the zero weight.
pub trait Weight: Copy + PartialOrd + Default + Add<Output = Self> {
    /// Sum of two weights, `None` if it isn't representable.
    fn checked_add(self, rhs: Self) -> Option<Self>;
}

macro_rules! def_int_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                fn checked_add(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_add(self, rhs)
                }
            }
        )*
    };
}

macro_rules! def_float_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                fn checked_add(self, rhs: Self) -> Option<Self> {
                    let sum = self + rhs;
                    if sum.is_finite() {
                        Some(sum)
                    } else {
                        None
                    }
                }
            }
        )*
    };
}

def_int_weight!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
def_float_weight!(f32, f64);

/// One side of a global minimum cut and the total weight of the edges crossing it.
#[derive(Debug, Clone, PartialEq)]
pub struct MinCut<W> {
    weight: W,
    side: Vec<usize>,
    vertices_n: usize,
}

impl<W: Copy> MinCut<W> {
    pub fn weight(&self) -> W {
        self.weight
    }

    /// Vertices on the isolated side, sorted ascending. Never empty, never all vertices.
    pub fn side(&self) -> &[usize] {
        &self.side
    }

    pub fn complement(&self) -> Vec<usize> {
        (0..self.vertices_n)
            .filter(|v| self.side.binary_search(v).is_err())
            .collect()
    }

    pub fn vertices_n(&self) -> usize {
        self.vertices_n
    }

    pub fn side_sizes(&self) -> (usize, usize) {
        (self.side.len(), self.vertices_n - self.side.len())
    }
}

/// Finds a global minimum cut of the graph given as a dense weight matrix.
///
/// The matrix is consumed: phases contract it in place, so pass a clone if
/// the weights are needed afterwards. Rows are read as the weights going out
/// of a vertex, so give a symmetric matrix for an undirected graph. Diagonal
/// entries are ignored.
///
/// Fails before any work is done if there are fewer than 2 vertices, a row
/// isn't `n` long, an off-diagonal weight is negative (or NaN), or the sum of
/// all off-diagonal weights overflows `W`. Every sum taken while contracting
/// is part of that total, so a valid matrix never overflows.
pub fn global_min_cut<W: Weight>(mut matrix: Vec<Vec<W>>) -> Result<MinCut<W>, InvalidInput> {
    validate(&matrix)?;

    let n = matrix.len();
    let mut groups = (0..n).map(|v| vec![v]).collect::<Vec<_>>();
    let mut active = vec![true; n];
    let mut best: Option<(W, Vec<usize>)> = None;
    for _ in 1..n {
        let (s, t, cut_weight) = cut_of_the_phase(&matrix, &active);
        if best
            .as_ref()
            .map_or(true, |(best_weight, _)| cut_weight < *best_weight)
        {
            best = Some((cut_weight, groups[t].clone()));
        }

        // Contract t into s.
        let merged = std::mem::take(&mut groups[t]);
        groups[s].extend(merged);
        for v in 0..n {
            if active[v] && v != s && v != t {
                let weight = matrix[s][v] + matrix[t][v];
                matrix[s][v] = weight;
                matrix[v][s] = weight;
            }
        }
        active[t] = false;
    }

    let (weight, mut side) = best.ok_or(InvalidInput::TooFewVertices(n))?;
    side.sort_unstable();
    Ok(MinCut {
        weight,
        side,
        vertices_n: n,
    })
}

fn validate<W: Weight>(matrix: &[Vec<W>]) -> Result<(), InvalidInput> {
    let n = matrix.len();
    if n < 2 {
        return Err(InvalidInput::TooFewVertices(n));
    }

    let zero = W::default();
    let mut total = zero;
    for (row, weights) in matrix.iter().enumerate() {
        if weights.len() != n {
            return Err(InvalidInput::NonSquareRow {
                row,
                len: weights.len(),
                n,
            });
        }

        // `!(w >= zero)` also catches NaN.
        if let Some((col, _)) = weights
            .iter()
            .enumerate()
            .find(|(col, weight)| *col != row && !(**weight >= zero))
        {
            return Err(InvalidInput::NegativeWeight { row, col });
        }

        for (col, &weight) in weights.iter().enumerate() {
            if col != row {
                total = total
                    .checked_add(weight)
                    .ok_or(InvalidInput::WeightOverflow)?;
            }
        }
    }

    Ok(())
}

/// Builds a maximum adjacency ordering over the active vertices and returns
/// its last two vertices `(s, t)` with the weight of the cut isolating `t`.
///
/// Vertex 0 opens every ordering, so it is never `t` and stays active for
/// the whole run.
fn cut_of_the_phase<W: Weight>(matrix: &[Vec<W>], active: &[bool]) -> (usize, usize, W) {
    let n = matrix.len();
    let mut ordered = vec![false; n];
    ordered[0] = true;
    let mut connectivity = matrix[0].clone();
    let (mut s, mut t, mut cut_weight) = (0, 0, W::default());
    while let Some(next) = most_connected(&connectivity, active, &ordered) {
        s = t;
        t = next;
        cut_weight = connectivity[next];
        ordered[next] = true;
        for v in 0..n {
            if active[v] && !ordered[v] {
                connectivity[v] = connectivity[v] + matrix[next][v];
            }
        }
    }

    (s, t, cut_weight)
}

// Lowest index wins ties.
fn most_connected<W: PartialOrd>(
    connectivity: &[W],
    active: &[bool],
    ordered: &[bool],
) -> Option<usize> {
    (0..connectivity.len())
        .filter(|&v| active[v] && !ordered[v])
        .fold(None, |most, v| match most {
            Some(most) if !(connectivity[v] > connectivity[most]) => Some(most),
            _ => Some(v),
        })
}
