//! Truncated SVD for latent semantic analysis.
//!
//! Implements the randomized algorithm: sample the range of the term-weight
//! matrix with a seeded Gaussian-like test matrix, sharpen it with a few
//! power iterations, then recover the top singular directions from the small
//! Gram matrix of the sketch (Jacobi eigendecomposition). Everything is
//! plain dense/sparse arithmetic over `ndarray`, no external BLAS.
//!
//! The RNG seed is part of the configuration, so fitting the same corpus
//! twice produces bit-identical projection matrices.

use super::types::{IndexConfig, SparseVector};
use anyhow::Result;
use ndarray::{Array1, Array2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const MAX_JACOBI_SWEEPS: usize = 64;

/// Frozen linear projection from the vocabulary space down to the latent
/// space, fit once over the whole corpus.
pub struct LsaProjection {
    /// Dense matrix of shape (vocabulary size x latent rank); column j is
    /// the j-th right singular direction of the term-weight matrix.
    components: Array2<f64>,
}

impl LsaProjection {
    /// Fit the projection over the sparse term-weight rows.
    ///
    /// The effective rank is `config.latent_rank` clamped to the corpus and
    /// vocabulary sizes. Fails on an empty matrix or a zero rank.
    pub fn fit(rows: &[SparseVector], n_features: usize, config: &IndexConfig) -> Result<Self> {
        let n_docs = rows.len();
        if n_docs == 0 {
            anyhow::bail!("cannot fit projection on an empty corpus");
        }
        if n_features == 0 {
            anyhow::bail!("cannot fit projection on an empty vocabulary");
        }
        if config.latent_rank == 0 {
            anyhow::bail!("latent rank must be positive");
        }

        let rank = config.latent_rank.min(n_docs).min(n_features);
        let sketch_size = (rank + config.oversample).min(n_docs).min(n_features);
        if rank < config.latent_rank {
            tracing::debug!(
                "Clamped latent rank from {} to {} ({} documents, {} features)",
                config.latent_rank,
                rank,
                n_docs,
                n_features
            );
        }

        // Range finder: Y = X * Omega, sharpened by power iterations
        let omega = random_test_matrix(n_features, sketch_size, config.seed);
        let mut y = sparse_dot_dense(rows, &omega, n_docs);
        for _ in 0..config.power_iterations {
            orthonormalize_columns(&mut y);
            let z = sparse_t_dot_dense(rows, &y, n_features);
            y = sparse_dot_dense(rows, &z, n_docs);
        }
        orthonormalize_columns(&mut y);

        // Project X into the sketched range: bt = X^T * Q, shape
        // (n_features x sketch_size); the small Gram matrix bt^T * bt is
        // what gets eigendecomposed.
        let bt = sparse_t_dot_dense(rows, &y, n_features);
        let gram = bt.t().dot(&bt);
        let (eigenvalues, eigenvectors) = jacobi_eigh(gram);

        // Top eigenpairs, descending; ties resolved by position
        let mut order: Vec<usize> = (0..eigenvalues.len()).collect();
        order.sort_by(|&a, &b| {
            eigenvalues[b]
                .partial_cmp(&eigenvalues[a])
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        // Right singular directions: v_j = bt * w_j / sigma_j
        let mut components = Array2::zeros((n_features, rank));
        for (out_col, &eig_index) in order.iter().take(rank).enumerate() {
            let sigma = eigenvalues[eig_index].max(0.0).sqrt();
            if sigma < 1e-12 {
                continue; // rank-deficient direction stays zero
            }
            let direction = bt.dot(&eigenvectors.column(eig_index));
            components
                .column_mut(out_col)
                .assign(&direction.mapv(|x| x / sigma));
        }

        Ok(Self { components })
    }

    /// Project a sparse term-weight vector into the latent space.
    ///
    /// Feature indices outside the fitted vocabulary are ignored.
    pub fn transform(&self, vector: &SparseVector) -> Vec<f64> {
        let rank = self.rank();
        let mut reduced = vec![0.0; rank];
        for &(feature_index, weight) in vector {
            if feature_index >= self.components.nrows() {
                continue;
            }
            let row = self.components.row(feature_index);
            for (j, value) in reduced.iter_mut().enumerate() {
                *value += weight * row[j];
            }
        }
        reduced
    }

    /// Number of latent dimensions.
    pub fn rank(&self) -> usize {
        self.components.ncols()
    }

    /// The fitted projection matrix, shape (vocabulary size x rank).
    pub fn components(&self) -> &Array2<f64> {
        &self.components
    }
}

/// Seeded test matrix with entries uniform in [-1, 1], built in a fixed
/// element order so the same seed always yields the same matrix.
fn random_test_matrix(n_rows: usize, n_cols: usize, seed: u64) -> Array2<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut data = Vec::with_capacity(n_rows * n_cols);
    for _ in 0..n_rows * n_cols {
        data.push(rng.gen::<f64>() * 2.0 - 1.0);
    }
    Array2::from_shape_vec((n_rows, n_cols), data).unwrap()
}

/// X * D for sparse rows X (n_docs x n_features) and dense D
/// (n_features x l); result is (n_docs x l).
fn sparse_dot_dense(rows: &[SparseVector], dense: &Array2<f64>, n_docs: usize) -> Array2<f64> {
    let mut out = Array2::zeros((n_docs, dense.ncols()));
    for (i, row) in rows.iter().enumerate() {
        let mut out_row = out.row_mut(i);
        for &(feature_index, weight) in row {
            out_row.scaled_add(weight, &dense.row(feature_index));
        }
    }
    out
}

/// X^T * D for sparse rows X (n_docs x n_features) and dense D
/// (n_docs x l); result is (n_features x l).
fn sparse_t_dot_dense(rows: &[SparseVector], dense: &Array2<f64>, n_features: usize) -> Array2<f64> {
    let mut out = Array2::zeros((n_features, dense.ncols()));
    for (i, row) in rows.iter().enumerate() {
        for &(feature_index, weight) in row {
            out.row_mut(feature_index).scaled_add(weight, &dense.row(i));
        }
    }
    out
}

/// Modified Gram-Schmidt over the columns of `m`, in place. Columns that
/// collapse below numerical zero are left as zero vectors.
pub(crate) fn orthonormalize_columns(m: &mut Array2<f64>) {
    for j in 0..m.ncols() {
        for i in 0..j {
            let basis = m.column(i).to_owned();
            let projection = basis.dot(&m.column(j));
            m.column_mut(j).scaled_add(-projection, &basis);
        }
        let norm = m.column(j).dot(&m.column(j)).sqrt();
        if norm > 1e-12 {
            m.column_mut(j).mapv_inplace(|x| x / norm);
        } else {
            m.column_mut(j).fill(0.0);
        }
    }
}

/// Eigendecomposition of a small symmetric matrix by cyclic Jacobi
/// rotations. Returns (eigenvalues, eigenvectors); eigenvector j is column
/// j, unsorted.
pub(crate) fn jacobi_eigh(mut a: Array2<f64>) -> (Array1<f64>, Array2<f64>) {
    let n = a.nrows();
    let mut v = Array2::eye(n);
    let scale = a.iter().map(|x| x * x).sum::<f64>().sqrt().max(1.0);

    for _ in 0..MAX_JACOBI_SWEEPS {
        let off_diagonal: f64 = (0..n)
            .flat_map(|i| (0..n).filter(move |&j| j != i).map(move |j| (i, j)))
            .map(|(i, j)| a[[i, j]] * a[[i, j]])
            .sum();
        if off_diagonal.sqrt() <= 1e-14 * scale {
            break;
        }

        for p in 0..n {
            for q in (p + 1)..n {
                let apq = a[[p, q]];
                if apq.abs() <= 1e-300 {
                    continue;
                }
                let theta = (a[[q, q]] - a[[p, p]]) / (2.0 * apq);
                let t = theta.signum() / (theta.abs() + (theta * theta + 1.0).sqrt());
                let c = 1.0 / (t * t + 1.0).sqrt();
                let s = t * c;

                for k in 0..n {
                    let akp = a[[k, p]];
                    let akq = a[[k, q]];
                    a[[k, p]] = c * akp - s * akq;
                    a[[k, q]] = s * akp + c * akq;
                }
                for k in 0..n {
                    let apk = a[[p, k]];
                    let aqk = a[[q, k]];
                    a[[p, k]] = c * apk - s * aqk;
                    a[[q, k]] = s * apk + c * aqk;
                }
                for k in 0..n {
                    let vkp = v[[k, p]];
                    let vkq = v[[k, q]];
                    v[[k, p]] = c * vkp - s * vkq;
                    v[[k, q]] = s * vkp + c * vkq;
                }
            }
        }
    }

    (a.diag().to_owned(), v)
}
