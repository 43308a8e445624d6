//! Index Configuration
//!
//! Named parameters for index construction. The defaults reproduce the
//! served configuration: 100 latent dimensions, seed 42.

/// Number of latent dimensions the term-weight space is reduced to.
pub const DEFAULT_LATENT_RANK: usize = 100;

/// Seed for the randomized SVD range finder. Fixed so that rebuilding the
/// index from the same corpus is bit-for-bit reproducible.
pub const DEFAULT_SVD_SEED: u64 = 42;

/// Extra sampled dimensions beyond the target rank during range finding.
pub const DEFAULT_OVERSAMPLE: usize = 10;

/// Power iterations applied to sharpen the sampled range.
pub const DEFAULT_POWER_ITERATIONS: usize = 4;

/// A sparse term-weight vector: (feature index, weight) pairs, sorted by
/// feature index, weights non-negative.
pub type SparseVector = Vec<(usize, f64)>;

/// Tunable parameters for index construction.
#[derive(Debug, Clone)]
pub struct IndexConfig {
    /// Target number of latent dimensions. Clamped to the corpus and
    /// vocabulary sizes, so small corpora stay well-defined.
    pub latent_rank: usize,
    /// RNG seed for the SVD range finder.
    pub seed: u64,
    /// Oversampling amount for the range finder.
    pub oversample: usize,
    /// Number of power iterations in the range finder.
    pub power_iterations: usize,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            latent_rank: DEFAULT_LATENT_RANK,
            seed: DEFAULT_SVD_SEED,
            oversample: DEFAULT_OVERSAMPLE,
            power_iterations: DEFAULT_POWER_ITERATIONS,
        }
    }
}
