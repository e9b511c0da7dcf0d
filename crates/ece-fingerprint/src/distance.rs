//! Hamming distance between fingerprints.

use ece_core::{EceError, Result};
use rayon::prelude::*;

use crate::Fingerprint;

/// Batches at least this large are split across the rayon pool.
pub const PARALLEL_THRESHOLD: usize = 1 << 14;

/// Number of differing bits, in `0..=64`.
#[inline]
pub fn distance(a: Fingerprint, b: Fingerprint) -> u32 {
    (a ^ b).count_ones()
}

/// Element-wise [`distance`]. Inputs of different length are rejected.
pub fn distance_batch(a: &[Fingerprint], b: &[Fingerprint]) -> Result<Vec<u32>> {
    if a.len() != b.len() {
        return Err(EceError::LengthMismatch { left: a.len(), right: b.len() });
    }
    if a.len() >= PARALLEL_THRESHOLD {
        tracing::trace!(pairs = a.len(), "parallel distance batch");
        return Ok(a.par_iter().zip(b.par_iter()).map(|(&x, &y)| distance(x, y)).collect());
    }
    Ok(a.iter().zip(b).map(|(&x, &y)| distance(x, y)).collect())
}

/// Fraction of matching bits, in `[0, 1]`.
pub fn similarity(a: Fingerprint, b: Fingerprint) -> f64 {
    1.0 - distance(a, b) as f64 / 64.0
}

/// Closest candidate as `(index, distance)`; the first wins on ties.
pub fn nearest(query: Fingerprint, candidates: &[Fingerprint]) -> Option<(usize, u32)> {
    candidates
        .iter()
        .enumerate()
        .map(|(i, &c)| (i, distance(query, c)))
        .min_by_key(|&(_, d)| d)
}

/// Indices of candidates within `max_distance` of the query.
pub fn within(query: Fingerprint, candidates: &[Fingerprint], max_distance: u32) -> Vec<usize> {
    candidates
        .iter()
        .enumerate()
        .filter(|&(_, &c)| distance(query, c) <= max_distance)
        .map(|(i, _)| i)
        .collect()
}
