//! Weight-proportional selection from a candidate pool.

use rand::{seq::IndexedRandom, Rng};

use crate::error::pack::PackError;

/// Draws one candidate with probability `weight(i) / Σ weight(j)`.
///
/// # Arguments
/// - `candidates` - Pool to draw from
/// - `weight` - Weight of a candidate; must be finite and strictly positive
/// - `rng` - Random source
///
/// # Returns
/// - `Ok(&T)` - The drawn candidate
/// - `Err(PackError::EmptyPool)` - No candidates to draw from
/// - `Err(PackError::InvalidWeight)` - A candidate has a zero, negative or non-finite weight
pub fn pick<'a, T, F, R>(candidates: &'a [T], weight: F, rng: &mut R) -> Result<&'a T, PackError>
where
    F: Fn(&T) -> f64,
    R: Rng + ?Sized,
{
    if candidates.is_empty() {
        return Err(PackError::EmptyPool);
    }

    if let Some((index, weight)) = candidates
        .iter()
        .map(&weight)
        .enumerate()
        .find(|(_, w)| !(w.is_finite() && *w > 0.0))
    {
        return Err(PackError::InvalidWeight { index, weight });
    }

    candidates
        .choose_weighted(rng, weight)
        .map_err(|e| PackError::Sampling(e.to_string()))
}
