//! Summary statistics over any [`ProbabilityDistribution`].
//!
//! None of these assume the distribution is binomial; they only rely on the
//! keys being iterated in ascending order, which the distribution guarantees.

use crate::{Error, ProbabilityDistribution, Result};

const MEDIAN_MASS: f64 = 0.5;

#[must_use]
pub fn mean(distribution: &ProbabilityDistribution) -> f64 {
    distribution
        .iter()
        .fold(0.0, |acc, (k, p)| acc + f64::from(*k) * p)
}

/// First key at which the cumulative mass reaches one half.
pub fn median(distribution: &ProbabilityDistribution) -> Result<u32> {
    if distribution.is_empty() {
        return Err(Error::EmptyDistribution);
    }
    let mut remaining = MEDIAN_MASS;
    for (k, p) in distribution {
        remaining -= p;
        if remaining <= 0.0 {
            return Ok(*k);
        }
    }
    Err(Error::InsufficientMass)
}

/// Most likely key. Ties go to the smallest key.
pub fn mode(distribution: &ProbabilityDistribution) -> Result<u32> {
    let mut iter = distribution.iter();
    let (mut best, mut best_p) = iter.next().ok_or(Error::EmptyDistribution)?;
    for (k, p) in iter {
        if p > best_p {
            best = k;
            best_p = p;
        }
    }
    Ok(*best)
}

#[must_use]
pub fn variance(distribution: &ProbabilityDistribution) -> f64 {
    let m = mean(distribution);
    distribution
        .iter()
        .fold(0.0, |acc, (k, p)| acc + p * (f64::from(*k) - m).powi(2))
}

#[must_use]
pub fn std_dev(distribution: &ProbabilityDistribution) -> f64 {
    variance(distribution).sqrt()
}
