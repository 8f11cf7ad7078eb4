//! Binomial distribution of success counts over independent trials.

use tracing::trace;

use crate::math::{ln_factorial, ln_factorials};
use crate::{Error, ProbabilityDistribution, Result};

/// Probability of a single trial succeeding when `successful` out of
/// `possible` equally likely results count as a success.
pub fn probability_of_success(possible: u32, successful: u32) -> Result<f64> {
    if possible == 0 {
        return Err(Error::ZeroPossibleResults);
    }
    check_probability(f64::from(successful) / f64::from(possible))
}

/// Probability of all `n` trials of probability `p` succeeding.
pub fn probability_of_all_successes(n: u32, p: f64) -> Result<f64> {
    let p = check_probability(p)?;
    Ok(powu(p, n))
}

/// Probability of exactly `k` successes in `n` trials of probability `p`.
///
/// Evaluated in log space, so the result stays finite for trial counts whose
/// binomial coefficient no longer fits an `f64`.
pub fn probability_mass_function(n: u32, k: u32, p: f64) -> Result<f64> {
    let p = check_probability(p)?;
    check_successes(n, k)?;
    let ln_c = ln_factorial(n) - ln_factorial(k) - ln_factorial(n - k);
    Ok(mass(ln_c, n, k, p))
}

/// Probability of at most `k` successes.
pub fn lower_cumulative_probability(n: u32, k: u32, p: f64) -> Result<f64> {
    check_successes(n, k)?;
    (0..=k).try_fold(0.0, |acc, i| Ok(acc + probability_mass_function(n, i, p)?))
}

/// Probability of at least `k` successes.
pub fn upper_cumulative_probability(n: u32, k: u32, p: f64) -> Result<f64> {
    check_successes(n, k)?;
    (k..=n).try_fold(0.0, |acc, i| Ok(acc + probability_mass_function(n, i, p)?))
}

pub fn binomial_distribution(n: u32, p: f64) -> Result<ProbabilityDistribution> {
    trace!(n, p, "binomial distribution");
    let p = check_probability(p)?;
    let ln_f = ln_factorials(n);
    let last = n as usize;
    let masses = (0..=n)
        .map(|k| {
            let i = k as usize;
            mass(ln_f[last] - ln_f[i] - ln_f[last - i], n, k, p)
        })
        .collect();
    Ok(ProbabilityDistribution::from_dense(masses))
}

/// At-most-`k` probability for every `k` in `0..=n`.
///
/// Built as a running sum over a single pass of the mass function, which
/// gives the same values as [`lower_cumulative_probability`] per key.
pub fn lower_cumulative_distribution(n: u32, p: f64) -> Result<ProbabilityDistribution> {
    trace!(n, p, "lower cumulative distribution");
    binomial_distribution(n, p).map(|pmf| lower_cumulative_of(&pmf))
}

/// At-least-`k` probability for every `k` in `0..=n`.
pub fn upper_cumulative_distribution(n: u32, p: f64) -> Result<ProbabilityDistribution> {
    trace!(n, p, "upper cumulative distribution");
    binomial_distribution(n, p).map(|pmf| upper_cumulative_of(&pmf))
}

/// Running sum of a dense mass function from the lowest key up.
pub(crate) fn lower_cumulative_of(pmf: &ProbabilityDistribution) -> ProbabilityDistribution {
    let mut acc = 0.0;
    let head = pmf
        .probabilities()
        .iter()
        .map(|x| {
            acc += x;
            acc
        })
        .collect();
    ProbabilityDistribution::from_dense(head)
}

/// Running sum of a dense mass function from the highest key down.
pub(crate) fn upper_cumulative_of(pmf: &ProbabilityDistribution) -> ProbabilityDistribution {
    let mut tail = vec![0.0; pmf.len()];
    let mut acc = 0.0;
    for (slot, x) in tail.iter_mut().zip(pmf.probabilities()).rev() {
        acc += x;
        *slot = acc;
    }
    ProbabilityDistribution::from_dense(tail)
}

#[must_use]
pub fn binomial_mean(n: u32, p: f64) -> f64 {
    f64::from(n) * p
}

#[must_use]
pub fn binomial_std_dev(n: u32, p: f64) -> f64 {
    (f64::from(n) * p * (1.0 - p)).sqrt()
}

/// `floor((n + 1) p)`, capped at `n` for `p == 1`.
#[must_use]
pub fn binomial_mode(n: u32, p: f64) -> u32 {
    let m = ((f64::from(n) + 1.0) * p).floor();
    (m.max(0.0) as u32).min(n)
}

fn check_probability(p: f64) -> Result<f64> {
    if (0.0..=1.0).contains(&p) {
        Ok(p)
    } else {
        Err(Error::InvalidProbability(p))
    }
}

fn check_successes(trials: u32, successes: u32) -> Result<()> {
    if successes > trials {
        Err(Error::SuccessesOutOfRange { trials, successes })
    } else {
        Ok(())
    }
}

/// `C(n, k) p^k (1 - p)^(n - k)` given `ln C(n, k)`. `p` is already checked.
#[inline]
fn mass(ln_c: f64, n: u32, k: u32, p: f64) -> f64 {
    if p == 0.0 {
        return if k == 0 { 1.0 } else { 0.0 };
    }
    if p == 1.0 {
        return if k == n { 1.0 } else { 0.0 };
    }
    let ln_p = f64::from(k) * p.ln() + f64::from(n - k) * (-p).ln_1p();
    (ln_c + ln_p).exp()
}

#[inline]
fn powu(base: f64, exp: u32) -> f64 {
    match i32::try_from(exp) {
        Ok(e) => base.powi(e),
        Err(_) => base.powf(f64::from(exp)),
    }
}
