use bon::Builder;
use itertools::Itertools;
use rand::rngs::ThreadRng;
use rand::{thread_rng, Rng, RngCore};
use tracing::debug;

use crate::combat::{derive_wound_threshold, AttackerProfile, DefenderProfile, Threshold};
use crate::{Error, ProbabilityDistribution, Result, APPROX_SAMPLE_SIZE, DIE_FACES};

/// Monte Carlo estimate of a success-count distribution.
#[derive(Debug, Builder)]
pub struct Approx<G = ThreadRng>
where
    G: RngCore,
{
    #[builder(finish_fn)]
    rng: G,
    #[builder(default = APPROX_SAMPLE_SIZE)]
    sample_size: u32,
}

impl Default for Approx<ThreadRng> {
    fn default() -> Self {
        Self::builder().build(thread_rng())
    }
}

impl<G> Approx<G>
where
    G: RngCore,
{
    #[must_use]
    pub fn sample_size(&self) -> u32 {
        self.sample_size
    }

    /// Relative frequency of every value `op` produces over the sample.
    #[must_use]
    pub fn eval<F>(&mut self, mut op: F) -> ProbabilityDistribution
    where
        F: FnMut(&mut G) -> u32,
    {
        let denom = f64::from(self.sample_size.max(1));
        let rng = &mut self.rng;
        (0..self.sample_size)
            .map(|_| op(rng))
            .counts()
            .into_iter()
            .map(|(k, c)| (k, c as f64 / denom))
            .collect()
    }

    /// Successes over `n` trials of probability `p`.
    pub fn binomial(&mut self, n: u32, p: f64) -> Result<ProbabilityDistribution> {
        if !(0.0..=1.0).contains(&p) {
            return Err(Error::InvalidProbability(p));
        }
        let d = self.eval(|rng| (0..n).filter(|_| rng.gen_bool(p)).count() as u32);
        Ok(densify(n, &d))
    }

    /// Failed saves when every attack is rolled through hit, wound and save
    /// in order, one die at a time.
    pub fn combat(
        &mut self,
        attacker: &AttackerProfile,
        defender: &DefenderProfile,
    ) -> Result<ProbabilityDistribution> {
        let hit = Threshold::new(attacker.hit_skill())?.value();
        let wound = derive_wound_threshold(attacker.strength(), defender.toughness())?;
        let save = Threshold::new(defender.armor_save())?.value();
        let n = attacker.total_attacks();
        debug!(n, hit, wound, save, samples = self.sample_size, "approx combat");

        let d = self.eval(|rng| {
            (0..n)
                .filter(|_| {
                    roll(rng) >= hit && roll(rng) >= wound && roll(rng) < save
                })
                .count() as u32
        });
        Ok(densify(n, &d))
    }
}

#[inline]
fn roll<G: RngCore>(rng: &mut G) -> u8 {
    rng.gen_range(1..=DIE_FACES) as u8
}

/// Fills in every key of `0..=n` the sample never hit.
fn densify(n: u32, d: &ProbabilityDistribution) -> ProbabilityDistribution {
    (0..=n).map(|k| (k, d.get(k).unwrap_or(0.0))).collect()
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::binomial::binomial_distribution;
    use crate::stats;

    fn seeded(sample_size: u32) -> Approx<StdRng> {
        Approx::builder()
            .sample_size(sample_size)
            .build(StdRng::seed_from_u64(7))
    }

    #[test]
    fn default_sample_size() {
        assert_eq!(Approx::<ThreadRng>::default().sample_size(), APPROX_SAMPLE_SIZE);
    }

    #[test]
    fn eval_constant() {
        let d = seeded(100).eval(|_| 3);
        assert_eq!(d.successes(), &[3]);
        assert_eq!(d.get(3), Some(1.0));
    }

    #[test]
    fn binomial_estimate_is_dense_and_close() {
        let d = seeded(50_000).binomial(10, 0.5).unwrap();
        assert_eq!(d.len(), 11);
        assert!((d.total() - 1.0).abs() < 1e-9);
        assert!((stats::mean(&d) - 5.0).abs() < 0.05);
    }

    #[test]
    fn binomial_rejects_bad_probability() {
        assert_eq!(
            seeded(10).binomial(3, 1.5),
            Err(Error::InvalidProbability(1.5))
        );
    }

    #[test]
    fn sequential_combat_matches_chained_probability() {
        let a = AttackerProfile::new(3, 4).units(10).build();
        let d = DefenderProfile::new(4, 3).build();
        let estimate = seeded(50_000).combat(&a, &d).unwrap();
        let exact = binomial_distribution(10, 1.0 / 9.0).unwrap();
        assert!((stats::mean(&estimate) - stats::mean(&exact)).abs() < 0.03);
        for k in 0..=3 {
            let e = estimate.get(k).unwrap();
            let x = exact.get(k).unwrap();
            assert!((e - x).abs() < 0.01, "k = {k}: {e} vs {x}");
        }
    }

    #[test]
    fn combat_rejects_invalid_profile() {
        let a = AttackerProfile::new(3, 4).build();
        let d = DefenderProfile::new(0, 3).build();
        assert_eq!(seeded(10).combat(&a, &d), Err(Error::DivideByZero));
    }
}
