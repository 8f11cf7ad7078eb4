use std::fmt::{self, Display};

use tracing::debug;

use super::threshold::{
    derive_failed_save_probability, derive_hit_probability, derive_wound_probability,
};
use super::{AttackerProfile, DefenderProfile};
use crate::binomial::{binomial_distribution, upper_cumulative_distribution, upper_cumulative_of};
use crate::{stats, ProbabilityDistribution, Result};

/// One step of the hit, wound, save sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Stage {
    Hit,
    Wound,
    FailedSave,
}

impl Stage {
    pub const ALL: [Stage; 3] = [Stage::Hit, Stage::Wound, Stage::FailedSave];
}

impl Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Hit => write!(f, "hit"),
            Stage::Wound => write!(f, "wound"),
            Stage::FailedSave => write!(f, "failed save"),
        }
    }
}

/// Per-attack success probability of `stage`.
///
/// Each stage is the probability of the whole chain up to it succeeding for
/// a single attack. Stages are independent of each other: every one is
/// rolled over the full attack count instead of the previous stage's
/// successes.
pub fn stage_probability(
    stage: Stage,
    attacker: &AttackerProfile,
    defender: &DefenderProfile,
) -> Result<f64> {
    let p = match stage {
        Stage::Hit => derive_hit_probability(attacker.hit_skill())?,
        Stage::Wound => derive_wound_probability(attacker, defender)?,
        Stage::FailedSave => derive_failed_save_probability(attacker, defender)?,
    };
    debug!(%stage, p, "stage probability");
    Ok(p)
}

pub fn stage_distribution(
    stage: Stage,
    attacker: &AttackerProfile,
    defender: &DefenderProfile,
) -> Result<ProbabilityDistribution> {
    let p = stage_probability(stage, attacker, defender)?;
    binomial_distribution(attacker.total_attacks(), p)
}

pub fn stage_upper_cumulative_distribution(
    stage: Stage,
    attacker: &AttackerProfile,
    defender: &DefenderProfile,
) -> Result<ProbabilityDistribution> {
    let p = stage_probability(stage, attacker, defender)?;
    upper_cumulative_distribution(attacker.total_attacks(), p)
}

pub fn stage_mean(
    stage: Stage,
    attacker: &AttackerProfile,
    defender: &DefenderProfile,
) -> Result<f64> {
    stage_distribution(stage, attacker, defender).map(|d| stats::mean(&d))
}

pub fn stage_std_dev(
    stage: Stage,
    attacker: &AttackerProfile,
    defender: &DefenderProfile,
) -> Result<f64> {
    stage_distribution(stage, attacker, defender).map(|d| stats::std_dev(&d))
}

#[derive(Clone, Debug, PartialEq)]
pub struct StageReport {
    stage: Stage,
    trials: u32,
    probability: f64,
    distribution: ProbabilityDistribution,
    upper_cumulative: ProbabilityDistribution,
    mean: f64,
    median: u32,
    mode: u32,
    std_dev: f64,
}

impl StageReport {
    pub fn new(
        stage: Stage,
        attacker: &AttackerProfile,
        defender: &DefenderProfile,
    ) -> Result<Self> {
        let trials = attacker.total_attacks();
        let probability = stage_probability(stage, attacker, defender)?;
        let distribution = binomial_distribution(trials, probability)?;
        let upper_cumulative = upper_cumulative_of(&distribution);
        Ok(Self {
            stage,
            trials,
            probability,
            mean: stats::mean(&distribution),
            median: stats::median(&distribution)?,
            mode: stats::mode(&distribution)?,
            std_dev: stats::std_dev(&distribution),
            distribution,
            upper_cumulative,
        })
    }

    #[must_use]
    pub fn stage(&self) -> Stage {
        self.stage
    }

    #[must_use]
    pub fn trials(&self) -> u32 {
        self.trials
    }

    #[must_use]
    pub fn probability(&self) -> f64 {
        self.probability
    }

    #[must_use]
    pub fn distribution(&self) -> &ProbabilityDistribution {
        &self.distribution
    }

    #[must_use]
    pub fn upper_cumulative(&self) -> &ProbabilityDistribution {
        &self.upper_cumulative
    }

    #[must_use]
    pub fn mean(&self) -> f64 {
        self.mean
    }

    #[must_use]
    pub fn median(&self) -> u32 {
        self.median
    }

    #[must_use]
    pub fn mode(&self) -> u32 {
        self.mode
    }

    #[must_use]
    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }
}

impl Display for StageReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} ({} trials at {:.2}%): mean {:.3}±{:.3}, median {}, mode {}",
            self.stage,
            self.trials,
            self.probability * 100.0,
            self.mean,
            self.std_dev,
            self.median,
            self.mode,
        )?;
        write!(f, "{}", self.distribution)
    }
}

/// Reports for every stage of one attacker against one defender.
#[derive(Clone, Debug, PartialEq)]
pub struct CombatReport {
    hit: StageReport,
    wound: StageReport,
    failed_save: StageReport,
}

impl CombatReport {
    pub fn new(attacker: &AttackerProfile, defender: &DefenderProfile) -> Result<Self> {
        let report = Self {
            hit: StageReport::new(Stage::Hit, attacker, defender)?,
            wound: StageReport::new(Stage::Wound, attacker, defender)?,
            failed_save: StageReport::new(Stage::FailedSave, attacker, defender)?,
        };
        debug!(
            attacks = attacker.total_attacks(),
            hits = report.hit.mean,
            wounds = report.wound.mean,
            failed_saves = report.failed_save.mean,
            "combat report"
        );
        Ok(report)
    }

    #[must_use]
    pub fn hit(&self) -> &StageReport {
        &self.hit
    }

    #[must_use]
    pub fn wound(&self) -> &StageReport {
        &self.wound
    }

    #[must_use]
    pub fn failed_save(&self) -> &StageReport {
        &self.failed_save
    }

    #[must_use]
    pub fn stage(&self, stage: Stage) -> &StageReport {
        match stage {
            Stage::Hit => &self.hit,
            Stage::Wound => &self.wound,
            Stage::FailedSave => &self.failed_save,
        }
    }
}

impl Display for CombatReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}\n{}", self.hit, self.wound, self.failed_save)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profiles() -> (AttackerProfile, DefenderProfile) {
        (
            AttackerProfile::new(3, 4).units(10).build(),
            DefenderProfile::new(4, 3).build(),
        )
    }

    #[test]
    fn stage_probabilities_shrink_along_the_chain() {
        let (a, d) = profiles();
        let ps: Vec<f64> = Stage::ALL
            .iter()
            .map(|s| stage_probability(*s, &a, &d).unwrap())
            .collect();
        assert!(ps[0] > ps[1] && ps[1] > ps[2]);
    }

    #[test]
    fn every_stage_rolls_all_attacks() {
        let (a, d) = profiles();
        for stage in Stage::ALL {
            let dist = stage_distribution(stage, &a, &d).unwrap();
            assert_eq!(dist.len(), 11, "{stage}");
        }
    }

    #[test]
    fn stage_mean_is_trials_times_probability() {
        let (a, d) = profiles();
        let mean = stage_mean(Stage::Wound, &a, &d).unwrap();
        assert!((mean - 10.0 / 3.0).abs() < 1e-9);
        let sd = stage_std_dev(Stage::Hit, &a, &d).unwrap();
        assert!((sd - (10.0f64 * (2.0 / 3.0) * (1.0 / 3.0)).sqrt()).abs() < 1e-9);
    }

    #[test]
    fn report_collects_the_stage_statistics() {
        let (a, d) = profiles();
        let report = CombatReport::new(&a, &d).unwrap();
        let failed = report.failed_save();
        assert_eq!(failed.stage(), Stage::FailedSave);
        assert_eq!(failed.trials(), 10);
        assert_eq!(failed.mode(), 1);
        assert_eq!(failed.median(), 1);
        assert!((failed.mean() - 10.0 / 9.0).abs() < 1e-9);
        assert_eq!(report.stage(Stage::Hit), report.hit());
        let upper = stage_upper_cumulative_distribution(Stage::FailedSave, &a, &d).unwrap();
        assert_eq!(failed.upper_cumulative(), &upper);
    }

    #[test]
    fn report_handles_large_attack_counts() {
        let a = AttackerProfile::new(3, 4)
            .units(60)
            .attacks_per_unit(20)
            .build();
        let d = DefenderProfile::new(4, 3).build();
        let report = CombatReport::new(&a, &d).unwrap();
        let failed = report.failed_save();
        assert_eq!(failed.trials(), 1200);
        assert!((failed.distribution().total() - 1.0).abs() < 1e-9);
        assert!((failed.mean() - 1200.0 / 9.0).abs() < 1e-6);
        assert!((failed.upper_cumulative().get(0).unwrap() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn report_fails_on_invalid_profile() {
        let a = AttackerProfile::new(1, 4).build();
        let d = DefenderProfile::new(4, 3).build();
        assert!(CombatReport::new(&a, &d).is_err());
    }
}
