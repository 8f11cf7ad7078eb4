//! Hit, wound and save resolution on top of the binomial engine.

mod profile;
mod report;
mod threshold;

pub use profile::{
    AttackerProfile, AttackerProfileBuilder, DefenderProfile, DefenderProfileBuilder,
};
pub use report::{
    stage_distribution, stage_mean, stage_probability, stage_std_dev,
    stage_upper_cumulative_distribution, CombatReport, Stage, StageReport,
};
pub use threshold::{
    derive_failed_save_probability, derive_hit_probability, derive_save_probability,
    derive_wound_probability, derive_wound_threshold, Threshold,
};
