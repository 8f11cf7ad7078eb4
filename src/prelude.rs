pub use crate::binomial::{
    binomial_distribution, lower_cumulative_distribution, probability_mass_function,
    probability_of_all_successes, upper_cumulative_distribution,
};
pub use crate::combat::{
    derive_failed_save_probability, derive_hit_probability, derive_wound_probability,
    derive_wound_threshold, AttackerProfile, CombatReport, DefenderProfile, Stage, StageReport,
};
pub use crate::math::{binomial_coefficient, factorial, ln_factorial};
pub use crate::stats::{mean, median, mode, std_dev};
pub use crate::{Approx, Error, ProbabilityDistribution};
