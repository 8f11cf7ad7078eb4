use std::fmt::{self, Display};

use tracing::debug;

use super::{AttackerProfile, DefenderProfile};
use crate::{Error, Result, DIE_FACES, MAX_THRESHOLD, MIN_THRESHOLD};

/// Minimum face of a six-sided die that counts as a success, written `N+`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Threshold(u8);

impl Threshold {
    pub fn new(value: u8) -> Result<Self> {
        if (MIN_THRESHOLD..=MAX_THRESHOLD).contains(&value) {
            Ok(Self(value))
        } else {
            Err(Error::InvalidThreshold(value))
        }
    }

    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }

    /// Faces that meet or beat the threshold.
    #[must_use]
    pub fn successful_faces(self) -> u32 {
        DIE_FACES + 1 - u32::from(self.0)
    }

    #[must_use]
    pub fn probability(self) -> f64 {
        f64::from(self.successful_faces()) / f64::from(DIE_FACES)
    }
}

impl TryFrom<u8> for Threshold {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        Self::new(value)
    }
}

impl Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}+", self.0)
    }
}

/// Probability of a single hit roll succeeding at `hit_skill+`.
pub fn derive_hit_probability(hit_skill: u8) -> Result<f64> {
    Threshold::new(hit_skill).map(Threshold::probability)
}

/// Wound roll threshold for weapon `strength` against `toughness`.
///
/// Exact ratios of 2, 1 and 1/2 fall in the better bracket. Comparisons are
/// done on integers, so `strength * 2 >= toughness` stands for a ratio of at
/// least one half.
pub fn derive_wound_threshold(strength: u32, toughness: u32) -> Result<u8> {
    if toughness == 0 {
        return Err(Error::DivideByZero);
    }
    let s = u64::from(strength);
    let t = u64::from(toughness);
    let threshold = if s >= 2 * t {
        2
    } else if s > t {
        3
    } else if s == t {
        4
    } else if 2 * s >= t {
        5
    } else {
        6
    };
    Ok(threshold)
}

/// Probability of one attack both hitting and wounding.
pub fn derive_wound_probability(
    attacker: &AttackerProfile,
    defender: &DefenderProfile,
) -> Result<f64> {
    let hit = derive_hit_probability(attacker.hit_skill())?;
    let threshold = derive_wound_threshold(attacker.strength(), defender.toughness())?;
    let wound = Threshold::new(threshold)?.probability();
    debug!(hit, wound, threshold, "wound probability");
    Ok(hit * wound)
}

/// Probability that the defender's armor save succeeds.
pub fn derive_save_probability(defender: &DefenderProfile) -> Result<f64> {
    Threshold::new(defender.armor_save()).map(Threshold::probability)
}

/// Probability of one attack hitting, wounding, and the armor save failing.
pub fn derive_failed_save_probability(
    attacker: &AttackerProfile,
    defender: &DefenderProfile,
) -> Result<f64> {
    let wound = derive_wound_probability(attacker, defender)?;
    let save = derive_save_probability(defender)?;
    debug!(wound, save, "failed save probability");
    Ok(wound * (1.0 - save))
}
