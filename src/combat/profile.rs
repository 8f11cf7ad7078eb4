use std::fmt::{self, Display};

use bon::Builder;

#[derive(Builder, Debug, Clone, PartialEq, Eq)]
#[builder(start_fn(name = "new"))]
pub struct AttackerProfile {
    #[builder(start_fn)]
    hit_skill: u8,
    #[builder(start_fn)]
    strength: u32,
    #[builder(default = 1)]
    units: u32,
    #[builder(default = 1)]
    attacks_per_unit: u32,
    #[builder(default = 0)]
    armor_pierce: u32,
    #[builder(default = 1)]
    damage: u32,
}

#[derive(Builder, Debug, Clone, PartialEq, Eq)]
#[builder(start_fn(name = "new"))]
pub struct DefenderProfile {
    #[builder(start_fn)]
    toughness: u32,
    #[builder(start_fn)]
    armor_save: u8,
    invulnerable_save: Option<u8>,
    feel_no_pain: Option<u8>,
    #[builder(default = 1)]
    wounds: u32,
    #[builder(default = 1)]
    units: u32,
}

impl AttackerProfile {
    #[must_use]
    pub fn hit_skill(&self) -> u8 {
        self.hit_skill
    }

    #[must_use]
    pub fn strength(&self) -> u32 {
        self.strength
    }

    #[must_use]
    pub fn units(&self) -> u32 {
        self.units
    }

    #[must_use]
    pub fn attacks_per_unit(&self) -> u32 {
        self.attacks_per_unit
    }

    #[must_use]
    pub fn armor_pierce(&self) -> u32 {
        self.armor_pierce
    }

    #[must_use]
    pub fn damage(&self) -> u32 {
        self.damage
    }

    /// Number of dice rolled at every stage: units times attacks per unit.
    #[must_use]
    pub fn total_attacks(&self) -> u32 {
        self.units.saturating_mul(self.attacks_per_unit)
    }
}

impl DefenderProfile {
    #[must_use]
    pub fn toughness(&self) -> u32 {
        self.toughness
    }

    #[must_use]
    pub fn armor_save(&self) -> u8 {
        self.armor_save
    }

    #[must_use]
    pub fn invulnerable_save(&self) -> Option<u8> {
        self.invulnerable_save
    }

    #[must_use]
    pub fn feel_no_pain(&self) -> Option<u8> {
        self.feel_no_pain
    }

    #[must_use]
    pub fn wounds(&self) -> u32 {
        self.wounds
    }

    #[must_use]
    pub fn units(&self) -> u32 {
        self.units
    }
}

impl Display for AttackerProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Attacker:")?;
        writeln!(f, "Units: {}", self.units)?;
        writeln!(f, "Attacks: {}", self.attacks_per_unit)?;
        writeln!(f, "HitSkill: {}+", self.hit_skill)?;
        writeln!(f, "Strength: {}", self.strength)?;
        writeln!(f, "ArmorPierce: {}", self.armor_pierce)?;
        write!(f, "Damage: {}", self.damage)
    }
}

impl Display for DefenderProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Defender:")?;
        writeln!(f, "Units: {}", self.units)?;
        writeln!(f, "Toughness: {}", self.toughness)?;
        writeln!(f, "ArmorSave: {}+", self.armor_save)?;
        writeln!(f, "InvulnerableSave: {}", optional_threshold(self.invulnerable_save))?;
        writeln!(f, "FeelNoPain: {}", optional_threshold(self.feel_no_pain))?;
        write!(f, "Wounds: {}", self.wounds)
    }
}

fn optional_threshold(value: Option<u8>) -> String {
    value.map_or_else(|| "-".to_owned(), |x| format!("{x}+"))
}
