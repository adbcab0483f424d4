//! Ability score bonuses and character ability stats
//!
//! Races and subraces grant a six-axis ability bonus vector. Characters carry
//! per-ability stats with a per-skill proficiency mapping.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Ability score bonus vector granted by a race or subrace.
///
/// Always present on the wire; absent bonuses are zero-filled via `Default`.
/// Values are authored exactly and must survive the trip to the store without
/// rounding or mutation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AbilityBonuses {
    pub strength: i8,
    pub dexterity: i8,
    pub constitution: i8,
    pub intelligence: i8,
    pub wisdom: i8,
    pub charisma: i8,
}

impl AbilityBonuses {
    /// Vector with every axis at zero.
    pub fn zero() -> Self {
        Self::default()
    }

    /// Sum of all six axes.
    pub fn total(&self) -> i16 {
        i16::from(self.strength)
            + i16::from(self.dexterity)
            + i16::from(self.constitution)
            + i16::from(self.intelligence)
            + i16::from(self.wisdom)
            + i16::from(self.charisma)
    }

    /// True when no axis grants a bonus.
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}

/// One ability stat on a character sheet: name, raw value, and which skills
/// under this ability the character is proficient in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbilityStat {
    /// Ability name (e.g. "Strength")
    pub name: String,
    /// Raw score value
    pub value: i32,
    /// Skill name -> proficient, ordered for stable serialization
    #[serde(default)]
    pub skills: BTreeMap<String, bool>,
}

impl AbilityStat {
    /// Create a stat with no skill proficiencies.
    pub fn new(name: impl Into<String>, value: i32) -> Self {
        Self {
            name: name.into(),
            value,
            skills: BTreeMap::new(),
        }
    }

    /// Add a skill proficiency entry.
    pub fn with_skill(mut self, skill: impl Into<String>, proficient: bool) -> Self {
        self.skills.insert(skill.into(), proficient);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_zero_filled() {
        let bonuses = AbilityBonuses::default();
        assert!(bonuses.is_zero());
        assert_eq!(bonuses.total(), 0);
    }

    #[test]
    fn test_total_sums_all_axes() {
        let bonuses = AbilityBonuses {
            strength: 2,
            constitution: 1,
            charisma: -1,
            ..Default::default()
        };
        assert_eq!(bonuses.total(), 2);
    }

    #[test]
    fn test_missing_wire_fields_are_zero_filled() {
        let bonuses: AbilityBonuses =
            serde_json::from_str(r#"{"dexterity":2}"#).expect("deserialize");
        assert_eq!(bonuses.dexterity, 2);
        assert_eq!(bonuses.strength, 0);
        assert_eq!(bonuses.total(), 2);
    }

    #[test]
    fn test_serialization_preserves_authored_values() {
        let bonuses = AbilityBonuses {
            strength: 2,
            constitution: 2,
            ..Default::default()
        };
        let json = serde_json::to_value(bonuses).expect("serialize");
        assert_eq!(json["strength"], 2);
        assert_eq!(json["constitution"], 2);
        assert_eq!(json["wisdom"], 0);
    }

    #[test]
    fn test_ability_stat_skills() {
        let stat = AbilityStat::new("Dexterity", 14)
            .with_skill("Stealth", true)
            .with_skill("Acrobatics", false);
        assert_eq!(stat.skills.get("Stealth"), Some(&true));
        assert_eq!(stat.skills.get("Acrobatics"), Some(&false));
    }
}
