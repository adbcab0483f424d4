//! Character entity - player characters within a campaign
//!
//! Characters carry sheet-level data (level, proficiency bonus, ability stats,
//! equipment) alongside the name/color/description shared by all content
//! types. Race/class/subclass are stored as display labels; the reference
//! catalogue is not joined client-side.

use serde::{Deserialize, Serialize};

use crate::ids::{CampaignId, CharacterId};
use crate::value_objects::{AbilityStat, ColorTag, Description, EntityName};

/// A player character scoped to exactly one campaign.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    pub id: CharacterId,
    pub campaign_id: CampaignId,
    pub name: EntityName,
    /// Visual tag used by the browser grid
    pub color: ColorTag,
    #[serde(default)]
    pub description: Description,
    pub level: u8,
    pub proficiency_bonus: i8,
    /// Display labels, not catalogue references
    #[serde(default)]
    pub race: String,
    #[serde(default)]
    pub class: String,
    #[serde(default)]
    pub subclass: String,
    /// Ability stats with per-skill proficiency mapping
    #[serde(default)]
    pub stats: Vec<AbilityStat>,
    /// Ordered equipment list
    #[serde(default)]
    pub equipment: Vec<String>,
}

impl Character {
    /// Create a fresh level-1 character with an empty sheet.
    pub fn new(campaign_id: CampaignId, name: EntityName, color: ColorTag) -> Self {
        Self {
            id: CharacterId::new(),
            campaign_id,
            name,
            color,
            description: Description::default(),
            level: 1,
            proficiency_bonus: 2,
            race: String::new(),
            class: String::new(),
            subclass: String::new(),
            stats: Vec::new(),
            equipment: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_character_starts_at_level_one() {
        let character = Character::new(
            CampaignId::new(),
            EntityName::new("Ireena").expect("valid name"),
            ColorTag::from_rgb(10, 20, 30),
        );
        assert_eq!(character.level, 1);
        assert_eq!(character.proficiency_bonus, 2);
        assert!(character.equipment.is_empty());
    }

    #[test]
    fn test_wire_shape_is_camel_case() {
        let character = Character::new(
            CampaignId::new(),
            EntityName::new("Ireena").expect("valid name"),
            ColorTag::from_rgb(0, 0, 0),
        );
        let json = serde_json::to_value(&character).expect("serialize");
        assert!(json.get("campaignId").is_some());
        assert!(json.get("proficiencyBonus").is_some());
    }
}
