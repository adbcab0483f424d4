//! Location entity - places within a campaign

use serde::{Deserialize, Serialize};

use crate::entities::refs::{NpcRef, QuestRef};
use crate::ids::{CampaignId, LocationId};
use crate::value_objects::{Description, EntityName};

/// A place scoped to exactly one campaign.
///
/// The location endpoint embeds the NPCs found there and the quests that take
/// place there. On the wire the quest collection is named `missions`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub id: LocationId,
    pub campaign_id: CampaignId,
    pub name: EntityName,
    #[serde(default)]
    pub description: Description,
    #[serde(default)]
    pub npcs: Vec<NpcRef>,
    #[serde(default, rename = "missions")]
    pub quests: Vec<QuestRef>,
}

impl Location {
    pub fn new(campaign_id: CampaignId, name: EntityName) -> Self {
        Self {
            id: LocationId::new(),
            campaign_id,
            name,
            description: Description::default(),
            npcs: Vec::new(),
            quests: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quests_serialize_under_missions_alias() {
        let location = Location::new(
            CampaignId::new(),
            EntityName::new("Old Bonegrinder").expect("valid name"),
        );
        let json = serde_json::to_value(&location).expect("serialize");
        assert!(json.get("missions").is_some());
        assert!(json.get("quests").is_none());
    }
}
