//! NPC entity - non-player characters within a campaign

use serde::{Deserialize, Serialize};

use crate::entities::refs::{LocationRef, QuestRef};
use crate::ids::{CampaignId, NpcId};
use crate::value_objects::{Description, EntityName};

/// A non-player character scoped to exactly one campaign.
///
/// The NPC endpoint embeds the locations the NPC appears at and the quests
/// they are involved in.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Npc {
    pub id: NpcId,
    pub campaign_id: CampaignId,
    pub name: EntityName,
    #[serde(default)]
    pub description: Description,
    #[serde(default)]
    pub locations: Vec<LocationRef>,
    #[serde(default)]
    pub quests: Vec<QuestRef>,
}

impl Npc {
    pub fn new(campaign_id: CampaignId, name: EntityName) -> Self {
        Self {
            id: NpcId::new(),
            campaign_id,
            name,
            description: Description::default(),
            locations: Vec::new(),
            quests: Vec::new(),
        }
    }
}
