//! Note entity - freeform campaign notes

use serde::{Deserialize, Serialize};

use crate::ids::{CampaignId, NoteId};
use crate::value_objects::{Description, EntityName};

/// A freeform note scoped to exactly one campaign.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: NoteId,
    pub campaign_id: CampaignId,
    pub name: EntityName,
    #[serde(default)]
    pub description: Description,
}

impl Note {
    pub fn new(campaign_id: CampaignId, name: EntityName) -> Self {
        Self {
            id: NoteId::new(),
            campaign_id,
            name,
            description: Description::default(),
        }
    }
}
