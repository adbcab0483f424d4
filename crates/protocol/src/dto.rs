//! Data Transfer Objects (DTOs)
//!
//! Wire-format types for the REST surface. These use raw UUIDs and primitive
//! types for transport rather than domain ID types; `to_domain()` converts
//! into validated domain entities (and can fail when the payload violates the
//! data model, e.g. a blank name).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use lorekeepr_domain::{
    Campaign, CampaignId, Description, DomainError, EntityName, GameMap, Location, LocationId,
    LocationRef, MapId, MapImage, Note, NoteId, Npc, NpcId, NpcRef, QuestId, QuestRef, UserId,
};

// =============================================================================
// Cross-reference stubs
// =============================================================================

/// Wire-format id + display-name stub embedded in location and NPC payloads.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefDto {
    pub id: Uuid,
    pub name: String,
}

impl RefDto {
    pub fn to_npc_ref(&self) -> NpcRef {
        NpcRef {
            id: NpcId::from_uuid(self.id),
            name: self.name.clone(),
        }
    }

    pub fn to_location_ref(&self) -> LocationRef {
        LocationRef {
            id: LocationId::from_uuid(self.id),
            name: self.name.clone(),
        }
    }

    pub fn to_quest_ref(&self) -> QuestRef {
        QuestRef {
            id: QuestId::from_uuid(self.id),
            name: self.name.clone(),
        }
    }
}

// =============================================================================
// Campaign + Note DTOs
// =============================================================================

/// Wire-format note as embedded in the campaign payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteDto {
    pub id: Uuid,
    pub campaign_id: Uuid,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl NoteDto {
    /// Convert to the domain entity, validating name and description.
    pub fn to_domain(&self) -> Result<Note, DomainError> {
        Ok(Note {
            id: NoteId::from_uuid(self.id),
            campaign_id: CampaignId::from_uuid(self.campaign_id),
            name: EntityName::new(&self.name)?,
            description: Description::new(&self.description)?,
        })
    }
}

/// Wire-format campaign with its embedded notes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignDto {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub owner: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub notes: Vec<NoteDto>,
}

impl CampaignDto {
    pub fn to_domain(&self) -> Result<Campaign, DomainError> {
        let notes = self
            .notes
            .iter()
            .map(NoteDto::to_domain)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Campaign {
            id: CampaignId::from_uuid(self.id),
            name: EntityName::new(&self.name)?,
            description: Description::new(&self.description)?,
            owner: UserId::from_uuid(self.owner),
            created_at: self.created_at,
            updated_at: self.updated_at,
            notes,
        })
    }
}

// =============================================================================
// Location DTO
// =============================================================================

/// Wire-format location; the quest collection is named `missions` upstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationDto {
    pub id: Uuid,
    pub campaign_id: Uuid,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub npcs: Vec<RefDto>,
    #[serde(default, rename = "missions")]
    pub quests: Vec<RefDto>,
}

impl LocationDto {
    pub fn to_domain(&self) -> Result<Location, DomainError> {
        Ok(Location {
            id: LocationId::from_uuid(self.id),
            campaign_id: CampaignId::from_uuid(self.campaign_id),
            name: EntityName::new(&self.name)?,
            description: Description::new(&self.description)?,
            npcs: self.npcs.iter().map(RefDto::to_npc_ref).collect(),
            quests: self.quests.iter().map(RefDto::to_quest_ref).collect(),
        })
    }
}

// =============================================================================
// NPC DTO
// =============================================================================

/// Wire-format NPC with its embedded location and quest stubs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NpcDto {
    pub id: Uuid,
    pub campaign_id: Uuid,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub locations: Vec<RefDto>,
    #[serde(default)]
    pub quests: Vec<RefDto>,
}

impl NpcDto {
    pub fn to_domain(&self) -> Result<Npc, DomainError> {
        Ok(Npc {
            id: NpcId::from_uuid(self.id),
            campaign_id: CampaignId::from_uuid(self.campaign_id),
            name: EntityName::new(&self.name)?,
            description: Description::new(&self.description)?,
            locations: self.locations.iter().map(RefDto::to_location_ref).collect(),
            quests: self.quests.iter().map(RefDto::to_quest_ref).collect(),
        })
    }
}

// =============================================================================
// Map DTO
// =============================================================================

/// Wire-format map; `file` holds the data-URL image payload when present.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapDto {
    pub id: Uuid,
    pub campaign_id: Uuid,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
}

impl MapDto {
    pub fn to_domain(&self) -> Result<GameMap, DomainError> {
        let image = match (&self.file, &self.filename) {
            (Some(file), Some(filename)) => Some(MapImage {
                file: file.clone(),
                filename: filename.clone(),
            }),
            _ => None,
        };
        Ok(GameMap {
            id: MapId::from_uuid(self.id),
            campaign_id: CampaignId::from_uuid(self.campaign_id),
            name: EntityName::new(&self.name)?,
            description: Description::new(&self.description)?,
            image,
        })
    }
}

// =============================================================================
// User DTO
// =============================================================================

/// Wire-format user record returned by the auth endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: Uuid,
    pub username: String,
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_dto_maps_missions_to_quests() {
        let json = serde_json::json!({
            "id": Uuid::new_v4(),
            "campaignId": Uuid::new_v4(),
            "name": "Tser Pool Encampment",
            "description": "A Vistani camp by the river.",
            "npcs": [{"id": Uuid::new_v4(), "name": "Madam Eva"}],
            "missions": [{"id": Uuid::new_v4(), "name": "The Card Reading"}],
        });
        let dto: LocationDto = serde_json::from_value(json).expect("deserialize");
        let location = dto.to_domain().expect("valid location");
        assert_eq!(location.quests.len(), 1);
        assert_eq!(location.quests[0].name, "The Card Reading");
        assert_eq!(location.npcs[0].name, "Madam Eva");
    }

    #[test]
    fn test_blank_name_fails_domain_conversion() {
        let dto = NoteDto {
            id: Uuid::new_v4(),
            campaign_id: Uuid::new_v4(),
            name: "   ".to_string(),
            description: String::new(),
        };
        assert!(dto.to_domain().is_err());
    }

    #[test]
    fn test_map_dto_requires_both_image_fields() {
        let dto = MapDto {
            id: Uuid::new_v4(),
            campaign_id: Uuid::new_v4(),
            name: "Argynvostholt".to_string(),
            description: String::new(),
            file: Some("data:image/png;base64,AAAA".to_string()),
            filename: None,
        };
        let map = dto.to_domain().expect("valid map");
        assert!(map.image.is_none());
    }

    #[test]
    fn test_campaign_dto_embeds_notes() {
        let campaign_id = Uuid::new_v4();
        let json = serde_json::json!({
            "id": campaign_id,
            "name": "Curse of Strahd",
            "description": "",
            "owner": Uuid::new_v4(),
            "createdAt": "2025-01-01T00:00:00Z",
            "updatedAt": "2025-01-02T00:00:00Z",
            "notes": [{
                "id": Uuid::new_v4(),
                "campaignId": campaign_id,
                "name": "Session zero",
                "description": "Safety tools discussed.",
            }],
        });
        let dto: CampaignDto = serde_json::from_value(json).expect("deserialize");
        let campaign = dto.to_domain().expect("valid campaign");
        assert_eq!(campaign.notes.len(), 1);
        assert_eq!(campaign.notes[0].name.as_str(), "Session zero");
    }
}
