//! Map entity - battle and region maps within a campaign

use serde::{Deserialize, Serialize};

use crate::ids::{CampaignId, MapId};
use crate::value_objects::{Description, EntityName};

/// The image payload attached to a map.
///
/// `file` holds the embeddable data-URL representation produced client-side;
/// the engine stores it opaquely and performs no format validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapImage {
    pub file: String,
    pub filename: String,
}

/// A map scoped to exactly one campaign, with an optional image payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameMap {
    pub id: MapId,
    pub campaign_id: CampaignId,
    pub name: EntityName,
    #[serde(default)]
    pub description: Description,
    #[serde(flatten)]
    pub image: Option<MapImage>,
}

impl GameMap {
    pub fn new(campaign_id: CampaignId, name: EntityName) -> Self {
        Self {
            id: MapId::new(),
            campaign_id,
            name,
            description: Description::default(),
            image: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_fields_flatten_onto_map() {
        let mut map = GameMap::new(
            CampaignId::new(),
            EntityName::new("Death House").expect("valid name"),
        );
        map.image = Some(MapImage {
            file: "data:image/png;base64,AAAA".to_string(),
            filename: "death-house.png".to_string(),
        });
        let json = serde_json::to_value(&map).expect("serialize");
        assert_eq!(json["file"], "data:image/png;base64,AAAA");
        assert_eq!(json["filename"], "death-house.png");
    }

    #[test]
    fn test_map_without_image_round_trips() {
        let map = GameMap::new(
            CampaignId::new(),
            EntityName::new("Vallaki").expect("valid name"),
        );
        let json = serde_json::to_string(&map).expect("serialize");
        let back: GameMap = serde_json::from_str(&json).expect("deserialize");
        assert!(back.image.is_none());
    }
}
