//! Content browser - section listings and draft creation
//!
//! Given a campaign and a section, lists that section's entities in
//! insertion order (no pagination, filtering or sorting) and creates new
//! draft entities with placeholder content from the [`DraftFactory`].
//! Characters come from the session vault; everything else from the REST
//! surface.

use std::sync::Arc;

use uuid::Uuid;

use lorekeepr_domain::{CampaignId, Character, ColorTag, EntityName};
use lorekeepr_protocol::{CreateLocationData, CreateMapData, CreateNoteData, CreateNpcData};

use crate::application::draft::DraftFactory;
use crate::application::error::ServiceError;
use crate::application::services::{LocationService, MapService, NoteService, NpcService};
use crate::application::vault::CharacterVault;
use crate::ports::outbound::ApiPort;
use crate::routes::{Route, Section};

/// One tile in a section grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionEntry {
    pub id: Uuid,
    pub name: String,
    /// Browser tile color; only characters carry one.
    pub color: Option<ColorTag>,
    /// Where selecting the tile navigates.
    pub route: Route,
}

pub struct ContentBrowser<A: ApiPort + Clone> {
    locations: LocationService<A>,
    maps: MapService<A>,
    notes: NoteService<A>,
    npcs: NpcService<A>,
    vault: CharacterVault,
    drafts: Arc<dyn DraftFactory>,
}

impl<A: ApiPort + Clone> ContentBrowser<A> {
    pub fn new(api: A, vault: CharacterVault, drafts: Arc<dyn DraftFactory>) -> Self {
        Self {
            locations: LocationService::new(api.clone()),
            maps: MapService::new(api.clone()),
            notes: NoteService::new(api.clone()),
            npcs: NpcService::new(api),
            vault,
            drafts,
        }
    }

    /// List the section's entities for the campaign, insertion order.
    pub async fn entries(
        &self,
        campaign_id: CampaignId,
        section: Section,
    ) -> Result<Vec<SectionEntry>, ServiceError> {
        let entries = match section {
            Section::Maps => self
                .maps
                .list(campaign_id)
                .await?
                .into_iter()
                .map(|map| SectionEntry {
                    id: map.id.to_uuid(),
                    name: map.name.to_string(),
                    color: None,
                    route: Route::MapDetail {
                        campaign_id,
                        map_id: map.id,
                    },
                })
                .collect(),
            Section::Locations => self
                .locations
                .list(campaign_id)
                .await?
                .into_iter()
                .map(|location| SectionEntry {
                    id: location.id.to_uuid(),
                    name: location.name.to_string(),
                    color: None,
                    route: Route::LocationDetail {
                        campaign_id,
                        location_id: location.id,
                    },
                })
                .collect(),
            Section::Npcs => self
                .npcs
                .list(campaign_id)
                .await?
                .into_iter()
                .map(|npc| SectionEntry {
                    id: npc.id.to_uuid(),
                    name: npc.name.to_string(),
                    color: None,
                    route: Route::NpcDetail {
                        campaign_id,
                        npc_id: npc.id,
                    },
                })
                .collect(),
            Section::Notes => self
                .notes
                .list(campaign_id)
                .await?
                .into_iter()
                .map(|note| SectionEntry {
                    id: note.id.to_uuid(),
                    name: note.name.to_string(),
                    color: None,
                    route: Route::NoteDetail {
                        campaign_id,
                        note_id: note.id,
                    },
                })
                .collect(),
            Section::Characters => self
                .vault
                .list(campaign_id)
                .into_iter()
                .map(|character| SectionEntry {
                    id: character.id.to_uuid(),
                    name: character.name.to_string(),
                    color: Some(character.color),
                    route: Route::CharacterDetail {
                        campaign_id,
                        character_id: character.id,
                    },
                })
                .collect(),
        };
        Ok(entries)
    }

    /// Create a draft entity with placeholder content and persist it.
    ///
    /// REST sections POST to their collection endpoint; characters go to the
    /// session vault. Returns the tile for the new entity.
    pub async fn create_new(
        &self,
        campaign_id: CampaignId,
        section: Section,
    ) -> Result<SectionEntry, ServiceError> {
        let name = self.drafts.placeholder_name(section);
        match section {
            Section::Maps => {
                let map = self
                    .maps
                    .create(
                        campaign_id,
                        &CreateMapData {
                            name,
                            description: String::new(),
                        },
                    )
                    .await?;
                Ok(SectionEntry {
                    id: map.id.to_uuid(),
                    name: map.name.to_string(),
                    color: None,
                    route: Route::MapDetail {
                        campaign_id,
                        map_id: map.id,
                    },
                })
            }
            Section::Locations => {
                let location = self
                    .locations
                    .create(
                        campaign_id,
                        &CreateLocationData {
                            name,
                            description: String::new(),
                        },
                    )
                    .await?;
                Ok(SectionEntry {
                    id: location.id.to_uuid(),
                    name: location.name.to_string(),
                    color: None,
                    route: Route::LocationDetail {
                        campaign_id,
                        location_id: location.id,
                    },
                })
            }
            Section::Npcs => {
                let npc = self
                    .npcs
                    .create(
                        campaign_id,
                        &CreateNpcData {
                            name,
                            description: String::new(),
                        },
                    )
                    .await?;
                Ok(SectionEntry {
                    id: npc.id.to_uuid(),
                    name: npc.name.to_string(),
                    color: None,
                    route: Route::NpcDetail {
                        campaign_id,
                        npc_id: npc.id,
                    },
                })
            }
            Section::Notes => {
                let note = self
                    .notes
                    .create(
                        campaign_id,
                        &CreateNoteData {
                            name,
                            description: String::new(),
                        },
                    )
                    .await?;
                Ok(SectionEntry {
                    id: note.id.to_uuid(),
                    name: note.name.to_string(),
                    color: None,
                    route: Route::NoteDetail {
                        campaign_id,
                        note_id: note.id,
                    },
                })
            }
            Section::Characters => {
                let character = Character::new(
                    campaign_id,
                    EntityName::new(&name)?,
                    self.drafts.placeholder_color(),
                );
                let entry = SectionEntry {
                    id: character.id.to_uuid(),
                    name: character.name.to_string(),
                    color: Some(character.color.clone()),
                    route: Route::CharacterDetail {
                        campaign_id,
                        character_id: character.id,
                    },
                };
                self.vault.upsert(character)?;
                Ok(entry)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::api::Api;
    use crate::infrastructure::session_store::MemorySessionStore;
    use crate::ports::outbound::testing::ScriptedApi;
    use serde_json::json;

    struct FixedDraftFactory;

    impl DraftFactory for FixedDraftFactory {
        fn placeholder_name(&self, _section: Section) -> String {
            "Gilded Stranger".to_string()
        }

        fn placeholder_color(&self) -> ColorTag {
            ColorTag::from_rgb(1, 2, 3)
        }
    }

    fn browser(scripted: Arc<ScriptedApi>) -> ContentBrowser<Api> {
        ContentBrowser::new(
            Api::new(scripted),
            CharacterVault::new(Arc::new(MemorySessionStore::new())),
            Arc::new(FixedDraftFactory),
        )
    }

    #[tokio::test]
    async fn test_characters_are_scoped_to_their_campaign() {
        let browser = browser(Arc::new(ScriptedApi::new()));
        let campaign_a = CampaignId::new();
        let campaign_b = CampaignId::new();

        let created = browser
            .create_new(campaign_a, Section::Characters)
            .await
            .expect("vault create");
        assert_eq!(created.name, "Gilded Stranger");
        assert_eq!(created.color, Some(ColorTag::from_rgb(1, 2, 3)));

        let in_a = browser
            .entries(campaign_a, Section::Characters)
            .await
            .expect("vault list");
        assert_eq!(in_a.len(), 1);

        // A character created under campaign A must not surface in campaign B
        let in_b = browser
            .entries(campaign_b, Section::Characters)
            .await
            .expect("vault list");
        assert!(in_b.is_empty());
    }

    #[tokio::test]
    async fn test_create_new_npc_posts_placeholder_to_collection() {
        let scripted = Arc::new(ScriptedApi::new());
        let campaign_id = CampaignId::new();
        let npc_id = uuid::Uuid::new_v4();
        scripted.push_ok(json!({
            "id": npc_id,
            "campaignId": campaign_id.to_uuid(),
            "name": "Gilded Stranger",
            "description": "",
            "locations": [],
            "quests": [],
        }));
        let browser = browser(scripted.clone());

        let entry = browser
            .create_new(campaign_id, Section::Npcs)
            .await
            .expect("scripted ok");

        let call = &scripted.calls()[0];
        assert_eq!(call.method, "POST");
        assert_eq!(call.path, format!("/api/campaigns/{campaign_id}/npcs"));
        let body = call.body.as_ref().expect("body recorded");
        assert_eq!(body["name"], "Gilded Stranger");
        assert_eq!(entry.id, npc_id);
    }

    #[tokio::test]
    async fn test_entries_keep_listing_order() {
        let scripted = Arc::new(ScriptedApi::new());
        let campaign_id = CampaignId::new();
        scripted.push_ok(json!([
            {
                "id": uuid::Uuid::new_v4(),
                "campaignId": campaign_id.to_uuid(),
                "name": "Village of Barovia",
                "description": "",
            },
            {
                "id": uuid::Uuid::new_v4(),
                "campaignId": campaign_id.to_uuid(),
                "name": "Vallaki",
                "description": "",
            },
        ]));
        let browser = browser(scripted);

        let entries = browser
            .entries(campaign_id, Section::Locations)
            .await
            .expect("scripted ok");
        let names: Vec<_> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Village of Barovia", "Vallaki"]);
    }
}
