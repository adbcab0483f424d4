//! Entity resources - per-entity bindings for the generalized editor
//!
//! Each resource captures the identifiers of one record plus the service that
//! reaches it, derives the editable draft from the loaded record, and maps
//! the draft back onto the wire payload of the update endpoint. Five of the
//! six talk REST; the character resource talks to the session vault.

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use lorekeepr_domain::{
    Campaign, CampaignId, Character, CharacterId, ColorTag, Description, EntityName, GameMap,
    Location, LocationId, LocationRef, MapId, MapImage, Note, NoteId, Npc, NpcId, NpcRef,
    QuestRef,
};
use lorekeepr_protocol::{UpdateCampaignData, UpdateLocationData, UpdateMapData, UpdateNoteData,
    UpdateNpcData};

use crate::application::editor::EntityResource;
use crate::application::error::ServiceError;
use crate::application::services::{
    CampaignService, LocationService, MapService, NoteService, NpcService,
};
use crate::application::vault::CharacterVault;
use crate::ports::outbound::ApiPort;
use crate::routes::{Route, Section};

// =============================================================================
// Campaign
// =============================================================================

/// Editable campaign fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CampaignDraft {
    pub name: String,
    pub description: String,
}

pub struct CampaignResource<A: ApiPort> {
    service: CampaignService<A>,
    campaign_id: CampaignId,
}

impl<A: ApiPort> CampaignResource<A> {
    pub fn new(service: CampaignService<A>, campaign_id: CampaignId) -> Self {
        Self {
            service,
            campaign_id,
        }
    }
}

#[async_trait]
impl<A: ApiPort> EntityResource for CampaignResource<A> {
    type Record = Campaign;
    type Draft = CampaignDraft;

    fn label(&self) -> &'static str {
        "campaign"
    }

    fn draft_from(&self, record: Campaign) -> CampaignDraft {
        CampaignDraft {
            name: record.name.to_string(),
            description: record.description.to_string(),
        }
    }

    fn draft_name<'a>(&self, draft: &'a CampaignDraft) -> &'a str {
        &draft.name
    }

    async fn fetch_one(&self) -> Result<Campaign, ServiceError> {
        self.service.get(self.campaign_id).await
    }

    async fn update(&self, draft: &CampaignDraft) -> Result<(), ServiceError> {
        self.service
            .update(
                self.campaign_id,
                &UpdateCampaignData {
                    name: draft.name.clone(),
                    description: draft.description.clone(),
                },
            )
            .await?;
        Ok(())
    }

    async fn remove(&self) -> Result<(), ServiceError> {
        Err(lorekeepr_domain::DomainError::constraint(
            "campaigns are deleted through account flows",
        )
        .into())
    }

    // Only the owner's account flow may delete a campaign
    fn supports_delete(&self) -> bool {
        false
    }

    fn detail_route(&self) -> Route {
        Route::CampaignDetail {
            campaign_id: self.campaign_id,
        }
    }

    fn list_route(&self) -> Route {
        Route::CampaignList
    }
}

// =============================================================================
// Location
// =============================================================================

/// Editable location fields, including the cross-reference lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationDraft {
    pub name: String,
    pub description: String,
    pub npcs: Vec<NpcRef>,
    pub quests: Vec<QuestRef>,
}

pub struct LocationResource<A: ApiPort> {
    service: LocationService<A>,
    campaign_id: CampaignId,
    location_id: LocationId,
}

impl<A: ApiPort> LocationResource<A> {
    pub fn new(
        service: LocationService<A>,
        campaign_id: CampaignId,
        location_id: LocationId,
    ) -> Self {
        Self {
            service,
            campaign_id,
            location_id,
        }
    }
}

#[async_trait]
impl<A: ApiPort> EntityResource for LocationResource<A> {
    type Record = Location;
    type Draft = LocationDraft;

    fn label(&self) -> &'static str {
        "location"
    }

    fn draft_from(&self, record: Location) -> LocationDraft {
        LocationDraft {
            name: record.name.to_string(),
            description: record.description.to_string(),
            npcs: record.npcs,
            quests: record.quests,
        }
    }

    fn draft_name<'a>(&self, draft: &'a LocationDraft) -> &'a str {
        &draft.name
    }

    async fn fetch_one(&self) -> Result<Location, ServiceError> {
        self.service.get(self.campaign_id, self.location_id).await
    }

    async fn update(&self, draft: &LocationDraft) -> Result<(), ServiceError> {
        self.service
            .update(
                self.campaign_id,
                self.location_id,
                &UpdateLocationData {
                    name: draft.name.clone(),
                    description: draft.description.clone(),
                    npcs: Some(draft.npcs.iter().map(|r| r.id.to_uuid()).collect()),
                    quests: Some(draft.quests.iter().map(|r| r.id.to_uuid()).collect()),
                },
            )
            .await
    }

    async fn remove(&self) -> Result<(), ServiceError> {
        self.service.delete(self.campaign_id, self.location_id).await
    }

    fn detail_route(&self) -> Route {
        Route::LocationDetail {
            campaign_id: self.campaign_id,
            location_id: self.location_id,
        }
    }

    fn list_route(&self) -> Route {
        Route::SectionList {
            campaign_id: self.campaign_id,
            section: Section::Locations,
        }
    }
}

// =============================================================================
// Map
// =============================================================================

/// Editable map fields with the client-side image payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapDraft {
    pub name: String,
    pub description: String,
    pub image: Option<MapImage>,
}

impl MapDraft {
    /// Attach a locally selected file, converting it to an embeddable data
    /// URL entirely client-side. The engine stores the payload opaquely;
    /// no server-side validation of type or size is assumed.
    pub fn attach_image(&mut self, bytes: &[u8], filename: &str) {
        self.image = Some(MapImage {
            file: data_url(bytes, filename),
            filename: filename.to_string(),
        });
    }
}

fn data_url(bytes: &[u8], filename: &str) -> String {
    let extension = std::path::Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    let mime = match extension.as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        _ => "application/octet-stream",
    };
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}

pub struct MapResource<A: ApiPort> {
    service: MapService<A>,
    campaign_id: CampaignId,
    map_id: MapId,
}

impl<A: ApiPort> MapResource<A> {
    pub fn new(service: MapService<A>, campaign_id: CampaignId, map_id: MapId) -> Self {
        Self {
            service,
            campaign_id,
            map_id,
        }
    }
}

#[async_trait]
impl<A: ApiPort> EntityResource for MapResource<A> {
    type Record = GameMap;
    type Draft = MapDraft;

    fn label(&self) -> &'static str {
        "map"
    }

    fn draft_from(&self, record: GameMap) -> MapDraft {
        MapDraft {
            name: record.name.to_string(),
            description: record.description.to_string(),
            image: record.image,
        }
    }

    fn draft_name<'a>(&self, draft: &'a MapDraft) -> &'a str {
        &draft.name
    }

    async fn fetch_one(&self) -> Result<GameMap, ServiceError> {
        self.service.get(self.campaign_id, self.map_id).await
    }

    async fn update(&self, draft: &MapDraft) -> Result<(), ServiceError> {
        self.service
            .update(
                self.campaign_id,
                self.map_id,
                &UpdateMapData {
                    name: draft.name.clone(),
                    description: draft.description.clone(),
                    file: draft.image.as_ref().map(|i| i.file.clone()),
                    filename: draft.image.as_ref().map(|i| i.filename.clone()),
                },
            )
            .await
    }

    async fn remove(&self) -> Result<(), ServiceError> {
        self.service.delete(self.campaign_id, self.map_id).await
    }

    fn detail_route(&self) -> Route {
        Route::MapDetail {
            campaign_id: self.campaign_id,
            map_id: self.map_id,
        }
    }

    fn list_route(&self) -> Route {
        Route::SectionList {
            campaign_id: self.campaign_id,
            section: Section::Maps,
        }
    }
}

// =============================================================================
// Note
// =============================================================================

/// Editable note fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteDraft {
    pub name: String,
    pub description: String,
}

pub struct NoteResource<A: ApiPort + Clone> {
    service: NoteService<A>,
    campaign_id: CampaignId,
    note_id: NoteId,
}

impl<A: ApiPort + Clone> NoteResource<A> {
    pub fn new(service: NoteService<A>, campaign_id: CampaignId, note_id: NoteId) -> Self {
        Self {
            service,
            campaign_id,
            note_id,
        }
    }
}

#[async_trait]
impl<A: ApiPort + Clone> EntityResource for NoteResource<A> {
    type Record = Note;
    type Draft = NoteDraft;

    fn label(&self) -> &'static str {
        "note"
    }

    fn draft_from(&self, record: Note) -> NoteDraft {
        NoteDraft {
            name: record.name.to_string(),
            description: record.description.to_string(),
        }
    }

    fn draft_name<'a>(&self, draft: &'a NoteDraft) -> &'a str {
        &draft.name
    }

    async fn fetch_one(&self) -> Result<Note, ServiceError> {
        self.service.get(self.campaign_id, self.note_id).await
    }

    async fn update(&self, draft: &NoteDraft) -> Result<(), ServiceError> {
        self.service
            .update(
                self.campaign_id,
                self.note_id,
                &UpdateNoteData {
                    name: draft.name.clone(),
                    description: draft.description.clone(),
                },
            )
            .await
    }

    async fn remove(&self) -> Result<(), ServiceError> {
        self.service.delete(self.campaign_id, self.note_id).await
    }

    fn detail_route(&self) -> Route {
        Route::NoteDetail {
            campaign_id: self.campaign_id,
            note_id: self.note_id,
        }
    }

    fn list_route(&self) -> Route {
        Route::SectionList {
            campaign_id: self.campaign_id,
            section: Section::Notes,
        }
    }
}

// =============================================================================
// NPC
// =============================================================================

/// Editable NPC fields, including the cross-reference lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NpcDraft {
    pub name: String,
    pub description: String,
    pub locations: Vec<LocationRef>,
    pub quests: Vec<QuestRef>,
}

pub struct NpcResource<A: ApiPort> {
    service: NpcService<A>,
    campaign_id: CampaignId,
    npc_id: NpcId,
}

impl<A: ApiPort> NpcResource<A> {
    pub fn new(service: NpcService<A>, campaign_id: CampaignId, npc_id: NpcId) -> Self {
        Self {
            service,
            campaign_id,
            npc_id,
        }
    }
}

#[async_trait]
impl<A: ApiPort> EntityResource for NpcResource<A> {
    type Record = Npc;
    type Draft = NpcDraft;

    fn label(&self) -> &'static str {
        "NPC"
    }

    fn draft_from(&self, record: Npc) -> NpcDraft {
        NpcDraft {
            name: record.name.to_string(),
            description: record.description.to_string(),
            locations: record.locations,
            quests: record.quests,
        }
    }

    fn draft_name<'a>(&self, draft: &'a NpcDraft) -> &'a str {
        &draft.name
    }

    async fn fetch_one(&self) -> Result<Npc, ServiceError> {
        self.service.get(self.campaign_id, self.npc_id).await
    }

    async fn update(&self, draft: &NpcDraft) -> Result<(), ServiceError> {
        self.service
            .update(
                self.campaign_id,
                self.npc_id,
                &UpdateNpcData {
                    name: draft.name.clone(),
                    description: draft.description.clone(),
                    locations: Some(draft.locations.iter().map(|r| r.id.to_uuid()).collect()),
                    quests: Some(draft.quests.iter().map(|r| r.id.to_uuid()).collect()),
                },
            )
            .await
    }

    async fn remove(&self) -> Result<(), ServiceError> {
        self.service.delete(self.campaign_id, self.npc_id).await
    }

    fn detail_route(&self) -> Route {
        Route::NpcDetail {
            campaign_id: self.campaign_id,
            npc_id: self.npc_id,
        }
    }

    fn list_route(&self) -> Route {
        Route::SectionList {
            campaign_id: self.campaign_id,
            section: Section::Npcs,
        }
    }
}

// =============================================================================
// Character (session vault, not REST)
// =============================================================================

/// Editable character sheet fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterDraft {
    pub name: String,
    pub color: ColorTag,
    pub description: String,
    pub level: u8,
    pub proficiency_bonus: i8,
    pub race: String,
    pub class: String,
    pub subclass: String,
    pub stats: Vec<lorekeepr_domain::AbilityStat>,
    pub equipment: Vec<String>,
}

pub struct CharacterResource {
    vault: CharacterVault,
    campaign_id: CampaignId,
    character_id: CharacterId,
}

impl CharacterResource {
    pub fn new(vault: CharacterVault, campaign_id: CampaignId, character_id: CharacterId) -> Self {
        Self {
            vault,
            campaign_id,
            character_id,
        }
    }
}

#[async_trait]
impl EntityResource for CharacterResource {
    type Record = Character;
    type Draft = CharacterDraft;

    fn label(&self) -> &'static str {
        "character"
    }

    fn draft_from(&self, record: Character) -> CharacterDraft {
        CharacterDraft {
            name: record.name.to_string(),
            color: record.color,
            description: record.description.to_string(),
            level: record.level,
            proficiency_bonus: record.proficiency_bonus,
            race: record.race,
            class: record.class,
            subclass: record.subclass,
            stats: record.stats,
            equipment: record.equipment,
        }
    }

    fn draft_name<'a>(&self, draft: &'a CharacterDraft) -> &'a str {
        &draft.name
    }

    async fn fetch_one(&self) -> Result<Character, ServiceError> {
        self.vault.get(self.campaign_id, self.character_id)
    }

    async fn update(&self, draft: &CharacterDraft) -> Result<(), ServiceError> {
        let character = Character {
            id: self.character_id,
            campaign_id: self.campaign_id,
            name: EntityName::new(&draft.name)?,
            color: draft.color.clone(),
            description: Description::new(&draft.description)?,
            level: draft.level,
            proficiency_bonus: draft.proficiency_bonus,
            race: draft.race.clone(),
            class: draft.class.clone(),
            subclass: draft.subclass.clone(),
            stats: draft.stats.clone(),
            equipment: draft.equipment.clone(),
        };
        self.vault.upsert(character)
    }

    async fn remove(&self) -> Result<(), ServiceError> {
        self.vault.remove(self.character_id)
    }

    fn detail_route(&self) -> Route {
        Route::CharacterDetail {
            campaign_id: self.campaign_id,
            character_id: self.character_id,
        }
    }

    fn list_route(&self) -> Route {
        Route::SectionList {
            campaign_id: self.campaign_id,
            section: Section::Characters,
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
    use std::sync::Arc;

    #[test]
    fn test_attach_image_builds_png_data_url() {
        let mut draft = MapDraft {
            name: "Death House".to_string(),
            description: String::new(),
            image: None,
        };
        draft.attach_image(&[0x89, 0x50, 0x4e, 0x47], "floor-one.PNG");

        let image = draft.image.expect("image attached");
        assert_eq!(image.filename, "floor-one.PNG");
        assert_eq!(image.file, "data:image/png;base64,iVBORw==");
    }

    #[test]
    fn test_attach_image_unknown_extension_falls_back() {
        let mut draft = MapDraft {
            name: "Handout".to_string(),
            description: String::new(),
            image: None,
        };
        draft.attach_image(b"abc", "handout");
        let image = draft.image.expect("image attached");
        assert!(image.file.starts_with("data:application/octet-stream;base64,"));
    }

    #[tokio::test]
    async fn test_noop_location_save_round_trips_loaded_fields() {
        let scripted = Arc::new(ScriptedApi::new());
        let campaign_id = CampaignId::new();
        let location_id = LocationId::new();
        let npc_id = uuid::Uuid::new_v4();
        scripted.push_ok(json!({
            "id": location_id.to_uuid(),
            "campaignId": campaign_id.to_uuid(),
            "name": "Wizard of Wines",
            "description": "A fortified winery.",
            "npcs": [{"id": npc_id, "name": "Davian Martikov"}],
            "missions": [],
        }));
        scripted.push_ok(json!({}));

        let resource = LocationResource::new(
            LocationService::new(Api::new(scripted.clone())),
            campaign_id,
            location_id,
        );
        let record = resource.fetch_one().await.expect("scripted ok");
        let draft = resource.draft_from(record);
        resource.update(&draft).await.expect("scripted ok");

        let calls = scripted.calls();
        assert_eq!(calls[1].method, "PUT");
        let body = calls[1].body.as_ref().expect("body recorded");
        assert_eq!(body["name"], "Wizard of Wines");
        assert_eq!(body["description"], "A fortified winery.");
        assert_eq!(body["npcs"], json!([npc_id]));
        assert_eq!(body["missions"], json!([]));
    }

    #[tokio::test]
    async fn test_character_resource_persists_to_vault_only() {
        let vault = CharacterVault::new(Arc::new(MemorySessionStore::new()));
        let campaign_id = CampaignId::new();
        let character = Character::new(
            campaign_id,
            EntityName::new("Ireena").expect("valid name"),
            ColorTag::from_rgb(9, 9, 9),
        );
        let character_id = character.id;
        vault.upsert(character).expect("seeded");

        let resource = CharacterResource::new(vault.clone(), campaign_id, character_id);
        let record = resource.fetch_one().await.expect("in vault");
        let mut draft = resource.draft_from(record);
        draft.level = 4;
        resource.update(&draft).await.expect("vault write");

        let stored = vault.get(campaign_id, character_id).expect("stored");
        assert_eq!(stored.level, 4);

        resource.remove().await.expect("vault remove");
        assert!(vault.get(campaign_id, character_id).is_err());
    }

    #[test]
    fn test_campaign_resource_is_not_deletable() {
        let resource = CampaignResource::new(
            CampaignService::new(Api::new(Arc::new(ScriptedApi::new()))),
            CampaignId::new(),
        );
        assert!(!resource.supports_delete());
    }
}
