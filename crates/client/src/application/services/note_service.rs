//! Note service
//!
//! Notes have no item GET; the campaign payload embeds them. Loading a note
//! therefore goes through the campaign service and picks the record out of
//! the embed.

use lorekeepr_domain::{CampaignId, Note, NoteId};
use lorekeepr_protocol::{CreateNoteData, NoteDto, UpdateNoteData};

use crate::application::error::ServiceError;
use crate::application::services::CampaignService;
use crate::ports::outbound::ApiPort;

#[derive(Clone)]
pub struct NoteService<A: ApiPort> {
    api: A,
    campaigns: CampaignService<A>,
}

impl<A: ApiPort + Clone> NoteService<A> {
    pub fn new(api: A) -> Self {
        let campaigns = CampaignService::new(api.clone());
        Self { api, campaigns }
    }
}

impl<A: ApiPort + Clone> NoteService<A> {
    fn collection_path(campaign_id: CampaignId) -> String {
        format!("/api/campaigns/{campaign_id}/notes")
    }

    fn item_path(campaign_id: CampaignId, note_id: NoteId) -> String {
        format!("/api/campaigns/{campaign_id}/notes/{note_id}")
    }

    /// All notes of a campaign, from the campaign embed, insertion order.
    pub async fn list(&self, campaign_id: CampaignId) -> Result<Vec<Note>, ServiceError> {
        Ok(self.campaigns.get(campaign_id).await?.notes)
    }

    /// One note, picked out of the campaign embed.
    pub async fn get(&self, campaign_id: CampaignId, note_id: NoteId) -> Result<Note, ServiceError> {
        self.list(campaign_id)
            .await?
            .into_iter()
            .find(|note| note.id == note_id)
            .ok_or_else(|| ServiceError::NotFound(format!("note {note_id}")))
    }

    /// Create a draft note from the content browser.
    pub async fn create(
        &self,
        campaign_id: CampaignId,
        data: &CreateNoteData,
    ) -> Result<Note, ServiceError> {
        let dto: NoteDto = self
            .api
            .post(&Self::collection_path(campaign_id), data)
            .await?;
        Ok(dto.to_domain()?)
    }

    /// Replace the note's editable fields.
    pub async fn update(
        &self,
        campaign_id: CampaignId,
        note_id: NoteId,
        data: &UpdateNoteData,
    ) -> Result<(), ServiceError> {
        let _: serde_json::Value = self
            .api
            .put(&Self::item_path(campaign_id, note_id), data)
            .await?;
        Ok(())
    }

    pub async fn delete(
        &self,
        campaign_id: CampaignId,
        note_id: NoteId,
    ) -> Result<(), ServiceError> {
        self.api
            .delete(&Self::item_path(campaign_id, note_id))
            .await?;
        Ok(())
    }
}
