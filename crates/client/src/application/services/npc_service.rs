//! NPC service

use lorekeepr_domain::{CampaignId, Npc, NpcId};
use lorekeepr_protocol::{CreateNpcData, NpcDto, UpdateNpcData};

use crate::application::error::ServiceError;
use crate::ports::outbound::ApiPort;

#[derive(Clone)]
pub struct NpcService<A: ApiPort> {
    api: A,
}

impl<A: ApiPort> NpcService<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    fn collection_path(campaign_id: CampaignId) -> String {
        format!("/api/campaigns/{campaign_id}/npcs")
    }

    fn item_path(campaign_id: CampaignId, npc_id: NpcId) -> String {
        format!("/api/campaigns/{campaign_id}/npcs/{npc_id}")
    }

    /// List all NPCs in a campaign, insertion order.
    pub async fn list(&self, campaign_id: CampaignId) -> Result<Vec<Npc>, ServiceError> {
        let dtos: Vec<NpcDto> = self.api.get(&Self::collection_path(campaign_id)).await?;
        dtos.iter()
            .map(|dto| dto.to_domain().map_err(ServiceError::from))
            .collect()
    }

    /// Fetch one NPC with its embedded location and quest stubs.
    pub async fn get(&self, campaign_id: CampaignId, npc_id: NpcId) -> Result<Npc, ServiceError> {
        let dto: NpcDto = self.api.get(&Self::item_path(campaign_id, npc_id)).await?;
        Ok(dto.to_domain()?)
    }

    /// Create a draft NPC from the content browser.
    pub async fn create(
        &self,
        campaign_id: CampaignId,
        data: &CreateNpcData,
    ) -> Result<Npc, ServiceError> {
        let dto: NpcDto = self
            .api
            .post(&Self::collection_path(campaign_id), data)
            .await?;
        Ok(dto.to_domain()?)
    }

    /// Replace the NPC's editable fields.
    pub async fn update(
        &self,
        campaign_id: CampaignId,
        npc_id: NpcId,
        data: &UpdateNpcData,
    ) -> Result<(), ServiceError> {
        let _: serde_json::Value = self
            .api
            .put(&Self::item_path(campaign_id, npc_id), data)
            .await?;
        Ok(())
    }

    pub async fn delete(&self, campaign_id: CampaignId, npc_id: NpcId) -> Result<(), ServiceError> {
        self.api.delete(&Self::item_path(campaign_id, npc_id)).await?;
        Ok(())
    }
}
