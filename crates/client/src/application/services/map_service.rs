//! Map service

use lorekeepr_domain::{CampaignId, GameMap, MapId};
use lorekeepr_protocol::{CreateMapData, MapDto, UpdateMapData};

use crate::application::error::ServiceError;
use crate::ports::outbound::ApiPort;

#[derive(Clone)]
pub struct MapService<A: ApiPort> {
    api: A,
}

impl<A: ApiPort> MapService<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    fn collection_path(campaign_id: CampaignId) -> String {
        format!("/api/campaigns/{campaign_id}/maps")
    }

    fn item_path(campaign_id: CampaignId, map_id: MapId) -> String {
        format!("/api/campaigns/{campaign_id}/maps/{map_id}")
    }

    /// List all maps in a campaign, insertion order.
    pub async fn list(&self, campaign_id: CampaignId) -> Result<Vec<GameMap>, ServiceError> {
        let dtos: Vec<MapDto> = self.api.get(&Self::collection_path(campaign_id)).await?;
        dtos.iter()
            .map(|dto| dto.to_domain().map_err(ServiceError::from))
            .collect()
    }

    /// Fetch one map; `file` carries the stored image payload when present.
    pub async fn get(&self, campaign_id: CampaignId, map_id: MapId) -> Result<GameMap, ServiceError> {
        let dto: MapDto = self.api.get(&Self::item_path(campaign_id, map_id)).await?;
        Ok(dto.to_domain()?)
    }

    /// Create a draft map from the content browser.
    pub async fn create(
        &self,
        campaign_id: CampaignId,
        data: &CreateMapData,
    ) -> Result<GameMap, ServiceError> {
        let dto: MapDto = self
            .api
            .post(&Self::collection_path(campaign_id), data)
            .await?;
        Ok(dto.to_domain()?)
    }

    /// Replace the map's editable fields, including the image payload.
    pub async fn update(
        &self,
        campaign_id: CampaignId,
        map_id: MapId,
        data: &UpdateMapData,
    ) -> Result<(), ServiceError> {
        let _: serde_json::Value = self
            .api
            .put(&Self::item_path(campaign_id, map_id), data)
            .await?;
        Ok(())
    }

    pub async fn delete(&self, campaign_id: CampaignId, map_id: MapId) -> Result<(), ServiceError> {
        self.api.delete(&Self::item_path(campaign_id, map_id)).await?;
        Ok(())
    }
}
