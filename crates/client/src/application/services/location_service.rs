//! Location service

use lorekeepr_domain::{CampaignId, Location, LocationId};
use lorekeepr_protocol::{CreateLocationData, LocationDto, UpdateLocationData};

use crate::application::error::ServiceError;
use crate::ports::outbound::ApiPort;

#[derive(Clone)]
pub struct LocationService<A: ApiPort> {
    api: A,
}

impl<A: ApiPort> LocationService<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    fn collection_path(campaign_id: CampaignId) -> String {
        format!("/api/campaigns/{campaign_id}/locations")
    }

    fn item_path(campaign_id: CampaignId, location_id: LocationId) -> String {
        format!("/api/campaigns/{campaign_id}/locations/{location_id}")
    }

    /// List all locations in a campaign, insertion order.
    pub async fn list(&self, campaign_id: CampaignId) -> Result<Vec<Location>, ServiceError> {
        let dtos: Vec<LocationDto> = self.api.get(&Self::collection_path(campaign_id)).await?;
        dtos.iter()
            .map(|dto| dto.to_domain().map_err(ServiceError::from))
            .collect()
    }

    /// Fetch one location with its embedded NPC and quest stubs.
    pub async fn get(
        &self,
        campaign_id: CampaignId,
        location_id: LocationId,
    ) -> Result<Location, ServiceError> {
        let dto: LocationDto = self
            .api
            .get(&Self::item_path(campaign_id, location_id))
            .await?;
        Ok(dto.to_domain()?)
    }

    /// Create a draft location from the content browser.
    pub async fn create(
        &self,
        campaign_id: CampaignId,
        data: &CreateLocationData,
    ) -> Result<Location, ServiceError> {
        let dto: LocationDto = self
            .api
            .post(&Self::collection_path(campaign_id), data)
            .await?;
        Ok(dto.to_domain()?)
    }

    /// Replace the location's editable fields.
    pub async fn update(
        &self,
        campaign_id: CampaignId,
        location_id: LocationId,
        data: &UpdateLocationData,
    ) -> Result<(), ServiceError> {
        let _: serde_json::Value = self
            .api
            .put(&Self::item_path(campaign_id, location_id), data)
            .await?;
        Ok(())
    }

    pub async fn delete(
        &self,
        campaign_id: CampaignId,
        location_id: LocationId,
    ) -> Result<(), ServiceError> {
        self.api
            .delete(&Self::item_path(campaign_id, location_id))
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::api::Api;
    use crate::ports::outbound::testing::ScriptedApi;
    use serde_json::json;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_item_path_carries_both_identifiers() {
        let scripted = Arc::new(ScriptedApi::new());
        let campaign_id = CampaignId::new();
        let location_id = LocationId::new();
        scripted.push_ok(json!({
            "id": location_id.to_uuid(),
            "campaignId": campaign_id.to_uuid(),
            "name": "Castle Ravenloft",
            "description": "",
            "npcs": [],
            "missions": [],
        }));
        let service = LocationService::new(Api::new(scripted.clone()));

        service
            .get(campaign_id, location_id)
            .await
            .expect("scripted ok");
        assert_eq!(
            scripted.calls()[0].path,
            format!("/api/campaigns/{campaign_id}/locations/{location_id}")
        );
    }
}
