//! Campaign service - load and rename the top-level container

use lorekeepr_domain::{Campaign, CampaignId};
use lorekeepr_protocol::{CampaignDto, UpdateCampaignData};

use crate::application::error::ServiceError;
use crate::ports::outbound::ApiPort;

/// Campaign operations. Campaigns are created and deleted elsewhere (owner
/// account flows); the client core only reads and renames them.
#[derive(Clone)]
pub struct CampaignService<A: ApiPort> {
    api: A,
}

impl<A: ApiPort> CampaignService<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// Fetch one campaign with its embedded notes.
    pub async fn get(&self, campaign_id: CampaignId) -> Result<Campaign, ServiceError> {
        let dto: CampaignDto = self
            .api
            .get(&format!("/api/campaigns/{campaign_id}"))
            .await?;
        Ok(dto.to_domain()?)
    }

    /// Update name/description; returns the refreshed campaign.
    pub async fn update(
        &self,
        campaign_id: CampaignId,
        data: &UpdateCampaignData,
    ) -> Result<Campaign, ServiceError> {
        let dto: CampaignDto = self
            .api
            .put(&format!("/api/campaigns/{campaign_id}"), data)
            .await?;
        Ok(dto.to_domain()?)
    }
}
