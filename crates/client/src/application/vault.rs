//! Character vault - session-scoped character persistence
//!
//! Characters are the one content type that never touches the REST layer:
//! the whole list lives as a JSON array under a single session-storage key
//! and is filtered by campaign id on read. Flagged as a product inconsistency
//! in DESIGN.md; the editor reaches it through the same resource seam as the
//! REST entities.

use std::sync::Arc;

use lorekeepr_domain::{CampaignId, Character, CharacterId};

use crate::application::error::ServiceError;
use crate::ports::outbound::{storage_keys, StorageProvider};

#[derive(Clone)]
pub struct CharacterVault {
    storage: Arc<dyn StorageProvider>,
}

impl CharacterVault {
    pub fn new(storage: Arc<dyn StorageProvider>) -> Self {
        Self { storage }
    }

    fn read_all(&self) -> Vec<Character> {
        let Some(raw) = self.storage.load(storage_keys::CHARACTERS) else {
            return Vec::new();
        };
        match serde_json::from_str(&raw) {
            Ok(characters) => characters,
            Err(e) => {
                // Corrupt payloads read as empty
                tracing::warn!("Discarding unreadable character store: {e}");
                Vec::new()
            }
        }
    }

    fn write_all(&self, characters: &[Character]) -> Result<(), ServiceError> {
        let raw = serde_json::to_string(characters)
            .map_err(|e| ServiceError::Storage(e.to_string()))?;
        self.storage.save(storage_keys::CHARACTERS, &raw);
        Ok(())
    }

    /// All characters belonging to the campaign, insertion order.
    pub fn list(&self, campaign_id: CampaignId) -> Vec<Character> {
        self.read_all()
            .into_iter()
            .filter(|c| c.campaign_id == campaign_id)
            .collect()
    }

    /// One character, campaign-scoped like [`list`](Self::list).
    pub fn get(
        &self,
        campaign_id: CampaignId,
        character_id: CharacterId,
    ) -> Result<Character, ServiceError> {
        self.list(campaign_id)
            .into_iter()
            .find(|c| c.id == character_id)
            .ok_or_else(|| ServiceError::NotFound(format!("character {character_id}")))
    }

    /// Insert a new character or replace the stored record with the same id.
    pub fn upsert(&self, character: Character) -> Result<(), ServiceError> {
        let mut characters = self.read_all();
        match characters.iter_mut().find(|c| c.id == character.id) {
            Some(existing) => *existing = character,
            None => characters.push(character),
        }
        self.write_all(&characters)
    }

    /// Remove a character record; removing an absent id is a no-op.
    pub fn remove(&self, character_id: CharacterId) -> Result<(), ServiceError> {
        let mut characters = self.read_all();
        characters.retain(|c| c.id != character_id);
        self.write_all(&characters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::session_store::MemorySessionStore;
    use lorekeepr_domain::{ColorTag, EntityName};

    fn vault() -> CharacterVault {
        CharacterVault::new(Arc::new(MemorySessionStore::new()))
    }

    fn character(campaign_id: CampaignId, name: &str) -> Character {
        Character::new(
            campaign_id,
            EntityName::new(name).expect("valid name"),
            ColorTag::from_rgb(1, 2, 3),
        )
    }

    #[test]
    fn test_list_filters_by_campaign() {
        let vault = vault();
        let campaign_a = CampaignId::new();
        let campaign_b = CampaignId::new();
        vault
            .upsert(character(campaign_a, "Ireena"))
            .expect("upsert");
        vault
            .upsert(character(campaign_b, "Strahd"))
            .expect("upsert");

        let in_a = vault.list(campaign_a);
        assert_eq!(in_a.len(), 1);
        assert_eq!(in_a[0].name.as_str(), "Ireena");
        assert_eq!(vault.list(campaign_b).len(), 1);
        assert!(vault.list(CampaignId::new()).is_empty());
    }

    #[test]
    fn test_get_is_campaign_scoped() {
        let vault = vault();
        let campaign_a = CampaignId::new();
        let ireena = character(campaign_a, "Ireena");
        let id = ireena.id;
        vault.upsert(ireena).expect("upsert");

        assert!(vault.get(campaign_a, id).is_ok());
        // The same id is invisible from another campaign
        assert!(matches!(
            vault.get(CampaignId::new(), id),
            Err(ServiceError::NotFound(_))
        ));
    }

    #[test]
    fn test_upsert_replaces_existing_record() {
        let vault = vault();
        let campaign_id = CampaignId::new();
        let mut hero = character(campaign_id, "Ireena");
        vault.upsert(hero.clone()).expect("upsert");

        hero.level = 5;
        vault.upsert(hero.clone()).expect("upsert");

        let stored = vault.get(campaign_id, hero.id).expect("stored");
        assert_eq!(stored.level, 5);
        assert_eq!(vault.list(campaign_id).len(), 1);
    }

    #[test]
    fn test_remove_deletes_only_that_record() {
        let vault = vault();
        let campaign_id = CampaignId::new();
        let ireena = character(campaign_id, "Ireena");
        let ismark = character(campaign_id, "Ismark");
        let ireena_id = ireena.id;
        vault.upsert(ireena).expect("upsert");
        vault.upsert(ismark).expect("upsert");

        vault.remove(ireena_id).expect("remove");
        let remaining = vault.list(campaign_id);
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].name.as_str(), "Ismark");
    }

    #[test]
    fn test_corrupt_store_reads_as_empty() {
        let storage = Arc::new(MemorySessionStore::new());
        storage.save(storage_keys::CHARACTERS, "{not json");
        let vault = CharacterVault::new(storage);
        assert!(vault.list(CampaignId::new()).is_empty());
    }
}
