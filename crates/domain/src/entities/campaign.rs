//! Campaign entity - top-level container for all session content
//!
//! A campaign is owned by a user and holds characters, NPCs, locations, maps
//! and notes. Deleting a campaign cascades to its children; that invariant is
//! enforced by the engine, the client only ever deletes children explicitly.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::note::Note;
use crate::ids::{CampaignId, UserId};
use crate::value_objects::{Description, EntityName};

/// A campaign and its embedded notes.
///
/// The campaign endpoint embeds the notes collection; the other child
/// collections are fetched through their own section endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    pub id: CampaignId,
    pub name: EntityName,
    #[serde(default)]
    pub description: Description,
    /// Owning user; only the owner may delete the campaign.
    pub owner: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub notes: Vec<Note>,
}

impl Campaign {
    pub fn new(name: EntityName, owner: UserId) -> Self {
        let now = Utc::now();
        Self {
            id: CampaignId::new(),
            name,
            description: Description::default(),
            owner,
            created_at: now,
            updated_at: now,
            notes: Vec::new(),
        }
    }

    /// Find an embedded note by id.
    pub fn note(&self, id: crate::ids::NoteId) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::NoteId;

    #[test]
    fn test_note_lookup() {
        let mut campaign = Campaign::new(
            EntityName::new("Curse of the Amber Keep").expect("valid name"),
            UserId::new(),
        );
        let note = Note::new(
            campaign.id,
            EntityName::new("Session zero").expect("valid name"),
        );
        let note_id = note.id;
        campaign.notes.push(note);

        assert!(campaign.note(note_id).is_some());
        assert!(campaign.note(NoteId::new()).is_none());
    }
}
