//! Cross-reference stubs embedded in other entities
//!
//! Locations and NPCs reference each other and quests by id + display name.
//! The full records live behind their own endpoints; these stubs are what the
//! embedding endpoints return.

use serde::{Deserialize, Serialize};

use crate::ids::{LocationId, NpcId, QuestId};

/// An NPC as embedded in a location payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NpcRef {
    pub id: NpcId,
    pub name: String,
}

/// A location as embedded in an NPC payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationRef {
    pub id: LocationId,
    pub name: String,
}

/// A quest as embedded in NPC and location payloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestRef {
    pub id: QuestId,
    pub name: String,
}
