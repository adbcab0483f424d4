//! Race and subrace reference entities
//!
//! Seeded once at setup time; the client never edits these. A race owns its
//! features and exactly the subraces created with it, each subrace owning its
//! own features and bonus vector.

use serde::{Deserialize, Serialize};

use crate::entities::feature::Feature;
use crate::value_objects::{AbilityBonuses, Description, EntityName};

/// A playable race with its ability bonuses, features and subraces.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Race {
    pub name: EntityName,
    pub description: Description,
    #[serde(default)]
    pub bonuses: AbilityBonuses,
    #[serde(default)]
    pub features: Vec<Feature>,
    #[serde(default)]
    pub subraces: Vec<Subrace>,
}

/// A subrace belonging to exactly one race (by containment).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subrace {
    pub name: EntityName,
    pub description: Description,
    #[serde(default)]
    pub bonuses: AbilityBonuses,
    #[serde(default)]
    pub features: Vec<Feature>,
}
