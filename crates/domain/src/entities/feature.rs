//! Feature entity - named traits granted by races, subraces, classes and
//! subclasses
//!
//! A feature is owned by exactly one grantor; ownership is containment in the
//! grantor's feature list, never a shared reference.

use serde::{Deserialize, Serialize};

use crate::value_objects::{Description, EntityName};

/// A named trait, optionally gated to a character level (class and subclass
/// features).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feature {
    pub name: EntityName,
    pub description: Description,
    /// Character level at which the feature is gained; `None` for racial
    /// traits that are always on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<u8>,
}

impl Feature {
    /// A racial trait, always active.
    pub fn trait_of(name: EntityName, description: Description) -> Self {
        Self {
            name,
            description,
            level: None,
        }
    }

    /// A level-gated class or subclass feature.
    pub fn at_level(name: EntityName, description: Description, level: u8) -> Self {
        Self {
            name,
            description,
            level: Some(level),
        }
    }
}
