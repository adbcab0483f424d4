//! Request payload types for the REST surface
//!
//! Each struct is the JSON body of exactly one write endpoint. Update bodies
//! carry the editor's current local field values; create bodies carry the
//! draft placeholder produced by the content browser; seed bodies carry one
//! whole reference entity with its nested children so each top-level creation
//! is a single atomic request.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use lorekeepr_domain::{AbilityBonuses, Class, Feature, Race, Subclass, Subrace};

// =============================================================================
// Campaign content updates
// =============================================================================

/// Body of `PUT /api/campaigns/{campaignId}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCampaignData {
    pub name: String,
    pub description: String,
}

/// Body of `PUT /api/campaigns/{campaignId}/notes/{noteId}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateNoteData {
    pub name: String,
    pub description: String,
}

/// Body of `PUT /api/campaigns/{campaignId}/locations/{locationId}`.
///
/// The embedded cross-reference lists are replaced wholesale when present;
/// the quest list keeps its upstream `missions` wire name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLocationData {
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub npcs: Option<Vec<Uuid>>,
    #[serde(default, rename = "missions", skip_serializing_if = "Option::is_none")]
    pub quests: Option<Vec<Uuid>>,
}

/// Body of `PUT /api/campaigns/{campaignId}/npcs/{npcId}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateNpcData {
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locations: Option<Vec<Uuid>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quests: Option<Vec<Uuid>>,
}

/// Body of `PUT /api/campaigns/{campaignId}/maps/{mapId}`.
///
/// `file` is the data-URL image representation produced client-side; both
/// image fields travel only when an image is attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMapData {
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
}

// =============================================================================
// Campaign content creation (draft entities from the content browser)
// =============================================================================

/// Body of `POST /api/campaigns/{campaignId}/notes`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateNoteData {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// Body of `POST /api/campaigns/{campaignId}/locations`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLocationData {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// Body of `POST /api/campaigns/{campaignId}/npcs`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateNpcData {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// Body of `POST /api/campaigns/{campaignId}/maps`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMapData {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

// =============================================================================
// Auth
// =============================================================================

/// Body of `POST /api/users/login`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body of `POST /api/users/register`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

// =============================================================================
// Reference catalogue seeding
// =============================================================================

/// One feature inside a seed payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFeatureData {
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<u8>,
}

impl From<&Feature> for CreateFeatureData {
    fn from(feature: &Feature) -> Self {
        Self {
            name: feature.name.to_string(),
            description: feature.description.to_string(),
            level: feature.level,
        }
    }
}

/// One subrace inside a race seed payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSubraceData {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub bonuses: AbilityBonuses,
    pub features: Vec<CreateFeatureData>,
}

impl From<&Subrace> for CreateSubraceData {
    fn from(subrace: &Subrace) -> Self {
        Self {
            name: subrace.name.to_string(),
            description: subrace.description.to_string(),
            bonuses: subrace.bonuses,
            features: subrace.features.iter().map(Into::into).collect(),
        }
    }
}

/// Body of `POST /api/races` - one race with its nested subraces and
/// features, created atomically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRaceData {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub bonuses: AbilityBonuses,
    pub features: Vec<CreateFeatureData>,
    pub subraces: Vec<CreateSubraceData>,
}

impl From<&Race> for CreateRaceData {
    fn from(race: &Race) -> Self {
        Self {
            name: race.name.to_string(),
            description: race.description.to_string(),
            bonuses: race.bonuses,
            features: race.features.iter().map(Into::into).collect(),
            subraces: race.subraces.iter().map(Into::into).collect(),
        }
    }
}

/// One subclass inside a class seed payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSubclassData {
    pub name: String,
    pub description: String,
    pub features: Vec<CreateFeatureData>,
}

impl From<&Subclass> for CreateSubclassData {
    fn from(subclass: &Subclass) -> Self {
        Self {
            name: subclass.name.to_string(),
            description: subclass.description.to_string(),
            features: subclass.features.iter().map(Into::into).collect(),
        }
    }
}

/// Body of `POST /api/classes` - one class with its nested subclasses and
/// features, created atomically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateClassData {
    pub name: String,
    pub description: String,
    pub hit_die: u8,
    pub features: Vec<CreateFeatureData>,
    pub subclasses: Vec<CreateSubclassData>,
}

impl From<&Class> for CreateClassData {
    fn from(class: &Class) -> Self {
        Self {
            name: class.name.to_string(),
            description: class.description.to_string(),
            hit_die: class.hit_die.sides(),
            features: class.features.iter().map(Into::into).collect(),
            subclasses: class.subclasses.iter().map(Into::into).collect(),
        }
    }
}
