//! LoreKeepr Domain - campaign content types, value objects, and invariants
//!
//! This crate holds the data model shared by the client and the seeding tool:
//! campaign-owned content (characters, NPCs, locations, maps, notes) and the
//! seeded reference catalogue (races and classes with their features).
//! No I/O lives here; everything is pure data and validation.

pub mod common;
pub mod entities;
pub mod error;
pub mod ids;
pub mod value_objects;

// Re-export all entities (explicit list in entities/mod.rs)
pub use entities::{
    Campaign, Character, Class, Feature, GameMap, Location, LocationRef, MapImage, Note, Npc,
    NpcRef, QuestRef, Race, Subclass, Subrace,
};

pub use error::DomainError;

// Re-export IDs at crate root
pub use ids::{
    CampaignId, CharacterId, ClassId, FeatureId, LocationId, MapId, NoteId, NpcId, QuestId,
    RaceId, SubclassId, SubraceId, UserId,
};

// Re-export value objects at crate root
pub use value_objects::{
    AbilityBonuses, AbilityStat, ColorTag, Description, EntityName, HitDie,
};
