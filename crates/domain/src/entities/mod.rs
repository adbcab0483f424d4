//! Campaign content entities
//!
//! Campaign-owned content (characters, NPCs, locations, maps, notes) plus the
//! seeded reference catalogue (races and classes with their features).

pub mod campaign;
pub mod character;
pub mod class;
pub mod feature;
pub mod game_map;
pub mod location;
pub mod note;
pub mod npc;
pub mod race;
pub mod refs;

pub use campaign::Campaign;
pub use character::Character;
pub use class::{Class, Subclass};
pub use feature::Feature;
pub use game_map::{GameMap, MapImage};
pub use location::Location;
pub use note::Note;
pub use npc::Npc;
pub use race::{Race, Subrace};
pub use refs::{LocationRef, NpcRef, QuestRef};
