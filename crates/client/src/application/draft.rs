//! Draft entity factory
//!
//! "Create New" seeds a fresh entity with a placeholder name and color before
//! the user has typed anything. The factory is a port so hosts (and tests)
//! can swap the random defaults for something deterministic.

use rand::seq::SliceRandom;
use rand::Rng;

use lorekeepr_domain::ColorTag;

use crate::routes::Section;

/// Produces placeholder content for freshly created entities.
pub trait DraftFactory: Send + Sync {
    /// A non-empty placeholder name for a new entity in the section.
    fn placeholder_name(&self, section: Section) -> String;

    /// A color tag for the new entity's browser tile.
    fn placeholder_color(&self) -> ColorTag;
}

const ADJECTIVES: &[&str] = &[
    "Forgotten", "Gilded", "Crimson", "Silent", "Wandering", "Ancient", "Restless", "Hollow",
    "Amber", "Shrouded",
];

const CHARACTER_NOUNS: &[&str] = &["Hero", "Wanderer", "Outlander", "Sellsword", "Acolyte"];
const NPC_NOUNS: &[&str] = &["Stranger", "Merchant", "Elder", "Innkeep", "Scout"];
const LOCATION_NOUNS: &[&str] = &["Keep", "Hollow", "Crossroads", "Sanctum", "Mill"];
const MAP_NOUNS: &[&str] = &["Map", "Chart", "Survey", "Sketch"];
const NOTE_NOUNS: &[&str] = &["Note", "Record", "Rumor", "Ledger"];

/// rand-backed default factory.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomDraftFactory;

impl RandomDraftFactory {
    pub fn new() -> Self {
        Self
    }

    fn nouns(section: Section) -> &'static [&'static str] {
        match section {
            Section::Characters => CHARACTER_NOUNS,
            Section::Npcs => NPC_NOUNS,
            Section::Locations => LOCATION_NOUNS,
            Section::Maps => MAP_NOUNS,
            Section::Notes => NOTE_NOUNS,
        }
    }
}

impl DraftFactory for RandomDraftFactory {
    fn placeholder_name(&self, section: Section) -> String {
        let mut rng = rand::thread_rng();
        let adjective = ADJECTIVES.choose(&mut rng).unwrap_or(&"New");
        let noun = Self::nouns(section).choose(&mut rng).unwrap_or(&"Entry");
        format!("{adjective} {noun}")
    }

    fn placeholder_color(&self) -> ColorTag {
        let mut rng = rand::thread_rng();
        ColorTag::from_rgb(rng.gen(), rng.gen(), rng.gen())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lorekeepr_domain::EntityName;

    #[test]
    fn test_placeholder_names_are_valid_entity_names() {
        let factory = RandomDraftFactory::new();
        for section in Section::ALL {
            for _ in 0..20 {
                let name = factory.placeholder_name(section);
                assert!(EntityName::new(&name).is_ok(), "bad name: {name:?}");
            }
        }
    }

    #[test]
    fn test_placeholder_colors_are_valid_tags() {
        let factory = RandomDraftFactory::new();
        for _ in 0..20 {
            let color = factory.placeholder_color();
            assert!(ColorTag::new(color.as_str()).is_ok());
        }
    }
}
