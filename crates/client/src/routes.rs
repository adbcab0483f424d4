//! Navigation targets
//!
//! The editors and the content browser never touch a router directly; they
//! hand one of these to the `ShellPort` and the hosting shell decides how to
//! get there.

use std::fmt;
use std::str::FromStr;

use lorekeepr_domain::{
    CampaignId, CharacterId, DomainError, LocationId, MapId, NoteId, NpcId,
};

/// A named category of campaign content used to scope browsing and creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Maps,
    Locations,
    Characters,
    Npcs,
    Notes,
}

impl Section {
    /// All sections in their display order.
    pub const ALL: [Section; 5] = [
        Section::Maps,
        Section::Locations,
        Section::Characters,
        Section::Npcs,
        Section::Notes,
    ];

    /// Display label shown in the section navigation.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Maps => "Maps",
            Self::Locations => "Locations",
            Self::Characters => "Characters",
            Self::Npcs => "NPCs",
            Self::Notes => "Notes",
        }
    }

    /// Path segment used in section routes.
    pub fn slug(&self) -> &'static str {
        match self {
            Self::Maps => "maps",
            Self::Locations => "locations",
            Self::Characters => "characters",
            Self::Npcs => "npcs",
            Self::Notes => "notes",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Section {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "maps" | "map" => Ok(Self::Maps),
            "locations" | "location" => Ok(Self::Locations),
            "characters" | "character" => Ok(Self::Characters),
            "npcs" | "npc" => Ok(Self::Npcs),
            "notes" | "note" => Ok(Self::Notes),
            other => Err(DomainError::parse(format!("Unknown section: {other}"))),
        }
    }
}

/// A place the shell can navigate to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Login,
    CampaignList,
    CampaignDetail {
        campaign_id: CampaignId,
    },
    SectionList {
        campaign_id: CampaignId,
        section: Section,
    },
    CharacterDetail {
        campaign_id: CampaignId,
        character_id: CharacterId,
    },
    NpcDetail {
        campaign_id: CampaignId,
        npc_id: NpcId,
    },
    LocationDetail {
        campaign_id: CampaignId,
        location_id: LocationId,
    },
    MapDetail {
        campaign_id: CampaignId,
        map_id: MapId,
    },
    NoteDetail {
        campaign_id: CampaignId,
        note_id: NoteId,
    },
}

impl Route {
    /// Render the route as a browser path.
    pub fn path(&self) -> String {
        match self {
            Self::Login => "/login".to_string(),
            Self::CampaignList => "/campaigns".to_string(),
            Self::CampaignDetail { campaign_id } => format!("/campaigns/{campaign_id}"),
            Self::SectionList {
                campaign_id,
                section,
            } => format!("/campaigns/{campaign_id}/{}", section.slug()),
            Self::CharacterDetail {
                campaign_id,
                character_id,
            } => format!("/campaigns/{campaign_id}/characters/{character_id}"),
            Self::NpcDetail {
                campaign_id,
                npc_id,
            } => format!("/campaigns/{campaign_id}/npcs/{npc_id}"),
            Self::LocationDetail {
                campaign_id,
                location_id,
            } => format!("/campaigns/{campaign_id}/locations/{location_id}"),
            Self::MapDetail {
                campaign_id,
                map_id,
            } => format!("/campaigns/{campaign_id}/maps/{map_id}"),
            Self::NoteDetail {
                campaign_id,
                note_id,
            } => format!("/campaigns/{campaign_id}/notes/{note_id}"),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_parse_accepts_labels_and_slugs() {
        assert_eq!("NPCs".parse::<Section>().ok(), Some(Section::Npcs));
        assert_eq!("map".parse::<Section>().ok(), Some(Section::Maps));
        assert!("inventory".parse::<Section>().is_err());
    }

    #[test]
    fn test_section_list_path() {
        let campaign_id = CampaignId::new();
        let route = Route::SectionList {
            campaign_id,
            section: Section::Locations,
        };
        assert_eq!(route.path(), format!("/campaigns/{campaign_id}/locations"));
    }

    #[test]
    fn test_detail_path_embeds_both_ids() {
        let campaign_id = CampaignId::new();
        let note_id = NoteId::new();
        let route = Route::NoteDetail {
            campaign_id,
            note_id,
        };
        assert_eq!(
            route.path(),
            format!("/campaigns/{campaign_id}/notes/{note_id}")
        );
    }
}
