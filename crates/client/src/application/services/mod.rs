//! Application services - one per REST resource
//!
//! Each service owns the path layout of its resource and converts wire DTOs
//! into domain entities at the boundary. Services are generic over
//! `A: ApiPort` so tests substitute a scripted port.

pub mod auth_service;
pub mod campaign_service;
pub mod location_service;
pub mod map_service;
pub mod note_service;
pub mod npc_service;

pub use auth_service::AuthService;
pub use campaign_service::CampaignService;
pub use location_service::LocationService;
pub use map_service::MapService;
pub use note_service::NoteService;
pub use npc_service::NpcService;
