//! LoreKeepr Protocol - wire types shared by the client, the seeder, and the
//! engine
//!
//! # Design Principles
//!
//! 1. **Minimal dependencies** - only serde, serde_json, uuid, chrono and the
//!    domain vocabulary
//! 2. **No business logic** - pure data types, serialization, and boundary
//!    conversions
//! 3. **No domain IDs on the wire** - DTOs carry raw `uuid::Uuid`; conversion
//!    to typed IDs happens in `to_domain()`

pub mod dto;
pub mod requests;

pub use dto::{CampaignDto, LocationDto, MapDto, NoteDto, NpcDto, RefDto, UserDto};
pub use requests::{
    CreateClassData, CreateFeatureData, CreateLocationData, CreateMapData, CreateNoteData,
    CreateNpcData, CreateRaceData, CreateSubclassData, CreateSubraceData, LoginRequest,
    RegisterRequest, UpdateCampaignData, UpdateLocationData, UpdateMapData, UpdateNoteData,
    UpdateNpcData,
};
