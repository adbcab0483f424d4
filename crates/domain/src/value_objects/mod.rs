//! Value objects - validated-by-construction types for campaign content

pub mod ability;
pub mod color;
pub mod hit_die;
pub mod names;

pub use ability::{AbilityBonuses, AbilityStat};
pub use color::ColorTag;
pub use hit_die::HitDie;
pub use names::{Description, EntityName};
