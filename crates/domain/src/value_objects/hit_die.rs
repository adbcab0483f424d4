//! Hit die value object
//!
//! Classes roll one of the four standard hit dice. Anything else is authoring
//! error and is rejected at construction.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// A class hit die (d6, d8, d10 or d12), serialized as its face count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct HitDie(u8);

impl HitDie {
    pub const D6: HitDie = HitDie(6);
    pub const D8: HitDie = HitDie(8);
    pub const D10: HitDie = HitDie(10);
    pub const D12: HitDie = HitDie(12);

    /// Create a hit die from a face count.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Parse` unless sides is 6, 8, 10 or 12.
    pub fn new(sides: u8) -> Result<Self, DomainError> {
        match sides {
            6 | 8 | 10 | 12 => Ok(Self(sides)),
            other => Err(DomainError::parse(format!("Invalid hit die: d{other}"))),
        }
    }

    /// Number of faces.
    pub fn sides(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for HitDie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "d{}", self.0)
    }
}

impl TryFrom<u8> for HitDie {
    type Error = DomainError;

    fn try_from(sides: u8) -> Result<Self, Self::Error> {
        Self::new(sides)
    }
}

impl From<HitDie> for u8 {
    fn from(die: HitDie) -> u8 {
        die.0
    }
}
