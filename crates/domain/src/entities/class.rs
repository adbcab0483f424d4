//! Class and subclass reference entities
//!
//! Seeded once at setup time. A class carries its hit die and level-1
//! features; its subclasses carry features gated at level 1 or later.

use serde::{Deserialize, Serialize};

use crate::entities::feature::Feature;
use crate::error::DomainError;
use crate::value_objects::{Description, EntityName, HitDie};

/// A playable class with its hit die, level-1 features and subclasses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Class {
    pub name: EntityName,
    pub description: Description,
    pub hit_die: HitDie,
    #[serde(default)]
    pub features: Vec<Feature>,
    #[serde(default)]
    pub subclasses: Vec<Subclass>,
}

/// A subclass belonging to exactly one class (by containment).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subclass {
    pub name: EntityName,
    pub description: Description,
    #[serde(default)]
    pub features: Vec<Feature>,
}

impl Subclass {
    /// Check that every feature is gated to a character level >= 1.
    ///
    /// Subclass features are level-gated by definition; an ungated feature in
    /// a subclass is an authoring error.
    pub fn validate(&self) -> Result<(), DomainError> {
        for feature in &self.features {
            match feature.level {
                Some(level) if level >= 1 => {}
                _ => {
                    return Err(DomainError::constraint(format!(
                        "Subclass feature '{}' must be gated to a level >= 1",
                        feature.name
                    )))
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(s: &str) -> EntityName {
        EntityName::new(s).expect("valid name")
    }

    fn desc(s: &str) -> Description {
        Description::new(s).expect("valid description")
    }

    #[test]
    fn test_subclass_validate_accepts_gated_features() {
        let subclass = Subclass {
            name: name("Champion"),
            description: desc("Raw martial prowess."),
            features: vec![Feature::at_level(
                name("Improved Critical"),
                desc("Crit on 19-20."),
                3,
            )],
        };
        assert!(subclass.validate().is_ok());
    }

    #[test]
    fn test_subclass_validate_rejects_ungated_features() {
        let subclass = Subclass {
            name: name("Champion"),
            description: desc(""),
            features: vec![Feature::trait_of(name("Improved Critical"), desc(""))],
        };
        assert!(subclass.validate().is_err());
    }
}
