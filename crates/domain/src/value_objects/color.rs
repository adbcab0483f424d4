//! Color tag value object
//!
//! Characters and freshly created draft entities carry a `#rrggbb` color tag
//! used by the browser grid.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// A validated `#rrggbb` hex color tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ColorTag(String);

impl ColorTag {
    /// Create a color tag from a `#rrggbb` string (case-insensitive,
    /// normalized to lowercase).
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Parse` when the input is not a seven-character
    /// `#` -prefixed hex triplet.
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        let rest = value
            .strip_prefix('#')
            .ok_or_else(|| DomainError::parse(format!("Color must start with '#': {value}")))?;
        if rest.len() != 6 || !rest.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(DomainError::parse(format!(
                "Color must be a 6-digit hex triplet: {value}"
            )));
        }
        Ok(Self(format!("#{}", rest.to_ascii_lowercase())))
    }

    /// Build a color from raw channel values.
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(format!("#{r:02x}{g:02x}{b:02x}"))
    }

    /// Returns the color as a `#rrggbb` string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ColorTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for ColorTag {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<ColorTag> for String {
    fn from(color: ColorTag) -> String {
        color.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_color_is_normalized() {
        let color = ColorTag::new("#A1B2C3").expect("valid color");
        assert_eq!(color.as_str(), "#a1b2c3");
    }

    #[test]
    fn test_from_rgb() {
        assert_eq!(ColorTag::from_rgb(255, 0, 16).as_str(), "#ff0010");
    }

    #[test]
    fn test_rejects_missing_hash() {
        assert!(ColorTag::new("a1b2c3").is_err());
    }

    #[test]
    fn test_rejects_wrong_length_and_non_hex() {
        assert!(ColorTag::new("#abc").is_err());
        assert!(ColorTag::new("#a1b2c3d4").is_err());
        assert!(ColorTag::new("#zzzzzz").is_err());
    }
}
