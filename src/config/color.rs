//! Star and rank color

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{PanelError, Result};

static HEX_COLOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^#[0-9A-Fa-f]{6}$").expect("hex color pattern is valid")
});

/// Fill color used when nothing else is selected
pub const DEFAULT_COLOR: &str = "#FF0000";

/// A `#RRGGBB` color, stored upper-cased
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color(String);

impl Color {
    /// Parse a `#RRGGBB` string
    pub fn parse(value: &str) -> Result<Self> {
        let value = value.trim();
        if HEX_COLOR.is_match(value) {
            Ok(Self(value.to_ascii_uppercase()))
        } else {
            Err(PanelError::InvalidColor(value.to_string()))
        }
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Color {
    fn default() -> Self {
        Self(DEFAULT_COLOR.to_string())
    }
}

impl TryFrom<String> for Color {
    type Error = PanelError;

    fn try_from(value: String) -> Result<Self> {
        Color::parse(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> String {
        color.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
