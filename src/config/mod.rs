//! Configuration module for panel layout and colors
//!
//! Configuration is deserialized from JSON; any key left out keeps the
//! standard panel's value.

mod color;
mod layout;

pub use color::*;
pub use layout::*;

use crate::error::Result;

impl PanelConfig {
    /// Deserialize a panel configuration from a JSON document
    /// Expected format: {"left_fields": [...], "right_fields": [...], "default_color": "#RRGGBB", "palette": [...]}
    pub fn from_json(json: &str) -> Result<Self> {
        let config: PanelConfig = serde_json::from_str(json)?;
        tracing::debug!(
            categories = config.category_count(),
            palette = config.palette.len(),
            "loaded panel config"
        );
        Ok(config)
    }
}
