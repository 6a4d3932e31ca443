//! Render model for a skill panel

use serde::Serialize;

use crate::config::Color;
use crate::error::Result;
use crate::rank::Rank;
use crate::rating::MAX_STARS;

/// Name used in exports when the player left the name blank
pub const DEFAULT_PLAYER_NAME: &str = "player";

/// Stars per row
pub const STARS_PER_ROW: usize = MAX_STARS as usize;

/// One rendered rating row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowView {
    /// Category index within the panel
    pub index: usize,
    pub label: String,
    /// Fill state of each star, left to right
    pub stars: [bool; STARS_PER_ROW],
    /// Whether the row's clear button is shown
    pub clearable: bool,
}

/// Everything a front end needs to draw the panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PanelView {
    pub title: String,
    pub color: Color,
    pub rank: Rank,
    pub total: i32,
    pub read_only: bool,
    /// Rows grouped by display column
    pub columns: Vec<Vec<RowView>>,
}

impl PanelView {
    /// Serialize the view as JSON for a web front end
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Iterate every row regardless of column
    pub fn rows(&self) -> impl Iterator<Item = &RowView> {
        self.columns.iter().flatten()
    }
}

/// Fill pattern for a row holding `count` stars
#[inline]
pub fn filled_stars(count: u8) -> [bool; STARS_PER_ROW] {
    std::array::from_fn(|i| i < usize::from(count))
}

/// Download file name for a panel screenshot
pub fn export_file_name(player_name: &str) -> String {
    let name = player_name.trim();
    let name = if name.is_empty() { DEFAULT_PLAYER_NAME } else { name };
    format!("{}的面板.jpg", name)
}
