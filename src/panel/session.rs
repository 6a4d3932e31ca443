//! SkillPanel - interactive state for one rendered panel

use tracing::{debug, warn};

use crate::config::{Color, PanelConfig};
use crate::error::{PanelError, Result};
use crate::rank::{rank_for, Rank};
use crate::rating::{RatingState, MAX_STARS};
use crate::roster::PlayerRecord;

use super::{export_file_name, filled_stars, PanelView, RowView, STARS_PER_ROW};

/// One skill panel: labeled rating rows plus the selected color
///
/// Editable panels accept star clicks, row clears, clear-all and color
/// picks. Panels built from a player record are read-only.
#[derive(Debug, Clone)]
pub struct SkillPanel {
    title: String,
    categories: Vec<String>,
    /// Number of rows in each display column, in order
    column_sizes: Vec<usize>,
    state: RatingState,
    color: Color,
    palette: Vec<Color>,
    read_only: bool,
}

impl SkillPanel {
    /// Create an editable single-column panel with all rows empty
    pub fn new(categories: Vec<String>, color: Color) -> Self {
        let len = categories.len();
        debug!(categories = len, "created panel");
        Self {
            title: String::new(),
            state: RatingState::new(len),
            column_sizes: vec![len],
            categories,
            color,
            palette: Vec::new(),
            read_only: false,
        }
    }

    /// Create an editable panel laid out as the config describes
    pub fn from_config(config: &PanelConfig) -> Self {
        let mut panel = Self::new(config.categories(), config.default_color.clone());
        panel.column_sizes = vec![config.left_fields.len(), config.right_fields.len()];
        panel.palette = config.palette.clone();
        panel
    }

    /// Create a read-only panel showing a stored player
    ///
    /// Missing or malformed star fields show as empty rows; a missing or
    /// malformed color falls back to the default color.
    pub fn from_record(config: &PanelConfig, record: &PlayerRecord) -> Result<Self> {
        let mut panel = Self::from_config(config);
        for (index, label) in config.categories().iter().enumerate() {
            panel
                .state
                .set_count(index as i32, i32::from(record.star_count(label)))?;
        }
        panel.title = record.name().to_string();
        panel.color = record.color().unwrap_or_default();
        panel.read_only = true;

        debug!(
            player = %panel.title,
            total = panel.total(),
            "loaded player panel"
        );
        Ok(panel)
    }

    /// Builder-style title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.set_title(title);
        self
    }

    /// Update the player name shown above the panel and used for exports
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    // ------------------------------------------------------------------------
    // Read surface
    // ------------------------------------------------------------------------

    #[inline]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[inline]
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    #[inline]
    pub fn state(&self) -> &RatingState {
        &self.state
    }

    #[inline]
    pub fn color(&self) -> &Color {
        &self.color
    }

    #[inline]
    pub fn palette(&self) -> &[Color] {
        &self.palette
    }

    #[inline]
    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    /// Star count of one row
    #[inline]
    pub fn get(&self, row: i32) -> Result<i32> {
        self.state.get(row)
    }

    #[inline]
    pub fn total(&self) -> i32 {
        self.state.total()
    }

    /// Rank for the current total
    #[inline]
    pub fn rank(&self) -> Rank {
        rank_for(self.total())
    }

    /// Screenshot file name for this panel's title
    pub fn export_file_name(&self) -> String {
        export_file_name(&self.title)
    }

    // ------------------------------------------------------------------------
    // Interactions
    // ------------------------------------------------------------------------

    fn ensure_editable(&self) -> Result<()> {
        if self.read_only {
            Err(PanelError::ReadOnly)
        } else {
            Ok(())
        }
    }

    /// Click star `star` (0-based) of row `row`: the row becomes `star + 1` stars
    ///
    /// This always sets, never toggles, so the filled stars stay a
    /// contiguous prefix of the row.
    pub fn click_star(&mut self, row: i32, star: i32) -> Result<()> {
        self.ensure_editable()?;
        self.state.get(row)?;
        check_star(star)?;
        self.state.set_count(row, star + 1)
    }

    /// Set a row directly, bypassing click semantics
    pub fn set_count(&mut self, row: i32, value: i32) -> Result<()> {
        self.ensure_editable()?;
        self.state.set_count(row, value)
    }

    /// Clear one row
    pub fn clear_row(&mut self, row: i32) -> Result<()> {
        self.ensure_editable()?;
        self.state.clear(row)
    }

    /// Clear every row
    pub fn clear_all(&mut self) -> Result<()> {
        self.ensure_editable()?;
        self.state.clear_all();
        Ok(())
    }

    /// Change the star and rank color
    pub fn select_color(&mut self, color: Color) -> Result<()> {
        self.ensure_editable()?;
        if !self.palette.is_empty() && !self.palette.contains(&color) {
            warn!(color = %color, "selected color is not in the palette");
        }
        debug!(color = %color, "selected color");
        self.color = color;
        Ok(())
    }

    /// Stars highlighted while the pointer rests on star `star` of a row
    ///
    /// Star positions are checked the same way as `click_star`. Read-only
    /// panels never highlight.
    pub fn hover_preview(&self, star: i32) -> Result<[bool; STARS_PER_ROW]> {
        check_star(star)?;
        if self.read_only {
            return Ok([false; STARS_PER_ROW]);
        }
        Ok(std::array::from_fn(|i| (i as i32) <= star))
    }

    // ------------------------------------------------------------------------
    // Rendering
    // ------------------------------------------------------------------------

    /// Build the render model for the current state
    pub fn view(&self) -> PanelView {
        let mut rows = self
            .categories
            .iter()
            .zip(self.state.counts())
            .enumerate()
            .map(|(index, (label, &count))| RowView {
                index,
                label: label.clone(),
                stars: filled_stars(count),
                clearable: !self.read_only,
            });

        let columns = self
            .column_sizes
            .iter()
            .map(|&size| rows.by_ref().take(size).collect())
            .collect();

        PanelView {
            title: self.title.clone(),
            color: self.color.clone(),
            rank: self.rank(),
            total: self.total(),
            read_only: self.read_only,
            columns,
        }
    }
}

/// Reject star positions outside `0..MAX_STARS`
#[inline]
fn check_star(star: i32) -> Result<()> {
    if (0..i32::from(MAX_STARS)).contains(&star) {
        Ok(())
    } else {
        Err(PanelError::InvalidStar(star))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("skill{}", i)).collect()
    }

    #[test]
    fn test_new_panel_is_empty() {
        let panel = SkillPanel::new(labels(3), Color::default());
        assert_eq!(panel.len(), 3);
        assert_eq!(panel.total(), 0);
        assert_eq!(panel.rank(), Rank::E);
        assert!(!panel.is_read_only());
    }

    #[test]
    fn test_click_sets_prefix() {
        let mut panel = SkillPanel::new(labels(2), Color::default());
        panel.click_star(0, 4).unwrap();
        assert_eq!(panel.get(0).unwrap(), 5);

        // Clicking a lower star shrinks the row rather than toggling
        panel.click_star(0, 2).unwrap();
        assert_eq!(panel.get(0).unwrap(), 3);

        panel.click_star(0, 2).unwrap();
        assert_eq!(panel.get(0).unwrap(), 3);

        panel.click_star(1, 0).unwrap();
        assert_eq!(panel.get(1).unwrap(), 1);
        assert_eq!(panel.view().columns[0][0].stars, [true, true, true, false, false]);
    }

    #[test]
    fn test_click_rejects_bad_positions() {
        let mut panel = SkillPanel::new(labels(2), Color::default());
        assert_eq!(panel.click_star(0, 5), Err(PanelError::InvalidStar(5)));
        assert_eq!(panel.click_star(0, -1), Err(PanelError::InvalidStar(-1)));
        assert_eq!(
            panel.click_star(2, 9),
            Err(PanelError::OutOfRange { index: 2, len: 2 })
        );
        assert_eq!(panel.total(), 0);
    }

    #[test]
    fn test_clear_row_and_all() {
        let mut panel = SkillPanel::new(labels(3), Color::default());
        panel.click_star(0, 4).unwrap();
        panel.click_star(1, 1).unwrap();
        panel.clear_row(0).unwrap();
        assert_eq!(panel.total(), 2);
        panel.clear_all().unwrap();
        assert_eq!(panel.total(), 0);
    }

    #[test]
    fn test_full_panel_rank_flow() {
        let mut panel = SkillPanel::from_config(&PanelConfig::default());
        for row in 0..20 {
            panel.set_count(row, 5).unwrap();
        }
        assert_eq!(panel.total(), 100);
        assert_eq!(panel.rank(), Rank::S);

        panel.clear_row(0).unwrap();
        assert_eq!(panel.total(), 95);
        assert_eq!(panel.rank(), Rank::S);

        panel.clear_all().unwrap();
        assert_eq!(panel.total(), 0);
        assert_eq!(panel.rank(), Rank::E);
    }

    #[test]
    fn test_view_columns_follow_config() {
        let panel = SkillPanel::from_config(&PanelConfig::default());
        let view = panel.view();
        assert_eq!(view.columns.len(), 2);
        assert_eq!(view.columns[0].len(), 11);
        assert_eq!(view.columns[1].len(), 9);
        assert_eq!(view.columns[1][0].index, 11);
        assert_eq!(view.columns[1][0].label, "基础规则");
        assert!(view.rows().all(|r| r.clearable));
        assert_eq!(view.rank, Rank::E);
    }

    #[test]
    fn test_select_color() {
        let mut panel = SkillPanel::from_config(&PanelConfig::default());
        let blue = Color::parse("#1E90FF").unwrap();
        panel.select_color(blue.clone()).unwrap();
        assert_eq!(panel.color(), &blue);
        assert_eq!(panel.view().color, blue);

        // Off-palette colors are still accepted
        let odd = Color::parse("#123456").unwrap();
        panel.select_color(odd.clone()).unwrap();
        assert_eq!(panel.color(), &odd);
    }

    #[test]
    fn test_hover_preview() {
        let panel = SkillPanel::new(labels(1), Color::default());
        assert_eq!(panel.hover_preview(0).unwrap(), [true, false, false, false, false]);
        assert_eq!(panel.hover_preview(1).unwrap(), [true, true, false, false, false]);
        assert_eq!(panel.hover_preview(4).unwrap(), [true; 5]);
    }

    #[test]
    fn test_hover_preview_rejects_bad_positions() {
        let panel = SkillPanel::new(labels(1), Color::default());
        assert_eq!(panel.hover_preview(-3), Err(PanelError::InvalidStar(-3)));
        assert_eq!(panel.hover_preview(5), Err(PanelError::InvalidStar(5)));
        assert_eq!(panel.hover_preview(99), Err(PanelError::InvalidStar(99)));
    }

    #[test]
    fn test_read_only_from_record() {
        let config = PanelConfig::default();
        let record = PlayerRecord::new()
            .with_field("name", "Alice")
            .with_field("color", "#00FF00")
            .with_field("获胜能力", "5")
            .with_field("信用", "3")
            .with_field("知名度", "garbage");

        let mut panel = SkillPanel::from_record(&config, &record).unwrap();
        assert!(panel.is_read_only());
        assert_eq!(panel.title(), "Alice");
        assert_eq!(panel.color().as_str(), "#00FF00");
        assert_eq!(panel.get(0).unwrap(), 5);
        assert_eq!(panel.get(10).unwrap(), 3);
        assert_eq!(panel.total(), 8);
        assert_eq!(panel.export_file_name(), "Alice的面板.jpg");

        assert_eq!(panel.click_star(0, 1), Err(PanelError::ReadOnly));
        assert_eq!(panel.clear_row(0), Err(PanelError::ReadOnly));
        assert_eq!(panel.clear_all(), Err(PanelError::ReadOnly));
        assert_eq!(panel.set_count(0, 1), Err(PanelError::ReadOnly));
        assert_eq!(
            panel.select_color(Color::default()),
            Err(PanelError::ReadOnly)
        );
        assert_eq!(panel.total(), 8);
        assert_eq!(panel.hover_preview(3).unwrap(), [false; 5]);
        assert_eq!(panel.hover_preview(7), Err(PanelError::InvalidStar(7)));

        let view = panel.view();
        assert!(view.read_only);
        assert!(view.rows().all(|r| !r.clearable));
    }

    #[test]
    fn test_record_without_color_uses_default() {
        let record = PlayerRecord::new().with_field("name", "Bob");
        let panel = SkillPanel::from_record(&PanelConfig::default(), &record).unwrap();
        assert_eq!(panel.color(), &Color::default());
        assert_eq!(panel.total(), 0);
    }

    #[test]
    fn test_set_title_after_construction() {
        let mut panel = SkillPanel::from_config(&PanelConfig::default());
        assert_eq!(panel.export_file_name(), "player的面板.jpg");

        panel.set_title("Alice");
        assert_eq!(panel.title(), "Alice");
        assert_eq!(panel.export_file_name(), "Alice的面板.jpg");
        assert_eq!(panel.view().title, "Alice");

        panel.set_title("   ");
        assert_eq!(panel.export_file_name(), "player的面板.jpg");
    }

    #[test]
    fn test_view_json() {
        let panel = SkillPanel::new(labels(1), Color::default()).with_title("Zed");
        let json = panel.view().to_json().unwrap();
        assert!(json.contains("\"rank\":\"E\""));
        assert!(json.contains("\"color\":\"#FF0000\""));
        assert!(json.contains("\"title\":\"Zed\""));
    }
}
