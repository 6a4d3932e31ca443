//! Panel layout configuration

use once_cell::sync::Lazy;
use serde::Deserialize;

use super::Color;

/// Left column labels of the standard panel
const LEFT_FIELDS: [&str; 11] = [
    "获胜能力",
    "布标能力",
    "地盘兵力运营",
    "竞标运营",
    "战斗将卡运营",
    "大局观",
    "抢七阻七",
    "思考效率",
    "阴谋规划",
    "预防背刺",
    "信用",
];

/// Right column labels of the standard panel
const RIGHT_FIELDS: [&str; 9] = [
    "基础规则",
    "官方变体",
    "社区规则",
    "娱乐玩法",
    "高难对局场次",
    "赛事活跃度",
    "知名度",
    "招新贡献",
    "多媒体攻略分享",
];

/// Palette offered next to the panel
const PALETTE: [&str; 6] = [
    "#FF0000", "#FF8C00", "#FFD700", "#32CD32", "#1E90FF", "#8A2BE2",
];

/// Built-in standard panel configuration
pub static DEFAULT_PANEL_CONFIG: Lazy<PanelConfig> = Lazy::new(PanelConfig::standard);

/// Panel layout configuration
///
/// Missing keys fall back to the standard panel.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    /// Category labels shown in the left column
    pub left_fields: Vec<String>,
    /// Category labels shown in the right column
    pub right_fields: Vec<String>,
    /// Color used before the player picks one
    pub default_color: Color,
    /// Colors the player can pick from
    pub palette: Vec<Color>,
}

impl PanelConfig {
    fn standard() -> Self {
        let owned =
            |fields: &[&str]| -> Vec<String> { fields.iter().map(|f| f.to_string()).collect() };
        Self {
            left_fields: owned(&LEFT_FIELDS),
            right_fields: owned(&RIGHT_FIELDS),
            default_color: Color::default(),
            palette: PALETTE
                .iter()
                .filter_map(|c| Color::parse(c).ok())
                .collect(),
        }
    }

    /// All category labels, left column first
    pub fn categories(&self) -> Vec<String> {
        self.left_fields
            .iter()
            .chain(&self.right_fields)
            .cloned()
            .collect()
    }

    /// Total number of categories across both columns
    #[inline]
    pub fn category_count(&self) -> usize {
        self.left_fields.len() + self.right_fields.len()
    }
}

impl Default for PanelConfig {
    fn default() -> Self {
        DEFAULT_PANEL_CONFIG.clone()
    }
}
