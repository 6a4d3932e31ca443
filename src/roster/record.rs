//! Player record and star-count extraction

use ahash::AHashMap;
use tracing::warn;

use crate::config::Color;
use crate::rating::MAX_STARS;

/// Column holding the player's display name
pub const NAME_FIELD: &str = "name";
/// Column holding the player's panel color
pub const COLOR_FIELD: &str = "color";

/// One row of the player table, keyed by header label
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerRecord {
    fields: AHashMap<String, String>,
}

impl PlayerRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style field insertion
    pub fn with_field(mut self, label: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(label, value);
        self
    }

    pub fn insert(&mut self, label: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(label.into(), value.into());
    }

    /// Raw field value, if the column was present in the row
    #[inline]
    pub fn field(&self, label: &str) -> Option<&str> {
        self.fields.get(label).map(String::as_str)
    }

    /// Player display name, empty when absent
    pub fn name(&self) -> &str {
        self.field(NAME_FIELD).unwrap_or_default()
    }

    /// Player panel color, `None` when absent or not `#RRGGBB`
    pub fn color(&self) -> Option<Color> {
        let raw = self.field(COLOR_FIELD)?.trim();
        if raw.is_empty() {
            return None;
        }
        match Color::parse(raw) {
            Ok(color) => Some(color),
            Err(_) => {
                warn!(player = self.name(), color = raw, "ignoring malformed player color");
                None
            }
        }
    }

    /// Star count stored for a category
    ///
    /// Missing or malformed values count as zero stars.
    pub fn star_count(&self, label: &str) -> u8 {
        let raw = self.field(label);
        if let Some(value) = raw
            .map(str::trim)
            .filter(|s| !s.is_empty() && parse_numeric(s).is_none())
        {
            warn!(
                player = self.name(),
                field = label,
                value,
                "treating malformed star count as 0"
            );
        }
        star_count_from_field(raw)
    }

    /// All `(label, value)` pairs, in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Read a table cell as a number
///
/// Accepts decimal and exponent forms, unsigned `0x`/`0o`/`0b` integers
/// and `Infinity` with an optional sign. Other spellings of infinity and
/// NaN are rejected.
fn parse_numeric(raw: &str) -> Option<f64> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    let lower = s.to_ascii_lowercase();
    for (prefix, radix) in [("0x", 16), ("0o", 8), ("0b", 2)] {
        if let Some(digits) = lower.strip_prefix(prefix) {
            if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
                return None;
            }
            return u64::from_str_radix(digits, radix).ok().map(|v| v as f64);
        }
    }

    match s {
        "Infinity" | "+Infinity" => Some(f64::INFINITY),
        "-Infinity" => Some(f64::NEG_INFINITY),
        _ if lower.contains("inf") || lower.contains("nan") => None,
        _ => s.parse::<f64>().ok(),
    }
}

/// Convert a raw field into a star count
///
/// The count is the number of star slots `i` in `0..5` with `i < value`:
/// missing, blank, non-numeric and non-positive values give 0, values above
/// 5 give 5, and fractional values round up.
pub fn star_count_from_field(raw: Option<&str>) -> u8 {
    let Some(value) = raw.and_then(parse_numeric) else {
        return 0;
    };

    (0..MAX_STARS).filter(|&i| f64::from(i) < value).count() as u8
}
