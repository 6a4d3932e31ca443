//! Skill Panel Core - star-rating state and rank engine for player skill panels
//!
//! A panel is a fixed list of labeled categories, each rated 0 to 5 stars.
//! The aggregate star total maps to a letter rank from `S` down to `E`.
//! Panels are either editable (driven by star clicks and clears) or
//! read-only views built from a stored player record.
//!
//! Python bindings are available behind the `python` feature.

pub mod config;
pub mod error;
pub mod panel;
pub mod rank;
pub mod rating;
pub mod roster;

#[cfg(feature = "python")]
mod python;

pub use config::{Color, PanelConfig};
pub use error::{PanelError, Result};
pub use panel::{export_file_name, PanelView, RowView, SkillPanel};
pub use rank::{rank_for, Rank};
pub use rating::{RatingState, MAX_STARS};
pub use roster::{parse_roster, PlayerRecord};
