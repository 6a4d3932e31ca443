//! Python bindings
//!
//! Exposes the panel to a Python host. Each `SkillPanel` object owns its
//! own state; nothing is shared between panels.

use pyo3::prelude::*;
use pyo3::types::PyDict;
use std::collections::HashMap;

use crate::config::{Color, PanelConfig};
use crate::panel::SkillPanel;
use crate::rank;
use crate::roster::{self, PlayerRecord};

/// Resolve an optional JSON config, falling back to the standard panel
fn load_config(config_json: Option<&str>) -> PyResult<PanelConfig> {
    match config_json {
        Some(json) => Ok(PanelConfig::from_json(json)?),
        None => Ok(PanelConfig::default()),
    }
}

/// Text of one record cell: strings as-is, numbers formatted, anything else dropped
fn cell_text(value: &Bound<'_, PyAny>) -> Option<String> {
    if value.is_none() {
        return None;
    }
    if let Ok(text) = value.extract::<String>() {
        return Some(text);
    }
    if let Ok(int) = value.extract::<i64>() {
        return Some(int.to_string());
    }
    value.extract::<f64>().ok().map(|float| float.to_string())
}

/// Build a player record from a Python dict, skipping keys or values it cannot read
fn record_from_dict(fields: &Bound<'_, PyDict>) -> PlayerRecord {
    let mut record = PlayerRecord::new();
    for (key, value) in fields.iter() {
        let Ok(label) = key.extract::<String>() else {
            continue;
        };
        match cell_text(&value) {
            Some(text) => record.insert(label, text),
            None => tracing::debug!(field = %label, "skipping unreadable record value"),
        }
    }
    record
}

// ============================================================================
// SkillPanel PyClass
// ============================================================================

/// Interactive skill panel handle
#[pyclass(name = "SkillPanel")]
pub struct PySkillPanel {
    inner: SkillPanel,
}

#[pymethods]
impl PySkillPanel {
    /// Create an editable panel
    ///
    /// # Arguments
    /// * `config_json` - Optional panel config as JSON (default: standard 20-row panel)
    #[new]
    #[pyo3(signature = (config_json=None))]
    fn new(config_json: Option<&str>) -> PyResult<Self> {
        let config = load_config(config_json)?;
        Ok(Self {
            inner: SkillPanel::from_config(&config),
        })
    }

    /// Create a read-only panel from a player record dict
    #[staticmethod]
    #[pyo3(signature = (fields, config_json=None))]
    fn from_record(fields: &Bound<'_, PyDict>, config_json: Option<&str>) -> PyResult<Self> {
        let config = load_config(config_json)?;
        let record = record_from_dict(fields);
        Ok(Self {
            inner: SkillPanel::from_record(&config, &record)?,
        })
    }

    // ------------------------------------------------------------------------
    // Getter Properties
    // ------------------------------------------------------------------------

    /// Player name, used for the export file name
    #[getter]
    fn title(&self) -> String {
        self.inner.title().to_string()
    }

    #[setter]
    fn set_title(&mut self, title: String) {
        self.inner.set_title(title);
    }

    #[getter]
    fn total(&self) -> i32 {
        self.inner.total()
    }

    #[getter]
    fn rank(&self) -> &'static str {
        self.inner.rank().as_str()
    }

    #[getter]
    fn color(&self) -> String {
        self.inner.color().to_string()
    }

    #[getter]
    fn read_only(&self) -> bool {
        self.inner.is_read_only()
    }

    #[getter]
    fn categories(&self) -> Vec<String> {
        self.inner.categories().to_vec()
    }

    // ------------------------------------------------------------------------
    // Interactions
    // ------------------------------------------------------------------------

    fn get(&self, row: i32) -> PyResult<i32> {
        Ok(self.inner.get(row)?)
    }

    fn click_star(&mut self, row: i32, star: i32) -> PyResult<()> {
        Ok(self.inner.click_star(row, star)?)
    }

    fn set_count(&mut self, row: i32, value: i32) -> PyResult<()> {
        Ok(self.inner.set_count(row, value)?)
    }

    fn clear_row(&mut self, row: i32) -> PyResult<()> {
        Ok(self.inner.clear_row(row)?)
    }

    fn clear_all(&mut self) -> PyResult<()> {
        Ok(self.inner.clear_all()?)
    }

    fn select_color(&mut self, color: &str) -> PyResult<()> {
        let color = Color::parse(color)?;
        Ok(self.inner.select_color(color)?)
    }

    fn hover_preview(&self, star: i32) -> PyResult<Vec<bool>> {
        Ok(self.inner.hover_preview(star)?.to_vec())
    }

    /// Render model as a JSON string
    fn view_json(&self) -> PyResult<String> {
        Ok(self.inner.view().to_json()?)
    }

    fn export_file_name(&self) -> String {
        self.inner.export_file_name()
    }
}

// ============================================================================
// Python Functions
// ============================================================================

/// Rank letter for an aggregate star total
#[pyfunction]
fn rank_for(total: i32) -> &'static str {
    rank::rank_for(total).as_str()
}

/// Parse a tab-separated player table into a list of dicts
#[pyfunction]
fn parse_roster(text: &str) -> Vec<HashMap<String, String>> {
    roster::parse_roster(text)
        .iter()
        .map(|record| {
            record
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect()
        })
        .collect()
}

// ============================================================================
// Python Module Definition
// ============================================================================

/// Python module definition
#[pymodule]
fn skill_panel_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(rank_for, m)?)?;
    m.add_function(wrap_pyfunction!(parse_roster, m)?)?;
    m.add_class::<PySkillPanel>()?;
    Ok(())
}
