//! Swatch dataset - the color records shown in the list

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

pub mod render;

/// One swatch entry. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorRecord {
    pub id: i64,
    pub color_name: String,
    pub color_code: String,
}

impl ColorRecord {
    pub fn new(id: i64, color_name: impl Into<String>, color_code: impl Into<String>) -> Self {
        Self {
            id,
            color_name: color_name.into(),
            color_code: color_code.into(),
        }
    }
}

/// Record as it appears on disk, before validation.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawRecord {
    id: Option<i64>,
    color_name: Option<String>,
    color_code: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TomlDataset {
    #[serde(default)]
    swatch: Vec<RawRecord>,
}

/// The swatches bundled with the app
pub fn builtin() -> Vec<ColorRecord> {
    vec![
        ColorRecord::new(1, "Steel Blue", "#4D7EA8"),
        ColorRecord::new(2, "Web Gray", "#828489"),
        ColorRecord::new(3, "Heliotrope Gray", "#9E90A2"),
        ColorRecord::new(4, "Light Steel Blue", "#B6C2D9"),
        ColorRecord::new(5, "Raisin Black", "#272932"),
    ]
}

/// Load a dataset from a `.json` array or a `.toml` file of `[[swatch]]` tables.
pub fn load(path: &Path) -> anyhow::Result<Vec<ColorRecord>> {
    let raw = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    let records = match ext.as_deref() {
        Some("json") => parse_json(&raw),
        Some("toml") => parse_toml(&raw),
        _ => anyhow::bail!(
            "unsupported swatch file {} (expected .json or .toml)",
            path.display()
        ),
    }
    .with_context(|| format!("load swatches from {}", path.display()))?;

    tracing::info!(path = %path.display(), count = records.len(), "loaded swatches");
    Ok(records)
}

pub fn parse_json(raw: &str) -> anyhow::Result<Vec<ColorRecord>> {
    let records = serde_json::from_str::<Vec<RawRecord>>(raw).context("parse swatch JSON")?;
    validate(records)
}

pub fn parse_toml(raw: &str) -> anyhow::Result<Vec<ColorRecord>> {
    let dataset = toml::from_str::<TomlDataset>(raw).context("parse swatch TOML")?;
    validate(dataset.swatch)
}

/// Reject records without an id or with a repeated one. Positions are 1-based.
fn validate(raw: Vec<RawRecord>) -> anyhow::Result<Vec<ColorRecord>> {
    let mut seen: HashMap<i64, usize> = HashMap::with_capacity(raw.len());
    let mut out = Vec::with_capacity(raw.len());

    for (i, r) in raw.into_iter().enumerate() {
        let pos = i + 1;
        let id = r.id.with_context(|| format!("swatch #{pos} has no id"))?;
        if let Some(first) = seen.insert(id, pos) {
            anyhow::bail!("duplicate swatch id {id} (entries #{first} and #{pos})");
        }
        let color_name = r
            .color_name
            .with_context(|| format!("swatch id {id} has no colorName"))?;
        let color_code = r
            .color_code
            .with_context(|| format!("swatch id {id} has no colorCode"))?;

        if crate::tui::theme::palette::parse_color_code(&color_code).is_none() {
            tracing::warn!(id, code = %color_code, "swatch code is not a #RRGGBB color");
        }

        out.push(ColorRecord {
            id,
            color_name,
            color_code,
        });
    }

    Ok(out)
}
