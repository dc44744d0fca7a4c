use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::{debug, info, warn};

use crate::config::DashboardConfig;
use crate::data::flatten::{flatten_news, flatten_zones};
use crate::data::index::build_index;
use crate::data::models::{NewsRecord, ProductVarietyIndex, ZoneRow};
use crate::data::queries::{filter_news, filter_zones};
use crate::domain::FilterCriteria;
use crate::error::{DashboardError, Result};

/// Keys under which a wrapped document array is accepted.
const WRAPPER_KEYS: [&str; 3] = ["noticias", "zonas", "data"];

/// Reads a JSON file and returns its documents.
///
/// A top-level array is used as-is; an object wrapping a single array under
/// one of the known keys is unwrapped. Any other top-level value yields no
/// documents.
pub fn load_documents(path: &Path) -> Result<Vec<Value>> {
    let content = fs::read_to_string(path).map_err(|source| DashboardError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let value: Value = serde_json::from_str(&content).map_err(|source| DashboardError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    let documents = match value {
        Value::Array(documents) => documents,
        Value::Object(mut map) => {
            match WRAPPER_KEYS.iter().find_map(|key| match map.remove(*key) {
                Some(Value::Array(documents)) => Some(documents),
                _ => None,
            }) {
                Some(documents) => documents,
                None => {
                    warn!(path = %path.display(), "top-level object holds no document array");
                    Vec::new()
                }
            }
        }
        other => {
            warn!(path = %path.display(), kind = value_kind(&other), "top-level JSON value is not an array");
            Vec::new()
        }
    };

    debug!(path = %path.display(), documents = documents.len(), "loaded documents");
    Ok(documents)
}

const fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Both flattened tables and the filter options derived from them.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub news: Vec<NewsRecord>,
    pub zones: Vec<ZoneRow>,
    pub index: ProductVarietyIndex,
}

impl Dataset {
    pub fn load(config: &DashboardConfig) -> Result<Self> {
        let news = load_documents(&config.news_path)?;
        let zones = load_documents(&config.zones_path)?;
        let dataset = Self::from_documents(&news, &zones);

        info!(
            news = dataset.news.len(),
            zones = dataset.zones.len(),
            products = dataset.index.len(),
            "dataset ready"
        );
        Ok(dataset)
    }

    pub fn from_documents(news: &[Value], zones: &[Value]) -> Self {
        let news = flatten_news(news);
        let zones = flatten_zones(zones);
        let index = build_index(&news, &zones);
        Self { news, zones, index }
    }

    /// Both tables filtered by the same selection.
    pub fn filtered(&self, criteria: &FilterCriteria) -> (Vec<NewsRecord>, Vec<ZoneRow>) {
        (
            filter_news(&self.news, criteria),
            filter_zones(&self.zones, criteria),
        )
    }
}
