use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;
use serde_json::Value;

use crate::data::varieties::split_varieties;

/// One news item, flattened from a `noticias.json` document.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NewsRecord {
    pub id: Option<String>,
    pub collected_at: Option<String>,
    pub published_at: Option<String>,
    pub source: Option<String>,
    pub url: Option<String>,
    pub title: Option<String>,
    pub summary: Option<String>,
    pub category: Option<String>,
    pub language: Option<String>,
    pub country: Option<String>,
    pub region: Option<String>,
    pub product: Option<String>,
    /// Raw variety text; set only through [`NewsRecord::with_variety`] so
    /// the split list never goes stale.
    pub(crate) variety: Option<String>,
    pub(crate) varieties: Vec<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub impact_level: Option<String>,
    pub sentiment: Option<f64>,
    pub keywords: Vec<String>,
    pub actors: Vec<String>,
    pub market_conditions: Option<Value>,
    pub production_data: Option<Value>,
}

impl NewsRecord {
    /// Replaces the raw variety and re-derives the split list from it.
    #[must_use]
    pub fn with_variety(mut self, raw: Option<String>) -> Self {
        self.varieties = split_varieties(raw.as_deref());
        self.variety = raw;
        self
    }

    pub fn variety(&self) -> Option<&str> {
        self.variety.as_deref()
    }

    /// Variety names split out of [`NewsRecord::variety`].
    pub fn varieties(&self) -> &[String] {
        &self.varieties
    }

    /// Article date, falling back to the collection date.
    pub fn best_date(&self) -> Option<&str> {
        self.published_at
            .as_deref()
            .filter(|date| !date.trim().is_empty())
            .or(self.collected_at.as_deref())
    }

    pub fn coordinates(&self) -> Option<(f64, f64)> {
        self.latitude.zip(self.longitude)
    }
}

/// One production zone of a `zonas.json` document. Product and variety are
/// shared by every zone of the same document.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ZoneRow {
    pub zone_id: Option<String>,
    pub source: Option<String>,
    pub title: Option<String>,
    pub product: Option<String>,
    pub variety: Option<String>,
    pub country: Option<String>,
    pub region: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub period_start: Option<i64>,
    pub period_end: Option<i64>,
    pub volume_tonnes: Option<f64>,
}

impl ZoneRow {
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        self.latitude.zip(self.longitude)
    }
}

/// Products mapped to the varieties observed for them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ProductVarietyIndex(BTreeMap<String, BTreeSet<String>>);

impl ProductVarietyIndex {
    pub(crate) const fn from_map(map: BTreeMap<String, BTreeSet<String>>) -> Self {
        Self(map)
    }

    /// Product names in alphabetical order.
    pub fn products(&self) -> Vec<&str> {
        self.0.keys().map(String::as_str).collect()
    }

    /// Varieties of a product in alphabetical order; empty for unknown products.
    pub fn varieties(&self, product: &str) -> Vec<&str> {
        self.0
            .get(product)
            .map(|set| set.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    pub fn get(&self, product: &str) -> Option<&BTreeSet<String>> {
        self.0.get(product)
    }

    pub fn contains_product(&self, product: &str) -> bool {
        self.0.contains_key(product)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &BTreeSet<String>)> {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setting_the_variety_rederives_the_split_list() {
        let row = NewsRecord::default().with_variety(Some("A/B".to_string()));
        assert_eq!(row.variety(), Some("A/B"));
        assert_eq!(row.varieties(), ["A", "B"]);

        let row = row.with_variety(Some("Hass; Reed".to_string()));
        assert_eq!(row.variety(), Some("Hass; Reed"));
        assert_eq!(row.varieties(), ["Hass", "Reed"]);

        let row = row.with_variety(None);
        assert_eq!(row.variety(), None);
        assert!(row.varieties().is_empty());
    }

    #[test]
    fn best_date_skips_a_blank_article_date() {
        let row = NewsRecord {
            published_at: Some("  ".to_string()),
            collected_at: Some("2024-05-01".to_string()),
            ..NewsRecord::default()
        };
        assert_eq!(row.best_date(), Some("2024-05-01"));
    }
}
