use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use serde::Serialize;

use crate::data::models::{NewsRecord, ZoneRow};
use crate::data::months::parse_news_date;
use crate::domain::FilterCriteria;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PointKind {
    News,
    Zone,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapPoint {
    pub kind: PointKind,
    pub latitude: f64,
    pub longitude: f64,
    pub label: String,
}

/// Keyword and actor frequencies across rows, most frequent first.
pub fn term_frequencies(news: &[NewsRecord]) -> Vec<(String, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for term in news
        .iter()
        .flat_map(|row| row.keywords.iter().chain(row.actors.iter()))
        .map(|term| term.trim())
        .filter(|term| !term.is_empty())
    {
        *counts.entry(term).or_insert(0) += 1;
    }

    let mut terms: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(term, count)| (term.to_string(), count))
        .collect();
    terms.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    terms
}

/// News counts per calendar day; rows without a parseable date are skipped.
pub fn news_counts_by_date(news: &[NewsRecord]) -> BTreeMap<NaiveDate, usize> {
    let mut counts = BTreeMap::new();
    for date in news
        .iter()
        .filter_map(|row| row.best_date().and_then(parse_news_date))
    {
        *counts.entry(date).or_insert(0) += 1;
    }
    counts
}

/// Plottable locations of news items and production zones.
pub fn map_points(news: &[NewsRecord], zones: &[ZoneRow]) -> Vec<MapPoint> {
    let news_points = news.iter().filter_map(|row| {
        let (latitude, longitude) = valid_coordinates(row.coordinates())?;
        Some(MapPoint {
            kind: PointKind::News,
            latitude,
            longitude,
            label: row.title.clone().unwrap_or_default(),
        })
    });
    let zone_points = zones.iter().filter_map(|row| {
        let (latitude, longitude) = valid_coordinates(row.coordinates())?;
        let label = [row.region.as_deref(), row.country.as_deref()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(", ");
        Some(MapPoint {
            kind: PointKind::Zone,
            latitude,
            longitude,
            label,
        })
    });
    news_points.chain(zone_points).collect()
}

fn valid_coordinates(coordinates: Option<(f64, f64)>) -> Option<(f64, f64)> {
    coordinates.filter(|(latitude, longitude)| {
        (-90.0..=90.0).contains(latitude) && (-180.0..=180.0).contains(longitude)
    })
}

#[allow(clippy::cast_precision_loss)]
pub fn mean_sentiment(news: &[NewsRecord]) -> Option<f64> {
    let scores: Vec<f64> = news.iter().filter_map(|row| row.sentiment).collect();
    if scores.is_empty() {
        return None;
    }
    Some(scores.iter().sum::<f64>() / scores.len() as f64)
}

pub fn total_volume(zones: &[ZoneRow]) -> Option<f64> {
    zones
        .iter()
        .filter_map(|row| row.volume_tonnes)
        .fold(None, |total, volume| Some(total.unwrap_or(0.0) + volume))
}

/// Everything the headless report prints for one selection.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSummary {
    pub criteria: FilterCriteria,
    pub total_news: usize,
    pub total_zones: usize,
    pub matching_news: usize,
    pub matching_zones: usize,
    pub mean_sentiment: Option<f64>,
    pub total_volume_tonnes: Option<f64>,
    pub top_terms: Vec<(String, usize)>,
    pub news_by_date: Vec<(String, usize)>,
    pub map_points: Vec<MapPoint>,
}

impl DashboardSummary {
    pub const TOP_TERMS: usize = 15;

    pub fn build(
        criteria: &FilterCriteria,
        totals: (usize, usize),
        news: &[NewsRecord],
        zones: &[ZoneRow],
    ) -> Self {
        let mut top_terms = term_frequencies(news);
        top_terms.truncate(Self::TOP_TERMS);

        Self {
            criteria: criteria.clone(),
            total_news: totals.0,
            total_zones: totals.1,
            matching_news: news.len(),
            matching_zones: zones.len(),
            mean_sentiment: mean_sentiment(news),
            total_volume_tonnes: total_volume(zones),
            top_terms,
            news_by_date: news_counts_by_date(news)
                .into_iter()
                .map(|(date, count)| (date.format("%Y-%m-%d").to_string(), count))
                .collect(),
            map_points: map_points(news, zones),
        }
    }
}
