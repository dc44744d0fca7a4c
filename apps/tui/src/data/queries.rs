use chrono::Datelike;
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

use crate::data::models::{NewsRecord, ZoneRow};
use crate::data::months::parse_news_date;
use crate::domain::{FilterCriteria, MonthRange, Selection};

/// News rows matching every active selector, in input order.
///
/// Product is an exact match, variety must be one of the split varieties,
/// and the month filter keeps rows whose best date falls inside the range.
/// Rows without a parseable date are dropped only while a month filter is
/// active.
pub fn filter_news(rows: &[NewsRecord], criteria: &FilterCriteria) -> Vec<NewsRecord> {
    rows.iter()
        .filter(|row| news_matches(row, criteria))
        .cloned()
        .collect()
}

pub fn news_matches(row: &NewsRecord, criteria: &FilterCriteria) -> bool {
    if !product_matches(row.product.as_deref(), &criteria.product) {
        return false;
    }

    if let Selection::Only(variety) = &criteria.variety {
        if !row.varieties().iter().any(|v| v == variety) {
            return false;
        }
    }

    match criteria.months {
        None => true,
        Some(range) => row
            .best_date()
            .and_then(parse_news_date)
            .is_some_and(|date| range.contains(date.month())),
    }
}

/// Zone rows matching every active selector, in input order.
///
/// Variety is a literal substring test on the raw variety text, since a
/// zone lists several varieties in free form. The month filter keeps zones
/// whose production period overlaps the range; zones with missing or
/// invalid period bounds are dropped while it is active.
pub fn filter_zones(rows: &[ZoneRow], criteria: &FilterCriteria) -> Vec<ZoneRow> {
    rows.iter()
        .filter(|row| zone_matches(row, criteria))
        .cloned()
        .collect()
}

pub fn zone_matches(row: &ZoneRow, criteria: &FilterCriteria) -> bool {
    if !product_matches(row.product.as_deref(), &criteria.product) {
        return false;
    }

    if let Selection::Only(variety) = &criteria.variety {
        if !row
            .variety
            .as_deref()
            .is_some_and(|raw| raw.contains(variety.as_str()))
        {
            return false;
        }
    }

    match criteria.months {
        None => true,
        Some(range) => zone_period(row).is_some_and(|period| period.overlaps(&range)),
    }
}

/// Production period of a zone, when both bounds are valid months.
pub fn zone_period(row: &ZoneRow) -> Option<MonthRange> {
    MonthRange::new(row.period_start?, row.period_end?).ok()
}

/// Case-sensitive equality on the trimmed product, the same form the
/// option index stores, so every offered product selects its own rows.
fn product_matches(product: Option<&str>, selection: &Selection) -> bool {
    match selection {
        Selection::All => true,
        Selection::Only(wanted) => product.map(str::trim) == Some(wanted.as_str()),
    }
}

/// Indices of rows whose title or summary fuzzily matches `query`, best
/// match first. An empty query matches every row in order.
pub fn search_news(rows: &[NewsRecord], query: &str) -> Vec<usize> {
    let query = query.trim();
    if query.is_empty() {
        return (0..rows.len()).collect();
    }

    let matcher = SkimMatcherV2::default();
    let mut scored: Vec<(usize, i64)> = rows
        .iter()
        .enumerate()
        .filter_map(|(index, row)| {
            let title = row.title.as_deref().unwrap_or_default();
            let summary = row.summary.as_deref().unwrap_or_default();
            let score = matcher
                .fuzzy_match(title, query)
                .max(matcher.fuzzy_match(summary, query))?;
            Some((index, score))
        })
        .collect();

    scored.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    scored.into_iter().map(|(index, _)| index).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::flatten::{flatten_news, flatten_zones};
    use crate::domain::Month;
    use serde_json::json;

    fn sample_news() -> Vec<NewsRecord> {
        flatten_news(&[
            json!({
                "id": 1,
                "titulo": "Exportaciones de Hass crecen",
                "fecha_articulo": "2024-01-15",
                "entidades": {"producto": "Aguacate", "variedad": "Hass/Fuerte"}
            }),
            json!({
                "id": 2,
                "titulo": "Lluvias en Sinaloa",
                "fecha_recoleccion": "2024-07-02",
                "entidades": {"producto": "Mango", "variedad": "Ataulfo"}
            }),
            json!({
                "id": 3,
                "titulo": "Precio del Hass Premium",
                "fecha_articulo": "sin fecha",
                "entidades": {"producto": "Aguacate", "variedad": "Hass Premium"}
            }),
            json!({"id": 4, "titulo": "Nota sin entidades"}),
        ])
    }

    fn sample_zones() -> Vec<ZoneRow> {
        flatten_zones(&[
            json!({
                "entidades": {"producto": "Aguacate", "variedad": "Hass, Fuerte"},
                "zonas_produccion": [
                    {"region": "Michoacán", "periodo_produccion": {"inicio": 11, "fin": 2}},
                    {"region": "Jalisco", "periodo_produccion": {"inicio": 5, "fin": 8}},
                    {"region": "Sin periodo"}
                ]
            }),
            json!({
                "entidades": {"producto": "Aguacate", "variedad": "Méndez (Hass.)"},
                "zonas_produccion": [
                    {"region": "Nayarit", "periodo_produccion": {"inicio": 14, "fin": 2}}
                ]
            }),
        ])
    }

    fn ids(rows: &[NewsRecord]) -> Vec<&str> {
        rows.iter().filter_map(|row| row.id.as_deref()).collect()
    }

    fn regions(rows: &[ZoneRow]) -> Vec<&str> {
        rows.iter().filter_map(|row| row.region.as_deref()).collect()
    }

    #[test]
    fn unfiltered_news_keeps_everything() {
        let news = sample_news();
        assert_eq!(filter_news(&news, &FilterCriteria::default()), news);
    }

    #[test]
    fn news_product_and_variety_are_exact() {
        let news = sample_news();
        let criteria =
            FilterCriteria::new(Selection::only("Aguacate"), Selection::only("Hass"), None);
        assert_eq!(ids(&filter_news(&news, &criteria)), vec!["1"]);

        let criteria =
            FilterCriteria::new(Selection::only("aguacate"), Selection::All, None);
        assert!(filter_news(&news, &criteria).is_empty());
    }

    #[test]
    fn news_month_filter_uses_best_date_and_fails_closed() {
        let news = sample_news();
        let winter = MonthRange::from_months(Month::December, Month::February);
        let criteria = FilterCriteria::new(Selection::All, Selection::All, Some(winter));
        assert_eq!(ids(&filter_news(&news, &criteria)), vec!["1"]);

        let summer = MonthRange::from_months(Month::June, Month::August);
        let criteria = FilterCriteria::new(Selection::All, Selection::All, Some(summer));
        assert_eq!(ids(&filter_news(&news, &criteria)), vec!["2"]);
    }

    #[test]
    fn zone_variety_is_literal_substring() {
        let zones = sample_zones();
        let criteria =
            FilterCriteria::new(Selection::only("Aguacate"), Selection::only("Hass"), None);
        assert_eq!(
            regions(&filter_zones(&zones, &criteria)),
            vec!["Michoacán", "Jalisco", "Sin periodo", "Nayarit"]
        );

        let criteria =
            FilterCriteria::new(Selection::only("Aguacate"), Selection::only("Hass."), None);
        assert_eq!(regions(&filter_zones(&zones, &criteria)), vec!["Nayarit"]);

        let criteria =
            FilterCriteria::new(Selection::only("Aguacate"), Selection::only("hass"), None);
        assert!(filter_zones(&zones, &criteria).is_empty());
    }

    #[test]
    fn zone_month_filter_uses_overlap_and_drops_invalid_periods() {
        let zones = sample_zones();
        let range = MonthRange::from_months(Month::January, Month::March);
        let criteria = FilterCriteria::new(Selection::All, Selection::All, Some(range));
        assert_eq!(regions(&filter_zones(&zones, &criteria)), vec!["Michoacán"]);

        let criteria = FilterCriteria::default();
        assert_eq!(filter_zones(&zones, &criteria).len(), 4);
    }

    #[test]
    fn filters_are_idempotent() {
        let news = sample_news();
        let zones = sample_zones();
        let range = MonthRange::from_months(Month::November, Month::March);
        let criteria = FilterCriteria::new(
            Selection::only("Aguacate"),
            Selection::only("Hass"),
            Some(range),
        );

        let once = filter_news(&news, &criteria);
        assert_eq!(filter_news(&once, &criteria), once);

        let once = filter_zones(&zones, &criteria);
        assert_eq!(filter_zones(&once, &criteria), once);
    }

    #[test]
    fn product_match_ignores_surrounding_whitespace_only() {
        let news = flatten_news(&[
            json!({"id": "padded", "entidades": {"producto": " Aguacate "}}),
            json!({"id": "lower", "entidades": {"producto": "aguacate"}}),
        ]);
        let criteria = FilterCriteria::new(Selection::only("Aguacate"), Selection::All, None);

        assert_eq!(ids(&filter_news(&news, &criteria)), vec!["padded"]);
    }

    #[test]
    fn search_ranks_title_matches() {
        let news = sample_news();
        let hits = search_news(&news, "hass");
        assert!(hits.contains(&0));
        assert!(hits.contains(&2));
        assert!(!hits.contains(&1));
        assert_eq!(search_news(&news, "  ").len(), news.len());
    }
}
