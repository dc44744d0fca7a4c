use std::collections::{BTreeMap, BTreeSet};

use crate::data::models::{NewsRecord, ProductVarietyIndex, ZoneRow};
use crate::data::varieties::split_varieties;

/// Builds the product → varieties options from both tables.
///
/// Rows without a product are skipped. News rows contribute their split
/// varieties; zone rows contribute the split of their raw variety field.
pub fn build_index(news: &[NewsRecord], zones: &[ZoneRow]) -> ProductVarietyIndex {
    let news_entries = news
        .iter()
        .map(|row| (row.product.as_deref(), row.varieties().to_vec()));
    let zone_entries = zones
        .iter()
        .map(|row| (row.product.as_deref(), split_varieties(row.variety.as_deref())));

    let map = news_entries.chain(zone_entries).fold(
        BTreeMap::<String, BTreeSet<String>>::new(),
        |mut map, (product, varieties)| {
            let Some(product) = product.map(str::trim).filter(|p| !p.is_empty()) else {
                return map;
            };
            map.entry(product.to_string()).or_default().extend(
                varieties
                    .into_iter()
                    .map(|variety| variety.trim().to_string())
                    .filter(|variety| !variety.is_empty()),
            );
            map
        },
    );

    ProductVarietyIndex::from_map(map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::flatten::{flatten_news, flatten_zones};
    use serde_json::json;

    #[test]
    fn unions_news_and_zone_varieties() {
        let news = flatten_news(&[json!({
            "entidades": {"producto": "Aguacate", "variedad": "A/B"}
        })]);
        let zones = flatten_zones(&[json!({
            "entidades": {"producto": "Aguacate", "variedad": "A"},
            "zonas_produccion": [{"pais": "México"}]
        })]);

        let index = build_index(&news, &zones);

        assert_eq!(
            index.get("Aguacate"),
            Some(&BTreeSet::from(["A".to_string(), "B".to_string()]))
        );
    }

    #[test]
    fn products_without_varieties_map_to_empty_sets() {
        let news = flatten_news(&[json!({"entidades": {"producto": " Mango "}})]);
        let index = build_index(&news, &[]);

        assert_eq!(index.products(), vec!["Mango"]);
        assert!(index.varieties("Mango").is_empty());
    }

    #[test]
    fn never_holds_empty_keys_or_members() {
        let news = flatten_news(&[
            json!({"entidades": {"producto": "", "variedad": "Hass"}}),
            json!({"entidades": {"producto": "   ", "variedad": "Hass"}}),
            json!({"entidades": {"variedad": "Hass"}}),
            json!({"entidades": {"producto": "Uva", "variedad": " ; / "}}),
        ]);
        let zones = flatten_zones(&[json!({
            "entidades": {"producto": "Uva", "variedad": "Red Globe || "},
            "zonas_produccion": [{}, {}]
        })]);

        let index = build_index(&news, &zones);

        assert_eq!(index.len(), 1);
        for (product, varieties) in index.iter() {
            assert!(!product.is_empty());
            assert!(varieties.iter().all(|variety| !variety.is_empty()));
        }
        assert_eq!(index.varieties("Uva"), vec!["Red Globe"]);
    }

    #[test]
    fn options_are_sorted_and_case_sensitive() {
        let news = flatten_news(&[
            json!({"entidades": {"producto": "uva", "variedad": "b"}}),
            json!({"entidades": {"producto": "Uva", "variedad": "Thompson|Crimson"}}),
        ]);

        let index = build_index(&news, &[]);

        assert_eq!(index.products(), vec!["Uva", "uva"]);
        assert_eq!(index.varieties("Uva"), vec!["Crimson", "Thompson"]);
    }
}
