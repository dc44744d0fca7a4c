use serde_json::Value;

use crate::data::fields::Document;
use crate::data::models::{NewsRecord, ZoneRow};

const LATITUDE_KEYS: [&str; 2] = ["lat", "latitud"];
const LONGITUDE_KEYS: [&str; 3] = ["lon", "lng", "longitud"];

/// One row per news document, in input order.
pub fn flatten_news(records: &[Value]) -> Vec<NewsRecord> {
    records.iter().map(news_row).collect()
}

fn news_row(value: &Value) -> NewsRecord {
    let doc = Document::new(value);
    let entities = doc.nested("entidades");
    let coordinates = entities.nested("coordenadas");

    NewsRecord {
        id: doc.text("id"),
        collected_at: doc.text("fecha_recoleccion"),
        published_at: doc.text_any(&["fecha_articulo", "fecha_publicacion"]),
        source: doc.text("fuente"),
        url: doc.text("url"),
        title: doc.text("titulo"),
        summary: doc.text("resumen"),
        category: doc.text("categoria"),
        language: doc.text("idioma"),
        country: entities.text("pais"),
        region: entities.text("region"),
        product: entities.text("producto"),
        latitude: coordinates.number_any(&LATITUDE_KEYS),
        longitude: coordinates.number_any(&LONGITUDE_KEYS),
        impact_level: doc.text("nivel_impacto"),
        sentiment: doc.number("sentimiento"),
        keywords: doc.list("palabras_clave"),
        actors: doc.list("actores"),
        market_conditions: doc.raw("condiciones_mercado"),
        production_data: doc.raw("datos_produccion"),
        ..NewsRecord::default()
    }
    .with_variety(entities.string("variedad"))
}

/// One row per production zone. Documents without zones contribute nothing.
pub fn flatten_zones(records: &[Value]) -> Vec<ZoneRow> {
    records.iter().flat_map(zone_rows).collect()
}

fn zone_rows(value: &Value) -> Vec<ZoneRow> {
    let doc = Document::new(value);
    let entities = doc.nested("entidades");
    let zone_id = doc.text("id");
    let source = doc.text("fuente");
    let title = doc.text("titulo");
    let product = entities.text("producto");
    let variety = entities.string("variedad");

    doc.items("zonas_produccion")
        .iter()
        .map(|entry| {
            let zone = Document::new(entry);
            let coordinates = zone.nested("coordenadas");
            let period = zone.nested("periodo_produccion");

            ZoneRow {
                zone_id: zone_id.clone(),
                source: source.clone(),
                title: title.clone(),
                product: product.clone(),
                variety: variety.clone(),
                country: zone.text("pais"),
                region: zone.text("region"),
                latitude: coordinates.number_any(&LATITUDE_KEYS),
                longitude: coordinates.number_any(&LONGITUDE_KEYS),
                period_start: period.month_any(&["inicio", "mes_inicio"]),
                period_end: period.month_any(&["fin", "mes_fin"]),
                volume_tonnes: zone
                    .number("volumen_estimado_toneladas")
                    .filter(|volume| *volume >= 0.0),
            }
        })
        .collect()
}
