use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::Stdout;
use std::time::Duration;

use agro_news_tui::data::stats::DashboardSummary;
use agro_news_tui::data::Dataset;
use agro_news_tui::FilterCriteria;

use crate::app::{handle_input, App};
use crate::ui;

/// Run the application in headless mode (no UI)
pub fn run_headless(dataset: &Dataset, criteria: &FilterCriteria, json: bool) -> Result<()> {
    let summary = build_summary(dataset, criteria);

    if json {
        let json = serde_json::to_string_pretty(&summary)?;
        println!("{json}");
    } else {
        render_headless_summary(&summary);
    }

    Ok(())
}

fn build_summary(dataset: &Dataset, criteria: &FilterCriteria) -> DashboardSummary {
    let (news, zones) = dataset.filtered(criteria);
    DashboardSummary::build(
        criteria,
        (dataset.news.len(), dataset.zones.len()),
        &news,
        &zones,
    )
}

fn render_headless_summary(summary: &DashboardSummary) {
    let criteria = &summary.criteria;

    println!("\nAgro News Summary");
    println!("=================");
    println!(
        "Producto: {}",
        criteria.product.value().unwrap_or("Todos")
    );
    println!(
        "Variedad: {}",
        criteria.variety.value().unwrap_or("Todas")
    );
    println!(
        "Meses: {}",
        criteria
            .months
            .map_or_else(|| "Todos".to_string(), |range| range.label())
    );
    println!(
        "Noticias: {} de {}",
        summary.matching_news, summary.total_news
    );
    println!(
        "Zonas: {} de {}",
        summary.matching_zones, summary.total_zones
    );

    if let Some(sentiment) = summary.mean_sentiment {
        println!("Sentimiento medio: {sentiment:+.2}");
    }
    if let Some(volume) = summary.total_volume_tonnes {
        println!("Volumen estimado: {volume:.0} t");
    }

    println!("\nPalabras clave y actores:");
    for (term, count) in &summary.top_terms {
        println!("- {term}: {count}");
    }

    println!("\nNoticias por fecha:");
    for (date, count) in &summary.news_by_date {
        println!("- {date}: {count}");
    }

    println!("\nPuntos en el mapa: {}", summary.map_points.len());
}

/// Run the main application event loop
pub fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    // Configure event poll timeout (ms)
    const EVENT_POLL_TIMEOUT: u64 = 100;

    loop {
        // Draw the UI with better error context
        if let Err(e) = terminal.draw(|f| ui::ui(app, f)) {
            return Err(color_eyre::eyre::eyre!("Terminal draw error: {e}"));
        }

        if matches!(
            event::poll(Duration::from_millis(EVENT_POLL_TIMEOUT)),
            Ok(true)
        ) {
            match event::read() {
                Ok(Event::Key(key)) if key.kind != KeyEventKind::Release => {
                    handle_input(app, key.code);
                    if !app.running {
                        break;
                    }
                }
                Ok(Event::Resize(_, _)) => {
                    // Force a redraw after resize
                    if terminal.draw(|f| ui::ui(app, f)).is_err() {
                        // Non-fatal redraw error
                    }
                }
                Ok(_) | Err(_) => {
                    // Ignore non-key events
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use agro_news_tui::Selection;
    use serde_json::json;

    #[test]
    fn summary_counts_match_the_selection() {
        let dataset = Dataset::from_documents(
            &[
                json!({"entidades": {"producto": "Aguacate"}, "palabras_clave": ["exportación"]}),
                json!({"entidades": {"producto": "Mango"}}),
            ],
            &[json!({
                "entidades": {"producto": "Aguacate"},
                "zonas_produccion": [{"volumen_estimado_toneladas": 10}]
            })],
        );
        let criteria = FilterCriteria::new(Selection::only("Aguacate"), Selection::All, None);

        let summary = build_summary(&dataset, &criteria);

        assert_eq!(summary.total_news, 2);
        assert_eq!(summary.matching_news, 1);
        assert_eq!(summary.matching_zones, 1);
        assert_eq!(summary.total_volume_tonnes, Some(10.0));
        assert_eq!(summary.top_terms, vec![("exportación".to_string(), 1)]);
    }
}
