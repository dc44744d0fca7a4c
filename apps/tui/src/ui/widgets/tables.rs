use crate::app::App;
use agro_news_tui::ZoneRow;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};
use ratatui::Frame;

pub const fn scroll_offset(
    total_rows: usize,
    max_visible_rows: usize,
    selected_index: usize,
) -> usize {
    if total_rows <= max_visible_rows {
        return 0;
    }

    if selected_index >= max_visible_rows {
        return selected_index.saturating_sub(max_visible_rows) + 1;
    }

    0
}

fn header_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

fn selected_style() -> Style {
    Style::default()
        .bg(Color::Rgb(0, 0, 238))
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}

fn sentiment_color(sentiment: Option<f64>) -> Color {
    match sentiment {
        Some(value) if value > 0.2 => Color::Green,
        Some(value) if value < -0.2 => Color::Red,
        _ => Color::Gray,
    }
}

fn empty_panel(f: &mut Frame<'_>, area: Rect, title: String, message: &str) {
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let paragraph = Paragraph::new(message)
        .block(block)
        .alignment(ratatui::layout::Alignment::Center);
    f.render_widget(paragraph, area);
}

pub fn render_news_table(app: &App, f: &mut Frame<'_>, area: Rect) {
    let total_rows = app.visible_news.len();
    let title = format!("Noticias ({} de {})", total_rows, app.dataset.news.len());

    if total_rows == 0 {
        empty_panel(f, area, title, "Sin noticias para la selección");
        return;
    }

    let header = Row::new(vec![
        Cell::from("Fecha"),
        Cell::from("Título"),
        Cell::from("Producto"),
        Cell::from("Variedad"),
        Cell::from("Fuente"),
    ])
    .style(header_style());

    // Borders plus header
    let max_visible_rows = area.height.saturating_sub(3) as usize;
    let offset = scroll_offset(total_rows, max_visible_rows, app.selected_news_index);

    let rows = app
        .visible_rows()
        .enumerate()
        .skip(offset)
        .take(max_visible_rows)
        .map(|(i, news)| {
            let style = if i == app.selected_news_index {
                selected_style()
            } else {
                Style::default().fg(sentiment_color(news.sentiment))
            };

            Row::new(vec![
                Cell::from(news.best_date().unwrap_or("-").chars().take(10).collect::<String>()),
                Cell::from(news.title.clone().unwrap_or_default()),
                Cell::from(news.product.clone().unwrap_or_default()),
                Cell::from(news.varieties().join(", ")),
                Cell::from(news.source.clone().unwrap_or_default()),
            ])
            .style(style)
        });

    let widths = [
        Constraint::Length(10),
        Constraint::Min(24),
        Constraint::Length(12),
        Constraint::Length(14),
        Constraint::Length(14),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .title(format!(
                    "Noticias ({} de {})",
                    app.selected_news_index + 1,
                    total_rows
                ))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .column_spacing(1);

    f.render_widget(table, area);
}

fn period_label(zone: &ZoneRow) -> String {
    match (zone.period_start, zone.period_end) {
        (Some(start), Some(end)) => format!("{start}-{end}"),
        (Some(month), None) | (None, Some(month)) => month.to_string(),
        (None, None) => "-".to_string(),
    }
}

pub fn render_zones_table(zones: &[ZoneRow], f: &mut Frame<'_>, area: Rect) {
    let title = format!("Zonas de producción ({})", zones.len());

    if zones.is_empty() {
        empty_panel(f, area, title, "Sin zonas para la selección");
        return;
    }

    let header = Row::new(vec![
        Cell::from("Zona"),
        Cell::from("Producto"),
        Cell::from("Variedad"),
        Cell::from("Región"),
        Cell::from("Meses"),
        Cell::from("Toneladas"),
    ])
    .style(header_style());

    let max_visible_rows = area.height.saturating_sub(3) as usize;

    let rows = zones.iter().take(max_visible_rows).map(|zone| {
        Row::new(vec![
            Cell::from(zone.zone_id.clone().unwrap_or_default()),
            Cell::from(zone.product.clone().unwrap_or_default()),
            Cell::from(zone.variety.clone().unwrap_or_default()),
            Cell::from(
                zone.region
                    .clone()
                    .or_else(|| zone.country.clone())
                    .unwrap_or_default(),
            ),
            Cell::from(period_label(zone)),
            Cell::from(
                zone.volume_tonnes
                    .map_or_else(String::new, |volume| format!("{volume:.0}")),
            ),
        ])
    });

    let widths = [
        Constraint::Min(12),
        Constraint::Length(12),
        Constraint::Length(14),
        Constraint::Length(14),
        Constraint::Length(6),
        Constraint::Length(10),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .column_spacing(1);

    f.render_widget(table, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_top_when_everything_fits() {
        assert_eq!(scroll_offset(5, 10, 4), 0);
    }

    #[test]
    fn follows_selection_past_the_fold() {
        assert_eq!(scroll_offset(30, 10, 3), 0);
        assert_eq!(scroll_offset(30, 10, 10), 1);
        assert_eq!(scroll_offset(30, 10, 29), 20);
    }

    #[test]
    fn zone_period_label_handles_open_ends() {
        let zone = ZoneRow {
            period_start: Some(11),
            period_end: Some(2),
            ..ZoneRow::default()
        };
        assert_eq!(period_label(&zone), "11-2");
        assert_eq!(period_label(&ZoneRow::default()), "-");
    }
}
