use crate::app::App;
use agro_news_tui::NewsRecord;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;
use serde_json::Value;

fn field_line(label: &str, value: Option<&str>) -> TextLine<'static> {
    TextLine::from(vec![
        Span::styled(
            format!("{label}: "),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(value.unwrap_or("(ninguno)").to_string()),
    ])
}

fn joined(values: &[String]) -> Option<String> {
    (!values.is_empty()).then(|| values.join(", "))
}

/// Object members as `clave: valor` lines, scalars as a single line.
fn value_lines(value: Option<&Value>) -> Vec<TextLine<'static>> {
    match value {
        Some(Value::Object(map)) => map
            .iter()
            .map(|(key, value)| {
                let text = value
                    .as_str()
                    .map_or_else(|| value.to_string(), ToString::to_string);
                TextLine::from(format!("  {key}: {text}"))
            })
            .collect(),
        Some(Value::Null) | None => Vec::new(),
        Some(other) => vec![TextLine::from(format!("  {other}"))],
    }
}

fn detail_lines(news: &NewsRecord) -> Vec<TextLine<'static>> {
    let coordinates = news
        .coordinates()
        .map(|(latitude, longitude)| format!("{latitude:.4}, {longitude:.4}"));
    let sentiment = news.sentiment.map(|value| format!("{value:+.2}"));
    let location = joined(
        &[news.region.clone(), news.country.clone()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>(),
    );

    let mut lines = vec![
        field_line("Fecha", news.best_date()),
        field_line("Fuente", news.source.as_deref()),
        field_line("URL", news.url.as_deref()),
        field_line("Categoría", news.category.as_deref()),
        field_line("Producto", news.product.as_deref()),
        field_line("Variedades", joined(news.varieties()).as_deref()),
        field_line("Ubicación", location.as_deref()),
        field_line("Coordenadas", coordinates.as_deref()),
        field_line("Impacto", news.impact_level.as_deref()),
        field_line("Sentimiento", sentiment.as_deref()),
        field_line("Palabras clave", joined(&news.keywords).as_deref()),
        field_line("Actores", joined(&news.actors).as_deref()),
        TextLine::from(""),
        TextLine::from(news.summary.clone().unwrap_or_default()),
    ];

    let market = value_lines(news.market_conditions.as_ref());
    if !market.is_empty() {
        lines.push(TextLine::from(""));
        lines.push(field_line("Condiciones de mercado", Some("")));
        lines.extend(market);
    }

    let production = value_lines(news.production_data.as_ref());
    if !production.is_empty() {
        lines.push(TextLine::from(""));
        lines.push(field_line("Datos de producción", Some("")));
        lines.extend(production);
    }

    lines
}

pub fn render_news_details(app: &App, f: &mut Frame<'_>) {
    let area = f.area();

    let Some(news) = app.selected_news() else {
        return;
    };

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(1)])
        .split(area);

    let block = Block::default()
        .title(format!(
            "Noticia {} de {}: {}",
            app.selected_news_index + 1,
            app.visible_news.len(),
            news.title.as_deref().unwrap_or("(sin título)")
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let paragraph = Paragraph::new(Text::from(detail_lines(news)))
        .block(block)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, layout[0]);

    let help = Paragraph::new(TextLine::from(vec![
        Span::styled(
            "ESC",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(": Volver   "),
        Span::styled(
            "↑/↓",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(": Anterior / siguiente   "),
        Span::styled(
            "q",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(": Salir"),
    ]))
    .alignment(ratatui::layout::Alignment::Center);
    f.render_widget(help, layout[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn market_conditions_render_one_line_per_member() {
        let market = json!({"precio": "alto", "demanda": 3});
        let lines = value_lines(Some(&market));
        assert_eq!(lines.len(), 2);
        assert!(value_lines(Some(&Value::Null)).is_empty());
    }

    #[test]
    fn missing_fields_show_a_placeholder() {
        let lines = detail_lines(&NewsRecord::default());
        let source = lines[1].to_string();
        assert!(source.contains("(ninguno)"));
    }
}
