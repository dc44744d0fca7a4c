use crate::app::{App, ChartTab};
use crate::ui::widgets::map::render_map;
use crate::ui::widgets::tables::render_zones_table;
use agro_news_tui::data::stats::{news_counts_by_date, term_frequencies};
use ratatui::layout::{Constraint, Direction, Layout, Margin, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{
    Axis, Bar, BarChart, BarGroup, Block, Borders, Chart, Dataset, GraphType, Paragraph, Tabs,
};
use ratatui::Frame;
use std::collections::BTreeMap;

const MAX_TERMS: usize = 12;

pub fn render_chart_tabs(app: &App, f: &mut Frame<'_>, area: Rect) {
    let titles = ChartTab::ALL
        .iter()
        .enumerate()
        .map(|(index, tab)| TextLine::from(format!("{} {}", index + 1, tab.label())))
        .collect::<Vec<_>>();

    let tabs = Tabs::new(titles)
        .select(app.chart_tab_index)
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::Rgb(0, 0, 238))
                .add_modifier(Modifier::BOLD),
        )
        .divider(Span::raw("|"));

    f.render_widget(tabs, area);
}

pub fn render_chart_panel(app: &App, f: &mut Frame<'_>, area: Rect) {
    let inner = area.inner(Margin::new(0, 1));

    match app.chart_tab() {
        ChartTab::Terms => render_terms_barchart(app, f, inner),
        ChartTab::Map => render_map(app, f, inner),
        ChartTab::Timeline => render_timeline(app, f, inner),
        ChartTab::Zones => {
            let split = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
                .split(inner);
            render_zones_table(&app.filtered_zones, f, split[0]);
            render_volume_barchart(app, f, split[1]);
        }
    }
}

fn no_data(f: &mut Frame<'_>, area: Rect, title: &str) {
    let block = Block::default()
        .title(title.to_string())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let paragraph = Paragraph::new("Sin datos para la selección")
        .block(block)
        .alignment(ratatui::layout::Alignment::Center);
    f.render_widget(paragraph, area);
}

fn horizontal_barchart<'a>(title: &'a str, bars: &'a [Bar<'a>], max_value: u64) -> BarChart<'a> {
    BarChart::default()
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .direction(Direction::Horizontal)
        .data(BarGroup::default().bars(bars))
        .max(max_value.max(1))
        .bar_gap(0)
        .bar_width(1)
}

pub fn render_terms_barchart(app: &App, f: &mut Frame<'_>, area: Rect) {
    let title = "Palabras clave y actores";
    let mut terms = term_frequencies(&app.filtered_news);
    if terms.is_empty() {
        no_data(f, area, title);
        return;
    }
    terms.truncate(MAX_TERMS);

    let bars: Vec<Bar<'_>> = terms
        .iter()
        .map(|(term, count)| {
            Bar::default()
                .value(*count as u64)
                .label(TextLine::from(term.as_str()))
                .style(Style::default().fg(Color::Yellow))
                .value_style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
        })
        .collect();

    let max_value = terms.first().map_or(1, |(_, count)| *count as u64);
    f.render_widget(horizontal_barchart(title, &bars, max_value), area);
}

#[allow(clippy::cast_precision_loss)]
pub fn render_timeline(app: &App, f: &mut Frame<'_>, area: Rect) {
    let title = "Noticias por fecha";
    let counts = news_counts_by_date(&app.filtered_news);
    let (Some(first), Some(last)) = (counts.keys().next(), counts.keys().next_back()) else {
        no_data(f, area, title);
        return;
    };

    let points: Vec<(f64, f64)> = counts
        .iter()
        .map(|(date, count)| ((*date - *first).num_days() as f64, *count as f64))
        .collect();

    let span_days = (*last - *first).num_days().max(1) as f64;
    let max_count = counts.values().copied().max().unwrap_or(1) as f64;

    let datasets = vec![Dataset::default()
        .name("Noticias")
        .marker(Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::Yellow))
        .data(&points)];

    let x_labels = vec![
        Span::raw(first.format("%Y-%m-%d").to_string()),
        Span::raw(last.format("%Y-%m-%d").to_string()),
    ];
    let y_labels = vec![Span::raw("0"), Span::raw(format!("{max_count:.0}"))];

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .x_axis(
            Axis::default()
                .title("Fecha")
                .style(Style::default().fg(Color::Gray))
                .bounds([0.0, span_days])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .title("Noticias")
                .style(Style::default().fg(Color::Gray))
                .bounds([0.0, max_count])
                .labels(y_labels),
        );

    f.render_widget(chart, area);
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn render_volume_barchart(app: &App, f: &mut Frame<'_>, area: Rect) {
    let title = "Toneladas por región";
    let mut by_region: BTreeMap<&str, f64> = BTreeMap::new();
    for zone in &app.filtered_zones {
        let Some(volume) = zone.volume_tonnes else {
            continue;
        };
        let region = zone
            .region
            .as_deref()
            .or(zone.country.as_deref())
            .unwrap_or("Sin región");
        *by_region.entry(region).or_insert(0.0) += volume;
    }

    if by_region.is_empty() {
        no_data(f, area, title);
        return;
    }

    let bars: Vec<Bar<'_>> = by_region
        .iter()
        .map(|(region, volume)| {
            Bar::default()
                .value(volume.round() as u64)
                .label(TextLine::from(*region))
                .style(Style::default().fg(Color::Green))
                .value_style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
        })
        .collect();

    let max_value = by_region
        .values()
        .copied()
        .fold(0.0_f64, f64::max)
        .round() as u64;
    f.render_widget(horizontal_barchart(title, &bars, max_value), area);
}
