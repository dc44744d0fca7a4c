use crate::app::{App, FilterField};
use crate::ui::widgets::charts::{render_chart_panel, render_chart_tabs};
use crate::ui::widgets::tables::render_news_table;
use agro_news_tui::data::stats::{mean_sentiment, total_volume};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

pub fn render_dashboard(app: &App, f: &mut Frame<'_>) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(10),   // Content
            Constraint::Length(3), // Status
            Constraint::Length(1), // Shortcuts
        ])
        .split(f.area());

    render_title_section(app, f, layout[0]);
    render_content_section(app, f, layout[1]);
    render_status_section(app, f, layout[2]);
    render_shortcuts(f, layout[3]);
}

fn render_title_section(app: &App, f: &mut Frame<'_>, area: Rect) {
    let title = TextLine::from(vec![
        Span::styled(
            "Noticias agrícolas",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(
                "  {} noticias · {} zonas · {} productos",
                app.dataset.news.len(),
                app.dataset.zones.len(),
                app.dataset.index.len()
            ),
            Style::default().fg(Color::Gray),
        ),
    ]);

    let paragraph = Paragraph::new(title)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn render_content_section(app: &App, f: &mut Frame<'_>, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(34), Constraint::Min(40)])
        .split(area);

    let sidebar = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(6), Constraint::Min(6)])
        .split(columns[0]);

    render_filters(app, f, sidebar[0]);
    render_summary(app, f, sidebar[1]);

    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(columns[1]);

    render_news_section(app, f, main[0]);

    let charts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(5)])
        .split(main[1]);

    render_chart_tabs(app, f, charts[0]);
    render_chart_panel(app, f, charts[1]);
}

fn render_filters(app: &App, f: &mut Frame<'_>, area: Rect) {
    let lines: Vec<TextLine<'_>> = FilterField::ALL
        .iter()
        .map(|field| {
            let focused = *field == app.focus;
            let marker = if focused { "▶ " } else { "  " };
            let value_style = if focused {
                Style::default()
                    .fg(Color::Rgb(0, 0, 238))
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };

            TextLine::from(vec![
                Span::styled(marker, Style::default().fg(Color::Yellow)),
                Span::styled(
                    format!("{:<9}", field.label()),
                    Style::default().fg(Color::Gray),
                ),
                Span::styled(format!("◀ {} ▶", app.option_label(*field)), value_style),
            ])
        })
        .collect();

    let paragraph = Paragraph::new(Text::from(lines)).block(
        Block::default()
            .title("Filtros")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(paragraph, area);
}

fn render_summary(app: &App, f: &mut Frame<'_>, area: Rect) {
    let sentiment = mean_sentiment(&app.filtered_news)
        .map_or_else(|| "n/d".to_string(), |value| format!("{value:+.2}"));
    let volume = total_volume(&app.filtered_zones)
        .map_or_else(|| "n/d".to_string(), |value| format!("{value:.0} t"));

    let lines = vec![
        TextLine::from(format!(
            "Noticias: {} de {}",
            app.filtered_news.len(),
            app.dataset.news.len()
        )),
        TextLine::from(format!(
            "Zonas: {} de {}",
            app.filtered_zones.len(),
            app.dataset.zones.len()
        )),
        TextLine::from(format!("Sentimiento medio: {sentiment}")),
        TextLine::from(format!("Volumen estimado: {volume}")),
        TextLine::from(""),
        TextLine::from(Span::styled(
            "Meses",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        TextLine::from(
            app.criteria
                .months
                .map_or_else(|| "Todos".to_string(), |range| range.label()),
        ),
    ];

    let paragraph = Paragraph::new(Text::from(lines))
        .block(
            Block::default()
                .title("Resumen")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

fn render_news_section(app: &App, f: &mut Frame<'_>, area: Rect) {
    if !app.search_active && app.search_query.is_empty() {
        render_news_table(app, f, area);
        return;
    }

    let split = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(area);

    let cursor = if app.search_active { "_" } else { "" };
    let search = Paragraph::new(TextLine::from(vec![
        Span::styled("/ ", Style::default().fg(Color::Yellow)),
        Span::raw(format!("{}{cursor}", app.search_query)),
    ]))
    .block(
        Block::default()
            .title("Buscar")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(if app.search_active {
                Color::Yellow
            } else {
                Color::Gray
            })),
    );

    f.render_widget(search, split[0]);
    render_news_table(app, f, split[1]);
}

fn render_status_section(app: &App, f: &mut Frame<'_>, area: Rect) {
    let status_block = Block::default()
        .title(" Estado ")
        .title_style(Style::default().fg(Color::Yellow))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let status_text = if app.status_message.is_empty() {
        Text::from(Span::styled(
            if app.criteria.is_unfiltered() {
                "Sin filtros"
            } else {
                "Filtros activos"
            },
            Style::default().fg(Color::Gray),
        ))
    } else {
        Text::from(Span::styled(
            &app.status_message,
            Style::default().fg(Color::Green),
        ))
    };

    let status_paragraph = Paragraph::new(status_text)
        .block(status_block)
        .wrap(Wrap { trim: true });
    f.render_widget(status_paragraph, area);
}

fn render_shortcuts(f: &mut Frame<'_>, area: Rect) {
    let key = |text: &'static str| {
        Span::styled(
            text,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    };
    let label = |text: &'static str| Span::styled(text, Style::default().fg(Color::Gray));

    let shortcuts = TextLine::from(vec![
        key("?"),
        label(": Ayuda | "),
        key("Tab"),
        label(": Selector | "),
        key("←/→"),
        label(": Valor | "),
        key("/"),
        label(": Buscar | "),
        key("c"),
        label(": Gráfico | "),
        key("r"),
        label(": Restablecer | "),
        key("q"),
        label(": Salir"),
    ]);

    let paragraph = Paragraph::new(shortcuts).alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}
