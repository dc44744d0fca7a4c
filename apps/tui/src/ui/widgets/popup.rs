use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

const KEY_BINDINGS: [(&str, &str); 13] = [
    ("Tab / Shift+Tab", "Cambiar de selector"),
    ("←/→", "Cambiar el valor del selector"),
    ("↑/↓", "Moverse por las noticias"),
    ("PgUp/PgDn", "Saltar 5 filas"),
    ("Home/End", "Primera / última noticia"),
    ("Enter", "Ver detalle de la noticia"),
    ("/", "Buscar en títulos y resúmenes"),
    ("1-4", "Elegir gráfico"),
    ("c / C", "Siguiente / anterior gráfico"),
    ("r", "Restablecer filtros"),
    ("Esc", "Limpiar búsqueda o volver"),
    ("F1 / ?", "Mostrar u ocultar esta ayuda"),
    ("q", "Salir"),
];

pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

pub fn render_help_popup(f: &mut Frame<'_>) {
    let area = centered_rect(60, 70, f.area());

    let lines: Vec<TextLine<'_>> = KEY_BINDINGS
        .iter()
        .map(|(keys, action)| {
            TextLine::from(vec![
                Span::styled(
                    format!("{keys:<16}"),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(*action),
            ])
        })
        .collect();

    let paragraph = Paragraph::new(Text::from(lines))
        .block(
            Block::default()
                .title(" Ayuda ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, area);
    f.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_stays_inside_area() {
        let area = Rect::new(0, 0, 100, 50);
        let popup = centered_rect(60, 70, area);

        assert!(popup.x >= area.x && popup.right() <= area.right());
        assert!(popup.y >= area.y && popup.bottom() <= area.bottom());
        assert_eq!(popup.width, 60);
    }
}
