use crate::app::App;
use agro_news_tui::data::stats::{map_points, MapPoint, PointKind};
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::symbols::Marker;
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::canvas::{Canvas, Map, MapResolution, Points};
use ratatui::widgets::{Block, Borders};
use ratatui::Frame;

pub const fn point_color(kind: PointKind) -> Color {
    match kind {
        PointKind::News => Color::Yellow,
        PointKind::Zone => Color::Green,
    }
}

/// Canvas coordinates are (x, y), so longitude goes first.
fn coords_of(points: &[MapPoint], kind: PointKind) -> Vec<(f64, f64)> {
    points
        .iter()
        .filter(|point| point.kind == kind)
        .map(|point| (point.longitude, point.latitude))
        .collect()
}

pub fn render_map(app: &App, f: &mut Frame<'_>, area: Rect) {
    let points = map_points(&app.filtered_news, &app.filtered_zones);
    let news = coords_of(&points, PointKind::News);
    let zones = coords_of(&points, PointKind::Zone);

    let title = TextLine::from(vec![
        Span::raw("Mapa "),
        Span::styled(
            format!("● noticias {} ", news.len()),
            Style::default().fg(point_color(PointKind::News)),
        ),
        Span::styled(
            format!("● zonas {}", zones.len()),
            Style::default().fg(point_color(PointKind::Zone)),
        ),
    ]);

    let canvas = Canvas::default()
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .marker(Marker::Braille)
        .x_bounds([-180.0, 180.0])
        .y_bounds([-90.0, 90.0])
        .paint(|ctx| {
            ctx.draw(&Map {
                resolution: MapResolution::High,
                color: Color::DarkGray,
            });
            ctx.layer();
            ctx.draw(&Points {
                coords: &zones,
                color: point_color(PointKind::Zone),
            });
            ctx.draw(&Points {
                coords: &news,
                color: point_color(PointKind::News),
            });
        });

    f.render_widget(canvas, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canvas_coordinates_put_longitude_first() {
        let points = vec![
            MapPoint {
                kind: PointKind::News,
                latitude: 19.4,
                longitude: -99.1,
                label: "CDMX".to_string(),
            },
            MapPoint {
                kind: PointKind::Zone,
                latitude: 19.7,
                longitude: -101.2,
                label: "Michoacán".to_string(),
            },
        ];

        assert_eq!(coords_of(&points, PointKind::News), vec![(-99.1, 19.4)]);
        assert_eq!(coords_of(&points, PointKind::Zone), vec![(-101.2, 19.7)]);
    }
}
