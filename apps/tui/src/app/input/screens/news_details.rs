use crate::app::input::helpers::clamp_step;
use crate::app::state::{App, AppScreen};
use crossterm::event::KeyCode;

pub fn handle_news_details_input(app: &mut App, key: KeyCode) {
    let total_rows = app.visible_news.len();

    match key {
        KeyCode::Esc | KeyCode::Backspace => {
            app.screen = AppScreen::Dashboard;
        }
        KeyCode::Char('q') => {
            app.running = false;
        }
        KeyCode::Up | KeyCode::Left => {
            app.selected_news_index = clamp_step(app.selected_news_index, -1, total_rows);
        }
        KeyCode::Down | KeyCode::Right => {
            app.selected_news_index = clamp_step(app.selected_news_index, 1, total_rows);
        }
        _ => {}
    }
}
