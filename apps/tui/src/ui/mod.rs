// UI module for the agro news dashboard
// Handles all UI rendering functions

pub mod screens;
pub mod widgets;

use crate::app::state::AppScreen;
use crate::app::App;
use ratatui::Frame;

pub fn ui(app: &App, f: &mut Frame<'_>) {
    match app.screen {
        AppScreen::Dashboard => screens::dashboard::render_dashboard(app, f),
        AppScreen::NewsDetails => screens::news_details::render_news_details(app, f),
    }

    if app.show_help {
        widgets::popup::render_help_popup(f);
    }
}
