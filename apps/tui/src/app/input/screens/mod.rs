use crate::app::state::{App, AppScreen};
use crossterm::event::KeyCode;

mod dashboard;
mod help;
mod news_details;

pub fn dispatch_input(app: &mut App, key: KeyCode) {
    // Search input swallows every key, including the help toggle
    if app.search_active {
        dashboard::handle_search_input(app, key);
        return;
    }

    if help::handle_help_toggle(app, key) {
        return;
    }

    match app.screen {
        AppScreen::Dashboard => dashboard::handle_dashboard_input(app, key),
        AppScreen::NewsDetails => news_details::handle_news_details_input(app, key),
    }
}
