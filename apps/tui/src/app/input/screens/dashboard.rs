use crate::app::input::helpers::{clamp_step, wrap_decrement, wrap_increment};
use crate::app::state::{App, AppScreen, ChartTab};
use crossterm::event::KeyCode;

const PAGE_ROWS: isize = 5;

pub fn handle_dashboard_input(app: &mut App, key: KeyCode) {
    let total_rows = app.visible_news.len();

    match key {
        KeyCode::Char('q') => {
            app.running = false;
        }
        KeyCode::Esc => {
            if app.search_query.is_empty() {
                app.status_message.clear();
            } else {
                app.clear_search();
            }
        }
        KeyCode::Tab => app.focus_next(),
        KeyCode::BackTab => app.focus_prev(),
        KeyCode::Left => app.cycle_focused(false),
        KeyCode::Right => app.cycle_focused(true),
        KeyCode::Up => {
            app.selected_news_index = clamp_step(app.selected_news_index, -1, total_rows);
        }
        KeyCode::Down => {
            app.selected_news_index = clamp_step(app.selected_news_index, 1, total_rows);
        }
        KeyCode::PageUp => {
            app.selected_news_index = clamp_step(app.selected_news_index, -PAGE_ROWS, total_rows);
        }
        KeyCode::PageDown => {
            app.selected_news_index = clamp_step(app.selected_news_index, PAGE_ROWS, total_rows);
        }
        KeyCode::Home => {
            app.selected_news_index = 0;
        }
        KeyCode::End => {
            app.selected_news_index = total_rows.saturating_sub(1);
        }
        KeyCode::Enter => {
            if app.selected_news().is_some() {
                app.screen = AppScreen::NewsDetails;
            }
        }
        KeyCode::Char('/') => {
            app.search_active = true;
        }
        KeyCode::Char('r') => app.reset_filters(),
        KeyCode::Char('c') => {
            app.chart_tab_index = wrap_increment(app.chart_tab_index, ChartTab::ALL.len());
        }
        KeyCode::Char('C') => {
            app.chart_tab_index = wrap_decrement(app.chart_tab_index, ChartTab::ALL.len());
        }
        KeyCode::Char(ch @ '1'..='4') => {
            app.chart_tab_index = (ch as usize) - ('1' as usize);
        }
        _ => {}
    }
}

pub fn handle_search_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Esc => app.clear_search(),
        KeyCode::Enter => {
            app.search_active = false;
        }
        KeyCode::Backspace => {
            app.search_query.pop();
            app.apply_search_filter();
        }
        KeyCode::Char(ch) => {
            app.search_query.push(ch);
            app.apply_search_filter();
        }
        _ => {}
    }
}
