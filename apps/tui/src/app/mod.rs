// App module for agro_news_tui
// Handles selector state and keyboard input

pub mod input;
pub mod state;

pub use input::handle_input;
pub use state::{App, ChartTab, FilterField};
