// Data module for agro_news_tui
// Flattens the raw JSON documents into tables and filters them

pub mod fields;
pub mod flatten;
pub mod index;
pub mod loader;
pub mod models;
pub mod months;
pub mod queries;
pub mod stats;
pub mod varieties;

pub use flatten::{flatten_news, flatten_zones};
pub use index::build_index;
pub use loader::{load_documents, Dataset};
pub use months::{months_in_range, parse_news_date, ranges_overlap};
pub use queries::{filter_news, filter_zones};
pub use varieties::split_varieties;
