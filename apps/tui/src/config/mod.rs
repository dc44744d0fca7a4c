#[allow(clippy::module_inception)]
mod config;

pub use config::{init_logging, DashboardConfig};
