// Export our modules for use in binaries and tests
pub mod config;
pub mod data;
pub mod domain;
pub mod error;

pub use data::models::{NewsRecord, ProductVarietyIndex, ZoneRow};
pub use domain::{FilterCriteria, MonthRange, Selection};
pub use error::DashboardError;
