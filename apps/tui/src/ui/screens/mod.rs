pub mod dashboard;
pub mod news_details;
