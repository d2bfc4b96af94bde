pub mod analytics;
pub mod dashboard;
pub mod knowledge;
pub mod tickets;
