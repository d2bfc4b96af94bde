pub mod app;
pub mod components;
pub mod state;
pub mod views;

pub use app::HelpDeskApp;
