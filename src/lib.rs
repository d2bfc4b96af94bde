pub mod common;
pub mod config;
pub mod fixtures;
pub mod simulation;
pub mod ui;
