mod app;
mod config;
mod ui;

pub use app::run_app;
