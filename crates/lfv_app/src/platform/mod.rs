//! Terminal host for the course page: configuration, effect wiring and rendering.
mod app;
mod config;
mod controller;
mod effects;
mod ui;

pub use app::run_app;
