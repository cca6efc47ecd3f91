//! UI layer for the desktop app: app shell and row view-models.

pub mod app;
pub mod rows;

pub use app::CountryTableApp;
