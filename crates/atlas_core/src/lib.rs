//! Core data model and table pipeline for the country atlas desktop app.
//!
//! Everything here is UI-agnostic: the normalizer and loader turn a
//! loosely-shaped external JSON document into typed [`Country`] records, and
//! the view module derives the filtered/sorted subset the table displays.

pub mod domain;
pub mod loader;
pub mod normalize;
pub mod view;

pub use domain::{Coordinates, Country, NOT_AVAILABLE};
pub use loader::{load_countries, DataSource, LoadError};
pub use normalize::normalize_country;
pub use view::{
    apply_filters, region_options, sort_countries, FilterConfig, PopulationBucket, SortColumn,
    SortDirection, SortState, TableContext,
};
