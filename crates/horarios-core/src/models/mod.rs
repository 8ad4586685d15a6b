//! Data models shared by the extractor, the catalog builder and the front ends.

pub mod catalog;
pub mod config;

pub use catalog::{Catalog, Category, LabelEntry};
pub use config::{CatalogConfig, ExtractionConfig, HorariosConfig, SourcesConfig};
