//! Core library for labeling timetable PDF pages.
//!
//! This crate provides:
//! - Label extraction from a page's text layer (professor names, class codes)
//! - Catalog building: one label per page, sorted with collation rules
//! - A load session that keeps only the newest catalog across reloads
//! - PDF text access through lopdf and pdf-extract (feature `native`)

pub mod catalog;
pub mod collation;
pub mod error;
pub mod label;
pub mod models;
pub mod pdf;

pub use catalog::{CatalogBuilder, CatalogSession, LoadOutcome, LoadTicket};
pub use error::{HorariosError, PdfError, Result};
pub use label::{loosen, normalize, LabelExtractor, LabelMatch, TextVariant};
pub use models::{Catalog, Category, HorariosConfig, LabelEntry};
pub use pdf::{join_runs, DocumentSource, PdfDocument, TextRun};
#[cfg(feature = "native")]
pub use pdf::{FileSource, PdfExtractor};
