//! PDF access module.
//!
//! The catalog builder only needs page counts and per-page text runs, so
//! PDF backends are reached through the narrow traits below.

#[cfg(feature = "native")]
mod extractor;
#[cfg(feature = "native")]
mod source;

#[cfg(feature = "native")]
pub use extractor::PdfExtractor;
#[cfg(feature = "native")]
pub use source::FileSource;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::Category;

/// One text fragment as reported by the PDF backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextRun {
    pub text: String,
}

impl TextRun {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Join a page's text runs into the page text fed to the extractor.
pub fn join_runs(runs: &[TextRun]) -> String {
    runs.iter()
        .map(|run| run.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// An opened document.
#[allow(async_fn_in_trait)]
pub trait PdfDocument {
    /// Number of pages in the document.
    fn page_count(&self) -> u32;

    /// Text runs of a page (1-indexed), in source order.
    ///
    /// Fails with `PdfError::InvalidPage` when `page` is out of range.
    async fn page_text(&self, page: u32) -> Result<Vec<TextRun>>;
}

/// Opens the document backing a category.
#[allow(async_fn_in_trait)]
pub trait DocumentSource {
    type Document: PdfDocument;

    async fn open(&self, category: Category) -> Result<Self::Document>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_runs() {
        let runs = vec![
            TextRun::new("Professor"),
            TextRun::new("Adelino"),
            TextRun::new("Seibt"),
        ];
        assert_eq!(join_runs(&runs), "Professor Adelino Seibt");
        assert_eq!(join_runs(&[]), "");
    }
}
