//! Builds a sorted catalog from a document, one page at a time.

use tracing::{debug, warn};

use crate::error::{HorariosError, PdfError, Result};
use crate::label::LabelExtractor;
use crate::models::{Catalog, Category, HorariosConfig, LabelEntry};
use crate::pdf::{join_runs, PdfDocument};

/// Labels every page of a document and sorts the result.
#[derive(Debug, Clone)]
pub struct CatalogBuilder {
    extractor: LabelExtractor,
    placeholder_prefix: String,
}

impl CatalogBuilder {
    /// Create a builder with the default "Page" placeholder.
    pub fn new(extractor: LabelExtractor) -> Self {
        Self {
            extractor,
            placeholder_prefix: "Page".to_string(),
        }
    }

    /// Create a builder from the full configuration.
    pub fn from_config(config: &HorariosConfig) -> Result<Self> {
        let extractor = LabelExtractor::new(config.extraction.clone())?;
        Ok(Self::new(extractor).with_placeholder_prefix(&config.catalog.placeholder_prefix))
    }

    /// Set the placeholder prefix.
    pub fn with_placeholder_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.placeholder_prefix = prefix.into();
        self
    }

    pub fn extractor(&self) -> &LabelExtractor {
        &self.extractor
    }

    /// Label used for a page without an extracted label.
    pub fn placeholder(&self, page: u32) -> String {
        format!("{} {}", self.placeholder_prefix, page)
    }

    /// Build the catalog of a document.
    pub async fn build<D: PdfDocument>(&self, document: &D, category: Category) -> Result<Catalog> {
        self.build_with_progress(document, category, |_, _| {}).await
    }

    /// Build the catalog, reporting `(pages_done, page_count)` after each page.
    ///
    /// Pages are fetched in order, one at a time. A page whose text cannot be
    /// decoded gets the placeholder; any other document error aborts the build.
    pub async fn build_with_progress<D, F>(
        &self,
        document: &D,
        category: Category,
        mut progress: F,
    ) -> Result<Catalog>
    where
        D: PdfDocument,
        F: FnMut(u32, u32),
    {
        let page_count = document.page_count();
        let mut entries = Vec::with_capacity(page_count as usize);
        let mut misses = 0;

        for page in 1..=page_count {
            let text = match document.page_text(page).await {
                Ok(runs) => join_runs(&runs),
                Err(HorariosError::Pdf(PdfError::TextExtraction(reason))) => {
                    warn!("Page {} has no readable text: {}", page, reason);
                    String::new()
                }
                Err(e) => return Err(e),
            };

            let label = match self.extractor.extract_label(&text, category) {
                Some(label) => label,
                None => {
                    misses += 1;
                    self.placeholder(page)
                }
            };
            entries.push(LabelEntry::new(page, label));
            progress(page, page_count);
        }

        debug!(
            "Built {} catalog: {} pages, {} without label",
            category, page_count, misses
        );

        Ok(Catalog::new(category, entries))
    }
}
