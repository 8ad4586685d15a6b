//! PDF text extraction using lopdf and pdf-extract.

use lopdf::Document;
use tracing::{debug, trace};

use super::{PdfDocument, TextRun};
use crate::error::{PdfError, Result};

/// In-memory PDF with per-page text access.
#[derive(Debug)]
pub struct PdfExtractor {
    document: Document,
    page_count: u32,
    /// Page texts from pdf-extract, when it could read the whole document.
    page_texts: Option<Vec<String>>,
}

impl PdfExtractor {
    /// Parse a PDF from bytes.
    pub fn load(data: &[u8]) -> std::result::Result<Self, PdfError> {
        let mut document = Document::load_mem(data).map_err(|e| PdfError::Parse(e.to_string()))?;

        // Handle PDFs with empty password encryption
        let raw_data = if document.is_encrypted() {
            if document.decrypt("").is_err() {
                return Err(PdfError::Encrypted);
            }
            debug!("Decrypted PDF with empty password");

            let mut decrypted = Vec::new();
            document
                .save_to(&mut decrypted)
                .map_err(|e| PdfError::Parse(format!("Failed to save decrypted PDF: {}", e)))?;
            decrypted
        } else {
            data.to_vec()
        };

        let page_count = document.get_pages().len() as u32;
        if page_count == 0 {
            return Err(PdfError::NoPages);
        }

        let page_texts = match pdf_extract::extract_text_from_mem_by_pages(&raw_data) {
            Ok(texts) if texts.len() == page_count as usize => Some(texts),
            Ok(texts) => {
                debug!(
                    "pdf-extract returned {} pages for a {} page document, using lopdf",
                    texts.len(),
                    page_count
                );
                None
            }
            Err(e) => {
                debug!("pdf-extract failed ({}), using lopdf", e);
                None
            }
        };

        debug!("Loaded PDF with {} pages", page_count);
        Ok(Self {
            document,
            page_count,
            page_texts,
        })
    }

    fn raw_page_text(&self, page: u32) -> std::result::Result<String, PdfError> {
        if let Some(text) = self
            .page_texts
            .as_ref()
            .and_then(|texts| texts.get((page - 1) as usize))
        {
            return Ok(text.clone());
        }

        self.document
            .extract_text(&[page])
            .map_err(|e| PdfError::TextExtraction(e.to_string()))
    }
}

impl PdfDocument for PdfExtractor {
    fn page_count(&self) -> u32 {
        self.page_count
    }

    async fn page_text(&self, page: u32) -> Result<Vec<TextRun>> {
        if page == 0 || page > self.page_count {
            return Err(PdfError::InvalidPage(page).into());
        }

        let text = self.raw_page_text(page)?;
        let runs: Vec<TextRun> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(TextRun::new)
            .collect();

        trace!("Page {}: {} text runs", page, runs.len());
        Ok(runs)
    }
}
