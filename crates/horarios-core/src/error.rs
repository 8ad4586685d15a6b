//! Error types for the horarios-core library.

use thiserror::Error;

/// Main error type for the horarios library.
#[derive(Error, Debug)]
pub enum HorariosError {
    /// PDF collaborator error (open, page fetch).
    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to PDF access.
#[derive(Error, Debug)]
pub enum PdfError {
    /// The document could not be opened (missing file, unreadable stream).
    #[error("document unreadable: {0}")]
    Open(String),

    /// Failed to parse the PDF structure.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// Failed to extract text from a page.
    #[error("failed to extract text: {0}")]
    TextExtraction(String),

    /// The PDF is encrypted and cannot be processed.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,

    /// Invalid page number requested.
    #[error("invalid page number: {0}")]
    InvalidPage(u32),
}

/// Result type for the horarios library.
pub type Result<T> = std::result::Result<T, HorariosError>;
