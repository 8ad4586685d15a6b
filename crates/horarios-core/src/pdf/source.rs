//! Category documents read from the local filesystem.

use std::path::{Path, PathBuf};

use tracing::debug;

use super::{DocumentSource, PdfExtractor};
use crate::error::{PdfError, Result};
use crate::models::{Category, SourcesConfig};

/// Opens the configured PDF of each category from disk.
#[derive(Debug, Clone)]
pub struct FileSource {
    sources: SourcesConfig,
}

impl FileSource {
    pub fn new(sources: SourcesConfig) -> Self {
        Self { sources }
    }

    /// Source that serves one file for every category.
    pub fn single(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self {
            sources: SourcesConfig {
                professor: path.clone(),
                class: path,
            },
        }
    }

    pub fn path_for(&self, category: Category) -> &Path {
        self.sources.path_for(category)
    }
}

impl DocumentSource for FileSource {
    type Document = PdfExtractor;

    async fn open(&self, category: Category) -> Result<PdfExtractor> {
        let path = self.path_for(category);
        debug!("Opening {} document {}", category, path.display());

        let data = tokio::fs::read(path)
            .await
            .map_err(|e| PdfError::Open(format!("{}: {}", path.display(), e)))?;

        let document = PdfExtractor::load(&data).map_err(|e| match e {
            PdfError::Parse(msg) => PdfError::Open(format!("{}: {}", path.display(), msg)),
            PdfError::NoPages => PdfError::Open(format!("{}: no pages", path.display())),
            other => other,
        })?;
        Ok(document)
    }
}
