//! Configuration structures for label extraction and catalog loading.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::catalog::Category;

/// Main configuration for horarios.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HorariosConfig {
    /// Label extraction configuration.
    pub extraction: ExtractionConfig,

    /// Source documents, one per category.
    pub sources: SourcesConfig,

    /// Catalog building configuration.
    pub catalog: CatalogConfig,
}

/// Label extraction configuration.
///
/// The bounds are deployment-tunable: the timetable exports this was tuned
/// against have used anywhere between 80 and 120 characters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Maximum characters kept from a class description before cleanup.
    pub class_capture_limit: usize,

    /// Maximum display length of a class label before it gets an ellipsis.
    pub max_label_length: usize,

    /// Marker appended to truncated labels.
    pub ellipsis: String,

    /// Characters of page text scanned by the proper-noun fallback.
    pub fallback_window: usize,

    /// Institutional phrases that disqualify a proper-noun candidate.
    /// Compared case-insensitively as substrings.
    pub blacklist: Vec<String>,

    /// Phrases that end a class description (generator signature,
    /// document title). Compared case-insensitively.
    pub stop_markers: Vec<String>,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            class_capture_limit: 100,
            max_label_length: 90,
            ellipsis: "…".to_string(),
            fallback_window: 260,
            blacklist: vec![
                "instituto federal".to_string(),
                "farroupilha".to_string(),
                "santo ângelo".to_string(),
                "ministério da educação".to_string(),
                "campus".to_string(),
                "horário gerado".to_string(),
                "horários gerados".to_string(),
                "asc horários".to_string(),
                "quadro de horários".to_string(),
                "horário do professor".to_string(),
                "horário da turma".to_string(),
            ],
            stop_markers: vec![
                "Horário gerado".to_string(),
                "Horários gerados".to_string(),
                "aSc Horários".to_string(),
                "Quadro de Horários".to_string(),
                "Horário da Turma".to_string(),
            ],
        }
    }
}

/// PDF locations, mapped 1:1 to categories.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourcesConfig {
    /// Document listing one professor per page.
    pub professor: PathBuf,

    /// Document listing one class/section per page.
    pub class: PathBuf,
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            professor: PathBuf::from("./horarios-professores.pdf"),
            class: PathBuf::from("./horarios-turmas.pdf"),
        }
    }
}

impl SourcesConfig {
    /// Path of the document backing a category.
    pub fn path_for(&self, category: Category) -> &PathBuf {
        match category {
            Category::Professor => &self.professor,
            Category::Class => &self.class,
        }
    }
}

/// Catalog building configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Prefix of the label used when extraction finds nothing ("Page 3").
    pub placeholder_prefix: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            placeholder_prefix: "Page".to_string(),
        }
    }
}

impl HorariosConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })?;
        std::fs::write(path, content)
    }
}
