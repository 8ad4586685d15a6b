//! Category, label entries and the sorted catalog.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::collation::CollationKey;
use crate::error::HorariosError;

/// Which extraction ruleset applies to a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// One professor per page ("professores").
    Professor,
    /// One class/section per page ("turmas").
    Class,
}

impl Category {
    /// All categories, in selector order.
    pub const ALL: [Category; 2] = [Category::Professor, Category::Class];

    /// Canonical tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Professor => "professor",
            Category::Class => "class",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = HorariosError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "prof" | "professor" | "professores" => Ok(Category::Professor),
            "turma" | "turmas" | "class" => Ok(Category::Class),
            other => Err(HorariosError::Config(format!("unknown category: {}", other))),
        }
    }
}

/// One page of a document and the label shown for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelEntry {
    /// Page number (1-indexed).
    pub page_number: u32,
    /// Extracted label, or the placeholder when extraction found nothing.
    pub label: String,
}

impl LabelEntry {
    pub fn new(page_number: u32, label: impl Into<String>) -> Self {
        Self {
            page_number,
            label: label.into(),
        }
    }
}

/// Label entries of a whole document, sorted by label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    category: Category,
    entries: Vec<LabelEntry>,
}

impl Catalog {
    /// Build a catalog, sorting the entries with collation rules.
    ///
    /// The sort is stable, so entries with equal labels keep their input order.
    pub fn new(category: Category, mut entries: Vec<LabelEntry>) -> Self {
        entries.sort_by_cached_key(|entry| CollationKey::new(&entry.label));
        Self { category, entries }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn entries(&self) -> &[LabelEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &LabelEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry for a given page number.
    pub fn find_page(&self, page_number: u32) -> Option<&LabelEntry> {
        self.entries.iter().find(|e| e.page_number == page_number)
    }

    pub fn into_entries(self) -> Vec<LabelEntry> {
        self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_category_tags() {
        assert_eq!("prof".parse::<Category>().unwrap(), Category::Professor);
        assert_eq!("Professores".parse::<Category>().unwrap(), Category::Professor);
        assert_eq!("turma".parse::<Category>().unwrap(), Category::Class);
        assert_eq!(" turmas ".parse::<Category>().unwrap(), Category::Class);
        assert!("alunos".parse::<Category>().is_err());
    }

    #[test]
    fn test_category_serde() {
        assert_eq!(serde_json::to_string(&Category::Class).unwrap(), "\"class\"");
        let parsed: Category = serde_json::from_str("\"professor\"").unwrap();
        assert_eq!(parsed, Category::Professor);
    }

    #[test]
    fn test_catalog_sorted_by_label() {
        let catalog = Catalog::new(
            Category::Professor,
            vec![
                LabelEntry::new(1, "Professor Zuleide Paz"),
                LabelEntry::new(2, "Professor Álvaro Dias"),
                LabelEntry::new(3, "Page 3"),
            ],
        );

        let labels: Vec<&str> = catalog.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["Page 3", "Professor Álvaro Dias", "Professor Zuleide Paz"]
        );
        assert_eq!(catalog.find_page(2).unwrap().label, "Professor Álvaro Dias");
        assert!(catalog.find_page(9).is_none());
    }

    #[test]
    fn test_equal_labels_keep_input_order() {
        let catalog = Catalog::new(
            Category::Class,
            vec![
                LabelEntry::new(4, "INF 11 - 1º ANO"),
                LabelEntry::new(2, "INF 11 - 1º ANO"),
            ],
        );
        let pages: Vec<u32> = catalog.iter().map(|e| e.page_number).collect();
        assert_eq!(pages, vec![4, 2]);
    }
}
