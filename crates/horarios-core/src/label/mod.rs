//! Page label extraction.
//!
//! Turns the joined text layer of a page into a human-readable label: a
//! professor's name or a class/section code with its description. The
//! extractor is pure and total; `None` means no rule produced a label.

pub mod rules;

use regex::{Regex, RegexBuilder};
use tracing::trace;

use crate::error::{HorariosError, Result};
use crate::models::{Category, ExtractionConfig};

pub use rules::{rules_for, LabelRule};

/// Form of the page text a rule is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextVariant {
    /// Whitespace runs collapsed to single spaces.
    Spaced,
    /// All whitespace removed.
    Loosened,
}

/// A label and the rule that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelMatch {
    pub label: String,
    pub rule: &'static str,
    pub variant: TextVariant,
}

/// Collapse whitespace runs into single spaces and trim.
pub fn normalize(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Remove all whitespace.
pub fn loosen(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Rule-based label extractor.
#[derive(Debug, Clone)]
pub struct LabelExtractor {
    config: ExtractionConfig,
    blacklist: Vec<String>,
    stop_spaced: Option<Regex>,
    stop_loosened: Option<Regex>,
}

impl LabelExtractor {
    /// Create an extractor from configuration.
    ///
    /// Fails only if the stop markers cannot be compiled.
    pub fn new(config: ExtractionConfig) -> Result<Self> {
        let blacklist = config
            .blacklist
            .iter()
            .map(|entry| normalize(entry).to_lowercase())
            .filter(|entry| !entry.is_empty())
            .collect();

        let stop_spaced = compile_stop_markers(&config.stop_markers, normalize)?;
        let stop_loosened = compile_stop_markers(&config.stop_markers, loosen)?;

        Ok(Self {
            config,
            blacklist,
            stop_spaced,
            stop_loosened,
        })
    }

    pub fn config(&self) -> &ExtractionConfig {
        &self.config
    }

    /// Extract a label, or `None` if no rule matches.
    pub fn extract_label(&self, text: &str, category: Category) -> Option<String> {
        self.extract_match(text, category).map(|m| m.label)
    }

    /// Extract a label and report which rule produced it.
    pub fn extract_match(&self, text: &str, category: Category) -> Option<LabelMatch> {
        let spaced = normalize(text);
        if spaced.is_empty() {
            trace!("Empty page text, no label");
            return None;
        }
        let loosened = loosen(&spaced);

        for rule in rules_for(category) {
            let input = match rule.variant {
                TextVariant::Spaced => &spaced,
                TextVariant::Loosened => &loosened,
            };

            if let Some(label) = rule.apply(self, input) {
                trace!("Rule {} matched: {}", rule.name, label);
                return Some(LabelMatch {
                    label,
                    rule: rule.name,
                    variant: rule.variant,
                });
            }
        }

        trace!("No {} rule matched", category);
        None
    }

    /// Whether a candidate contains a blacklisted phrase.
    pub fn is_blacklisted(&self, candidate: &str) -> bool {
        let lowered = candidate.to_lowercase();
        self.blacklist.iter().any(|entry| lowered.contains(entry.as_str()))
    }

    pub(crate) fn stop_markers(&self, variant: TextVariant) -> Option<&Regex> {
        match variant {
            TextVariant::Spaced => self.stop_spaced.as_ref(),
            TextVariant::Loosened => self.stop_loosened.as_ref(),
        }
    }
}

fn compile_stop_markers(markers: &[String], shape: fn(&str) -> String) -> Result<Option<Regex>> {
    let alternatives: Vec<String> = markers
        .iter()
        .map(|m| shape(m))
        .filter(|m| !m.is_empty())
        .map(|m| regex::escape(&m))
        .collect();

    if alternatives.is_empty() {
        return Ok(None);
    }

    RegexBuilder::new(&alternatives.join("|"))
        .case_insensitive(true)
        .build()
        .map(Some)
        .map_err(|e| HorariosError::Config(format!("invalid stop markers: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn extractor() -> LabelExtractor {
        LabelExtractor::new(ExtractionConfig::default()).unwrap()
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("  Professor\n\tAdelino \u{a0} Seibt  "), "Professor Adelino Seibt");
        assert_eq!(normalize(""), "");
        assert_eq!(normalize(" \n\t "), "");
    }

    #[test]
    fn test_normalize_idempotent() {
        let samples = [
            "",
            "   ",
            "a  b",
            "\tINF 11 -\n1º ANO\r\n",
            "Professor\u{2003}Jacó  Seibt",
            "já normalizado",
        ];
        for s in samples {
            let once = normalize(s);
            assert_eq!(normalize(&once), once);
        }
    }

    #[test]
    fn test_loosen() {
        assert_eq!(loosen("INF 11 - 1º ANO\n"), "INF11-1ºANO");
    }

    #[test]
    fn test_professor_example() {
        let label = extractor().extract_label("Professor Adelino Jacó Seibt   turma ...", Category::Professor);
        assert_eq!(label.as_deref(), Some("Professor Adelino Jacó Seibt"));
    }

    #[test]
    fn test_class_examples() {
        let ex = extractor();
        assert_eq!(
            ex.extract_label(
                "INF 11 - 1º ANO Técnico em Informática Integrado ao Ensino Médio",
                Category::Class
            )
            .as_deref(),
            Some("INF 11 - 1º ANO Técnico em Informática")
        );
        assert_eq!(
            ex.extract_label("ENS T12 - 1º sem Téc. Enfermagem [Registro no Sigaa]", Category::Class)
                .as_deref(),
            Some("ENS T12 - 1º sem Téc. Enfermagem")
        );
    }

    #[test]
    fn test_no_match() {
        let ex = extractor();
        let text = "segunda terça quarta 07:30 08:20 sala 12";
        assert_eq!(ex.extract_label(text, Category::Professor), None);
        assert_eq!(ex.extract_label(text, Category::Class), None);
    }

    #[test]
    fn test_blacklist_only_input() {
        let text = "Instituto Federal Campus Santo Ângelo Quadro de Horários aSc Horários";
        assert_eq!(extractor().extract_label(text, Category::Professor), None);
    }

    #[test]
    fn test_full_letterhead_is_skipped() {
        let ex = extractor();
        let letterhead =
            "Ministério da Educação Instituto Federal Farroupilha Campus Santo Ângelo 2024 segunda";
        assert_eq!(ex.extract_label(letterhead, Category::Professor), None);

        let text = format!("{} Maria Helena dos Santos", letterhead);
        let m = ex.extract_match(&text, Category::Professor).unwrap();
        assert_eq!(m.rule, "proper-noun-fallback");
        assert_eq!(m.label, "Maria Helena dos Santos");
    }

    #[test]
    fn test_spaced_name_with_connector_uses_title_rule() {
        let m = extractor()
            .extract_match("Professor Maria da Silva turma 3", Category::Professor)
            .unwrap();
        assert_eq!(m.rule, "professor-title");
        assert_eq!(m.variant, TextVariant::Spaced);
        assert_eq!(m.label, "Professor Maria da Silva");
    }

    #[test]
    fn test_total_on_odd_input() {
        let ex = extractor();
        let long = "Á".repeat(10_000);
        let inputs = ["", "   \n\t", long.as_str(), "[[[]]]--–", "Professor", "INF 11 -"];
        for input in inputs {
            for category in Category::ALL {
                let _ = ex.extract_label(input, category);
            }
        }
    }

    #[test]
    fn test_rule_precedence_and_trace() {
        let ex = extractor();

        let m = ex
            .extract_match("Horário Professor Adelino Seibt", Category::Professor)
            .unwrap();
        assert_eq!(m.rule, "professor-title");
        assert_eq!(m.variant, TextVariant::Spaced);

        let m = ex
            .extract_match("Hor ário Prof essorAdeli no Seibt 2024", Category::Professor)
            .unwrap();
        assert_eq!(m.rule, "professor-title-loose");
        assert_eq!(m.label, "ProfessorAdelinoSeibt");

        let m = ex
            .extract_match("Campus Santo Ângelo 2024 Maria Helena dos Santos", Category::Professor)
            .unwrap();
        assert_eq!(m.rule, "proper-noun-fallback");

        let m = ex.extract_match("I N F 1 1 - 1º ANO", Category::Class).unwrap();
        assert_eq!(m.rule, "class-code-loose");
        assert_eq!(m.label, "INF 11 - 1ºANO");
    }

    #[test]
    fn test_empty_blacklist_entries_ignored() {
        let mut config = ExtractionConfig::default();
        config.blacklist = vec!["".to_string(), "  ".to_string()];
        let ex = LabelExtractor::new(config).unwrap();
        assert!(!ex.is_blacklisted("Maria Helena"));
    }

    #[test]
    fn test_blacklist_is_configurable() {
        let text = "horário 2024 Maria Helena Souza";
        assert_eq!(
            extractor().extract_label(text, Category::Professor).as_deref(),
            Some("Maria Helena Souza")
        );

        let mut config = ExtractionConfig::default();
        config.blacklist.push("Maria Helena".to_string());
        let ex = LabelExtractor::new(config).unwrap();
        assert_eq!(ex.extract_label(text, Category::Professor), None);
    }
}
