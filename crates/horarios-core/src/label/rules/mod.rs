//! Ordered label rules, one table per category.
//!
//! Each rule names the text variant it reads and a transform that either
//! produces a label or declines. The first rule that produces a label wins.

pub mod class;
pub mod patterns;
pub mod professor;

use super::{LabelExtractor, TextVariant};
use crate::models::Category;

/// One entry of a category's decision table.
pub struct LabelRule {
    /// Stable rule name, reported in diagnostics.
    pub name: &'static str,
    /// Text variant the rule is matched against.
    pub variant: TextVariant,
    apply: fn(&LabelExtractor, &str) -> Option<String>,
}

impl LabelRule {
    const fn new(
        name: &'static str,
        variant: TextVariant,
        apply: fn(&LabelExtractor, &str) -> Option<String>,
    ) -> Self {
        Self { name, variant, apply }
    }

    /// Run the rule against text already in its variant form.
    pub fn apply(&self, extractor: &LabelExtractor, text: &str) -> Option<String> {
        (self.apply)(extractor, text)
    }
}

pub static PROFESSOR_RULES: [LabelRule; 3] = [
    LabelRule::new("professor-title", TextVariant::Spaced, professor::titled_name),
    LabelRule::new("professor-title-loose", TextVariant::Loosened, professor::titled_name_loose),
    LabelRule::new("proper-noun-fallback", TextVariant::Spaced, professor::proper_noun_fallback),
];

pub static CLASS_RULES: [LabelRule; 2] = [
    LabelRule::new("class-code", TextVariant::Spaced, class::class_code),
    LabelRule::new("class-code-loose", TextVariant::Loosened, class::class_code_loose),
];

/// Decision table for a category.
pub fn rules_for(category: Category) -> &'static [LabelRule] {
    match category {
        Category::Professor => &PROFESSOR_RULES,
        Category::Class => &CLASS_RULES,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_order() {
        let names: Vec<&str> = rules_for(Category::Professor).iter().map(|r| r.name).collect();
        assert_eq!(
            names,
            vec!["professor-title", "professor-title-loose", "proper-noun-fallback"]
        );

        let names: Vec<&str> = rules_for(Category::Class).iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["class-code", "class-code-loose"]);
    }

    #[test]
    fn test_loose_rules_read_loosened_text() {
        for rule in PROFESSOR_RULES.iter().chain(CLASS_RULES.iter()) {
            let expected = if rule.name.ends_with("-loose") {
                TextVariant::Loosened
            } else {
                TextVariant::Spaced
            };
            assert_eq!(rule.variant, expected, "rule {}", rule.name);
        }
    }
}
