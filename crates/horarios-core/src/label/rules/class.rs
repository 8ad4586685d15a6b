//! Class/section code rules.

use regex::{Captures, Regex};

use super::patterns::{
    BRACKETED, CLASS_CODE, CLASS_CODE_LOOSE, INTEGRADO_CLAUSE, INTEGRADO_CLAUSE_LOOSE,
};
use crate::label::{normalize, LabelExtractor, TextVariant};

/// Code, optional T marker and number, then a cleaned description.
pub(super) fn class_code(extractor: &LabelExtractor, text: &str) -> Option<String> {
    let caps = CLASS_CODE.captures(text)?;
    Some(assemble(extractor, &caps, TextVariant::Spaced))
}

/// Same structure on text that lost its spaces.
pub(super) fn class_code_loose(extractor: &LabelExtractor, text: &str) -> Option<String> {
    let caps = CLASS_CODE_LOOSE.captures(text)?;
    Some(assemble(extractor, &caps, TextVariant::Loosened))
}

fn assemble(extractor: &LabelExtractor, caps: &Captures<'_>, variant: TextVariant) -> String {
    let code = caps[1].to_uppercase();
    let head = format!("{} {}{}", code, &caps[2], &caps[3]);

    let description = clean_description(extractor, &caps[4], variant);
    let label = if description.is_empty() {
        head
    } else {
        format!("{} - {}", head, description)
    };

    truncate_label(&label, extractor.config().max_label_length, &extractor.config().ellipsis)
}

/// Cut at the first stop marker, bound the length, then drop the
/// "Integrado ..." clause and bracketed annotations.
fn clean_description(extractor: &LabelExtractor, raw: &str, variant: TextVariant) -> String {
    let mut description = raw;
    if let Some(stop) = extractor.stop_markers(variant) {
        if let Some(m) = stop.find(description) {
            description = &description[..m.start()];
        }
    }

    let captured: String = description
        .chars()
        .take(extractor.config().class_capture_limit)
        .collect();

    let integrado: &Regex = match variant {
        TextVariant::Spaced => &INTEGRADO_CLAUSE,
        TextVariant::Loosened => &INTEGRADO_CLAUSE_LOOSE,
    };
    let without_clause = integrado.replace(&captured, "");
    let without_notes = BRACKETED.replace_all(&without_clause, "");

    normalize(&without_notes)
        .trim_end_matches(|c: char| c == '-' || c == '–' || c.is_whitespace())
        .to_string()
}

/// Cut a label to `max_len` characters and append the ellipsis marker.
pub fn truncate_label(label: &str, max_len: usize, ellipsis: &str) -> String {
    if label.chars().count() <= max_len {
        return label.to_string();
    }
    let mut truncated: String = label.chars().take(max_len).collect();
    truncated.push_str(ellipsis);
    truncated
}
