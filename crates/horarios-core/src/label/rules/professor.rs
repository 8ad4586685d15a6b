//! Professor name rules.

use tracing::trace;

use super::patterns::{PROFESSOR_NAME, PROFESSOR_NAME_LOOSE, PROPER_NOUN_RUN};
use crate::label::{normalize, LabelExtractor};

/// "Professor(a) / Prof." followed by a capitalized name.
pub(super) fn titled_name(_extractor: &LabelExtractor, text: &str) -> Option<String> {
    let caps = PROFESSOR_NAME.captures(text)?;
    Some(format!("Professor {}", normalize(&caps[1])))
}

/// Title word glued to the name. Word breaks are lost, so the run is
/// returned as found.
pub(super) fn titled_name_loose(_extractor: &LabelExtractor, text: &str) -> Option<String> {
    PROFESSOR_NAME_LOOSE
        .find(text)
        .map(|m| normalize(m.as_str()))
}

/// First capitalized run near the top of the page that is not institutional
/// letterhead.
pub(super) fn proper_noun_fallback(extractor: &LabelExtractor, text: &str) -> Option<String> {
    let window: String = text.chars().take(extractor.config().fallback_window).collect();

    PROPER_NOUN_RUN
        .find_iter(&window)
        .map(|m| m.as_str())
        .find(|candidate| {
            let blacklisted = extractor.is_blacklisted(candidate);
            if blacklisted {
                trace!("Rejected blacklisted candidate: {}", candidate);
            }
            !blacklisted
        })
        .map(normalize)
}
