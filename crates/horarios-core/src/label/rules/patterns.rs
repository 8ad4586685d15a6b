//! Regex patterns for page label extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Title word and a spaced, capitalized name (2-6 tokens, with connectors)
    pub static ref PROFESSOR_NAME: Regex = Regex::new(
        r"\b(?:Professora|Professor|Prof\.?)\s+(\p{Lu}[\p{L}\p{M}'’´`\-]*(?: (?:(?:de|da|do|dos|das|e) )?\p{Lu}[\p{L}\p{M}'’´`\-]*){1,5})"
    ).unwrap();

    // Same, for text without spaces: tokens split on capitals
    pub static ref PROFESSOR_NAME_LOOSE: Regex = Regex::new(
        r"(?:Professora|Professor|Prof\.?)(?:\p{Lu}[\p{Ll}\p{M}'’´`\-]*){2,6}"
    ).unwrap();

    // Proper-noun runs, 2-6 capitalized tokens with Portuguese connectors
    pub static ref PROPER_NOUN_RUN: Regex = Regex::new(
        r"\b\p{Lu}[\p{L}\p{M}'’\-]*(?: (?:(?:de|da|do|dos|das|e) )?\p{Lu}[\p{L}\p{M}'’\-]*){1,5}"
    ).unwrap();

    // Class code (INF 11, ENS T12), separator and description
    pub static ref CLASS_CODE: Regex = Regex::new(
        r"\b((?i:[a-z]{2,4})) ?(T?)(\d{1,2})\s*[-–]\s*(.+)"
    ).unwrap();

    // Same, for text without spaces (INF11-1ºANO...)
    pub static ref CLASS_CODE_LOOSE: Regex = Regex::new(
        r"([A-Z]{2,4})(T?)(\d{1,2})[-–](.+)"
    ).unwrap();

    // Trailing "Integrado ao Ensino Médio" style clause
    pub static ref INTEGRADO_CLAUSE: Regex = Regex::new(
        r"(?i)\bIntegrado.*"
    ).unwrap();

    pub static ref INTEGRADO_CLAUSE_LOOSE: Regex = Regex::new(
        r"(?i)Integrado.*"
    ).unwrap();

    // Bracketed annotation, possibly cut open by truncation
    pub static ref BRACKETED: Regex = Regex::new(
        r"\[[^\]]*(?:\]|$)"
    ).unwrap();
}
