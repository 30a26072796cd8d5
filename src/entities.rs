//! Named-entity extraction interface.
//!
//! The key-info extractor asks an [`EntityExtractor`] for entities of a
//! given label ("DATE" is the only label the crate uses). Real NLP models
//! plug in behind the trait; [`RegexDateExtractor`] is the bundled
//! pattern-based implementation.

use regex::Regex;

/// Named-entity extraction collaborator.
pub trait EntityExtractor: Send + Sync {
    /// Return entities of `label` found in `text`, in document order.
    fn entities(&self, text: &str, label: &str) -> Vec<String>;
}

/// Date extraction from common textual forms.
///
/// Recognizes `12 March 2026` / `March 12, 2026` style dates, ISO
/// `2026-03-12`, and `12/03/2026` numerics.
pub struct RegexDateExtractor {
    patterns: Vec<Regex>,
}

impl RegexDateExtractor {
    /// Create the extractor.
    pub fn new() -> Self {
        const MONTHS: &str = "january|february|march|april|may|june|july|august|september|october|november|december";
        let patterns = vec![
            Regex::new(&format!(r"(?i)\b\d{{1,2}}(?:st|nd|rd|th)?\s+(?:{MONTHS})\s+\d{{4}}\b"))
                .unwrap(),
            Regex::new(&format!(r"(?i)\b(?:{MONTHS})\s+\d{{1,2}}(?:st|nd|rd|th)?,?\s+\d{{4}}\b"))
                .unwrap(),
            Regex::new(r"\b\d{4}-\d{2}-\d{2}\b").unwrap(),
            Regex::new(r"\b\d{1,2}/\d{1,2}/\d{4}\b").unwrap(),
        ];
        Self { patterns }
    }
}

impl Default for RegexDateExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityExtractor for RegexDateExtractor {
    fn entities(&self, text: &str, label: &str) -> Vec<String> {
        if !label.eq_ignore_ascii_case("date") {
            return Vec::new();
        }
        let mut found = Vec::new();
        for pattern in &self.patterns {
            for m in pattern.find_iter(text) {
                let entity = m.as_str().to_string();
                if !found.contains(&entity) {
                    found.push(entity);
                }
            }
        }
        found
    }
}
