//! Dictionary lookup interface and tokenization.
//!
//! Spell checking is an injected collaborator: the scorer hands a token
//! list to a [`Dictionary`] and receives back the tokens it does not
//! know. [`WordListDictionary`] is the bundled set-backed implementation.

use std::collections::HashSet;

use regex::Regex;

/// Dictionary collaborator: reports which tokens it does not know.
pub trait Dictionary: Send + Sync {
    /// Return the subset of `tokens` not found in the dictionary.
    fn unknown_words(&self, tokens: &[String]) -> HashSet<String>;
}

/// A dictionary backed by a word set.
#[derive(Debug, Clone, Default)]
pub struct WordListDictionary {
    words: HashSet<String>,
}

impl WordListDictionary {
    /// Build from an iterator of known words.
    pub fn new<S: Into<String>>(words: impl IntoIterator<Item = S>) -> Self {
        Self {
            words: words.into_iter().map(|w| w.into().to_lowercase()).collect(),
        }
    }

    /// Build from newline-separated word list content.
    pub fn from_word_list(content: &str) -> Self {
        Self::new(content.lines().map(str::trim).filter(|l| !l.is_empty()))
    }

    /// Number of known words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the dictionary is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Dictionary for WordListDictionary {
    fn unknown_words(&self, tokens: &[String]) -> HashSet<String> {
        tokens
            .iter()
            .filter(|t| !self.words.contains(t.as_str()))
            .cloned()
            .collect()
    }
}

/// A dictionary that accepts every token.
///
/// Default collaborator when no word list is supplied, so spelling never
/// penalizes a score by accident.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAllDictionary;

impl Dictionary for AcceptAllDictionary {
    fn unknown_words(&self, _tokens: &[String]) -> HashSet<String> {
        HashSet::new()
    }
}

/// Tokenize text into lowercase words on `\b\w+\b` boundaries, first
/// occurrence order, deduplicated.
pub fn tokenize(text: &str) -> Vec<String> {
    let re = Regex::new(r"\b\w+\b").unwrap();
    let mut seen = HashSet::new();
    re.find_iter(&text.to_lowercase())
        .map(|m| m.as_str().to_string())
        .filter(|t| seen.insert(t.clone()))
        .collect()
}
