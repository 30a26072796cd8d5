//! Expectation extraction from section-tagged runs.

use std::collections::HashSet;

use regex::Regex;

use crate::config::{EvaluationConfig, KeywordMatchMode};
use crate::error::{Error, Result};
use crate::extract::TaggedRun;
use crate::model::Expectation;

/// Extract unique expectations from tagged runs.
///
/// A non-heading, non-empty run becomes an expectation iff its text
/// matches at least one catalog keyword under the configured mode.
/// Duplicate texts (case-insensitive) are emitted once, in encounter
/// order.
pub fn extract_expectations(
    tagged: &[TaggedRun],
    config: &EvaluationConfig,
) -> Result<Vec<Expectation>> {
    let matcher = KeywordMatcher::compile(&config.expectation_keywords, config.match_mode)?;

    let mut seen: HashSet<String> = HashSet::new();
    let mut expectations = Vec::new();

    for entry in tagged {
        if entry.is_heading || entry.run.is_empty() {
            continue;
        }
        if !matcher.matches(&entry.run.text) {
            continue;
        }
        // Run text is already lowercase; the set key doubles as the
        // case-insensitive identity.
        if !seen.insert(entry.run.text.clone()) {
            continue;
        }
        expectations.push(Expectation::new(entry.section.clone(), entry.run.text.clone()));
    }

    log::debug!("extracted {} expectations", expectations.len());
    Ok(expectations)
}

enum KeywordMatcher {
    Substring(Vec<String>),
    Patterns(Vec<Regex>),
}

impl KeywordMatcher {
    fn compile(keywords: &[String], mode: KeywordMatchMode) -> Result<Self> {
        match mode {
            KeywordMatchMode::Substring => Ok(Self::Substring(
                keywords.iter().map(|k| k.to_lowercase()).collect(),
            )),
            KeywordMatchMode::WholeWord => {
                let alternation = keywords
                    .iter()
                    .map(|k| regex::escape(k))
                    .collect::<Vec<_>>()
                    .join("|");
                let pattern = format!(r"(?i)\b(?:{alternation})\b");
                let re = Regex::new(&pattern)
                    .map_err(|e| Error::InvalidConfig(format!("keyword alternation: {e}")))?;
                Ok(Self::Patterns(vec![re]))
            }
            KeywordMatchMode::Regex => {
                let patterns = keywords
                    .iter()
                    .map(|k| {
                        Regex::new(k).map_err(|e| {
                            Error::InvalidConfig(format!("bad keyword pattern {k:?}: {e}"))
                        })
                    })
                    .collect::<Result<Vec<_>>>()?;
                Ok(Self::Patterns(patterns))
            }
        }
    }

    fn matches(&self, text: &str) -> bool {
        match self {
            Self::Substring(keywords) => keywords.iter().any(|k| text.contains(k.as_str())),
            Self::Patterns(patterns) => patterns.iter().any(|re| re.is_match(text)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::infer_sections;
    use crate::model::StyledRun;

    fn tag(texts: &[&str]) -> Vec<TaggedRun> {
        let runs: Vec<StyledRun> = texts.iter().map(StyledRun::new).collect();
        infer_sections(&runs, 11.0)
    }

    #[test]
    fn test_keyword_filter() {
        let tagged = tag(&[
            "the budget shall not exceed usd 50,000",
            "lunch will be provided",
            "deliverables are due quarterly",
        ]);
        let config = EvaluationConfig::default();
        let expectations = extract_expectations(&tagged, &config).unwrap();

        let texts: Vec<&str> = expectations.iter().map(|e| e.text.as_str()).collect();
        assert_eq!(
            texts,
            vec![
                "the budget shall not exceed usd 50,000",
                "deliverables are due quarterly"
            ]
        );
    }

    #[test]
    fn test_no_duplicate_texts() {
        let tagged = tag(&[
            "the budget is capped",
            "The Budget is capped",
            "the budget is capped",
        ]);
        let config = EvaluationConfig::default();
        let expectations = extract_expectations(&tagged, &config).unwrap();
        assert_eq!(expectations.len(), 1);
    }

    #[test]
    fn test_headings_are_not_candidates() {
        let runs = vec![
            StyledRun::bold("budget"),
            StyledRun::new("the budget is capped"),
        ];
        let tagged = infer_sections(&runs, 11.0);
        let config = EvaluationConfig::default();
        let expectations = extract_expectations(&tagged, &config).unwrap();

        assert_eq!(expectations.len(), 1);
        assert_eq!(expectations[0].section, "Budget");
        assert_eq!(expectations[0].text, "the budget is capped");
    }

    #[test]
    fn test_substring_mode_matches_inside_words() {
        // Historical behavior: "goal" matches inside "goalkeeper".
        let tagged = tag(&["the goalkeeper training schedule"]);
        let config = EvaluationConfig::default();
        assert_eq!(extract_expectations(&tagged, &config).unwrap().len(), 1);
    }

    #[test]
    fn test_whole_word_mode_rejects_partial_containment() {
        let tagged = tag(&[
            "the goalkeeper training schedule",
            "the goal is full coverage",
        ]);
        let config = EvaluationConfig::default().with_match_mode(KeywordMatchMode::WholeWord);
        let expectations = extract_expectations(&tagged, &config).unwrap();
        assert_eq!(expectations.len(), 1);
        assert_eq!(expectations[0].text, "the goal is full coverage");
    }

    #[test]
    fn test_regex_mode() {
        let tagged = tag(&["phase 3 starts in q2", "no numbers here"]);
        let config = EvaluationConfig::default()
            .with_match_mode(KeywordMatchMode::Regex)
            .with_expectation_keywords([r"phase \d+"]);
        let expectations = extract_expectations(&tagged, &config).unwrap();
        assert_eq!(expectations.len(), 1);
    }

    #[test]
    fn test_bad_regex_is_config_error() {
        let tagged = tag(&["anything"]);
        let config = EvaluationConfig::default()
            .with_match_mode(KeywordMatchMode::Regex)
            .with_expectation_keywords(["(unclosed"]);
        assert!(matches!(
            extract_expectations(&tagged, &config),
            Err(Error::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_empty_input() {
        let config = EvaluationConfig::default();
        assert!(extract_expectations(&[], &config).unwrap().is_empty());
    }
}
