//! Evaluation configuration.
//!
//! Every tunable the scorer and matcher rely on lives here with the
//! historical defaults: match threshold 70, ten-point penalty per issue,
//! fifteen reported misspellings, 35/20/25/20 score weights, Tenorite and
//! Candara as approved fonts, body size 11pt.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// How catalog keywords are matched against run text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeywordMatchMode {
    /// Plain substring containment. Matches inside larger words
    /// ("requirements" inside "misrequirements"), preserving the
    /// historical behavior.
    #[default]
    Substring,
    /// Word-boundary match, case-insensitive.
    WholeWord,
    /// Each catalog entry is a regular expression.
    Regex,
}

/// A labeled set of synonyms. Used for required sections and methodology
/// components: any synonym appearing as a substring counts as present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionSpec {
    /// Label used in reports and recommendations.
    pub label: String,

    /// Lowercase synonyms, any of which marks the section present.
    pub synonyms: Vec<String>,
}

impl SectionSpec {
    /// Create a spec whose only synonym is the lowercased label.
    pub fn new(label: impl Into<String>) -> Self {
        let label = label.into();
        let synonym = label.to_lowercase();
        Self {
            label,
            synonyms: vec![synonym],
        }
    }

    /// Create a spec with explicit synonyms.
    pub fn with_synonyms<S: Into<String>>(
        label: impl Into<String>,
        synonyms: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            label: label.into(),
            synonyms: synonyms
                .into_iter()
                .map(|s| s.into().to_lowercase())
                .collect(),
        }
    }

    /// Whether any synonym appears as a substring of `text` (which must
    /// already be lowercase).
    pub fn present_in(&self, text: &str) -> bool {
        self.synonyms.iter().any(|s| text.contains(s.as_str()))
    }
}

/// Weights of the four standards-score factors. Must sum to 1.0.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScoreWeights {
    /// Required-section presence.
    pub sections: f64,
    /// Spelling cleanliness.
    pub spelling: f64,
    /// Methodology-component completeness.
    pub methodology: f64,
    /// Font name/size conformance.
    pub formatting: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            sections: 0.35,
            spelling: 0.20,
            methodology: 0.25,
            formatting: 0.20,
        }
    }
}

impl ScoreWeights {
    fn sum(&self) -> f64 {
        self.sections + self.spelling + self.methodology + self.formatting
    }
}

/// Configuration for expectation extraction, coverage matching, and
/// standards scoring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationConfig {
    /// Partial-ratio score at or above which an expectation counts as
    /// addressed.
    pub match_threshold: u8,

    /// Points deducted per spelling issue / missing methodology component.
    pub penalty_per_issue: u32,

    /// Maximum number of spelling issues reported.
    pub spelling_cap: usize,

    /// Factor weights of the composite score.
    pub weights: ScoreWeights,

    /// Approved font names (case-insensitive).
    pub approved_fonts: Vec<String>,

    /// Body font size assumed when no run carries a size.
    pub default_body_size: f32,

    /// Required sections of a proposal.
    pub required_sections: Vec<SectionSpec>,

    /// Keywords that mark an RFP statement as an expectation.
    pub expectation_keywords: Vec<String>,

    /// Components a methodology section must describe.
    pub methodology_components: Vec<SectionSpec>,

    /// How expectation keywords are matched.
    pub match_mode: KeywordMatchMode,

    /// Fan coverage scans across rayon workers.
    pub parallel: bool,

    /// Standard day rates per role, checked against the budget section.
    pub standard_rates: Vec<(String, u32)>,
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            match_threshold: 70,
            penalty_per_issue: 10,
            spelling_cap: 15,
            weights: ScoreWeights::default(),
            approved_fonts: vec!["Tenorite".to_string(), "Candara".to_string()],
            default_body_size: 11.0,
            required_sections: default_required_sections(),
            expectation_keywords: default_expectation_keywords(),
            methodology_components: default_methodology_components(),
            match_mode: KeywordMatchMode::Substring,
            parallel: true,
            standard_rates: vec![
                ("project director".to_string(), 1400),
                ("project manager".to_string(), 1200),
                ("consultant".to_string(), 850),
                ("analyst".to_string(), 700),
            ],
        }
    }
}

impl EvaluationConfig {
    /// Create a configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the coverage match threshold (0-100).
    pub fn with_match_threshold(mut self, threshold: u8) -> Self {
        self.match_threshold = threshold.min(100);
        self
    }

    /// Set the per-issue penalty.
    pub fn with_penalty(mut self, points: u32) -> Self {
        self.penalty_per_issue = points;
        self
    }

    /// Set the spelling-issue report cap.
    pub fn with_spelling_cap(mut self, cap: usize) -> Self {
        self.spelling_cap = cap;
        self
    }

    /// Set the score weights.
    pub fn with_weights(mut self, weights: ScoreWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Set the approved font allow-list.
    pub fn with_approved_fonts<S: Into<String>>(
        mut self,
        fonts: impl IntoIterator<Item = S>,
    ) -> Self {
        self.approved_fonts = fonts.into_iter().map(Into::into).collect();
        self
    }

    /// Set the fallback body font size.
    pub fn with_default_body_size(mut self, size: f32) -> Self {
        self.default_body_size = size;
        self
    }

    /// Set the required-section catalog.
    pub fn with_required_sections(mut self, sections: Vec<SectionSpec>) -> Self {
        self.required_sections = sections;
        self
    }

    /// Set the expectation keyword catalog.
    pub fn with_expectation_keywords<S: Into<String>>(
        mut self,
        keywords: impl IntoIterator<Item = S>,
    ) -> Self {
        self.expectation_keywords = keywords
            .into_iter()
            .map(|k| k.into().to_lowercase())
            .collect();
        self
    }

    /// Set the methodology component catalog.
    pub fn with_methodology_components(mut self, components: Vec<SectionSpec>) -> Self {
        self.methodology_components = components;
        self
    }

    /// Set the keyword matching mode.
    pub fn with_match_mode(mut self, mode: KeywordMatchMode) -> Self {
        self.match_mode = mode;
        self
    }

    /// Disable parallel coverage scanning.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    /// Set the role rate table for the budget check.
    pub fn with_standard_rates<S: Into<String>>(
        mut self,
        rates: impl IntoIterator<Item = (S, u32)>,
    ) -> Self {
        self.standard_rates = rates
            .into_iter()
            .map(|(role, rate)| (role.into().to_lowercase(), rate))
            .collect();
        self
    }

    /// Check internal consistency: weights sum to 1.0 and, in regex mode,
    /// every keyword compiles.
    pub fn validate(&self) -> Result<()> {
        let sum = self.weights.sum();
        if (sum - 1.0).abs() > 1e-6 {
            return Err(Error::InvalidConfig(format!(
                "score weights must sum to 1.0, got {sum}"
            )));
        }
        if self.match_mode == KeywordMatchMode::Regex {
            for keyword in &self.expectation_keywords {
                regex::Regex::new(keyword).map_err(|e| {
                    Error::InvalidConfig(format!("bad keyword pattern {keyword:?}: {e}"))
                })?;
            }
        }
        Ok(())
    }
}

fn default_required_sections() -> Vec<SectionSpec> {
    vec![
        SectionSpec::new("Introduction"),
        SectionSpec::new("Background"),
        SectionSpec::new("Objective"),
        SectionSpec::with_synonyms(
            "Methodology",
            ["methodology", "approach", "technical approach"],
        ),
        SectionSpec::new("Work Plan"),
        SectionSpec::new("Budget"),
    ]
}

fn default_expectation_keywords() -> Vec<String> {
    [
        "deliverable",
        "budget",
        "timeline",
        "expected",
        "scope of work",
        "methodology",
        "objective",
        "goal",
        "requirements",
        "outcomes",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

fn default_methodology_components() -> Vec<SectionSpec> {
    vec![
        SectionSpec::with_synonyms("Project Kick-Off", ["project kick-off", "project inception"]),
        SectionSpec::new("Desk Review"),
        SectionSpec::new("Data Collection"),
        SectionSpec::new("Data Analysis"),
        SectionSpec::new("Data Management"),
        SectionSpec::new("Report Development"),
        SectionSpec::with_synonyms(
            "Deliverables",
            ["deliverables", "deliverable", "output", "outputs"],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(EvaluationConfig::default().validate().is_ok());
    }

    #[test]
    fn test_config_builder() {
        let config = EvaluationConfig::new()
            .with_match_threshold(80)
            .with_penalty(5)
            .sequential();

        assert_eq!(config.match_threshold, 80);
        assert_eq!(config.penalty_per_issue, 5);
        assert!(!config.parallel);
    }

    #[test]
    fn test_threshold_clamped() {
        let config = EvaluationConfig::new().with_match_threshold(200);
        assert_eq!(config.match_threshold, 100);
    }

    #[test]
    fn test_bad_weights_rejected() {
        let config = EvaluationConfig::new().with_weights(ScoreWeights {
            sections: 0.5,
            spelling: 0.5,
            methodology: 0.5,
            formatting: 0.5,
        });
        assert!(matches!(
            config.validate(),
            Err(Error::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_bad_regex_keyword_rejected() {
        let config = EvaluationConfig::new()
            .with_match_mode(KeywordMatchMode::Regex)
            .with_expectation_keywords(["(unclosed"]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_section_spec_synonyms() {
        let spec = SectionSpec::with_synonyms("Methodology", ["methodology", "approach"]);
        assert!(spec.present_in("our approach is iterative"));
        assert!(!spec.present_in("the plan is fixed"));
    }

    #[test]
    fn test_default_catalogs() {
        let config = EvaluationConfig::default();
        assert_eq!(config.required_sections.len(), 6);
        assert_eq!(config.expectation_keywords.len(), 10);
        assert_eq!(config.methodology_components.len(), 7);
    }
}
