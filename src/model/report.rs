//! Report types produced by the coverage matcher and standards scorer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An expectation extracted from an RFP: something the proposal should
/// address, tagged with its inferred section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expectation {
    /// Inferred section the statement appeared under.
    pub section: String,

    /// Normalized statement text.
    pub text: String,
}

impl Expectation {
    /// Create an expectation.
    pub fn new(section: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            section: section.into(),
            text: text.into(),
        }
    }
}

/// Whether one expectation is addressed by the proposal, with the best
/// similarity found.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoverageVerdict {
    /// The expectation judged.
    pub expectation: Expectation,

    /// Addressed iff `best_score` reached the match threshold.
    pub matched: bool,

    /// Best partial-ratio similarity over all proposal paragraphs (0-100).
    pub best_score: u8,
}

/// Coverage of an RFP's expectations by a proposal.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CoverageReport {
    /// Addressed expectations as a percentage of the total (0 when there
    /// were no expectations).
    pub score_percent: f64,

    /// Verdicts that met the threshold, in extraction order.
    pub addressed: Vec<CoverageVerdict>,

    /// Verdicts that missed the threshold, in extraction order.
    pub missing: Vec<CoverageVerdict>,
}

impl CoverageReport {
    /// Total number of expectations judged.
    pub fn total(&self) -> usize {
        self.addressed.len() + self.missing.len()
    }
}

/// Presence of each required section, in catalog order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SectionPresence {
    /// (section label, present) pairs in catalog order.
    pub entries: Vec<(String, bool)>,
}

impl SectionPresence {
    /// Labels of sections that were not found.
    pub fn missing(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|(_, present)| !present)
            .map(|(label, _)| label.as_str())
            .collect()
    }

    /// Fraction of sections present, as a percentage.
    pub fn percent(&self) -> f64 {
        if self.entries.is_empty() {
            return 0.0;
        }
        let found = self.entries.iter().filter(|(_, p)| *p).count();
        found as f64 / self.entries.len() as f64 * 100.0
    }
}

/// Formatting and spelling findings for a proposal.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FormattingReport {
    /// Misspelled tokens, capped at the configured limit.
    pub spelling_issues: Vec<String>,

    /// False if any run uses a font outside the approved set.
    pub font_ok: bool,

    /// False if any non-heading run deviates from the body size baseline.
    pub font_size_ok: bool,
}

/// Composite standards evaluation of a proposal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandardsScore {
    /// Required-section presence.
    pub sections: SectionPresence,

    /// Formatting and spelling findings.
    pub formatting: FormattingReport,

    /// Labels of methodology components not found.
    pub methodology_missing: Vec<String>,

    /// Standard-rate mismatches found in the budget section.
    pub budget_mismatches: Vec<String>,

    /// Weighted composite score (0-100).
    pub score: f64,

    /// Human-readable recommendations, one per failing category.
    pub recommendations: Vec<String>,
}

/// Category an RFP falls into, by keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RfpCategory {
    /// Grants, donations, philanthropy.
    Grant,
    /// Investment and venture capital.
    Investment,
    /// Assessments, evaluations, audits.
    Assessment,
    /// Market and consumer research.
    MarketResearch,
    /// No category keyword matched.
    Uncategorized,
}

impl RfpCategory {
    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            RfpCategory::Grant => "Grant",
            RfpCategory::Investment => "Investment",
            RfpCategory::Assessment => "Assessment",
            RfpCategory::MarketResearch => "Market Research",
            RfpCategory::Uncategorized => "Uncategorized",
        }
    }
}

/// One extracted key-info section of an RFP.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyInfoSection {
    /// Section label (e.g. "Scope of Work").
    pub label: String,

    /// Sentences (or entities) claimed for this section. Empty means
    /// nothing was found; renderers print a placeholder.
    pub details: Vec<String>,
}

/// Key information extracted from an RFP.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyInfo {
    /// Inferred RFP category.
    pub category: RfpCategory,

    /// Extracted sections in fixed order.
    pub sections: Vec<KeyInfoSection>,
}

/// Everything the report layer needs for one evaluation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationReport {
    /// Standards evaluation of the proposal.
    pub standards: StandardsScore,

    /// Expectation coverage, when an RFP was supplied.
    pub coverage: Option<CoverageReport>,

    /// When the report was assembled.
    pub generated_at: DateTime<Utc>,
}

impl EvaluationReport {
    /// Assemble a report, stamping the current time.
    pub fn new(standards: StandardsScore, coverage: Option<CoverageReport>) -> Self {
        Self {
            standards,
            coverage,
            generated_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_presence_percent() {
        let presence = SectionPresence {
            entries: vec![
                ("Introduction".to_string(), true),
                ("Budget".to_string(), false),
            ],
        };
        assert_eq!(presence.percent(), 50.0);
        assert_eq!(presence.missing(), vec!["Budget"]);
    }

    #[test]
    fn test_section_presence_empty() {
        let presence = SectionPresence::default();
        assert_eq!(presence.percent(), 0.0);
        assert!(presence.missing().is_empty());
    }

    #[test]
    fn test_coverage_report_total() {
        let verdict = CoverageVerdict {
            expectation: Expectation::new("General", "the budget is capped"),
            matched: true,
            best_score: 88,
        };
        let report = CoverageReport {
            score_percent: 100.0,
            addressed: vec![verdict],
            missing: vec![],
        };
        assert_eq!(report.total(), 1);
    }

    #[test]
    fn test_category_labels() {
        assert_eq!(RfpCategory::MarketResearch.label(), "Market Research");
        assert_eq!(RfpCategory::Uncategorized.label(), "Uncategorized");
    }
}
