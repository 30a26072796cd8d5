//! Markdown rendering for evaluation reports.

use crate::model::{CoverageReport, EvaluationReport, KeyInfo, StandardsScore};

/// Render an evaluation report as Markdown.
pub fn to_markdown(report: &EvaluationReport) -> String {
    let mut output = String::new();

    output.push_str("# Proposal Evaluation Report\n\n");
    output.push_str(&format!(
        "Generated: {}\n\n",
        report.generated_at.format("%Y-%m-%d %H:%M UTC")
    ));

    render_standards(&mut output, &report.standards);

    if let Some(coverage) = &report.coverage {
        render_coverage(&mut output, coverage);
    }

    output.trim_end().to_string() + "\n"
}

fn render_standards(output: &mut String, standards: &StandardsScore) {
    output.push_str("## Section Check\n\n");
    for (label, present) in &standards.sections.entries {
        let mark = if *present { "Present" } else { "Missing" };
        output.push_str(&format!("- {label}: {mark}\n"));
    }
    output.push('\n');

    output.push_str("## Formatting & Presentation\n\n");
    if standards.formatting.spelling_issues.is_empty() {
        output.push_str("No major spelling issues detected.\n");
    } else {
        output.push_str(&format!(
            "Spelling issues detected: {}\n",
            standards.formatting.spelling_issues.join(", ")
        ));
    }
    if standards.formatting.font_ok && standards.formatting.font_size_ok {
        output.push_str("Font style and size meet organizational standards.\n");
    } else {
        output.push_str("Font style or size deviates from organizational standards.\n");
    }
    output.push('\n');

    output.push_str(&format!(
        "## Overall Score\n\n{:.0}%\n\n",
        standards.score.round()
    ));

    output.push_str("## Recommendations\n\n");
    if standards.recommendations.is_empty() {
        output.push_str("All criteria met. Great job!\n");
    } else {
        for recommendation in &standards.recommendations {
            output.push_str(&format!("- {recommendation}\n"));
        }
    }
    output.push('\n');
}

fn render_coverage(output: &mut String, coverage: &CoverageReport) {
    output.push_str(&format!(
        "## RFP Coverage\n\n{:.1}% of expectations addressed ({} of {})\n\n",
        coverage.score_percent,
        coverage.addressed.len(),
        coverage.total()
    ));

    if !coverage.missing.is_empty() {
        output.push_str("### Not Addressed\n\n");
        for verdict in &coverage.missing {
            output.push_str(&format!(
                "- [{}] {} (best match {})\n",
                verdict.expectation.section, verdict.expectation.text, verdict.best_score
            ));
        }
        output.push('\n');
    }

    if !coverage.addressed.is_empty() {
        output.push_str("### Addressed\n\n");
        for verdict in &coverage.addressed {
            output.push_str(&format!(
                "- [{}] {} (score {})\n",
                verdict.expectation.section, verdict.expectation.text, verdict.best_score
            ));
        }
        output.push('\n');
    }
}

/// Render extracted RFP key information as Markdown.
pub fn key_info_to_markdown(info: &KeyInfo) -> String {
    let mut output = String::new();

    output.push_str("# RFP Extracted Information\n\n");
    output.push_str(&format!("## RFP Category\n\n{}\n\n", info.category.label()));

    for section in &info.sections {
        output.push_str(&format!("## {}\n\n", section.label));
        if section.details.is_empty() {
            output.push_str("Not found.\n\n");
        } else {
            for detail in &section.details {
                output.push_str(&format!("- {detail}\n"));
            }
            output.push('\n');
        }
    }

    output.trim_end().to_string() + "\n"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        CoverageVerdict, Expectation, FormattingReport, KeyInfoSection, RfpCategory,
        SectionPresence,
    };

    fn standards() -> StandardsScore {
        StandardsScore {
            sections: SectionPresence {
                entries: vec![
                    ("Introduction".to_string(), true),
                    ("Budget".to_string(), false),
                ],
            },
            formatting: FormattingReport {
                spelling_issues: vec!["teh".to_string()],
                font_ok: true,
                font_size_ok: true,
            },
            methodology_missing: vec![],
            budget_mismatches: vec![],
            score: 83.5,
            recommendations: vec![
                "Kindly include the following missing sections: Budget".to_string(),
            ],
        }
    }

    #[test]
    fn test_standards_markdown() {
        let report = EvaluationReport::new(standards(), None);
        let markdown = to_markdown(&report);

        assert!(markdown.contains("# Proposal Evaluation Report"));
        assert!(markdown.contains("- Introduction: Present"));
        assert!(markdown.contains("- Budget: Missing"));
        assert!(markdown.contains("Spelling issues detected: teh"));
        assert!(markdown.contains("84%"));
        assert!(markdown.contains("missing sections: Budget"));
        assert!(!markdown.contains("RFP Coverage"));
    }

    #[test]
    fn test_coverage_section_included() {
        let coverage = CoverageReport {
            score_percent: 50.0,
            addressed: vec![CoverageVerdict {
                expectation: Expectation::new("Budget", "the budget is capped"),
                matched: true,
                best_score: 92,
            }],
            missing: vec![CoverageVerdict {
                expectation: Expectation::new("General", "weekly calls are expected"),
                matched: false,
                best_score: 41,
            }],
        };
        let report = EvaluationReport::new(standards(), Some(coverage));
        let markdown = to_markdown(&report);

        assert!(markdown.contains("## RFP Coverage"));
        assert!(markdown.contains("50.0% of expectations addressed (1 of 2)"));
        assert!(markdown.contains("- [General] weekly calls are expected (best match 41)"));
        assert!(markdown.contains("- [Budget] the budget is capped (score 92)"));
    }

    #[test]
    fn test_key_info_markdown() {
        let info = KeyInfo {
            category: RfpCategory::Grant,
            sections: vec![
                KeyInfoSection {
                    label: "Budget".to_string(),
                    details: vec!["the ceiling is usd 80,000.".to_string()],
                },
                KeyInfoSection {
                    label: "Deadlines".to_string(),
                    details: vec![],
                },
            ],
        };
        let markdown = key_info_to_markdown(&info);

        assert!(markdown.contains("## RFP Category\n\nGrant"));
        assert!(markdown.contains("- the ceiling is usd 80,000."));
        assert!(markdown.contains("## Deadlines\n\nNot found."));
    }
}
