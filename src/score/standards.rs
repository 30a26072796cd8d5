//! Standards scoring: section presence, formatting, spelling, and
//! methodology completeness rolled into one weighted composite.

use std::sync::Arc;

use crate::config::EvaluationConfig;
use crate::error::Result;
use crate::extract::FontProfile;
use crate::model::{DocumentModel, FormattingReport, SectionPresence, StandardsScore};
use crate::score::budget_check;
use crate::spell::{tokenize, Dictionary};

/// Evaluates a proposal against the organizational standards.
pub struct StandardsScorer {
    config: EvaluationConfig,
    dictionary: Arc<dyn Dictionary>,
}

impl StandardsScorer {
    /// Create a scorer. Fails if the configuration is inconsistent.
    pub fn new(config: EvaluationConfig, dictionary: Arc<dyn Dictionary>) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, dictionary })
    }

    /// Evaluate one proposal. Deterministic: the same document always
    /// yields the same score.
    pub fn evaluate(&self, doc: &DocumentModel) -> StandardsScore {
        let sections = self.check_sections(doc);
        let formatting = self.check_formatting(doc);
        let methodology_missing = self.check_methodology(doc);
        let budget_mismatches = budget_check(doc, &self.config.standard_rates);

        let section_percent = sections.percent();
        let spell_score = penalty_score(
            formatting.spelling_issues.len(),
            self.config.penalty_per_issue,
        );
        let methodology_score =
            penalty_score(methodology_missing.len(), self.config.penalty_per_issue);
        let formatting_score =
            (bool_score(formatting.font_ok) + bool_score(formatting.font_size_ok)) / 2.0;

        let w = &self.config.weights;
        let score = section_percent * w.sections
            + spell_score * w.spelling
            + methodology_score * w.methodology
            + formatting_score * w.formatting;

        log::debug!(
            "standards: sections {section_percent:.1} spell {spell_score:.0} \
             methodology {methodology_score:.0} formatting {formatting_score:.0} -> {score:.2}"
        );

        let recommendations = self.recommendations(
            &sections,
            &formatting,
            &methodology_missing,
            &budget_mismatches,
            doc,
        );

        StandardsScore {
            sections,
            formatting,
            methodology_missing,
            budget_mismatches,
            score,
            recommendations,
        }
    }

    /// A required section is present iff any of its synonyms appears in
    /// at least one paragraph.
    fn check_sections(&self, doc: &DocumentModel) -> SectionPresence {
        let entries = self
            .config
            .required_sections
            .iter()
            .map(|spec| {
                let present = doc.paragraphs.iter().any(|p| spec.present_in(&p.text()));
                (spec.label.clone(), present)
            })
            .collect();
        SectionPresence { entries }
    }

    fn check_formatting(&self, doc: &DocumentModel) -> FormattingReport {
        let runs = doc.styled_runs();
        let body_size = FontProfile::from_runs(&runs).body_size(self.config.default_body_size);
        let body_key = size_key(body_size);

        let mut font_ok = true;
        let mut font_size_ok = true;

        for paragraph in &doc.paragraphs {
            let heading_exempt = paragraph.is_heading_style();
            for run in &paragraph.runs {
                if let Some(name) = &run.font_name {
                    if !self
                        .config
                        .approved_fonts
                        .iter()
                        .any(|f| f.eq_ignore_ascii_case(name))
                    {
                        font_ok = false;
                    }
                }
                if let Some(size) = run.font_size_pt {
                    if size_key(size) != body_key && !heading_exempt {
                        font_size_ok = false;
                    }
                }
            }
        }

        let tokens = tokenize(&doc.plain_text());
        let unknown = self.dictionary.unknown_words(&tokens);
        // Report in document order so repeated runs are stable.
        let spelling_issues: Vec<String> = tokens
            .into_iter()
            .filter(|t| unknown.contains(t))
            .take(self.config.spelling_cap)
            .collect();

        FormattingReport {
            spelling_issues,
            font_ok,
            font_size_ok,
        }
    }

    /// Components missing from the methodology narrative, by label.
    fn check_methodology(&self, doc: &DocumentModel) -> Vec<String> {
        let methodology_text = doc
            .paragraphs
            .iter()
            .map(|p| p.text())
            .filter(|t| t.contains("methodology") || t.contains("approach"))
            .collect::<Vec<_>>()
            .join("\n");

        self.config
            .methodology_components
            .iter()
            .filter(|spec| !spec.present_in(&methodology_text))
            .map(|spec| spec.label.clone())
            .collect()
    }

    fn recommendations(
        &self,
        sections: &SectionPresence,
        formatting: &FormattingReport,
        methodology_missing: &[String],
        budget_mismatches: &[String],
        doc: &DocumentModel,
    ) -> Vec<String> {
        let mut recommendations = Vec::new();

        let missing = sections.missing();
        if !missing.is_empty() {
            recommendations.push(format!(
                "Kindly include the following missing sections: {}",
                missing.join(", ")
            ));
        }
        if !formatting.spelling_issues.is_empty() {
            recommendations.push("Spelling issues found in the document.".to_string());
        }
        if !formatting.font_ok {
            recommendations.push(format!(
                "Document should use an approved font ({}) throughout.",
                self.config.approved_fonts.join(", ")
            ));
        }
        if !formatting.font_size_ok {
            let body_size = FontProfile::from_runs(&doc.styled_runs())
                .body_size(self.config.default_body_size);
            recommendations.push(format!("Body text should use font size {body_size}."));
        }
        if !methodology_missing.is_empty() {
            recommendations.push(format!(
                "The methodology section is missing the following components: {}",
                methodology_missing.join(", ")
            ));
        }
        recommendations.extend(budget_mismatches.iter().cloned());

        recommendations
    }
}

fn penalty_score(issues: usize, penalty_per_issue: u32) -> f64 {
    if issues == 0 {
        100.0
    } else {
        (100.0 - (penalty_per_issue as f64) * issues as f64).max(0.0)
    }
}

fn bool_score(ok: bool) -> f64 {
    if ok {
        100.0
    } else {
        0.0
    }
}

fn size_key(size: f32) -> i32 {
    (size * 10.0) as i32
}
