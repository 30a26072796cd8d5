//! Expectation coverage matching.

use rayon::prelude::*;

use crate::config::EvaluationConfig;
use crate::model::{CoverageReport, CoverageVerdict, Expectation};
use crate::score::partial_ratio;

/// Judge every expectation against a proposal's text.
///
/// The proposal text is split into paragraphs on newline boundaries and
/// each expectation keeps its best partial-ratio score over them. An
/// expectation is addressed iff that best score reaches the configured
/// threshold. Expectations are independent, so scans fan out across
/// rayon workers when `config.parallel` is set; collection preserves
/// input order either way. An empty expectation list yields a zero
/// score and empty sequences, not an error.
pub fn match_coverage(
    expectations: &[Expectation],
    proposal_text: &str,
    config: &EvaluationConfig,
) -> CoverageReport {
    let paragraphs: Vec<&str> = proposal_text.split('\n').collect();

    let judge = |expectation: &Expectation| -> CoverageVerdict {
        let best_score = paragraphs
            .iter()
            .map(|p| partial_ratio(&expectation.text, p))
            .max()
            .unwrap_or(0);
        CoverageVerdict {
            matched: best_score >= config.match_threshold,
            best_score,
            expectation: expectation.clone(),
        }
    };

    let verdicts: Vec<CoverageVerdict> = if config.parallel {
        expectations.par_iter().map(judge).collect()
    } else {
        expectations.iter().map(judge).collect()
    };

    let (addressed, missing): (Vec<_>, Vec<_>) = verdicts.into_iter().partition(|v| v.matched);

    let total = addressed.len() + missing.len();
    let score_percent = if total == 0 {
        0.0
    } else {
        addressed.len() as f64 / total as f64 * 100.0
    };

    log::debug!(
        "coverage: {}/{} addressed ({score_percent:.2}%)",
        addressed.len(),
        total
    );

    CoverageReport {
        score_percent,
        addressed,
        missing,
    }
}
