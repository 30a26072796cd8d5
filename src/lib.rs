//! # propeval
//!
//! Proposal evaluation engine for Rust.
//!
//! This library scores business proposals two ways: against an
//! organization's formatting and section standards, and against the
//! expectations stated in a request for proposal (RFP). It works on
//! already-decoded documents — ordered paragraphs of styled text runs —
//! and returns structured reports; decoding, dictionaries, and
//! named-entity models are injected collaborators.
//!
//! ## Quick Start
//!
//! ```
//! use propeval::{DocumentKind, DocumentModel, Evaluator};
//!
//! fn main() -> propeval::Result<()> {
//!     let proposal = DocumentModel::from_texts(
//!         DocumentKind::Docx,
//!         &["Introduction", "Background", "Objective", "Work Plan", "Budget",
//!           "Our methodology covers desk review and data collection."],
//!     );
//!
//!     let evaluator = Evaluator::new();
//!     let score = evaluator.evaluate(&proposal)?;
//!     println!("score: {:.1}%", score.score);
//!     for recommendation in &score.recommendations {
//!         println!("- {recommendation}");
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Section inference**: headings recovered from boldness and font
//!   size against a body-size baseline
//! - **Expectation extraction**: keyword-relevant statements tagged with
//!   their inferred section
//! - **Fuzzy coverage**: partial-ratio matching of expectations against
//!   proposal paragraphs, parallelized with Rayon
//! - **Standards scoring**: section presence, spelling, methodology
//!   completeness, and formatting in one weighted composite
//! - **Injected collaborators**: decoder, dictionary, and entity
//!   extractor behind narrow traits
//!
//! Coverage matching is O(expectations × paragraphs); for very large
//! documents, callers wanting a hard latency bound should wrap the
//! evaluation in their own timeout.

pub mod config;
pub mod decode;
pub mod entities;
pub mod error;
pub mod extract;
pub mod model;
pub mod render;
pub mod score;
pub mod spell;

// Re-export commonly used types
pub use config::{EvaluationConfig, KeywordMatchMode, ScoreWeights, SectionSpec};
pub use decode::{DecoderRegistry, DocumentDecoder};
pub use entities::{EntityExtractor, RegexDateExtractor};
pub use error::{Error, Result};
pub use extract::{extract_expectations, infer_sections, TaggedRun};
pub use model::{
    CoverageReport, CoverageVerdict, DocumentKind, DocumentModel, EvaluationReport, Expectation,
    FormattingReport, KeyInfo, Paragraph, RfpCategory, SectionPresence, StandardsScore, StyledRun,
};
pub use render::JsonFormat;
pub use score::{match_coverage, partial_ratio, StandardsScorer};
pub use spell::{AcceptAllDictionary, Dictionary, WordListDictionary};

use std::sync::Arc;

/// Extract expectations from an RFP document.
///
/// Runs heading inference over the document's styled runs, then the
/// keyword filter.
pub fn rfp_expectations(
    rfp: &DocumentModel,
    config: &EvaluationConfig,
) -> Result<Vec<Expectation>> {
    let runs = rfp.styled_runs();
    let tagged = infer_sections(&runs, config.default_body_size);
    extract_expectations(&tagged, config)
}

/// Judge how well a proposal covers an RFP's expectations.
pub fn rfp_coverage(
    rfp: &DocumentModel,
    proposal: &DocumentModel,
    config: &EvaluationConfig,
) -> Result<CoverageReport> {
    let expectations = rfp_expectations(rfp, config)?;
    Ok(match_coverage(&expectations, &proposal.plain_text(), config))
}

/// Evaluate a proposal against the organizational standards with a
/// specific dictionary.
pub fn evaluate_proposal(
    proposal: &DocumentModel,
    config: &EvaluationConfig,
    dictionary: Arc<dyn Dictionary>,
) -> Result<StandardsScore> {
    let scorer = StandardsScorer::new(config.clone(), dictionary)?;
    Ok(scorer.evaluate(proposal))
}

/// Builder for configuring and running evaluations.
///
/// # Example
///
/// ```
/// use propeval::{DocumentKind, DocumentModel, EvaluationConfig, Evaluator};
///
/// let rfp = DocumentModel::from_texts(
///     DocumentKind::Pdf,
///     &["Deliverables are due quarterly."],
/// );
/// let proposal = DocumentModel::from_texts(
///     DocumentKind::Docx,
///     &["We confirm deliverables are due quarterly."],
/// );
///
/// let evaluator = Evaluator::new()
///     .with_config(EvaluationConfig::default().with_match_threshold(75));
/// let coverage = evaluator.coverage(&rfp, &proposal)?;
/// assert_eq!(coverage.score_percent, 100.0);
/// # Ok::<(), propeval::Error>(())
/// ```
pub struct Evaluator {
    config: EvaluationConfig,
    dictionary: Arc<dyn Dictionary>,
    entity_extractor: Arc<dyn EntityExtractor>,
}

impl Evaluator {
    /// Create an evaluator with the default configuration, an
    /// accept-all dictionary, and the regex date extractor.
    pub fn new() -> Self {
        Self {
            config: EvaluationConfig::default(),
            dictionary: Arc::new(AcceptAllDictionary),
            entity_extractor: Arc::new(RegexDateExtractor::new()),
        }
    }

    /// Set the evaluation configuration.
    pub fn with_config(mut self, config: EvaluationConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the dictionary collaborator.
    pub fn with_dictionary(mut self, dictionary: Arc<dyn Dictionary>) -> Self {
        self.dictionary = dictionary;
        self
    }

    /// Set the entity-extraction collaborator.
    pub fn with_entity_extractor(mut self, extractor: Arc<dyn EntityExtractor>) -> Self {
        self.entity_extractor = extractor;
        self
    }

    /// Disable parallel coverage scanning.
    pub fn sequential(mut self) -> Self {
        self.config = self.config.sequential();
        self
    }

    /// The active configuration.
    pub fn config(&self) -> &EvaluationConfig {
        &self.config
    }

    /// Evaluate a proposal against the organizational standards.
    pub fn evaluate(&self, proposal: &DocumentModel) -> Result<StandardsScore> {
        evaluate_proposal(proposal, &self.config, self.dictionary.clone())
    }

    /// Extract expectations from an RFP.
    pub fn expectations(&self, rfp: &DocumentModel) -> Result<Vec<Expectation>> {
        rfp_expectations(rfp, &self.config)
    }

    /// Judge how well a proposal covers an RFP's expectations.
    pub fn coverage(
        &self,
        rfp: &DocumentModel,
        proposal: &DocumentModel,
    ) -> Result<CoverageReport> {
        rfp_coverage(rfp, proposal, &self.config)
    }

    /// Extract key information from an RFP.
    pub fn key_info(&self, rfp: &DocumentModel) -> Result<KeyInfo> {
        extract::extract_key_info(rfp, self.entity_extractor.as_ref())
    }

    /// Run the full evaluation and assemble a report. The RFP is
    /// optional; without one the report carries no coverage section.
    pub fn report(
        &self,
        proposal: &DocumentModel,
        rfp: Option<&DocumentModel>,
    ) -> Result<EvaluationReport> {
        let standards = self.evaluate(proposal)?;
        let coverage = match rfp {
            Some(rfp) => Some(self.coverage(rfp, proposal)?),
            None => None,
        };
        Ok(EvaluationReport::new(standards, coverage))
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}
