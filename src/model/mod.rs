//! Data model for documents under evaluation and the reports produced.

mod document;
mod report;

pub use document::{DocumentKind, DocumentModel, Paragraph, StyledRun};
pub use report::{
    CoverageReport, CoverageVerdict, EvaluationReport, Expectation, FormattingReport, KeyInfo,
    KeyInfoSection, RfpCategory, SectionPresence, StandardsScore,
};
