//! Proposal-side scoring: fuzzy coverage matching and standards
//! evaluation.

mod budget;
mod coverage;
mod similarity;
mod standards;

pub use budget::budget_check;
pub use coverage::match_coverage;
pub use similarity::{partial_ratio, ratio};
pub use standards::StandardsScorer;
