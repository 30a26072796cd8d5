//! RFP-side extraction: heading inference, expectation extraction, and
//! key-info extraction.

mod expectations;
mod headings;
mod keyinfo;

pub use expectations::extract_expectations;
pub use headings::{infer_sections, FontProfile, TaggedRun, GENERAL_SECTION};
pub use keyinfo::{categorize_rfp, extract_key_info, sentences_with_keywords};

pub(crate) use headings::title_case;
