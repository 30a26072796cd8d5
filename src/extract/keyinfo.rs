//! RFP key-information extraction.
//!
//! Categorizes an RFP and pulls out the sentences that describe its
//! scope, methodology, eligibility, budget, deadlines, and selection
//! process. Sections claim sentences in a fixed order; a sentence
//! claimed by one section is not offered to later ones.

use std::collections::HashSet;

use regex::Regex;

use crate::entities::EntityExtractor;
use crate::error::Result;
use crate::model::{DocumentModel, KeyInfo, KeyInfoSection, RfpCategory};

const SCOPE_KEYWORDS: &[&str] = &[
    "scope",
    "description",
    "objective",
    "goals",
    "deliverables",
    "statement of work",
];
const METHODOLOGY_KEYWORDS: &[&str] = &[
    "methodology",
    "approach",
    "strategy",
    "implementation",
    "framework",
    "techniques",
];
const ELIGIBILITY_KEYWORDS: &[&str] = &[
    "eligibility",
    "eligible",
    "applicants",
    "who can apply",
    "requirements",
    "qualifications",
    "criteria",
];
const BUDGET_KEYWORDS: &[&str] = &["budget", "funding", "cost", "financial", "expenses"];
const SELECTION_KEYWORDS: &[&str] = &["selection", "weighting", "judging", "metrics", "decision"];

const GRANT_KEYWORDS: &[&str] = &["grant", "funding", "donation", "philanthropy", "financial aid"];
const INVESTMENT_KEYWORDS: &[&str] = &["investment", "capital", "funding", "venture", "equity"];
const ASSESSMENT_KEYWORDS: &[&str] = &["assessment", "evaluation", "review", "impact", "audit"];
const MARKET_RESEARCH_KEYWORDS: &[&str] = &[
    "market research",
    "consumer research",
    "market analysis",
    "industry study",
    "market survey",
];

/// Categorize an RFP by its first matching keyword group.
///
/// Groups are tried in order (grant, investment, assessment, market
/// research); keywords match on word boundaries, case-insensitive.
pub fn categorize_rfp(text: &str) -> RfpCategory {
    let groups: [(&[&str], RfpCategory); 4] = [
        (GRANT_KEYWORDS, RfpCategory::Grant),
        (INVESTMENT_KEYWORDS, RfpCategory::Investment),
        (ASSESSMENT_KEYWORDS, RfpCategory::Assessment),
        (MARKET_RESEARCH_KEYWORDS, RfpCategory::MarketResearch),
    ];

    for (keywords, category) in groups {
        if whole_word_pattern(keywords).is_match(text) {
            return category;
        }
    }
    RfpCategory::Uncategorized
}

/// Sentences of `text` that match any of `keywords` on word boundaries
/// and are not yet in `claimed`. Matching sentences are added to
/// `claimed` so later sections cannot reuse them.
pub fn sentences_with_keywords(
    text: &str,
    keywords: &[&str],
    claimed: &mut HashSet<String>,
) -> Vec<String> {
    let pattern = whole_word_pattern(keywords);
    let mut matches = Vec::new();

    for sentence in split_sentences(text) {
        let sentence = sentence.trim();
        if sentence.is_empty() {
            continue;
        }
        if pattern.is_match(sentence) && claimed.insert(sentence.to_string()) {
            matches.push(sentence.to_string());
        }
    }

    matches
}

/// Extract category and key-info sections from an RFP.
pub fn extract_key_info(
    doc: &DocumentModel,
    entity_extractor: &dyn EntityExtractor,
) -> Result<KeyInfo> {
    let text = doc.plain_text();
    let category = categorize_rfp(&text);

    let mut claimed = HashSet::new();
    let mut sections = Vec::with_capacity(6);

    for (label, keywords) in [
        ("Scope of Work", SCOPE_KEYWORDS),
        ("Methodology", METHODOLOGY_KEYWORDS),
        ("Eligibility", ELIGIBILITY_KEYWORDS),
        ("Budget", BUDGET_KEYWORDS),
    ] {
        sections.push(KeyInfoSection {
            label: label.to_string(),
            details: sentences_with_keywords(&text, keywords, &mut claimed),
        });
    }

    let mut dates = Vec::new();
    for date in entity_extractor.entities(&text, "DATE") {
        if claimed.insert(date.clone()) {
            dates.push(date);
        }
    }
    sections.push(KeyInfoSection {
        label: "Deadlines".to_string(),
        details: dates,
    });

    sections.push(KeyInfoSection {
        label: "Selection Process".to_string(),
        details: sentences_with_keywords(&text, SELECTION_KEYWORDS, &mut claimed),
    });

    Ok(KeyInfo { category, sections })
}

/// Split text into sentences at whitespace following `.`, `!`, or `?`.
fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let bytes = text.as_bytes();

    let mut i = 0;
    while i < bytes.len() {
        if matches!(bytes[i], b'.' | b'!' | b'?') {
            let mut end = i + 1;
            while end < bytes.len() && bytes[end].is_ascii_whitespace() {
                end += 1;
            }
            if end > i + 1 {
                sentences.push(&text[start..=i]);
                start = end;
                i = end;
                continue;
            }
        }
        i += 1;
    }
    if start < text.len() {
        sentences.push(&text[start..]);
    }
    sentences
}

fn whole_word_pattern(keywords: &[&str]) -> Regex {
    let alternation = keywords
        .iter()
        .map(|k| regex::escape(k))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"(?i)\b(?:{alternation})\b")).unwrap()
}
