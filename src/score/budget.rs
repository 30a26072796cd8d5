//! Budget rate checking against the standard rate card.

use regex::Regex;

use crate::extract::title_case;
use crate::model::DocumentModel;

/// Compare role rates quoted in the budget section against the standard
/// rate card.
///
/// Paragraphs mentioning "budget" are concatenated; for each role on the
/// card that appears there, the first number following the role name is
/// read as its quoted rate. One message per mismatch, in card order.
pub fn budget_check(doc: &DocumentModel, standard_rates: &[(String, u32)]) -> Vec<String> {
    let budget_text = doc
        .paragraphs
        .iter()
        .map(|p| p.text())
        .filter(|t| t.contains("budget"))
        .collect::<Vec<_>>()
        .join("\n");

    let mut mismatches = Vec::new();

    for (role, standard) in standard_rates {
        if !budget_text.contains(role.as_str()) {
            continue;
        }
        let pattern = Regex::new(&format!(r"{}\D*?(\d+)", regex::escape(role))).unwrap();
        let Some(quoted) = pattern
            .captures(&budget_text)
            .and_then(|c| c.get(1))
            .and_then(|m| m.as_str().parse::<u32>().ok())
        else {
            continue;
        };
        if quoted != *standard {
            mismatches.push(format!(
                "{} rate of ${quoted} does not match standard of ${standard}.",
                title_case(role)
            ));
        }
    }

    mismatches
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EvaluationConfig;
    use crate::model::DocumentKind;

    fn rates() -> Vec<(String, u32)> {
        EvaluationConfig::default().standard_rates
    }

    #[test]
    fn test_mismatched_rate_reported() {
        let doc = DocumentModel::from_texts(
            DocumentKind::Docx,
            &["Budget: the project director is billed at 1500 per day."],
        );
        let mismatches = budget_check(&doc, &rates());
        assert_eq!(
            mismatches,
            vec!["Project Director rate of $1500 does not match standard of $1400."]
        );
    }

    #[test]
    fn test_matching_rates_pass() {
        let doc = DocumentModel::from_texts(
            DocumentKind::Docx,
            &["Budget: project director 1400, consultant 850."],
        );
        assert!(budget_check(&doc, &rates()).is_empty());
    }

    #[test]
    fn test_roles_outside_budget_paragraphs_ignored() {
        // The rate appears in a paragraph that never mentions "budget".
        let doc = DocumentModel::from_texts(
            DocumentKind::Docx,
            &["Our project director charges 9999 per day."],
        );
        assert!(budget_check(&doc, &rates()).is_empty());
    }

    #[test]
    fn test_role_without_number_skipped() {
        let doc = DocumentModel::from_texts(
            DocumentKind::Docx,
            &["Budget: the analyst joins part-time."],
        );
        assert!(budget_check(&doc, &rates()).is_empty());
    }

    #[test]
    fn test_multiple_mismatches_in_card_order() {
        let doc = DocumentModel::from_texts(
            DocumentKind::Docx,
            &["Budget: project manager at 1300 and analyst at 650."],
        );
        let mismatches = budget_check(&doc, &rates());
        assert_eq!(mismatches.len(), 2);
        assert!(mismatches[0].starts_with("Project Manager"));
        assert!(mismatches[1].starts_with("Analyst"));
    }
}
