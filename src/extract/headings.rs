//! Section inference from layout signals.
//!
//! Headings in semi-structured documents are rarely tagged as such; what
//! survives decoding is boldness and font size. This module computes a
//! body-size baseline from the font-size histogram and treats any bold
//! run, or any run larger than the baseline, as a section heading. Every
//! run is then tagged with the section it falls under.

use crate::model::StyledRun;

/// Section label before the first heading is seen.
pub const GENERAL_SECTION: &str = "General";

/// A run tagged with the section it belongs to.
#[derive(Debug, Clone)]
pub struct TaggedRun {
    /// The source run.
    pub run: StyledRun,

    /// Section in effect when the run was encountered.
    pub section: String,

    /// Whether this run itself was judged a heading.
    pub is_heading: bool,
}

/// Font-size statistics for the body-size baseline.
#[derive(Debug, Clone, Default)]
pub struct FontProfile {
    // Sizes keyed at 0.1pt precision.
    histogram: Vec<(i32, usize)>,
}

impl FontProfile {
    /// Build a profile from the sizes observed across `runs`.
    pub fn from_runs(runs: &[StyledRun]) -> Self {
        let mut profile = Self::default();
        for run in runs {
            if let Some(size) = run.font_size_pt {
                profile.add_size(size);
            }
        }
        profile
    }

    /// Add a font size observation.
    pub fn add_size(&mut self, size: f32) {
        let key = (size * 10.0) as i32;
        match self.histogram.iter_mut().find(|(k, _)| *k == key) {
            Some((_, count)) => *count += 1,
            None => self.histogram.push((key, 1)),
        }
    }

    /// Most frequent observed size, or `default` when nothing carried a
    /// size. Ties break toward the first size observed.
    pub fn body_size(&self, default: f32) -> f32 {
        self.histogram
            .iter()
            .max_by_key(|(_, count)| *count)
            .map(|(key, _)| *key as f32 / 10.0)
            .unwrap_or(default)
    }
}

/// Tag every run with the section it falls under.
///
/// A run is a heading iff it is bold, or carries a font size larger than
/// the body baseline. Headings update the section cursor (trailing colons
/// stripped, then title-cased) and are emitted with `is_heading = true`;
/// they never become expectation candidates. Output length and order
/// match the input; empty runs never flip the cursor.
pub fn infer_sections(runs: &[StyledRun], default_body_size: f32) -> Vec<TaggedRun> {
    let body_size = FontProfile::from_runs(runs).body_size(default_body_size);
    log::debug!("body font size baseline: {body_size}pt");

    let mut current_section = GENERAL_SECTION.to_string();
    let mut tagged = Vec::with_capacity(runs.len());

    for run in runs {
        let is_heading = !run.is_empty()
            && (run.bold || run.font_size_pt.map(|s| s > body_size).unwrap_or(false));

        if is_heading {
            current_section = title_case(run.text.trim_end_matches(':'));
            log::debug!("section -> {current_section}");
        }

        tagged.push(TaggedRun {
            run: run.clone(),
            section: current_section.clone(),
            is_heading,
        });
    }

    tagged
}

/// Title-case a phrase: first letter of each whitespace-separated word
/// uppercased, the rest lowercased.
pub(crate) fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(|c| c.to_lowercase())).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
