//! Static scale definitions, one module per scale family.
//!
//! Question-id prefixes are disjoint across families so the scorer can
//! recognize what was administered from responses alone. Full-length forms
//! are built from their short form's question list, so shared items are the
//! same `Question` values in both variants.

pub mod adaptive;
pub mod bsas;
pub mod kiss9;
pub mod mosher;
pub mod sis_ses;
pub mod sos;

use crate::items::{
    frequency_options, likert_options, Question, QuestionKind, ScoreRange, ScoringKind,
    ScoringRule,
};

pub(crate) fn likert(id: &str, scale: &str, text: &str) -> Question {
    Question {
        id: id.to_string(),
        text: text.to_string(),
        scale: scale.to_string(),
        kind: QuestionKind::Likert,
        options: likert_options(),
        required: true,
        reverse: false,
    }
}

pub(crate) fn frequency(id: &str, scale: &str, text: &str) -> Question {
    Question {
        options: frequency_options(),
        ..likert(id, scale, text)
    }
}

/// Sum scoring for `count` five-point items: range [count, count*5].
pub(crate) fn sum_of(count: usize) -> ScoringRule {
    ScoringRule {
        kind: ScoringKind::Sum,
        range: ScoreRange {
            min: count as u32,
            max: count as u32 * 5,
        },
    }
}
