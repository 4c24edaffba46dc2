use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ScaleError;

/// One selectable answer for a questionnaire item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnswerOption {
    pub value: u8,
    pub label: String,
}

/// Agreement-keyed five-point options, valued 1–5.
pub fn likert_options() -> Vec<AnswerOption> {
    option_set(&[
        "Strongly disagree",
        "Disagree",
        "Neutral",
        "Agree",
        "Strongly agree",
    ])
}

/// Frequency-keyed five-point options, valued 1–5.
pub fn frequency_options() -> Vec<AnswerOption> {
    option_set(&["Never", "Rarely", "Sometimes", "Often", "Always"])
}

fn option_set(labels: &[&str]) -> Vec<AnswerOption> {
    labels
        .iter()
        .enumerate()
        .map(|(i, label)| AnswerOption {
            value: (i + 1) as u8,
            label: label.to_string(),
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum QuestionKind {
    Likert,
    /// Single-choice item; used only by the demographics form catalog.
    Multiple,
}

/// A questionnaire item. `reverse` items score `max + min − value`, where
/// the bounds come from the question's own option set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Question {
    pub id: String,
    pub text: String,
    pub scale: String,
    pub kind: QuestionKind,
    pub options: Vec<AnswerOption>,
    pub required: bool,
    #[serde(default)]
    pub reverse: bool,
}

impl Question {
    /// Scored value for a response, or `None` when the value is not among
    /// this question's declared options.
    pub fn score(&self, value: u8) -> Option<u32> {
        if !self.options.iter().any(|o| o.value == value) {
            return None;
        }

        if self.reverse {
            let max = self.options.iter().map(|o| o.value).max().unwrap_or(value);
            let min = self.options.iter().map(|o| o.value).min().unwrap_or(value);
            Some(u32::from(max + min - value))
        } else {
            Some(u32::from(value))
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreRange {
    pub min: u32,
    pub max: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ScoringKind {
    Sum,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoringRule {
    pub kind: ScoringKind,
    pub range: ScoreRange,
}

/// A named psychometric scale: an ordered item list plus its scoring rule.
/// Immutable after definition; built once at process start.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Scale {
    pub id: String,
    pub name: String,
    pub description: String,
    pub questions: Vec<Question>,
    pub scoring: ScoringRule,
}

impl Scale {
    pub fn question(&self, question_id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == question_id)
    }

    pub fn require_question(&self, question_id: &str) -> Result<&Question, ScaleError> {
        self.question(question_id)
            .ok_or_else(|| ScaleError::UnknownQuestion {
                scale_id: self.id.clone(),
                question_id: question_id.to_string(),
            })
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    pub fn contains(&self, question_id: &str) -> bool {
        self.questions.iter().any(|q| q.id == question_id)
    }
}
