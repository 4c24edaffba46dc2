use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// Severity band for the composite index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum SriLevel {
    VeryLow,
    Low,
    Moderate,
    High,
    VeryHigh,
}

impl SriLevel {
    pub fn label(&self) -> &'static str {
        match self {
            SriLevel::VeryLow => "Very Low",
            SriLevel::Low => "Low",
            SriLevel::Moderate => "Moderate",
            SriLevel::High => "High",
            SriLevel::VeryHigh => "Very High",
        }
    }
}

/// The four standardized dimension scores that feed the composite index.
/// A dimension with no administered source scale contributes 0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DimensionScores {
    /// Erotophobia: aversion to sexual cues (SOS, reverse-keyed).
    pub sos_reversed: f64,
    pub sex_guilt: f64,
    pub sexual_shame: f64,
    /// Inhibition-over-excitation advantage: z(SIS) − z(SES), or the
    /// cognition-scale z for adapted batteries.
    pub sis_over_ses: f64,
}

/// Standardized score for one administered scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScaleScore {
    pub scale_id: String,
    pub raw_score: u32,
    pub z_score: f64,
    pub percentile: u8,
}

/// The composite Sexual Repression Index. Computed once per completed
/// session; a retake produces a new session and a new result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SriResult {
    /// 0–100.
    pub total_score: u8,
    pub z_score: f64,
    pub percentile: f64,
    pub level: SriLevel,
    pub dimension_scores: DimensionScores,
    pub scale_scores: Vec<ScaleScore>,
}

/// Full result payload handed back to the caller for display and storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentResults {
    pub session_id: Uuid,
    pub sri: SriResult,
    pub interpretation: Vec<String>,
    pub recommendations: Vec<String>,
    pub calculated_at: jiff::Timestamp,
}
