use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Age bracket from the demographics form. `Teen` (14–17) routes the
/// respondent to the minor-safe battery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum AgeBracket {
    #[serde(rename = "14_17")]
    Teen,
    #[serde(rename = "18_24")]
    From18To24,
    #[serde(rename = "25_34")]
    From25To34,
    #[serde(rename = "35_44")]
    From35To44,
    #[serde(rename = "45_54")]
    From45To54,
    #[serde(rename = "55_plus")]
    Over55,
    /// Catch-all for form values outside the known set. The selector's
    /// default rule applies to these rather than failing.
    #[serde(other, rename = "unspecified")]
    Unspecified,
}

/// Recent sexual-activity bracket. `Never` routes to the inexperienced
/// battery, `PastYearNone` to the short-form battery on quick assessments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ActivityBracket {
    Never,
    PastYearNone,
    Rarely,
    Occasionally,
    Regularly,
    Frequently,
    #[serde(other)]
    Unspecified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Gender {
    Male,
    Female,
    NonBinary,
    PreferNotToSay,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RelationshipStatus {
    Single,
    Dating,
    Married,
    PreferNotToSay,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ReligiousBackground {
    None,
    Christianity,
    Buddhism,
    Islam,
    Other,
    PreferNotToSay,
}

/// Respondent profile collected before the questionnaire. Immutable once
/// submitted; drives adaptive scale selection.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Demographics {
    pub age: AgeBracket,
    pub gender: Gender,
    pub relationship_status: RelationshipStatus,
    pub sexual_activity: ActivityBracket,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub religious_background: Option<ReligiousBackground>,
    pub consent_to_participate: bool,
}

impl Demographics {
    pub fn is_minor(&self) -> bool {
        self.age == AgeBracket::Teen
    }

    pub fn has_no_experience(&self) -> bool {
        self.sexual_activity == ActivityBracket::Never
    }
}
