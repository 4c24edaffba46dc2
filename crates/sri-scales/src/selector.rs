//! Adaptive scale selection: a pure decision table over the respondent's
//! demographics and the requested granularity.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use sri_core::models::{ActivityBracket, AssessmentKind, Demographics};

use crate::ids;
use crate::{full_battery, quick_battery};

/// Which branch of the decision table a respondent falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RespondentGroup {
    Teen,
    Inexperienced,
    LowActivity,
    Standard,
}

impl RespondentGroup {
    pub fn description(&self) -> &'static str {
        match self {
            RespondentGroup::Teen => {
                "Age-appropriate battery for respondents aged 14–17, with behavioral items removed."
            }
            RespondentGroup::Inexperienced => {
                "Adapted battery for adults without sexual experience, focused on cognition and attitudes."
            }
            RespondentGroup::LowActivity => {
                "Standard short-form battery for respondents with little recent sexual activity."
            }
            RespondentGroup::Standard => "Standard battery for sexually experienced adults.",
        }
    }
}

pub fn respondent_group(demographics: &Demographics) -> RespondentGroup {
    if demographics.is_minor() {
        return RespondentGroup::Teen;
    }
    if demographics.has_no_experience() {
        return RespondentGroup::Inexperienced;
    }
    if demographics.sexual_activity == ActivityBracket::PastYearNone {
        return RespondentGroup::LowActivity;
    }
    RespondentGroup::Standard
}

/// Return the ordered scale ids to administer. Deterministic and
/// side-effect free; unrecognized demographic brackets fall through to the
/// standard battery rather than failing.
pub fn select_scales(demographics: &Demographics, kind: AssessmentKind) -> Vec<&'static str> {
    match (respondent_group(demographics), kind) {
        // Rule 1: minors get the adapted battery regardless of experience.
        (RespondentGroup::Teen, AssessmentKind::Quick) => vec![
            ids::TEEN_SEXUAL_ATTITUDES,
            ids::SEXUAL_COGNITION,
            ids::SIS_SES_ADAPTED,
            ids::SOS_SCREENING,
        ],
        (RespondentGroup::Teen, AssessmentKind::Full) => vec![
            ids::TEEN_SEXUAL_ATTITUDES,
            ids::SEXUAL_COGNITION,
            ids::SIS_SES_ADAPTED,
            ids::SOS_FULL,
            ids::KISS9_SHAME,
        ],
        // Rule 2: adults without experience get the cognition-based battery.
        (RespondentGroup::Inexperienced, AssessmentKind::Quick) => vec![
            ids::SEXUAL_COGNITION,
            ids::SIS_SES_ADAPTED,
            ids::MOSHER_GUILT,
            ids::KISS9_SHAME,
            ids::SOS_SCREENING,
        ],
        (RespondentGroup::Inexperienced, AssessmentKind::Full) => vec![
            ids::SEXUAL_COGNITION,
            ids::SIS_SES_ADAPTED,
            ids::MOSHER_GUILT_FULL,
            ids::KISS9_SHAME,
            ids::SOS_FULL,
            ids::BSAS_BRIEF,
        ],
        // Rule 3: low recent activity keeps the quick assessment short.
        (RespondentGroup::LowActivity, AssessmentKind::Quick) => quick_battery(),
        // Rule 4: the default standard battery.
        (RespondentGroup::LowActivity | RespondentGroup::Standard, AssessmentKind::Full) => {
            full_battery()
        }
        (RespondentGroup::Standard, AssessmentKind::Quick) => quick_battery(),
    }
}
