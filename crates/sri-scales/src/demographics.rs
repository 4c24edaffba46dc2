//! The demographics form catalog: the option lists the form collaborator
//! renders. Option values mirror the bracket enums' wire names.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::items::QuestionKind;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DemographicOption {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DemographicQuestion {
    pub id: String,
    pub text: String,
    pub kind: QuestionKind,
    pub options: Vec<DemographicOption>,
    pub required: bool,
}

pub fn demographic_questions() -> Vec<DemographicQuestion> {
    vec![
        question(
            "age",
            "What is your age?",
            true,
            &[
                ("14_17", "14–17"),
                ("18_24", "18–24"),
                ("25_34", "25–34"),
                ("35_44", "35–44"),
                ("45_54", "45–54"),
                ("55_plus", "55 or older"),
            ],
        ),
        question(
            "gender",
            "What is your gender?",
            true,
            &[
                ("male", "Male"),
                ("female", "Female"),
                ("non_binary", "Non-binary"),
                ("prefer_not_to_say", "Prefer not to say"),
            ],
        ),
        question(
            "relationship_status",
            "What is your relationship status?",
            true,
            &[
                ("single", "Single"),
                ("dating", "Dating"),
                ("married", "Married or partnered"),
                ("prefer_not_to_say", "Prefer not to say"),
            ],
        ),
        question(
            "sexual_activity",
            "How would you describe your recent sexual activity?",
            true,
            &[
                ("never", "I have never been sexually active"),
                ("past_year_none", "Not in the past year"),
                ("rarely", "Rarely"),
                ("occasionally", "Occasionally"),
                ("regularly", "Regularly"),
                ("frequently", "Frequently"),
            ],
        ),
        question(
            "religious_background",
            "What is your religious or cultural background?",
            false,
            &[
                ("none", "None"),
                ("christianity", "Christianity"),
                ("buddhism", "Buddhism"),
                ("islam", "Islam"),
                ("other", "Other"),
                ("prefer_not_to_say", "Prefer not to say"),
            ],
        ),
    ]
}

fn question(id: &str, text: &str, required: bool, options: &[(&str, &str)]) -> DemographicQuestion {
    DemographicQuestion {
        id: id.to_string(),
        text: text.to_string(),
        kind: QuestionKind::Multiple,
        options: options
            .iter()
            .map(|(value, label)| DemographicOption {
                value: value.to_string(),
                label: label.to_string(),
            })
            .collect(),
        required,
    }
}
