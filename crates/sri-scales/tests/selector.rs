use sri_core::models::{
    ActivityBracket, AgeBracket, AssessmentKind, Demographics, Gender, RelationshipStatus,
};
use sri_scales::selector::{respondent_group, select_scales, RespondentGroup};
use sri_scales::{get_scale, ids};

fn demographics(age: AgeBracket, activity: ActivityBracket) -> Demographics {
    Demographics {
        age,
        gender: Gender::PreferNotToSay,
        relationship_status: RelationshipStatus::Single,
        sexual_activity: activity,
        religious_background: None,
        consent_to_participate: true,
    }
}

const ALL_AGES: [AgeBracket; 7] = [
    AgeBracket::Teen,
    AgeBracket::From18To24,
    AgeBracket::From25To34,
    AgeBracket::From35To44,
    AgeBracket::From45To54,
    AgeBracket::Over55,
    AgeBracket::Unspecified,
];

const ALL_ACTIVITY: [ActivityBracket; 7] = [
    ActivityBracket::Never,
    ActivityBracket::PastYearNone,
    ActivityBracket::Rarely,
    ActivityBracket::Occasionally,
    ActivityBracket::Regularly,
    ActivityBracket::Frequently,
    ActivityBracket::Unspecified,
];

#[test]
fn selection_is_deterministic_and_non_empty_for_all_profiles() {
    for age in ALL_AGES {
        for activity in ALL_ACTIVITY {
            for kind in [AssessmentKind::Quick, AssessmentKind::Full] {
                let demo = demographics(age, activity);
                let first = select_scales(&demo, kind);
                let second = select_scales(&demo, kind);

                assert!(!first.is_empty(), "empty plan for {age:?}/{activity:?}");
                assert_eq!(first, second, "non-deterministic for {age:?}/{activity:?}");

                for id in &first {
                    assert!(get_scale(id).is_some(), "plan names unknown scale {id}");
                }
            }
        }
    }
}

#[test]
fn minors_never_receive_adult_only_scales() {
    let adult_only = [
        ids::SIS_SES_SF,
        ids::SIS_SES_FULL,
        ids::MOSHER_GUILT,
        ids::MOSHER_GUILT_FULL,
        ids::BSAS_BRIEF,
    ];

    // Experience brackets must not override the age rule.
    for activity in ALL_ACTIVITY {
        for kind in [AssessmentKind::Quick, AssessmentKind::Full] {
            let plan = select_scales(&demographics(AgeBracket::Teen, activity), kind);
            for id in adult_only {
                assert!(!plan.contains(&id), "{id} offered to a minor");
            }
        }
    }
}

#[test]
fn teen_batteries() {
    let demo = demographics(AgeBracket::Teen, ActivityBracket::Never);

    assert_eq!(
        select_scales(&demo, AssessmentKind::Quick),
        vec![
            ids::TEEN_SEXUAL_ATTITUDES,
            ids::SEXUAL_COGNITION,
            ids::SIS_SES_ADAPTED,
            ids::SOS_SCREENING,
        ]
    );
    assert_eq!(
        select_scales(&demo, AssessmentKind::Full),
        vec![
            ids::TEEN_SEXUAL_ATTITUDES,
            ids::SEXUAL_COGNITION,
            ids::SIS_SES_ADAPTED,
            ids::SOS_FULL,
            ids::KISS9_SHAME,
        ]
    );
}

#[test]
fn inexperienced_adult_batteries() {
    let demo = demographics(AgeBracket::From25To34, ActivityBracket::Never);

    assert_eq!(
        select_scales(&demo, AssessmentKind::Quick),
        vec![
            ids::SEXUAL_COGNITION,
            ids::SIS_SES_ADAPTED,
            ids::MOSHER_GUILT,
            ids::KISS9_SHAME,
            ids::SOS_SCREENING,
        ]
    );
    assert_eq!(
        select_scales(&demo, AssessmentKind::Full),
        vec![
            ids::SEXUAL_COGNITION,
            ids::SIS_SES_ADAPTED,
            ids::MOSHER_GUILT_FULL,
            ids::KISS9_SHAME,
            ids::SOS_FULL,
            ids::BSAS_BRIEF,
        ]
    );
}

#[test]
fn low_activity_gets_short_forms_on_quick_and_full_battery_on_full() {
    let demo = demographics(AgeBracket::From35To44, ActivityBracket::PastYearNone);

    assert_eq!(
        select_scales(&demo, AssessmentKind::Quick),
        vec![
            ids::SIS_SES_SF,
            ids::MOSHER_GUILT,
            ids::KISS9_SHAME,
            ids::SOS_SCREENING,
        ]
    );
    assert_eq!(
        select_scales(&demo, AssessmentKind::Full),
        vec![
            ids::SIS_SES_FULL,
            ids::MOSHER_GUILT_FULL,
            ids::KISS9_SHAME,
            ids::SOS_FULL,
            ids::BSAS_BRIEF,
        ]
    );
}

#[test]
fn unrecognized_brackets_fall_back_to_the_standard_battery() {
    let demo = demographics(AgeBracket::Unspecified, ActivityBracket::Unspecified);

    assert_eq!(
        select_scales(&demo, AssessmentKind::Quick),
        select_scales(
            &demographics(AgeBracket::From25To34, ActivityBracket::Regularly),
            AssessmentKind::Quick
        )
    );
}

#[test]
fn respondent_group_precedence() {
    assert_eq!(
        respondent_group(&demographics(AgeBracket::Teen, ActivityBracket::Regularly)),
        RespondentGroup::Teen
    );
    assert_eq!(
        respondent_group(&demographics(AgeBracket::From18To24, ActivityBracket::Never)),
        RespondentGroup::Inexperienced
    );
    assert_eq!(
        respondent_group(&demographics(
            AgeBracket::From18To24,
            ActivityBracket::PastYearNone
        )),
        RespondentGroup::LowActivity
    );
    assert_eq!(
        respondent_group(&demographics(AgeBracket::Over55, ActivityBracket::Frequently)),
        RespondentGroup::Standard
    );

    assert!(!RespondentGroup::Teen.description().is_empty());
}

#[test]
fn unknown_form_values_deserialize_to_unspecified() {
    let age: AgeBracket = serde_json::from_str("\"101_plus\"").unwrap();
    assert_eq!(age, AgeBracket::Unspecified);

    let activity: ActivityBracket = serde_json::from_str("\"sometimes\"").unwrap();
    assert_eq!(activity, ActivityBracket::Unspecified);
}
