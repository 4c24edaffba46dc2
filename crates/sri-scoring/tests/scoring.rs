use std::collections::BTreeMap;

use uuid::Uuid;

use sri_core::error::CoreError;
use sri_core::models::{
    ActivityBracket, AgeBracket, AssessmentKind, AssessmentSession, Demographics, Gender,
    RelationshipStatus, Response, SriLevel,
};
use sri_scales::{get_scale, ids};
use sri_scoring::levels::{classify, LEVEL_BANDS};
use sri_scoring::scorer::{DimensionSources, FormVariant, InhibitionSource, ShameSource};
use sri_scoring::stats::z_score;
use sri_scoring::{NormativeData, Scorer, ScoringError};

fn resp(question_id: &str, value: u8) -> Response {
    Response {
        question_id: question_id.to_string(),
        value,
        timestamp: jiff::Timestamp::now(),
    }
}

fn answer_all(scale_id: &str, value: u8) -> Vec<Response> {
    get_scale(scale_id)
        .unwrap()
        .questions
        .iter()
        .map(|q| resp(&q.id, value))
        .collect()
}

fn demographics(age: AgeBracket, activity: ActivityBracket) -> Demographics {
    Demographics {
        age,
        gender: Gender::Female,
        relationship_status: RelationshipStatus::Dating,
        sexual_activity: activity,
        religious_background: None,
        consent_to_participate: true,
    }
}

/// A norm table centered on the all-midpoint SIS/SES-SF raw sums.
fn midpoint_norms() -> NormativeData {
    let mut means = BTreeMap::new();
    let mut sds = BTreeMap::new();
    means.insert("ses_total".to_string(), 12.0);
    sds.insert("ses_total".to_string(), 3.7);
    means.insert("sis_total".to_string(), 30.0);
    sds.insert("sis_total".to_string(), 8.9);

    NormativeData {
        sample_size: 100,
        means,
        standard_deviations: sds,
        updated_at: jiff::Timestamp::now(),
    }
}

#[test]
fn empty_responses_fail_with_no_responses() {
    let scorer = Scorer::default();
    let session_id = Uuid::new_v4();

    assert!(matches!(
        scorer.score_assessment(session_id, &[], &[ids::SIS_SES_SF]),
        Err(ScoringError::NoResponses)
    ));
    assert!(matches!(
        scorer.score_responses(session_id, &[]),
        Err(ScoringError::NoResponses)
    ));
}

#[test]
fn responses_matching_no_scale_fail_with_insufficient_data() {
    let scorer = Scorer::default();
    let responses = vec![resp("zzz_1", 3), resp("zzz_2", 4)];

    assert!(matches!(
        scorer.score_responses(Uuid::new_v4(), &responses),
        Err(ScoringError::InsufficientData)
    ));
}

#[test]
fn midpoint_short_form_answers_standardize_to_zero_under_midpoint_norms() {
    let scorer = Scorer::new(midpoint_norms());
    let responses = answer_all(ids::SIS_SES_SF, 3);

    let results = scorer
        .score_assessment(Uuid::new_v4(), &responses, &[ids::SIS_SES_SF])
        .unwrap();

    // SES raw 4×3 = 12, SIS raw 10×3 = 30; both sit on the norm mean.
    let dims = results.sri.dimension_scores;
    assert!(dims.sis_over_ses.abs() < 1e-12);
    assert_eq!(dims.sos_reversed, 0.0);
    assert_eq!(dims.sex_guilt, 0.0);
    assert_eq!(dims.sexual_shame, 0.0);

    assert!((results.sri.z_score).abs() < 1e-12);
    assert_eq!(results.sri.total_score, 50);
    assert_eq!(results.sri.level, SriLevel::Moderate);

    assert_eq!(results.sri.scale_scores.len(), 1);
    assert_eq!(results.sri.scale_scores[0].scale_id, ids::SIS_SES_SF);
    assert_eq!(results.sri.scale_scores[0].raw_score, 42);
}

#[test]
fn full_form_administration_is_detected_and_uses_full_form_norms() {
    let responses = answer_all(ids::SIS_SES_FULL, 3);

    let sources = DimensionSources::infer(&responses);
    assert_eq!(
        sources.inhibition,
        Some(InhibitionSource::SisSes {
            ses: FormVariant::Full,
            sis: FormVariant::Full,
        })
    );

    let scorer = Scorer::default();
    let results = scorer.score_responses(Uuid::new_v4(), &responses).unwrap();

    // SES raw 16×3 = 48, SIS raw 29×3 = 87, against the full-form norms.
    let expected = z_score(87.0, 87.5, 18.3) - z_score(48.0, 42.8, 9.2);
    assert!((results.sri.dimension_scores.sis_over_ses - expected).abs() < 1e-9);
}

#[test]
fn short_form_counts_stay_on_short_form_norms() {
    let responses = answer_all(ids::SIS_SES_SF, 3);
    let sources = DimensionSources::infer(&responses);

    assert_eq!(
        sources.inhibition,
        Some(InhibitionSource::SisSes {
            ses: FormVariant::Short,
            sis: FormVariant::Short,
        })
    );
}

#[test]
fn sos_and_guilt_variants_detected_at_short_form_length() {
    let screening = answer_all(ids::SOS_SCREENING, 2);
    assert_eq!(
        DimensionSources::infer(&screening).sos,
        Some(FormVariant::Short)
    );

    let full = answer_all(ids::SOS_FULL, 2);
    assert_eq!(DimensionSources::infer(&full).sos, Some(FormVariant::Full));

    let brief_guilt = answer_all(ids::MOSHER_GUILT, 2);
    assert_eq!(
        DimensionSources::infer(&brief_guilt).guilt,
        Some(FormVariant::Short)
    );

    let full_guilt = answer_all(ids::MOSHER_GUILT_FULL, 2);
    assert_eq!(
        DimensionSources::infer(&full_guilt).guilt,
        Some(FormVariant::Full)
    );
}

#[test]
fn kiss9_preferred_over_teen_attitudes_for_shame() {
    let mut responses = answer_all(ids::TEEN_SEXUAL_ATTITUDES, 3);
    responses.extend(answer_all(ids::KISS9_SHAME, 3));

    assert_eq!(
        DimensionSources::infer(&responses).shame,
        Some(ShameSource::Kiss9)
    );

    // Plan order must not matter either: teen listed before KISS-9.
    let plan = [
        ids::TEEN_SEXUAL_ATTITUDES,
        ids::SEXUAL_COGNITION,
        ids::SIS_SES_ADAPTED,
        ids::SOS_FULL,
        ids::KISS9_SHAME,
    ];
    let sources = DimensionSources::from_plan(&plan);
    assert_eq!(sources.shame, Some(ShameSource::Kiss9));
    assert_eq!(sources.sos, Some(FormVariant::Full));
    assert_eq!(sources.inhibition, Some(InhibitionSource::Cognition));
    assert_eq!(sources.guilt, None);
}

#[test]
fn reverse_items_are_applied_in_dimension_sums() {
    let scorer = Scorer::default();
    let teen = get_scale(ids::TEEN_SEXUAL_ATTITUDES).unwrap();

    // tsa_3 is reverse-keyed: answering 1 scores 5.
    let responses = vec![resp("tsa_3", 1)];
    assert_eq!(scorer.raw_score(&responses, teen), 5);
}

#[test]
fn out_of_range_values_are_discarded_not_fatal() {
    let scorer = Scorer::default();
    let scale = get_scale(ids::SIS_SES_SF).unwrap();

    let responses = vec![resp("ses_1", 3), resp("ses_2", 9)];
    assert_eq!(scorer.raw_score(&responses, scale), 3);
}

#[test]
fn unanswered_scale_raw_score_is_zero() {
    let scorer = Scorer::default();
    let scale = get_scale(ids::BSAS_BRIEF).unwrap();
    assert_eq!(scorer.raw_score(&[], scale), 0);
    assert_eq!(scorer.raw_score(&[resp("mg_1", 3)], scale), 0);
}

#[test]
fn unknown_plan_ids_are_skipped() {
    let scorer = Scorer::new(midpoint_norms());
    let responses = answer_all(ids::SIS_SES_SF, 3);

    let results = scorer
        .score_assessment(Uuid::new_v4(), &responses, &[ids::SIS_SES_SF, "bogus_scale"])
        .unwrap();

    assert_eq!(results.sri.scale_scores.len(), 1);
}

#[test]
fn unanswered_scales_stay_out_of_the_scale_score_list() {
    let scorer = Scorer::default();
    let responses = answer_all(ids::SIS_SES_SF, 3);

    let plan = [
        ids::SIS_SES_SF,
        ids::MOSHER_GUILT,
        ids::KISS9_SHAME,
        ids::SOS_SCREENING,
    ];
    let results = scorer
        .score_assessment(Uuid::new_v4(), &responses, &plan)
        .unwrap();

    let listed: Vec<&str> = results
        .sri
        .scale_scores
        .iter()
        .map(|s| s.scale_id.as_str())
        .collect();
    assert_eq!(listed, vec![ids::SIS_SES_SF]);
}

#[test]
fn planned_but_unanswered_scales_contribute_zero_dimensions() {
    let scorer = Scorer::default();
    let plan = [
        ids::SIS_SES_SF,
        ids::MOSHER_GUILT,
        ids::KISS9_SHAME,
        ids::SOS_SCREENING,
    ];
    // Only the guilt scale is answered; the other three planned scales
    // must contribute 0, not a standardized zero raw.
    let responses = answer_all(ids::MOSHER_GUILT, 3);

    let results = scorer
        .score_assessment(Uuid::new_v4(), &responses, &plan)
        .unwrap();

    let dims = results.sri.dimension_scores;
    assert_eq!(dims.sos_reversed, 0.0);
    assert_eq!(dims.sexual_shame, 0.0);
    assert_eq!(dims.sis_over_ses, 0.0);

    let guilt_z = z_score(30.0, 25.6, 7.8);
    assert!((dims.sex_guilt - guilt_z).abs() < 1e-9);
    assert!((results.sri.z_score - guilt_z / 4.0).abs() < 1e-9);
}

#[test]
fn unanswered_sis_ses_on_the_plan_yields_zero_inhibition() {
    let scorer = Scorer::default();
    let plan = [ids::SIS_SES_SF, ids::KISS9_SHAME];
    let responses = answer_all(ids::KISS9_SHAME, 3);

    let results = scorer
        .score_assessment(Uuid::new_v4(), &responses, &plan)
        .unwrap();

    assert_eq!(results.sri.dimension_scores.sis_over_ses, 0.0);
}

#[test]
fn classification_is_total_over_the_score_range() {
    for score in 0..=100u8 {
        let matching: Vec<_> = LEVEL_BANDS
            .iter()
            .filter(|band| {
                score >= band.min && (score < band.max || (band.max == 100 && score == 100))
            })
            .collect();
        assert_eq!(matching.len(), 1, "score {score} matches {} bands", matching.len());
        assert_eq!(classify(score), matching[0].level, "band mismatch at {score}");
    }

    assert_eq!(classify(0), SriLevel::VeryLow);
    assert_eq!(classify(19), SriLevel::VeryLow);
    assert_eq!(classify(20), SriLevel::Low);
    assert_eq!(classify(40), SriLevel::Moderate);
    assert_eq!(classify(60), SriLevel::High);
    assert_eq!(classify(80), SriLevel::VeryHigh);
    assert_eq!(classify(99), SriLevel::VeryHigh);
    assert_eq!(classify(100), SriLevel::VeryHigh);
}

#[test]
fn composite_is_the_mean_of_exactly_four_dimensions() {
    let scorer = Scorer::default();
    let responses = answer_all(ids::MOSHER_GUILT, 5);

    let results = scorer
        .score_assessment(Uuid::new_v4(), &responses, &[ids::MOSHER_GUILT])
        .unwrap();

    // Only guilt has data; the other three contribute their zeros.
    let guilt_z = z_score(50.0, 25.6, 7.8);
    assert!((results.sri.dimension_scores.sex_guilt - guilt_z).abs() < 1e-9);
    assert!((results.sri.z_score - guilt_z / 4.0).abs() < 1e-9);
}

#[test]
fn total_score_stays_within_bounds_at_the_extremes() {
    let scorer = Scorer::default();

    let mut high = answer_all(ids::MOSHER_GUILT_FULL, 5);
    high.extend(answer_all(ids::SOS_FULL, 5));
    high.extend(answer_all(ids::KISS9_SHAME, 5));
    let results = scorer.score_responses(Uuid::new_v4(), &high).unwrap();
    assert!(results.sri.total_score <= 100);
    assert_eq!(results.sri.level, SriLevel::VeryHigh);

    let low = answer_all(ids::MOSHER_GUILT, 1);
    let results = scorer.score_responses(Uuid::new_v4(), &low).unwrap();
    assert!(results.sri.total_score <= 100);
    assert!(results.sri.z_score < 0.0);
}

#[test]
fn report_text_is_attached_to_results() {
    let scorer = Scorer::default();
    let responses = answer_all(ids::MOSHER_GUILT_FULL, 5);

    let results = scorer.score_responses(Uuid::new_v4(), &responses).unwrap();

    assert!(!results.interpretation.is_empty());
    assert!(results.interpretation[0].contains(&results.sri.total_score.to_string()));
    // Guilt is far above the reference mean, so the guilt-specific
    // recommendation must be present alongside the standing disclaimer.
    assert!(results.recommendations.iter().any(|r| r.contains("guilt")));
    assert!(results
        .recommendations
        .iter()
        .any(|r| r.contains("not a clinical diagnosis")));
}

#[test]
fn session_flow_scores_through_the_selector_plan() {
    let demo = demographics(AgeBracket::From25To34, ActivityBracket::Regularly);
    let mut session = AssessmentSession::begin(AssessmentKind::Quick, demo).unwrap();

    for response in answer_all(ids::SIS_SES_SF, 3) {
        session.record_response(response);
    }
    // Changing an answer overwrites the earlier entry.
    session.record_response(resp("ses_1", 5));
    assert_eq!(session.responses.len(), 14);

    let scorer = Scorer::default();
    let results = scorer.score_session(&session).unwrap();
    assert_eq!(results.session_id, session.id);

    session.complete(results);
    assert!(session.completed);
    assert!(session.end_time.is_some());
    assert!(session.results.is_some());
}

#[test]
fn sessions_require_consent() {
    let mut demo = demographics(AgeBracket::From25To34, ActivityBracket::Regularly);
    demo.consent_to_participate = false;

    assert!(matches!(
        AssessmentSession::begin(AssessmentKind::Quick, demo),
        Err(CoreError::MissingConsent)
    ));
}

#[test]
fn swapped_norms_change_standardization_without_code_changes() {
    let mut scorer = Scorer::default();
    let responses = answer_all(ids::SIS_SES_SF, 3);

    let baseline = scorer
        .score_assessment(Uuid::new_v4(), &responses, &[ids::SIS_SES_SF])
        .unwrap();

    scorer.replace_norms(midpoint_norms());
    let recalibrated = scorer
        .score_assessment(Uuid::new_v4(), &responses, &[ids::SIS_SES_SF])
        .unwrap();

    assert!(recalibrated.sri.dimension_scores.sis_over_ses.abs() < 1e-12);
    assert_ne!(
        baseline.sri.dimension_scores.sis_over_ses,
        recalibrated.sri.dimension_scores.sis_over_ses
    );
}
