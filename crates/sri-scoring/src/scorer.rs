use uuid::Uuid;

use sri_core::models::{
    AssessmentResults, AssessmentSession, DimensionScores, Response, ScaleScore, SriResult,
};
use sri_scales::items::Scale;
use sri_scales::scales::adaptive::{SEXUAL_COGNITION, SIS_SES_ADAPTED, TEEN_SEXUAL_ATTITUDES};
use sri_scales::scales::kiss9::KISS9_SHAME;
use sri_scales::scales::mosher::{MOSHER_GUILT, MOSHER_GUILT_FULL};
use sri_scales::scales::sis_ses::{SIS_SES_FULL, SIS_SES_SF};
use sri_scales::scales::sos::{SOS_FULL, SOS_SCREENING};
use sri_scales::{all_scales, get_scale, ids, selector};

use crate::error::ScoringError;
use crate::levels;
use crate::norms::{self, NormativeData};
use crate::report;
use crate::stats::{normal_cdf, percentile_of, z_score};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormVariant {
    Short,
    Full,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShameSource {
    Kiss9,
    TeenAttitudes,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InhibitionSource {
    /// Adapted batteries: cognition and adapted-inhibition items summed.
    Cognition,
    /// Standard batteries: z(SIS) − z(SES). The SES and SIS variants are
    /// tracked separately because the inference shim detects them from
    /// independent item counts.
    SisSes { ses: FormVariant, sis: FormVariant },
}

/// Which catalog scale feeds each of the four dimensions. The plan-based
/// constructor is authoritative; `infer` is the compatibility shim for
/// callers that only have responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DimensionSources {
    pub sos: Option<FormVariant>,
    pub guilt: Option<FormVariant>,
    pub shame: Option<ShameSource>,
    pub inhibition: Option<InhibitionSource>,
}

impl DimensionSources {
    /// Resolve sources from the adaptive selector's output. Unknown scale
    /// ids are logged and skipped.
    pub fn from_plan(plan: &[&str]) -> Self {
        let mut sources = Self::default();

        for &scale_id in plan {
            match scale_id {
                ids::SOS_SCREENING => sources.sos = Some(FormVariant::Short),
                ids::SOS_FULL => sources.sos = Some(FormVariant::Full),
                ids::MOSHER_GUILT => sources.guilt = Some(FormVariant::Short),
                ids::MOSHER_GUILT_FULL => sources.guilt = Some(FormVariant::Full),
                ids::KISS9_SHAME => sources.shame = Some(ShameSource::Kiss9),
                // KISS-9 is preferred when both shame sources were administered.
                ids::TEEN_SEXUAL_ATTITUDES => {
                    sources.shame.get_or_insert(ShameSource::TeenAttitudes);
                }
                ids::SEXUAL_COGNITION | ids::SIS_SES_ADAPTED => {
                    sources.inhibition = Some(InhibitionSource::Cognition);
                }
                ids::SIS_SES_SF => {
                    if sources.inhibition != Some(InhibitionSource::Cognition) {
                        sources.inhibition = Some(InhibitionSource::SisSes {
                            ses: FormVariant::Short,
                            sis: FormVariant::Short,
                        });
                    }
                }
                ids::SIS_SES_FULL => {
                    if sources.inhibition != Some(InhibitionSource::Cognition) {
                        sources.inhibition = Some(InhibitionSource::SisSes {
                            ses: FormVariant::Full,
                            sis: FormVariant::Full,
                        });
                    }
                }
                // Contributes to the per-scale list but to no dimension.
                ids::BSAS_BRIEF => {}
                other => {
                    tracing::warn!(scale_id = other, "unknown scale id in plan; skipping");
                }
            }
        }

        sources
    }

    /// Detect sources from response-id prefixes alone. Variant cutoffs are
    /// the short form's declared item counts: more matching responses than
    /// the short form can hold means the full form was administered.
    pub fn infer(responses: &[Response]) -> Self {
        let count = |prefix: &str| {
            responses
                .iter()
                .filter(|r| r.question_id.starts_with(prefix))
                .count()
        };

        let sos = match count("sos_") {
            0 => None,
            n if n > SOS_SCREENING.question_count() => Some(FormVariant::Full),
            _ => Some(FormVariant::Short),
        };

        let guilt = match count("mg_") {
            0 => None,
            n if n > MOSHER_GUILT.question_count() => Some(FormVariant::Full),
            _ => Some(FormVariant::Short),
        };

        let shame = if count("ks_") > 0 {
            Some(ShameSource::Kiss9)
        } else if count("tsa_") > 0 {
            Some(ShameSource::TeenAttitudes)
        } else {
            None
        };

        let ses_short_len = prefix_len(&SIS_SES_SF, "ses_");
        let sis_short_len = prefix_len(&SIS_SES_SF, "sis1_") + prefix_len(&SIS_SES_SF, "sis2_");
        let ses_count = count("ses_");
        let sis_count = count("sis1_") + count("sis2_");

        let inhibition = if count("sc_") > 0 || count("sisa_") > 0 {
            Some(InhibitionSource::Cognition)
        } else if ses_count + sis_count > 0 {
            Some(InhibitionSource::SisSes {
                ses: if ses_count <= ses_short_len {
                    FormVariant::Short
                } else {
                    FormVariant::Full
                },
                sis: if sis_count <= sis_short_len {
                    FormVariant::Short
                } else {
                    FormVariant::Full
                },
            })
        } else {
            None
        };

        Self {
            sos,
            guilt,
            shame,
            inhibition,
        }
    }
}

fn prefix_len(scale: &Scale, prefix: &str) -> usize {
    scale
        .questions
        .iter()
        .filter(|q| q.id.starts_with(prefix))
        .count()
}

/// The scoring engine. Holds the norm table as constructor state; replace
/// it wholesale to recalibrate, never field by field.
#[derive(Debug, Clone)]
pub struct Scorer {
    norms: NormativeData,
}

impl Default for Scorer {
    fn default() -> Self {
        Self::new(NormativeData::reference())
    }
}

impl Scorer {
    pub fn new(norms: NormativeData) -> Self {
        Self { norms }
    }

    pub fn norms(&self) -> &NormativeData {
        &self.norms
    }

    pub fn replace_norms(&mut self, norms: NormativeData) {
        self.norms = norms;
    }

    /// Validated raw sum for one scale. Responses whose value is outside
    /// the question's declared options are discarded and logged; reverse
    /// items score `max + min − value`. Returns 0 when nothing matches.
    pub fn raw_score(&self, responses: &[Response], scale: &Scale) -> u32 {
        self.raw_sum(responses, scale, |_| true)
    }

    fn raw_sum(
        &self,
        responses: &[Response],
        scale: &Scale,
        include: impl Fn(&str) -> bool,
    ) -> u32 {
        let mut total = 0u32;

        for response in responses {
            let Some(question) = scale.question(&response.question_id) else {
                continue;
            };
            if !include(&question.id) {
                continue;
            }

            match question.score(response.value) {
                Some(scored) => total += scored,
                None => {
                    tracing::warn!(
                        question_id = %question.id,
                        value = response.value,
                        "response value outside declared options; discarding"
                    );
                }
            }
        }

        total
    }

    /// Standardize a dimension raw sum. A raw sum of 0 means no matching
    /// responses (both stock option sets start at 1), and a scale that was
    /// planned but never answered contributes 0, not a standardized zero.
    fn standardized(&self, raw: u32, fallback: norms::NormFallback) -> f64 {
        if raw == 0 {
            return 0.0;
        }
        let norm = self.norms.norm_or(fallback);
        z_score(f64::from(raw), norm.mean, norm.std_dev)
    }

    fn dimension_scores(&self, responses: &[Response], sources: DimensionSources) -> DimensionScores {
        let sos_reversed = match sources.sos {
            None => 0.0,
            Some(variant) => {
                let (scale, fallback) = match variant {
                    FormVariant::Short => (&*SOS_SCREENING, norms::SOS_SCREENING),
                    FormVariant::Full => (&*SOS_FULL, norms::SOS_FULL),
                };
                self.standardized(self.raw_score(responses, scale), fallback)
            }
        };

        let sex_guilt = match sources.guilt {
            None => 0.0,
            Some(variant) => {
                let (scale, fallback) = match variant {
                    FormVariant::Short => (&*MOSHER_GUILT, norms::GUILT_SHORT),
                    FormVariant::Full => (&*MOSHER_GUILT_FULL, norms::GUILT_FULL),
                };
                self.standardized(self.raw_score(responses, scale), fallback)
            }
        };

        let sexual_shame = match sources.shame {
            None => 0.0,
            Some(source) => {
                let (scale, fallback) = match source {
                    ShameSource::Kiss9 => (&*KISS9_SHAME, norms::SHAME),
                    ShameSource::TeenAttitudes => (&*TEEN_SEXUAL_ATTITUDES, norms::TEEN_SHAME),
                };
                self.standardized(self.raw_score(responses, scale), fallback)
            }
        };

        let sis_over_ses = match sources.inhibition {
            None => 0.0,
            Some(InhibitionSource::Cognition) => {
                let raw = self.raw_score(responses, &SEXUAL_COGNITION)
                    + self.raw_score(responses, &SIS_SES_ADAPTED);
                self.standardized(raw, norms::COGNITION)
            }
            Some(InhibitionSource::SisSes { ses, sis }) => {
                let (ses_scale, ses_fallback) = match ses {
                    FormVariant::Short => (&*SIS_SES_SF, norms::SES_SF),
                    FormVariant::Full => (&*SIS_SES_FULL, norms::SES_FULL),
                };
                let (sis_scale, sis_fallback) = match sis {
                    FormVariant::Short => (&*SIS_SES_SF, norms::SIS_SF),
                    FormVariant::Full => (&*SIS_SES_FULL, norms::SIS_FULL),
                };

                let ses_raw = self.raw_sum(responses, ses_scale, |id| id.starts_with("ses_"));
                let sis_raw = self.raw_sum(responses, sis_scale, |id| {
                    id.starts_with("sis1_") || id.starts_with("sis2_")
                });

                if ses_raw + sis_raw == 0 {
                    0.0
                } else {
                    let ses_norm = self.norms.norm_or(ses_fallback);
                    let sis_norm = self.norms.norm_or(sis_fallback);

                    z_score(f64::from(sis_raw), sis_norm.mean, sis_norm.std_dev)
                        - z_score(f64::from(ses_raw), ses_norm.mean, ses_norm.std_dev)
                }
            }
        };

        DimensionScores {
            sos_reversed,
            sex_guilt,
            sexual_shame,
            sis_over_ses,
        }
    }

    /// Standardized scores for every administered scale. A scale enters the
    /// list only when its raw score is positive; both stock option sets
    /// start at 1, so any answered scale qualifies.
    fn scale_scores(&self, responses: &[Response], scale_list: &[&Scale]) -> Vec<ScaleScore> {
        let mut scores = Vec::new();

        for scale in scale_list {
            let raw = self.raw_score(responses, scale);
            if raw == 0 {
                continue;
            }

            let norm = self.norms.scale_norm(&scale.id);
            let z = z_score(f64::from(raw), norm.mean, norm.std_dev);

            scores.push(ScaleScore {
                scale_id: scale.id.clone(),
                raw_score: raw,
                z_score: z,
                percentile: percentile_of(z).round() as u8,
            });
        }

        scores
    }

    fn composite(dimension_scores: DimensionScores) -> SriResult {
        // Equal weights over exactly four dimensions; a dimension with no
        // administered source contributes its 0.
        let composite_z = (dimension_scores.sos_reversed
            + dimension_scores.sex_guilt
            + dimension_scores.sexual_shame
            + dimension_scores.sis_over_ses)
            / 4.0;

        let percentile = normal_cdf(composite_z) * 100.0;
        let total_score = percentile.clamp(0.0, 100.0).round() as u8;

        SriResult {
            total_score,
            z_score: composite_z,
            percentile,
            level: levels::classify(total_score),
            dimension_scores,
            scale_scores: Vec::new(),
        }
    }

    fn score_with(
        &self,
        session_id: Uuid,
        responses: &[Response],
        sources: DimensionSources,
        scale_list: &[&Scale],
    ) -> Result<AssessmentResults, ScoringError> {
        let scale_scores = self.scale_scores(responses, scale_list);
        if scale_scores.is_empty() {
            return Err(ScoringError::InsufficientData);
        }

        let dimension_scores = self.dimension_scores(responses, sources);
        let mut sri = Self::composite(dimension_scores);
        sri.scale_scores = scale_scores;

        let interpretation = report::interpretation(&sri);
        let recommendations = report::recommendations(&sri);

        Ok(AssessmentResults {
            session_id,
            sri,
            interpretation,
            recommendations,
            calculated_at: jiff::Timestamp::now(),
        })
    }

    /// Score against an explicit administration plan (the adaptive
    /// selector's output). Unknown plan ids are logged and skipped.
    pub fn score_assessment(
        &self,
        session_id: Uuid,
        responses: &[Response],
        plan: &[&str],
    ) -> Result<AssessmentResults, ScoringError> {
        if responses.is_empty() {
            return Err(ScoringError::NoResponses);
        }

        let sources = DimensionSources::from_plan(plan);
        let scale_list: Vec<&Scale> = plan
            .iter()
            .filter_map(|&id| {
                let scale = get_scale(id);
                if scale.is_none() {
                    tracing::warn!(scale_id = id, "unknown scale id in plan; skipping");
                }
                scale
            })
            .collect();

        self.score_with(session_id, responses, sources, &scale_list)
    }

    /// Compatibility path for callers without a plan: detect what was
    /// administered from response-id prefixes and scan the whole catalog.
    pub fn score_responses(
        &self,
        session_id: Uuid,
        responses: &[Response],
    ) -> Result<AssessmentResults, ScoringError> {
        if responses.is_empty() {
            return Err(ScoringError::NoResponses);
        }

        let sources = DimensionSources::infer(responses);
        self.score_with(session_id, responses, sources, &all_scales())
    }

    /// Derive the plan from the session's demographics and kind, then
    /// score its responses.
    pub fn score_session(
        &self,
        session: &AssessmentSession,
    ) -> Result<AssessmentResults, ScoringError> {
        let plan = selector::select_scales(&session.demographics, session.kind);
        self.score_assessment(session.id, &session.responses, &plan)
    }
}
