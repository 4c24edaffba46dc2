//! sri-scales
//!
//! Psychometric scale catalog and adaptive selector. Pure data — the scale
//! definitions are built once at first use and never mutated.

pub mod demographics;
pub mod error;
pub mod items;
pub mod scales;
pub mod selector;

use error::ScaleError;
use items::Scale;

/// Scale-id constants, one per registered scale.
pub mod ids {
    pub const SIS_SES_SF: &str = "sis_ses_sf";
    pub const SIS_SES_FULL: &str = "sis_ses_full";
    pub const MOSHER_GUILT: &str = "mosher_guilt";
    pub const MOSHER_GUILT_FULL: &str = "mosher_guilt_full";
    pub const KISS9_SHAME: &str = "kiss9_shame";
    pub const SOS_SCREENING: &str = "sos_screening";
    pub const SOS_FULL: &str = "sos_full";
    pub const BSAS_BRIEF: &str = "bsas_brief";
    pub const TEEN_SEXUAL_ATTITUDES: &str = "teen_sexual_attitudes";
    pub const SEXUAL_COGNITION: &str = "sexual_cognition";
    pub const SIS_SES_ADAPTED: &str = "sis_ses_adapted";
}

/// Return all registered scales in catalog order.
pub fn all_scales() -> Vec<&'static Scale> {
    vec![
        &scales::sis_ses::SIS_SES_SF,
        &scales::sis_ses::SIS_SES_FULL,
        &scales::mosher::MOSHER_GUILT,
        &scales::mosher::MOSHER_GUILT_FULL,
        &scales::kiss9::KISS9_SHAME,
        &scales::sos::SOS_SCREENING,
        &scales::sos::SOS_FULL,
        &scales::bsas::BSAS_BRIEF,
        &scales::adaptive::TEEN_SEXUAL_ATTITUDES,
        &scales::adaptive::SEXUAL_COGNITION,
        &scales::adaptive::SIS_SES_ADAPTED,
    ]
}

/// Look up a scale by id.
pub fn get_scale(id: &str) -> Option<&'static Scale> {
    all_scales().into_iter().find(|s| s.id == id)
}

/// Fallible lookup for callers that treat an unknown id as an error
/// rather than something to skip.
pub fn require_scale(id: &str) -> Result<&'static Scale, ScaleError> {
    get_scale(id).ok_or_else(|| ScaleError::UnknownScale(id.to_string()))
}

/// The standard quick battery: short forms, 38 items.
pub fn quick_battery() -> Vec<&'static str> {
    vec![
        ids::SIS_SES_SF,
        ids::MOSHER_GUILT,
        ids::KISS9_SHAME,
        ids::SOS_SCREENING,
    ]
}

/// The standard full battery: long forms plus BSAS, 126 items.
pub fn full_battery() -> Vec<&'static str> {
    vec![
        ids::SIS_SES_FULL,
        ids::MOSHER_GUILT_FULL,
        ids::KISS9_SHAME,
        ids::SOS_FULL,
        ids::BSAS_BRIEF,
    ]
}
