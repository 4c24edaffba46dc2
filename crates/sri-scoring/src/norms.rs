//! Reference norms for standardization. The table is an explicit input to
//! the scorer: created once, optionally replaced wholesale for
//! recalibration, never mutated in place.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Norm {
    pub mean: f64,
    pub std_dev: f64,
}

/// A norm-table key paired with the hardcoded value used when a swapped-in
/// table lacks that key. One constant per scale variant, so variant choice
/// and norm lookup always travel together.
#[derive(Debug, Clone, Copy)]
pub struct NormFallback {
    pub key: &'static str,
    pub norm: Norm,
}

const fn fallback(key: &'static str, mean: f64, std_dev: f64) -> NormFallback {
    NormFallback {
        key,
        norm: Norm { mean, std_dev },
    }
}

pub const SES_SF: NormFallback = fallback("ses_total", 16.8, 3.7);
pub const SES_FULL: NormFallback = fallback("sis_ses_full_ses", 42.8, 9.2);
pub const SIS_SF: NormFallback = fallback("sis_total", 35.2, 8.9);
pub const SIS_FULL: NormFallback = fallback("sis_ses_full_sis", 87.5, 18.3);
pub const SOS_SCREENING: NormFallback = fallback("sos_screening", 15.3, 4.6);
pub const SOS_FULL: NormFallback = fallback("sos_full", 63.0, 12.8);
pub const GUILT_SHORT: NormFallback = fallback("mosher_guilt", 25.6, 7.8);
pub const GUILT_FULL: NormFallback = fallback("mosher_guilt_full", 62.7, 19.2);
pub const SHAME: NormFallback = fallback("kiss9_shame", 18.7, 6.4);
pub const TEEN_SHAME: NormFallback = fallback("teen_sexual_attitudes", 25.0, 6.2);
pub const COGNITION: NormFallback = fallback("sexual_cognition", 28.5, 7.1);

/// Reference means and standard deviations keyed by scale id or composite
/// dimension key, versioned by `updated_at`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NormativeData {
    pub sample_size: u32,
    pub means: BTreeMap<String, f64>,
    pub standard_deviations: BTreeMap<String, f64>,
    pub updated_at: jiff::Timestamp,
}

impl NormativeData {
    pub fn norm(&self, key: &str) -> Option<Norm> {
        match (
            self.means.get(key),
            self.standard_deviations.get(key),
        ) {
            (Some(&mean), Some(&std_dev)) => Some(Norm { mean, std_dev }),
            _ => None,
        }
    }

    /// The table's norm for `fallback.key`, or the literature value when
    /// the table does not carry it.
    pub fn norm_or(&self, fallback: NormFallback) -> Norm {
        self.norm(fallback.key).unwrap_or(fallback.norm)
    }

    /// Per-scale lookup chain: the `{id}_total` key first, then the bare
    /// scale id, then mean 0 / std-dev 1.
    pub fn scale_norm(&self, scale_id: &str) -> Norm {
        let total_key = format!("{scale_id}_total");
        self.norm(&total_key)
            .or_else(|| self.norm(scale_id))
            .unwrap_or(Norm {
                mean: 0.0,
                std_dev: 1.0,
            })
    }

    /// The built-in literature-derived table.
    pub fn reference() -> Self {
        let entries: [(&str, f64, f64); 15] = [
            ("sis_total", 35.2, 8.9),
            ("ses_total", 16.8, 3.7),
            ("sis1_total", 15.4, 4.1),
            ("sis2_total", 19.8, 5.2),
            ("sis_ses_full_sis", 87.5, 18.3),
            ("sis_ses_full_ses", 42.8, 9.2),
            ("mosher_guilt", 25.6, 7.8),
            ("mosher_guilt_full", 62.7, 19.2),
            ("kiss9_shame", 18.7, 6.4),
            ("sos_screening", 15.3, 4.6),
            ("sos_full", 63.0, 12.8),
            ("bsas_brief", 69.2, 15.4),
            ("teen_sexual_attitudes", 25.0, 6.2),
            ("sexual_cognition", 28.5, 7.1),
            ("sis_ses_adapted", 24.0, 5.8),
        ];

        let mut means = BTreeMap::new();
        let mut standard_deviations = BTreeMap::new();
        for (key, mean, std_dev) in entries {
            means.insert(key.to_string(), mean);
            standard_deviations.insert(key.to_string(), std_dev);
        }

        Self {
            sample_size: 1000,
            means,
            standard_deviations,
            // 2025-01-01T00:00:00Z, the table's compilation date.
            updated_at: jiff::Timestamp::constant(1_735_689_600, 0),
        }
    }
}

impl Default for NormativeData {
    fn default() -> Self {
        Self::reference()
    }
}
