//! Severity-band classification for the composite score.

use sri_core::models::SriLevel;

#[derive(Debug, Clone, Copy)]
pub struct LevelBand {
    pub level: SriLevel,
    pub min: u8,
    pub max: u8,
}

/// Bands in ascending order, half-open `[min, max)`. The top band also
/// owns the maximum score, so every value in 0–100 maps to a level.
pub const LEVEL_BANDS: [LevelBand; 5] = [
    LevelBand {
        level: SriLevel::VeryLow,
        min: 0,
        max: 20,
    },
    LevelBand {
        level: SriLevel::Low,
        min: 20,
        max: 40,
    },
    LevelBand {
        level: SriLevel::Moderate,
        min: 40,
        max: 60,
    },
    LevelBand {
        level: SriLevel::High,
        min: 60,
        max: 80,
    },
    LevelBand {
        level: SriLevel::VeryHigh,
        min: 80,
        max: 100,
    },
];

/// Classify a 0–100 score; first matching band wins. The `Moderate`
/// default is unreachable for in-range scores.
pub fn classify(total_score: u8) -> SriLevel {
    for band in LEVEL_BANDS {
        if total_score >= band.min && (total_score < band.max || (band.max == 100 && total_score == 100))
        {
            return band.level;
        }
    }
    SriLevel::Moderate
}
