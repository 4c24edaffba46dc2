//! Plain-language interpretation and recommendation text for a computed
//! result. A dimension counts as elevated above one standard deviation.

use sri_core::models::{SriLevel, SriResult};

const ELEVATED_Z: f64 = 1.0;

pub fn interpretation(sri: &SriResult) -> Vec<String> {
    let mut lines = vec![
        format!(
            "Your SRI score is {} out of 100 ({}).",
            sri.total_score,
            sri.level.label()
        ),
        level_description(sri.level).to_string(),
    ];

    let mut elevated = Vec::new();
    if sri.dimension_scores.sos_reversed > ELEVATED_Z {
        elevated.push("aversion to sexual cues");
    }
    if sri.dimension_scores.sex_guilt > ELEVATED_Z {
        elevated.push("sex guilt");
    }
    if sri.dimension_scores.sexual_shame > ELEVATED_Z {
        elevated.push("sexual shame");
    }
    if sri.dimension_scores.sis_over_ses > ELEVATED_Z {
        elevated.push("inhibition outweighing excitation");
    }

    if !elevated.is_empty() {
        lines.push(format!(
            "Dimensions noticeably above the reference average: {}.",
            elevated.join(", ")
        ));
    }

    lines
}

fn level_description(level: SriLevel) -> &'static str {
    match level {
        SriLevel::VeryLow => {
            "Your responses suggest very little repression: sexual thoughts and \
             feelings appear to cause you minimal guilt, shame, or avoidance."
        }
        SriLevel::Low => {
            "Your responses suggest lower-than-average repression. Occasional \
             discomfort with sexual topics is common and not a cause for concern."
        }
        SriLevel::Moderate => {
            "Your responses fall in the typical range. Some tension between sexual \
             feelings and personal standards is part of most people's experience."
        }
        SriLevel::High => {
            "Your responses suggest higher-than-average repression. Guilt, shame, \
             or avoidance may be limiting how comfortably you relate to your own sexuality."
        }
        SriLevel::VeryHigh => {
            "Your responses suggest substantially elevated repression. Sexual \
             thoughts and situations may be a source of considerable distress for you."
        }
    }
}

pub fn recommendations(sri: &SriResult) -> Vec<String> {
    let mut items = Vec::new();

    if matches!(sri.level, SriLevel::High | SriLevel::VeryHigh) {
        items.push(
            "Consider talking with a qualified therapist or counselor who works \
             with sexuality-related concerns."
                .to_string(),
        );
        items.push(
            "Evidence-based reading on sexual wellbeing can help put your \
             experience in context."
                .to_string(),
        );
    }

    if sri.dimension_scores.sex_guilt > ELEVATED_Z {
        items.push(
            "Your guilt score is elevated. Examining where your standards about \
             sex come from, ideally with support, can reduce self-blame."
                .to_string(),
        );
    }

    if sri.dimension_scores.sexual_shame > ELEVATED_Z {
        items.push(
            "Your shame score is elevated. Shame tends to ease when the feelings \
             behind it can be named and shared with someone trusted."
                .to_string(),
        );
    }

    if sri.dimension_scores.sis_over_ses > ELEVATED_Z {
        items.push(
            "Inhibition outweighs excitation in your profile. Reducing pressure \
             and anxiety around sexual situations is usually more effective than \
             trying to force desire."
                .to_string(),
        );
    }

    items.push(
        "Open communication with a partner or trusted confidant about needs and \
         boundaries supports sexual wellbeing."
            .to_string(),
    );
    items.push(
        "This is a self-reflection screening tool, not a clinical diagnosis. \
         Scores describe questionnaire responses, not who you are."
            .to_string(),
    );

    items
}
