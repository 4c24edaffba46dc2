use std::sync::LazyLock;

use crate::ids;
use crate::items::Scale;

use super::{likert, sum_of};

/// SOS screening form: 5-item erotophobia screen. Higher totals indicate a
/// more negative orientation toward sexual cues.
pub static SOS_SCREENING: LazyLock<Scale> = LazyLock::new(|| {
    let items = [
        (
            "sos_1",
            "Explicit sexual material makes me uncomfortable.",
        ),
        (
            "sos_2",
            "I would rather change the subject when a conversation turns to sex.",
        ),
        (
            "sos_3",
            "The idea of watching an erotic film is unappealing to me.",
        ),
        (
            "sos_4",
            "My own sexual fantasies disturb me.",
        ),
        (
            "sos_5",
            "Thinking about sex leaves me feeling uneasy rather than curious.",
        ),
    ];

    Scale {
        id: ids::SOS_SCREENING.to_string(),
        name: "SOS Screening".to_string(),
        description: "Sexual Opinion Survey, 5-item erotophobia screen.".to_string(),
        questions: items
            .iter()
            .map(|(id, text)| likert(id, ids::SOS_SCREENING, text))
            .collect(),
        scoring: sum_of(items.len()),
    }
});

/// SOS full form, 21 items. Items 1–5 are shared with the screening form.
pub static SOS_FULL: LazyLock<Scale> = LazyLock::new(|| {
    let extra = [
        (
            "sos_6",
            "Seeing two people kiss passionately in public bothers me.",
        ),
        (
            "sos_7",
            "I find most depictions of nudity in art distasteful.",
        ),
        (
            "sos_8",
            "Erotic literature is not something I would choose to read.",
        ),
        (
            "sos_9",
            "Hearing friends describe their sexual experiences makes me want to leave.",
        ),
        (
            "sos_10",
            "Daydreams with sexual content annoy me when they occur.",
        ),
        (
            "sos_11",
            "Sexual humor strikes me as offensive rather than funny.",
        ),
        (
            "sos_12",
            "I avoid shops that sell sexual products.",
        ),
        (
            "sos_13",
            "Being sexually attracted to a stranger is an unpleasant sensation for me.",
        ),
        (
            "sos_14",
            "Discussions of sexual techniques seem vulgar to me.",
        ),
        (
            "sos_15",
            "I dislike the physical sensations of strong sexual arousal.",
        ),
        (
            "sos_16",
            "The thought of my own nude body being seen makes me anxious.",
        ),
        (
            "sos_17",
            "Media coverage of sexuality goes further than I am comfortable with.",
        ),
        (
            "sos_18",
            "I find it unpleasant to imagine other people having sex.",
        ),
        (
            "sos_19",
            "Touching my own body in a sexual way feels wrong to me.",
        ),
        (
            "sos_20",
            "Sexual curiosity is a trait I wish I had less of.",
        ),
        (
            "sos_21",
            "If sexual thoughts enter my mind, I try to suppress them immediately.",
        ),
    ];

    let mut questions = SOS_SCREENING.questions.clone();
    questions.extend(
        extra
            .iter()
            .map(|(id, text)| likert(id, ids::SOS_FULL, text)),
    );

    let count = questions.len();
    Scale {
        id: ids::SOS_FULL.to_string(),
        name: "SOS Full Form".to_string(),
        description: "Sexual Opinion Survey, 21-item full form.".to_string(),
        questions,
        scoring: sum_of(count),
    }
});
