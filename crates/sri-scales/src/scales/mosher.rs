use std::sync::LazyLock;

use crate::ids;
use crate::items::Scale;

use super::{likert, sum_of};

/// Mosher sex-guilt scale, 10-item brief form.
pub static MOSHER_GUILT: LazyLock<Scale> = LazyLock::new(|| {
    let items = [
        (
            "mg_1",
            "After a sexual fantasy, I feel I have done something wrong.",
        ),
        (
            "mg_2",
            "Masturbation leaves me feeling guilty afterwards.",
        ),
        (
            "mg_3",
            "I feel uneasy when sexual topics come up in conversation.",
        ),
        (
            "mg_4",
            "Sexual pleasure for its own sake seems wrong to me.",
        ),
        (
            "mg_5",
            "When I enjoy something sexual, part of me feels I should not.",
        ),
        (
            "mg_6",
            "I would be ashamed if others knew about my sexual thoughts.",
        ),
        (
            "mg_7",
            "Sex outside a committed relationship is something I could not forgive myself for.",
        ),
        (
            "mg_8",
            "After sexual activity, I often feel the need to make up for it somehow.",
        ),
        (
            "mg_9",
            "Thinking about my own sexual desires makes me feel like a worse person.",
        ),
        (
            "mg_10",
            "I avoid sexual situations so that I will not feel guilty later.",
        ),
    ];

    Scale {
        id: ids::MOSHER_GUILT.to_string(),
        name: "Mosher Sex Guilt (Brief)".to_string(),
        description: "Guilt over sexual thoughts and behavior, 10-item brief form.".to_string(),
        questions: items
            .iter()
            .map(|(id, text)| likert(id, ids::MOSHER_GUILT, text))
            .collect(),
        scoring: sum_of(items.len()),
    }
});

/// Mosher sex-guilt scale, 28-item full form. Items 1–10 are shared with
/// the brief form.
pub static MOSHER_GUILT_FULL: LazyLock<Scale> = LazyLock::new(|| {
    let extra = [
        (
            "mg_11",
            "Dirty jokes make me uncomfortable rather than amused.",
        ),
        (
            "mg_12",
            "I was raised to believe that sexual desire should be resisted.",
        ),
        (
            "mg_13",
            "When I notice someone attractive, I immediately try to push the thought away.",
        ),
        (
            "mg_14",
            "Reading about sex feels like doing something forbidden.",
        ),
        (
            "mg_15",
            "I believe people who enjoy sex too much lose their self-respect.",
        ),
        (
            "mg_16",
            "Unusual sexual practices strike me as disgusting rather than interesting.",
        ),
        (
            "mg_17",
            "I feel guilty when sexual thoughts occur to me at inappropriate times.",
        ),
        (
            "mg_18",
            "Prostitution seems to me degrading for everyone involved.",
        ),
        (
            "mg_19",
            "I cannot talk about my sexual needs without feeling ashamed.",
        ),
        (
            "mg_20",
            "Sex education that is too explicit does more harm than good.",
        ),
        (
            "mg_21",
            "When sexual desire arises in me, my first feeling is that it is wrong.",
        ),
        (
            "mg_22",
            "People should feel some guilt about sex; it keeps behavior in check.",
        ),
        (
            "mg_23",
            "I would feel guilty having sex purely for physical pleasure.",
        ),
        (
            "mg_24",
            "Admitting to sexual fantasies would feel like confessing a sin.",
        ),
        (
            "mg_25",
            "After watching something sexual, I feel the urge to cleanse myself of it.",
        ),
        (
            "mg_26",
            "I judge myself harshly for sexual feelings I cannot control.",
        ),
        (
            "mg_27",
            "Being sexually forward, even with a partner, feels wrong to me.",
        ),
        (
            "mg_28",
            "I believe my sexual impulses are something to apologize for.",
        ),
    ];

    let mut questions = MOSHER_GUILT.questions.clone();
    questions.extend(
        extra
            .iter()
            .map(|(id, text)| likert(id, ids::MOSHER_GUILT_FULL, text)),
    );

    let count = questions.len();
    Scale {
        id: ids::MOSHER_GUILT_FULL.to_string(),
        name: "Mosher Sex Guilt (Full)".to_string(),
        description: "Guilt over sexual thoughts and behavior, 28-item full form.".to_string(),
        questions,
        scoring: sum_of(count),
    }
});
