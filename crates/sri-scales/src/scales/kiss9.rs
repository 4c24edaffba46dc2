use std::sync::LazyLock;

use crate::ids;
use crate::items::Scale;

use super::{frequency, sum_of};

/// KISS-9: Kyle Inventory of Sexual Shame, 9 items. Frequency-keyed
/// options rather than agreement-keyed.
pub static KISS9_SHAME: LazyLock<Scale> = LazyLock::new(|| {
    let items = [
        (
            "ks_1",
            "I feel ashamed of my sexual thoughts.",
        ),
        (
            "ks_2",
            "I feel that my sexual desires make me a bad person.",
        ),
        (
            "ks_3",
            "I hide my sexual self from people who are close to me.",
        ),
        (
            "ks_4",
            "I feel embarrassed about my past sexual experiences.",
        ),
        (
            "ks_5",
            "I feel that something is wrong with me sexually.",
        ),
        (
            "ks_6",
            "I replay sexual situations in my mind and cringe at myself.",
        ),
        (
            "ks_7",
            "I feel exposed and judged when my sexuality becomes visible to others.",
        ),
        (
            "ks_8",
            "I want to withdraw from others because of my sexual feelings.",
        ),
        (
            "ks_9",
            "I feel I must keep my sexuality secret to be accepted.",
        ),
    ];

    Scale {
        id: ids::KISS9_SHAME.to_string(),
        name: "KISS-9 Sexual Shame".to_string(),
        description: "Frequency of shame reactions tied to one's sexuality, 9 items.".to_string(),
        questions: items
            .iter()
            .map(|(id, text)| frequency(id, ids::KISS9_SHAME, text))
            .collect(),
        scoring: sum_of(items.len()),
    }
});
