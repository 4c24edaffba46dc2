//! Adapted battery for minors and respondents without sexual experience.
//! Items avoid references to concrete sexual behavior; id prefixes (`tsa_`,
//! `sc_`, `sisa_`) are disjoint from the adult battery.

use std::sync::LazyLock;

use crate::ids;
use crate::items::Scale;

use super::{likert, sum_of};

/// Attitudes toward sexuality for 14–17-year-olds. `tsa_3` is
/// reverse-scored (its agreement pole is the comfortable one).
pub static TEEN_SEXUAL_ATTITUDES: LazyLock<Scale> = LazyLock::new(|| {
    let items = [
        (
            "tsa_1",
            "Thinking about romantic or sexual topics makes me feel guilty.",
        ),
        (
            "tsa_2",
            "I worry that my curiosity about sexuality is abnormal.",
        ),
        (
            "tsa_3",
            "I feel comfortable asking trusted adults questions about sexuality.",
        ),
        (
            "tsa_4",
            "I feel embarrassed when sexuality is discussed in class.",
        ),
        (
            "tsa_5",
            "I believe my romantic feelings are something to hide.",
        ),
        (
            "tsa_6",
            "Changes in my body make me feel ashamed.",
        ),
        (
            "tsa_7",
            "I avoid films or books because they might contain romantic scenes.",
        ),
        (
            "tsa_8",
            "If friends talk about crushes or dating, I feel I should not join in.",
        ),
        (
            "tsa_9",
            "I feel that having romantic daydreams makes me a bad person.",
        ),
        (
            "tsa_10",
            "I am afraid others would judge me if they knew my private thoughts.",
        ),
    ];

    Scale {
        id: ids::TEEN_SEXUAL_ATTITUDES.to_string(),
        name: "Teen Sexual Attitudes".to_string(),
        description: "Age-appropriate attitudes toward sexuality for ages 14–17.".to_string(),
        questions: items
            .iter()
            .map(|(id, text)| {
                let mut q = likert(id, ids::TEEN_SEXUAL_ATTITUDES, text);
                q.reverse = *id == "tsa_3";
                q
            })
            .collect(),
        scoring: sum_of(items.len()),
    }
});

/// Cognitive and evaluative responses to sexuality, for respondents
/// without sexual experience. `sc_2` and `sc_9` are reverse-scored.
pub static SEXUAL_COGNITION: LazyLock<Scale> = LazyLock::new(|| {
    let items = [
        (
            "sc_1",
            "When sexual thoughts occur to me, I try to push them out of my mind.",
        ),
        (
            "sc_2",
            "I consider sexual curiosity a normal part of being human.",
        ),
        (
            "sc_3",
            "I believe acting on sexual desire would change who I am for the worse.",
        ),
        (
            "sc_4",
            "Imagining a future sexual relationship makes me anxious rather than hopeful.",
        ),
        (
            "sc_5",
            "I feel that my standards about sexuality are stricter than most people's.",
        ),
        (
            "sc_6",
            "I worry that I would not be able to control myself if I allowed sexual thoughts.",
        ),
        (
            "sc_7",
            "I see my lack of sexual experience as proof of my self-discipline.",
        ),
        (
            "sc_8",
            "Sexual topics feel dangerous to me, even in private thought.",
        ),
        (
            "sc_9",
            "I expect sexuality to be a positive part of my life someday.",
        ),
        (
            "sc_10",
            "I judge people mainly by how well they restrain their sexual behavior.",
        ),
    ];

    Scale {
        id: ids::SEXUAL_COGNITION.to_string(),
        name: "Sexual Cognition".to_string(),
        description: "Beliefs and evaluations about sexuality, independent of experience."
            .to_string(),
        questions: items
            .iter()
            .map(|(id, text)| {
                let mut q = likert(id, ids::SEXUAL_COGNITION, text);
                q.reverse = matches!(*id, "sc_2" | "sc_9");
                q
            })
            .collect(),
        scoring: sum_of(items.len()),
    }
});

/// SIS/SES adapted form, 8 items with concrete-behavior references removed.
pub static SIS_SES_ADAPTED: LazyLock<Scale> = LazyLock::new(|| {
    let items = [
        (
            "sisa_1",
            "Romantic scenes in films hold my attention and excite me.",
        ),
        (
            "sisa_2",
            "Being near someone I am attracted to gives me a pleasant nervous energy.",
        ),
        (
            "sisa_3",
            "Attractive strangers catch my attention easily.",
        ),
        (
            "sisa_4",
            "Daydreams about someone I like can make my heart race.",
        ),
        (
            "sisa_5",
            "If I might be teased about a crush, I stop letting myself enjoy the feeling.",
        ),
        (
            "sisa_6",
            "Worrying about doing something embarrassing shuts down my excitement.",
        ),
        (
            "sisa_7",
            "When adults might disapprove, I suppress my romantic feelings entirely.",
        ),
        (
            "sisa_8",
            "Fear of rejection stops my attraction before it can grow.",
        ),
    ];

    Scale {
        id: ids::SIS_SES_ADAPTED.to_string(),
        name: "SIS/SES Adapted".to_string(),
        description: "Inhibition and excitation proneness without behavioral references, 8 items."
            .to_string(),
        questions: items
            .iter()
            .map(|(id, text)| likert(id, ids::SIS_SES_ADAPTED, text))
            .collect(),
        scoring: sum_of(items.len()),
    }
});
