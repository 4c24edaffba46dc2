use std::sync::LazyLock;

use crate::ids;
use crate::items::{Question, Scale};

use super::{likert, sum_of};

/// SIS/SES-SF: Sexual Inhibition / Sexual Excitation Scale, 14-item short
/// form. Four SES items, five SIS1 (performance-failure inhibition) items,
/// five SIS2 (threat-related inhibition) items.
pub static SIS_SES_SF: LazyLock<Scale> = LazyLock::new(|| {
    let items = [
        (
            "ses_1",
            "When I see an attractive person, sexual thoughts come to me easily.",
        ),
        (
            "ses_2",
            "Sexual scenes in films or books arouse me quickly.",
        ),
        (
            "ses_3",
            "When an attractive person flirts with me, I become sexually aroused.",
        ),
        (
            "ses_4",
            "Fantasizing about sex can quickly make me aroused.",
        ),
        (
            "sis1_1",
            "If I worry about taking too long to become aroused, my arousal fades.",
        ),
        (
            "sis1_2",
            "When I think about whether I will perform well sexually, I lose my arousal.",
        ),
        (
            "sis1_3",
            "If I feel I am expected to respond sexually, I have difficulty becoming aroused.",
        ),
        (
            "sis1_4",
            "When I am distracted by my own thoughts during sex, I lose my arousal easily.",
        ),
        (
            "sis1_5",
            "If my partner seems unimpressed, I quickly lose interest in sex.",
        ),
        (
            "sis2_1",
            "If there is a risk of being seen or overheard, I cannot stay aroused.",
        ),
        (
            "sis2_2",
            "The thought of being caught during sex makes arousal impossible for me.",
        ),
        (
            "sis2_3",
            "If I feel I am doing something sexually wrong, my arousal disappears.",
        ),
        (
            "sis2_4",
            "Worrying about unwanted consequences of sex switches my arousal off.",
        ),
        (
            "sis2_5",
            "When I feel unsafe in a sexual situation, I cannot become aroused at all.",
        ),
    ];

    Scale {
        id: ids::SIS_SES_SF.to_string(),
        name: "SIS/SES Short Form".to_string(),
        description: "Sexual inhibition and sexual excitation, 14-item short form.".to_string(),
        questions: items
            .iter()
            .map(|(id, text)| likert(id, ids::SIS_SES_SF, text))
            .collect(),
        scoring: sum_of(items.len()),
    }
});

/// SIS/SES full form, 45 items. The first item of each subsystem block is
/// shared with the short form: 16 SES, 14 SIS1, 15 SIS2.
pub static SIS_SES_FULL: LazyLock<Scale> = LazyLock::new(|| {
    let ses_extra = [
        (
            "ses_5",
            "Being physically close to someone I find attractive is enough to arouse me.",
        ),
        (
            "ses_6",
            "Certain smells or perfumes can put me in a sexual mood immediately.",
        ),
        (
            "ses_7",
            "Hearing other people talk about sex arouses me.",
        ),
        (
            "ses_8",
            "When someone I desire touches me casually, I feel a wave of arousal.",
        ),
        (
            "ses_9",
            "Seeing someone undress arouses me even when no sex is expected.",
        ),
        (
            "ses_10",
            "I become aroused simply from dancing closely with an attractive partner.",
        ),
        (
            "ses_11",
            "Unexpected sexual imagery catches my attention and excites me.",
        ),
        (
            "ses_12",
            "Remembering a past sexual experience can arouse me on its own.",
        ),
        (
            "ses_13",
            "Eye contact with someone I find attractive can start my arousal.",
        ),
        (
            "ses_14",
            "Wearing clothes that make me feel attractive puts me in a sexual mood.",
        ),
        (
            "ses_15",
            "Talking intimately with someone I like gets me sexually excited.",
        ),
        (
            "ses_16",
            "New or unusual sexual situations excite me more than familiar ones.",
        ),
    ];

    let sis1_extra = [
        (
            "sis1_6",
            "If I cannot stop thinking about everyday worries, I cannot become aroused.",
        ),
        (
            "sis1_7",
            "When I feel tired, my sexual arousal shuts down completely.",
        ),
        (
            "sis1_8",
            "If sex is interrupted, I find it hard to become aroused again.",
        ),
        (
            "sis1_9",
            "I need everything to be 'just right' before I can become aroused.",
        ),
        (
            "sis1_10",
            "If I doubt my own attractiveness, I cannot respond sexually.",
        ),
        (
            "sis1_11",
            "When sex feels rushed, I do not become aroused.",
        ),
        (
            "sis1_12",
            "Concern about satisfying my partner crowds out my own arousal.",
        ),
        (
            "sis1_13",
            "If my body does not respond immediately, I give up on becoming aroused.",
        ),
        (
            "sis1_14",
            "Comparing myself with others makes it difficult for me to stay aroused.",
        ),
    ];

    let sis2_extra = [
        (
            "sis2_6",
            "If I think someone might disapprove of what I am doing, my arousal disappears.",
        ),
        (
            "sis2_7",
            "Worrying about sexually transmitted infections keeps me from becoming aroused.",
        ),
        (
            "sis2_8",
            "If I am unsure my partner truly wants sex, I cannot stay aroused.",
        ),
        (
            "sis2_9",
            "Thinking about possible pregnancy switches off my arousal.",
        ),
        (
            "sis2_10",
            "Arousal is impossible for me when I feel emotionally hurt by my partner.",
        ),
        (
            "sis2_11",
            "If the setting feels wrong or inappropriate, I cannot respond sexually.",
        ),
        (
            "sis2_12",
            "Past negative sexual experiences intrude and stop my arousal.",
        ),
        (
            "sis2_13",
            "When I fear being judged for my desires, I lose all arousal.",
        ),
        (
            "sis2_14",
            "If sex might damage a relationship, the worry blocks my arousal.",
        ),
        (
            "sis2_15",
            "Feeling pressured into sex makes arousal impossible for me.",
        ),
    ];

    let shared = |prefix: &str| -> Vec<Question> {
        SIS_SES_SF
            .questions
            .iter()
            .filter(|q| q.id.starts_with(prefix))
            .cloned()
            .collect()
    };

    let mut questions = shared("ses_");
    questions.extend(
        ses_extra
            .iter()
            .map(|(id, text)| likert(id, ids::SIS_SES_FULL, text)),
    );
    questions.extend(shared("sis1_"));
    questions.extend(
        sis1_extra
            .iter()
            .map(|(id, text)| likert(id, ids::SIS_SES_FULL, text)),
    );
    questions.extend(shared("sis2_"));
    questions.extend(
        sis2_extra
            .iter()
            .map(|(id, text)| likert(id, ids::SIS_SES_FULL, text)),
    );

    let count = questions.len();
    Scale {
        id: ids::SIS_SES_FULL.to_string(),
        name: "SIS/SES Full Form".to_string(),
        description: "Sexual inhibition and sexual excitation, 45-item full form.".to_string(),
        questions,
        scoring: sum_of(count),
    }
});
