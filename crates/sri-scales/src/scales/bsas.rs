use std::sync::LazyLock;

use crate::ids;
use crate::items::Scale;

use super::{likert, sum_of};

/// Items whose agreement indicates the construct's low pole; these are
/// reverse-scored.
const REVERSE_ITEMS: [&str; 7] = [
    "bsas_perm_5",
    "bsas_birth_2",
    "bsas_birth_3",
    "bsas_comm_1",
    "bsas_comm_3",
    "bsas_inst_5",
    "bsas_inst_6",
];

/// BSAS: Brief Sexual Attitudes Scale, 23 items across four dimensions
/// (permissiveness, birth control, communion, instrumentality).
pub static BSAS_BRIEF: LazyLock<Scale> = LazyLock::new(|| {
    let items = [
        // Permissiveness
        (
            "bsas_perm_1",
            "Casual sex between consenting adults is acceptable.",
        ),
        (
            "bsas_perm_2",
            "I do not need to be committed to a person to have sex with them.",
        ),
        (
            "bsas_perm_3",
            "One-night stands can be enjoyable and harmless.",
        ),
        (
            "bsas_perm_4",
            "It is acceptable to have ongoing sexual relationships with more than one person.",
        ),
        (
            "bsas_perm_5",
            "Sex belongs only inside a committed, exclusive relationship.",
        ),
        (
            "bsas_perm_6",
            "Sex purely for physical enjoyment is fine.",
        ),
        // Birth control
        (
            "bsas_birth_1",
            "Birth control is part of responsible sexuality.",
        ),
        (
            "bsas_birth_2",
            "Planning for contraception in advance spoils the spontaneity of sex.",
        ),
        (
            "bsas_birth_3",
            "Contraception is mostly the other partner's concern, not mine.",
        ),
        (
            "bsas_birth_4",
            "Both partners share responsibility for preventing pregnancy.",
        ),
        (
            "bsas_birth_5",
            "Discussing protection before sex is a sign of respect.",
        ),
        (
            "bsas_birth_6",
            "A woman should be able to obtain contraception without anyone's approval.",
        ),
        // Communion
        (
            "bsas_comm_1",
            "Sex without emotional closeness is empty.",
        ),
        (
            "bsas_comm_2",
            "At its best, sex is a merging of two people's inner selves.",
        ),
        (
            "bsas_comm_3",
            "Sex is only truly good when it expresses deep love.",
        ),
        (
            "bsas_comm_4",
            "A sexual relationship is the deepest form of communication between people.",
        ),
        (
            "bsas_comm_5",
            "Sex at its height is like a union of souls.",
        ),
        // Instrumentality
        (
            "bsas_inst_1",
            "Sex is primarily a physical activity.",
        ),
        (
            "bsas_inst_2",
            "The main purpose of sex is one's own pleasure.",
        ),
        (
            "bsas_inst_3",
            "Sex is mostly a game between two people.",
        ),
        (
            "bsas_inst_4",
            "Sex is primarily about taking what one enjoys.",
        ),
        (
            "bsas_inst_5",
            "Sex is mainly about giving to the other person.",
        ),
        (
            "bsas_inst_6",
            "Sex without mutual tenderness is worthless.",
        ),
    ];

    Scale {
        id: ids::BSAS_BRIEF.to_string(),
        name: "BSAS Sexual Attitudes".to_string(),
        description: "Brief Sexual Attitudes Scale, 23 items in four dimensions.".to_string(),
        questions: items
            .iter()
            .map(|(id, text)| {
                let mut q = likert(id, ids::BSAS_BRIEF, text);
                q.reverse = REVERSE_ITEMS.contains(id);
                q
            })
            .collect(),
        scoring: sum_of(items.len()),
    }
});
