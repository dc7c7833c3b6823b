//! Static basic-strategy tables for the six-deck H17 trainer chart.
//!
//! Three sub-tables: pairs by pair value (11 = aces), soft totals 13-20,
//! and hard totals 5-21. Each entry is an ordered list of cases matched
//! first-wins, with explicit-upcard cases ahead of the `Any` catch-all.

use super::{Action, DealerKey, DealerMatch, RuleCase};

use super::Action::{Double, Hit, Split, Stand};
use super::DealerKey::{Ace, Eight, Five, Four, Nine, Seven, Six, Ten, Three, Two};
use super::DealerMatch::{Any, Upcards};

const fn rule(
    dealers: DealerMatch,
    action: Action,
    fallback: Option<Action>,
    tip: &'static str,
    why: &'static str,
) -> RuleCase {
    RuleCase {
        dealers,
        action,
        fallback,
        tip,
        why,
    }
}

const UP_2_TO_6: &[DealerKey] = &[Two, Three, Four, Five, Six];
const UP_2_TO_7: &[DealerKey] = &[Two, Three, Four, Five, Six, Seven];
const UP_2_TO_9: &[DealerKey] = &[Two, Three, Four, Five, Six, Seven, Eight, Nine];
const UP_3_TO_6: &[DealerKey] = &[Three, Four, Five, Six];
const UP_4_TO_6: &[DealerKey] = &[Four, Five, Six];
const UP_5_TO_6: &[DealerKey] = &[Five, Six];

// ── Pairs ──

static PAIR_ACES: &[RuleCase] = &[rule(
    Any,
    Split,
    None,
    "Always split aces.",
    "A pair of aces is a clumsy 2 or 12, but each ace starts a new hand with the best card in the deck.",
)];

static PAIR_TENS: &[RuleCase] = &[rule(
    Any,
    Stand,
    None,
    "Never split tens. Stand on 20.",
    "Twenty wins the vast majority of hands outright; breaking it up throws away a made hand.",
)];

static PAIR_NINES: &[RuleCase] = &[
    rule(
        Upcards(&[Seven, Ten, Ace]),
        Stand,
        None,
        "Stand on your 18.",
        "Against a 7 your 18 already beats the dealer's likely 17, and against a 10 or ace splitting just doubles your exposure.",
    ),
    rule(
        Any,
        Split,
        None,
        "Split the nines.",
        "Two hands starting at 9 outperform a standing 18 when the dealer shows a breakable card.",
    ),
];

static PAIR_EIGHTS: &[RuleCase] = &[rule(
    Any,
    Split,
    None,
    "Always split eights.",
    "Sixteen is the worst total in the game; two hands starting at 8 are a big improvement no matter what the dealer shows.",
)];

static PAIR_SEVENS: &[RuleCase] = &[
    rule(
        Upcards(UP_2_TO_7),
        Split,
        None,
        "Split the sevens.",
        "A hard 14 is a loser; two 7s against a weak-to-middling upcard give you two chances at 17 or better.",
    ),
    rule(
        Any,
        Hit,
        None,
        "Hit your 14.",
        "Against an 8 or stronger, splitting 7s just builds two losing hands; draw at the 14 instead.",
    ),
];

static PAIR_SIXES: &[RuleCase] = &[
    rule(
        Upcards(UP_2_TO_6),
        Split,
        None,
        "Split the sixes.",
        "The dealer's small card busts often enough to make two starting 6s worth the extra bet.",
    ),
    rule(
        Any,
        Hit,
        None,
        "Hit your 12.",
        "Splitting 6s into a strong upcard feeds the dealer two weak hands; play the 12 as a draw.",
    ),
];

static PAIR_FIVES: &[RuleCase] = &[
    rule(
        Upcards(UP_2_TO_9),
        Double,
        Some(Hit),
        "Never split fives. Double your 10 instead.",
        "A pair of fives is really a hard 10, one of the best doubling hands against a 9 or lower.",
    ),
    rule(
        Any,
        Hit,
        None,
        "Hit your 10.",
        "Ten is a strong draw, but doubling into a dealer 10 or ace gives away too much.",
    ),
];

static PAIR_FOURS: &[RuleCase] = &[
    rule(
        Upcards(UP_5_TO_6),
        Split,
        None,
        "Split the fours.",
        "Only against a 5 or 6 does the dealer bust often enough to justify building two hands from 4s.",
    ),
    rule(
        Any,
        Hit,
        None,
        "Hit your 8.",
        "Eight can't bust and draws into plenty of strong totals; splitting 4s makes two bad hands.",
    ),
];

static PAIR_TWOS_THREES: &[RuleCase] = &[
    rule(
        Upcards(UP_2_TO_7),
        Split,
        None,
        "Split the low pair.",
        "Small pairs play badly as a single hand; against a 7 or lower each card is a fresh start.",
    ),
    rule(
        Any,
        Hit,
        None,
        "Hit the low pair.",
        "Against a strong upcard the extra bet isn't worth it; draw at the low total instead.",
    ),
];

pub(super) fn pair_cases(pair_value: u8) -> Option<&'static [RuleCase]> {
    match pair_value {
        2 | 3 => Some(PAIR_TWOS_THREES),
        4 => Some(PAIR_FOURS),
        5 => Some(PAIR_FIVES),
        6 => Some(PAIR_SIXES),
        7 => Some(PAIR_SEVENS),
        8 => Some(PAIR_EIGHTS),
        9 => Some(PAIR_NINES),
        10 => Some(PAIR_TENS),
        11 => Some(PAIR_ACES),
        _ => None,
    }
}

// ── Soft totals ──

static SOFT_13_14: &[RuleCase] = &[
    rule(
        Upcards(UP_5_TO_6),
        Double,
        Some(Hit),
        "Double your soft hand.",
        "With the dealer showing a 5 or 6 you can't bust and the dealer breaks often, so press the bet.",
    ),
    rule(
        Any,
        Hit,
        None,
        "Hit your soft hand.",
        "A soft 13 or 14 is too weak to stand on; the ace lets you draw with no risk of busting.",
    ),
];

static SOFT_15_16: &[RuleCase] = &[
    rule(
        Upcards(UP_4_TO_6),
        Double,
        Some(Hit),
        "Double your soft hand.",
        "Dealer 4 through 6 is prime bust territory; a free draw plus a doubled bet is the best of both.",
    ),
    rule(
        Any,
        Hit,
        None,
        "Hit your soft hand.",
        "Soft 15 and 16 lose if you stand; keep drawing, since the ace absorbs a big card.",
    ),
];

static SOFT_17: &[RuleCase] = &[
    rule(
        Upcards(UP_3_TO_6),
        Double,
        Some(Hit),
        "Double your soft 17.",
        "Soft 17 standing is a losing play everywhere; against a weak dealer the doubled draw is where the value is.",
    ),
    rule(
        Any,
        Hit,
        None,
        "Hit your soft 17.",
        "Seventeen doesn't beat a made dealer hand, and the ace means drawing costs you nothing.",
    ),
];

static SOFT_18: &[RuleCase] = &[
    rule(
        Upcards(UP_2_TO_6),
        Double,
        Some(Stand),
        "Double your soft 18.",
        "Eighteen is decent, but against a dealer 2 through 6 the doubled draw squeezes out more than standing.",
    ),
    rule(
        Upcards(&[Seven, Eight]),
        Stand,
        None,
        "Stand on your soft 18.",
        "Eighteen beats the 17 or ties the 18 the dealer is likely holding behind a 7 or 8.",
    ),
    rule(
        Any,
        Hit,
        None,
        "Hit your soft 18.",
        "Against a 9, 10, or ace an 18 is an underdog, and the free draw gives you a shot at improving.",
    ),
];

static SOFT_19: &[RuleCase] = &[
    rule(
        Upcards(&[Six]),
        Double,
        Some(Stand),
        "Double your soft 19.",
        "A rare aggressive spot: with the dealer hitting soft 17, the 6 breaks often enough to double even a 19.",
    ),
    rule(
        Any,
        Stand,
        None,
        "Stand on your soft 19.",
        "Nineteen is a winner as it sits; drawing risks trading a strong hand for a mediocre one.",
    ),
];

static SOFT_20: &[RuleCase] = &[rule(
    Any,
    Stand,
    None,
    "Stand on your soft 20.",
    "Twenty is nearly unbeatable; no draw improves it often enough to matter.",
)];

pub(super) fn soft_cases(total: u8) -> Option<&'static [RuleCase]> {
    match total {
        13 | 14 => Some(SOFT_13_14),
        15 | 16 => Some(SOFT_15_16),
        17 => Some(SOFT_17),
        18 => Some(SOFT_18),
        19 => Some(SOFT_19),
        20 => Some(SOFT_20),
        _ => None,
    }
}

// ── Hard totals ──

static HARD_LOW: &[RuleCase] = &[rule(
    Any,
    Hit,
    None,
    "Hit your low total.",
    "Totals of 8 and below can't bust and can't win as they stand. Always draw.",
)];

static HARD_9: &[RuleCase] = &[
    rule(
        Upcards(UP_3_TO_6),
        Double,
        Some(Hit),
        "Double your 9.",
        "Nine doubles into a dealer 3 through 6: plenty of tens to catch while the dealer is set up to break.",
    ),
    rule(
        Any,
        Hit,
        None,
        "Hit your 9.",
        "Against the other upcards the doubled bet doesn't earn enough; take the normal draw.",
    ),
];

static HARD_10: &[RuleCase] = &[
    rule(
        Upcards(UP_2_TO_9),
        Double,
        Some(Hit),
        "Double your 10.",
        "Ten against a 9 or lower is a classic double: one card very often makes 20.",
    ),
    rule(
        Any,
        Hit,
        None,
        "Hit your 10.",
        "A dealer 10 or ace outguns you too often to double; draw at it instead.",
    ),
];

static HARD_11: &[RuleCase] = &[rule(
    Any,
    Double,
    Some(Hit),
    "Always double your 11.",
    "Eleven is the strongest doubling hand in the game; even against an ace the one-card draw is worth the extra bet.",
)];

static HARD_12: &[RuleCase] = &[
    rule(
        Upcards(UP_4_TO_6),
        Stand,
        None,
        "Stand on your 12.",
        "Against a 4, 5, or 6 the dealer breaks more often than your 12 loses by standing. Let them bust.",
    ),
    rule(
        Any,
        Hit,
        None,
        "Hit your 12.",
        "Only the 10s hurt you, and the dealer's 2, 3, or strong card makes standing on 12 the bigger mistake.",
    ),
];

static HARD_13_TO_16: &[RuleCase] = &[
    rule(
        Upcards(UP_2_TO_6),
        Stand,
        None,
        "Stand on your stiff hand.",
        "Drawing at 13 through 16 busts too often; with a weak upcard the dealer does the busting for you.",
    ),
    rule(
        Any,
        Hit,
        None,
        "Hit your stiff hand.",
        "It hurts, but a stiff total loses to a made dealer hand almost every time. You have to draw at it.",
    ),
];

static HARD_HIGH: &[RuleCase] = &[rule(
    Any,
    Stand,
    None,
    "Stand on 17 or better.",
    "From 17 up the bust risk on a draw outweighs any improvement; the hand plays itself.",
)];

pub(super) fn hard_cases(total: u8) -> Option<&'static [RuleCase]> {
    match total {
        // hard 4 only arises from a split hand drawing back into deuces
        4..=8 => Some(HARD_LOW),
        9 => Some(HARD_9),
        10 => Some(HARD_10),
        11 => Some(HARD_11),
        12 => Some(HARD_12),
        13..=16 => Some(HARD_13_TO_16),
        17..=21 => Some(HARD_HIGH),
        _ => None,
    }
}

/// Designed fallback for a lookup that matches nothing. Full table coverage
/// should make this unreachable; hitting it is logged as a likely
/// completeness bug.
pub(super) static DEFAULT_CASE: RuleCase = rule(
    Any,
    Hit,
    None,
    "When in doubt, take another card.",
    "This spot falls outside the standard chart; drawing is the conservative default.",
);
