pub(crate) mod detector;
pub(crate) mod hand_analysis;
pub mod labels;
pub(crate) mod rank_groups;
pub(crate) mod straight_info;
pub(crate) mod suit_info;

use crate::cards::Card;
use crate::hand::HAND_SIZE;
use core::cmp::Ordering;
use log::{debug, trace};
use std::fmt;

/// How a run-only or suit-only hand is labeled.
///
/// `Reference` reproduces the historical table, which calls a run of mixed
/// suits a "Flush" and five suited non-consecutive cards a "Straight".
/// `Conventional` uses standard poker names. Every other category is
/// identical under both.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Ruleset {
    #[default]
    Reference,
    Conventional,
}

impl Ruleset {
    pub const ALL: [Ruleset; 2] = [Ruleset::Reference, Ruleset::Conventional];

    pub const fn name(self) -> &'static str {
        match self {
            Ruleset::Reference => "Reference",
            Ruleset::Conventional => "Conventional",
        }
    }

    /// Cycle to the other ruleset.
    pub const fn toggled(self) -> Self {
        match self {
            Ruleset::Reference => Ruleset::Conventional,
            Ruleset::Conventional => Ruleset::Reference,
        }
    }
}

impl fmt::Display for Ruleset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The category of a five-card hand.
///
/// Ordering follows [`HandCategory::ordinal`], weakest to strongest, with
/// `None` below everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandCategory {
    /// Not a five-card hand, or an impossible one (five cards of one rank).
    None,
    StraightFlush { royal: bool },
    FourOfAKind,
    FullHouse,
    Flush,
    Straight,
    ThreeOfAKind,
    TwoPair,
    OnePair,
    HighCards,
}

impl HandCategory {
    /// Every category in precedence order, `None` last.
    pub const ALL: [HandCategory; 11] = [
        HandCategory::StraightFlush { royal: true },
        HandCategory::StraightFlush { royal: false },
        HandCategory::FourOfAKind,
        HandCategory::FullHouse,
        HandCategory::Flush,
        HandCategory::Straight,
        HandCategory::ThreeOfAKind,
        HandCategory::TwoPair,
        HandCategory::OnePair,
        HandCategory::HighCards,
        HandCategory::None,
    ];

    pub const fn ordinal(self) -> u8 {
        match self {
            HandCategory::None => 0,
            HandCategory::HighCards => 1,
            HandCategory::OnePair => 2,
            HandCategory::TwoPair => 3,
            HandCategory::ThreeOfAKind => 4,
            HandCategory::Straight => 5,
            HandCategory::Flush => 6,
            HandCategory::FullHouse => 7,
            HandCategory::FourOfAKind => 8,
            HandCategory::StraightFlush { royal: false } => 9,
            HandCategory::StraightFlush { royal: true } => 10,
        }
    }

    pub const fn is_royal(self) -> bool {
        matches!(self, HandCategory::StraightFlush { royal: true })
    }

    pub fn label(self) -> &'static str {
        labels::label(self)
    }
}

impl Ord for HandCategory {
    fn cmp(&self, other: &Self) -> Ordering {
        self.ordinal().cmp(&other.ordinal())
    }
}

impl PartialOrd for HandCategory {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify a hand with the [`Ruleset::Reference`] labels.
///
/// Anything other than exactly five cards is [`HandCategory::None`].
///
/// ```
/// use five_card_rank::cards::{Card, Suit};
/// use five_card_rank::evaluator::{evaluate, HandCategory};
///
/// let hand = [
///     Card::new(Suit::Club, 7),
///     Card::new(Suit::Spade, 7),
///     Card::new(Suit::Diamond, 7),
///     Card::new(Suit::Heart, 7),
///     Card::new(Suit::Diamond, 8),
/// ];
/// assert_eq!(evaluate(&hand), HandCategory::FourOfAKind);
/// assert_eq!(evaluate(&hand[..4]), HandCategory::None);
/// ```
pub fn evaluate(cards: &[Card]) -> HandCategory {
    evaluate_with(cards, Ruleset::Reference)
}

/// Classify a hand of any length under the given ruleset.
pub fn evaluate_with(cards: &[Card], ruleset: Ruleset) -> HandCategory {
    match <&[Card; HAND_SIZE]>::try_from(cards) {
        Ok(five) => evaluate_five(five, ruleset),
        Err(_) => {
            debug!("cannot evaluate {} cards", cards.len());
            HandCategory::None
        }
    }
}

/// Classify exactly five cards.
pub fn evaluate_five(cards: &[Card; HAND_SIZE], ruleset: Ruleset) -> HandCategory {
    use detector::DETECTORS;
    use hand_analysis::HandAnalysis;

    let analysis = HandAnalysis::new(cards);
    trace!(
        "ranks {:?} high {} second {:?} flush {} run {}",
        analysis.ranks.map(|r| r.value()),
        analysis.high_count(),
        analysis.rank_groups.second_count(),
        analysis.is_flush(),
        analysis.is_run()
    );

    // All five cards share one rank: no second bucket to look up.
    if analysis.rank_groups.second_count().is_none() {
        debug!("no second rank bucket, hand is unclassifiable");
        return HandCategory::None;
    }

    DETECTORS
        .iter()
        .find(|d| d.detect(&analysis))
        .map_or(HandCategory::HighCards, |d| d.category(ruleset))
}
