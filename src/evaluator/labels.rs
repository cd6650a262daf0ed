//! Display labels for hand categories.
//!
//! The evaluator never consults this table; it only exists for callers
//! that render a result.

use super::HandCategory;

/// Fixed display label for a category.
///
/// ```
/// use five_card_rank::evaluator::{labels, HandCategory};
///
/// assert_eq!(labels::label(HandCategory::StraightFlush { royal: true }), "Royal Straight Flush");
/// assert_eq!(labels::label(HandCategory::TwoPair), "Two Pair");
/// ```
pub const fn label(category: HandCategory) -> &'static str {
    match category {
        HandCategory::None => "None",
        HandCategory::StraightFlush { royal: true } => "Royal Straight Flush",
        HandCategory::StraightFlush { royal: false } => "Straight Flush",
        HandCategory::FourOfAKind => "Four of a Kind",
        HandCategory::FullHouse => "Full House",
        HandCategory::Flush => "Flush",
        HandCategory::Straight => "Straight",
        HandCategory::ThreeOfAKind => "Three of a Kind",
        HandCategory::TwoPair => "Two Pair",
        HandCategory::OnePair => "One Pair",
        HandCategory::HighCards => "High Cards",
    }
}

/// Width of the longest label, for column alignment.
pub fn max_label_width() -> usize {
    HandCategory::ALL.iter().map(|c| label(*c).chars().count()).max().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn labels_are_unique() {
        let set: HashSet<&str> = HandCategory::ALL.iter().map(|c| label(*c)).collect();
        assert_eq!(set.len(), HandCategory::ALL.len());
    }

    #[test]
    fn widest_label_is_royal() {
        assert_eq!(max_label_width(), "Royal Straight Flush".len());
    }
}
