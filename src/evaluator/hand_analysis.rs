use super::rank_groups::RankGroups;
use super::straight_info::StraightInfo;
use super::suit_info::SuitInfo;
use crate::cards::{Card, Rank};

/// Pre-computed facts about a 5-card hand.
/// Built once and shared by all category detectors.
#[derive(Debug, Clone)]
pub struct HandAnalysis {
    /// Cards sorted by rank ascending; equal ranks keep their input order.
    pub sorted_cards: [Card; 5],
    pub ranks: [Rank; 5],
    pub rank_groups: RankGroups,
    pub suit_info: SuitInfo,
    pub straight_info: StraightInfo,
}

impl HandAnalysis {
    pub fn new(cards: &[Card; 5]) -> Self {
        let mut sorted_cards = *cards;
        // slice::sort_by_key is stable
        sorted_cards.sort_by_key(|c| c.rank());

        let ranks = sorted_cards.map(Card::rank);
        let rank_groups = RankGroups::from_ranks(&ranks);
        let suit_info = SuitInfo::detect(&sorted_cards);
        let straight_info = StraightInfo::detect(&ranks);

        Self { sorted_cards, ranks, rank_groups, suit_info, straight_info }
    }

    pub fn high_count(&self) -> u8 {
        self.rank_groups.high_count()
    }

    /// Callers only reach detectors once this is known to be present.
    pub fn second_count(&self) -> u8 {
        self.rank_groups.second_count().unwrap_or(0)
    }

    pub fn is_flush(&self) -> bool {
        self.suit_info.is_flush
    }

    pub fn is_run(&self) -> bool {
        self.straight_info.is_run
    }

    /// Sorted cards open with ace then ten.
    pub fn opens_ace_ten(&self) -> bool {
        self.sorted_cards[0].rank() == Rank::ACE && self.sorted_cards[1].rank() == Rank::TEN
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Suit;

    #[test]
    fn test_royal_analysis() {
        let cards = [
            Card::new(Suit::Spade, 1),
            Card::new(Suit::Spade, 10),
            Card::new(Suit::Spade, 11),
            Card::new(Suit::Spade, 12),
            Card::new(Suit::Spade, 13),
        ];
        let analysis = HandAnalysis::new(&cards);

        assert!(analysis.is_flush());
        assert!(analysis.is_run());
        assert!(analysis.opens_ace_ten());
        assert_eq!(analysis.high_count(), 1);
    }

    #[test]
    fn test_sort_is_ascending_and_stable() {
        let cards = [
            Card::new(Suit::Heart, 9),
            Card::new(Suit::Diamond, 3),
            Card::new(Suit::Heart, 12),
            Card::new(Suit::Spade, 12),
            Card::new(Suit::Club, 3),
        ];
        let analysis = HandAnalysis::new(&cards);

        assert_eq!(
            analysis.sorted_cards,
            [
                Card::new(Suit::Diamond, 3),
                Card::new(Suit::Club, 3),
                Card::new(Suit::Heart, 9),
                Card::new(Suit::Heart, 12),
                Card::new(Suit::Spade, 12),
            ]
        );
        assert_eq!(analysis.ranks.map(Rank::value), [3, 3, 9, 12, 12]);
    }

    #[test]
    fn test_full_house_analysis() {
        let cards = [
            Card::new(Suit::Club, 3),
            Card::new(Suit::Spade, 9),
            Card::new(Suit::Diamond, 3),
            Card::new(Suit::Heart, 3),
            Card::new(Suit::Diamond, 9),
        ];
        let analysis = HandAnalysis::new(&cards);

        assert_eq!(analysis.high_count(), 3);
        assert_eq!(analysis.second_count(), 2);
        assert!(!analysis.is_flush());
        assert!(!analysis.is_run());
        assert!(!analysis.opens_ace_ten());
    }

    #[test]
    fn test_offsuit_run_analysis() {
        let cards = [
            Card::new(Suit::Club, 1),
            Card::new(Suit::Spade, 10),
            Card::new(Suit::Diamond, 11),
            Card::new(Suit::Heart, 12),
            Card::new(Suit::Diamond, 13),
        ];
        let analysis = HandAnalysis::new(&cards);

        assert!(analysis.is_run());
        assert!(!analysis.is_flush());
        assert!(analysis.opens_ace_ten());
    }
}
