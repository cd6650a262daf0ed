use crate::cards::Card;

/// Whether every card shares one suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuitInfo {
    pub is_flush: bool,
}

impl SuitInfo {
    pub fn detect(cards: &[Card; 5]) -> Self {
        let first = cards[0];
        SuitInfo { is_flush: cards.iter().all(|c| c.same_suit(first)) }
    }
}
