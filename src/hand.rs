use crate::cards::{parse_cards, Card};
use crate::evaluator::{evaluate_five, HandCategory, Ruleset};
use std::fmt;
use std::str::FromStr;

/// Number of cards in an evaluated hand.
pub const HAND_SIZE: usize = 5;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error("expected exactly 5 cards, got {0}")]
    CardCount(usize),
    #[error("card parse error: {0}")]
    CardParse(String),
}

/// Five cards in the order the caller supplied them.
///
/// Duplicates are accepted: a hand is just a value handed to the evaluator,
/// not a draw from a single deck.
///
/// ```
/// use five_card_rank::evaluator::{HandCategory, Ruleset};
/// use five_card_rank::hand::Hand;
///
/// let hand: Hand = "As 10s Js Qs Ks".parse().unwrap();
/// assert_eq!(hand.evaluate(Ruleset::Reference), HandCategory::StraightFlush { royal: true });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hand([Card; HAND_SIZE]);

impl Hand {
    pub const fn new(cards: [Card; HAND_SIZE]) -> Self {
        Self(cards)
    }

    pub fn from_slice(slice: &[Card]) -> Result<Self, HandError> {
        let cards: [Card; HAND_SIZE] =
            slice.try_into().map_err(|_| HandError::CardCount(slice.len()))?;
        Ok(Self(cards))
    }

    pub fn as_array(&self) -> &[Card; HAND_SIZE] {
        &self.0
    }

    pub fn cards(&self) -> &[Card] {
        &self.0
    }

    pub fn evaluate(&self, ruleset: Ruleset) -> HandCategory {
        evaluate_five(&self.0, ruleset)
    }
}

impl From<[Card; HAND_SIZE]> for Hand {
    fn from(cards: [Card; HAND_SIZE]) -> Self {
        Self(cards)
    }
}

impl FromStr for Hand {
    type Err = HandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s).map_err(|e| HandError::CardParse(e.to_string()))?;
        Self::from_slice(&cards)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Suit;

    #[test]
    fn from_slice_requires_five_cards() {
        let cards = [Card::new(Suit::Heart, 2); 6];
        assert_eq!(Hand::from_slice(&cards[..4]), Err(HandError::CardCount(4)));
        assert_eq!(Hand::from_slice(&cards), Err(HandError::CardCount(6)));
        assert!(Hand::from_slice(&cards[..5]).is_ok());
    }

    #[test]
    fn duplicates_are_accepted() {
        let hand: Hand = "Ah 3s Ah As Kh".parse().unwrap();
        assert_eq!(hand.as_array()[0], hand.as_array()[2]);
    }

    #[test]
    fn parsing_and_display_keep_caller_order() {
        let hand: Hand = "9h, 3d Qh Qs 3d".parse().unwrap();
        assert_eq!(hand.to_string(), "9h 3d Qh Qs 3d");
        assert_eq!(hand.cards()[2], Card::new(Suit::Heart, 12));
    }

    #[test]
    fn parse_errors_are_reported() {
        assert!(matches!("As Kd".parse::<Hand>(), Err(HandError::CardCount(2))));
        assert!(matches!("As Kd Qx Jc 10c".parse::<Hand>(), Err(HandError::CardParse(_))));
    }
}
