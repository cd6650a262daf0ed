use five_card_rank::cards::{Card, Rank, Suit};
use five_card_rank::evaluator::{evaluate, evaluate_with, HandCategory, Ruleset};
use proptest::prelude::*;

fn any_suit() -> impl Strategy<Value = Suit> {
    prop_oneof![Just(Suit::Spade), Just(Suit::Club), Just(Suit::Diamond), Just(Suit::Heart),]
}

fn any_card() -> impl Strategy<Value = Card> {
    (any_suit(), 1i32..=13).prop_map(|(s, r)| Card::new(s, r))
}

/// Five distinct cards, as dealt from one deck.
fn dealt_hand() -> impl Strategy<Value = [Card; 5]> {
    prop::sample::subsequence((0usize..52).collect::<Vec<_>>(), 5).prop_flat_map(|idx| {
        let cards: Vec<Card> = idx
            .iter()
            .map(|&i| Card::new(Suit::ALL[i / 13], (i % 13) as i32 + 1))
            .collect();
        Just(cards).prop_shuffle().prop_map(|v| [v[0], v[1], v[2], v[3], v[4]])
    })
}

fn permutations(cards: &[Card; 5]) -> Vec<[Card; 5]> {
    let mut out = Vec::with_capacity(120);
    let mut idx = [0usize, 1, 2, 3, 4];
    heap_permute(5, &mut idx, cards, &mut out);
    out
}

fn heap_permute(k: usize, idx: &mut [usize; 5], cards: &[Card; 5], out: &mut Vec<[Card; 5]>) {
    if k == 1 {
        out.push(idx.map(|i| cards[i]));
        return;
    }
    for i in 0..k {
        heap_permute(k - 1, idx, cards, out);
        if k % 2 == 0 {
            idx.swap(i, k - 1);
        } else {
            idx.swap(0, k - 1);
        }
    }
}

proptest! {
    #[test]
    fn category_is_order_independent(cards in prop::array::uniform5(any_card())) {
        let expected = evaluate(&cards);
        let perms = permutations(&cards);
        prop_assert_eq!(perms.len(), 120);
        for p in perms {
            prop_assert_eq!(evaluate(&p), expected);
        }
    }

    #[test]
    fn non_five_lengths_are_none(cards in prop::collection::vec(any_card(), 0..12)) {
        prop_assume!(cards.len() != 5);
        prop_assert_eq!(evaluate(&cards), HandCategory::None);
    }

    #[test]
    fn dealt_hands_always_classify(cards in dealt_hand()) {
        prop_assert_ne!(evaluate(&cards), HandCategory::None);
    }

    #[test]
    fn rulesets_agree_outside_flush_and_straight(cards in prop::array::uniform5(any_card())) {
        let reference = evaluate_with(&cards, Ruleset::Reference);
        let conventional = evaluate_with(&cards, Ruleset::Conventional);
        match reference {
            HandCategory::Flush => prop_assert_eq!(conventional, HandCategory::Straight),
            HandCategory::Straight => prop_assert_eq!(conventional, HandCategory::Flush),
            other => prop_assert_eq!(conventional, other),
        }
    }

    #[test]
    fn royal_only_for_ace_ten_jack_queen_king(cards in dealt_hand()) {
        if evaluate(&cards).is_royal() {
            let mut ranks: Vec<u8> = cards.iter().map(|c| c.rank().value()).collect();
            ranks.sort_unstable();
            prop_assert_eq!(ranks, vec![1, 10, 11, 12, 13]);
        }
    }

    #[test]
    fn every_suited_royal_shape_is_royal(suit in any_suit(), order in Just(vec![1, 10, 11, 12, 13]).prop_shuffle()) {
        let cards: Vec<Card> = order.iter().map(|&r| Card::new(suit, r)).collect();
        prop_assert_eq!(evaluate(&cards), HandCategory::StraightFlush { royal: true });
    }

    #[test]
    fn out_of_range_rank_is_ace(raw in prop_oneof![i32::MIN..=0, 14..=i32::MAX], suit in any_suit()) {
        let card = Card::new(suit, raw);
        prop_assert_eq!(card.rank(), Rank::ACE);
        prop_assert_eq!(card.suit(), suit);
        prop_assert!(Card::try_new(suit, raw).is_err());
    }

    #[test]
    fn in_range_rank_is_verbatim(raw in 1i32..=13, suit in any_suit()) {
        prop_assert_eq!(i32::from(Card::new(suit, raw).rank().value()), raw);
    }
}
