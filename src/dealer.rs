//! Shuffle-and-deal session around the evaluator.
//!
//! Every deal shuffles a fresh standard deck, takes the top five cards and
//! classifies them. The session keeps a running tally per category and a
//! short history of recent deals.

use crate::deck::Deck;
use crate::evaluator::{HandCategory, Ruleset};
use crate::hand::{Hand, HandError};
use log::{debug, info};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::VecDeque;

/// Dealing session settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DealConfig {
    /// Fixed seed for a reproducible session; a random one is drawn when absent.
    pub seed: Option<u64>,
    pub ruleset: Ruleset,
}

/// One dealt hand and its classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deal {
    pub number: u64,
    pub hand: Hand,
    pub category: HandCategory,
}

/// Per-category counts, indexed in [`HandCategory::ALL`] order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tally {
    counts: [u64; HandCategory::ALL.len()],
}

impl Tally {
    pub fn record(&mut self, category: HandCategory) {
        if let Some(i) = Self::index(category) {
            self.counts[i] += 1;
        }
    }

    pub fn count(&self, category: HandCategory) -> u64 {
        Self::index(category).map_or(0, |i| self.counts[i])
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Categories with their counts, in precedence order.
    pub fn iter(&self) -> impl Iterator<Item = (HandCategory, u64)> + '_ {
        HandCategory::ALL.iter().copied().zip(self.counts.iter().copied())
    }

    fn index(category: HandCategory) -> Option<usize> {
        HandCategory::ALL.iter().position(|c| *c == category)
    }
}

#[derive(Debug, Clone)]
pub struct Dealer {
    config: DealConfig,
    seed: u64,
    rng: ChaCha8Rng,
    tally: Tally,
    history: VecDeque<Deal>,
}

impl Dealer {
    /// Deals kept for [`Dealer::history_recent`].
    pub const HISTORY_LIMIT: usize = 200;

    pub fn new(config: DealConfig) -> Self {
        let seed = config.seed.unwrap_or_else(|| rand::rng().random());
        info!("dealer seeded with {seed}, {} labels", config.ruleset);
        Self {
            config,
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
            tally: Tally::default(),
            history: VecDeque::with_capacity(Self::HISTORY_LIMIT),
        }
    }

    pub fn config(&self) -> DealConfig {
        self.config
    }

    /// The seed actually in use, drawn or configured.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn ruleset(&self) -> Ruleset {
        self.config.ruleset
    }

    pub fn tally(&self) -> &Tally {
        &self.tally
    }

    pub fn deals(&self) -> u64 {
        self.tally.total()
    }

    pub fn last(&self) -> Option<&Deal> {
        self.history.back()
    }

    /// Shuffle a fresh deck, deal five and classify them.
    pub fn deal(&mut self) -> Result<Deal, HandError> {
        let mut deck = Deck::standard();
        deck.shuffle_with(&mut self.rng);
        let hand = deck.deal_hand()?;
        let category = hand.evaluate(self.config.ruleset);

        self.tally.record(category);
        let deal = Deal { number: self.tally.total(), hand, category };
        debug!("deal #{}: {} -> {}", deal.number, deal.hand, deal.category);

        if self.history.len() == Self::HISTORY_LIMIT {
            self.history.pop_front();
        }
        self.history.push_back(deal);
        Ok(deal)
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Up to `n` most recent deals, oldest first, skipping the newest `offset`.
    pub fn history_recent(&self, n: usize, offset: usize) -> Vec<Deal> {
        let len = self.history.len();
        if n == 0 || len == 0 {
            return Vec::new();
        }
        let offset = offset.min(len.saturating_sub(n));
        let end = len - offset;
        let start = end.saturating_sub(n);
        self.history.range(start..end).copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(seed: u64) -> Dealer {
        Dealer::new(DealConfig { seed: Some(seed), ruleset: Ruleset::Reference })
    }

    #[test]
    fn same_seed_deals_same_hands() {
        let mut a = seeded(11);
        let mut b = seeded(11);
        for _ in 0..20 {
            assert_eq!(a.deal().unwrap(), b.deal().unwrap());
        }
    }

    #[test]
    fn configured_seed_is_reported() {
        assert_eq!(seeded(99).seed(), 99);
    }

    #[test]
    fn each_deal_is_five_distinct_cards() {
        let mut dealer = seeded(3);
        for _ in 0..50 {
            let deal = dealer.deal().unwrap();
            let cards = deal.hand.cards();
            for i in 0..cards.len() {
                for j in (i + 1)..cards.len() {
                    assert_ne!(cards[i], cards[j]);
                }
            }
            assert_ne!(deal.category, HandCategory::None);
        }
    }

    #[test]
    fn tally_counts_every_deal() {
        let mut dealer = seeded(5);
        for _ in 0..30 {
            dealer.deal().unwrap();
        }
        assert_eq!(dealer.deals(), 30);
        assert_eq!(dealer.tally().iter().map(|(_, n)| n).sum::<u64>(), 30);
        assert_eq!(dealer.last().map(|d| d.number), Some(30));
    }

    #[test]
    fn tally_record_and_count() {
        let mut tally = Tally::default();
        tally.record(HandCategory::OnePair);
        tally.record(HandCategory::OnePair);
        tally.record(HandCategory::StraightFlush { royal: true });
        assert_eq!(tally.count(HandCategory::OnePair), 2);
        assert_eq!(tally.count(HandCategory::StraightFlush { royal: true }), 1);
        assert_eq!(tally.count(HandCategory::StraightFlush { royal: false }), 0);
        assert_eq!(tally.total(), 3);
    }

    #[test]
    fn history_pages_from_the_end() {
        let mut dealer = seeded(8);
        for _ in 0..10 {
            dealer.deal().unwrap();
        }
        let newest = dealer.history_recent(3, 0);
        assert_eq!(newest.iter().map(|d| d.number).collect::<Vec<_>>(), vec![8, 9, 10]);
        let older = dealer.history_recent(3, 2);
        assert_eq!(older.iter().map(|d| d.number).collect::<Vec<_>>(), vec![6, 7, 8]);
        let clamped = dealer.history_recent(3, 100);
        assert_eq!(clamped[0].number, 1);
        assert!(dealer.history_recent(0, 0).is_empty());
    }

    #[test]
    fn history_is_bounded() {
        let mut dealer = seeded(1);
        for _ in 0..(Dealer::HISTORY_LIMIT + 5) {
            dealer.deal().unwrap();
        }
        assert_eq!(dealer.history_len(), Dealer::HISTORY_LIMIT);
        assert_eq!(dealer.history_recent(1, Dealer::HISTORY_LIMIT)[0].number, 6);
    }

    #[test]
    fn full_history_drops_oldest_and_stays_in_order() {
        let mut dealer = seeded(4);
        let extra = 37;
        for _ in 0..(Dealer::HISTORY_LIMIT + extra) {
            dealer.deal().unwrap();
        }
        let all = dealer.history_recent(Dealer::HISTORY_LIMIT, 0);
        let numbers: Vec<u64> = all.iter().map(|d| d.number).collect();
        let expected: Vec<u64> =
            ((extra as u64 + 1)..=(Dealer::HISTORY_LIMIT + extra) as u64).collect();
        assert_eq!(numbers, expected);
        assert_eq!(dealer.last().map(|d| d.number), Some((Dealer::HISTORY_LIMIT + extra) as u64));
    }
}
