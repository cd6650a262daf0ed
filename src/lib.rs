//! five-card-rank: five-card poker hand classifier
//!
//! Goals:
//! - Pure, deterministic classification of exactly five cards
//! - Small, well-documented public API
//! - No panics for bad input: wrong hand sizes classify as `None`
//!
//! ## Quick start: classify a hand
//! ```
//! use five_card_rank::cards::{Card, Suit};
//! use five_card_rank::evaluator::{evaluate, HandCategory};
//!
//! let hand = [
//!     Card::new(Suit::Spade, 1),
//!     Card::new(Suit::Spade, 10),
//!     Card::new(Suit::Spade, 11),
//!     Card::new(Suit::Spade, 12),
//!     Card::new(Suit::Spade, 13),
//! ];
//! assert_eq!(evaluate(&hand), HandCategory::StraightFlush { royal: true });
//! assert_eq!(evaluate(&hand).label(), "Royal Straight Flush");
//! ```
//!
//! Ranks run 1 (ace) to 13 (king). Ace only bridges to ten, so A-10-J-Q-K
//! is a run and A-2-3-4-5 is not.
//!
//! ## Labels
//! By default a run of mixed suits is labeled "Flush" and five suited cards
//! that are not a run are labeled "Straight", matching the historical table
//! this classifier reproduces. Pass [`evaluator::Ruleset::Conventional`] to
//! [`evaluator::evaluate_with`] for standard poker names.
//!
//! ## TUI
//! Deal and classify hands interactively with:
//! ```sh
//! cargo run --bin five-card-rank
//! ```

pub mod cards;
pub mod dealer;
pub mod deck;
pub mod evaluator;
pub mod hand;
pub mod tui;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
