use log::debug;
use std::fmt;
use std::str::FromStr;

/// Card rank from 1 (ace) to 13 (king).
///
/// Ace is always the lowest rank; the only place it is treated as
/// adjacent to a high card is the ace-to-ten bridge of a straight run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rank(u8);

impl Rank {
    pub const ACE: Rank = Rank(1);
    pub const TEN: Rank = Rank(10);
    pub const JACK: Rank = Rank(11);
    pub const QUEEN: Rank = Rank(12);
    pub const KING: Rank = Rank(13);

    pub const MIN: u8 = 1;
    pub const MAX: u8 = 13;

    pub const ALL: [Rank; 13] = [
        Rank(1),
        Rank(2),
        Rank(3),
        Rank(4),
        Rank(5),
        Rank(6),
        Rank(7),
        Rank(8),
        Rank(9),
        Rank(10),
        Rank(11),
        Rank(12),
        Rank(13),
    ];

    /// Build a rank from a raw integer, falling back to ace when the value
    /// is outside `1..=13`.
    ///
    /// This leniency silently turns a bad input into a valid ace instead of
    /// reporting it; use [`Rank::try_new`] when the caller needs to know.
    ///
    /// ```
    /// use five_card_rank::cards::Rank;
    ///
    /// assert_eq!(Rank::clamped(12), Rank::QUEEN);
    /// assert_eq!(Rank::clamped(0), Rank::ACE);
    /// assert_eq!(Rank::clamped(14), Rank::ACE);
    /// ```
    pub fn clamped(raw: i32) -> Self {
        match Self::try_new(raw) {
            Ok(rank) => rank,
            Err(_) => {
                debug!("rank {raw} out of range, using ace");
                Rank::ACE
            }
        }
    }

    /// Build a rank, rejecting values outside `1..=13`.
    pub fn try_new(raw: i32) -> Result<Self, CardError> {
        if (i32::from(Self::MIN)..=i32::from(Self::MAX)).contains(&raw) {
            Ok(Rank(raw as u8))
        } else {
            Err(CardError::RankOutOfRange(raw))
        }
    }

    pub const fn value(self) -> u8 {
        self.0
    }

    pub const fn is_ace(self) -> bool {
        self.0 == 1
    }

    pub const fn symbol(self) -> &'static str {
        match self.0 {
            1 => "A",
            2 => "2",
            3 => "3",
            4 => "4",
            5 => "5",
            6 => "6",
            7 => "7",
            8 => "8",
            9 => "9",
            10 => "10",
            11 => "J",
            12 => "Q",
            _ => "K",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RankParseError {
    #[error("invalid rank: '{0}'")]
    Invalid(String),
}

impl FromStr for Rank {
    type Err = RankParseError;

    /// Accepts `A`, `J`, `Q`, `K`, `T` and the numbers `1..=13`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        let rank = match t.to_ascii_uppercase().as_str() {
            "A" => Rank::ACE,
            "T" => Rank::TEN,
            "J" => Rank::JACK,
            "Q" => Rank::QUEEN,
            "K" => Rank::KING,
            digits => digits
                .parse::<i32>()
                .ok()
                .and_then(|v| Rank::try_new(v).ok())
                .ok_or_else(|| RankParseError::Invalid(s.to_string()))?,
        };
        Ok(rank)
    }
}

/// The four suits. Suits only ever compare for equality during evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    Spade,
    Club,
    Diamond,
    Heart,
}

impl Suit {
    /// Every suit, in deck generation order.
    pub const ALL: [Suit; 4] = [Suit::Spade, Suit::Club, Suit::Diamond, Suit::Heart];

    pub const fn to_char(self) -> char {
        match self {
            Suit::Spade => 's',
            Suit::Club => 'c',
            Suit::Diamond => 'd',
            Suit::Heart => 'h',
        }
    }

    pub const fn glyph(self) -> char {
        match self {
            Suit::Spade => '♠',
            Suit::Club => '♣',
            Suit::Diamond => '♦',
            Suit::Heart => '♥',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SuitParseError {
    #[error("invalid suit: '{0}'")]
    Invalid(String),
}

impl FromStr for Suit {
    type Err = SuitParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        let mut chars = t.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Suit::try_from(c);
        }
        match t.to_ascii_lowercase().as_str() {
            "spade" | "spades" => Ok(Suit::Spade),
            "club" | "clubs" => Ok(Suit::Club),
            "diamond" | "diamonds" => Ok(Suit::Diamond),
            "heart" | "hearts" => Ok(Suit::Heart),
            _ => Err(SuitParseError::Invalid(s.to_string())),
        }
    }
}

impl TryFrom<char> for Suit {
    type Error = SuitParseError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_lowercase() {
            's' | '♠' => Ok(Suit::Spade),
            'c' | '♣' => Ok(Suit::Club),
            'd' | '♦' => Ok(Suit::Diamond),
            'h' | '♥' => Ok(Suit::Heart),
            _ => Err(SuitParseError::Invalid(c.to_string())),
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CardError {
    #[error("rank {0} is outside 1..=13")]
    RankOutOfRange(i32),
}

/// A playing card: suit + rank.
///
/// ```
/// use five_card_rank::cards::{Card, Rank, Suit};
///
/// let card = Card::new(Suit::Spade, 1);
/// assert_eq!(card.rank(), Rank::ACE);
/// assert_eq!(card.to_string(), "As");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    suit: Suit,
    rank: Rank,
}

impl Card {
    /// Build a card from a raw rank. Out-of-range ranks become an ace,
    /// see [`Rank::clamped`].
    pub fn new(suit: Suit, rank: i32) -> Self {
        Self { suit, rank: Rank::clamped(rank) }
    }

    /// Build a card, rejecting out-of-range ranks.
    pub fn try_new(suit: Suit, rank: i32) -> Result<Self, CardError> {
        Ok(Self { suit, rank: Rank::try_new(rank)? })
    }

    pub const fn with_rank(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    pub const fn suit(self) -> Suit {
        self.suit
    }

    pub const fn rank(self) -> Rank {
        self.rank
    }

    pub fn same_suit(self, other: Card) -> bool {
        self.suit == other.suit
    }

    pub fn same_rank(self, other: Card) -> bool {
        self.rank == other.rank
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CardParseError {
    #[error("invalid card: '{0}'")]
    Invalid(String),
    #[error(transparent)]
    Rank(#[from] RankParseError),
    #[error(transparent)]
    Suit(#[from] SuitParseError),
}

impl FromStr for Card {
    type Err = CardParseError;

    /// Rank followed by a one-character suit: `As`, `10h`, `13♦`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        let Some((split, suit_ch)) = t.char_indices().last() else {
            return Err(CardParseError::Invalid(s.to_string()));
        };
        if split == 0 {
            return Err(CardParseError::Invalid(s.to_string()));
        }
        let rank = Rank::from_str(&t[..split])?;
        let suit = Suit::try_from(suit_ch)?;
        Ok(Card::with_rank(suit, rank))
    }
}

/// Parse multiple cards separated by whitespace or commas.
///
/// ```
/// use five_card_rank::cards::{parse_cards, Card, Suit};
///
/// let cards = parse_cards("As, 10s Js").unwrap();
/// assert_eq!(cards[0], Card::new(Suit::Spade, 1));
/// assert_eq!(cards[1], Card::new(Suit::Spade, 10));
/// assert_eq!(cards[2], Card::new(Suit::Spade, 11));
/// ```
pub fn parse_cards(input: &str) -> Result<Vec<Card>, CardParseError> {
    input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .map(Card::from_str)
        .collect()
}
