use crate::cards::Rank;

/// Straight run facts over ranks sorted ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StraightInfo {
    pub is_run: bool,
}

impl StraightInfo {
    /// `sorted` must be in ascending rank order.
    ///
    /// Ace only bridges to ten; A-2-3-4-5 is not a run.
    pub fn detect(sorted: &[Rank; 5]) -> Self {
        StraightInfo { is_run: sorted.windows(2).all(|w| connected(w[0], w[1])) }
    }
}

fn connected(current: Rank, next: Rank) -> bool {
    next.value() == current.value() + 1 || (current == Rank::ACE && next == Rank::TEN)
}
