use crate::cards::Rank;

/// Rank frequency histogram of a hand, sorted by (count desc, rank asc).
///
/// Example: 3 9 3 3 9 groups as [(3, 3), (9, 2)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankGroups {
    groups: Vec<(Rank, u8)>,
}

impl RankGroups {
    /// Build the histogram from ranks in any order.
    pub fn from_ranks(ranks: &[Rank]) -> Self {
        let mut counts = [0u8; Rank::MAX as usize + 1];
        for rank in ranks {
            counts[rank.value() as usize] += 1;
        }

        let mut groups: Vec<(Rank, u8)> = Rank::ALL
            .iter()
            .copied()
            .filter_map(|rank| {
                let count = counts[rank.value() as usize];
                (count > 0).then_some((rank, count))
            })
            .collect();

        groups.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

        Self { groups }
    }

    /// Largest bucket count; zero for an empty histogram.
    pub fn high_count(&self) -> u8 {
        self.groups.first().map_or(0, |&(_, count)| count)
    }

    /// Second largest bucket count, absent when every card shares one rank.
    pub fn second_count(&self) -> Option<u8> {
        self.groups.get(1).map(|&(_, count)| count)
    }

    #[cfg(test)]
    pub fn groups(&self) -> &[(Rank, u8)] {
        &self.groups
    }
}
