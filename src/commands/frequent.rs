//! Most frequent anagram groups command

use crate::search::Dictionary;

/// One ranked anagram group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupReport {
    pub signature: String,
    pub words: Vec<String>,
}

/// The largest anagram groups of a dictionary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankingReport {
    pub requested: usize,
    pub total_groups: usize,
    pub groups: Vec<GroupReport>,
}

impl RankingReport {
    /// Size of the largest reported group
    #[must_use]
    pub fn largest(&self) -> usize {
        self.groups.first().map_or(0, |g| g.words.len())
    }
}

/// Collect the `count` largest anagram groups
#[must_use]
pub fn rank_groups(dictionary: &Dictionary, count: usize) -> RankingReport {
    let groups = dictionary
        .ranking()
        .top(dictionary.index(), count)
        .map(|group| GroupReport {
            signature: group.signature().to_string(),
            words: group
                .positions()
                .iter()
                .filter_map(|&position| dictionary.word(position))
                .map(str::to_string)
                .collect(),
        })
        .collect();

    RankingReport {
        requested: count,
        total_groups: dictionary.index().group_count(),
        groups,
    }
}
