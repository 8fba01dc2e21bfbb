use super::stat::Stat;
use crate::Weight;
use crate::cards::Hand;
use std::collections::BTreeMap;

/// Per-hand statistics as returned by the solver for one player in one node.
///
/// Hands the solver did not report read as an empty [`Stat`].
#[derive(Debug, Default, Clone, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Table(BTreeMap<Hand, Stat>);

impl Table {
    pub fn get(&self, hand: &Hand) -> Stat {
        self.0.get(hand).copied().unwrap_or_default()
    }
    pub fn set(&mut self, hand: Hand, stat: Stat) {
        self.0.insert(hand, stat);
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    /// Matchup-weighted total over every hand.
    pub fn total(&self) -> Stat {
        self.0.values().copied().sum()
    }
    /// Raw sum of matchups, skipping NaN entries.
    pub fn matchups(&self) -> Weight {
        self.0
            .values()
            .map(Stat::matchups)
            .filter(|m| !m.is_nan())
            .sum()
    }
}

impl FromIterator<(Hand, Stat)> for Table {
    fn from_iter<I: IntoIterator<Item = (Hand, Stat)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
