use crate::Probability;
use crate::cards::Board;
use crate::stats::Stat;
use crate::tree::Pair;
use std::collections::HashMap;

/// Statistics of one node, or the matchup-weighted sum of several.
///
/// `actions` keeps the order in which the acting player's children were
/// listed; `weights` maps each of them to the acting player's range weight
/// after taking it. Lines of non-decision nodes have no actions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Line {
    pub board: Board,
    pub equity: Pair<Stat>,
    pub value: Pair<Stat>,
    pub actions: Vec<String>,
    pub weights: HashMap<String, Probability>,
}

impl Line {
    pub fn new(board: Board) -> Self {
        Self {
            board,
            ..Self::default()
        }
    }
    /// Record an action and the range weight behind it. Repeated labels
    /// accumulate and keep their first position.
    pub fn push(&mut self, action: &str, weight: Probability) {
        match self.weights.get_mut(action) {
            Some(w) => *w += weight,
            None => {
                self.actions.push(action.to_string());
                self.weights.insert(action.to_string(), weight);
            }
        }
    }
    /// Range weight behind an action, zero if the action never occurred.
    pub fn weight(&self, action: &str) -> Probability {
        self.weights.get(action).copied().unwrap_or_default()
    }
}
