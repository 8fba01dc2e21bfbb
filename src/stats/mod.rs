//! Wins/matchups statistics.
//!
//! - [`Stat`] — One matchup-weighted statistic and its folding rules
//! - [`Table`] — Per-hand statistics for one player in one node
mod stat;
mod table;

pub use stat::*;
pub use table::*;
