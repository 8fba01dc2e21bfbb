use super::node::Node;
use super::player::Player;
use crate::Probability;
use crate::stats::Table;
use std::path::Path;

/// The solver as seen by the aggregation pipeline.
///
/// Owns the currently loaded tree and answers queries against it. The
/// pipeline never assumes anything about how the tree is laid out in memory;
/// everything it learns about the tree comes through these calls.
///
/// Every call takes `&mut self`: the loaded tree is a single resource, and a
/// run holds exclusive access to it from the first load to the last query.
pub trait Service {
    /// Replace the loaded tree with the one persisted at `path`.
    fn load(&mut self, path: &Path) -> anyhow::Result<()>;
    /// The root of the loaded tree.
    fn root(&mut self) -> anyhow::Result<Node>;
    /// Re-resolve a node obtained before the last [`load`](Service::load)
    /// against the tree loaded now.
    fn refresh(&mut self, node: &Node) -> anyhow::Result<Node>;
    /// Children of a node, in the solver's listing order.
    fn children(&mut self, node: &Node) -> anyhow::Result<Vec<Node>>;
    /// Total weight of a player's range on reaching `node`.
    fn weight(&mut self, player: Player, node: &Node) -> anyhow::Result<Probability>;
    /// Per-hand equity of a player in `node`.
    fn equity(&mut self, player: Player, node: &Node) -> anyhow::Result<Table>;
    /// Per-hand expected value of a player in `node`.
    fn value(&mut self, player: Player, node: &Node) -> anyhow::Result<Table>;
}
