use super::player::Player;
use crate::cards::Board;
use std::sync::Arc;

/// What a node represents in the game tree.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Kind {
    /// A player chooses an action.
    Decision,
    /// A board card is dealt; children differ only by the card.
    Split,
    /// No further action.
    Terminal,
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Decision => write!(f, "DECISION_NODE"),
            Self::Split => write!(f, "SPLIT_NODE"),
            Self::Terminal => write!(f, "END_NODE"),
        }
    }
}

/// A read-only snapshot of one node handed out by a tree [`Service`].
///
/// Carries the node's identifier and a shared handle on its parent chain, so
/// the path to the root can be walked without going back to the service.
/// Two snapshots are equal when their identifiers are; identifiers are stable
/// across reloads of structurally identical trees.
///
/// [`Service`]: super::Service
#[derive(Debug, Clone)]
pub struct Node {
    id: String,
    kind: Kind,
    board: Board,
    player: Option<Player>,
    text: String,
    parent: Option<Arc<Node>>,
}

impl Node {
    pub fn new(
        id: impl Into<String>,
        kind: Kind,
        board: Board,
        player: Option<Player>,
        text: impl Into<String>,
        parent: Option<Arc<Node>>,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            board,
            player,
            text: text.into(),
            parent,
        }
    }
    pub fn id(&self) -> &str {
        &self.id
    }
    pub fn kind(&self) -> Kind {
        self.kind
    }
    pub fn board(&self) -> &Board {
        &self.board
    }
    /// The player to act, or `None` for split and terminal nodes.
    pub fn player(&self) -> Option<Player> {
        self.player
    }
    /// Human readable action label, e.g. `CHECK`, `BET 100`, `Th`.
    pub fn text(&self) -> &str {
        &self.text
    }
    pub fn parent(&self) -> Option<&Node> {
        self.parent.as_deref()
    }
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
    /// This node followed by each of its ancestors, ending at the root.
    pub fn lineage(&self) -> impl Iterator<Item = &Node> {
        std::iter::successors(Some(self), |node| node.parent())
    }
    /// The root this snapshot descends from.
    pub fn root(&self) -> &Node {
        self.lineage().last().unwrap_or(self)
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}
impl Eq for Node {}
impl std::hash::Hash for Node {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} [{}] {} {}", self.id, self.kind, self.board, self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain() -> Node {
        let root = Arc::new(Node::new("r:0", Kind::Decision, Board::empty(), Some(Player::Oop), "", None));
        let call = Arc::new(Node::new("r:0:c", Kind::Decision, Board::empty(), Some(Player::Ip), "CALL", Some(root)));
        Node::new("r:0:c:b", Kind::Decision, Board::empty(), Some(Player::Oop), "BET 100", Some(call))
    }

    #[test]
    fn lineage_ends_at_root() {
        let node = chain();
        let ids = node.lineage().map(Node::id).collect::<Vec<_>>();
        assert!(ids == vec!["r:0:c:b", "r:0:c", "r:0"]);
        assert!(node.root().id() == "r:0");
        assert!(node.root().is_root());
    }

    #[test]
    fn equality_by_id() {
        let a = chain();
        let b = Node::new("r:0:c:b", Kind::Terminal, Board::empty(), None, "other", None);
        assert!(a == b);
    }
}
