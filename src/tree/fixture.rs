//! Small solved trees used across pipeline tests.
//!
//! ```text
//! r:0            OOP to act on AsKd7c
//! ├─ CHECK       IP to act
//! │  └─ CHECK    turn card dealt
//! │     └─ <t>   OOP to act on AsKd7c<t>
//! │        ├─ CHECK
//! │        └─ BET 50
//! └─ BET 100     IP to act
//!    └─ CALL     turn card dealt
//!       └─ <t>   OOP to act on AsKd7c<t>
//! ```
//!
//! Every turn decision carries 60 equity matchups per seat, and the root
//! carries 120 IP matchups, so each turn node has a 50% global share.
use super::file::Record;
use super::file::TreeFile;
use super::memory::Memory;
use super::node::Kind;
use super::node::Node;
use super::player::Player;
use super::service::Service;
use crate::Probability;
use crate::aggregation::Cancel;
use crate::cards::Board;
use crate::cards::Hand;
use crate::stats::Stat;
use crate::stats::Table;
use std::path::Path;

pub(crate) const FLOP: &str = "AsKd7c";

pub(crate) fn hero() -> Hand {
    Hand::try_from("QhQc").unwrap()
}
pub(crate) fn villain() -> Hand {
    Hand::try_from("JhJc").unwrap()
}

pub(crate) fn board(cards: &str) -> Board {
    Board::try_from(cards).unwrap()
}

/// One tree on [`FLOP`] whose two turn branches deal each of `turns`.
pub(crate) fn tree(turns: &[&str]) -> TreeFile {
    tree_on(FLOP, turns)
}

/// The same tree dealt on another flop. Node ids match across flops.
pub(crate) fn tree_on(cards: &str, turns: &[&str]) -> TreeFile {
    let flop = board(cards);
    let mut tree = TreeFile::default()
        .push(
            Record::new("r:0", None, Kind::Decision, flop.clone(), "")
                .acting(Player::Oop)
                .with_equity(Player::Ip, villain(), Stat::new(60., 120.))
                .with_equity(Player::Oop, hero(), Stat::new(60., 120.)),
        )
        .push(
            Record::new("r:0:c", Some("r:0"), Kind::Decision, flop.clone(), "CHECK")
                .acting(Player::Ip)
                .with_range(Player::Oop, 60.),
        )
        .push(
            Record::new("r:0:b", Some("r:0"), Kind::Decision, flop.clone(), "BET 100")
                .acting(Player::Ip)
                .with_range(Player::Oop, 40.),
        )
        .push(Record::new("r:0:c:c", Some("r:0:c"), Kind::Split, flop.clone(), "CHECK"))
        .push(Record::new("r:0:b:c", Some("r:0:b"), Kind::Split, flop.clone(), "CALL"));
    for line in ["r:0:c:c", "r:0:b:c"] {
        for turn in turns {
            let id = format!("{}:{}", line, turn);
            let runout = board(&format!("{}{}", cards, turn));
            tree = tree
                .push(
                    Record::new(&id, Some(line), Kind::Decision, runout.clone(), turn)
                        .acting(Player::Oop)
                        .with_equity(Player::Oop, hero(), Stat::new(30., 60.))
                        .with_equity(Player::Ip, villain(), Stat::new(30., 60.))
                        .with_value(Player::Oop, hero(), Stat::new(15., 60.))
                        .with_value(Player::Ip, villain(), Stat::new(45., 60.)),
                )
                .push(
                    Record::new(&format!("{}:c", id), Some(id.as_str()), Kind::Decision, runout.clone(), "CHECK")
                        .acting(Player::Ip)
                        .with_range(Player::Oop, 50.),
                )
                .push(
                    Record::new(&format!("{}:b", id), Some(id.as_str()), Kind::Decision, runout, "BET 50")
                        .acting(Player::Ip)
                        .with_range(Player::Oop, 50.),
                );
        }
    }
    tree
}

pub(crate) fn memory(turns: &[&str]) -> Memory {
    Memory::try_from(tree(turns)).unwrap()
}

/// Snapshot of the node with `id` in the loaded tree.
pub(crate) fn select(service: &mut impl Service, id: &str) -> Node {
    let ghost = Node::new(id, Kind::Terminal, Board::empty(), None, "", None);
    service.refresh(&ghost).unwrap()
}

/// Forwards to a [`Memory`] and cancels on the `limit`-th child listing.
pub(crate) struct Counting {
    pub(crate) inner: Memory,
    pub(crate) calls: usize,
    cancel: Cancel,
    limit: usize,
}

impl Counting {
    pub(crate) fn new(inner: Memory, cancel: Cancel, limit: usize) -> Self {
        Self {
            inner,
            calls: 0,
            cancel,
            limit,
        }
    }
}

impl Service for Counting {
    fn load(&mut self, path: &Path) -> anyhow::Result<()> {
        self.inner.load(path)
    }
    fn root(&mut self) -> anyhow::Result<Node> {
        self.inner.root()
    }
    fn refresh(&mut self, node: &Node) -> anyhow::Result<Node> {
        self.inner.refresh(node)
    }
    fn children(&mut self, node: &Node) -> anyhow::Result<Vec<Node>> {
        self.calls += 1;
        if self.calls == self.limit {
            self.cancel.cancel();
        }
        self.inner.children(node)
    }
    fn weight(&mut self, player: Player, node: &Node) -> anyhow::Result<Probability> {
        self.inner.weight(player, node)
    }
    fn equity(&mut self, player: Player, node: &Node) -> anyhow::Result<Table> {
        self.inner.equity(player, node)
    }
    fn value(&mut self, player: Player, node: &Node) -> anyhow::Result<Table> {
        self.inner.value(player, node)
    }
}
