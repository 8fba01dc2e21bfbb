use super::node::Kind;
use super::player::Pair;
use super::player::Player;
use crate::Probability;
use crate::cards::Board;
use crate::stats::Stat;
use crate::stats::Table;
use crate::cards::Hand;
use std::path::Path;

/// A solved tree persisted as JSON.
///
/// Nodes are listed parents first; siblings keep their listed order when a
/// node's children are queried.
///
/// ```json
/// { "nodes": [
///   { "id": "r:0", "kind": "decision", "board": "AsKd7c", "player": "OOP", "text": "" },
///   { "id": "r:0:c", "parent": "r:0", "kind": "decision", "board": "AsKd7c",
///     "player": "IP", "text": "CHECK",
///     "equity": { "OOP": { "AhAd": [0.9, 1.0] }, "IP": { "QsQd": [0.1, 1.0] } },
///     "range": { "OOP": 0.5 } }
/// ] }
/// ```
#[derive(Debug, Default, Clone, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct TreeFile {
    pub nodes: Vec<Record>,
}

/// One node of a [`TreeFile`] together with the solver's answers about it.
#[derive(Debug, Clone, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Record {
    pub id: String,
    #[serde(default)]
    pub parent: Option<String>,
    pub kind: Kind,
    #[serde(default)]
    pub board: Board,
    #[serde(default)]
    pub player: Option<Player>,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub equity: Pair<Table>,
    #[serde(default)]
    pub value: Pair<Table>,
    /// Each player's range weight on reaching this node.
    #[serde(default)]
    pub range: Pair<Probability>,
}

impl TreeFile {
    pub fn read(path: &Path) -> anyhow::Result<Self> {
        let file = std::fs::File::open(path)
            .map_err(|e| anyhow::anyhow!("open tree {}: {}", path.display(), e))?;
        let tree = serde_json::from_reader(std::io::BufReader::new(file))
            .map_err(|e| anyhow::anyhow!("parse tree {}: {}", path.display(), e))?;
        Ok(tree)
    }
    pub fn write(&self, path: &Path) -> anyhow::Result<()> {
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(std::io::BufWriter::new(file), self)?;
        Ok(())
    }
    pub fn push(mut self, record: Record) -> Self {
        self.nodes.push(record);
        self
    }
}

impl Record {
    pub fn new(id: &str, parent: Option<&str>, kind: Kind, board: Board, text: &str) -> Self {
        Self {
            id: id.to_string(),
            parent: parent.map(str::to_string),
            kind,
            board,
            player: None,
            text: text.to_string(),
            equity: Pair::default(),
            value: Pair::default(),
            range: Pair::default(),
        }
    }
    pub fn acting(mut self, player: Player) -> Self {
        self.player = Some(player);
        self
    }
    /// Report a single hand's equity for `player`.
    pub fn with_equity(mut self, player: Player, hand: Hand, stat: Stat) -> Self {
        self.equity[player].set(hand, stat);
        self
    }
    /// Report a single hand's value for `player`.
    pub fn with_value(mut self, player: Player, hand: Hand, stat: Stat) -> Self {
        self.value[player].set(hand, stat);
        self
    }
    pub fn with_range(mut self, player: Player, weight: Probability) -> Self {
        self.range[player] = weight;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_documented_layout() {
        let json = r#"{ "nodes": [
            { "id": "r:0", "kind": "decision", "board": "AsKd7c", "player": "OOP", "text": "" },
            { "id": "r:0:c", "parent": "r:0", "kind": "decision", "board": "AsKd7c",
              "player": "IP", "text": "CHECK",
              "equity": { "OOP": { "AhAd": [0.75, 1.0] }, "IP": { "QsQd": [0.25, 1.0] } },
              "range": { "OOP": 0.5 } }
        ] }"#;
        let tree = serde_json::from_str::<TreeFile>(json).unwrap();
        let check = &tree.nodes[1];
        assert!(tree.nodes.len() == 2);
        assert!(check.parent.as_deref() == Some("r:0"));
        assert!(check.player == Some(Player::Ip));
        assert!(check.range[Player::Oop] == 0.5);
        assert!(check.range[Player::Ip] == 0.0);
        assert!(check.equity[Player::Oop].total() == Stat::new(0.75, 1.0));
        assert!(check.value[Player::Ip].is_empty());
    }

    #[test]
    fn rejects_bad_board() {
        let json = r#"{ "nodes": [ { "id": "r:0", "kind": "split", "board": "AsKd" } ] }"#;
        assert!(serde_json::from_str::<TreeFile>(json).is_err());
    }

    #[test]
    fn disk_round_trip() {
        let dir = std::env::temp_dir().join(format!("runouts-file-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("flop.cfr");
        let tree = TreeFile::default().push(
            Record::new("r:0", None, Kind::Decision, Board::try_from("AsKd7c").unwrap(), "")
                .acting(Player::Oop)
                .with_range(Player::Oop, 1.0),
        );
        tree.write(&path).unwrap();
        assert!(TreeFile::read(&path).unwrap() == tree);
        assert!(TreeFile::read(&dir.join("missing.cfr")).is_err());
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
