use super::file::Record;
use super::file::TreeFile;
use super::node::Node;
use super::player::Player;
use super::service::Service;
use crate::Probability;
use crate::stats::Table;
use petgraph::graph::DiGraph;
use petgraph::graph::NodeIndex;
use std::collections::HashMap;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;

/// A [`Service`] that holds solved trees in memory.
///
/// Trees come from [`TreeFile`]s: either registered up front with
/// [`Memory::insert`] or read from disk the first time their path is loaded.
/// The loaded tree is a petgraph `DiGraph` whose edges point from parent to
/// child; node identifiers index into it.
#[derive(Debug, Default)]
pub struct Memory {
    files: HashMap<PathBuf, TreeFile>,
    graph: DiGraph<Record, ()>,
    index: HashMap<String, NodeIndex>,
}

impl Memory {
    /// Register a tree under `path` without touching the disk.
    pub fn insert(&mut self, path: impl Into<PathBuf>, tree: TreeFile) {
        self.files.insert(path.into(), tree);
    }
    /// Snapshot of the node with identifier `id` in the loaded tree.
    pub fn get(&self, id: &str) -> Option<Node> {
        self.index.get(id).map(|x| self.snapshot(*x))
    }
    /// Number of nodes in the loaded tree.
    pub fn n(&self) -> usize {
        self.graph.node_count()
    }

    fn plant(&mut self, tree: TreeFile) -> anyhow::Result<()> {
        let mut graph = DiGraph::with_capacity(tree.nodes.len(), tree.nodes.len());
        let mut index = HashMap::with_capacity(tree.nodes.len());
        for record in tree.nodes {
            let parent = match record.parent.as_deref() {
                None if graph.node_count() == 0 => None,
                None => anyhow::bail!("second root {}", record.id),
                Some(id) => Some(
                    index
                        .get(id)
                        .copied()
                        .ok_or_else(|| anyhow::anyhow!("{} listed before parent {}", record.id, id))?,
                ),
            };
            if index.contains_key(&record.id) {
                anyhow::bail!("duplicate node {}", record.id);
            }
            let id = record.id.clone();
            let tail = graph.add_node(record);
            if let Some(head) = parent {
                graph.add_edge(head, tail, ());
            }
            index.insert(id, tail);
        }
        if graph.node_count() == 0 {
            anyhow::bail!("tree has no nodes");
        }
        self.graph = graph;
        self.index = index;
        Ok(())
    }

    fn find(&self, node: &Node) -> anyhow::Result<NodeIndex> {
        self.index
            .get(node.id())
            .copied()
            .ok_or_else(|| anyhow::anyhow!("node {} not in loaded tree", node.id()))
    }
    fn record(&self, node: &Node) -> anyhow::Result<&Record> {
        Ok(&self.graph[self.find(node)?])
    }
    fn parent(&self, x: NodeIndex) -> Option<NodeIndex> {
        self.graph
            .neighbors_directed(x, petgraph::Direction::Incoming)
            .next()
    }
    /// Snapshot a node along with its whole parent chain.
    fn snapshot(&self, x: NodeIndex) -> Node {
        let parent = self.parent(x).map(|p| Arc::new(self.snapshot(p)));
        let record = &self.graph[x];
        Node::new(
            record.id.as_str(),
            record.kind,
            record.board.clone(),
            record.player,
            record.text.as_str(),
            parent,
        )
    }
}

/// A memory with `tree` already loaded.
impl TryFrom<TreeFile> for Memory {
    type Error = anyhow::Error;
    fn try_from(tree: TreeFile) -> Result<Self, Self::Error> {
        let mut memory = Self::default();
        memory.plant(tree)?;
        Ok(memory)
    }
}

impl Service for Memory {
    fn load(&mut self, path: &Path) -> anyhow::Result<()> {
        let tree = match self.files.get(path) {
            Some(tree) => tree.clone(),
            None => TreeFile::read(path)?,
        };
        self.plant(tree)?;
        log::debug!("loaded {} nodes from {}", self.n(), path.display());
        Ok(())
    }
    fn root(&mut self) -> anyhow::Result<Node> {
        match self.graph.node_count() {
            0 => Err(anyhow::anyhow!("no tree loaded")),
            _ => Ok(self.snapshot(NodeIndex::new(0))),
        }
    }
    fn refresh(&mut self, node: &Node) -> anyhow::Result<Node> {
        Ok(self.snapshot(self.find(node)?))
    }
    fn children(&mut self, node: &Node) -> anyhow::Result<Vec<Node>> {
        let mut children = self
            .graph
            .neighbors_directed(self.find(node)?, petgraph::Direction::Outgoing)
            .collect::<Vec<_>>();
        children.sort();
        Ok(children.into_iter().map(|x| self.snapshot(x)).collect())
    }
    fn weight(&mut self, player: Player, node: &Node) -> anyhow::Result<Probability> {
        Ok(self.record(node)?.range[player])
    }
    fn equity(&mut self, player: Player, node: &Node) -> anyhow::Result<Table> {
        Ok(self.record(node)?.equity[player].clone())
    }
    fn value(&mut self, player: Player, node: &Node) -> anyhow::Result<Table> {
        Ok(self.record(node)?.value[player].clone())
    }
}
