use crate::tree::Node;

/// The action labels leading from the root to a node, root excluded.
///
/// Card labels of chance nodes are part of the line, so a turn node's line
/// reads like `CHECK CHECK Th`; the search for similar nodes lets those
/// labels differ.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ActionLine(Vec<String>);

impl ActionLine {
    pub fn labels(&self) -> &[String] {
        &self.0
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&Node> for ActionLine {
    fn from(node: &Node) -> Self {
        let mut labels = node
            .lineage()
            .filter(|n| !n.is_root())
            .map(|n| n.text().to_string())
            .collect::<Vec<_>>();
        labels.reverse();
        Self(labels)
    }
}

impl std::fmt::Display for ActionLine {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::fixture;

    #[test]
    fn root_to_node_order() {
        let ref mut memory = fixture::memory(&["Th"]);
        let node = fixture::select(memory, "r:0:c:c:Th:b");
        let line = ActionLine::from(&node);
        assert!(line.labels() == ["CHECK", "CHECK", "Th", "BET 50"]);
        assert!(line.to_string() == "CHECK CHECK Th BET 50");
    }

    #[test]
    fn root_has_empty_line() {
        let ref mut memory = fixture::memory(&["Th"]);
        let root = fixture::select(memory, "r:0");
        let line = ActionLine::from(&root);
        assert!(line.is_empty());
        assert!(line.to_string().is_empty());
    }
}
