use crate::Error;
use crate::report::Line;
use crate::tree::Node;
use crate::tree::Pair;
use crate::tree::Service;

/// Gather one node's [`Line`] from the service.
///
/// Equity and value are folded over every hand of both players. When a player
/// acts in `node`, each child contributes the acting player's range weight on
/// reaching it, keyed by the child's label in listing order.
pub fn collect<S>(service: &mut S, node: &Node) -> Result<Line, Error>
where
    S: Service,
{
    let mut line = Line::new(node.board().clone());
    line.equity = Pair::try_from_fn(|player| service.equity(player, node).map(|t| t.total()))?;
    line.value = Pair::try_from_fn(|player| service.value(player, node).map(|t| t.total()))?;
    if let Some(actor) = node.player() {
        for child in service.children(node)? {
            let weight = service.weight(actor, &child)?;
            line.push(child.text(), weight);
        }
    }
    Ok(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::Stat;
    use crate::tree::Player;
    use crate::tree::fixture;

    #[test]
    fn decision_node() {
        let ref mut memory = fixture::memory(&["Th"]);
        let node = fixture::select(memory, "r:0:c:c:Th");
        let line = collect(memory, &node).unwrap();
        assert!(line.board == fixture::board("AsKd7cTh"));
        assert!(line.equity[Player::Oop] == Stat::new(30., 60.));
        assert!(line.equity[Player::Ip] == Stat::new(30., 60.));
        assert!(line.value[Player::Oop] == Stat::new(15., 60.));
        assert!(line.value[Player::Ip] == Stat::new(45., 60.));
        assert!(line.actions == vec!["CHECK", "BET 50"]);
        assert!(line.weight("CHECK") == 50.);
        assert!(line.weight("BET 50") == 50.);
    }

    #[test]
    fn acting_player_weights() {
        let ref mut memory = fixture::memory(&["Th"]);
        let root = fixture::select(memory, "r:0");
        let line = collect(memory, &root).unwrap();
        assert!(line.actions == vec!["CHECK", "BET 100"]);
        assert!(line.weight("CHECK") == 60.);
        assert!(line.weight("BET 100") == 40.);
    }

    #[test]
    fn chance_node_has_no_actions() {
        let ref mut memory = fixture::memory(&["Th", "2c"]);
        let split = fixture::select(memory, "r:0:c:c");
        let line = collect(memory, &split).unwrap();
        assert!(split.player().is_none());
        assert!(line.actions.is_empty());
        assert!(line.equity[Player::Oop].ratio().is_none());
    }
}
