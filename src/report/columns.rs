use super::digits::cell;
use super::digits::fraction;
use super::line::Line;
use crate::Config;
use crate::Weight;
use crate::cards::Street;
use crate::tree::Player;

/// Statistic columns present in every report, after the street columns.
pub const FIXED: [&str; 5] = ["Global %", "OOP Equity", "IP Equity", "OOP EV", "IP EV"];

/// The column layout of one report.
///
/// One column per street dealt on the selected node's board, the [`FIXED`]
/// statistic columns, then one column per action. Every row is laid out
/// against the same action list, whatever order its own line lists them in.
#[derive(Debug, Clone, PartialEq)]
pub struct Columns {
    street: Street,
    actions: Vec<String>,
}

impl Columns {
    pub fn new(street: Street, actions: Vec<String>) -> Self {
        Self { street, actions }
    }
    pub fn actions(&self) -> &[String] {
        &self.actions
    }
    pub fn len(&self) -> usize {
        self.street.columns().len() + FIXED.len() + self.actions.len()
    }
    pub fn header(&self) -> Vec<String> {
        self.street
            .columns()
            .iter()
            .map(Street::to_string)
            .chain(FIXED.iter().map(|s| s.to_string()))
            .chain(self.actions.iter().cloned())
            .collect()
    }
    /// Cells of one line. `root` is the IP equity matchup count at the tree
    /// root, the denominator of the global share. Action cells follow the
    /// header's order but share out every action the line itself took.
    pub fn row(&self, line: &Line, root: Weight, config: &Config) -> Vec<String> {
        let stat = config.stat_digits;
        let freq = config.freq_digits;
        let board = line.board.cells(self.street);
        let global = cell(fraction(line.equity[Player::Oop].matchups() * 100., root), stat);
        let stats = [
            line.equity[Player::Oop],
            line.equity[Player::Ip],
            line.value[Player::Oop],
            line.value[Player::Ip],
        ]
        .map(|s| cell(s.ratio(), stat));
        let sum = line.actions.iter().map(|a| line.weight(a)).sum::<f64>();
        let frequencies = self
            .actions
            .iter()
            .map(|a| cell(fraction(line.weight(a) * 100., sum), freq));
        board
            .into_iter()
            .chain(std::iter::once(global))
            .chain(stats)
            .chain(frequencies)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::UNDEFINED;
    use crate::cards::Board;
    use crate::stats::Stat;

    fn actions() -> Vec<String> {
        vec!["CHECK".to_string(), "BET 100".to_string()]
    }

    #[test]
    fn header_count() {
        for (cards, streets) in [("", 0), ("AsKd7c", 1), ("AsKd7cTh", 2), ("AsKd7cTh2c", 3)] {
            let board = Board::try_from(cards).unwrap();
            let columns = Columns::new(board.street(), actions());
            assert!(board.len().saturating_sub(2) == streets);
            assert!(columns.len() == streets + 5 + 2);
            assert!(columns.header().len() == columns.len());
        }
    }

    #[test]
    fn header_names() {
        let columns = Columns::new(Street::Turn, actions());
        assert!(
            columns.header()
                == vec!["Flop", "Turn", "Global %", "OOP Equity", "IP Equity", "OOP EV", "IP EV", "CHECK", "BET 100"]
        );
    }

    #[test]
    fn row_cells() {
        let mut line = Line::new(Board::try_from("AsKd7cTh").unwrap());
        line.equity[Player::Oop] = Stat::new(30., 60.);
        line.equity[Player::Ip] = Stat::new(30., 60.);
        line.value[Player::Oop] = Stat::new(15., 60.);
        line.push("BET 100", 25.);
        line.push("CHECK", 75.);
        let columns = Columns::new(Street::Turn, actions());
        let row = columns.row(&line, 120., &Config::default());
        assert!(row.len() == columns.len());
        assert!(row[0] == "As Kd 7c");
        assert!(row[1] == "Th");
        assert!(row[2] == "50.0000");
        assert!(row[3] == "0.500000");
        assert!(row[5] == "0.250000");
        assert!(row[6] == UNDEFINED);
        assert!(row[7] == "75.0");
        assert!(row[8] == "25.0");
    }

    #[test]
    fn frequencies_over_all_line_actions() {
        let mut line = Line::new(Board::try_from("AsKd7c").unwrap());
        line.push("CHECK", 100.);
        line.push("BET 100", 100.);
        line.push("BET 200", 10.);
        let columns = Columns::new(Street::Flop, actions());
        let row = columns.row(&line, 1., &Config::default());
        assert!(row.len() == columns.len());
        assert!(row[6] == "47.6");
        assert!(row[7] == "47.6");
    }

    #[test]
    fn undefined_denominators() {
        let line = Line::new(Board::try_from("AsKd7c").unwrap());
        let columns = Columns::new(Street::Flop, actions());
        let row = columns.row(&line, 0., &Config::default());
        assert!(row[1] == UNDEFINED);
        assert!(row[6] == UNDEFINED);
        assert!(row[7] == UNDEFINED);
    }

    #[test]
    fn missing_streets_are_blank() {
        let line = Line::new(Board::try_from("AsKd7c").unwrap());
        let columns = Columns::new(Street::Rive, vec![]);
        let row = columns.row(&line, 1., &Config::default());
        assert!(row[0] == "As Kd 7c");
        assert!(row[1].is_empty());
        assert!(row[2].is_empty());
    }
}
