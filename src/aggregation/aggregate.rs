use crate::cards::Board;
use crate::report::Line;

/// Fold many lines into one matchup-weighted summary.
///
/// Wins and matchups are summed per statistic, never averaged, and a
/// statistic without matchups contributes nothing. Action weights are summed
/// by name. The summary lists actions in the first line's order and shows
/// the streets every line agrees on. `None` for no lines.
pub fn aggregate(lines: &[Line]) -> Option<Line> {
    let first = lines.first()?;
    let mut summary = Line::new(Board::common(lines.iter().map(|l| &l.board)));
    for action in first.actions.iter() {
        summary.push(action, 0.);
    }
    for line in lines {
        for player in crate::tree::Player::all() {
            summary.equity[*player] += line.equity[*player];
            summary.value[*player] += line.value[*player];
        }
        for action in line.actions.iter() {
            summary.push(action, line.weight(action));
        }
    }
    Some(summary)
}
