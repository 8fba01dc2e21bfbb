use super::card::Card;
use super::street::Street;

/// The community cards visible to all players.
///
/// A board contains 0, 3, 4, or 5 cards corresponding to preflop, flop, turn,
/// and river respectively. Unlike a hand, dealing order matters: the fourth
/// card is the turn and the fifth is the river.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Board(Vec<Card>);

impl Board {
    /// Creates an empty board (preflop state).
    pub fn empty() -> Self {
        Self(Vec::new())
    }
    pub fn cards(&self) -> &[Card] {
        &self.0
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    /// Infers the current street from board size.
    pub fn street(&self) -> Street {
        Street::try_from(self.0.len()).expect("board length checked on construction")
    }
    /// The cards dealt on one street, if that street has been dealt.
    pub fn dealt(&self, street: Street) -> Option<&[Card]> {
        let hi = street.n_observed();
        let lo = hi - street.n_revealed();
        self.0.get(lo..hi).filter(|_| street != Street::Pref)
    }
    /// One report cell per street column of `street`: `"As Kd 7c"`, `"Th"`,
    /// `"2c"`. Streets this board has not dealt read as blank.
    pub fn cells(&self, street: Street) -> Vec<String> {
        street
            .columns()
            .iter()
            .map(|s| {
                self.dealt(*s)
                    .map(|cards| cards.iter().map(Card::to_string).collect::<Vec<_>>().join(" "))
                    .unwrap_or_default()
            })
            .collect()
    }
    /// The longest run of streets on which every board agrees.
    /// Used to label a summary of many runouts.
    pub fn common<'a>(boards: impl IntoIterator<Item = &'a Board>) -> Self {
        let mut boards = boards.into_iter();
        let Some(first) = boards.next() else {
            return Self::empty();
        };
        let n = boards.fold(first.len(), |n, other| {
            Street::dealt()
                .iter()
                .take_while(|s| s.n_observed() <= n)
                .take_while(|s| first.dealt(**s) == other.dealt(**s))
                .last()
                .map(Street::n_observed)
                .unwrap_or(0)
        });
        Self(first.0[..n].to_vec())
    }
}

impl TryFrom<Vec<Card>> for Board {
    type Error = String;
    fn try_from(cards: Vec<Card>) -> Result<Self, Self::Error> {
        Street::try_from(cards.len())?;
        let unique = cards.iter().collect::<std::collections::HashSet<_>>();
        match unique.len() == cards.len() {
            true => Ok(Self(cards)),
            false => Err("board contains duplicate cards".into()),
        }
    }
}
impl TryFrom<&str> for Board {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::try_from(Card::parse(s)?)
    }
}
impl TryFrom<String> for Board {
    type Error = String;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::try_from(s.as_str())
    }
}
impl From<Board> for String {
    fn from(board: Board) -> Self {
        board.0.iter().map(Card::to_string).collect()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            self.0
                .iter()
                .map(|c| format!("{}", c))
                .collect::<Vec<String>>()
                .join("")
        )
    }
}
