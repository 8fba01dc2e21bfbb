use super::card::Card;
use crate::Arbitrary;

/// A player's two private cards.
///
/// Stored high card first so that `AsKd` and `KdAs` compare, hash and print
/// identically. Construction rejects pairs of identical cards.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Hand(Card, Card);

impl TryFrom<(Card, Card)> for Hand {
    type Error = String;
    fn try_from((a, b): (Card, Card)) -> Result<Self, Self::Error> {
        match a.cmp(&b) {
            std::cmp::Ordering::Greater => Ok(Self(a, b)),
            std::cmp::Ordering::Less => Ok(Self(b, a)),
            std::cmp::Ordering::Equal => Err(format!("two cards must be different: {}", a)),
        }
    }
}

impl TryFrom<&str> for Hand {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match Card::parse(s)?.as_slice() {
            [a, b] => Self::try_from((*a, *b)),
            _ => Err(format!("cannot parse hand {:?}", s)),
        }
    }
}
impl TryFrom<String> for Hand {
    type Error = String;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::try_from(s.as_str())
    }
}
impl From<Hand> for String {
    fn from(hand: Hand) -> Self {
        hand.to_string()
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.0, self.1)
    }
}

impl Arbitrary for Hand {
    fn random() -> Self {
        loop {
            if let Ok(hand) = Self::try_from((Card::random(), Card::random())) {
                return hand;
            }
        }
    }
}
