use crate::Arbitrary;
use crate::Weight;

/// A matchup-weighted statistic: summed outcomes over a count of matchups.
///
/// The statistic's value is `wins / matchups`. With zero matchups the value
/// is undefined, so [`Stat::ratio`] yields `None` and [`Stat::value`] yields
/// NaN. Folding (`+=`, `sum`) skips such entries entirely: an empty
/// statistic contributes neither wins nor matchups.
///
/// Summing raw wins and matchups before dividing is what makes an aggregate
/// over many runouts matchup-weighted. Averaging ratios instead would give a
/// runout with a handful of matchups the same say as one with thousands.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(from = "(Weight, Weight)", into = "(Weight, Weight)")]
pub struct Stat {
    wins: Weight,
    matchups: Weight,
}

impl Stat {
    pub fn new(wins: Weight, matchups: Weight) -> Self {
        Self { wins, matchups }
    }
    pub fn wins(&self) -> Weight {
        self.wins
    }
    pub fn matchups(&self) -> Weight {
        self.matchups
    }
    /// Whether this statistic carries weight in a sum.
    pub fn counts(&self) -> bool {
        self.matchups > 0. && self.wins.is_finite()
    }
    /// `wins / matchups`, or `None` when there are no matchups.
    pub fn ratio(&self) -> Option<Weight> {
        self.counts().then(|| self.wins / self.matchups)
    }
    /// `wins / matchups` divided directly. NaN when there are no matchups.
    pub fn value(&self) -> Weight {
        self.wins / self.matchups
    }
}

impl std::ops::AddAssign for Stat {
    fn add_assign(&mut self, rhs: Self) {
        if rhs.counts() {
            self.wins += rhs.wins;
            self.matchups += rhs.matchups;
        }
    }
}
impl std::ops::Add for Stat {
    type Output = Self;
    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}
impl std::iter::Sum for Stat {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), std::ops::Add::add)
    }
}

impl From<(Weight, Weight)> for Stat {
    fn from((wins, matchups): (Weight, Weight)) -> Self {
        Self::new(wins, matchups)
    }
}
impl From<Stat> for (Weight, Weight) {
    fn from(stat: Stat) -> Self {
        (stat.wins, stat.matchups)
    }
}

impl std::fmt::Display for Stat {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "EV: {:.2} = {:.2} / {:.2}",
            self.value(),
            self.wins,
            self.matchups
        )
    }
}

impl Arbitrary for Stat {
    fn random() -> Self {
        use rand::Rng;
        let ref mut rng = rand::rng();
        match rng.random_bool(0.1) {
            true => Self::default(),
            false => {
                let matchups = rng.random_range(0.5..1000.);
                let wins = matchups * rng.random_range(0.0..1.0);
                Self::new(wins, matchups)
            }
        }
    }
}
