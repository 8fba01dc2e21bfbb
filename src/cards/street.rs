#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Street {
    Pref = 0isize,
    Flop = 1isize,
    Turn = 2isize,
    Rive = 3isize,
}

impl Street {
    pub const fn all() -> &'static [Self] {
        &[Self::Pref, Self::Flop, Self::Turn, Self::Rive]
    }
    /// Streets that deal community cards, in dealing order.
    pub const fn dealt() -> &'static [Self] {
        &[Self::Flop, Self::Turn, Self::Rive]
    }
    pub const fn n_observed(&self) -> usize {
        match self {
            Self::Pref => 0,
            Self::Flop => 3,
            Self::Turn => 4,
            Self::Rive => 5,
        }
    }
    pub const fn n_revealed(&self) -> usize {
        match self {
            Self::Pref => 0,
            Self::Flop => 3,
            Self::Turn => 1,
            Self::Rive => 1,
        }
    }
    /// Streets whose cards are visible on a board of this street,
    /// i.e. one report column each.
    pub fn columns(&self) -> &'static [Self] {
        &Self::dealt()[..(*self as usize)]
    }
}

impl TryFrom<usize> for Street {
    type Error = String;
    fn try_from(n: usize) -> Result<Self, Self::Error> {
        match n {
            0 => Ok(Self::Pref),
            3 => Ok(Self::Flop),
            4 => Ok(Self::Turn),
            5 => Ok(Self::Rive),
            _ => Err(format!("no street has {} board cards", n)),
        }
    }
}

impl std::fmt::Display for Street {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Pref => write!(f, "Preflop"),
            Self::Flop => write!(f, "Flop"),
            Self::Turn => write!(f, "Turn"),
            Self::Rive => write!(f, "River"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_per_street() {
        assert!(Street::Pref.columns().is_empty());
        assert!(Street::Flop.columns() == &[Street::Flop]);
        assert!(Street::Rive.columns().len() == 3);
    }

    #[test]
    fn from_board_length() {
        for street in Street::all() {
            assert!(Street::try_from(street.n_observed()) == Ok(*street));
        }
        assert!(Street::try_from(2).is_err());
        assert!(Street::try_from(6).is_err());
    }
}
