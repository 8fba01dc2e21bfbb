/// The two fixed seats of a heads-up tree.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum Player {
    #[serde(rename = "OOP", alias = "oop")]
    Oop = 0,
    #[serde(rename = "IP", alias = "ip")]
    Ip = 1,
}

impl Player {
    pub const fn all() -> &'static [Self] {
        &[Self::Oop, Self::Ip]
    }
    pub const fn index(&self) -> usize {
        *self as usize
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Oop => write!(f, "OOP"),
            Self::Ip => write!(f, "IP"),
        }
    }
}

/// One value per player, indexable by [`Player`].
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Pair<T> {
    #[serde(rename = "OOP", alias = "oop", default)]
    pub oop: T,
    #[serde(rename = "IP", alias = "ip", default)]
    pub ip: T,
}

impl<T> Pair<T> {
    pub fn new(oop: T, ip: T) -> Self {
        Self { oop, ip }
    }
    /// Build both sides from a per-player function, OOP first.
    pub fn try_from_fn<E>(mut f: impl FnMut(Player) -> Result<T, E>) -> Result<Self, E> {
        let oop = f(Player::Oop)?;
        let ip = f(Player::Ip)?;
        Ok(Self { oop, ip })
    }
}

impl<T> std::ops::Index<Player> for Pair<T> {
    type Output = T;
    fn index(&self, player: Player) -> &T {
        match player {
            Player::Oop => &self.oop,
            Player::Ip => &self.ip,
        }
    }
}
impl<T> std::ops::IndexMut<Player> for Pair<T> {
    fn index_mut(&mut self, player: Player) -> &mut T {
        match player {
            Player::Oop => &mut self.oop,
            Player::Ip => &mut self.ip,
        }
    }
}
