//! Card primitives for reading solver output.
//!
//! - [`Card`] — A single card as a `(Rank, Suit)` tuple encoded in one byte
//! - [`Hand`] — A player's two private cards, canonically ordered
//! - [`Board`] — The community cards (flop, turn, river) in dealing order
//! - [`Street`] — Which betting round a board belongs to
pub mod board;
pub use board::*;

pub mod card;
pub use card::*;

pub mod hand;
pub use hand::*;

pub mod rank;
pub use rank::*;

pub mod street;
pub use street::*;

pub mod suit;
pub use suit::*;
