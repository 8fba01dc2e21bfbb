//! The aggregation pipeline.
//!
//! A [`Runner`] drives one run: for each tree it extracts the selected
//! node's [`ActionLine`], finds every [`similar`] node on other boards,
//! [`collect`]s their statistics and [`aggregate`]s them into a summary.
//! Runs are cooperative: a [`Cancel`] token is polled between units of work
//! and [`Progress`] updates flow back to the host.
mod aggregate;
mod cancel;
mod collector;
mod finder;
mod line;
mod progress;
mod runner;
mod session;

pub use aggregate::*;
pub use cancel::*;
pub use collector::*;
pub use finder::*;
pub use line::*;
pub use progress::*;
pub use runner::*;
pub use session::*;
