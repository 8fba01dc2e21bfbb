//! The solved game tree, seen from the outside.
//!
//! - [`Service`] — Everything the pipeline may ask about a tree
//! - [`Node`] — Read-only node snapshots with a shared parent chain
//! - [`Player`] / [`Pair`] — The two seats and per-seat values
//! - [`TreeFile`] — JSON persistence of a solved tree
//! - [`Memory`] — A petgraph-backed [`Service`] over [`TreeFile`]s
mod file;
mod memory;
mod node;
mod player;
mod service;

#[cfg(test)]
pub(crate) mod fixture;

pub use file::*;
pub use memory::*;
pub use node::*;
pub use player::*;
pub use service::*;
