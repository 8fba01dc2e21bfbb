//! Report lines and their rendering as delimited text.
//!
//! - [`Line`] — Statistics of one node, or of a summary over many
//! - [`Columns`] — Header layout and per-row cells
//! - [`Report`] — Intro block, header and rows of one run
//! - [`sig`] — Significant-digit number formatting
mod columns;
mod digits;
mod line;
mod report;

pub use columns::*;
pub use digits::*;
pub use line::*;
pub use report::*;
