//! Matchup-weighted aggregation of solver statistics across board runouts.
//!
//! Given one selected node of a solved game tree, this crate finds every node
//! that shares its action line but sits on a different board, pulls equity,
//! value and action-frequency statistics for each of them from a tree
//! service, folds them into a matchup-weighted summary and renders the result
//! as a delimited report.
//!
//! ## Modules
//!
//! - [`cards`] — Cards, two-card hands, boards and streets
//! - [`tree`] — The [`Service`](tree::Service) capability and an in-memory backend
//! - [`stats`] — Wins/matchups accumulators and per-hand tables
//! - [`report`] — Report lines, summaries, number formatting and rendering
//! - [`aggregation`] — The pipeline: action lines, similar-node search,
//!   statistic collection, and the multi-file runner
//! - [`config`] — Runtime report settings, defaulting to the constants below
//! - [`error`] — Why a run could not produce a report
pub mod aggregation;
pub mod cards;
pub mod config;
pub mod error;
pub mod report;
pub mod stats;
pub mod tree;

pub use config::Config;
pub use error::Error;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Summed outcome values and matchup counts reported by the solver.
pub type Weight = f64;
/// Range weights, frequencies and percentages.
pub type Probability = f64;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// REPORT PARAMETERS
// ============================================================================
/// Directory the report is written to, relative to the working directory.
pub const REPORT_DIR: &str = "Reports";
/// File name prefix of every report.
pub const REPORT_PREFIX: &str = "AggregatedReport_";
/// File extension of every report.
pub const REPORT_EXT: &str = "csv";
/// Field separator within a report row.
pub const DELIMITER: char = ',';
/// Extension shared by sibling tree files in multi-file mode.
pub const TREE_EXT: &str = "cfr";
/// First line of the intro block.
pub const TITLE: &str = "Aggregation analysis";
/// Significant digits for equity, value and global share cells.
pub const STAT_DIGITS: usize = 6;
/// Significant digits for per-action frequency cells.
pub const FREQ_DIGITS: usize = 3;
/// Cell text for ratios whose denominator is zero.
pub const UNDEFINED: &str = "n/a";

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "cli")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}

/// Register graceful interrupt handler. Type "Q" + Enter to cancel the run;
/// rows of already finished files are kept.
pub fn brb(cancel: aggregation::Cancel) {
    std::thread::spawn(move || {
        loop {
            let ref mut buffer = String::new();
            match std::io::stdin().read_line(buffer) {
                Ok(0) | Err(_) => break,
                Ok(_) if buffer.trim().to_uppercase() == "Q" => {
                    log::warn!("graceful interrupt requested, finishing current node...");
                    cancel.cancel();
                    break;
                }
                Ok(_) => continue,
            }
        }
    });
}
