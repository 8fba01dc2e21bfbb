//! Aggregation Binary
//!
//! Finds every runout of the selected node's action line and writes a
//! matchup-weighted report. Type Q + Enter to stop after the current node.
//!
//! Options: --tree, --node, --all, --files, --config, --out, --yes

use clap::Parser;
use dialoguer::Confirm;
use runouts::aggregation::Cancel;
use runouts::aggregation::Logged;
use runouts::aggregation::Runner;
use runouts::aggregation::Session;
use runouts::tree::Memory;
use runouts::tree::Service;
use runouts::*;
use std::path::Path;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about = "Aggregate a node's statistics across board runouts", long_about = None)]
struct Args {
    /// Tree file the node is selected in.
    #[arg(long, required = true)]
    tree: PathBuf,
    /// Identifier of the selected node, e.g. r:0:c:b.
    #[arg(long, required = true)]
    node: String,
    /// Repeat over every tree file next to --tree.
    #[arg(long, conflicts_with = "files")]
    all: bool,
    /// Repeat over these tree files.
    #[arg(long, num_args = 1..)]
    files: Vec<PathBuf>,
    /// JSON config overriding report defaults.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Report directory.
    #[arg(long)]
    out: Option<PathBuf>,
    /// Skip the multi-file confirmation.
    #[arg(long)]
    yes: bool,
}

fn main() -> anyhow::Result<()> {
    log();
    let args = Args::parse();
    let mut config = match args.config.as_deref() {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(out) = args.out.clone() {
        config.dir = out;
    }

    let mut memory = Memory::default();
    memory.load(&args.tree)?;
    let selected = memory.get(&args.node);
    if selected.is_none() {
        log::error!("node {} not in {}", args.node, args.tree.display());
    }
    let session = Session::new(selected, Some(args.tree.clone()));
    let files = match args.all {
        true => session.siblings(&config.tree_ext)?,
        false => args.files.clone(),
    };
    if args.all && !args.yes && !confirm(files.len(), session.file()?)? {
        log::info!("aggregation declined");
        return Ok(());
    }

    let cancel = Cancel::new();
    brb(cancel.clone());
    let mut runner = Runner::new(memory, cancel, Logged);
    let report = runner.run(&session, &files)?;
    match (report.cancelled, report.is_empty()) {
        (true, true) => log::warn!("cancelled before any node was analysed, nothing written"),
        (true, false) => {
            let path = runner.write(&report, &config)?;
            log::warn!("cancelled, partial report at {}", path.display());
        }
        (false, _) => {
            runner.write(&report, &config)?;
        }
    }
    Ok(())
}

fn confirm(n: usize, tree: &Path) -> anyhow::Result<bool> {
    let dir = tree
        .parent()
        .filter(|d| !d.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let prompt = format!(
        "Perform analysis over {} files in {}?\nThis only makes sense if all trees are identical except for the board.",
        n,
        dir.display()
    );
    Ok(Confirm::new().with_prompt(prompt).default(false).interact()?)
}
