use super::aggregate::aggregate;
use super::cancel::Cancel;
use super::collector::collect;
use super::finder::similar;
use super::line::ActionLine;
use super::progress::Progress;
use super::progress::Update;
use super::session::Session;
use crate::Config;
use crate::Error;
use crate::Weight;
use crate::report::Line;
use crate::report::Report;
use crate::tree::Node;
use crate::tree::Player;
use crate::tree::Service;
use std::path::PathBuf;

/// Drives whole aggregation runs against one tree service.
///
/// With no files a run covers the tree that is loaded already. Otherwise
/// each file is loaded in turn, the selected node is re-resolved against it
/// and its rows are appended to one report. The header is fixed by the first
/// file with any similar node; a summary row precedes a file's rows when it
/// has more than one.
///
/// Cancellation keeps the rows of every file that finished. A file that was
/// interrupted contributes nothing, and the report is flagged as cancelled.
pub struct Runner<S, P> {
    service: S,
    progress: P,
    cancel: Cancel,
}

impl<S, P> Runner<S, P>
where
    S: Service,
    P: Progress,
{
    pub fn new(service: S, cancel: Cancel, progress: P) -> Self {
        Self {
            service,
            progress,
            cancel,
        }
    }
    pub fn service(&mut self) -> &mut S {
        &mut self.service
    }
    pub fn into_service(self) -> S {
        self.service
    }

    pub fn run(&mut self, session: &Session, files: &[PathBuf]) -> Result<Report, Error> {
        let mut node = session.selected()?.clone();
        let line = ActionLine::from(&node);
        let mut report = Report::new(session.file.clone(), &line, node.board().street());
        let batch = match files.is_empty() {
            true => vec![None],
            false => files.iter().map(Some).collect(),
        };
        let n = batch.len();
        log::info!("aggregating '{}' over {} tree(s)", line, n);
        for (i, path) in batch.into_iter().enumerate() {
            if self.cancel.cancelled() {
                report.cancelled = true;
                break;
            }
            if let Some(path) = path {
                self.progress.status(format!("Load file {} out of {}", i + 1, n));
                self.service.load(path)?;
                node = self.service.refresh(&node).map_err(|e| {
                    log::debug!("refresh {} in {}: {:#}", node.id(), path.display(), e);
                    Error::Missing(node.id().to_string())
                })?;
            }
            match self.file(&node, i, n)? {
                Some((lines, root)) => {
                    let summary = aggregate(&lines);
                    report.extend(lines, summary, root);
                }
                None => {
                    report.cancelled = true;
                    break;
                }
            }
        }
        if report.cancelled {
            log::warn!("run cancelled, keeping {} rows", report.rows.len());
        }
        Ok(report)
    }

    /// Write a finished report, announcing it as the last step of the run.
    pub fn write(&mut self, report: &Report, config: &Config) -> Result<PathBuf, Error> {
        self.progress.status("Writing the report");
        report.write(config)
    }

    /// Lines of every node similar to `node` in the loaded tree, along with
    /// the root's IP equity matchups. `None` when cancelled.
    fn file(&mut self, node: &Node, i: usize, n: usize) -> Result<Option<(Vec<Line>, Weight)>, Error> {
        let Some(nodes) = similar(&mut self.service, node, &self.cancel, &mut self.progress)? else {
            return Ok(None);
        };
        let root = self.service.root()?;
        let root = self.service.equity(Player::Ip, &root)?.matchups();
        let total = nodes.len();
        let mut lines = Vec::with_capacity(total);
        for (k, node) in nodes.iter().enumerate() {
            if self.cancel.cancelled() {
                return Ok(None);
            }
            self.progress.update(Update::Count(k + 1, total));
            self.progress.status(match n > 1 {
                true => format!("file {} out of {}. Analyse {} {} out of {}", i + 1, n, node.board(), k + 1, total),
                false => format!("Analyze {} {} out of {}", node.board(), k + 1, total),
            });
            lines.push(collect(&mut self.service, node)?);
        }
        log::info!("tree {} of {}: {} similar nodes", i + 1, n, total);
        Ok(Some((lines, root)))
    }
}
