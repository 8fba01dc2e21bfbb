use super::cancel::Cancel;
use super::progress::Progress;
use crate::Error;
use crate::tree::Kind;
use crate::tree::Node;
use crate::tree::Service;

/// Every node of the loaded tree that shares `node`'s action line.
///
/// Walks down from the root one label at a time. A child stays a candidate
/// when its label matches the next label of the line, or when its parent is
/// a chance node, which is what lets boards differ. The result holds one node
/// per reachable runout, in the service's listing order; a tree without
/// chance nodes on the line yields just `node`.
///
/// Returns `Ok(None)` when cancelled. Cancellation is polled before each
/// candidate's children are listed.
pub fn similar<S, P>(
    service: &mut S,
    node: &Node,
    cancel: &Cancel,
    progress: &mut P,
) -> Result<Option<Vec<Node>>, Error>
where
    S: Service,
    P: Progress,
{
    let path = node
        .lineage()
        .filter(|n| !n.is_root())
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect::<Vec<_>>();
    let n = path.len();
    let mut candidates = vec![node.root().clone()];
    for (i, pattern) in path.into_iter().enumerate() {
        let mut retained = Vec::new();
        for (k, item) in candidates.iter().enumerate() {
            progress.status(format!("listing nodes. Path ({}/{}) {} nodes", i + 1, n, k + 1));
            if cancel.cancelled() {
                log::warn!("similar node search cancelled at depth {}", i + 1);
                return Ok(None);
            }
            let split = item.kind() == Kind::Split;
            retained.extend(
                service
                    .children(item)?
                    .into_iter()
                    .filter(|child| split || child.text() == pattern.text()),
            );
        }
        candidates = retained;
    }
    log::debug!("{} nodes share the line of {}", candidates.len(), node.id());
    Ok(Some(candidates))
}
