use std::collections::{BTreeSet, HashSet};
use std::rc::Rc;

use crate::errors::ApprovalError;
use crate::path::NormalizedPath;
use crate::resolver::CachedResolver;
use crate::types::OwnerId;

struct Frame {
    path: NormalizedPath,
    owners: Rc<BTreeSet<OwnerId>>,
    pending: std::vec::IntoIter<NormalizedPath>,
}

impl Frame {
    fn enter(resolver: &mut CachedResolver<'_>, path: NormalizedPath) -> Result<Self, ApprovalError> {
        let resolution = resolver.resolve(&path)?;
        let pending: Vec<NormalizedPath> = resolution.dependencies.iter().cloned().collect();
        Ok(Self {
            path,
            owners: resolution.owners,
            pending: pending.into_iter(),
        })
    }
}

/// Depth-first walk of `start` and its dependency closure.
///
/// Returns the first directory whose owners miss every approver, or `None`
/// when the whole closure is approved. A directory is marked visited when
/// it is entered, before its dependencies are walked and before its own
/// owner test; an edge into a visited directory is skipped, so cycles and
/// self-loops terminate. Dependencies are finished before the owner test of
/// the directory that declared them, and the walk stops at the first
/// failure.
pub(crate) fn first_unapproved(
    resolver: &mut CachedResolver<'_>,
    start: &NormalizedPath,
    approvers: &BTreeSet<OwnerId>,
) -> Result<Option<NormalizedPath>, ApprovalError> {
    let mut visited: HashSet<NormalizedPath> = HashSet::new();
    visited.insert(start.clone());
    let mut stack = vec![Frame::enter(resolver, start.clone())?];

    loop {
        let next = match stack.last_mut() {
            Some(frame) => frame.pending.next(),
            None => return Ok(None),
        };

        match next {
            Some(dep) => {
                if visited.insert(dep.clone()) {
                    stack.push(Frame::enter(resolver, dep)?);
                } else {
                    tracing::trace!(target: "approvals.engine", dep = %dep, "already visited, skipping");
                }
            }
            None => {
                let Some(done) = stack.pop() else {
                    return Ok(None);
                };
                if !done.owners.iter().any(|o| approvers.contains(o)) {
                    tracing::debug!(
                        target: "approvals.engine",
                        dir = %done.path,
                        depth = stack.len(),
                        "no approver among owners"
                    );
                    return Ok(Some(done.path));
                }
            }
        }
    }
}
