//! Chain algorithms shared by every scope.

use super::{ChainError, ChainLinks, ChainNode, ChainResult, ChainSnapshot, ChainStore};
use chrono::{DateTime, Utc};
use tracing::debug;

/// Links `node` after the current tail of its scope and inserts it.
///
/// When the scope is empty the node becomes a singleton chain. Otherwise the
/// previous tail's successor is pointed at the new node and both records are
/// written through the same store handle.
///
/// # Errors
///
/// Returns [`ChainError::Corrupted`] when the existing chain is malformed, or
/// [`ChainError::Store`] when a read or write fails.
pub fn append<N, S>(store: &mut S, mut node: N, at: DateTime<Utc>) -> ChainResult<N, N::Id>
where
    N: ChainNode,
    S: ChainStore<N> + ?Sized,
{
    let snapshot = load_snapshot(store, node.scope_id())?;

    match snapshot.tail().cloned() {
        Some(mut tail) => {
            node.relink(ChainLinks::new(Some(tail.id()), None), at);
            tail.relink(tail.links().with_successor(Some(node.id())), at);
            store.insert(&node)?;
            store.update_links(std::slice::from_ref(&tail))?;
        }
        None => {
            node.relink(ChainLinks::detached(), at);
            store.insert(&node)?;
        }
    }

    Ok(node)
}

/// Moves a node to the head of its scope (`after` is `None`) or directly
/// after the sibling `after`.
///
/// Requests that would leave the node where it already is return the stored
/// node untouched and issue no writes. Every record touched by a real move
/// is written in one `update_links` batch.
///
/// # Errors
///
/// - [`ChainError::NodeNotFound`] when the node does not exist.
/// - [`ChainError::SelfReference`] when `after` names the node itself.
/// - [`ChainError::PredecessorNotFound`] when `after` does not exist.
/// - [`ChainError::CrossScope`] when `after` belongs to another scope.
/// - [`ChainError::Corrupted`] or [`ChainError::Store`] on storage problems.
pub fn reposition<N, S>(
    store: &mut S,
    node_id: N::Id,
    after: Option<N::Id>,
    at: DateTime<Utc>,
) -> ChainResult<N, N::Id>
where
    N: ChainNode,
    S: ChainStore<N> + ?Sized,
{
    let node = store
        .find(node_id)?
        .ok_or(ChainError::NodeNotFound(node_id))?;

    if after == Some(node_id) {
        return Err(ChainError::SelfReference(node_id));
    }
    if after == node.predecessor() {
        debug!(node = %node_id, "node already in requested position");
        return Ok(node);
    }
    if let Some(predecessor_id) = after {
        let predecessor = store
            .find(predecessor_id)?
            .ok_or(ChainError::PredecessorNotFound(predecessor_id))?;
        if predecessor.scope_id() != node.scope_id() {
            return Err(ChainError::CrossScope {
                node: node_id,
                predecessor: predecessor_id,
            });
        }
    }

    let snapshot = load_snapshot(store, node.scope_id())?;
    let current = snapshot
        .get(node_id)
        .ok_or(ChainError::NodeNotFound(node_id))?
        .links();
    let successor = match after {
        Some(predecessor_id) => snapshot
            .get(predecessor_id)
            .ok_or(ChainError::PredecessorNotFound(predecessor_id))?
            .successor(),
        None => snapshot.head().map(ChainNode::id),
    };

    let mut batch = WriteBatch::new(&snapshot, at);
    batch.stitch_around(current)?;
    if let Some(predecessor_id) = after {
        batch.relink(predecessor_id, |links| links.with_successor(Some(node_id)))?;
    }
    if let Some(successor_id) = successor {
        batch.relink(successor_id, |links| links.with_predecessor(Some(node_id)))?;
    }
    batch.relink(node_id, |_| ChainLinks::new(after, successor))?;

    let moved = batch
        .staged(node_id)
        .cloned()
        .ok_or(ChainError::NodeNotFound(node_id))?;
    store.update_links(&batch.into_nodes())?;
    Ok(moved)
}

/// Re-stitches the neighbours of a node around it.
///
/// The old predecessor is pointed at the old successor and vice versa. Only
/// neighbours are written; the node record itself keeps its stale links, so
/// callers must remove or re-splice it within the same transaction.
///
/// # Errors
///
/// Returns [`ChainError::NodeNotFound`] when the node does not exist, or
/// [`ChainError::Corrupted`] / [`ChainError::Store`] on storage problems.
pub fn detach<N, S>(store: &mut S, node_id: N::Id, at: DateTime<Utc>) -> ChainResult<N, N::Id>
where
    N: ChainNode,
    S: ChainStore<N> + ?Sized,
{
    let node = store
        .find(node_id)?
        .ok_or(ChainError::NodeNotFound(node_id))?;
    let snapshot = load_snapshot(store, node.scope_id())?;
    let current = snapshot
        .get(node_id)
        .ok_or(ChainError::NodeNotFound(node_id))?
        .links();

    let mut batch = WriteBatch::new(&snapshot, at);
    batch.stitch_around(current)?;
    let neighbours = batch.into_nodes();
    if !neighbours.is_empty() {
        store.update_links(&neighbours)?;
    }
    Ok(node)
}

/// Detaches a node and removes its record, returning the removed node.
///
/// # Errors
///
/// Returns the same errors as [`detach`], plus [`ChainError::Store`] when the
/// removal fails.
pub fn delete<N, S>(store: &mut S, node_id: N::Id, at: DateTime<Utc>) -> ChainResult<N, N::Id>
where
    N: ChainNode,
    S: ChainStore<N> + ?Sized,
{
    let node = detach(store, node_id, at)?;
    store.remove(node_id)?;
    Ok(node)
}

/// Returns the node of `scope` without a predecessor.
///
/// # Errors
///
/// Returns [`ChainError::Corrupted`] when the chain is malformed, or
/// [`ChainError::Store`] when the scan fails.
pub fn find_head<N, S>(store: &mut S, scope: N::ScopeId) -> ChainResult<Option<N>, N::Id>
where
    N: ChainNode,
    S: ChainStore<N> + ?Sized,
{
    let snapshot = load_snapshot(store, scope)?;
    Ok(snapshot.head().cloned())
}

/// Returns every node of `scope` from head to tail.
///
/// # Errors
///
/// Returns [`ChainError::Corrupted`] when the chain is malformed, or
/// [`ChainError::Store`] when the scan fails.
pub fn list_scope<N, S>(store: &mut S, scope: N::ScopeId) -> ChainResult<Vec<N>, N::Id>
where
    N: ChainNode,
    S: ChainStore<N> + ?Sized,
{
    Ok(load_snapshot(store, scope)?.into_ordered())
}

fn load_snapshot<N, S>(store: &mut S, scope: N::ScopeId) -> ChainResult<ChainSnapshot<N>, N::Id>
where
    N: ChainNode,
    S: ChainStore<N> + ?Sized,
{
    let members = store.members(scope)?;
    Ok(ChainSnapshot::build(scope, members)?)
}

/// Copies of snapshot nodes with pending link changes.
///
/// A node touched more than once is staged once, so the resulting batch
/// never contains duplicates.
struct WriteBatch<'a, N: ChainNode> {
    snapshot: &'a ChainSnapshot<N>,
    staged: Vec<N>,
    at: DateTime<Utc>,
}

impl<'a, N: ChainNode> WriteBatch<'a, N> {
    const fn new(snapshot: &'a ChainSnapshot<N>, at: DateTime<Utc>) -> Self {
        Self {
            snapshot,
            staged: Vec::new(),
            at,
        }
    }

    fn staged(&self, id: N::Id) -> Option<&N> {
        self.staged.iter().find(|node| node.id() == id)
    }

    fn relink(
        &mut self,
        id: N::Id,
        change: impl FnOnce(ChainLinks<N::Id>) -> ChainLinks<N::Id>,
    ) -> ChainResult<(), N::Id> {
        let index = match self.staged.iter().position(|node| node.id() == id) {
            Some(index) => index,
            None => {
                let node = self
                    .snapshot
                    .get(id)
                    .cloned()
                    .ok_or(ChainError::NodeNotFound(id))?;
                self.staged.push(node);
                self.staged.len() - 1
            }
        };
        let Some(node) = self.staged.get_mut(index) else {
            return Err(ChainError::NodeNotFound(id));
        };
        let links = change(node.links());
        node.relink(links, self.at);
        Ok(())
    }

    fn stitch_around(&mut self, links: ChainLinks<N::Id>) -> ChainResult<(), N::Id> {
        if let Some(predecessor_id) = links.predecessor {
            self.relink(predecessor_id, |current| {
                current.with_successor(links.successor)
            })?;
        }
        if let Some(successor_id) = links.successor {
            self.relink(successor_id, |current| {
                current.with_predecessor(links.predecessor)
            })?;
        }
        Ok(())
    }

    fn into_nodes(self) -> Vec<N> {
        self.staged
    }
}
