//! Validated, arena-backed view of one scope chain.

use super::{ChainCorruption, ChainNode};
use std::collections::{HashMap, HashSet};

/// The members of one scope, indexed by identifier and validated as a single
/// linear chain.
///
/// Construction walks the chain from its head and rejects any structure that
/// would break the ordering invariants: several heads or tails, links
/// leaving the scope, links that are not mirrored by the neighbour, cycles,
/// and members that cannot be reached from the head.
#[derive(Debug, Clone)]
pub struct ChainSnapshot<N: ChainNode> {
    scope: N::ScopeId,
    nodes: HashMap<N::Id, N>,
    order: Vec<N::Id>,
}

impl<N: ChainNode> ChainSnapshot<N> {
    /// Builds a snapshot of `scope` from its members, in any order.
    ///
    /// # Errors
    ///
    /// Returns [`ChainCorruption`] when the members do not form exactly one
    /// linear chain.
    pub fn build(scope: N::ScopeId, members: Vec<N>) -> Result<Self, ChainCorruption<N::Id>> {
        let mut nodes = HashMap::with_capacity(members.len());
        for node in members {
            check_membership(scope, &node)?;
            nodes.insert(node.id(), node);
        }

        let head = locate_head(&nodes)?;
        let order = match head {
            Some(head_id) => walk_forward(&nodes, head_id)?,
            None => Vec::new(),
        };

        if order.len() != nodes.len() {
            return Err(ChainCorruption::Unreachable {
                unreachable: nodes.len() - order.len(),
            });
        }

        Ok(Self {
            scope,
            nodes,
            order,
        })
    }

    /// Returns the scope this snapshot describes.
    #[must_use]
    pub const fn scope(&self) -> N::ScopeId {
        self.scope
    }

    /// Returns the number of nodes in the chain.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` when the scope has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Returns the node without a predecessor.
    #[must_use]
    pub fn head(&self) -> Option<&N> {
        self.order.first().and_then(|id| self.nodes.get(id))
    }

    /// Returns the node without a successor.
    #[must_use]
    pub fn tail(&self) -> Option<&N> {
        self.order.last().and_then(|id| self.nodes.get(id))
    }

    /// Looks up a member by identifier.
    #[must_use]
    pub fn get(&self, id: N::Id) -> Option<&N> {
        self.nodes.get(&id)
    }

    /// Returns member identifiers from head to tail.
    #[must_use]
    pub fn ids(&self) -> &[N::Id] {
        &self.order
    }

    /// Iterates members from head to tail.
    pub fn iter(&self) -> impl Iterator<Item = &N> + '_ {
        self.order.iter().filter_map(|id| self.nodes.get(id))
    }

    /// Returns member identifiers from tail to head by following predecessor
    /// links.
    #[must_use]
    pub fn backward_ids(&self) -> Vec<N::Id> {
        let mut ids = Vec::with_capacity(self.order.len());
        let mut cursor = self.tail();
        while let Some(node) = cursor {
            ids.push(node.id());
            if ids.len() > self.order.len() {
                break;
            }
            cursor = node.predecessor().and_then(|id| self.nodes.get(&id));
        }
        ids
    }

    /// Consumes the snapshot and returns members from head to tail.
    #[must_use]
    pub fn into_ordered(mut self) -> Vec<N> {
        self.order
            .iter()
            .filter_map(|id| self.nodes.remove(id))
            .collect()
    }
}

fn check_membership<N: ChainNode>(
    scope: N::ScopeId,
    node: &N,
) -> Result<(), ChainCorruption<N::Id>> {
    if node.scope_id() != scope {
        return Err(ChainCorruption::ForeignMember(node.id()));
    }
    let links = node.links();
    if links.predecessor == Some(node.id()) || links.successor == Some(node.id()) {
        return Err(ChainCorruption::SelfLink(node.id()));
    }
    Ok(())
}

fn locate_head<N: ChainNode>(
    nodes: &HashMap<N::Id, N>,
) -> Result<Option<N::Id>, ChainCorruption<N::Id>> {
    if nodes.is_empty() {
        return Ok(None);
    }

    let heads: Vec<N::Id> = nodes
        .values()
        .filter(|node| node.predecessor().is_none())
        .map(ChainNode::id)
        .collect();
    let tails = nodes
        .values()
        .filter(|node| node.successor().is_none())
        .count();

    if tails > 1 {
        return Err(ChainCorruption::MultipleTails { tails });
    }
    match heads.as_slice() {
        [] => Err(ChainCorruption::NoHead {
            members: nodes.len(),
        }),
        [head] => Ok(Some(*head)),
        _ => Err(ChainCorruption::MultipleHeads { heads: heads.len() }),
    }
}

fn walk_forward<N: ChainNode>(
    nodes: &HashMap<N::Id, N>,
    head: N::Id,
) -> Result<Vec<N::Id>, ChainCorruption<N::Id>> {
    let mut order = Vec::with_capacity(nodes.len());
    let mut visited = HashSet::with_capacity(nodes.len());
    let mut current = head;

    loop {
        if !visited.insert(current) {
            return Err(ChainCorruption::Cycle(current));
        }
        order.push(current);

        let Some(node) = nodes.get(&current) else {
            return Err(ChainCorruption::DanglingLink {
                from: current,
                to: current,
            });
        };
        let Some(next_id) = node.successor() else {
            return Ok(order);
        };
        let Some(next) = nodes.get(&next_id) else {
            return Err(ChainCorruption::DanglingLink {
                from: current,
                to: next_id,
            });
        };
        if next.predecessor() != Some(current) {
            return Err(ChainCorruption::AsymmetricLink {
                from: current,
                to: next_id,
            });
        }
        current = next_id;
    }
}
