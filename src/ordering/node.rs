//! Node contract shared by every chained record type.

use chrono::{DateTime, Utc};
use std::fmt;
use std::hash::Hash;

/// Predecessor and successor references of a chained node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChainLinks<Id> {
    /// Identifier of the node immediately before this one, if any.
    pub predecessor: Option<Id>,
    /// Identifier of the node immediately after this one, if any.
    pub successor: Option<Id>,
}

impl<Id> ChainLinks<Id> {
    /// Links for a node that is alone in its scope.
    #[must_use]
    pub const fn detached() -> Self {
        Self {
            predecessor: None,
            successor: None,
        }
    }

    /// Creates links from explicit neighbour identifiers.
    #[must_use]
    pub const fn new(predecessor: Option<Id>, successor: Option<Id>) -> Self {
        Self {
            predecessor,
            successor,
        }
    }
}

impl<Id> Default for ChainLinks<Id> {
    fn default() -> Self {
        Self::detached()
    }
}

impl<Id: Copy> ChainLinks<Id> {
    /// Returns a copy with the predecessor replaced.
    #[must_use]
    pub const fn with_predecessor(self, predecessor: Option<Id>) -> Self {
        Self {
            predecessor,
            successor: self.successor,
        }
    }

    /// Returns a copy with the successor replaced.
    #[must_use]
    pub const fn with_successor(self, successor: Option<Id>) -> Self {
        Self {
            predecessor: self.predecessor,
            successor,
        }
    }
}

/// A record that lives in exactly one scope chain.
///
/// Implementors expose their identity, the scope they belong to, and their
/// current links. Only the ordering engine should call [`ChainNode::relink`];
/// scope membership never changes after creation.
pub trait ChainNode: Clone {
    /// Identifier type of the node.
    type Id: Copy + Eq + Hash + fmt::Debug + fmt::Display + Send + Sync + 'static;
    /// Identifier type of the scope owning the chain.
    type ScopeId: Copy + Eq + fmt::Debug + fmt::Display + Send + Sync + 'static;

    /// Returns the node identifier.
    fn id(&self) -> Self::Id;

    /// Returns the scope the node belongs to.
    fn scope_id(&self) -> Self::ScopeId;

    /// Returns the current neighbour references.
    fn links(&self) -> ChainLinks<Self::Id>;

    /// Replaces the neighbour references, recording `at` as the write time.
    fn relink(&mut self, links: ChainLinks<Self::Id>, at: DateTime<Utc>);

    /// Returns the predecessor identifier, if any.
    fn predecessor(&self) -> Option<Self::Id> {
        self.links().predecessor
    }

    /// Returns the successor identifier, if any.
    fn successor(&self) -> Option<Self::Id> {
        self.links().successor
    }
}
