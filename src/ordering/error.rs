//! Error types for chain operations and chain validation.

use super::StoreError;
use std::fmt;
use thiserror::Error;

/// Result type for ordering engine operations.
pub type ChainResult<T, Id> = Result<T, ChainError<Id>>;

/// Errors returned by ordering engine operations.
#[derive(Debug, Clone, Error)]
pub enum ChainError<Id>
where
    Id: fmt::Debug + fmt::Display + 'static,
{
    /// The node being operated on does not exist.
    #[error("node {0} not found")]
    NodeNotFound(Id),

    /// The requested predecessor does not exist.
    #[error("requested predecessor {0} not found")]
    PredecessorNotFound(Id),

    /// A node was asked to follow itself.
    #[error("node {0} cannot be placed after itself")]
    SelfReference(Id),

    /// The requested predecessor belongs to a different scope.
    #[error("node {node} cannot be placed after {predecessor}: nodes belong to different scopes")]
    CrossScope {
        /// Node being repositioned.
        node: Id,
        /// Requested predecessor in another scope.
        predecessor: Id,
    },

    /// The stored chain does not form a single linear sequence.
    #[error("chain is corrupted: {0}")]
    Corrupted(#[from] ChainCorruption<Id>),

    /// The store rejected a read or write.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Structural defects detected while walking a scope chain.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChainCorruption<Id>
where
    Id: fmt::Debug + fmt::Display + 'static,
{
    /// The scope has members but none of them lacks a predecessor.
    #[error("scope has {members} members but no head")]
    NoHead {
        /// Number of scope members.
        members: usize,
    },

    /// More than one member lacks a predecessor.
    #[error("scope has {heads} heads")]
    MultipleHeads {
        /// Number of members without a predecessor.
        heads: usize,
    },

    /// More than one member lacks a successor.
    #[error("scope has {tails} tails")]
    MultipleTails {
        /// Number of members without a successor.
        tails: usize,
    },

    /// A link points at a node outside the scope or at no node at all.
    #[error("node {from} links to unknown node {to}")]
    DanglingLink {
        /// Node holding the link.
        from: Id,
        /// Missing target.
        to: Id,
    },

    /// A successor does not point back at the node that reached it.
    #[error("node {to} does not link back to predecessor {from}")]
    AsymmetricLink {
        /// Node whose successor is `to`.
        from: Id,
        /// Node whose predecessor differs from `from`.
        to: Id,
    },

    /// Following successors revisits a node.
    #[error("cycle detected at node {0}")]
    Cycle(Id),

    /// Some members are not reachable from the head.
    #[error("{unreachable} members are unreachable from the head")]
    Unreachable {
        /// Number of members never visited.
        unreachable: usize,
    },

    /// A member reports a different scope than the one being walked.
    #[error("node {0} belongs to another scope")]
    ForeignMember(Id),

    /// A node references itself.
    #[error("node {0} links to itself")]
    SelfLink(Id),
}
