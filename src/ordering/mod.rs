//! Ordered-list maintenance for scoped chains of nodes.
//!
//! Every scope (a project's columns, a column's tasks) keeps its members as a
//! single linear chain described by per-node predecessor and successor
//! identifiers. This module implements the chain algorithms once, generic
//! over any [`ChainNode`]:
//!
//! - [`append`] links a new node after the current tail
//! - [`reposition`] moves a node to the head or directly after a sibling
//! - [`detach`] re-stitches a node's neighbours around it
//! - [`delete`] detaches a node and removes its record
//! - [`find_head`] and [`list_scope`] read the chain in order
//!
//! Storage is reached through the [`ChainStore`] port, which represents one
//! open transaction. Every write an operation issues goes through a single
//! store handle, so the enclosing transaction either commits the whole
//! relinking or none of it.

mod engine;
mod error;
mod node;
mod snapshot;
mod store;

pub use engine::{append, delete, detach, find_head, list_scope, reposition};
pub use error::{ChainCorruption, ChainError, ChainResult};
pub use node::{ChainLinks, ChainNode};
pub use snapshot::ChainSnapshot;
pub use store::{ChainStore, StoreError, StoreResult};
