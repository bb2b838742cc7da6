//! Taskboard: project boards with explicitly ordered columns and tasks.
//!
//! A project holds a sequence of columns (work states) and each column holds
//! a sequence of tasks. Users append items, move an item directly after a
//! sibling or to the head of its scope, and delete items, while every reader
//! observes one well-formed sequence per scope.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (`PostgreSQL`, in-memory)
//!
//! # Modules
//!
//! - [`ordering`]: Generic chain maintenance over predecessor and successor
//!   links
//! - [`board`]: Projects, columns and tasks, with their services and views

pub mod board;
pub mod ordering;
