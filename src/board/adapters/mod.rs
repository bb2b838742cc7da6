//! Adapter implementations of the board repository port.

pub mod memory;
pub mod postgres;
