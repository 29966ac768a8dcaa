//! Canopy: Deterministic Merkle Commitment Trees
//!
//! Builds a binary hash tree over an ordered list of opaque text records,
//! producing a single root digest that commits to every record and its
//! position, and exposes the tree structure for inspection and export.

pub mod cli;
pub mod error;
pub mod logging;
pub mod tree;
pub mod types;
