//! Demo verification scenarios.
//!
//! Each scenario is a self-contained module that wires up real WIREPROOF
//! components (schema sets, catalog loading, verifier strategies) with
//! small example messages and demonstrates a distinct verification pattern.

pub mod compare;
pub mod person;
pub mod tree;
