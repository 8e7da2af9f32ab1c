//! # wireproof-contracts
//!
//! Shared types for the WIREPROOF message verifier.
//!
//! All crates in the workspace import from here. No verification logic
//! lives in this crate, only the resolved schema model, the reason-string
//! templates, and the error type.

pub mod error;
pub mod reason;
pub mod schema;
