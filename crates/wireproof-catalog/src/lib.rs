//! # wireproof-catalog
//!
//! TOML schema catalogs for WIREPROOF.
//!
//! A catalog is the human-authored form of a resolved schema set: messages
//! and enums declared by full name, with fields referencing their target
//! types by name. [`loader::SchemaCatalog`] parses the document and
//! resolves every name into the table ids a `SchemaSet` uses, failing fast
//! on anything dangling: a catalog either resolves completely or not at
//! all.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use wireproof_catalog::SchemaCatalog;
//!
//! let set = SchemaCatalog::from_file(Path::new("schemas/demo.toml"))?.resolve()?;
//! ```

pub mod descriptor;
pub mod loader;

pub use loader::SchemaCatalog;
