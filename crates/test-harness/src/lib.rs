//! Test harness for the OBJ loader and mesh cache.
//!
//! # Key Components
//!
//! - [`fixtures`] — Canonical OBJ documents with known shapes
//! - [`assertions`] — Mesh comparisons that report where two meshes differ
//! - [`helpers`] — Error type and producer shortcuts

pub mod assertions;
pub mod fixtures;
pub mod helpers;

pub use helpers::HarnessError;
