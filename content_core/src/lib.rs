//! # Content Core (Quill)
//!
//! The storage and correctness substrate for Quill. This crate interfaces
//! with `content_model`, keeps entities in typed in-memory stores, and checks
//! them through composable validation pipelines.
//!
//! ## Core Components
//!
//! - **store**: Generic keyed lifecycle management for one entity type
//! - **validation**: Pluggable validators and an order-preserving composite
//! - **versioning**: Immutable version wrapper for external change tracking
//!
//! ## Design Philosophy
//!
//! - **Values over exceptions**: Missing entries and failed validations are
//!   reported as values, never as panics
//! - **Independent components**: The store, validators, and versioning never
//!   call each other; callers compose them
//! - **Extensible**: New entity types and validators plug in without
//!   modifying core logic

pub mod store;
pub mod validation;
pub mod versioning;

pub use store::*;
pub use validation::*;
pub use versioning::*;
