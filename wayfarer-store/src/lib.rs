//! Boundary adapters for the Wayfarer core.
//!
//! Implementations of [`wayfarer_core::CatalogSource`] and
//! [`wayfarer_core::VisitedStore`]: an in-memory store for tests and
//! single-process use, and JSON-file-backed variants for durable local
//! persistence. Remote backends plug in the same way by implementing
//! the two traits.

pub mod file;
pub mod memory;

pub use file::{FileStoreError, JsonCatalogSource, JsonFileStore};
pub use memory::{MemoryStore, PoisonedStore, StaticCatalog};
