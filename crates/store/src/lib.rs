//! Persistence boundary for saved builds.
//!
//! The remote document store is an external collaborator; [`backend`]
//! defines the minimal contract the core relies on (schemaless insert +
//! equality query, no transactions). [`gateway`] translates configurations
//! to and from documents in the `builds` collection, scoped by the owning
//! principal.

pub mod backend;
pub mod config;
pub mod document;
pub mod error;
pub mod gateway;
pub mod memory;

pub use backend::{DocumentStore, StoreError, StoredDocument};
pub use document::{BuildDocument, SavedBuild};
pub use error::GatewayError;
pub use gateway::BuildGateway;
pub use memory::MemoryStore;
