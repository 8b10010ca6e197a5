//! Process-wide observable identity slot.
//!
//! The identity provider is an external collaborator; this crate holds the
//! single place its notifications land. One writer (the provider callback),
//! many readers, injected by handle rather than looked up ambiently so
//! tests can drive a fake provider.

pub mod slot;

pub use slot::{IdentitySlot, IdentityWatcher};
