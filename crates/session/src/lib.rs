//! UI-facing session state.
//!
//! Sits between the UI plumbing (routing, widgets — out of scope) and the
//! domain crates: [`BuilderSession`] owns the mutable configuration for the
//! active builder view, [`GarageView`] holds the saved-build list with its
//! stale-response guard, and [`watch_identity`] drives garage refreshes
//! from identity transitions.

pub mod builder;
pub mod garage;

pub use builder::BuilderSession;
pub use garage::{watch_identity, GarageView, QueryTag};
