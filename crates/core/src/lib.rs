//! NexDrive domain core.
//!
//! Pure domain logic shared by every other crate in the workspace:
//!
//! - [`catalog`] — the fixed set of selectable models and paint colors.
//! - [`config`] — the in-progress build [`Configuration`](config::Configuration)
//!   and its transition functions.
//! - [`principal`] — the authenticated identity value and the three-state
//!   auth lifecycle.
//! - [`scene`] — the declarative scene graph and the composer that derives
//!   one from a configuration.
//!
//! Everything in this crate is synchronous value transformation; all I/O
//! lives behind the gateway and identity crates.

pub mod catalog;
pub mod config;
pub mod error;
pub mod principal;
pub mod scene;

pub use error::CoreError;
