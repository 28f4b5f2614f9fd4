//! The single mutable document behind every resource path.
//!
//! - [`PathFlags`] turns literal path segments into behaviour toggles.
//! - [`ResourceStore`] resolves a path's current [`ResourceState`] from the
//!   clock plus any explicit mutations recorded for that path.
//! - [`render_body`] formats the plain-text representation.

mod error;
mod flags;
mod render;
mod store;

pub use error::StoreError;
pub use flags::PathFlags;
pub use render::{render_body, HELP_TEXT};
pub use store::{ResourceState, ResourceStore};
