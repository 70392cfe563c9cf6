//! Helpers for resolving glob patterns and mapping matches into the artifact tree.
//!
//! Resolution and destination mapping live in separate submodules so each can be tested
//! against a temporary directory on its own.

mod mirror;
mod resolve;

pub use mirror::{mirror_destination, url_path};
pub use resolve::{resolve, resolve_required};
