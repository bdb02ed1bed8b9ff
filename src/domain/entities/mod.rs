//! Core domain entities.
//!
//! - [`Link`] - A stored short link
//! - [`NewLink`] - A link about to be inserted
//! - [`ShortenInput`] - Caller input for creating a link
//! - [`LinkMetadata`] - A link plus its expiry state at lookup time

pub mod link;

pub use link::{Link, LinkMetadata, NewLink, ShortenInput};
