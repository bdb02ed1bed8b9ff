//! Data Transfer Objects for API requests and responses.
//!
//! Request DTOs use Serde for deserialization and validator for payload shape
//! checks. Semantic validation (URL rules, alias rules, expiry) is done by
//! [`crate::application::services::LinkService`].

pub mod health;
pub mod link;
pub mod shorten;
