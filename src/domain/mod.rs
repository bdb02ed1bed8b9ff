//! Domain layer containing business entities and repository contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`hit_event`] - Redirect hit event model
//!
//! # Hit Processing Flow
//!
//! 1. The redirect handler resolves a code and answers immediately
//! 2. A [`hit_event::HitEvent`] is offered to a bounded channel
//! 3. [`crate::application::workers::run_hit_worker`] drains the channel with retry
//! 4. The counter is bumped via [`repositories::LinkRepository::increment_hits`]

pub mod entities;
pub mod hit_event;
pub mod repositories;
