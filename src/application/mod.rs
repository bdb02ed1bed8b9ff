//! Application layer: business logic and background tasks.
//!
//! - [`services::LinkService`] - Shortening, resolution, metadata and cleanup
//! - [`workers`] - Hit recording worker and periodic expired link purge

pub mod services;
pub mod workers;
