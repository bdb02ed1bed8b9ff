//! # snaplink
//!
//! A small URL shortener with expiring links, built with Axum and SQLite.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Link entity, hit events and the repository trait
//! - **Application Layer** ([`application`]) - [`LinkService`](application::services::LinkService)
//!   plus the hit worker and cleanup task
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite pool, migrations, repository
//! - **API Layer** ([`api`]) - HTTP handlers, DTOs and middleware
//!
//! ## Features
//!
//! - Random base62 codes or caller-chosen aliases
//! - Optional expiry, enforced on every read and purged periodically
//! - Fire-and-forget hit counting that never slows a redirect down
//! - Per-IP rate limiting on link creation
//!
//! ## Quick Start
//!
//! ```bash
//! export BASE_URL="https://sho.rt"
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod logging;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::LinkService;
    pub use crate::domain::entities::{Link, LinkMetadata, NewLink, ShortenInput};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
