//! Background tasks that run alongside the HTTP server.
//!
//! - [`hit_worker`] - Drains queued [`crate::domain::hit_event::HitEvent`]s into hit counters
//! - [`cleanup_task`] - Periodically purges expired links

pub mod cleanup_task;
pub mod hit_worker;

pub use cleanup_task::run_cleanup_task;
pub use hit_worker::{enqueue_hit, run_hit_worker};
