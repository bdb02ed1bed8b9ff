//! Periodic purge of expired links.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio::time::{self, MissedTickBehavior};
use tracing::{debug, error, info};

use crate::application::services::LinkService;
use crate::domain::repositories::LinkRepository;
use crate::utils::code_generator::CodeGenerator;

/// Purges expired links every `interval`, forever.
///
/// A failed purge is logged and retried on the next tick. The first purge
/// runs immediately.
pub async fn run_cleanup_task<L, G>(link_service: Arc<LinkService<L, G>>, interval: Duration)
where
    L: LinkRepository,
    G: CodeGenerator,
{
    info!(interval_secs = interval.as_secs(), "Cleanup task started");

    let mut ticker = time::interval(interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        ticker.tick().await;

        match link_service.cleanup_expired(Utc::now()).await {
            Ok(purged) => {
                debug!(purged, "Cleanup pass finished");
            }
            Err(e) => {
                error!(error = %e, "Failed to purge expired links");
            }
        }
    }
}
