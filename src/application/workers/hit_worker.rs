//! Asynchronous hit accounting.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;
use tokio_retry::RetryIf;
use tokio_retry::strategy::{ExponentialBackoff, jitter};
use tracing::{debug, info, warn};

use crate::application::services::LinkService;
use crate::domain::hit_event::HitEvent;
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::CodeGenerator;

/// Retries for a hit whose store update failed transiently.
const MAX_RETRIES: usize = 3;

/// Queues a hit without waiting.
///
/// When the queue is full or the worker is gone the hit is dropped and
/// counted in `hits_dropped_total`; the caller's redirect is unaffected.
///
/// Returns `true` if the event was queued.
pub fn enqueue_hit(sender: &mpsc::Sender<HitEvent>, event: HitEvent) -> bool {
    match sender.try_send(event) {
        Ok(()) => true,
        Err(TrySendError::Full(event)) => {
            warn!(code = %event.code, "Hit queue full, dropping hit");
            metrics::counter!("hits_dropped_total", "reason" => "full").increment(1);
            false
        }
        Err(TrySendError::Closed(event)) => {
            warn!(code = %event.code, "Hit queue closed, dropping hit");
            metrics::counter!("hits_dropped_total", "reason" => "closed").increment(1);
            false
        }
    }
}

/// Consumes hit events until every sender is dropped.
///
/// Each event becomes one [`LinkService::record_hit`] call. Storage failures
/// are retried with jittered exponential backoff; a missing link or a
/// malformed code is final and only logged.
pub async fn run_hit_worker<L, G>(
    mut receiver: mpsc::Receiver<HitEvent>,
    link_service: Arc<LinkService<L, G>>,
) where
    L: LinkRepository,
    G: CodeGenerator,
{
    info!("Hit worker started");

    while let Some(event) = receiver.recv().await {
        record(&link_service, &event).await;
    }

    info!("Hit worker stopped");
}

async fn record<L, G>(link_service: &LinkService<L, G>, event: &HitEvent)
where
    L: LinkRepository,
    G: CodeGenerator,
{
    let strategy = ExponentialBackoff::from_millis(10)
        .max_delay(Duration::from_secs(1))
        .map(jitter)
        .take(MAX_RETRIES);

    let code = event.code.as_str();
    let result = RetryIf::spawn(
        strategy,
        move || link_service.record_hit(code),
        |e: &AppError| matches!(e, AppError::Storage(_)),
    )
    .await;

    match result {
        Ok(()) => {
            metrics::counter!("hits_recorded_total").increment(1);
        }
        Err(AppError::NotFound(_)) | Err(AppError::InvalidCode(_)) => {
            debug!(code, "Hit for a link that no longer exists, ignoring");
        }
        Err(e) => {
            warn!(code, error = %e, "Failed to record hit");
            metrics::counter!("hits_dropped_total", "reason" => "store").increment(1);
        }
    }
}
