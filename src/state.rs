//! Shared application state injected into every handler.

use std::sync::Arc;
use tokio::sync::mpsc;

use crate::application::services::LinkService;
use crate::domain::hit_event::HitEvent;
use crate::infrastructure::persistence::SqliteLinkRepository;
use crate::utils::code_generator::RandomCodeGenerator;

/// Link service wired to its production collaborators.
pub type AppLinkService = LinkService<SqliteLinkRepository, RandomCodeGenerator>;

/// Application state shared across all request handlers.
///
/// Cheap to clone: every field is an `Arc`, a `String` or a channel handle.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<AppLinkService>,
    /// Public address short URLs are built on, without trailing slash.
    pub base_url: String,
    /// Producer side of the hit queue consumed by the hit worker.
    pub hit_sender: mpsc::Sender<HitEvent>,
}

impl AppState {
    pub fn new(
        link_service: Arc<AppLinkService>,
        base_url: impl Into<String>,
        hit_sender: mpsc::Sender<HitEvent>,
    ) -> Self {
        Self {
            link_service,
            base_url: base_url.into(),
            hit_sender,
        }
    }

    /// Builds the public short URL for `code`.
    pub fn short_url(&self, code: &str) -> String {
        crate::application::services::build_short_url(&self.base_url, code)
    }
}
