//! Rate limiting middleware using token bucket algorithm.

use anyhow::{Context, Result};
use axum::routing::MethodRouter;
use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer,
    governor::GovernorConfigBuilder,
    key_extractor::{KeyExtractor, PeerIpKeyExtractor, SmartIpKeyExtractor},
};

use crate::config::Config;

/// Per-client token bucket parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitSettings {
    /// Sustained requests per second.
    pub per_second: u32,
    /// Requests allowed in a burst before throttling kicks in.
    pub burst: u32,
    /// Key clients by `X-Forwarded-For` / `X-Real-IP` instead of the peer address.
    pub behind_proxy: bool,
}

impl RateLimitSettings {
    /// Nanoseconds needed to replenish one token.
    fn replenish_period_ns(&self) -> u64 {
        (1_000_000_000 / u64::from(self.per_second.max(1))).max(1)
    }
}

impl From<&Config> for RateLimitSettings {
    fn from(config: &Config) -> Self {
        Self {
            per_second: config.rate_limit_rps,
            burst: config.rate_limit_burst,
            behind_proxy: config.behind_proxy,
        }
    }
}

/// Builds a governor layer keyed by `extractor`.
///
/// Requests exceeding the limit receive `429 Too Many Requests`.
///
/// # Errors
///
/// Returns an error if the period or burst size is zero.
pub fn layer<K>(
    extractor: K,
    settings: RateLimitSettings,
) -> Result<GovernorLayer<K, NoOpMiddleware<QuantaInstant>, axum::body::Body>>
where
    K: KeyExtractor,
{
    let governor_conf = GovernorConfigBuilder::default()
        .key_extractor(extractor)
        .per_nanosecond(settings.replenish_period_ns())
        .burst_size(settings.burst)
        .finish()
        .context("rate limit must have a non-zero rate and burst")?;

    Ok(GovernorLayer::new(Arc::new(governor_conf)))
}

/// Wraps a single route in a per-IP rate limiter.
///
/// # Key Extraction
///
/// - Direct deployment: the socket peer address (`ConnectInfo<SocketAddr>`)
/// - `behind_proxy`: `X-Forwarded-For`, `X-Real-IP`, `Forwarded`, then the peer address
///
/// # Example
///
/// ```rust,ignore
/// let shorten = rate_limit::limit(post(shorten_handler), settings)?;
/// let app = Router::new().route("/shorten", shorten);
/// ```
pub fn limit<S>(route: MethodRouter<S>, settings: RateLimitSettings) -> Result<MethodRouter<S>>
where
    S: Clone + Send + Sync + 'static,
{
    let route = if settings.behind_proxy {
        route.layer(layer(SmartIpKeyExtractor, settings)?)
    } else {
        route.layer(layer(PeerIpKeyExtractor, settings)?)
    };

    Ok(route)
}
