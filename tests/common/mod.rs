#![allow(dead_code)]

use axum::extract::ConnectInfo;
use axum::Router;
use axum_test::TestServer;
use chrono::{DateTime, Utc};
use snaplink::api::middleware::rate_limit::RateLimitSettings;
use snaplink::application::services::LinkService;
use snaplink::domain::hit_event::HitEvent;
use snaplink::infrastructure::persistence::{SqliteLinkRepository, connect_and_migrate};
use snaplink::routes::app_router;
use snaplink::state::AppState;
use snaplink::utils::code_generator::RandomCodeGenerator;
use sqlx::SqlitePool;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::mpsc;
use tower::Layer;

pub const BASE_URL: &str = "http://s.test";

/// Fresh migrated in-memory database, private to the calling test.
pub async fn test_pool() -> SqlitePool {
    connect_and_migrate("sqlite::memory:", 1).await.unwrap()
}

pub async fn create_test_link(pool: &SqlitePool, code: &str, url: &str) {
    insert_link(pool, code, url, Utc::now(), None).await;
}

pub async fn create_expired_link(pool: &SqlitePool, code: &str, url: &str) {
    let now = Utc::now();
    insert_link(
        pool,
        code,
        url,
        now - chrono::Duration::hours(2),
        Some(now - chrono::Duration::hours(1)),
    )
    .await;
}

pub async fn insert_link(
    pool: &SqlitePool,
    code: &str,
    url: &str,
    created_at: DateTime<Utc>,
    expires_at: Option<DateTime<Utc>>,
) {
    sqlx::query("INSERT INTO links (code, long_url, created_at, expires_at) VALUES (?, ?, ?, ?)")
        .bind(code)
        .bind(url)
        .bind(created_at)
        .bind(expires_at)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn hits_of(pool: &SqlitePool, code: &str) -> i64 {
    sqlx::query_scalar("SELECT hits FROM links WHERE code = ?")
        .bind(code)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn count_links(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM links")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub fn create_link_service(
    pool: SqlitePool,
) -> Arc<LinkService<SqliteLinkRepository, RandomCodeGenerator>> {
    let repository = Arc::new(SqliteLinkRepository::new(Arc::new(pool)));
    let generator = Arc::new(RandomCodeGenerator::default());

    Arc::new(LinkService::new(repository, generator))
}

/// Link service whose clock is frozen at `now`.
pub fn create_link_service_at(
    pool: SqlitePool,
    now: DateTime<Utc>,
) -> LinkService<SqliteLinkRepository, RandomCodeGenerator> {
    let repository = Arc::new(SqliteLinkRepository::new(Arc::new(pool)));
    let generator = Arc::new(RandomCodeGenerator::default());

    LinkService::new(repository, generator).with_clock(move || now)
}

pub fn create_test_state(pool: SqlitePool) -> (AppState, mpsc::Receiver<HitEvent>) {
    let (tx, rx) = mpsc::channel(100);

    let state = AppState::new(create_link_service(pool), BASE_URL, tx);

    (state, rx)
}

/// Limits generous enough that ordinary tests never hit them.
pub fn relaxed_rate_limit() -> RateLimitSettings {
    RateLimitSettings {
        per_second: 1000,
        burst: 1000,
        behind_proxy: false,
    }
}

/// Serves the full application router, as `server::run` would.
pub fn app_server(state: AppState, rate_limit: RateLimitSettings) -> TestServer {
    let app = app_router(state, rate_limit).unwrap();
    let router = Router::new()
        .fallback_service(app)
        .layer(MockConnectInfoLayer);

    TestServer::new(router).unwrap()
}

/// Inserts a fixed peer address, standing in for
/// `into_make_service_with_connect_info` under the in-process transport.
#[derive(Clone)]
pub struct MockConnectInfoLayer;

impl<S> Layer<S> for MockConnectInfoLayer {
    type Service = MockConnectInfoService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        MockConnectInfoService { inner }
    }
}

#[derive(Clone)]
pub struct MockConnectInfoService<S> {
    inner: S,
}

impl<S, B> tower::Service<axum::http::Request<B>> for MockConnectInfoService<S>
where
    S: tower::Service<axum::http::Request<B>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    B: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: axum::http::Request<B>) -> Self::Future {
        let addr: SocketAddr = "127.0.0.1:12345".parse().unwrap();
        req.extensions_mut().insert(ConnectInfo(addr));
        self.inner.call(req)
    }
}
