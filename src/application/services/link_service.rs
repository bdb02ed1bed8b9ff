//! Link creation, resolution and accounting service.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use crate::domain::entities::{Link, LinkMetadata, NewLink, ShortenInput};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::{CodeGenerator, is_valid_code, validate_code};
use crate::utils::url_normalizer::normalize_url;

/// Total number of candidates tried for a generated code before giving up.
pub const MAX_GENERATE_ATTEMPTS: usize = 6;

/// Time source used for creation timestamps and expiry checks.
pub type Clock = Arc<dyn Fn() -> DateTime<Utc> + Send + Sync>;

/// Service for creating, resolving and accounting short links.
///
/// Owns no state of its own: every durable change goes through the
/// [`LinkRepository`], and each operation issues at most one mutating store
/// call per attempt. The service is cheap to share behind an `Arc` and safe to
/// call from any number of tasks.
///
/// Cancellation is inherited from the caller: dropping the returned future
/// aborts any in-flight store call.
pub struct LinkService<L: LinkRepository, G: CodeGenerator> {
    link_repository: Arc<L>,
    generator: Arc<G>,
    clock: Clock,
}

impl<L: LinkRepository, G: CodeGenerator> fmt::Debug for LinkService<L, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkService").finish_non_exhaustive()
    }
}

impl<L: LinkRepository, G: CodeGenerator> LinkService<L, G> {
    /// Creates a new link service using the system clock.
    pub fn new(link_repository: Arc<L>, generator: Arc<G>) -> Self {
        Self {
            link_repository,
            generator,
            clock: Arc::new(Utc::now),
        }
    }

    /// Replaces the time source. Used by tests to pin "now".
    pub fn with_clock(mut self, clock: impl Fn() -> DateTime<Utc> + Send + Sync + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    fn now(&self) -> DateTime<Utc> {
        (self.clock)()
    }

    /// Creates a short link.
    ///
    /// # Code Assignment
    ///
    /// - If a non-blank `custom_code` is given, it is validated and inserted
    ///   exactly once; a taken alias is reported as a conflict.
    /// - Otherwise random codes are generated and inserted, retrying on
    ///   collision up to [`MAX_GENERATE_ATTEMPTS`] candidates in total.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidUrl`] if:
    /// - The destination is empty, longer than 2048 characters, unparseable,
    ///   not http(s), or has no host
    /// - `expires_at` is not strictly in the future
    ///
    /// Returns [`AppError::InvalidCode`] if the custom code is malformed.
    ///
    /// Returns [`AppError::Conflict`] if the custom code is taken, or if every
    /// generated candidate collided.
    pub async fn shorten(&self, input: ShortenInput) -> Result<Link, AppError> {
        let long_url =
            normalize_url(&input.url).map_err(|e| AppError::InvalidUrl(e.to_string()))?;

        let now = self.now();
        if let Some(expires_at) = input.expires_at
            && expires_at <= now
        {
            return Err(AppError::InvalidUrl(
                "expiry must be in the future".to_string(),
            ));
        }

        match input.custom_code.filter(|c| !c.trim().is_empty()) {
            Some(alias) => {
                self.create_with_alias(alias, long_url, now, input.expires_at)
                    .await
            }
            None => {
                self.create_with_generated_code(long_url, now, input.expires_at)
                    .await
            }
        }
    }

    async fn create_with_alias(
        &self,
        alias: String,
        long_url: String,
        created_at: DateTime<Utc>,
        expires_at: Option<DateTime<Utc>>,
    ) -> Result<Link, AppError> {
        validate_code(&alias)?;

        let new_link = NewLink {
            code: alias,
            long_url,
            created_at,
            expires_at,
        };

        let link = self.link_repository.create(new_link).await?;

        info!(code = %link.code, "Created short link with custom alias");
        metrics::counter!("links_created_total", "kind" => "custom").increment(1);

        Ok(link)
    }

    async fn create_with_generated_code(
        &self,
        long_url: String,
        created_at: DateTime<Utc>,
        expires_at: Option<DateTime<Utc>>,
    ) -> Result<Link, AppError> {
        for attempt in 1..=MAX_GENERATE_ATTEMPTS {
            let code = self.generator.generate()?;

            if !is_valid_code(&code) {
                warn!(attempt, "Code generator produced an invalid code, regenerating");
                continue;
            }

            let new_link = NewLink {
                code,
                long_url: long_url.clone(),
                created_at,
                expires_at,
            };

            match self.link_repository.create(new_link).await {
                Ok(link) => {
                    info!(code = %link.code, attempt, "Created short link");
                    metrics::counter!("links_created_total", "kind" => "generated").increment(1);
                    return Ok(link);
                }
                Err(AppError::Conflict(code)) => {
                    debug!(%code, attempt, "Generated code collided, retrying");
                }
                Err(e) => return Err(e),
            }
        }

        warn!(
            attempts = MAX_GENERATE_ATTEMPTS,
            "Failed to allocate a unique generated code"
        );

        Err(AppError::Conflict(format!(
            "no unique code found after {MAX_GENERATE_ATTEMPTS} attempts"
        )))
    }

    /// Resolves a code to its link for redirecting.
    ///
    /// Expired links are never returned.
    ///
    /// # Errors
    ///
    /// - [`AppError::InvalidCode`] if the code is malformed
    /// - [`AppError::NotFound`] if no link has this code
    /// - [`AppError::Expired`] if the link's expiry is at or before now
    pub async fn resolve(&self, code: &str) -> Result<Link, AppError> {
        let link = self.find_existing(code).await?;

        if link.is_expired_at(self.now()) {
            return Err(AppError::Expired(code.to_string()));
        }

        Ok(link)
    }

    /// Returns a link regardless of its expiry, with its computed expiry state.
    ///
    /// # Errors
    ///
    /// - [`AppError::InvalidCode`] if the code is malformed
    /// - [`AppError::NotFound`] if no link has this code
    pub async fn metadata(&self, code: &str) -> Result<LinkMetadata, AppError> {
        let link = self.find_existing(code).await?;
        let expired = link.is_expired_at(self.now());

        Ok(LinkMetadata { link, expired })
    }

    /// Increments the hit counter of a link by one.
    ///
    /// Meant to run after a redirect decision, off the request path. Callers
    /// may log and ignore the error.
    ///
    /// # Errors
    ///
    /// - [`AppError::InvalidCode`] if the code is malformed
    /// - [`AppError::NotFound`] if the link no longer exists
    pub async fn record_hit(&self, code: &str) -> Result<(), AppError> {
        validate_code(code)?;
        self.link_repository.increment_hits(code).await
    }

    /// Deletes every link whose expiry is at or before `now`.
    ///
    /// Returns the number of deleted links.
    pub async fn cleanup_expired(&self, now: DateTime<Utc>) -> Result<u64, AppError> {
        let purged = self.link_repository.purge_expired(now).await?;

        if purged > 0 {
            info!(purged, "Purged expired links");
            metrics::counter!("links_purged_total").increment(purged);
        }

        Ok(purged)
    }

    /// Checks that the backing store is reachable.
    pub async fn health_check(&self) -> Result<(), AppError> {
        self.link_repository.ping().await
    }

    async fn find_existing(&self, code: &str) -> Result<Link, AppError> {
        validate_code(code)?;

        self.link_repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::NotFound(code.to_string()))
    }
}

/// Joins the public base address with a code.
///
/// Trailing slashes on `base_url` are ignored.
pub fn build_short_url(base_url: &str, code: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockLinkRepository;
    use crate::utils::code_generator::{MockCodeGenerator, RandomCodeGenerator};
    use chrono::{Duration, TimeZone};
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    fn link_from(new_link: NewLink) -> Link {
        Link::new(
            1,
            new_link.code,
            new_link.long_url,
            new_link.created_at,
            new_link.expires_at,
            0,
        )
    }

    fn stored_link(code: &str, expires_at: Option<DateTime<Utc>>) -> Link {
        Link::new(
            7,
            code.to_string(),
            "https://example.com/a".to_string(),
            fixed_now() - Duration::days(1),
            expires_at,
            3,
        )
    }

    fn service(
        repo: MockLinkRepository,
        generator: MockCodeGenerator,
    ) -> LinkService<MockLinkRepository, MockCodeGenerator> {
        LinkService::new(Arc::new(repo), Arc::new(generator)).with_clock(fixed_now)
    }

    fn counting_generator(prefix: &'static str) -> MockCodeGenerator {
        let counter = AtomicUsize::new(0);
        let mut generator = MockCodeGenerator::new();
        generator.expect_generate().returning(move || {
            let n = counter.fetch_add(1, Ordering::SeqCst);
            Ok(format!("{prefix}{n:03}"))
        });
        generator
    }

    #[tokio::test]
    async fn test_shorten_generated_code_success() {
        let mut repo = MockLinkRepository::new();
        repo.expect_create()
            .withf(|l| l.long_url == "https://example.com/a" && l.created_at == fixed_now())
            .times(1)
            .returning(|l| Ok(link_from(l)));

        let svc = LinkService::new(Arc::new(repo), Arc::new(RandomCodeGenerator::new(7)))
            .with_clock(fixed_now);

        let link = svc
            .shorten(ShortenInput::new("https://example.com/a"))
            .await
            .unwrap();

        assert_eq!(link.code.len(), 7);
        assert!(link.code.chars().all(|c| c.is_ascii_alphanumeric()));
        assert_eq!(link.long_url, "https://example.com/a");
        assert_eq!(link.hits, 0);
        assert_eq!(link.expires_at, None);
    }

    #[tokio::test]
    async fn test_shorten_normalizes_url() {
        let mut repo = MockLinkRepository::new();
        repo.expect_create()
            .withf(|l| l.long_url == "https://example.com/Path")
            .times(1)
            .returning(|l| Ok(link_from(l)));

        let svc = service(repo, counting_generator("gen"));

        let link = svc
            .shorten(ShortenInput::new("  HTTPS://EXAMPLE.COM:443/Path  "))
            .await
            .unwrap();

        assert_eq!(link.long_url, "https://example.com/Path");
    }

    #[tokio::test]
    async fn test_shorten_invalid_url_never_touches_store() {
        let mut repo = MockLinkRepository::new();
        repo.expect_create().times(0);
        let mut generator = MockCodeGenerator::new();
        generator.expect_generate().times(0);

        let svc = service(repo, generator);

        for bad in ["not-a-url", "", "   ", "ftp://example.com", "http://"] {
            let err = svc.shorten(ShortenInput::new(bad)).await.unwrap_err();
            assert!(matches!(err, AppError::InvalidUrl(_)), "{bad:?}");
        }
    }

    #[tokio::test]
    async fn test_shorten_rejects_oversized_url() {
        let svc = service(MockLinkRepository::new(), MockCodeGenerator::new());
        let url = format!("https://example.com/{}", "a".repeat(2048));

        let err = svc.shorten(ShortenInput::new(url)).await.unwrap_err();
        assert!(matches!(err, AppError::InvalidUrl(_)));
    }

    #[tokio::test]
    async fn test_shorten_rejects_url_that_grows_past_limit_when_encoded() {
        let mut repo = MockLinkRepository::new();
        repo.expect_create().times(0);

        let svc = service(repo, MockCodeGenerator::new());
        let url = format!("https://e.x/{}", "a b".repeat(600));

        let err = svc.shorten(ShortenInput::new(url)).await.unwrap_err();
        assert!(matches!(err, AppError::InvalidUrl(_)));
    }

    #[tokio::test]
    async fn test_shorten_checks_destination_before_alias() {
        let mut repo = MockLinkRepository::new();
        repo.expect_create().times(0);

        let svc = service(repo, MockCodeGenerator::new());

        let err = svc
            .shorten(ShortenInput::new("not-a-url").with_custom_code("ab"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidUrl(_)));

        let err = svc
            .shorten(ShortenInput::new("https://x.test").with_custom_code("ab"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidCode(_)));
    }

    #[tokio::test]
    async fn test_shorten_rejects_expiry_not_in_future() {
        let svc = service(MockLinkRepository::new(), MockCodeGenerator::new());

        for expiry in [fixed_now(), fixed_now() - Duration::seconds(1)] {
            let err = svc
                .shorten(ShortenInput::new("https://example.com").with_expiry(expiry))
                .await
                .unwrap_err();
            assert!(matches!(err, AppError::InvalidUrl(_)));
        }
    }

    #[tokio::test]
    async fn test_shorten_echoes_future_expiry() {
        let expiry = fixed_now() + Duration::seconds(1);

        let mut repo = MockLinkRepository::new();
        repo.expect_create()
            .withf(move |l| l.expires_at == Some(expiry))
            .times(1)
            .returning(|l| Ok(link_from(l)));

        let svc = service(repo, counting_generator("exp"));

        let link = svc
            .shorten(ShortenInput::new("https://example.com").with_expiry(expiry))
            .await
            .unwrap();

        assert_eq!(link.expires_at, Some(expiry));
    }

    #[tokio::test]
    async fn test_shorten_with_custom_code() {
        let mut repo = MockLinkRepository::new();
        repo.expect_create()
            .withf(|l| l.code == "abc")
            .times(1)
            .returning(|l| Ok(link_from(l)));
        let mut generator = MockCodeGenerator::new();
        generator.expect_generate().times(0);

        let svc = service(repo, generator);

        let link = svc
            .shorten(ShortenInput::new("https://x.test").with_custom_code("abc"))
            .await
            .unwrap();

        assert_eq!(link.code, "abc");
        assert_eq!(link.long_url, "https://x.test/");
    }

    #[tokio::test]
    async fn test_shorten_custom_code_conflict_is_not_retried() {
        let mut repo = MockLinkRepository::new();
        repo.expect_create()
            .times(1)
            .returning(|l| Err(AppError::Conflict(l.code)));

        let svc = service(repo, MockCodeGenerator::new());

        let err = svc
            .shorten(ShortenInput::new("https://y.test").with_custom_code("abc"))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Conflict(code) if code == "abc"));
    }

    #[tokio::test]
    async fn test_shorten_invalid_custom_code() {
        let mut repo = MockLinkRepository::new();
        repo.expect_create().times(0);

        let svc = service(repo, MockCodeGenerator::new());

        let too_long = "a".repeat(65);
        for alias in ["ab", too_long.as_str(), "has space", "bad!", " abc"] {
            let err = svc
                .shorten(ShortenInput::new("https://x.test").with_custom_code(alias))
                .await
                .unwrap_err();
            assert!(matches!(err, AppError::InvalidCode(_)), "{alias:?}");
        }
    }

    #[tokio::test]
    async fn test_shorten_blank_custom_code_uses_generator() {
        let mut repo = MockLinkRepository::new();
        repo.expect_create()
            .withf(|l| l.code == "gen000")
            .times(1)
            .returning(|l| Ok(link_from(l)));

        let svc = service(repo, counting_generator("gen"));

        let link = svc
            .shorten(ShortenInput::new("https://x.test").with_custom_code("   "))
            .await
            .unwrap();

        assert_eq!(link.code, "gen000");
    }

    #[tokio::test]
    async fn test_shorten_retries_on_collision() {
        let mut repo = MockLinkRepository::new();
        repo.expect_create().times(3).returning(|l| {
            if l.code == "try002" {
                Ok(link_from(l))
            } else {
                Err(AppError::Conflict(l.code))
            }
        });

        let svc = service(repo, counting_generator("try"));

        let link = svc
            .shorten(ShortenInput::new("https://example.com"))
            .await
            .unwrap();

        assert_eq!(link.code, "try002");
    }

    #[tokio::test]
    async fn test_shorten_gives_up_after_max_attempts() {
        let mut repo = MockLinkRepository::new();
        repo.expect_create()
            .times(MAX_GENERATE_ATTEMPTS)
            .returning(|l| Err(AppError::Conflict(l.code)));

        let svc = service(repo, counting_generator("dup"));

        let err = svc
            .shorten(ShortenInput::new("https://example.com"))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_shorten_skips_invalid_generated_codes() {
        let counter = AtomicUsize::new(0);
        let mut generator = MockCodeGenerator::new();
        generator.expect_generate().times(3).returning(move || {
            match counter.fetch_add(1, Ordering::SeqCst) {
                0 => Ok("x".to_string()),
                1 => Ok("no spaces".to_string()),
                _ => Ok("good123".to_string()),
            }
        });

        let mut repo = MockLinkRepository::new();
        repo.expect_create()
            .withf(|l| l.code == "good123")
            .times(1)
            .returning(|l| Ok(link_from(l)));

        let svc = service(repo, generator);

        let link = svc
            .shorten(ShortenInput::new("https://example.com"))
            .await
            .unwrap();

        assert_eq!(link.code, "good123");
    }

    #[tokio::test]
    async fn test_shorten_invalid_generated_codes_consume_attempts() {
        let mut generator = MockCodeGenerator::new();
        generator
            .expect_generate()
            .times(MAX_GENERATE_ATTEMPTS)
            .returning(|| Ok("!".to_string()));

        let mut repo = MockLinkRepository::new();
        repo.expect_create().times(0);

        let svc = service(repo, generator);

        let err = svc
            .shorten(ShortenInput::new("https://example.com"))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_shorten_propagates_generator_failure() {
        let mut generator = MockCodeGenerator::new();
        generator
            .expect_generate()
            .times(1)
            .returning(|| Err(AppError::Generator("no entropy".to_string())));

        let svc = service(MockLinkRepository::new(), generator);

        let err = svc
            .shorten(ShortenInput::new("https://example.com"))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Generator(_)));
    }

    #[tokio::test]
    async fn test_shorten_propagates_storage_failure_without_retry() {
        let mut repo = MockLinkRepository::new();
        repo.expect_create()
            .times(1)
            .returning(|_| Err(AppError::Storage(sqlx::Error::PoolTimedOut)));

        let svc = service(repo, counting_generator("err"));

        let err = svc
            .shorten(ShortenInput::new("https://example.com"))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Storage(_)));
    }

    #[tokio::test]
    async fn test_resolve_active_link() {
        let mut repo = MockLinkRepository::new();
        repo.expect_find_by_code()
            .withf(|code| code == "abc123")
            .times(1)
            .returning(|code| Ok(Some(stored_link(code, None))));

        let svc = service(repo, MockCodeGenerator::new());

        let link = svc.resolve("abc123").await.unwrap();
        assert_eq!(link.long_url, "https://example.com/a");
    }

    #[tokio::test]
    async fn test_resolve_invalid_code() {
        let mut repo = MockLinkRepository::new();
        repo.expect_find_by_code().times(0);

        let svc = service(repo, MockCodeGenerator::new());

        let err = svc.resolve("a!").await.unwrap_err();
        assert!(matches!(err, AppError::InvalidCode(_)));
    }

    #[tokio::test]
    async fn test_resolve_not_found() {
        let mut repo = MockLinkRepository::new();
        repo.expect_find_by_code().times(1).returning(|_| Ok(None));

        let svc = service(repo, MockCodeGenerator::new());

        let err = svc.resolve("missing").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(code) if code == "missing"));
    }

    #[tokio::test]
    async fn test_resolve_expiry_boundary() {
        let cases = [
            (fixed_now() + Duration::seconds(1), true),
            (fixed_now(), false),
            (fixed_now() - Duration::seconds(1), false),
        ];

        for (expires_at, resolvable) in cases {
            let mut repo = MockLinkRepository::new();
            repo.expect_find_by_code()
                .returning(move |code| Ok(Some(stored_link(code, Some(expires_at)))));

            let svc = service(repo, MockCodeGenerator::new());
            let result = svc.resolve("abc123").await;

            if resolvable {
                assert!(result.is_ok());
            } else {
                assert!(matches!(result, Err(AppError::Expired(_))));
            }
        }
    }

    #[tokio::test]
    async fn test_resolve_becomes_expired_as_time_passes() {
        let expires_at = fixed_now() + Duration::seconds(1);
        let now = Arc::new(std::sync::Mutex::new(fixed_now()));

        let mut repo = MockLinkRepository::new();
        repo.expect_find_by_code()
            .returning(move |code| Ok(Some(stored_link(code, Some(expires_at)))));

        let clock = now.clone();
        let svc = LinkService::new(Arc::new(repo), Arc::new(MockCodeGenerator::new()))
            .with_clock(move || *clock.lock().unwrap());

        assert!(svc.resolve("abc123").await.is_ok());

        *now.lock().unwrap() = fixed_now() + Duration::seconds(2);
        assert!(matches!(
            svc.resolve("abc123").await,
            Err(AppError::Expired(_))
        ));
    }

    #[tokio::test]
    async fn test_metadata_returns_expired_link() {
        let mut repo = MockLinkRepository::new();
        repo.expect_find_by_code()
            .times(1)
            .returning(|code| Ok(Some(stored_link(code, Some(fixed_now())))));

        let svc = service(repo, MockCodeGenerator::new());

        let meta = svc.metadata("old-link").await.unwrap();
        assert!(meta.expired);
        assert_eq!(meta.link.code, "old-link");
        assert_eq!(meta.link.hits, 3);
    }

    #[tokio::test]
    async fn test_metadata_active_link() {
        let mut repo = MockLinkRepository::new();
        repo.expect_find_by_code()
            .times(1)
            .returning(|code| Ok(Some(stored_link(code, None))));

        let svc = service(repo, MockCodeGenerator::new());

        let meta = svc.metadata("abc123").await.unwrap();
        assert!(!meta.expired);
    }

    #[tokio::test]
    async fn test_metadata_not_found_and_invalid() {
        let mut repo = MockLinkRepository::new();
        repo.expect_find_by_code().times(1).returning(|_| Ok(None));

        let svc = service(repo, MockCodeGenerator::new());

        assert!(matches!(
            svc.metadata("nope").await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            svc.metadata("no").await,
            Err(AppError::InvalidCode(_))
        ));
    }

    #[tokio::test]
    async fn test_record_hit() {
        let mut repo = MockLinkRepository::new();
        repo.expect_increment_hits()
            .withf(|code| code == "abc123")
            .times(1)
            .returning(|_| Ok(()));

        let svc = service(repo, MockCodeGenerator::new());

        assert!(svc.record_hit("abc123").await.is_ok());
    }

    #[tokio::test]
    async fn test_record_hit_propagates_not_found() {
        let mut repo = MockLinkRepository::new();
        repo.expect_increment_hits()
            .times(1)
            .returning(|code| Err(AppError::NotFound(code.to_string())));

        let svc = service(repo, MockCodeGenerator::new());

        assert!(matches!(
            svc.record_hit("gone123").await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_record_hit_invalid_code() {
        let mut repo = MockLinkRepository::new();
        repo.expect_increment_hits().times(0);

        let svc = service(repo, MockCodeGenerator::new());

        assert!(matches!(
            svc.record_hit("../etc").await,
            Err(AppError::InvalidCode(_))
        ));
    }

    #[tokio::test]
    async fn test_cleanup_expired_passes_cutoff() {
        let cutoff = fixed_now();

        let mut repo = MockLinkRepository::new();
        repo.expect_purge_expired()
            .withf(move |t| *t == cutoff)
            .times(1)
            .returning(|_| Ok(4));

        let svc = service(repo, MockCodeGenerator::new());

        assert_eq!(svc.cleanup_expired(cutoff).await.unwrap(), 4);
    }

    #[test]
    fn test_build_short_url() {
        assert_eq!(
            build_short_url("http://localhost:8080", "abc"),
            "http://localhost:8080/abc"
        );
        assert_eq!(
            build_short_url("https://s.example.com///", "abc"),
            "https://s.example.com/abc"
        );
    }
}
