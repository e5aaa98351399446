//! Deciding which data to show: live, cached, or synthetic.
//!
//! # Decision flow
//!
//! ```text
//! force_demo ───────────────────────────────────────────────▶ Demo
//! live fetch ──ok──▶ save to cache (best effort) ───────────▶ Live
//!     │
//!     └─err──▶ load cache ──hit──────────────────────────────▶ Cache
//!                  │
//!                  └─miss──▶ no_demo? ──yes──▶ NoData (fatal)
//!                                   └───no──▶ Demo
//! ```
//!
//! Every live-fetch failure takes the same path. A 404 for an unknown user and a
//! network outage are not told apart. Cache read failures of any kind (missing,
//! unreadable, corrupt) count as "no cache".

use crate::cache::CacheStore;
use crate::demo::demo_bundle;
use crate::error::Error;
use crate::profile::Bundle;
use core::fmt;
use core::time::Duration;

const LOG_TARGET: &str = "  fallback";

/// Overall budget for the profile request plus every repository page.
pub const DEFAULT_DEADLINE: Duration = Duration::from_secs(15);

/// Something that can fetch a fresh [`Bundle`] for a username.
///
/// The GitHub [`Client`](crate::github::Client) is the real implementation.
pub trait LiveSource {
    /// Fetch profile and repositories, with derived statistics attached.
    fn fetch(&self, username: &str) -> impl Future<Output = Result<Bundle, Error>> + Send;
}

/// Knobs controlling the fallback chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FallbackPolicy {
    /// Skip network and cache entirely and produce demo data.
    pub force_demo: bool,

    /// Never fall back to demo data; with no cache, fail instead.
    pub no_demo: bool,

    /// Deadline for the whole live fetch.
    pub deadline: Duration,
}

impl Default for FallbackPolicy {
    fn default() -> Self {
        Self {
            force_demo: false,
            no_demo: false,
            deadline: DEFAULT_DEADLINE,
        }
    }
}

/// Where the resolved data came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    Live,
    Cache,
    Demo,
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Live => "live",
            Self::Cache => "cache",
            Self::Demo => "demo",
        })
    }
}

/// Non-fatal problems encountered on the way to a result.
#[derive(Debug)]
pub enum Notice {
    /// The live fetch failed; the result comes from a fallback.
    FetchFailed(Error),

    /// The live fetch succeeded but the cache could not be updated.
    SaveFailed(Error),

    /// A cache entry exists but could not be used.
    CacheUnusable(Error),
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (what, err) = match self {
            Self::FetchFailed(e) => ("fetch failed", e),
            Self::SaveFailed(e) => ("failed to save cache", e),
            Self::CacheUnusable(e) => ("ignoring unusable cache", e),
        };
        write!(f, "{what}: {}", ErrorChain(err))
    }
}

/// A finished bundle plus how it was obtained.
#[derive(Debug)]
pub struct Resolution {
    pub bundle: Bundle,
    pub source: DataSource,
    pub notices: Vec<Notice>,
}

impl Resolution {
    /// Whether the data shown is not what a live fetch would have produced.
    #[must_use]
    pub const fn is_degraded(&self) -> bool {
        !matches!(self.source, DataSource::Live)
    }
}

/// The live fetch failed, no cache entry could be used, and demo data was disallowed.
#[derive(Debug, thiserror::Error)]
#[error("no data available for '{username}': live fetch failed and no cache is available")]
pub struct NoData {
    pub username: String,
    pub fetch_error: Error,
    pub cache_error: Error,
}

/// Produce the data to show for `username`.
///
/// Resolves to exactly one outcome. The only failure is [`NoData`], which happens
/// when the live fetch fails, nothing usable is cached, and `policy.no_demo` is set.
pub async fn resolve<S: LiveSource>(source: &S, cache: &CacheStore, username: &str, policy: FallbackPolicy) -> Result<Resolution, NoData> {
    if policy.force_demo {
        log::info!(target: LOG_TARGET, "Demo data forced for '{username}'");
        return Ok(Resolution {
            bundle: demo_bundle(username),
            source: DataSource::Demo,
            notices: Vec::new(),
        });
    }

    log::info!(target: LOG_TARGET, "Fetching live data for '{username}'");
    let fetch_error = match fetch_live(source, username, policy.deadline).await {
        Ok(bundle) => {
            let mut notices = Vec::new();
            if let Err(e) = cache.save(username, &bundle.profile, &bundle.repos) {
                log::warn!(target: LOG_TARGET, "Could not save cache for '{username}': {}", ErrorChain(&e));
                notices.push(Notice::SaveFailed(e));
            }

            return Ok(Resolution {
                bundle,
                source: DataSource::Live,
                notices,
            });
        }
        Err(e) => e,
    };

    log::warn!(target: LOG_TARGET, "Live fetch for '{username}' failed: {}", ErrorChain(&fetch_error));

    let cache_error = match cache.load(username) {
        Ok(bundle) => {
            log::info!(target: LOG_TARGET, "Using cached data for '{username}'");
            return Ok(Resolution {
                bundle,
                source: DataSource::Cache,
                notices: vec![Notice::FetchFailed(fetch_error)],
            });
        }
        Err(e) => e,
    };

    let cache_missing = matches!(cache_error, Error::CacheMiss(_));
    if !cache_missing {
        log::warn!(target: LOG_TARGET, "Cache for '{username}' is unusable: {}", ErrorChain(&cache_error));
    }

    if policy.no_demo {
        return Err(NoData {
            username: username.to_string(),
            fetch_error,
            cache_error,
        });
    }

    let mut notices = vec![Notice::FetchFailed(fetch_error)];
    if !cache_missing {
        notices.push(Notice::CacheUnusable(cache_error));
    }

    log::info!(target: LOG_TARGET, "Falling back to demo data for '{username}'");
    Ok(Resolution {
        bundle: demo_bundle(username),
        source: DataSource::Demo,
        notices,
    })
}

async fn fetch_live<S: LiveSource>(source: &S, username: &str, deadline: Duration) -> Result<Bundle, Error> {
    tokio::time::timeout(deadline, source.fetch(username))
        .await
        .map_err(|_elapsed| Error::DeadlineExceeded(deadline))?
}

/// Formats an error followed by each of its sources, separated by `: `.
#[derive(Debug)]
pub struct ErrorChain<'a>(pub &'a (dyn core::error::Error + 'static));

impl fmt::Display for ErrorChain<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)?;
        let mut source = self.0.source();
        while let Some(e) = source {
            write!(f, ": {e}")?;
            source = e.source();
        }
        Ok(())
    }
}
