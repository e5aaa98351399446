//! Failure taxonomy for the fetch, cache, and fallback pipeline.

use core::time::Duration;
use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by the GitHub client, the paginator, and the cache store.
///
/// None of these are retried where they occur. They bubble up to the fallback
/// orchestrator, which treats every live-fetch failure the same way.
#[derive(Debug, Error)]
pub enum Error {
    /// Caller supplied an argument that can never succeed (e.g. an empty username).
    #[error("invalid input: {0}")]
    Validation(&'static str),

    /// No response was obtained (DNS, connection refused, TLS, body read).
    #[error("transport failure for {url}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The overall live-fetch deadline elapsed before every request completed.
    #[error("live fetch did not complete within {}s", .0.as_secs())]
    DeadlineExceeded(Duration),

    /// Upstream answered with something other than 200 OK.
    #[error("{method} {url} returned {status}: {body}")]
    Request {
        method: reqwest::Method,
        url: String,
        status: u16,
        body: String,
    },

    /// Upstream answered 200 OK with a body that isn't the expected JSON shape.
    #[error("could not decode response from {url}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// Cache directory or file could not be created, read, or written.
    #[error("cache I/O failure at '{}'", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No cache entry exists for the requested username.
    #[error("no cache entry at '{}'", .0.display())]
    CacheMiss(PathBuf),

    /// A cache file exists but does not hold a valid entry.
    #[error("cache file '{}' is corrupt", path.display())]
    Corruption {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// Whether the failure happened before any response was received.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. } | Self::DeadlineExceeded(_))
    }

    /// The HTTP status carried by a [`Error::Request`], if any.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Request { status, .. } => Some(*status),
            _ => None,
        }
    }
}
