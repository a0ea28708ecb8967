//! Fetch collaborator interface and failure taxonomy.
//!
//! The resolver only depends on [`Fetcher`] and never performs network I/O
//! itself; [`CurlFetcher`] is the production implementation.

mod curl_fetcher;

pub use curl_fetcher::CurlFetcher;

use std::fmt;

/// Outcome of one GET against a candidate URL.
///
/// Total: every network-layer failure is classified into one of these
/// variants instead of surfacing as an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// 200 response; the body is the raw key material, unparsed.
    Success(Vec<u8>),
    /// Non-200 status. Treated as "no key at this endpoint", never fatal.
    HttpError { status: u32, reason: &'static str },
    /// Connect or transfer deadline exceeded.
    Timeout,
    /// DNS resolution or TCP/TLS connection failure.
    ConnectFailure,
    /// Any other transport-level failure.
    NetworkError(String),
    /// Candidate skipped because an earlier one already succeeded.
    NotAttempted,
}

impl FetchOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, FetchOutcome::Success(_))
    }
}

impl fmt::Display for FetchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchOutcome::Success(body) => write!(f, "success ({} bytes)", body.len()),
            FetchOutcome::HttpError { status, reason } if reason.is_empty() => {
                write!(f, "HTTP {}", status)
            }
            FetchOutcome::HttpError { status, reason } => write!(f, "HTTP {} {}", status, reason),
            FetchOutcome::Timeout => write!(f, "timed out"),
            FetchOutcome::ConnectFailure => write!(f, "connection failed"),
            FetchOutcome::NetworkError(msg) => write!(f, "network error: {}", msg),
            FetchOutcome::NotAttempted => write!(f, "not attempted"),
        }
    }
}

/// Blocking GET collaborator. Implementations own TLS, redirects, and
/// timeouts; callers only consume the outcome taxonomy.
pub trait Fetcher {
    fn fetch(&self, url: &str) -> FetchOutcome;
}

/// Reason phrase for common HTTP statuses, used in diagnostic messages.
pub(crate) fn reason_phrase(status: u32) -> &'static str {
    match status {
        201 => "Created",
        204 => "No Content",
        301 => "Moved Permanently",
        302 => "Found",
        400 => "Bad Request",
        401 => "Unauthorized",
        403 => "Forbidden",
        404 => "Not Found",
        410 => "Gone",
        429 => "Too Many Requests",
        500 => "Internal Server Error",
        502 => "Bad Gateway",
        503 => "Service Unavailable",
        _ => "",
    }
}
