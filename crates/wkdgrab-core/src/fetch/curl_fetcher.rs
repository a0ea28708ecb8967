//! curl-backed fetch implementation.
//!
//! One blocking GET per call, body accumulated in memory (WKD keys are
//! small). TLS verification stays at libcurl defaults. Redirects are not
//! followed: a 3xx counts as "no key at this endpoint", which also keeps a
//! redirecting server from bouncing the lookup off HTTPS.

use super::{reason_phrase, FetchOutcome, Fetcher};
use std::time::Duration;

/// Production [`Fetcher`] using the curl crate (libcurl).
#[derive(Debug, Clone, Copy)]
pub struct CurlFetcher {
    pub connect_timeout: Duration,
    pub timeout: Duration,
}

impl Default for CurlFetcher {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(15),
            timeout: Duration::from_secs(30),
        }
    }
}

impl CurlFetcher {
    pub fn new(connect_timeout: Duration, timeout: Duration) -> Self {
        Self {
            connect_timeout,
            timeout,
        }
    }

    fn perform(&self, url: &str) -> Result<(u32, Vec<u8>), curl::Error> {
        let mut easy = curl::easy::Easy::new();
        easy.url(url)?;
        easy.get(true)?;
        easy.connect_timeout(self.connect_timeout)?;
        easy.timeout(self.timeout)?;

        let mut body = Vec::new();
        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let code = easy.response_code()?;
        Ok((code, body))
    }
}

impl Fetcher for CurlFetcher {
    fn fetch(&self, url: &str) -> FetchOutcome {
        tracing::debug!(url, "wkd fetch");
        match self.perform(url) {
            // Only a plain 200 carries a key; anything else means absent.
            Ok((200, body)) => FetchOutcome::Success(body),
            Ok((code, _)) => FetchOutcome::HttpError {
                status: code,
                reason: reason_phrase(code),
            },
            Err(e) => classify_curl_error(&e),
        }
    }
}

/// Map a curl error into the fetch outcome taxonomy.
fn classify_curl_error(e: &curl::Error) -> FetchOutcome {
    if e.is_operation_timedout() {
        return FetchOutcome::Timeout;
    }
    if e.is_couldnt_connect()
        || e.is_couldnt_resolve_host()
        || e.is_couldnt_resolve_proxy()
        || e.is_ssl_connect_error()
        || e.is_read_error()
        || e.is_recv_error()
        || e.is_send_error()
        || e.is_got_nothing()
    {
        return FetchOutcome::ConnectFailure;
    }
    FetchOutcome::NetworkError(e.to_string())
}
