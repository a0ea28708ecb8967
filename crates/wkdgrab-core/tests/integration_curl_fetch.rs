//! Integration tests: CurlFetcher against a real local HTTP server.
//!
//! Covers the whole outcome taxonomy a live fetch can produce: success with
//! body, non-2xx status, refused connection, and timeout.

mod common;

use common::key_server::{self, KeyServerOptions};
use std::time::Duration;
use wkdgrab_core::fetch::{CurlFetcher, FetchOutcome, Fetcher};

const KEY_BLOCK: &[u8] = b"-----BEGIN PGP PUBLIC KEY BLOCK-----\nxjMEY...\n-----END PGP PUBLIC KEY BLOCK-----\n";

#[test]
fn success_returns_body_unmodified() {
    let url = key_server::start(KEY_BLOCK.to_vec());
    let fetcher = CurlFetcher::default();

    match fetcher.fetch(&url) {
        FetchOutcome::Success(body) => assert_eq!(body, KEY_BLOCK),
        other => panic!("expected Success, got {:?}", other),
    }
}

#[test]
fn http_404_is_classified_not_escalated() {
    let url = key_server::start_with_options(
        b"no such key".to_vec(),
        KeyServerOptions {
            status: "404 Not Found",
            ..Default::default()
        },
    );
    let fetcher = CurlFetcher::default();

    match fetcher.fetch(&url) {
        FetchOutcome::HttpError { status, .. } => assert_eq!(status, 404),
        other => panic!("expected HttpError, got {:?}", other),
    }
}

#[test]
fn http_2xx_other_than_200_is_not_success() {
    // Only a plain 200 carries a key; a 201 (or 204) body must not be
    // mistaken for key material.
    let url = key_server::start_with_options(
        b"surprise body".to_vec(),
        KeyServerOptions {
            status: "201 Created",
            ..Default::default()
        },
    );
    let fetcher = CurlFetcher::default();

    match fetcher.fetch(&url) {
        FetchOutcome::HttpError { status, .. } => assert_eq!(status, 201),
        other => panic!("expected HttpError for 201, got {:?}", other),
    }
}

#[test]
fn redirect_is_not_followed() {
    // A redirecting endpoint must classify as a non-200, not hand back the
    // body it points at (which could live on plain HTTP).
    let target = key_server::start(b"redirected body".to_vec());
    let target: &'static str = Box::leak(target.into_boxed_str());
    let url = key_server::start_with_options(
        Vec::new(),
        KeyServerOptions {
            status: "302 Found",
            location: Some(target),
            ..Default::default()
        },
    );
    let fetcher = CurlFetcher::default();

    match fetcher.fetch(&url) {
        FetchOutcome::HttpError { status, .. } => assert_eq!(status, 302),
        other => panic!("expected HttpError for 302, got {:?}", other),
    }
}

#[test]
fn http_500_is_classified() {
    let url = key_server::start_with_options(
        Vec::new(),
        KeyServerOptions {
            status: "500 Internal Server Error",
            ..Default::default()
        },
    );
    let fetcher = CurlFetcher::default();

    match fetcher.fetch(&url) {
        FetchOutcome::HttpError { status, .. } => assert_eq!(status, 500),
        other => panic!("expected HttpError, got {:?}", other),
    }
}

#[test]
fn refused_connection_is_connect_failure() {
    let port = key_server::refused_port();
    let fetcher = CurlFetcher::default();

    let outcome = fetcher.fetch(&format!("http://127.0.0.1:{}/", port));
    assert_eq!(outcome, FetchOutcome::ConnectFailure);
}

#[test]
fn stalled_server_is_timeout() {
    let url = key_server::start_with_options(
        Vec::new(),
        KeyServerOptions {
            status: "200 OK",
            stall: true,
            ..Default::default()
        },
    );
    let fetcher = CurlFetcher::new(Duration::from_secs(5), Duration::from_secs(1));

    assert_eq!(fetcher.fetch(&url), FetchOutcome::Timeout);
}
