//! Minimal HTTP/1.1 server for fetcher integration tests.
//!
//! Serves a single body for GET requests, with configurable status and an
//! optional stall mode to provoke client timeouts.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone, Copy)]
pub struct KeyServerOptions {
    /// Status line sent for every GET, e.g. "200 OK" or "404 Not Found".
    pub status: &'static str,
    /// If set, sent as a `Location` header (for 3xx responses).
    pub location: Option<&'static str>,
    /// If set, accept the connection but never respond.
    pub stall: bool,
}

impl Default for KeyServerOptions {
    fn default() -> Self {
        Self {
            status: "200 OK",
            location: None,
            stall: false,
        }
    }
}

/// Starts a server in a background thread serving `body`. Returns the base
/// URL (e.g. "http://127.0.0.1:12345/"). Runs until the process exits.
pub fn start(body: Vec<u8>) -> String {
    start_with_options(body, KeyServerOptions::default())
}

pub fn start_with_options(body: Vec<u8>, opts: KeyServerOptions) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let body = Arc::new(body);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let body = Arc::clone(&body);
            thread::spawn(move || handle(stream, &body, opts));
        }
    });
    format!("http://127.0.0.1:{}/", port)
}

/// Returns the port of a TCP listener that was bound and then closed, so
/// connections to it are refused.
pub fn refused_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}

fn handle(mut stream: std::net::TcpStream, body: &[u8], opts: KeyServerOptions) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(5)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(5)));

    // Read the request head; contents are irrelevant beyond draining it.
    let mut buf = [0u8; 8192];
    match stream.read(&mut buf) {
        Ok(0) | Err(_) => return,
        Ok(_) => {}
    }

    if opts.stall {
        thread::sleep(Duration::from_secs(5));
        return;
    }

    let location = match opts.location {
        Some(target) => format!("Location: {}\r\n", target),
        None => String::new(),
    };
    let response = format!(
        "HTTP/1.1 {}\r\nContent-Length: {}\r\n{}Connection: close\r\n\r\n",
        opts.status,
        body.len(),
        location
    );
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.write_all(body);
}
