//! Progress reporting for the resolver.
//!
//! The resolver emits every event unconditionally; the reporter decides what
//! the user sees. Presentation stays out of the decision logic that way.

use crate::email::EmailAddress;
use crate::fetch::FetchOutcome;
use crate::lookup::CandidateUrl;

/// Receives structured resolution progress events.
pub trait Reporter {
    /// A candidate URL is about to be fetched.
    fn attempt_started(&self, candidate: &CandidateUrl);
    /// A candidate's fetch finished (or was skipped) with the given outcome.
    fn attempt_finished(&self, candidate: &CandidateUrl, outcome: &FetchOutcome);
    /// Both candidates were exhausted without finding a key.
    fn resolution_failed(&self, email: &EmailAddress);
}

/// Reporter that prints to stderr, with per-attempt detail gated on verbose.
///
/// The final not-found line is always printed: it is the result, not a
/// diagnostic.
#[derive(Debug, Clone, Copy)]
pub struct StderrReporter {
    verbose: bool,
}

impl StderrReporter {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

impl Reporter for StderrReporter {
    fn attempt_started(&self, candidate: &CandidateUrl) {
        tracing::debug!(method = %candidate.method(), url = candidate.url(), "attempting lookup");
        if self.verbose {
            let host = candidate.host().unwrap_or_default();
            eprintln!("trying {} method ({})", candidate.method(), host);
        }
    }

    fn attempt_finished(&self, candidate: &CandidateUrl, outcome: &FetchOutcome) {
        tracing::debug!(method = %candidate.method(), outcome = %outcome, "lookup finished");
        if !self.verbose {
            return;
        }
        match outcome {
            FetchOutcome::Success(_) => {
                eprintln!("successfully retrieved public key from {}", candidate.url());
            }
            FetchOutcome::HttpError { status, reason } => {
                eprintln!(
                    "request to {} returned {} {}",
                    candidate.url(),
                    status,
                    reason
                );
            }
            FetchOutcome::Timeout => {
                eprintln!("connection to {} timed out", candidate.url());
            }
            FetchOutcome::ConnectFailure => {
                eprintln!("unable to connect to {}", candidate.url());
            }
            FetchOutcome::NetworkError(details) => {
                eprintln!("error contacting {} ({})", candidate.url(), details);
            }
            FetchOutcome::NotAttempted => {
                eprintln!("skipping {} method lookup", candidate.method());
            }
        }
    }

    fn resolution_failed(&self, email: &EmailAddress) {
        tracing::info!(email = %email, "no key located");
        eprintln!("unable to locate public key for {}", email);
    }
}

/// Reporter that discards everything. Useful in tests and library callers.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullReporter;

impl Reporter for NullReporter {
    fn attempt_started(&self, _candidate: &CandidateUrl) {}
    fn attempt_finished(&self, _candidate: &CandidateUrl, _outcome: &FetchOutcome) {}
    fn resolution_failed(&self, _email: &EmailAddress) {}
}
