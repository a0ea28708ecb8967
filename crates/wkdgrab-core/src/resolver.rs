//! Ordered fetch orchestration over the two WKD candidate URLs.
//!
//! Strictly sequential: the advanced method is tried first, and a success
//! short-circuits so the direct method is never contacted. A non-success of
//! any kind just moves on to the next candidate.

use crate::email::EmailAddress;
use crate::fetch::{FetchOutcome, Fetcher};
use crate::lookup::{candidate_urls, CandidateUrl};
use crate::report::Reporter;

/// Terminal result of a WKD resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The raw key material and the candidate it came from.
    Found {
        key: Vec<u8>,
        source: CandidateUrl,
    },
    NotFound,
}

/// Resolve the public key for `email`, advanced method before direct.
///
/// All network access goes through `fetcher`; all user-facing output goes
/// through `reporter`. Never fails: a fully unreachable domain is just
/// [`Resolution::NotFound`].
pub fn resolve(
    email: &EmailAddress,
    fetcher: &dyn Fetcher,
    reporter: &dyn Reporter,
) -> Resolution {
    let [advanced, direct] = candidate_urls(email);

    reporter.attempt_started(&advanced);
    let outcome = fetcher.fetch(advanced.url());
    reporter.attempt_finished(&advanced, &outcome);
    if let FetchOutcome::Success(key) = outcome {
        reporter.attempt_finished(&direct, &FetchOutcome::NotAttempted);
        return Resolution::Found {
            key,
            source: advanced,
        };
    }

    reporter.attempt_started(&direct);
    let outcome = fetcher.fetch(direct.url());
    reporter.attempt_finished(&direct, &outcome);
    if let FetchOutcome::Success(key) = outcome {
        return Resolution::Found {
            key,
            source: direct,
        };
    }

    reporter.resolution_failed(email);
    Resolution::NotFound
}
