//! `wkdgrab urls` – print the candidate lookup URLs for an address.

use anyhow::Result;
use wkdgrab_core::email::EmailAddress;
use wkdgrab_core::lookup::candidate_urls;

/// Print both candidate URLs, one per line, in preference order.
pub fn run_urls(raw_email: &str) -> Result<()> {
    let email = EmailAddress::parse(raw_email)?;
    for (i, candidate) in candidate_urls(&email).iter().enumerate() {
        println!("{}. [{}] {}", i + 1, candidate.method(), candidate.url());
    }
    Ok(())
}
