//! Candidate URL construction for the two WKD lookup methods.
//!
//! The advanced method lives on a dedicated `openpgpkey.` subdomain and
//! signals explicit opt-in, so it is always tried before the direct method
//! on the domain itself.

use crate::email::EmailAddress;
use crate::zbase32;
use std::fmt;
use url::Url;

/// WKD lookup method, in preference order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Advanced,
    Direct,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Advanced => write!(f, "advanced"),
            Method::Direct => write!(f, "direct"),
        }
    }
}

/// One candidate lookup location: the method and its HTTPS URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateUrl {
    method: Method,
    url: String,
}

impl CandidateUrl {
    pub fn method(&self) -> Method {
        self.method
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Host component of the URL, for diagnostics.
    pub fn host(&self) -> Option<String> {
        Url::parse(&self.url)
            .ok()
            .and_then(|u| u.host_str().map(str::to_string))
    }
}

/// Build both candidate URLs for an address, advanced method first.
///
/// The `l=` query carries the local part as given; only the token derivation
/// lowercases.
pub fn candidate_urls(email: &EmailAddress) -> [CandidateUrl; 2] {
    let token = zbase32::lookup_token(email.local());
    let (local, domain) = (email.local(), email.domain());
    [
        CandidateUrl {
            method: Method::Advanced,
            url: format!(
                "https://openpgpkey.{domain}/.well-known/openpgpkey/{domain}/hu/{token}?l={local}"
            ),
        },
        CandidateUrl {
            method: Method::Direct,
            url: format!("https://{domain}/.well-known/openpgpkey/hu/{token}?l={local}"),
        },
    ]
}
