//! Email address modeling.
//!
//! WKD lookups need the local part and domain separately; both must be
//! non-empty and joined by exactly one `@`. Original casing is preserved —
//! only the token derivation lowercases (see [`crate::zbase32`]).

use std::fmt;
use thiserror::Error;

/// A validated email address split into local part and domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress {
    local: String,
    domain: String,
}

/// Why a raw string failed to parse as an email address.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AddressError {
    #[error("'{0}' is not an email address (missing '@')")]
    MissingAt(String),
    #[error("'{0}' contains more than one '@'")]
    MultipleAt(String),
    #[error("'{0}' has an empty local part")]
    EmptyLocal(String),
    #[error("'{0}' has an empty domain")]
    EmptyDomain(String),
}

impl EmailAddress {
    /// Parse `local@domain`, requiring exactly one `@` and non-empty sides.
    pub fn parse(raw: &str) -> Result<Self, AddressError> {
        let (local, domain) = raw
            .split_once('@')
            .ok_or_else(|| AddressError::MissingAt(raw.to_string()))?;
        if domain.contains('@') {
            return Err(AddressError::MultipleAt(raw.to_string()));
        }
        if local.is_empty() {
            return Err(AddressError::EmptyLocal(raw.to_string()));
        }
        if domain.is_empty() {
            return Err(AddressError::EmptyDomain(raw.to_string()));
        }
        Ok(Self {
            local: local.to_string(),
            domain: domain.to_string(),
        })
    }

    pub fn local(&self) -> &str {
        &self.local
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.local, self.domain)
    }
}
