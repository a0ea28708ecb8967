//! `wkdgrab hash` – print the WKD lookup token for a local part.

use anyhow::Result;
use wkdgrab_core::email::EmailAddress;
use wkdgrab_core::zbase32;

/// Print the lookup token. A full address is accepted; its local part is
/// hashed.
pub fn run_hash(input: &str) -> Result<()> {
    let token = if input.contains('@') {
        let email = EmailAddress::parse(input)?;
        zbase32::lookup_token(email.local())
    } else {
        zbase32::lookup_token(input)
    };
    println!("{}", token);
    Ok(())
}
