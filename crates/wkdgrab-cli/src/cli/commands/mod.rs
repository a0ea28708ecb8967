mod fetch;
mod hash;
mod urls;

pub use fetch::{run_fetch, FetchOptions};
pub use hash::run_hash;
pub use urls::run_urls;
