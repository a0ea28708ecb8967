pub mod config;
pub mod logging;

pub mod email;
pub mod fetch;
pub mod import;
pub mod lookup;
pub mod report;
pub mod resolver;
pub mod storage;
pub mod zbase32;
