//! Initialization of shared resources (logger, HTTP client).

mod client;
mod logger;

pub use client::init_client;
pub use logger::init_logger_with;
