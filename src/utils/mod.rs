//! Utility functions shared by the lookup stages

pub mod http;
pub mod logging;

// Re-export commonly used functions for convenience
pub use http::{build_client, get_json};
pub use logging::{log_lookup_complete, log_lookup_failure, log_lookup_start};
