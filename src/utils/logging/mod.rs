//! Logging utilities for lookup operations and progress tracking
//!
//! This module provides standardized log lines and progress bars.

pub mod log;
pub mod progress;

// Re-export commonly used functions for convenience
pub use self::log::{log_lookup_complete, log_lookup_failure, log_lookup_start};
pub use progress::{create_lookup_progress_bar, finish_progress_bar};
