//! Progress reporting for batch lookups
//!
//! This module provides standardized progress reporting functionality
//! using the indicatif crate.

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

/// Default style for the lookup progress bar
pub const DEFAULT_LOOKUP_TEMPLATE: &str =
    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}";

/// Create a progress bar for a batch of lookups, drawn on stderr
///
/// # Arguments
/// * `length` - Number of addresses in the batch
/// * `description` - Optional description to display as the initial message
#[must_use]
pub fn create_lookup_progress_bar(length: u64, description: Option<&str>) -> ProgressBar {
    let pb = ProgressBar::with_draw_target(Some(length), ProgressDrawTarget::stderr());
    let style = ProgressStyle::default_bar()
        .template(DEFAULT_LOOKUP_TEMPLATE)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("#>-");
    pb.set_style(style);

    if let Some(desc) = description {
        pb.set_message(desc.to_string());
    }

    pb
}

/// Finish a progress bar with a completion message
///
/// # Arguments
/// * `pb` - The `ProgressBar` to finish
/// * `message` - Optional completion message
pub fn finish_progress_bar(pb: &ProgressBar, message: Option<&str>) {
    if let Some(msg) = message {
        pb.finish_with_message(msg.to_string());
    } else {
        pb.finish();
    }
}
