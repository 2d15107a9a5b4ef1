//! Support for runtime configuration options

use std::time::Duration;

use once_cell::sync::Lazy;

/// How often the recurring reminder check fires.
///
/// Defaults to 60 seconds. Can be overridden by setting the
/// `CORKBOARD_REMINDER_SECS` environment variable before starting the app
/// (invalid or missing values silently fall back to the default).
pub static REMINDER_INTERVAL: Lazy<Duration> = Lazy::new(|| {
    let secs = std::env::var("CORKBOARD_REMINDER_SECS")
        .ok()
        .and_then(|text| text.parse().ok())
        .unwrap_or(60);
    Duration::from_secs(secs)
});
