//! GitHub core rate limit handling.
//!
//! Before each source request the remaining core quota is checked. When it is
//! nearly exhausted the caller sleeps until the window resets; a reset too far
//! in the future is reported as an error instead.

use crate::source::SourceError;
use octocrab::Octocrab;
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tracing::info;

/// Longest wait for a rate limit reset (1 hour).
const MAX_WAIT_SECS: u64 = 3600;

/// Remaining requests below which we wait for the reset.
const MIN_REMAINING_THRESHOLD: u32 = 5;

/// Rate limit information for the core API.
#[derive(Debug, Clone)]
pub struct RateLimitInfo {
    /// Requests remaining in the current window.
    pub remaining: u32,
    /// Unix timestamp when the rate limit resets.
    pub reset: u64,
    /// Total requests allowed per window.
    pub limit: u32,
}

impl RateLimitInfo {
    /// How long to wait before the next request, given the current Unix time.
    ///
    /// `None` means the request can go ahead immediately.
    #[must_use]
    pub fn wait_time(&self, now: u64) -> Option<Duration> {
        if self.remaining >= MIN_REMAINING_THRESHOLD || self.reset <= now {
            return None;
        }
        Some(Duration::from_secs(self.reset - now))
    }
}

/// Fetches the current core API rate limit.
///
/// # Errors
///
/// Returns an error if the rate limit API call fails.
pub async fn check_core_rate_limit(octocrab: &Octocrab) -> Result<RateLimitInfo, octocrab::Error> {
    let rate_limit = octocrab.ratelimit().get().await?;
    let core = &rate_limit.resources.core;

    Ok(RateLimitInfo {
        remaining: u32::try_from(core.remaining).unwrap_or(u32::MAX),
        reset: core.reset,
        limit: u32::try_from(core.limit).unwrap_or(u32::MAX),
    })
}

/// Waits for the core rate limit to reset if it is nearly used up.
///
/// # Errors
///
/// Returns [`SourceError::GitHubError`] if the check fails, or
/// [`SourceError::RateLimitExceeded`] if the reset is more than an hour away.
pub async fn ensure_core_rate_limit(octocrab: &Octocrab) -> Result<(), SourceError> {
    let info = check_core_rate_limit(octocrab).await?;
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    let Some(wait) = info.wait_time(now) else {
        return Ok(());
    };

    if wait.as_secs() > MAX_WAIT_SECS {
        return Err(SourceError::RateLimitExceeded {
            reset_at: info.reset,
        });
    }

    info!(
        remaining = info.remaining,
        limit = info.limit,
        wait_secs = wait.as_secs(),
        "Rate limit low, waiting for reset"
    );
    tokio::time::sleep(wait).await;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(remaining: u32, reset: u64) -> RateLimitInfo {
        RateLimitInfo {
            remaining,
            reset,
            limit: 60,
        }
    }

    #[test]
    fn no_wait_with_enough_remaining() {
        assert_eq!(info(100, 2_000).wait_time(1_000), None);
    }

    #[test]
    fn no_wait_when_reset_has_passed() {
        assert_eq!(info(1, 500).wait_time(1_000), None);
    }

    #[test]
    fn waits_until_reset_when_low() {
        assert_eq!(
            info(2, 1_030).wait_time(1_000),
            Some(Duration::from_secs(30))
        );
    }
}
