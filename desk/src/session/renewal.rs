//! # Token Renewal Timer
//!
//! The one autonomously-firing background activity of the client: a single
//! scheduled task that exchanges a near-expiry access token for a fresh one.
//!
//! Invariant: at most one renewal task is pending. Arming replaces (aborts)
//! the previously pending task; dropping the timer disarms it, so repeated
//! login/logout cycles cannot leak timers.

use std::time::Duration;

use tokio::task::JoinHandle;

/// Lead time before token expiry at which renewal fires.
pub(crate) const RENEWAL_LEAD_SECS: i64 = 60;

/// Delay until renewal should fire for a token expiring at `exp`.
///
/// `exp − 60s`, clamped to zero: an already-expired token renews
/// immediately, never with a negative delay.
pub(crate) fn renewal_delay(exp: i64, now: i64) -> Duration {
    let secs = exp - RENEWAL_LEAD_SECS - now;
    Duration::from_secs(secs.max(0) as u64)
}

/// Holder of the at-most-one pending renewal task.
#[derive(Default)]
pub(crate) struct RenewalTimer {
    pending: Option<JoinHandle<()>>,
}

impl RenewalTimer {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Replace the pending task with `handle`.
    pub(crate) fn arm(&mut self, handle: JoinHandle<()>) {
        self.disarm();
        self.pending = Some(handle);
    }

    /// Cancel the pending task, if any.
    pub(crate) fn disarm(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

impl Drop for RenewalTimer {
    fn drop(&mut self) {
        self.disarm();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delay_is_lead_time_before_expiry() {
        // Token expiring in 90s renews at 30s, not at 90 or 0
        assert_eq!(renewal_delay(1000 + 90, 1000), Duration::from_secs(30));
    }

    #[test]
    fn test_expired_token_renews_immediately() {
        assert_eq!(renewal_delay(1000 - 10, 1000), Duration::ZERO);
    }

    #[test]
    fn test_delay_inside_lead_window_clamps_to_zero() {
        assert_eq!(renewal_delay(1000 + 59, 1000), Duration::ZERO);
        assert_eq!(renewal_delay(1000 + 60, 1000), Duration::ZERO);
        assert_eq!(renewal_delay(1000 + 61, 1000), Duration::from_secs(1));
    }
}
