use std::time::Duration;

use crate::config::DEFAULT_RETRY_DELAY_SECS;

/// Retry policy for failed page fetches.
///
/// The list view retries a failed page at a fixed delay, by default forever,
/// matching the behavior of an app that keeps trying as long as the view is
/// mounted. Callers (and tests) can cap the number of attempts or shrink the
/// delay instead of waiting on real timers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    delay: Duration,
    max_attempts: Option<u32>,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::fixed(Duration::from_secs(DEFAULT_RETRY_DELAY_SECS))
    }
}

impl RetryPolicy {
    /// Unlimited attempts with a fixed delay between them.
    pub fn fixed(delay: Duration) -> Self {
        Self {
            delay,
            max_attempts: None,
        }
    }

    /// Caps the total number of attempts (including the first one).
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = Some(max_attempts);
        self
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Whether another attempt may run after `attempts` have already failed.
    pub fn allows_another(&self, attempts: u32) -> bool {
        self.max_attempts.is_none_or(|max| attempts < max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_five_second_fixed_delay() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.delay(), Duration::from_secs(5));
        assert!(policy.allows_another(0));
        assert!(policy.allows_another(1_000_000));
    }

    #[test]
    fn capped_policy_stops_after_max_attempts() {
        let policy = RetryPolicy::fixed(Duration::ZERO).with_max_attempts(3);
        assert!(policy.allows_another(1));
        assert!(policy.allows_another(2));
        assert!(!policy.allows_another(3));
    }

    #[test]
    fn single_attempt_policy_never_retries() {
        let policy = RetryPolicy::fixed(Duration::ZERO).with_max_attempts(1);
        assert!(!policy.allows_another(1));
    }
}
