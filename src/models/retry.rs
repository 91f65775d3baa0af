use std::time::Duration;

use anyhow::{Error, Result, anyhow};

const NANOS_PER_SEC: u128 = 1_000_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryConfig {
    max_attempts: u32,
    base_delay: Duration,
}

impl RetryConfig {
    pub fn new(max_attempts: u32, base_delay: Duration) -> Result<Self, Error> {
        if max_attempts == 0 {
            return Err(anyhow!("max_attempts must be at least 1"));
        }

        Ok(Self {
            max_attempts,
            base_delay,
        })
    }

    pub fn from_millis(max_attempts: u32, base_delay_ms: u64) -> Result<Self, Error> {
        Self::new(max_attempts, Duration::from_millis(base_delay_ms))
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn base_delay(&self) -> Duration {
        self.base_delay
    }

    /// `base_delay * 2^(attempt - 1)`, attempts counted from 1.
    /// Saturates at `Duration::MAX`.
    pub fn backoff_delay(&self, attempt: u32) -> Duration {
        let base_nanos = self.base_delay.as_nanos();
        if base_nanos == 0 {
            return Duration::ZERO;
        }

        let shift = attempt.saturating_sub(1);
        let nanos = 1u128
            .checked_shl(shift)
            .and_then(|factor| base_nanos.checked_mul(factor));

        match nanos {
            Some(nanos) => {
                let secs = nanos / NANOS_PER_SEC;
                let subsec = (nanos % NANOS_PER_SEC) as u32;

                u64::try_from(secs)
                    .map(|secs| Duration::new(secs, subsec))
                    .unwrap_or(Duration::MAX)
            }
            None => Duration::MAX,
        }
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_millis(1000),
        }
    }
}
