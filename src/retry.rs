use std::future::Future;

use anyhow::Error;
use tokio::time::sleep;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

use crate::{
    models::{notification::Notification, outcome::DeliveryOutcome, retry::RetryConfig},
    providers::Provider,
};

#[derive(Debug)]
pub enum RetryOutcome<T> {
    Succeeded { value: T, attempts: u32 },
    Exhausted { error: Error, attempts: u32 },
    Aborted { attempts: u32 },
}

impl<T> RetryOutcome<T> {
    pub fn attempts(&self) -> u32 {
        match self {
            RetryOutcome::Succeeded { attempts, .. }
            | RetryOutcome::Exhausted { attempts, .. }
            | RetryOutcome::Aborted { attempts } => *attempts,
        }
    }
}

/// Runs `operation` up to `max_attempts` times, sleeping
/// `base_delay * 2^(n-1)` after failed attempt `n`.
///
/// Attempts are strictly sequential. Cancelling `cancel` while a backoff is
/// pending ends the loop with [`RetryOutcome::Aborted`]; it never interrupts an
/// attempt already in progress.
pub async fn retry_with_backoff<F, Fut, T>(
    config: &RetryConfig,
    cancel: &CancellationToken,
    mut operation: F,
) -> RetryOutcome<T>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<T, Error>>,
{
    let mut attempt = 0;

    loop {
        attempt += 1;

        match operation(attempt).await {
            Ok(value) => {
                return RetryOutcome::Succeeded {
                    value,
                    attempts: attempt,
                };
            }
            Err(e) => {
                if attempt >= config.max_attempts() {
                    return RetryOutcome::Exhausted {
                        error: e,
                        attempts: attempt,
                    };
                }

                let delay = config.backoff_delay(attempt);

                debug!(
                    attempt,
                    max_attempts = config.max_attempts(),
                    delay_ms = delay.as_millis() as u64,
                    "Attempt failed, backing off"
                );

                tokio::select! {
                    biased;
                    _ = cancel.cancelled() => {
                        return RetryOutcome::Aborted { attempts: attempt };
                    }
                    _ = sleep(delay) => {}
                }
            }
        }
    }
}

/// Delivers `notification` through an already selected provider.
///
/// Failures never leave this function: every terminal state is logged and
/// turned into a [`DeliveryOutcome`].
pub async fn execute_with_retry(
    provider: &dyn Provider,
    notification: &Notification,
    config: &RetryConfig,
    cancel: &CancellationToken,
) -> DeliveryOutcome {
    let provider_name = provider.name().to_string();
    let name = provider_name.as_str();

    let outcome = retry_with_backoff(config, cancel, move |attempt| async move {
        provider.send(notification).await.inspect_err(|e| {
            warn!(
                attempt,
                provider = %name,
                error = %e,
                "Delivery attempt failed"
            );
        })
    })
    .await;

    match outcome {
        RetryOutcome::Succeeded { attempts, .. } => {
            info!(
                attempts,
                provider = %provider_name,
                "Notification delivered"
            );
            DeliveryOutcome::Succeeded {
                provider: provider_name,
                attempts,
            }
        }
        RetryOutcome::Exhausted { error, attempts } => {
            error!(
                attempts,
                max_attempts = config.max_attempts(),
                provider = %provider_name,
                recipient = %notification.recipient(),
                error = %error,
                "Retries exhausted, notification not delivered"
            );
            DeliveryOutcome::Exhausted {
                provider: provider_name,
                recipient: notification.recipient().to_string(),
                attempts,
                last_error: error.to_string(),
            }
        }
        RetryOutcome::Aborted { attempts } => {
            error!(
                attempts,
                max_attempts = config.max_attempts(),
                provider = %provider_name,
                recipient = %notification.recipient(),
                "Backoff interrupted by cancellation, retry loop aborted"
            );
            DeliveryOutcome::Aborted {
                provider: provider_name,
                attempts,
            }
        }
    }
}
