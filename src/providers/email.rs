use std::sync::atomic::{AtomicU32, Ordering};

use anyhow::{Error, Result, anyhow};
use async_trait::async_trait;
use tracing::{info, warn};

use crate::{
    models::{channel::ChannelType, notification::Notification},
    providers::Provider,
};

pub struct MailgunEmailProvider {
    api_key: String,
}

impl MailgunEmailProvider {
    pub fn new(api_key: impl Into<String>) -> Self {
        info!("Mailgun email provider initialized");

        Self {
            api_key: api_key.into(),
        }
    }
}

#[async_trait]
impl Provider for MailgunEmailProvider {
    fn supports(&self, channel: ChannelType) -> bool {
        channel == ChannelType::Email
    }

    fn name(&self) -> &str {
        "Mailgun"
    }

    async fn send(&self, notification: &Notification) -> Result<(), Error> {
        if self.api_key.is_empty() {
            return Err(anyhow!("Mailgun API key is not configured"));
        }

        let subject = match notification {
            Notification::Email(data) => data.subject(),
            _ => return Err(anyhow!("Mailgun only delivers email payloads")),
        };

        // Transport not wired yet, delivery is logged only.
        info!(
            recipient = %notification.recipient(),
            sender = %notification.sender(),
            subject,
            "Email sent through Mailgun"
        );

        Ok(())
    }
}

/// Email backend that fails its first `failures` sends with a simulated
/// network error. Used to demo and exercise the retry path.
pub struct UnstableEmailProvider {
    failures: u32,
    calls: AtomicU32,
}

impl UnstableEmailProvider {
    pub fn new(failures: u32) -> Self {
        Self {
            failures,
            calls: AtomicU32::new(0),
        }
    }

    pub fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Default for UnstableEmailProvider {
    fn default() -> Self {
        Self::new(2)
    }
}

#[async_trait]
impl Provider for UnstableEmailProvider {
    fn supports(&self, channel: ChannelType) -> bool {
        channel == ChannelType::Email
    }

    fn name(&self) -> &str {
        "UnstableEmailProvider"
    }

    async fn send(&self, notification: &Notification) -> Result<(), Error> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;

        if call <= self.failures {
            warn!(
                call,
                recipient = %notification.recipient(),
                "Unstable email provider failing on purpose"
            );
            return Err(anyhow!("Temporary network error (simulated)"));
        }

        info!(recipient = %notification.recipient(), "Email sent through unstable provider");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        notification::{EmailData, SmsData},
        priority::Priority,
    };

    fn email() -> Notification {
        EmailData::new("dev@test.com", "user@test.com", "Hi", "Body", Priority::Medium).into()
    }

    #[test]
    fn email_providers_only_support_email() {
        let mailgun = MailgunEmailProvider::new("key");
        let unstable = UnstableEmailProvider::default();

        for provider in [&mailgun as &dyn Provider, &unstable] {
            assert!(provider.supports(ChannelType::Email));
            assert!(!provider.supports(ChannelType::Sms));
            assert!(!provider.supports(ChannelType::PushNotification));
        }
    }

    #[tokio::test]
    async fn mailgun_without_key_fails() {
        let provider = MailgunEmailProvider::new("");
        assert!(provider.send(&email()).await.is_err());
    }

    #[tokio::test]
    async fn mailgun_sends_email_and_rejects_other_payloads() {
        let provider = MailgunEmailProvider::new("key");
        assert!(provider.send(&email()).await.is_ok());

        let sms = SmsData::new("22113", "221331", "hello", Priority::Low).into();
        assert!(provider.send(&sms).await.is_err());
    }

    #[tokio::test]
    async fn unstable_provider_recovers_after_configured_failures() {
        let provider = UnstableEmailProvider::new(2);
        let notification = email();

        assert!(provider.send(&notification).await.is_err());
        assert!(provider.send(&notification).await.is_err());
        assert!(provider.send(&notification).await.is_ok());
        assert_eq!(provider.calls(), 3);
    }
}
