use anyhow::{Error, Result, anyhow};
use async_trait::async_trait;
use tracing::info;

use crate::{
    models::{channel::ChannelType, notification::Notification},
    providers::Provider,
};

pub struct PushNotificationProvider {
    api_key: String,
}

impl PushNotificationProvider {
    pub fn new(api_key: impl Into<String>) -> Self {
        info!("Push notification provider initialized");

        Self {
            api_key: api_key.into(),
        }
    }
}

#[async_trait]
impl Provider for PushNotificationProvider {
    fn supports(&self, channel: ChannelType) -> bool {
        channel == ChannelType::PushNotification
    }

    fn name(&self) -> &str {
        "PushNotificationProvider"
    }

    async fn send(&self, notification: &Notification) -> Result<(), Error> {
        if self.api_key.is_empty() {
            return Err(anyhow!("Push API key is not configured"));
        }

        info!(recipient = %notification.recipient(), "Push notification sent");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{notification::PushData, priority::Priority};

    #[test]
    fn supports_push_only() {
        let provider = PushNotificationProvider::new("key");

        assert!(provider.supports(ChannelType::PushNotification));
        assert!(!provider.supports(ChannelType::Email));
        assert!(!provider.supports(ChannelType::Sms));
        assert_eq!(provider.name(), "PushNotificationProvider");
    }

    #[tokio::test]
    async fn sends_with_key() {
        let provider = PushNotificationProvider::new("key");
        let notification = PushData::new("app", "device-token", "ping", Priority::Urgent).into();

        assert!(provider.send(&notification).await.is_ok());
    }

    #[tokio::test]
    async fn fails_without_key() {
        let provider = PushNotificationProvider::new("");
        let notification = PushData::new("app", "device-token", "ping", Priority::Urgent).into();

        assert!(provider.send(&notification).await.is_err());
    }
}
