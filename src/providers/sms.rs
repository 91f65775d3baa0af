use anyhow::{Error, Result, anyhow};
use async_trait::async_trait;
use tracing::info;

use crate::{
    models::{channel::ChannelType, notification::Notification},
    providers::Provider,
};

pub struct TwilioSmsProvider {
    api_key: String,
}

impl TwilioSmsProvider {
    pub fn new(api_key: impl Into<String>) -> Self {
        info!("Twilio SMS provider initialized");

        Self {
            api_key: api_key.into(),
        }
    }
}

#[async_trait]
impl Provider for TwilioSmsProvider {
    fn supports(&self, channel: ChannelType) -> bool {
        channel == ChannelType::Sms
    }

    fn name(&self) -> &str {
        "TwilioSmsProvider"
    }

    async fn send(&self, notification: &Notification) -> Result<(), Error> {
        if self.api_key.is_empty() {
            return Err(anyhow!("Twilio API key is not configured"));
        }

        info!(recipient = %notification.recipient(), "SMS sent through Twilio");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{notification::SmsData, priority::Priority};

    #[test]
    fn supports_sms_only() {
        let provider = TwilioSmsProvider::new("key");

        assert!(provider.supports(ChannelType::Sms));
        assert!(!provider.supports(ChannelType::Email));
        assert_eq!(provider.name(), "TwilioSmsProvider");
    }

    #[tokio::test]
    async fn sends_with_key() {
        let provider = TwilioSmsProvider::new("key");
        let notification = SmsData::new("22113", "221331", "hello", Priority::Low).into();

        assert!(provider.send(&notification).await.is_ok());
    }
}
