mod email;
mod push;
mod registry;
mod sms;

pub use email::{MailgunEmailProvider, UnstableEmailProvider};
pub use push::PushNotificationProvider;
pub use registry::ProviderRegistry;
pub use sms::TwilioSmsProvider;

use anyhow::Error;
use async_trait::async_trait;

use crate::models::{channel::ChannelType, notification::Notification};

/// A backend able to deliver notifications for one or more channels.
///
/// Every error returned from `send` is treated as retryable; the dispatcher
/// only reads its `Display` output.
#[async_trait]
pub trait Provider: Send + Sync {
    fn supports(&self, channel: ChannelType) -> bool;

    fn name(&self) -> &str;

    async fn send(&self, notification: &Notification) -> Result<(), Error>;
}
