use anyhow::{Error, Result};
use notification_dispatch::{
    ChannelType, EmailData, Notification, NotificationService, Priority,
    config::Config,
    providers::{MailgunEmailProvider, PushNotificationProvider, TwilioSmsProvider, UnstableEmailProvider},
    utils::init_tracing,
};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = Config::load()?;
    init_tracing(config.log_json);

    let service = NotificationService::new(config.retry_config()?);

    match &config.mailgun_api_key {
        Some(key) => service.register_provider(MailgunEmailProvider::new(key.clone())),
        None => {
            warn!("MAILGUN_API_KEY not set, using unstable email provider");
            service.register_provider(UnstableEmailProvider::default());
        }
    }
    if let Some(key) = &config.twilio_api_key {
        service.register_provider(TwilioSmsProvider::new(key.clone()));
    }
    if let Some(key) = &config.push_api_key {
        service.register_provider(PushNotificationProvider::new(key.clone()));
    }

    let notification: Notification = EmailData::new(
        "dev@test.com",
        "user@test.com",
        "Library check",
        "It works!",
        Priority::High,
    )
    .into();
    notification.validate(ChannelType::Email.as_str())?;

    let outcome = service.dispatch_with_outcome(ChannelType::Email, notification);

    tokio::select! {
        result = outcome => match result {
            Ok(outcome) => info!(%outcome, attempts = outcome.attempts(), "Dispatch finished"),
            Err(_) => warn!("Dispatch was refused"),
        },
        _ = tokio::signal::ctrl_c() => info!("Interrupted"),
    }

    service.shutdown().await;

    Ok(())
}
