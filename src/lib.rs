pub mod config;
pub mod models;
pub mod providers;
pub mod retry;
pub mod service;
pub mod utils;

pub use models::{
    channel::ChannelType,
    notification::{EmailData, Notification, PushData, SmsData},
    outcome::DeliveryOutcome,
    priority::Priority,
    retry::RetryConfig,
    validation::ValidationError,
};
pub use providers::{Provider, ProviderRegistry};
pub use service::NotificationService;
