use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{
    channel::ChannelType,
    priority::Priority,
    validation::{ValidationError, require_priority, require_text},
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmailData {
    from: String,
    to: String,
    subject: String,
    body: String,

    #[serde(default = "Utc::now")]
    created_at: DateTime<Utc>,

    #[serde(default)]
    priority: Option<Priority>,
}

impl EmailData {
    pub fn new(
        from: impl Into<String>,
        to: impl Into<String>,
        subject: impl Into<String>,
        body: impl Into<String>,
        priority: impl Into<Option<Priority>>,
    ) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            subject: subject.into(),
            body: body.into(),
            created_at: Utc::now(),
            priority: priority.into(),
        }
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SmsData {
    from: String,
    to: String,
    body: String,

    #[serde(default = "Utc::now")]
    created_at: DateTime<Utc>,

    #[serde(default)]
    priority: Option<Priority>,
}

impl SmsData {
    pub fn new(
        from: impl Into<String>,
        to: impl Into<String>,
        body: impl Into<String>,
        priority: impl Into<Option<Priority>>,
    ) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            body: body.into(),
            created_at: Utc::now(),
            priority: priority.into(),
        }
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PushData {
    from: String,
    to: String,
    body: String,

    #[serde(default = "Utc::now")]
    created_at: DateTime<Utc>,

    #[serde(default)]
    priority: Option<Priority>,
}

impl PushData {
    pub fn new(
        from: impl Into<String>,
        to: impl Into<String>,
        body: impl Into<String>,
        priority: impl Into<Option<Priority>>,
    ) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            body: body.into(),
            created_at: Utc::now(),
            priority: priority.into(),
        }
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }
}

/// A notification payload, one variant per delivery medium.
///
/// Values are immutable once built: the dispatch task takes ownership and only
/// reads them. `created_at` is stamped at construction (or at deserialization
/// when the payload omits it).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Notification {
    Email(EmailData),
    Sms(SmsData),
    Push(PushData),
}

impl Notification {
    pub fn sender(&self) -> &str {
        match self {
            Notification::Email(data) => &data.from,
            Notification::Sms(data) => &data.from,
            Notification::Push(data) => &data.from,
        }
    }

    pub fn recipient(&self) -> &str {
        match self {
            Notification::Email(data) => &data.to,
            Notification::Sms(data) => &data.to,
            Notification::Push(data) => &data.to,
        }
    }

    pub fn body(&self) -> &str {
        match self {
            Notification::Email(data) => &data.body,
            Notification::Sms(data) => &data.body,
            Notification::Push(data) => &data.body,
        }
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        match self {
            Notification::Email(data) => data.created_at,
            Notification::Sms(data) => data.created_at,
            Notification::Push(data) => data.created_at,
        }
    }

    pub fn priority(&self) -> Option<Priority> {
        match self {
            Notification::Email(data) => data.priority,
            Notification::Sms(data) => data.priority,
            Notification::Push(data) => data.priority,
        }
    }

    pub fn channel(&self) -> ChannelType {
        match self {
            Notification::Email(_) => ChannelType::Email,
            Notification::Sms(_) => ChannelType::Sms,
            Notification::Push(_) => ChannelType::PushNotification,
        }
    }

    /// Checks the common fields in order (sender, recipient, body, priority),
    /// then the per-variant extras. `context` names the provider or channel
    /// the payload is headed for and ends up in the error.
    pub fn validate(&self, context: &str) -> Result<(), ValidationError> {
        require_text("from", self.sender(), context)?;
        require_text("to", self.recipient(), context)?;
        require_text("body", self.body(), context)?;
        require_priority(self.priority(), context)?;

        if let Notification::Email(data) = self {
            require_text("subject", &data.subject, context)?;
        }

        Ok(())
    }
}

impl From<EmailData> for Notification {
    fn from(data: EmailData) -> Self {
        Notification::Email(data)
    }
}

impl From<SmsData> for Notification {
    fn from(data: SmsData) -> Self {
        Notification::Sms(data)
    }
}

impl From<PushData> for Notification {
    fn from(data: PushData) -> Self {
        Notification::Push(data)
    }
}
