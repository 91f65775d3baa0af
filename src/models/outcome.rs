use std::fmt::{Display, Formatter, Result};

use crate::models::channel::ChannelType;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryOutcome {
    Succeeded {
        provider: String,
        attempts: u32,
    },
    Exhausted {
        provider: String,
        recipient: String,
        attempts: u32,
        last_error: String,
    },
    Aborted {
        provider: String,
        attempts: u32,
    },
    NoProvider {
        channel: ChannelType,
    },
}

impl DeliveryOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, DeliveryOutcome::Succeeded { .. })
    }

    /// Number of `send` calls made, zero when no provider was found.
    pub fn attempts(&self) -> u32 {
        match self {
            DeliveryOutcome::Succeeded { attempts, .. }
            | DeliveryOutcome::Exhausted { attempts, .. }
            | DeliveryOutcome::Aborted { attempts, .. } => *attempts,
            DeliveryOutcome::NoProvider { .. } => 0,
        }
    }
}

impl Display for DeliveryOutcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            DeliveryOutcome::Succeeded { .. } => write!(f, "succeeded"),
            DeliveryOutcome::Exhausted { .. } => write!(f, "exhausted"),
            DeliveryOutcome::Aborted { .. } => write!(f, "aborted"),
            DeliveryOutcome::NoProvider { .. } => write!(f, "no_provider"),
        }
    }
}
