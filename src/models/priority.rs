use std::fmt::{Display, Formatter, Result};

use serde::{Deserialize, Serialize};

/// Urgency of a notification.
///
/// Carried with every payload but not consumed by dispatch yet; the weight and
/// throttling flag are reserved for a priority-aware throttle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Priority {
    Urgent,
    High,
    Medium,
    Low,
}

impl Priority {
    /// Lower weight sorts first.
    pub fn weight(&self) -> u8 {
        match self {
            Priority::Urgent => 0,
            Priority::High => 1,
            Priority::Medium => 2,
            Priority::Low => 3,
        }
    }

    pub fn bypasses_throttling(&self) -> bool {
        matches!(self, Priority::Urgent | Priority::High)
    }
}

impl Display for Priority {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Priority::Urgent => write!(f, "URGENT"),
            Priority::High => write!(f, "HIGH"),
            Priority::Medium => write!(f, "MEDIUM"),
            Priority::Low => write!(f, "LOW"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_follow_urgency() {
        let ordered = [Priority::Urgent, Priority::High, Priority::Medium, Priority::Low];
        let weights: Vec<u8> = ordered.iter().map(Priority::weight).collect();

        assert_eq!(weights, vec![0, 1, 2, 3]);
    }

    #[test]
    fn only_urgent_and_high_bypass_throttling() {
        assert!(Priority::Urgent.bypasses_throttling());
        assert!(Priority::High.bypasses_throttling());
        assert!(!Priority::Medium.bypasses_throttling());
        assert!(!Priority::Low.bypasses_throttling());
    }

    #[test]
    fn deserializes_from_uppercase() {
        let priority: Priority = serde_json::from_str("\"URGENT\"").unwrap();
        assert_eq!(priority, Priority::Urgent);
    }
}
