use thiserror::Error;

use crate::models::priority::Priority;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} is required ({context})")]
    MissingField {
        field: &'static str,
        context: String,
    },
}

impl ValidationError {
    pub fn missing(field: &'static str, context: &str) -> Self {
        ValidationError::MissingField {
            field,
            context: context.to_string(),
        }
    }

    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::MissingField { field, .. } => field,
        }
    }

    pub fn context(&self) -> &str {
        match self {
            ValidationError::MissingField { context, .. } => context,
        }
    }
}

pub fn require_text(field: &'static str, value: &str, context: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::missing(field, context));
    }

    Ok(())
}

pub fn require_priority(priority: Option<Priority>, context: &str) -> Result<Priority, ValidationError> {
    priority.ok_or_else(|| ValidationError::missing("priority", context))
}
