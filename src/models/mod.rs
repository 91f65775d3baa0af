pub mod channel;
pub mod notification;
pub mod outcome;
pub mod priority;
pub mod retry;
pub mod validation;
