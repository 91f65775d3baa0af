use std::sync::{
    Arc,
    atomic::{AtomicU32, Ordering},
};

use anyhow::{Error, Result, anyhow};
use async_trait::async_trait;
use notification_dispatch::{ChannelType, EmailData, Notification, Priority, Provider, SmsData};
use parking_lot::Mutex;
use tokio::time::Instant;

/// Provider that fails its first `failures` sends and records every call.
pub struct ScriptedProvider {
    name: String,
    channels: Vec<ChannelType>,
    failures: u32,
    calls: AtomicU32,
    call_times: Mutex<Vec<Instant>>,
}

impl ScriptedProvider {
    pub fn new(name: &str, channels: &[ChannelType], failures: u32) -> Arc<Self> {
        Arc::new(Self {
            name: name.to_string(),
            channels: channels.to_vec(),
            failures,
            calls: AtomicU32::new(0),
            call_times: Mutex::new(Vec::new()),
        })
    }

    pub fn reliable(name: &str, channels: &[ChannelType]) -> Arc<Self> {
        Self::new(name, channels, 0)
    }

    pub fn always_failing(name: &str, channels: &[ChannelType]) -> Arc<Self> {
        Self::new(name, channels, u32::MAX)
    }

    pub fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn call_times(&self) -> Vec<Instant> {
        self.call_times.lock().clone()
    }
}

#[async_trait]
impl Provider for ScriptedProvider {
    fn supports(&self, channel: ChannelType) -> bool {
        self.channels.contains(&channel)
    }

    fn name(&self) -> &str {
        &self.name
    }

    async fn send(&self, _notification: &Notification) -> Result<(), Error> {
        self.call_times.lock().push(Instant::now());
        let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;

        if call <= self.failures {
            return Err(anyhow!("{} failure on call {}", self.name, call));
        }

        Ok(())
    }
}

pub fn email() -> Notification {
    EmailData::new(
        "dev@test.com",
        "user@test.com",
        "Library check",
        "It works!",
        Priority::High,
    )
    .into()
}

pub fn sms() -> Notification {
    SmsData::new("22113", "221331", "Mundo", Priority::Medium).into()
}

/// Yields until `provider` has seen at least `calls` sends.
pub async fn wait_for_calls(provider: &ScriptedProvider, calls: u32) {
    while provider.calls() < calls {
        tokio::task::yield_now().await;
    }
}
