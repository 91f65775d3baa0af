use std::sync::Arc;

use parking_lot::RwLock;
use tracing::debug;

use crate::{models::channel::ChannelType, providers::Provider};

/// Append-only, ordered list of providers.
///
/// Copy-on-write: a write swaps in a new list, readers keep whatever snapshot
/// they cloned, so a resolve never observes a half-updated list.
#[derive(Default)]
pub struct ProviderRegistry {
    providers: RwLock<Arc<Vec<Arc<dyn Provider>>>>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    // Duplicates are kept.
    pub fn register(&self, provider: Arc<dyn Provider>) {
        let mut guard = self.providers.write();
        let mut next = Vec::with_capacity(guard.len() + 1);
        next.extend(guard.iter().cloned());
        next.push(provider);
        *guard = Arc::new(next);

        debug!(registered = guard.len(), "Provider registered");
    }

    pub fn resolve(&self, channel: ChannelType) -> Option<Arc<dyn Provider>> {
        self.snapshot()
            .iter()
            .find(|provider| provider.supports(channel))
            .cloned()
    }

    pub fn snapshot(&self) -> Arc<Vec<Arc<dyn Provider>>> {
        Arc::clone(&self.providers.read())
    }

    pub fn len(&self) -> usize {
        self.providers.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.read().is_empty()
    }

    pub fn provider_names(&self) -> Vec<String> {
        self.snapshot()
            .iter()
            .map(|provider| provider.name().to_string())
            .collect()
    }
}
