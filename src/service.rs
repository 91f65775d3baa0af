use std::sync::Arc;

use tokio::{runtime::Handle, sync::oneshot};
use tokio_util::{sync::CancellationToken, task::TaskTracker};
use tracing::{Instrument, debug, error, info, info_span};
use uuid::Uuid;

use crate::{
    models::{
        channel::ChannelType, notification::Notification, outcome::DeliveryOutcome,
        retry::RetryConfig, validation::ValidationError,
    },
    providers::{Provider, ProviderRegistry},
    retry::execute_with_retry,
};

/// Fire-and-forget dispatcher: one tokio task per dispatch, provider resolved
/// inside the task.
pub struct NotificationService {
    registry: Arc<ProviderRegistry>,
    retry_config: RetryConfig,
    tracker: TaskTracker,
    shutdown: CancellationToken,
}

impl NotificationService {
    pub fn new(retry_config: RetryConfig) -> Self {
        info!(
            max_attempts = retry_config.max_attempts(),
            base_delay_ms = retry_config.base_delay().as_millis() as u64,
            "Notification service initialized"
        );

        Self {
            registry: Arc::new(ProviderRegistry::new()),
            retry_config,
            tracker: TaskTracker::new(),
            shutdown: CancellationToken::new(),
        }
    }

    pub fn register_provider<P>(&self, provider: P)
    where
        P: Provider + 'static,
    {
        self.register_shared(Arc::new(provider));
    }

    pub fn register_shared(&self, provider: Arc<dyn Provider>) {
        info!(provider = %provider.name(), "Registering provider");
        self.registry.register(provider);
    }

    pub fn registry(&self) -> &ProviderRegistry {
        &self.registry
    }

    pub fn dispatch(&self, channel: ChannelType, notification: Notification) {
        self.spawn_dispatch(channel, notification, None);
    }

    /// Validates synchronously, then behaves like [`Self::dispatch`].
    pub fn try_dispatch(
        &self,
        channel: ChannelType,
        notification: Notification,
    ) -> Result<(), ValidationError> {
        notification.validate(channel.as_str())?;
        self.dispatch(channel, notification);
        Ok(())
    }

    /// Like [`Self::dispatch`], but hands back a receiver for the terminal
    /// outcome. The receiver errors if the dispatch was refused.
    pub fn dispatch_with_outcome(
        &self,
        channel: ChannelType,
        notification: Notification,
    ) -> oneshot::Receiver<DeliveryOutcome> {
        let (tx, rx) = oneshot::channel();
        self.spawn_dispatch(channel, notification, Some(tx));
        rx
    }

    pub fn in_flight(&self) -> usize {
        self.tracker.len()
    }

    pub fn is_shut_down(&self) -> bool {
        self.shutdown.is_cancelled()
    }

    /// Waits for in-flight dispatches without cancelling them.
    pub async fn drain(&self) {
        self.tracker.close();
        self.tracker.wait().await;

        if !self.is_shut_down() {
            self.tracker.reopen();
        }
    }

    /// Refuses new dispatches, aborts pending backoffs and waits for all
    /// tasks to finish.
    pub async fn shutdown(&self) {
        info!(in_flight = self.tracker.len(), "Shutting down notification service");

        self.shutdown.cancel();
        self.tracker.close();
        self.tracker.wait().await;

        info!("Notification service stopped");
    }

    fn spawn_dispatch(
        &self,
        channel: ChannelType,
        notification: Notification,
        reply: Option<oneshot::Sender<DeliveryOutcome>>,
    ) {
        if self.shutdown.is_cancelled() {
            error!(%channel, "CRITICAL: notification service is shut down, dispatch dropped");
            return;
        }

        let handle = match Handle::try_current() {
            Ok(handle) => handle,
            Err(e) => {
                error!(%channel, error = %e, "CRITICAL: no async runtime available, dispatch dropped");
                return;
            }
        };

        let dispatch_id = Uuid::new_v4();
        let span = info_span!("dispatch", %dispatch_id, %channel);

        let registry = Arc::clone(&self.registry);
        let retry_config = self.retry_config;
        let cancel = self.shutdown.child_token();

        self.tracker.spawn_on(
            async move {
                let outcome = match registry.resolve(channel) {
                    Some(provider) => {
                        debug!(provider = %provider.name(), "Provider resolved");
                        execute_with_retry(provider.as_ref(), &notification, &retry_config, &cancel)
                            .await
                    }
                    None => {
                        error!("No provider registered for channel");
                        DeliveryOutcome::NoProvider { channel }
                    }
                };

                if let Some(reply) = reply {
                    // Receiver may have been dropped; nobody is listening then.
                    let _ = reply.send(outcome);
                }
            }
            .instrument(span),
            &handle,
        );
    }
}

impl Default for NotificationService {
    fn default() -> Self {
        Self::new(RetryConfig::default())
    }
}
