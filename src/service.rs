use tracing::debug;

use crate::error::PushChannelError;
use crate::event_kind::EventKind;
use crate::expiration::ExpirationSource;
use crate::repository::SubscriptionsRepository;
use crate::subscription::Subscription;

/// Orchestrates the subscription lifecycle: subscribe, unsubscribe, and
/// keep-alive renewal.
///
/// Holds no state of its own; all mutable state lives in the injected
/// repository, and the expiration policy comes from the injected source.
/// Operations on different subscribers are fully independent.
pub struct PushChannelService<R, S> {
    repository: R,
    expiration: S,
}

impl<R, S> PushChannelService<R, S>
where
    R: SubscriptionsRepository,
    S: ExpirationSource,
{
    pub fn new(repository: R, expiration: S) -> Self {
        PushChannelService {
            repository,
            expiration,
        }
    }

    /// Register `subscriber` for events of `kind`.
    ///
    /// Re-subscribing an already subscribed pair overwrites the stored
    /// entry and extends its deadline; it is never an error.
    pub fn subscribe(&self, subscriber: &str, kind: &EventKind) -> Result<(), PushChannelError> {
        let subscription = Subscription::builder()
            .subscriber(subscriber)
            .event_name(kind.name())
            .event_kind(kind.clone())
            .expires_at(self.expiration.next_expiration())
            .build()?;

        debug!(subscriber, event = kind.name(), "subscribe");
        self.repository.put(subscription)?;
        Ok(())
    }

    /// Drop the subscription for `(subscriber, kind)` if one exists.
    ///
    /// Nothing to unsubscribe completes successfully with no repository
    /// mutation.
    pub fn unsubscribe(&self, subscriber: &str, kind: &EventKind) -> Result<(), PushChannelError> {
        if self.repository.has_subscription(kind, subscriber)? {
            debug!(subscriber, event = kind.name(), "unsubscribe");
            self.repository.remove_subscription(kind, subscriber)?;
        }
        Ok(())
    }

    /// Renew every subscription of `subscriber` to one fresh deadline.
    ///
    /// The deadline is fetched once for the whole batch so a keep-alive
    /// never skews expirations across a subscriber's subscriptions. A
    /// subscriber with no subscriptions is a no-op.
    pub fn keep_alive(&self, subscriber: &str) -> Result<(), PushChannelError> {
        let subscriptions = self.repository.find_subscriptions(subscriber)?;
        if subscriptions.is_empty() {
            return Ok(());
        }

        let expires_at = self.expiration.next_expiration();
        debug!(subscriber, count = subscriptions.len(), "keep alive");

        for mut subscription in subscriptions {
            subscription.renew(expires_at);
            self.repository.put(subscription)?;
        }
        Ok(())
    }
}
