use std::time::SystemTime;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::event_kind::EventKind;

/// Record binding a subscriber address to one event kind with an expiration
/// deadline.
///
/// `(subscriber, event_kind)` is the logical uniqueness key; repositories
/// upsert on it. Only the deadline ever changes after construction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscription {
    subscriber: String,
    event_name: String,
    event_kind: EventKind,
    expires_at: SystemTime,
}

impl Subscription {
    pub fn builder() -> SubscriptionBuilder {
        SubscriptionBuilder::default()
    }

    pub fn subscriber(&self) -> &str {
        &self.subscriber
    }

    pub fn event_name(&self) -> &str {
        &self.event_name
    }

    pub fn event_kind(&self) -> &EventKind {
        &self.event_kind
    }

    pub fn expires_at(&self) -> SystemTime {
        self.expires_at
    }

    /// Renew the deadline. A deadline never moves backwards; a stale value
    /// is ignored in favor of the current one.
    pub fn renew(&mut self, expires_at: SystemTime) {
        self.expires_at = self.expires_at.max(expires_at);
    }

    /// Whether the subscription is stale at `now`. Delivery-side readers
    /// check this before routing an event.
    pub fn is_expired_at(&self, now: SystemTime) -> bool {
        self.expires_at < now
    }
}

/// Incremental builder for [`Subscription`].
///
/// Subscriber, event name, and event kind are required; `build` rejects an
/// incomplete record before it is ever observable. The deadline defaults to
/// the epoch (already expired) until set or renewed.
#[derive(Debug, Default)]
pub struct SubscriptionBuilder {
    subscriber: Option<String>,
    event_name: Option<String>,
    event_kind: Option<EventKind>,
    expires_at: Option<SystemTime>,
}

impl SubscriptionBuilder {
    pub fn subscriber(mut self, subscriber: impl Into<String>) -> Self {
        self.subscriber = Some(subscriber.into());
        self
    }

    pub fn event_name(mut self, event_name: impl Into<String>) -> Self {
        self.event_name = Some(event_name.into());
        self
    }

    pub fn event_kind(mut self, event_kind: EventKind) -> Self {
        self.event_kind = Some(event_kind);
        self
    }

    pub fn expires_at(mut self, expires_at: SystemTime) -> Self {
        self.expires_at = Some(expires_at);
        self
    }

    pub fn build(self) -> Result<Subscription, ValidationError> {
        let subscriber = self.subscriber.ok_or(ValidationError::MissingSubscriber)?;
        if subscriber.is_empty() {
            return Err(ValidationError::EmptySubscriber);
        }
        let event_name = self.event_name.ok_or(ValidationError::MissingEventName)?;
        let event_kind = self.event_kind.ok_or(ValidationError::MissingEventKind)?;

        Ok(Subscription {
            subscriber,
            event_name,
            event_kind,
            expires_at: self.expires_at.unwrap_or(SystemTime::UNIX_EPOCH),
        })
    }
}
