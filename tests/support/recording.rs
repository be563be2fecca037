//! Repository fake that records every call and the stored state, so tests
//! can assert exact service/repository interactions without a mocking
//! framework.

use std::sync::{Arc, Mutex};

use push_channel::{EventKind, RepositoryError, Subscription, SubscriptionsRepository};

/// One recorded repository call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
    Put {
        subscriber: String,
        kind: EventKind,
    },
    HasSubscription {
        subscriber: String,
        kind: EventKind,
    },
    RemoveSubscription {
        subscriber: String,
        kind: EventKind,
    },
    FindSubscriptions {
        subscriber: String,
    },
}

#[derive(Default)]
struct Inner {
    calls: Vec<Call>,
    stored: Vec<Subscription>,
    fail_next: Option<RepositoryError>,
}

/// In-memory [`SubscriptionsRepository`] recording its call log.
///
/// Cloning yields another handle to the same log and state.
#[derive(Clone, Default)]
pub struct RecordingRepository {
    inner: Arc<Mutex<Inner>>,
}

impl RecordingRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<Call> {
        self.inner.lock().unwrap().calls.clone()
    }

    pub fn stored(&self) -> Vec<Subscription> {
        self.inner.lock().unwrap().stored.clone()
    }

    /// Make the next repository call fail with `error`.
    pub fn fail_next(&self, error: RepositoryError) {
        self.inner.lock().unwrap().fail_next = Some(error);
    }

    pub fn put_count(&self) -> usize {
        self.calls()
            .iter()
            .filter(|call| matches!(call, Call::Put { .. }))
            .count()
    }

    pub fn remove_count(&self) -> usize {
        self.calls()
            .iter()
            .filter(|call| matches!(call, Call::RemoveSubscription { .. }))
            .count()
    }
}

impl SubscriptionsRepository for RecordingRepository {
    fn put(&self, subscription: Subscription) -> Result<(), RepositoryError> {
        let mut inner = self.inner.lock().unwrap();
        inner.calls.push(Call::Put {
            subscriber: subscription.subscriber().to_string(),
            kind: subscription.event_kind().clone(),
        });
        if let Some(error) = inner.fail_next.take() {
            return Err(error);
        }

        // Upsert on the (subscriber, kind) pair.
        inner.stored.retain(|stored| {
            stored.subscriber() != subscription.subscriber()
                || stored.event_kind() != subscription.event_kind()
        });
        inner.stored.push(subscription);
        Ok(())
    }

    fn has_subscription(
        &self,
        kind: &EventKind,
        subscriber: &str,
    ) -> Result<bool, RepositoryError> {
        let mut inner = self.inner.lock().unwrap();
        inner.calls.push(Call::HasSubscription {
            subscriber: subscriber.to_string(),
            kind: kind.clone(),
        });
        if let Some(error) = inner.fail_next.take() {
            return Err(error);
        }

        Ok(inner
            .stored
            .iter()
            .any(|stored| stored.subscriber() == subscriber && stored.event_kind() == kind))
    }

    fn remove_subscription(
        &self,
        kind: &EventKind,
        subscriber: &str,
    ) -> Result<(), RepositoryError> {
        let mut inner = self.inner.lock().unwrap();
        inner.calls.push(Call::RemoveSubscription {
            subscriber: subscriber.to_string(),
            kind: kind.clone(),
        });
        if let Some(error) = inner.fail_next.take() {
            return Err(error);
        }

        inner
            .stored
            .retain(|stored| stored.subscriber() != subscriber || stored.event_kind() != kind);
        Ok(())
    }

    fn find_subscriptions(&self, subscriber: &str) -> Result<Vec<Subscription>, RepositoryError> {
        let mut inner = self.inner.lock().unwrap();
        inner.calls.push(Call::FindSubscriptions {
            subscriber: subscriber.to_string(),
        });
        if let Some(error) = inner.fail_next.take() {
            return Err(error);
        }

        Ok(inner
            .stored
            .iter()
            .filter(|stored| stored.subscriber() == subscriber)
            .cloned()
            .collect())
    }
}
