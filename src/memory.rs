use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::time::SystemTime;

use crate::error::RepositoryError;
use crate::event_kind::EventKind;
use crate::repository::SubscriptionsRepository;
use crate::subscription::Subscription;

/// In-memory [`SubscriptionsRepository`] keyed by `(subscriber, event kind)`.
///
/// Cloning yields another handle to the same storage, so the registry side
/// and the delivery side can share one instance.
#[derive(Clone)]
pub struct InMemorySubscriptionsRepository {
    storage: Arc<RwLock<HashMap<(String, EventKind), Subscription>>>,
}

impl InMemorySubscriptionsRepository {
    pub fn new() -> Self {
        InMemorySubscriptionsRepository {
            storage: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Number of stored subscriptions across all subscribers.
    pub fn len(&self) -> Result<usize, RepositoryError> {
        let storage = self
            .storage
            .read()
            .map_err(|_| RepositoryError::LockPoisoned("read"))?;
        Ok(storage.len())
    }

    pub fn is_empty(&self) -> Result<bool, RepositoryError> {
        Ok(self.len()? == 0)
    }

    /// Evict every subscription whose deadline has passed at `now`,
    /// returning how many were removed.
    pub fn purge_expired(&self, now: SystemTime) -> Result<usize, RepositoryError> {
        let mut storage = self
            .storage
            .write()
            .map_err(|_| RepositoryError::LockPoisoned("purge"))?;

        let before = storage.len();
        storage.retain(|_, subscription| !subscription.is_expired_at(now));
        Ok(before - storage.len())
    }
}

impl Default for InMemorySubscriptionsRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl SubscriptionsRepository for InMemorySubscriptionsRepository {
    fn put(&self, subscription: Subscription) -> Result<(), RepositoryError> {
        let mut storage = self
            .storage
            .write()
            .map_err(|_| RepositoryError::LockPoisoned("put"))?;

        let key = (
            subscription.subscriber().to_string(),
            subscription.event_kind().clone(),
        );
        storage.insert(key, subscription);
        Ok(())
    }

    fn has_subscription(
        &self,
        kind: &EventKind,
        subscriber: &str,
    ) -> Result<bool, RepositoryError> {
        let storage = self
            .storage
            .read()
            .map_err(|_| RepositoryError::LockPoisoned("read"))?;

        Ok(storage.contains_key(&(subscriber.to_string(), kind.clone())))
    }

    fn remove_subscription(
        &self,
        kind: &EventKind,
        subscriber: &str,
    ) -> Result<(), RepositoryError> {
        let mut storage = self
            .storage
            .write()
            .map_err(|_| RepositoryError::LockPoisoned("remove"))?;

        storage.remove(&(subscriber.to_string(), kind.clone()));
        Ok(())
    }

    fn find_subscriptions(&self, subscriber: &str) -> Result<Vec<Subscription>, RepositoryError> {
        let storage = self
            .storage
            .read()
            .map_err(|_| RepositoryError::LockPoisoned("read"))?;

        Ok(storage
            .values()
            .filter(|subscription| subscription.subscriber() == subscriber)
            .cloned()
            .collect())
    }
}
