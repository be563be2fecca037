use crate::error::RepositoryError;
use crate::event_kind::EventKind;
use crate::subscription::Subscription;

/// Persistence contract consumed by [`PushChannelService`](crate::PushChannelService).
///
/// Implementations own durability and indexing; the service only requires
/// upsert semantics on the `(subscriber, event kind)` pair and that
/// operations racing on the same pair resolve last-writer-wins. Operations
/// on different subscribers need no coordination.
pub trait SubscriptionsRepository: Send + Sync {
    /// Upsert keyed by `(subscriber, event kind)`; an existing entry for
    /// the pair is replaced in place.
    fn put(&self, subscription: Subscription) -> Result<(), RepositoryError>;

    /// Existence check; no side effects.
    fn has_subscription(
        &self,
        kind: &EventKind,
        subscriber: &str,
    ) -> Result<bool, RepositoryError>;

    /// Delete the matching entry. An absent entry is a successful no-op.
    fn remove_subscription(
        &self,
        kind: &EventKind,
        subscriber: &str,
    ) -> Result<(), RepositoryError>;

    /// All live entries for `subscriber`; finite, order not significant.
    fn find_subscriptions(&self, subscriber: &str) -> Result<Vec<Subscription>, RepositoryError>;
}
