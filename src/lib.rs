//! Server-side subscription registry for a typed publish/subscribe push
//! channel: subscribers register for named, typed event kinds; the delivery
//! transport reads subscriptions back and routes events to every subscriber
//! whose deadline has not passed.

mod error;
mod event_kind;
mod expiration;
mod memory;
mod repository;
mod service;
mod subscription;

pub use error::{PushChannelError, RepositoryError, ValidationError};
pub use event_kind::{CapabilityTag, EventKind};
pub use expiration::{ExpirationSource, FixedTtl};
pub use memory::InMemorySubscriptionsRepository;
pub use repository::SubscriptionsRepository;
pub use service::PushChannelService;
pub use subscription::{Subscription, SubscriptionBuilder};
