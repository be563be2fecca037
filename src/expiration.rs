use std::time::{Duration, SystemTime};

/// Source of the renewal deadline to apply "now" (typically now plus a
/// fixed TTL).
///
/// Polled once per subscribe call and once per keep-alive batch, never per
/// subscription, so every subscription renewed together lands on the same
/// instant.
pub trait ExpirationSource {
    fn next_expiration(&self) -> SystemTime;
}

impl<F> ExpirationSource for F
where
    F: Fn() -> SystemTime,
{
    fn next_expiration(&self) -> SystemTime {
        self()
    }
}

/// Now-plus-TTL policy over the system clock.
#[derive(Clone, Copy, Debug)]
pub struct FixedTtl(pub Duration);

impl ExpirationSource for FixedTtl {
    fn next_expiration(&self) -> SystemTime {
        SystemTime::now() + self.0
    }
}
