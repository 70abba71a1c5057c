//! Timer capability for the conversation session.
//!
//! The session never calls `tokio::time` directly. It asks a [`Scheduler`]
//! to sleep (simulated typing), to fire once later (end of an idle shake)
//! or to fire periodically (idle attention cue). Tests drive the real
//! [`TokioScheduler`] under a paused clock.

use std::time::Duration;

use async_trait::async_trait;
use tokio::runtime::Handle;
use tokio::time::{Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

use crate::ChatError;

pub type OnceCallback = Box<dyn FnOnce() + Send>;
pub type RepeatingCallback = Box<dyn FnMut() + Send>;

#[async_trait]
pub trait Scheduler: Send + Sync {
    /// Suspend the caller for `duration` without blocking the surface.
    async fn sleep(&self, duration: Duration);

    /// Run `callback` once after `delay`.
    fn after(&self, delay: Duration, callback: OnceCallback) -> TimerHandle;

    /// Run `callback` every `period`, first firing one period from now.
    fn every(&self, period: Duration, callback: RepeatingCallback) -> TimerHandle;
}

/// Cancels its timer when dropped or when [`TimerHandle::cancel`] is called.
#[derive(Debug)]
pub struct TimerHandle {
    token: CancellationToken,
}

impl TimerHandle {
    pub fn new(token: CancellationToken) -> Self {
        Self { token }
    }

    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

/// Scheduler backed by tokio timers on a captured runtime handle.
#[derive(Debug, Clone)]
pub struct TokioScheduler {
    handle: Handle,
}

impl TokioScheduler {
    pub fn new(handle: Handle) -> Self {
        Self { handle }
    }

    /// Capture the runtime the caller is running on.
    pub fn from_current() -> Result<Self, ChatError> {
        Handle::try_current()
            .map(Self::new)
            .map_err(|e| ChatError::Runtime(e.to_string()))
    }
}

#[async_trait]
impl Scheduler for TokioScheduler {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }

    fn after(&self, delay: Duration, callback: OnceCallback) -> TimerHandle {
        let token = CancellationToken::new();
        let cancelled = token.clone();
        self.handle.spawn(async move {
            tokio::select! {
                _ = cancelled.cancelled() => {}
                _ = tokio::time::sleep(delay) => callback(),
            }
        });
        TimerHandle::new(token)
    }

    fn every(&self, period: Duration, mut callback: RepeatingCallback) -> TimerHandle {
        let token = CancellationToken::new();
        let cancelled = token.clone();
        self.handle.spawn(async move {
            let mut interval = tokio::time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                tokio::select! {
                    _ = cancelled.cancelled() => break,
                    _ = interval.tick() => callback(),
                }
            }
        });
        TimerHandle::new(token)
    }
}
