//! Idle attention cue: a short "shake" of the launcher, repeated while the
//! widget is closed.
//!
//! The cue is the only session state touched from timer callbacks. Arming,
//! disarming and every flag change happen under one lock, so a shake can
//! never start after the widget has opened.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tracing::trace;

use crate::scheduler::{Scheduler, TimerHandle};

use super::types::SessionEvent;

#[derive(Default)]
struct IdleState {
    armed: bool,
    shaking: bool,
    /// Bumped on every shake so a stale clear timer cannot end a newer shake.
    generation: u64,
    interval_timer: Option<TimerHandle>,
    clear_timer: Option<TimerHandle>,
    events: Option<UnboundedSender<SessionEvent>>,
}

impl IdleState {
    fn set_shaking(&mut self, shaking: bool) {
        if self.shaking == shaking {
            return;
        }
        self.shaking = shaking;
        if let Some(ref tx) = self.events {
            let _ = tx.send(SessionEvent::IdleShake(shaking));
        }
    }
}

#[derive(Clone)]
pub(crate) struct IdleCue {
    state: Arc<Mutex<IdleState>>,
    scheduler: Arc<dyn Scheduler>,
    interval: Duration,
    shake: Duration,
}

impl IdleCue {
    pub(crate) fn new(scheduler: Arc<dyn Scheduler>, interval: Duration, shake: Duration) -> Self {
        Self {
            state: Arc::new(Mutex::new(IdleState::default())),
            scheduler,
            interval,
            shake,
        }
    }

    fn lock(&self) -> MutexGuard<'_, IdleState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn set_events(&self, events: Option<UnboundedSender<SessionEvent>>) {
        self.lock().events = events;
    }

    pub(crate) fn is_shaking(&self) -> bool {
        self.lock().shaking
    }

    /// Start the periodic cue. No-op when already armed.
    pub(crate) fn arm(&self) {
        {
            let mut state = self.lock();
            if state.armed {
                return;
            }
            state.armed = true;
        }

        let cue = self.clone();
        let timer = self.scheduler.every(
            self.interval,
            Box::new(move || {
                cue.tick();
            }),
        );

        let mut state = self.lock();
        if state.armed {
            state.interval_timer = Some(timer);
        }
        // else: disarmed meanwhile, dropping `timer` cancels it.
    }

    /// Stop the cue and clear any shake in progress.
    pub(crate) fn disarm(&self) {
        let (interval_timer, clear_timer) = {
            let mut state = self.lock();
            state.armed = false;
            state.set_shaking(false);
            (state.interval_timer.take(), state.clear_timer.take())
        };
        drop(interval_timer);
        drop(clear_timer);
    }

    /// Start one shake if the cue is armed. Returns whether it started.
    pub(crate) fn tick(&self) -> bool {
        let generation = {
            let mut state = self.lock();
            if !state.armed {
                return false;
            }
            state.generation += 1;
            state.set_shaking(true);
            state.generation
        };
        trace!(generation, "idle shake");

        let cue = self.clone();
        let clear = self.scheduler.after(
            self.shake,
            Box::new(move || {
                let mut state = cue.lock();
                if state.generation == generation {
                    state.set_shaking(false);
                    state.clear_timer = None;
                }
            }),
        );

        let mut state = self.lock();
        if state.armed && state.generation == generation {
            state.clear_timer = Some(clear);
        }
        true
    }
}
