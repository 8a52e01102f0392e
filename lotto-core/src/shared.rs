use crate::draw::{RandomSource, RngSource};
use crate::{
    DepositOutcome, Result, RoundEngine, SessionSummary, Snapshot, StartOutcome, SubmitOutcome,
    ToggleOutcome,
};
use parking_lot::Mutex;
use std::sync::Arc;

/// Engine handle that can be cloned across threads.
///
/// Each command holds the lock for its whole duration, so readers never see
/// a half-applied round.
pub struct SharedEngine<S = RngSource> {
    inner: Arc<Mutex<RoundEngine<S>>>,
}

impl<S> Clone for SharedEngine<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: RandomSource> SharedEngine<S> {
    pub fn new(engine: RoundEngine<S>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(engine)),
        }
    }

    /// Run `f` with exclusive access to the engine.
    pub fn with<T>(&self, f: impl FnOnce(&mut RoundEngine<S>) -> T) -> T {
        let mut engine = self.inner.lock();
        f(&mut *engine)
    }

    pub fn snapshot(&self) -> Snapshot {
        self.inner.lock().snapshot()
    }

    pub fn start_round(&self) -> Result<StartOutcome> {
        self.inner.lock().start_round()
    }

    pub fn toggle_strong(&self, value: u32) -> Result<ToggleOutcome> {
        self.inner.lock().toggle_strong(value)
    }

    pub fn toggle_number(&self, value: u32) -> Result<ToggleOutcome> {
        self.inner.lock().toggle_number(value)
    }

    pub fn submit_ticket(&self) -> Result<SubmitOutcome> {
        self.inner.lock().submit_ticket()
    }

    pub fn finish(&self) -> Option<SessionSummary> {
        self.inner.lock().finish()
    }

    pub fn deposit(&self, amount: i64) -> Result<DepositOutcome> {
        self.inner.lock().deposit(amount)
    }
}
