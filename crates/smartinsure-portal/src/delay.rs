//! Simulated processing delay
//!
//! The "AI" views pretend to think for a couple of seconds. The wait is an
//! explicit, cancellable value: [`simulated_delay`] returns a [`DelayHandle`]
//! the session keeps and a [`SimulatedDelay`] the caller awaits. The clock is
//! behind the [`Sleeper`] trait so tests can run without real time passing.

use async_trait::async_trait;
use std::time::Duration;
use tokio::sync::oneshot;

/// Clock used by simulated delays
#[async_trait]
pub trait Sleeper: Send + Sync {
    async fn sleep(&self, duration: Duration);
}

/// Sleeps on the tokio timer
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSleeper;

#[async_trait]
impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Returns immediately
#[derive(Debug, Clone, Copy, Default)]
pub struct InstantSleeper;

#[async_trait]
impl Sleeper for InstantSleeper {
    async fn sleep(&self, _duration: Duration) {}
}

/// How a simulated delay ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DelayOutcome {
    Elapsed,
    Cancelled,
}

/// Cancels the paired [`SimulatedDelay`]
#[derive(Debug)]
pub struct DelayHandle {
    cancel_tx: Option<oneshot::Sender<()>>,
}

impl DelayHandle {
    /// Cancel the delay. Returns false if it already finished or was
    /// cancelled before.
    pub fn cancel(&mut self) -> bool {
        match self.cancel_tx.take() {
            Some(tx) => tx.send(()).is_ok(),
            None => false,
        }
    }
}

/// A pending delay
#[derive(Debug)]
pub struct SimulatedDelay {
    duration: Duration,
    cancel_rx: oneshot::Receiver<()>,
}

impl SimulatedDelay {
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Wait out the delay unless it is cancelled first.
    ///
    /// Dropping the handle without cancelling does not cut the delay short.
    pub async fn wait(self, sleeper: &dyn Sleeper) -> DelayOutcome {
        let mut sleep = sleeper.sleep(self.duration);

        let cancelled = tokio::select! {
            _ = &mut sleep => return DelayOutcome::Elapsed,
            res = self.cancel_rx => res.is_ok(),
        };

        if cancelled {
            return DelayOutcome::Cancelled;
        }
        sleep.await;
        DelayOutcome::Elapsed
    }
}

/// Create a cancellable delay of `duration`
pub fn simulated_delay(duration: Duration) -> (DelayHandle, SimulatedDelay) {
    let (cancel_tx, cancel_rx) = oneshot::channel();
    (
        DelayHandle {
            cancel_tx: Some(cancel_tx),
        },
        SimulatedDelay {
            duration,
            cancel_rx,
        },
    )
}
