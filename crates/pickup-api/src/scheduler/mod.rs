//! In-process sweep scheduler
//!
//! Runs the sweep on a fixed period for deployments without an external
//! cron. The first sweep runs immediately. Failures are logged and the loop
//! keeps going; the next tick is the retry.

use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{error, info};

use crate::state::AppState;

/// Periodic sweep driver
#[derive(Debug)]
pub struct SweepScheduler {
    state: AppState,
    period: Duration,
}

impl SweepScheduler {
    /// A zero period is bumped to one second; `tokio::time::interval`
    /// rejects zero.
    pub fn new(state: AppState, period: Duration) -> Self {
        Self {
            state,
            period: period.max(Duration::from_secs(1)),
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Run on the current runtime until the handle is aborted
    pub fn spawn(self) -> JoinHandle<()> {
        tokio::spawn(self.run())
    }

    async fn run(self) {
        let mut ticker = interval(self.period);
        // A sweep that overruns its period should not trigger a burst
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        info!(period_secs = self.period.as_secs(), "Sweep scheduler started");

        loop {
            ticker.tick().await;
            self.run_once().await;
        }
    }

    /// Run a single scheduled sweep, returning whether it succeeded
    pub async fn run_once(&self) -> bool {
        match self.state.run_sweep().await {
            Ok(outcome) => {
                info!(
                    archived = outcome.archived,
                    message = %outcome.message(),
                    "Scheduled sweep finished"
                );
                true
            }
            Err(e) => {
                error!(error = %e, code = e.error_code(), "Scheduled sweep failed");
                false
            }
        }
    }
}
