//! Fixed-interval polling tied to a component's lifetime.
//!
//! DESIGN
//! ======
//! A `Poller` hands out epochs. `restart` bumps the epoch, runs the tick once
//! right away and then spawns a sleep loop that keeps ticking only while its
//! epoch is still current. `stop` (registered with `on_cleanup`) bumps the
//! epoch so the outstanding loop exits at its next wake-up.
//!
//! TRADE-OFFS
//! ==========
//! A superseded loop may sleep for up to one period before noticing it is
//! stale. It never ticks again, so the only cost is a pending timer.

#[cfg(test)]
#[path = "poll_test.rs"]
mod poll_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

#[derive(Clone, Debug, Default)]
pub struct Poller {
    epoch: Arc<AtomicU64>,
}

impl Poller {
    pub fn new() -> Self {
        Self::default()
    }

    /// Invalidate any running loop and return the new epoch.
    fn advance(&self) -> u64 {
        self.epoch.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Whether a loop started at `epoch` should keep running.
    pub fn is_current(&self, epoch: u64) -> bool {
        self.epoch.load(Ordering::Relaxed) == epoch
    }

    /// Tick now, then every `period` until the next `restart` or `stop`.
    /// Returns the epoch of the new loop.
    pub fn restart<F>(&self, period: Duration, tick: F) -> u64
    where
        F: Fn() + 'static,
    {
        let epoch = self.advance();
        tick();
        #[cfg(feature = "hydrate")]
        {
            let poller = self.clone();
            leptos::task::spawn_local(async move {
                loop {
                    gloo_timers::future::sleep(period).await;
                    if !poller.is_current(epoch) {
                        break;
                    }
                    tick();
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = period;
        }
        epoch
    }

    /// End the running loop, if any.
    pub fn stop(&self) {
        self.advance();
    }
}
