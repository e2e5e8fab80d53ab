//! Restartable periodic tick source
//!
//! Arming spawns a task that ticks immediately and then once per interval,
//! forwarding each tick into the event loop's channel. Every arm starts a new
//! run with its own id; a tick is accepted only while its run is the active
//! one, so ticks already in flight when the engine is disarmed are dropped.

use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::{AbortHandle, JoinHandle};
use tokio::time::MissedTickBehavior;

/// Shortest period `tokio::time::interval` accepts
const MIN_INTERVAL: Duration = Duration::from_millis(1);

#[derive(Debug)]
pub struct TickEngine {
    interval: Duration,
    task: Option<JoinHandle<()>>,
    active_run: Option<u64>,
    next_run: u64,
}

impl TickEngine {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval: interval.max(MIN_INTERVAL),
            task: None,
            active_run: None,
            next_run: 0,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Start a fresh tick sequence, cancelling any previous one.
    ///
    /// `make_tick` wraps the run id into whatever message the receiving loop
    /// expects. Returns an abort handle for the caller's subscription list.
    pub fn arm<T, F>(&mut self, tx: UnboundedSender<T>, make_tick: F) -> AbortHandle
    where
        T: Send + 'static,
        F: Fn(u64) -> T + Send + 'static,
    {
        self.disarm();

        let run = self.next_run;
        self.next_run = self.next_run.wrapping_add(1);
        self.active_run = Some(run);

        let period = self.interval;
        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                if tx.send(make_tick(run)).is_err() {
                    // Event loop is gone
                    break;
                }
            }
        });

        tracing::debug!(run, interval_ms = period.as_millis() as u64, "Tick engine armed");
        let handle = task.abort_handle();
        self.task = Some(task);
        handle
    }

    /// Stop ticking. No tick of the current run is accepted afterwards.
    pub fn disarm(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
        if let Some(run) = self.active_run.take() {
            tracing::debug!(run, "Tick engine disarmed");
        }
    }

    pub fn is_armed(&self) -> bool {
        self.active_run.is_some()
    }

    pub fn active_run(&self) -> Option<u64> {
        self.active_run
    }

    /// Whether a tick from `run` should still be applied
    pub fn accepts(&self, run: u64) -> bool {
        self.active_run == Some(run)
    }
}

impl Drop for TickEngine {
    fn drop(&mut self) {
        self.disarm();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;
    use tokio::time::{Instant, sleep};

    #[tokio::test(start_paused = true)]
    async fn test_ticks_immediately_then_every_interval() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut engine = TickEngine::new(Duration::from_millis(1000));
        let start = Instant::now();
        engine.arm(tx, |run| (run, Instant::now()));

        let mut offsets = Vec::new();
        for _ in 0..3 {
            let (run, at) = rx.recv().await.unwrap();
            assert!(engine.accepts(run));
            offsets.push((at - start).as_millis());
        }
        assert_eq!(offsets, vec![0, 1000, 2000]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_disarm_stops_ticks() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut engine = TickEngine::new(Duration::from_millis(1000));
        engine.arm(tx, |run| run);

        let run = rx.recv().await.unwrap();
        engine.disarm();
        assert!(!engine.is_armed());
        assert!(!engine.accepts(run));

        sleep(Duration::from_millis(5000)).await;
        // Aborted task drops its sender, nothing else arrives
        assert_eq!(rx.recv().await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_rearm_starts_new_run() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut engine = TickEngine::new(Duration::from_millis(1000));

        engine.arm(tx.clone(), |run| run);
        let first = rx.recv().await.unwrap();

        engine.arm(tx, |run| run);
        let second = rx.recv().await.unwrap();

        assert_ne!(first, second);
        assert!(!engine.accepts(first));
        assert!(engine.accepts(second));
    }

    #[test]
    fn test_zero_interval_is_clamped() {
        let engine = TickEngine::new(Duration::ZERO);
        assert_eq!(engine.interval(), MIN_INTERVAL);
    }
}
