//! Native event loop for one widget instance
//!
//! A single task owns the state machine and consumes every input in order:
//! control clicks, engine ticks and quiet-period timeouts. Each resulting
//! state is published on a `watch` channel for whatever renders it.
//!
//! # Lifecycle
//!
//! 1. `spawn` starts the event loop and registers it in the subscription list
//! 2. Tick runs and quiet timers register themselves as they are spawned
//! 3. `teardown` (or dropping the handle) aborts everything in the list

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::sync::watch;

use crate::context::{ClockFormat, StopwatchConfig, Subscriptions};
use crate::error::StopwatchError;
use crate::state::{
    EngineCommand, StopwatchSignal, StopwatchState, engine_command, signal_for_click, transition,
};
use crate::timers::{ClickBatcher, QuietToken, TickEngine};
use stopwatch_types::{Control, StopwatchView};


/// Everything the event loop reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Click(Control),
    Tick { run: u64 },
    QuietPeriodElapsed { token: QuietToken },
}

type SharedSubscriptions = Arc<Mutex<Subscriptions>>;

fn lock(subscriptions: &SharedSubscriptions) -> MutexGuard<'_, Subscriptions> {
    subscriptions
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
}

/// Start a widget instance on the current tokio runtime.
pub fn spawn(config: &StopwatchConfig) -> StopwatchHandle {
    let (tx, rx) = mpsc::unbounded_channel();
    let state = StopwatchState::new();
    let (view_tx, view_rx) = watch::channel(state.view(config.clock_format));
    let subscriptions = SharedSubscriptions::default();

    let event_loop = EventLoop {
        state,
        format: config.clock_format,
        quiet_period: config.double_click_window(),
        engine: TickEngine::new(config.tick_interval()),
        batcher: ClickBatcher::new(),
        tx: tx.clone(),
        view_tx,
        subscriptions: Arc::clone(&subscriptions),
    };

    let task = tokio::spawn(event_loop.run(rx));
    lock(&subscriptions).register("event-loop", task.abort_handle());

    tracing::debug!(
        tick_ms = config.tick_interval_ms,
        window_ms = config.double_click_window_ms,
        "Stopwatch spawned"
    );

    StopwatchHandle {
        tx,
        view: view_rx,
        subscriptions,
        torn_down: false,
    }
}

/// Owner-side handle: feeds input in, reads views out, tears down.
#[derive(Debug)]
pub struct StopwatchHandle {
    tx: UnboundedSender<Input>,
    view: watch::Receiver<StopwatchView>,
    subscriptions: SharedSubscriptions,
    torn_down: bool,
}

impl StopwatchHandle {
    pub fn click(&self, control: Control) -> Result<(), StopwatchError> {
        self.inject(Input::Click(control))
    }

    /// Click the control carrying the given `data-role` attribute
    pub fn click_role(&self, role: &str) -> Result<(), StopwatchError> {
        let control = Control::from_role(role).ok_or_else(|| StopwatchError::UnknownControl {
            role: role.to_string(),
        })?;
        self.click(control)
    }

    /// Push any input into the loop, including synthetic ticks and timeouts.
    pub fn inject(&self, input: Input) -> Result<(), StopwatchError> {
        if self.torn_down {
            return Err(StopwatchError::TornDown);
        }
        self.tx.send(input).map_err(|_| StopwatchError::TornDown)
    }

    /// Latest published view
    pub fn view(&self) -> StopwatchView {
        self.view.borrow().clone()
    }

    /// Receiver notified on every view change
    pub fn subscribe(&self) -> watch::Receiver<StopwatchView> {
        self.view.clone()
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Abort the event loop, the tick run and all pending timers.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.torn_down = true;
        let released = lock(&self.subscriptions).release_all();
        tracing::info!(released, "Stopwatch torn down");
    }
}

impl Drop for StopwatchHandle {
    fn drop(&mut self) {
        self.teardown();
    }
}

struct EventLoop {
    state: StopwatchState,
    format: ClockFormat,
    quiet_period: Duration,
    engine: TickEngine,
    batcher: ClickBatcher,
    tx: UnboundedSender<Input>,
    view_tx: watch::Sender<StopwatchView>,
    subscriptions: SharedSubscriptions,
}

impl EventLoop {
    async fn run(mut self, mut rx: UnboundedReceiver<Input>) {
        while let Some(input) = rx.recv().await {
            self.handle_input(input);
        }
    }

    fn handle_input(&mut self, input: Input) {
        match input {
            Input::Click(Control::Wait) => {
                let token = self.batcher.click();
                self.arm_quiet_timer(token);
            }
            Input::Click(control) => {
                if let Some(signal) = signal_for_click(&self.state, control) {
                    self.apply(signal);
                }
            }
            Input::Tick { run } => {
                if self.engine.accepts(run) {
                    self.apply(StopwatchSignal::Tick);
                } else {
                    tracing::trace!(run, "Dropping tick from cancelled run");
                }
            }
            Input::QuietPeriodElapsed { token } => {
                if let Some(signal) = self.batcher.quiet_elapsed(token) {
                    self.apply(signal);
                }
            }
        }
    }

    fn arm_quiet_timer(&mut self, token: QuietToken) {
        let tx = self.tx.clone();
        let quiet_period = self.quiet_period;
        let task = tokio::spawn(async move {
            tokio::time::sleep(quiet_period).await;
            let _ = tx.send(Input::QuietPeriodElapsed { token });
        });
        lock(&self.subscriptions).register("quiet-period", task.abort_handle());
    }

    fn apply(&mut self, signal: StopwatchSignal) {
        let before = self.state;
        self.state = transition(before, signal);

        match engine_command(&before, &self.state) {
            Some(EngineCommand::Arm) => {
                let handle = self.engine.arm(self.tx.clone(), |run| Input::Tick { run });
                lock(&self.subscriptions).register("tick", handle);
            }
            Some(EngineCommand::Disarm) => self.engine.disarm(),
            None => {}
        }

        if signal != StopwatchSignal::Tick {
            tracing::debug!(
                ?signal,
                running = self.state.is_running(),
                elapsed = self.state.elapsed_secs(),
                "Stopwatch transition"
            );
        }

        let view = self.state.view(self.format);
        self.view_tx.send_if_modified(|current| {
            if *current == view {
                false
            } else {
                *current = view;
                true
            }
        });
    }
}
