//! Stopwatch widget component.
//!
//! Drives the shared state machine from stopwatch-core with browser timers.
//! The tick run and the pending quiet-period timeout are the only tasks the
//! widget spawns; both are cancelled when the component unmounts.

use dioxus::core::Task;
use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use stopwatch_core::{
    ClickBatcher, Control, EngineCommand, StopwatchConfig, StopwatchConfigExt, StopwatchSignal,
    StopwatchState, WidgetVariant, engine_command, signal_for_click, transition,
};

/// Caption of the start/stop button in the counter variant
const COUNTER_TOGGLE_LABEL: &str = "Start / Stop";

fn timeout_ms(ms: u64) -> u32 {
    u32::try_from(ms).unwrap_or(u32::MAX)
}

/// Signals backing one widget instance. Copy so every handler and task can
/// hold its own handle.
#[derive(Clone, Copy)]
struct Widget {
    state: Signal<StopwatchState>,
    batcher: Signal<ClickBatcher>,
    /// Id of the active tick run; bumped whenever ticking stops
    run: Signal<u64>,
    tick_task: Signal<Option<Task>>,
    quiet_task: Signal<Option<Task>>,
    tick_ms: u32,
    window_ms: u32,
}

impl Widget {
    fn click(mut self, control: Control) {
        if control == Control::Wait {
            let token = self.batcher.write().click();
            self.arm_quiet_timer(token);
            return;
        }

        let signal = signal_for_click(&self.state.peek(), control);
        if let Some(signal) = signal {
            self.apply(signal);
        }
    }

    fn apply(mut self, signal: StopwatchSignal) {
        let before = *self.state.peek();
        let after = transition(before, signal);
        self.state.set(after);

        match engine_command(&before, &after) {
            Some(EngineCommand::Arm) => self.arm_ticks(),
            Some(EngineCommand::Disarm) => self.disarm_ticks(),
            None => {}
        }

        if signal != StopwatchSignal::Tick {
            tracing::debug!(?signal, running = after.is_running(), "Stopwatch transition");
        }
    }

    fn arm_ticks(mut self) {
        self.disarm_ticks();
        let run = *self.run.peek();
        let widget = self;

        let task = spawn(async move {
            // First tick lands immediately
            loop {
                if *widget.run.peek() != run {
                    break;
                }
                widget.apply(StopwatchSignal::Tick);
                TimeoutFuture::new(widget.tick_ms).await;
            }
        });
        self.tick_task.set(Some(task));
    }

    fn disarm_ticks(mut self) {
        let next = self.run.peek().wrapping_add(1);
        self.run.set(next);
        if let Some(task) = self.tick_task.write().take() {
            task.cancel();
        }
    }

    fn arm_quiet_timer(mut self, token: stopwatch_core::QuietToken) {
        if let Some(previous) = self.quiet_task.write().take() {
            previous.cancel();
        }

        let mut widget = self;
        let task = spawn(async move {
            TimeoutFuture::new(widget.window_ms).await;
            let signal = widget.batcher.write().quiet_elapsed(token);
            if let Some(signal) = signal {
                widget.apply(signal);
            }
        });
        self.quiet_task.set(Some(task));
    }

    /// Cancel every task the widget spawned, whatever state it is in.
    fn release_all(self) {
        for mut slot in [self.tick_task, self.quiet_task] {
            // Use try_write to handle the signal being dropped during unmount
            if let Ok(mut task) = slot.try_write() {
                if let Some(task) = task.take() {
                    task.cancel();
                }
            }
        }
    }
}

#[component]
pub fn Stopwatch(config: StopwatchConfig) -> Element {
    let config = use_hook(move || match config.validate() {
        Ok(()) => config,
        Err(err) => {
            tracing::warn!(%err, "Invalid stopwatch config, using defaults");
            StopwatchConfig::default()
        }
    });

    let widget = Widget {
        state: use_signal(StopwatchState::new),
        batcher: use_signal(ClickBatcher::new),
        run: use_signal(|| 0u64),
        tick_task: use_signal(|| None),
        quiet_task: use_signal(|| None),
        tick_ms: timeout_ms(config.tick_interval_ms),
        window_ms: timeout_ms(config.double_click_window_ms),
    };

    use_drop(move || widget.release_all());

    let view = widget.state.read().view(config.clock_format);
    let (reading, toggle_label) = match config.variant {
        WidgetVariant::Clock => (view.display.clone(), view.button_label.clone()),
        WidgetVariant::Counter => (
            view.elapsed_secs.to_string(),
            COUNTER_TOGGLE_LABEL.to_string(),
        ),
    };
    let container_class = if view.running {
        "stopwatch running"
    } else {
        "stopwatch"
    };

    rsx! {
        div { class: "{container_class}",
            span { class: "stopwatch-reading", "{reading}" }
            div { class: "stopwatch-controls",
                button {
                    "data-role": Control::StartStop.role(),
                    onclick: move |_| widget.click(Control::StartStop),
                    "{toggle_label}"
                }
                button {
                    "data-role": Control::Reset.role(),
                    onclick: move |_| widget.click(Control::Reset),
                    "Reset"
                }
                button {
                    "data-role": Control::Wait.role(),
                    title: "Double-click to pause",
                    onclick: move |_| widget.click(Control::Wait),
                    "Wait"
                }
            }
        }
    }
}
