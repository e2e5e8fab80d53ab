use stopwatch_core::{StopwatchConfig, StopwatchHandle, StopwatchView, WidgetVariant};
use tokio::task::JoinHandle;

use crate::commands::render;

/// Holds all state for the terminal session.
/// This is a lightweight container - the widget logic lives in stopwatch-core.
pub struct CliContext {
    pub config: StopwatchConfig,
    pub stopwatch: StopwatchHandle,
    renderer: Option<JoinHandle<()>>,
}

impl CliContext {
    /// Spawn the widget on the current runtime. Must be called inside tokio.
    pub fn new(config: StopwatchConfig) -> Self {
        let stopwatch = stopwatch_core::spawn(&config);
        Self {
            config,
            stopwatch,
            renderer: None,
        }
    }

    /// Print every new view as it is published
    pub fn start_renderer(&mut self) {
        let mut views = self.stopwatch.subscribe();
        let variant = self.config.variant;
        let handle = tokio::spawn(async move {
            while views.changed().await.is_ok() {
                let view: StopwatchView = views.borrow_and_update().clone();
                println!("{}", render(&view, variant));
            }
        });
        if let Some(old) = self.renderer.replace(handle) {
            old.abort();
        }
    }

    pub fn variant(&self) -> WidgetVariant {
        self.config.variant
    }

    /// Tear the widget down and stop rendering
    pub fn shutdown(&mut self) {
        self.stopwatch.teardown();
        if let Some(renderer) = self.renderer.take() {
            renderer.abort();
        }
    }
}
