//! Shared configuration types for the stopwatch widget
//!
//! This crate contains serializable types that are shared between the native
//! runtime (stopwatch-core) and the WASM frontend (stopwatch-ui).

use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_TICK_INTERVAL_MS: u64 = 1000;
pub const DEFAULT_DOUBLE_CLICK_WINDOW_MS: u64 = 300;

// ─────────────────────────────────────────────────────────────────────────────
// Controls
// ─────────────────────────────────────────────────────────────────────────────

/// The three clickable controls of the widget.
///
/// Each control is identified in markup by its `data-role` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Control {
    StartStop,
    Reset,
    Wait,
}

impl Control {
    /// Value of the `data-role` attribute carried by this control
    pub fn role(&self) -> &'static str {
        match self {
            Control::StartStop => "start-stop",
            Control::Reset => "reset",
            Control::Wait => "wait",
        }
    }

    /// Resolve a `data-role` attribute value back to a control
    pub fn from_role(role: &str) -> Option<Self> {
        Self::all().iter().copied().find(|c| c.role() == role)
    }

    pub fn all() -> &'static [Control] {
        &[Control::StartStop, Control::Reset, Control::Wait]
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Display
// ─────────────────────────────────────────────────────────────────────────────

/// How elapsed seconds are rendered as `HH:mm:ss`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClockFormat {
    /// Hours slot advances once per 60 seconds, minutes slot shows `s % 60`,
    /// seconds slot stays `00`. Hours wrap at 24.
    #[default]
    MinuteHours,
    /// Conventional elapsed time: hours, minutes and seconds.
    Elapsed,
}

/// Which fields the widget renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WidgetVariant {
    /// Raw elapsed seconds and a fixed start/stop caption
    Counter,
    /// Formatted clock string and a Start/Stop button label
    #[default]
    Clock,
}

/// Snapshot of the presentation state handed to a view layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StopwatchView {
    pub running: bool,
    pub elapsed_secs: u64,
    /// Clock rendering of `elapsed_secs`
    pub display: String,
    /// "Start" while idle, "Stop" while running
    pub button_label: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration
// ─────────────────────────────────────────────────────────────────────────────

fn default_tick_interval_ms() -> u64 {
    DEFAULT_TICK_INTERVAL_MS
}

fn default_double_click_window_ms() -> u64 {
    DEFAULT_DOUBLE_CLICK_WINDOW_MS
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StopwatchConfig {
    /// Period between ticks while running
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,
    /// Quiet period that closes a batch of wait clicks
    #[serde(default = "default_double_click_window_ms")]
    pub double_click_window_ms: u64,
    #[serde(default)]
    pub clock_format: ClockFormat,
    #[serde(default)]
    pub variant: WidgetVariant,
}

impl StopwatchConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn double_click_window(&self) -> Duration {
        Duration::from_millis(self.double_click_window_ms)
    }
}

impl Default for StopwatchConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            double_click_window_ms: DEFAULT_DOUBLE_CLICK_WINDOW_MS,
            clock_format: ClockFormat::default(),
            variant: WidgetVariant::default(),
        }
    }
}
