//! Timing pieces of the widget
//!
//! This module provides:
//! - **Double-click batcher**: debounce-and-count detection for the wait control
//! - **Tick engine**: restartable one-second tick source (native runtime only)

mod double_click;
#[cfg(feature = "runtime")]
mod engine;

pub use double_click::{ClickBatcher, DOUBLE_CLICK_CLICKS, QuietToken};
#[cfg(feature = "runtime")]
pub use engine::TickEngine;
