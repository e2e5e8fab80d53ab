//! Stopwatch widget core
//!
//! The state machine, display formatting and double-click batcher are plain
//! synchronous code shared with the web frontend. The `runtime` feature adds
//! a tokio event loop that drives them for native hosts.

pub mod context;
pub mod error;
pub mod state;
pub mod timers;

#[cfg(feature = "runtime")]
pub mod runtime;

// Re-exports for convenience
pub use context::{ClockFormat, StopwatchConfig, StopwatchConfigExt, WidgetVariant};
pub use error::{ConfigError, StopwatchError};
pub use state::{
    EngineCommand, Phase, StopwatchSignal, StopwatchState, engine_command, format_clock,
    signal_for_click, transition,
};
pub use stopwatch_types::{Control, StopwatchView};
pub use timers::{ClickBatcher, QuietToken};

#[cfg(feature = "runtime")]
pub use runtime::{Input, StopwatchHandle, spawn};
