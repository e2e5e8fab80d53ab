mod display;
mod machine;
mod signal;

pub use display::{START_LABEL, STOP_LABEL, button_label, format_clock};
pub use machine::{
    EngineCommand, Phase, StopwatchState, engine_command, signal_for_click, transition,
};
pub use signal::StopwatchSignal;
