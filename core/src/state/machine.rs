//! Stopwatch state machine
//!
//! The whole widget is two phases and five signals. Every transition is a
//! pure function of the previous state and the incoming signal, so hosts only
//! feed signals in and render whatever comes out:
//!
//! | from \ signal | Start   | Stop | Wait | Reset   | Tick        |
//! |---------------|---------|------|------|---------|-------------|
//! | Idle          | Running | Idle | Idle | Idle, 0 | Idle        |
//! | Running       | Running | Idle | Idle | Idle, 0 | Running, +1 |

use stopwatch_types::{ClockFormat, Control, StopwatchView};

use super::display::{button_label, format_clock};
use super::signal::StopwatchSignal;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Running,
}

/// Presentation state of one widget instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StopwatchState {
    elapsed_secs: u64,
    phase: Phase,
}

impl StopwatchState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed_secs
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn button_label(&self) -> &'static str {
        button_label(self.is_running())
    }

    pub fn display(&self, format: ClockFormat) -> String {
        format_clock(self.elapsed_secs, format)
    }

    pub fn view(&self, format: ClockFormat) -> StopwatchView {
        StopwatchView {
            running: self.is_running(),
            elapsed_secs: self.elapsed_secs,
            display: self.display(format),
            button_label: self.button_label().to_string(),
        }
    }
}

/// What the host must do with its tick source after a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineCommand {
    /// Begin a fresh tick sequence
    Arm,
    /// Cancel the current tick sequence
    Disarm,
}

pub fn transition(state: StopwatchState, signal: StopwatchSignal) -> StopwatchState {
    match (state.phase, signal) {
        (_, StopwatchSignal::Start) => StopwatchState {
            phase: Phase::Running,
            ..state
        },
        (_, StopwatchSignal::Stop | StopwatchSignal::Wait) => StopwatchState {
            phase: Phase::Idle,
            ..state
        },
        (_, StopwatchSignal::Reset) => StopwatchState::default(),
        (Phase::Running, StopwatchSignal::Tick) => StopwatchState {
            elapsed_secs: state.elapsed_secs.saturating_add(1),
            ..state
        },
        (Phase::Idle, StopwatchSignal::Tick) => state,
    }
}

/// Map a click on the start/stop or reset control to its signal.
///
/// Wait clicks return `None`: they only become a signal once the
/// double-click batcher closes a batch of exactly two.
pub fn signal_for_click(state: &StopwatchState, control: Control) -> Option<StopwatchSignal> {
    match control {
        Control::StartStop if state.is_running() => Some(StopwatchSignal::Stop),
        Control::StartStop => Some(StopwatchSignal::Start),
        Control::Reset => Some(StopwatchSignal::Reset),
        Control::Wait => None,
    }
}

/// Compare two states and tell the host whether its tick source changes.
pub fn engine_command(before: &StopwatchState, after: &StopwatchState) -> Option<EngineCommand> {
    match (before.is_running(), after.is_running()) {
        (false, true) => Some(EngineCommand::Arm),
        (true, false) => Some(EngineCommand::Disarm),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn running_with(elapsed_secs: u64) -> StopwatchState {
        StopwatchState {
            elapsed_secs,
            phase: Phase::Running,
        }
    }

    fn click(state: StopwatchState, control: Control) -> StopwatchState {
        match signal_for_click(&state, control) {
            Some(signal) => transition(state, signal),
            None => state,
        }
    }

    #[test]
    fn test_start_stop_parity() {
        let mut state = StopwatchState::new();
        for n in 1..=9 {
            state = click(state, Control::StartStop);
            assert_eq!(state.is_running(), n % 2 == 1, "after {n} clicks");
            let expected = if n % 2 == 1 { "Stop" } else { "Start" };
            assert_eq!(state.button_label(), expected);
        }
    }

    #[test]
    fn test_tick_only_counts_while_running() {
        let state = transition(StopwatchState::new(), StopwatchSignal::Tick);
        assert_eq!(state.elapsed_secs(), 0);

        let state = transition(running_with(0), StopwatchSignal::Tick);
        let state = transition(state, StopwatchSignal::Tick);
        assert_eq!(state.elapsed_secs(), 2);
        assert!(state.is_running());
    }

    #[test]
    fn test_reset_from_any_state() {
        for state in [StopwatchState::new(), running_with(0), running_with(42)] {
            let reset = transition(state, StopwatchSignal::Reset);
            assert_eq!(reset, StopwatchState::new());
            assert_eq!(reset.button_label(), "Start");
            assert_eq!(reset.display(ClockFormat::MinuteHours), "00:00:00");
        }

        let idle = transition(running_with(7), StopwatchSignal::Stop);
        assert_eq!(transition(idle, StopwatchSignal::Reset).elapsed_secs(), 0);
    }

    #[test]
    fn test_wait_keeps_elapsed() {
        let state = transition(running_with(12), StopwatchSignal::Wait);
        assert!(!state.is_running());
        assert_eq!(state.elapsed_secs(), 12);
        assert_eq!(state.button_label(), "Start");

        // Waiting while idle is a no-op
        assert_eq!(transition(state, StopwatchSignal::Wait), state);
    }

    #[test]
    fn test_restart_continues_from_current_count() {
        let state = transition(running_with(3), StopwatchSignal::Stop);
        let state = transition(state, StopwatchSignal::Start);
        let state = transition(state, StopwatchSignal::Tick);
        assert_eq!(state.elapsed_secs(), 4);
    }

    #[test]
    fn test_wait_control_needs_batcher() {
        assert_eq!(signal_for_click(&running_with(1), Control::Wait), None);
        assert_eq!(
            signal_for_click(&StopwatchState::new(), Control::Reset),
            Some(StopwatchSignal::Reset)
        );
    }

    #[test]
    fn test_engine_command() {
        let idle = StopwatchState::new();
        let running = running_with(0);
        assert_eq!(engine_command(&idle, &running), Some(EngineCommand::Arm));
        assert_eq!(engine_command(&running, &idle), Some(EngineCommand::Disarm));
        assert_eq!(engine_command(&running, &running_with(1)), None);
        assert_eq!(engine_command(&idle, &idle), None);
    }

    #[test]
    fn test_view_snapshot() {
        let view = running_with(61).view(ClockFormat::Elapsed);
        assert!(view.running);
        assert_eq!(view.elapsed_secs, 61);
        assert_eq!(view.display, "00:01:01");
        assert_eq!(view.button_label, "Stop");
    }
}
