/// Semantic signals fed into the stopwatch state machine.
///
/// Start, Stop and Reset come straight from control clicks. Wait is
/// synthesized by the double-click batcher and Tick by the timing engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StopwatchSignal {
    Start,
    Stop,
    /// Double click on the wait control
    Wait,
    Reset,
    Tick,
}
