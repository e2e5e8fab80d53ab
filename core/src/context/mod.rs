mod config;
#[cfg(feature = "runtime")]
mod subscriptions;

pub use config::{ClockFormat, StopwatchConfig, StopwatchConfigExt, WidgetVariant};
#[cfg(feature = "runtime")]
pub use subscriptions::Subscriptions;
