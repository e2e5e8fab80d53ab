//! UI Components

pub mod stopwatch;

pub use stopwatch::Stopwatch;
