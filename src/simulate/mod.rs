//! Timeline playback engine

pub mod engine;
pub mod schedule;

pub use engine::{EventHandler, PipelineSimulator, SimulationEvent};
pub use schedule::{build_schedule, ScheduledEffect};
