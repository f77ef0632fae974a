//! thermoci - temperature conversion dashboard with a scripted CI pipeline simulator

pub mod cli;
pub mod core;
pub mod simulate;
pub mod surface;

// Re-export commonly used types
pub use core::{
    ConversionError, ConversionPanel, ConversionState, RunState, SimulatorState, StepKind,
    Timeline, TimelineError, TimelineStep,
};
pub use simulate::{PipelineSimulator, SimulationEvent};
pub use surface::{DisplaySurface, Element, LogEntry, StatusIndicator, TerminalSurface};
