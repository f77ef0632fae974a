//! Display surface abstraction
//!
//! Both components mutate the user-visible state exclusively through the
//! [`DisplaySurface`] capability injected at construction. Any rendering
//! target (terminal, test recorder, native window) can implement it.

pub mod terminal;

use crate::core::timeline::StepKind;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

pub use terminal::TerminalSurface;

/// Addressable display elements of the conversion panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    /// Formatted Fahrenheit value field
    FahrenheitValue,
    /// Formatted Kelvin value field
    KelvinValue,
    /// Validation error banner
    ErrorBanner,
    /// Badge shown at or below 0°C
    FreezingBadge,
}

/// One append-only entry in the pipeline log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    /// Wall-clock time the entry was appended
    pub timestamp: DateTime<Local>,
    pub message: String,
    pub kind: StepKind,
}

impl LogEntry {
    /// Create an entry stamped with the current local time
    pub fn now(message: impl Into<String>, kind: StepKind) -> Self {
        Self {
            timestamp: Local::now(),
            message: message.into(),
            kind,
        }
    }
}

/// Run status shown next to the trigger control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusIndicator {
    /// No run has started
    Idle,
    /// A run is in progress (amber, pulsing on surfaces that support it)
    Running,
    /// The last run completed (green, solid)
    Success,
}

impl StatusIndicator {
    /// The literal label text for this status
    pub fn label(&self) -> &'static str {
        match self {
            StatusIndicator::Idle => "IDLE",
            StatusIndicator::Running => "RUNNING CI",
            StatusIndicator::Success => "SUCCESS",
        }
    }
}

/// Rendering capability both components are injected with.
///
/// Implementations only need to reflect state; ordering and re-entrancy are
/// the caller's responsibility, and every method is invoked under the shared
/// surface lock.
pub trait DisplaySurface {
    /// Set the text of a display element
    fn set_text(&mut self, element: Element, value: &str);

    /// Make an element visible
    fn show(&mut self, element: Element);

    /// Hide an element
    fn hide(&mut self, element: Element);

    /// Discard all log entries
    fn clear_log(&mut self);

    /// Append one timestamped entry to the log
    fn append_log_entry(&mut self, entry: &LogEntry);

    /// Set the progress bar position and numeric label (0..=100)
    fn set_progress(&mut self, percent: u8);

    /// Set the run status indicator
    fn set_status(&mut self, status: StatusIndicator);

    /// Enable or disable the trigger control
    fn set_trigger_enabled(&mut self, enabled: bool);
}
