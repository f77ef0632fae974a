//! Playback schedule - turns a timeline into an ordered effect list
//!
//! The timeline stays pure data; this module compiles it into the concrete
//! effects the engine dispatches, so the dispatch mechanism never inspects
//! timeline internals.

use crate::core::timeline::{StepKind, Timeline};
use std::time::Duration;

/// One deferred display effect, keyed by its absolute offset from trigger time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledEffect {
    /// Offset from trigger time at which the effect fires
    pub at: Duration,

    /// Log line to append
    pub message: String,
    pub kind: StepKind,

    /// Progress bar position after the effect
    pub progress_percent: u8,

    /// Whether this effect finishes the run (the 100% step)
    pub completes_run: bool,
}

/// Compile a timeline into its playback schedule.
///
/// Effects come out in firing order because timeline offsets strictly
/// increase.
pub fn build_schedule(timeline: &Timeline) -> Vec<ScheduledEffect> {
    timeline
        .steps()
        .iter()
        .map(|step| ScheduledEffect {
            at: step.at,
            message: step.message.clone(),
            kind: step.kind,
            progress_percent: step.progress_percent,
            completes_run: step.progress_percent == 100,
        })
        .collect()
}
