//! Timeline domain model
//!
//! A timeline is an ordered, immutable sequence of display steps fixed before
//! a run starts. Steps fire at absolute offsets from trigger time; offsets
//! must strictly increase and the final step must carry 100% progress, since
//! that step doubles as the completion signal.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Visual category of a timeline step's log line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StepKind {
    /// Neutral progress message
    #[default]
    Info,
    /// A command being "executed"
    #[serde(alias = "cmd")]
    Command,
    /// A successful check or final result
    Success,
}

/// A single scripted step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineStep {
    /// Log line appended when the step fires
    pub message: String,
    pub kind: StepKind,
    /// Progress bar position after this step (0..=100)
    pub progress_percent: u8,
    /// Absolute offset from trigger time
    pub at: Duration,
}

/// Validation errors for timeline construction
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimelineError {
    #[error("timeline has no steps")]
    Empty,

    #[error("step {index}: progress {percent}% exceeds 100%")]
    ProgressOutOfRange { index: usize, percent: u8 },

    #[error("step {index}: progress regresses from {previous}% to {percent}%")]
    ProgressRegressed {
        index: usize,
        previous: u8,
        percent: u8,
    },

    #[error("step {index}: offset {at_ms}ms does not increase past {previous_ms}ms")]
    OffsetsNotIncreasing {
        index: usize,
        at_ms: u64,
        previous_ms: u64,
    },

    #[error("final step carries {percent}% progress; a timeline must end at 100%")]
    IncompleteFinalStep { percent: u8 },
}

/// A validated, ordered step sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timeline {
    pub name: String,
    steps: Vec<TimelineStep>,
}

impl Timeline {
    /// Build a timeline, checking the ordering invariants
    pub fn new(name: impl Into<String>, steps: Vec<TimelineStep>) -> Result<Self, TimelineError> {
        if steps.is_empty() {
            return Err(TimelineError::Empty);
        }

        let mut previous_percent = 0u8;
        let mut previous_at: Option<Duration> = None;

        for (index, step) in steps.iter().enumerate() {
            if step.progress_percent > 100 {
                return Err(TimelineError::ProgressOutOfRange {
                    index,
                    percent: step.progress_percent,
                });
            }
            if step.progress_percent < previous_percent {
                return Err(TimelineError::ProgressRegressed {
                    index,
                    previous: previous_percent,
                    percent: step.progress_percent,
                });
            }
            if let Some(prev) = previous_at {
                if step.at <= prev {
                    return Err(TimelineError::OffsetsNotIncreasing {
                        index,
                        at_ms: step.at.as_millis() as u64,
                        previous_ms: prev.as_millis() as u64,
                    });
                }
            }
            previous_percent = step.progress_percent;
            previous_at = Some(step.at);
        }

        let last = steps.last().expect("checked non-empty");
        if last.progress_percent != 100 {
            return Err(TimelineError::IncompleteFinalStep {
                percent: last.progress_percent,
            });
        }

        Ok(Self {
            name: name.into(),
            steps,
        })
    }

    pub fn steps(&self) -> &[TimelineStep] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Total play time: the offset of the final step
    pub fn total_duration(&self) -> Duration {
        self.steps.last().map(|s| s.at).unwrap_or_default()
    }

    /// The built-in reference timeline
    pub fn reference() -> Self {
        let step = |message: &str, kind, progress_percent, at_ms| TimelineStep {
            message: message.to_string(),
            kind,
            progress_percent,
            at: Duration::from_millis(at_ms),
        };

        let steps = vec![
            step(
                "Loading environment from .github/workflows/main.yml...",
                StepKind::Info,
                10,
                500,
            ),
            step(
                "Running: docker build -t temp-converter-prod .",
                StepKind::Command,
                25,
                1200,
            ),
            step(
                "Python 3.11 environment initialized successfully.",
                StepKind::Info,
                40,
                2000,
            ),
            step("Installing dependencies: pytest...", StepKind::Info, 55, 2800),
            step("Running Unit Tests: tests/test_app.py", StepKind::Info, 70, 3500),
            step(
                "✔ Test [Happy Path: 0C to 32F] PASSED",
                StepKind::Success,
                80,
                4200,
            ),
            step(
                "✔ Test [Safety: Absolute Zero Check] PASSED",
                StepKind::Success,
                90,
                4800,
            ),
            step(
                "Deployment Complete. Status: Build Success.",
                StepKind::Success,
                100,
                5500,
            ),
        ];

        Self::new("Reference CI timeline", steps).expect("reference timeline is valid")
    }
}
