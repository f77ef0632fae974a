//! Run lifecycle state models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle of a simulated pipeline run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunState {
    /// No run has been triggered yet
    Idle,
    /// A run is in progress
    Running,
    /// The last run played through to 100%
    Completed,
}

/// Simulator-side run bookkeeping
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulatorState {
    pub status: RunState,

    /// Id of the current or most recent run
    pub run_id: Option<Uuid>,

    pub started_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl SimulatorState {
    pub fn new() -> Self {
        Self {
            status: RunState::Idle,
            run_id: None,
            started_at: None,
            completed_at: None,
        }
    }

    /// Whether a run is currently in progress
    pub fn is_running(&self) -> bool {
        self.status == RunState::Running
    }

    /// Start a new run and return its id
    pub fn begin(&mut self) -> Uuid {
        let run_id = Uuid::new_v4();
        self.status = RunState::Running;
        self.run_id = Some(run_id);
        self.started_at = Some(Utc::now());
        self.completed_at = None;
        run_id
    }

    /// Mark the current run as completed
    pub fn complete(&mut self) {
        self.status = RunState::Completed;
        self.completed_at = Some(Utc::now());
    }
}

impl Default for SimulatorState {
    fn default() -> Self {
        Self::new()
    }
}
