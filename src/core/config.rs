//! Timeline configuration from YAML

use crate::core::timeline::{StepKind, Timeline, TimelineStep};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Top-level timeline configuration loaded from YAML
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineConfig {
    /// Timeline name
    pub name: String,

    /// Ordered display steps
    pub steps: Vec<StepEntry>,
}

/// Step entry as defined in YAML
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepEntry {
    /// Log line appended when the step fires
    pub message: String,

    /// Visual category; defaults to `info`
    #[serde(default)]
    pub kind: StepKind,

    /// Progress bar position after this step (0..=100)
    pub progress: u8,

    /// Absolute offset from trigger time, in milliseconds
    pub at_ms: u64,
}

impl TimelineConfig {
    /// Load a timeline configuration from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read timeline file: {}", path.display()))?;
        Self::from_yaml(&contents)
    }

    /// Parse a timeline configuration from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).context("Failed to parse timeline YAML")
    }

    /// Convert into the validated domain timeline
    pub fn to_timeline(&self) -> Result<Timeline> {
        let steps = self
            .steps
            .iter()
            .map(|entry| TimelineStep {
                message: entry.message.clone(),
                kind: entry.kind,
                progress_percent: entry.progress,
                at: Duration::from_millis(entry.at_ms),
            })
            .collect();

        Timeline::new(self.name.clone(), steps)
            .with_context(|| format!("Invalid timeline '{}'", self.name))
    }
}
