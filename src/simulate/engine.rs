//! Pipeline simulator - plays a timeline against the display surface
//!
//! `trigger()` is the whole public contract: it resets the surface, spawns a
//! driver task that fires each scheduled effect at its absolute offset, and
//! refuses to start while a run is already in progress. Once triggered, every
//! effect fires; there is no cancellation path and no failure outcome.

use crate::core::state::SimulatorState;
use crate::core::timeline::{StepKind, Timeline};
use crate::simulate::schedule::build_schedule;
use crate::surface::{DisplaySurface, LogEntry, StatusIndicator};
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, info};
use uuid::Uuid;

/// Events emitted as a run progresses
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SimulationEvent {
    RunStarted {
        run_id: Uuid,
        timeline: String,
        total_steps: usize,
    },
    StepFired {
        run_id: Uuid,
        index: usize,
        message: String,
        kind: StepKind,
        progress_percent: u8,
    },
    RunCompleted {
        run_id: Uuid,
    },
}

/// Type for event handlers
pub type EventHandler = Arc<dyn Fn(SimulationEvent) + Send + Sync>;

/// Scripted pipeline simulator bound to a display surface
pub struct PipelineSimulator<S> {
    timeline: Arc<Timeline>,
    surface: Arc<Mutex<S>>,
    state: Arc<Mutex<SimulatorState>>,
    event_handlers: Arc<std::sync::Mutex<Vec<EventHandler>>>,
}

impl<S: DisplaySurface + Send + 'static> PipelineSimulator<S> {
    pub fn new(timeline: Timeline, surface: Arc<Mutex<S>>) -> Self {
        Self {
            timeline: Arc::new(timeline),
            surface,
            state: Arc::new(Mutex::new(SimulatorState::new())),
            event_handlers: Arc::new(std::sync::Mutex::new(Vec::new())),
        }
    }

    /// Add an event handler
    pub fn add_event_handler<F>(&self, handler: F)
    where
        F: Fn(SimulationEvent) + Send + Sync + 'static,
    {
        self.event_handlers
            .lock()
            .expect("event handler registry poisoned")
            .push(Arc::new(handler));
    }

    /// Snapshot of the current run state
    pub async fn state(&self) -> SimulatorState {
        self.state.lock().await.clone()
    }

    /// Start a run, unless one is already in progress.
    ///
    /// Returns the driver task handle, or `None` when the trigger was ignored
    /// because a run is underway. An ignored trigger has no observable
    /// effect: the log is not cleared and nothing is scheduled.
    pub async fn trigger(&self) -> Option<JoinHandle<()>> {
        let run_id = {
            let mut state = self.state.lock().await;
            if state.is_running() {
                debug!("trigger ignored: run already in progress");
                return None;
            }
            state.begin()
        };

        {
            let mut surface = self.surface.lock().await;
            surface.clear_log();
            surface.set_trigger_enabled(false);
            surface.set_status(StatusIndicator::Running);
            surface.set_progress(0);
        }

        info!(%run_id, timeline = %self.timeline.name, "pipeline run started");
        emit(
            &self.event_handlers,
            SimulationEvent::RunStarted {
                run_id,
                timeline: self.timeline.name.clone(),
                total_steps: self.timeline.len(),
            },
        );

        let schedule = build_schedule(&self.timeline);
        let surface = Arc::clone(&self.surface);
        let state = Arc::clone(&self.state);
        let handlers = Arc::clone(&self.event_handlers);

        let handle = tokio::spawn(async move {
            let started = tokio::time::Instant::now();

            for (index, effect) in schedule.into_iter().enumerate() {
                tokio::time::sleep_until(started + effect.at).await;

                let entry = LogEntry::now(effect.message.clone(), effect.kind);
                {
                    let mut surface = surface.lock().await;
                    surface.append_log_entry(&entry);
                    surface.set_progress(effect.progress_percent);
                    if effect.completes_run {
                        surface.set_status(StatusIndicator::Success);
                        surface.set_trigger_enabled(true);
                    }
                }

                emit(
                    &handlers,
                    SimulationEvent::StepFired {
                        run_id,
                        index,
                        message: effect.message,
                        kind: effect.kind,
                        progress_percent: effect.progress_percent,
                    },
                );

                if effect.completes_run {
                    state.lock().await.complete();
                    info!(%run_id, "pipeline run completed");
                    emit(&handlers, SimulationEvent::RunCompleted { run_id });
                }
            }
        });

        Some(handle)
    }
}

/// Emit an event to all registered handlers
fn emit(handlers: &std::sync::Mutex<Vec<EventHandler>>, event: SimulationEvent) {
    let handlers = handlers.lock().expect("event handler registry poisoned");
    for handler in handlers.iter() {
        handler(event.clone());
    }
}
