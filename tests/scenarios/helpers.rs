//! Test utility functions for thermoci

use std::collections::HashMap;
use std::sync::Arc;
use thermoci::surface::{DisplaySurface, Element, LogEntry, StatusIndicator};
use thermoci::{ConversionPanel, PipelineSimulator, SimulationEvent, Timeline};
use tokio::sync::Mutex;

/// Recording surface that captures every mutation for assertions
#[derive(Debug, Default)]
pub struct MemorySurface {
    pub texts: HashMap<Element, String>,
    pub visible: HashMap<Element, bool>,
    pub log: Vec<LogEntry>,
    /// Every progress value ever set, in order
    pub progress_history: Vec<u8>,
    pub status_history: Vec<StatusIndicator>,
    pub trigger_enabled: bool,
    pub log_cleared_count: usize,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self {
            trigger_enabled: true,
            ..Self::default()
        }
    }

    pub fn text(&self, element: Element) -> &str {
        self.texts.get(&element).map(String::as_str).unwrap_or("")
    }

    pub fn is_visible(&self, element: Element) -> bool {
        self.visible.get(&element).copied().unwrap_or(false)
    }

    pub fn progress(&self) -> u8 {
        self.progress_history.last().copied().unwrap_or(0)
    }

    pub fn status(&self) -> StatusIndicator {
        self.status_history
            .last()
            .copied()
            .unwrap_or(StatusIndicator::Idle)
    }

    pub fn log_messages(&self) -> Vec<&str> {
        self.log.iter().map(|e| e.message.as_str()).collect()
    }
}

impl DisplaySurface for MemorySurface {
    fn set_text(&mut self, element: Element, value: &str) {
        self.texts.insert(element, value.to_string());
    }

    fn show(&mut self, element: Element) {
        self.visible.insert(element, true);
    }

    fn hide(&mut self, element: Element) {
        self.visible.insert(element, false);
    }

    fn clear_log(&mut self) {
        self.log.clear();
        self.log_cleared_count += 1;
    }

    fn append_log_entry(&mut self, entry: &LogEntry) {
        self.log.push(entry.clone());
    }

    fn set_progress(&mut self, percent: u8) {
        self.progress_history.push(percent);
    }

    fn set_status(&mut self, status: StatusIndicator) {
        self.status_history.push(status);
    }

    fn set_trigger_enabled(&mut self, enabled: bool) {
        self.trigger_enabled = enabled;
    }
}

pub type SharedSurface = Arc<Mutex<MemorySurface>>;

pub fn memory_surface() -> SharedSurface {
    Arc::new(Mutex::new(MemorySurface::new()))
}

/// Panel bound to a fresh recording surface
pub fn panel_fixture() -> (ConversionPanel<MemorySurface>, SharedSurface) {
    let surface = memory_surface();
    let panel = ConversionPanel::new(Arc::clone(&surface));
    (panel, surface)
}

/// Simulator bound to a fresh recording surface, collecting emitted events
pub fn simulator_fixture(
    timeline: Timeline,
) -> (
    PipelineSimulator<MemorySurface>,
    SharedSurface,
    Arc<std::sync::Mutex<Vec<SimulationEvent>>>,
) {
    let surface = memory_surface();
    let simulator = PipelineSimulator::new(timeline, Arc::clone(&surface));

    let events = Arc::new(std::sync::Mutex::new(Vec::new()));
    let sink = Arc::clone(&events);
    simulator.add_event_handler(move |event| {
        sink.lock().unwrap().push(event);
    });

    (simulator, surface, events)
}

/// The reference timeline's log messages, in firing order
pub fn reference_messages() -> Vec<String> {
    Timeline::reference()
        .steps()
        .iter()
        .map(|s| s.message.clone())
        .collect()
}

/// Assert the surface shows a valid conversion
pub async fn assert_conversion(surface: &SharedSurface, fahrenheit: &str, kelvin: &str) {
    let surface = surface.lock().await;
    assert_eq!(surface.text(Element::FahrenheitValue), fahrenheit);
    assert_eq!(surface.text(Element::KelvinValue), kelvin);
    assert!(
        !surface.is_visible(Element::ErrorBanner),
        "error banner should be hidden, but shows: {}",
        surface.text(Element::ErrorBanner)
    );
}

/// Assert the surface shows an error with both fields forced to "ERR"
pub async fn assert_error(surface: &SharedSurface, message_fragment: &str) {
    let surface = surface.lock().await;
    assert!(surface.is_visible(Element::ErrorBanner));
    assert!(
        surface.text(Element::ErrorBanner).contains(message_fragment),
        "banner '{}' should contain '{}'",
        surface.text(Element::ErrorBanner),
        message_fragment
    );
    assert_eq!(surface.text(Element::FahrenheitValue), "ERR");
    assert_eq!(surface.text(Element::KelvinValue), "ERR");
    assert!(!surface.is_visible(Element::FreezingBadge));
}
