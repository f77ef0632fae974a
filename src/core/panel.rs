//! Conversion panel component
//!
//! The panel is a pure function of the latest raw input: each edit fully
//! recomputes the derived state and rewrites the four display surfaces (two
//! value fields, the error banner, the freezing badge). No history is kept.

use crate::core::convert::{
    celsius_to_fahrenheit, celsius_to_kelvin, is_freezing, parse_leading_float, ConversionError,
};
use crate::surface::{DisplaySurface, Element};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

/// Display defaults shown for empty input (the 0°C conversions)
pub const DEFAULT_FAHRENHEIT_TEXT: &str = "32.00°F";
pub const DEFAULT_KELVIN_TEXT: &str = "273.15K";

/// Text forced into both value fields while an error is shown
pub const ERROR_FIELD_TEXT: &str = "ERR";

/// Derived state of the conversion panel
#[derive(Debug, Clone, PartialEq)]
pub enum ConversionState {
    /// Input field is empty; defaults are shown
    Empty,
    /// Input failed validation
    Invalid { error: ConversionError },
    /// Valid Celsius reading with its derived values
    Valid {
        celsius: f64,
        fahrenheit: f64,
        kelvin: f64,
        below_freezing: bool,
    },
}

impl ConversionState {
    /// Derive the panel state from a raw input string
    pub fn from_input(raw: &str) -> Self {
        if raw.is_empty() {
            return ConversionState::Empty;
        }

        let Some(celsius) = parse_leading_float(raw) else {
            return ConversionState::Invalid {
                error: ConversionError::NotANumber,
            };
        };

        match (celsius_to_fahrenheit(celsius), celsius_to_kelvin(celsius)) {
            (Ok(fahrenheit), Ok(kelvin)) => ConversionState::Valid {
                celsius,
                fahrenheit,
                kelvin,
                below_freezing: is_freezing(celsius),
            },
            _ => ConversionState::Invalid {
                error: ConversionError::BelowAbsoluteZero,
            },
        }
    }

    pub fn error(&self) -> Option<ConversionError> {
        match self {
            ConversionState::Invalid { error } => Some(*error),
            _ => None,
        }
    }
}

/// The conversion panel, bound to an injected display surface
pub struct ConversionPanel<S> {
    surface: Arc<Mutex<S>>,
    state: ConversionState,
}

impl<S: DisplaySurface> ConversionPanel<S> {
    pub fn new(surface: Arc<Mutex<S>>) -> Self {
        Self {
            surface,
            state: ConversionState::Empty,
        }
    }

    /// Recompute the panel from the latest raw input and rewrite the surface
    pub async fn on_input_changed(&mut self, raw: &str) {
        let state = ConversionState::from_input(raw);
        debug!(?state, raw, "conversion input changed");

        let mut surface = self.surface.lock().await;
        match &state {
            ConversionState::Empty => {
                surface.set_text(Element::FahrenheitValue, DEFAULT_FAHRENHEIT_TEXT);
                surface.set_text(Element::KelvinValue, DEFAULT_KELVIN_TEXT);
                surface.hide(Element::ErrorBanner);
                // 0°C is at the freezing point
                surface.show(Element::FreezingBadge);
            }
            ConversionState::Invalid { error } => {
                surface.set_text(Element::ErrorBanner, &error.to_string());
                surface.show(Element::ErrorBanner);
                surface.set_text(Element::FahrenheitValue, ERROR_FIELD_TEXT);
                surface.set_text(Element::KelvinValue, ERROR_FIELD_TEXT);
                surface.hide(Element::FreezingBadge);
            }
            ConversionState::Valid {
                fahrenheit,
                kelvin,
                below_freezing,
                ..
            } => {
                surface.hide(Element::ErrorBanner);
                surface.set_text(Element::FahrenheitValue, &format!("{fahrenheit:.2}°F"));
                surface.set_text(Element::KelvinValue, &format!("{kelvin:.2}K"));
                if *below_freezing {
                    surface.show(Element::FreezingBadge);
                } else {
                    surface.hide(Element::FreezingBadge);
                }
            }
        }
        drop(surface);

        self.state = state;
    }

    pub fn state(&self) -> &ConversionState {
        &self.state
    }
}
