//! Terminal implementation of the display surface
//!
//! Log entries print above a live indicatif progress bar; the conversion
//! panel renders as a compact block on demand. There is no terminal analog
//! of the web original's fade-in transition, and auto-scroll is inherent to
//! appending.

use crate::core::timeline::StepKind;
use crate::surface::{DisplaySurface, Element, LogEntry, StatusIndicator};
use console::{style, Emoji};
use indicatif::{ProgressBar, ProgressStyle};

static SNOWFLAKE: Emoji<'_, '_> = Emoji("❄️  ", "* ");
static WARNING: Emoji<'_, '_> = Emoji("⚠️  ", "! ");
static DOT: Emoji<'_, '_> = Emoji("● ", "* ");

/// Terminal-rendered display surface
pub struct TerminalSurface {
    fahrenheit: String,
    kelvin: String,
    error_text: String,
    error_visible: bool,
    freezing_visible: bool,
    progress: ProgressBar,
    status: StatusIndicator,
    trigger_enabled: bool,
}

impl TerminalSurface {
    pub fn new() -> Self {
        let progress = ProgressBar::new(100);
        progress.set_style(
            ProgressStyle::default_bar()
                .template("[{bar:40.cyan/blue}] {pos:>3}%")
                .expect("valid progress template")
                .progress_chars("#>-"),
        );

        Self {
            fahrenheit: String::new(),
            kelvin: String::new(),
            error_text: String::new(),
            error_visible: false,
            freezing_visible: true,
            progress,
            status: StatusIndicator::Idle,
            trigger_enabled: true,
        }
    }

    /// Print the conversion block reflecting the current panel state
    pub fn render_panel(&self) {
        println!(
            "  {}  {}    {}  {}",
            style("°F").dim(),
            style(&self.fahrenheit).cyan().bold(),
            style("K").dim(),
            style(&self.kelvin).cyan().bold()
        );
        if self.freezing_visible {
            println!("  {}{}", SNOWFLAKE, style("FREEZING").blue().bold());
        }
        if self.error_visible {
            println!("  {}{}", WARNING, style(&self.error_text).red());
        }
    }

    pub fn trigger_enabled(&self) -> bool {
        self.trigger_enabled
    }

    fn format_log_entry(entry: &LogEntry) -> String {
        let time = entry.timestamp.format("%H:%M:%S");
        let message = match entry.kind {
            StepKind::Info => style(entry.message.as_str()).dim().to_string(),
            StepKind::Command => style(entry.message.as_str()).blue().bold().to_string(),
            StepKind::Success => style(entry.message.as_str()).green().to_string(),
        };
        format!("{} {}", style(format!("[{time}]")).black().bright(), message)
    }

    fn print_status(&self) {
        let line = match self.status {
            StatusIndicator::Idle => return,
            StatusIndicator::Running => format!(
                "{}{}",
                DOT,
                style(self.status.label()).yellow().bold()
            ),
            StatusIndicator::Success => format!(
                "{}{}",
                DOT,
                style(self.status.label()).green().bold()
            ),
        };
        self.progress.println(line);
    }
}

impl Default for TerminalSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplaySurface for TerminalSurface {
    fn set_text(&mut self, element: Element, value: &str) {
        match element {
            Element::FahrenheitValue => self.fahrenheit = value.to_string(),
            Element::KelvinValue => self.kelvin = value.to_string(),
            Element::ErrorBanner => self.error_text = value.to_string(),
            Element::FreezingBadge => {}
        }
    }

    fn show(&mut self, element: Element) {
        match element {
            Element::ErrorBanner => self.error_visible = true,
            Element::FreezingBadge => self.freezing_visible = true,
            _ => {}
        }
    }

    fn hide(&mut self, element: Element) {
        match element {
            Element::ErrorBanner => self.error_visible = false,
            Element::FreezingBadge => self.freezing_visible = false,
            _ => {}
        }
    }

    fn clear_log(&mut self) {
        // Scrollback cannot be cleared; mark the new run instead
        let width = term_size::dimensions_stdout().map(|(w, _)| w).unwrap_or(80);
        self.progress.reset();
        self.progress
            .println(style("─".repeat(width.min(60))).dim().to_string());
    }

    fn append_log_entry(&mut self, entry: &LogEntry) {
        self.progress.println(Self::format_log_entry(entry));
    }

    fn set_progress(&mut self, percent: u8) {
        self.progress.set_position(u64::from(percent));
    }

    fn set_status(&mut self, status: StatusIndicator) {
        self.status = status;
        self.print_status();
    }

    fn set_trigger_enabled(&mut self, enabled: bool) {
        self.trigger_enabled = enabled;
    }
}
