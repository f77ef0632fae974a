//! CLI output formatting

use crate::core::panel::ConversionState;
use crate::core::state::RunState;
use console::Emoji;

// Re-export style
pub use console::style;

// Emojis for output
pub static CHECK: Emoji<'_, '_> = Emoji("✅ ", "✓ ");
pub static CROSS: Emoji<'_, '_> = Emoji("❌ ", "✗ ");
pub static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "i ");
pub static WARN: Emoji<'_, '_> = Emoji("⚠️  ", "!");
pub static ROCKET: Emoji<'_, '_> = Emoji("🚀 ", "> ");
pub static SNOWFLAKE: Emoji<'_, '_> = Emoji("❄️  ", "* ");

/// Format a run state for display
pub fn format_run_state(state: RunState) -> String {
    match state {
        RunState::Idle => style("IDLE").dim().to_string(),
        RunState::Running => style("RUNNING").yellow().to_string(),
        RunState::Completed => style("COMPLETED").green().to_string(),
    }
}

/// Format a conversion outcome as a human-readable report
pub fn format_conversion_report(state: &ConversionState) -> String {
    match state {
        ConversionState::Empty => format!(
            "{} {}  {}  {}{}",
            INFO,
            style("0.00°C").bold(),
            style("32.00°F / 273.15K").cyan(),
            SNOWFLAKE,
            style("FREEZING").blue()
        ),
        ConversionState::Invalid { error } => {
            format!("{} {}", CROSS, style(error).red())
        }
        ConversionState::Valid {
            celsius,
            fahrenheit,
            kelvin,
            below_freezing,
        } => {
            let badge = if *below_freezing {
                format!("  {}{}", SNOWFLAKE, style("FREEZING").blue())
            } else {
                String::new()
            };
            format!(
                "{} {}  {}{}",
                CHECK,
                style(format!("{celsius:.2}°C")).bold(),
                style(format!("{fahrenheit:.2}°F / {kelvin:.2}K")).cyan(),
                badge
            )
        }
    }
}

/// JSON payload for a conversion outcome
pub fn conversion_json(state: &ConversionState) -> serde_json::Value {
    match state {
        ConversionState::Empty => serde_json::json!({
            "celsius": 0.0,
            "fahrenheit": "32.00°F",
            "kelvin": "273.15K",
            "freezing": true,
        }),
        ConversionState::Invalid { error } => serde_json::json!({
            "error": error.to_string(),
            "fahrenheit": "ERR",
            "kelvin": "ERR",
        }),
        ConversionState::Valid {
            celsius,
            fahrenheit,
            kelvin,
            below_freezing,
        } => serde_json::json!({
            "celsius": celsius,
            "fahrenheit": format!("{fahrenheit:.2}°F"),
            "kelvin": format!("{kelvin:.2}K"),
            "freezing": below_freezing,
        }),
    }
}
