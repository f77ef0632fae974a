mod cli;
mod core;
mod simulate;
mod surface;

use anyhow::{Context, Result};
use cli::commands::{ConvertCommand, SimulateCommand, ValidateCommand, WatchCommand};
use cli::output::*;
use cli::{Cli, Command};
use core::config::TimelineConfig;
use core::convert::fahrenheit_to_celsius;
use core::panel::{ConversionPanel, ConversionState};
use core::timeline::Timeline;
use simulate::PipelineSimulator;
use std::io::Write;
use std::sync::Arc;
use surface::TerminalSurface;
use tokio::io::AsyncBufReadExt;
use tokio::sync::Mutex;
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::from_args();

    // Initialize logging
    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set logging subscriber")?;

    match &cli.command {
        Command::Convert(cmd) => convert_value(cmd),
        Command::Simulate(cmd) => simulate_timeline(cmd).await?,
        Command::Validate(cmd) => validate_timeline(cmd)?,
        Command::Watch(cmd) => watch_session(cmd).await?,
    }

    Ok(())
}

fn convert_value(cmd: &ConvertCommand) {
    if cmd.fahrenheit {
        convert_from_fahrenheit(cmd);
        return;
    }

    let state = ConversionState::from_input(&cmd.value);

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&conversion_json(&state)).unwrap_or_default());
    } else {
        println!("{}", format_conversion_report(&state));
    }

    if state.error().is_some() {
        std::process::exit(1);
    }
}

fn convert_from_fahrenheit(cmd: &ConvertCommand) {
    let parsed = core::convert::parse_leading_float(&cmd.value)
        .ok_or(core::convert::ConversionError::NotANumber)
        .and_then(fahrenheit_to_celsius);

    match parsed {
        Ok(celsius) => {
            if cmd.json {
                println!(
                    "{}",
                    serde_json::json!({ "fahrenheit": cmd.value, "celsius": format!("{celsius:.2}°C") })
                );
            } else {
                println!(
                    "{} {}  {}",
                    CHECK,
                    style(format!("{}°F", cmd.value.trim())).bold(),
                    style(format!("{celsius:.2}°C")).cyan()
                );
            }
        }
        Err(error) => {
            if cmd.json {
                println!("{}", serde_json::json!({ "error": error.to_string() }));
            } else {
                println!("{} {}", CROSS, style(error).red());
            }
            std::process::exit(1);
        }
    }
}

/// Load the timeline named on the command line, or the built-in reference one
fn load_timeline(file: Option<&str>) -> Result<Timeline> {
    match file {
        Some(path) => TimelineConfig::from_file(path)
            .context("Failed to load timeline config")?
            .to_timeline(),
        None => Ok(Timeline::reference()),
    }
}

async fn simulate_timeline(cmd: &SimulateCommand) -> Result<()> {
    let timeline = load_timeline(cmd.file.as_deref())?;

    println!(
        "{} Playing timeline: {} ({} steps)",
        ROCKET,
        style(&timeline.name).bold(),
        style(timeline.len()).cyan()
    );

    let surface = Arc::new(Mutex::new(TerminalSurface::new()));
    let simulator = PipelineSimulator::new(timeline, surface);
    simulator.add_event_handler(|event| {
        debug!(event = %serde_json::to_string(&event).unwrap_or_default(), "simulation event");
    });

    let handle = simulator
        .trigger()
        .await
        .expect("fresh simulator cannot already be running");
    handle.await.context("Simulation driver task failed")?;

    let state = simulator.state().await;
    let run_id = state.run_id.map(|id| id.to_string()).unwrap_or_default();
    println!(
        "\n{} Pipeline run ({}) completed {}",
        CHECK,
        style(&run_id[..8.min(run_id.len())]).dim(),
        style("successfully").green()
    );

    Ok(())
}

fn validate_timeline(cmd: &ValidateCommand) -> Result<()> {
    println!("{} Validating timeline...", INFO);

    let result = TimelineConfig::from_file(&cmd.file).and_then(|config| {
        let timeline = config.to_timeline()?;
        Ok((config, timeline))
    });

    match result {
        Ok((config, timeline)) => {
            println!("{} Timeline configuration is valid!", CHECK);
            println!("  Name: {}", style(&timeline.name).bold());
            println!("  Steps: {}", style(timeline.len()).cyan());
            println!(
                "  Duration: {}ms",
                style(timeline.total_duration().as_millis()).cyan()
            );

            if cmd.json {
                let json = serde_json::to_string_pretty(&config)?;
                println!("\n{}", json);
            }
            Ok(())
        }
        Err(e) => {
            println!("{} Validation failed:", CROSS);
            println!("  {}", style(e).red());
            std::process::exit(1);
        }
    }
}

async fn watch_session(cmd: &WatchCommand) -> Result<()> {
    let timeline = load_timeline(cmd.file.as_deref())?;

    let width = term_size::dimensions_stdout().map(|(w, _)| w).unwrap_or(80);
    let rule = "─".repeat(width.min(60));
    println!("{rule}");
    println!(
        "{} {}",
        ROCKET,
        style("thermoci watch — live conversion + pipeline trigger").bold()
    );
    println!(
        "  Type a Celsius value to convert, {} to start the pipeline, {} for the run state, {} to leave.",
        style("run").cyan().bold(),
        style("status").cyan().bold(),
        style("quit").cyan().bold()
    );
    println!("{rule}");

    let surface = Arc::new(Mutex::new(TerminalSurface::new()));
    let simulator = PipelineSimulator::new(timeline, Arc::clone(&surface));
    simulator.add_event_handler(|event| {
        debug!(event = %serde_json::to_string(&event).unwrap_or_default(), "simulation event");
    });

    let mut panel = ConversionPanel::new(Arc::clone(&surface));
    panel.on_input_changed("").await;
    surface.lock().await.render_panel();

    let mut lines = tokio::io::BufReader::new(tokio::io::stdin()).lines();
    prompt();

    while let Some(line) = lines.next_line().await.context("Failed to read stdin")? {
        match line.trim() {
            "quit" | "exit" => break,
            "run" => {
                // Ignored while a run is in progress; the driver prints as it fires
                simulator.trigger().await;
            }
            "status" => {
                let state = simulator.state().await;
                let trigger = if surface.lock().await.trigger_enabled() {
                    style("armed").green()
                } else {
                    style("disabled").dim()
                };
                println!(
                    "{} Pipeline: {}  trigger {}",
                    INFO,
                    format_run_state(state.status),
                    trigger
                );
            }
            _ => {
                panel.on_input_changed(&line).await;
                surface.lock().await.render_panel();
            }
        }
        prompt();
    }

    println!("{} Leaving watch session", INFO);
    Ok(())
}

fn prompt() {
    print!("{} ", style("temp>").dim());
    let _ = std::io::stdout().flush();
}
